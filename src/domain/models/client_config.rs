use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Environment variable consulted by [`ClientConfig::from_env`].
pub const DOMAIN_ENV_VAR: &str = "DX_AUTOCOMPLETE_DOMAIN";

/// Auth token descriptor accepted alongside the domain.
///
/// It is carried through configuration untouched; requests are not signed
/// with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header_or_query_name: Option<String>,
    #[serde(default)]
    is_query: bool,
}

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            header_or_query_name: None,
            is_query: false,
        }
    }

    pub fn in_header(value: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            header_or_query_name: Some(header.into()),
            is_query: false,
        }
    }

    pub fn in_query(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            header_or_query_name: Some(name.into()),
            is_query: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn header_or_query_name(&self) -> Option<&str> {
        self.header_or_query_name.as_deref()
    }

    pub fn is_query(&self) -> bool {
        self.is_query
    }
}

/// Client configuration: the base address plus an optional token.
///
/// Deserializes from the JSON options object
/// `{ "domain": "...", "token": { "value": "...", "headerOrQueryName": "...", "isQuery": false } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<AuthToken>,
}

impl ClientConfig {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: AuthToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reads the domain from `DX_AUTOCOMPLETE_DOMAIN`; `None` when unset.
    pub fn from_env() -> Option<Self> {
        std::env::var(DOMAIN_ENV_VAR).ok().map(Self::new)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Fails with [`DomainError::ConfigurationError`] when the domain is empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.domain.is_empty() {
            return Err(DomainError::configuration(
                "domain must be specified as a non-empty string",
            ));
        }
        Ok(())
    }
}

impl From<&str> for ClientConfig {
    fn from(domain: &str) -> Self {
        Self::new(domain)
    }
}

impl From<String> for ClientConfig {
    fn from(domain: String) -> Self {
        Self::new(domain)
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::domain::{DomainError, QueryParameters};

/// Parameters for one autocomplete call.
///
/// `input` is required; every other field is copied verbatim into the query
/// string when present. Values are not validated (e.g. `location` is not
/// checked to be `lat,lng`, `offset` may be negative or fractional).
///
/// Numbers are JSON numbers and render as JSON does (`500`, `1.5`, `1e21`).
/// Non-finite values cannot be represented and are never sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteParams {
    /// Pipe-separated `component:value` filters, e.g. `country:fr|country:be`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<String>,
    /// The text to complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// `latitude,longitude` to bias results around.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Position of the last input character used for matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Number>,
    /// Bias radius in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessiontoken: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strictbounds: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    /// Raw query parameters merged last, overriding derived ones on collision.
    #[serde(default, alias = "$queryParameters", skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_query_parameters: BTreeMap<String, String>,
}

impl AutocompleteParams {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
            ..Default::default()
        }
    }

    pub fn with_components(mut self, components: impl Into<String>) -> Self {
        self.components = Some(components.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_offset(mut self, offset: impl Into<Number>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Leaves `radius` unset when `radius` is NaN or infinite.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = number_from_f64(radius);
        self
    }

    pub fn with_sessiontoken(mut self, sessiontoken: impl Into<String>) -> Self {
        self.sessiontoken = Some(sessiontoken.into());
        self
    }

    pub fn with_strictbounds(mut self, strictbounds: bool) -> Self {
        self.strictbounds = Some(strictbounds);
        self
    }

    pub fn with_types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    pub fn with_extra_query_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.extra_query_parameters.insert(name.into(), value.into());
        self
    }

    /// Builds the query mapping: defined fields in declaration order, then the
    /// extra parameters.
    pub fn to_query_parameters(&self) -> Result<QueryParameters, DomainError> {
        let input = self
            .input
            .as_deref()
            .ok_or_else(|| DomainError::missing_parameter("input"))?;

        let mut params = QueryParameters::new();
        params.insert_opt("components", self.components.as_deref());
        params.insert("input", input);
        params.insert_opt("language", self.language.as_deref());
        params.insert_opt("location", self.location.as_deref());
        params.insert_opt("offset", self.offset.as_ref());
        params.insert_opt("radius", self.radius.as_ref());
        params.insert_opt("sessiontoken", self.sessiontoken.as_deref());
        params.insert_opt("strictbounds", self.strictbounds);
        params.insert_opt("types", self.types.as_deref());

        params.extend(
            self.extra_query_parameters
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        );

        Ok(params)
    }
}

/// Whole values become integers so `500.0` renders as `500`.
pub fn number_from_f64(value: f64) -> Option<Number> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}

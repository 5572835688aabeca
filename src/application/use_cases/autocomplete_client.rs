use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::application::HttpTransport;
use crate::domain::{
    append_query, AutocompleteParams, AutocompleteResponse, ClientConfig, DomainError,
    HttpMethod, HttpRequest, QueryParameters,
};

pub const AUTOCOMPLETE_PATH: &str = "/dx-customer/autocomplete";

/// Client for the `dx-customer` places autocomplete endpoint.
///
/// Holds immutable configuration only; every call is independent and issues
/// at most one request through the injected [`HttpTransport`].
pub struct AutocompleteClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl AutocompleteClient {
    pub fn from_config(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn from_domain(
        domain: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, DomainError> {
        Self::from_config(ClientConfig::new(domain), transport)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The domain as configured; the endpoint path is appended to it verbatim.
    pub fn base_url(&self) -> &str {
        self.config.domain()
    }

    /// Generic request primitive.
    ///
    /// Appends the serialized query string when `query` is non-empty, drops an
    /// empty JSON object body, sends, and parses the response body as JSON
    /// whatever the status code.
    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Value>,
        headers: Vec<(String, String)>,
        query: &QueryParameters,
    ) -> Result<Value, DomainError> {
        let url = append_query(url, query);
        let body = body
            .filter(|b| !matches!(b, Value::Object(map) if map.is_empty()))
            .map(|b| b.to_string());

        debug!("{} {}", method, url);

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await?;

        debug!("Response status {}", response.status);

        serde_json::from_str(&response.body).map_err(|e| {
            warn!(
                "Response body is not valid JSON (status {}): {}",
                response.status, e
            );
            DomainError::from(e)
        })
    }

    /// The query mapping a call with `params` would send.
    pub fn query_parameters(
        &self,
        params: &AutocompleteParams,
    ) -> Result<QueryParameters, DomainError> {
        params.to_query_parameters()
    }

    /// The full request URL a call with `params` would hit.
    pub fn autocomplete_url(&self, params: &AutocompleteParams) -> Result<String, DomainError> {
        let query = self.query_parameters(params)?;
        Ok(append_query(&self.endpoint_url(), &query))
    }

    /// `GET {domain}/dx-customer/autocomplete` with the parameters as query
    /// string.
    ///
    /// Fails with [`DomainError::MissingParameter`] before any request is
    /// made when `input` is absent.
    pub async fn fetch_autocomplete(&self, params: &AutocompleteParams) -> Result<Value, DomainError> {
        let query = self.query_parameters(params)?;
        let headers = vec![("Accept".to_string(), "application/json".to_string())];

        self.request(HttpMethod::Get, &self.endpoint_url(), None, headers, &query)
            .await
    }

    /// [`Self::fetch_autocomplete`] converted to [`AutocompleteResponse`].
    pub async fn fetch_predictions(
        &self,
        params: &AutocompleteParams,
    ) -> Result<AutocompleteResponse, DomainError> {
        let value = self.fetch_autocomplete(params).await?;
        Ok(serde_json::from_value(value)?)
    }

    fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url(), AUTOCOMPLETE_PATH)
    }
}

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::HttpTransport;
use crate::domain::{DomainError, HttpMethod, HttpRequest, HttpResponse};

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
///
/// No timeout is applied unless one is configured with [`Self::with_timeout`].
/// Connection pooling is reqwest's.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `timeout` to the whole request, connect through body.
    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DomainError::transport)?;
        Ok(Self { client })
    }

    fn method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Head => reqwest::Method::HEAD,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, DomainError> {
        let mut builder = self
            .client
            .request(Self::method(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder.send().await.map_err(DomainError::transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(DomainError::transport)?;

        debug!("ReqwestTransport: {} bytes with status {}", body.len(), status);

        Ok(HttpResponse { status, body })
    }
}

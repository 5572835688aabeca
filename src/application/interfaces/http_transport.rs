use async_trait::async_trait;

use crate::domain::{DomainError, HttpRequest, HttpResponse};

/// Performs one outbound HTTP exchange.
///
/// Implementors own connection handling, timeouts and TLS. They return the
/// status and raw body text for any response the server sends; only failures
/// to obtain a response at all are errors, reported as
/// [`DomainError::Transport`] carrying the underlying error unchanged.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, DomainError>;
}

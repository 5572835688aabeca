use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::HttpTransport;
use crate::domain::{DomainError, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
enum Reply {
    Respond(HttpResponse),
    Fail(io::ErrorKind, String),
}

/// In-process [`HttpTransport`] that records every request and answers each
/// one with the same scripted reply. Nothing leaves the process.
#[derive(Debug)]
pub struct RecordingTransport {
    reply: Reply,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn responding(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(Reply::Respond(HttpResponse::new(status, body)))
    }

    /// Every request fails with an `io::Error` of `kind`.
    pub fn failing(kind: io::ErrorKind, message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Fail(kind, message.into()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<HttpRequest>> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, DomainError> {
        debug!("RecordingTransport: {} {}", request.method, request.url);
        self.lock().push(request);

        match &self.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail(kind, message) => {
                Err(DomainError::transport(io::Error::new(*kind, message.clone())))
            }
        }
    }
}

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed error produced by an [`crate::application::HttpTransport`].
pub type TransportSource = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Failure reported by the transport, surfaced as-is.
    #[error(transparent)]
    Transport(TransportSource),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    pub fn transport(err: impl Into<TransportSource>) -> Self {
        Self::Transport(err.into())
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::ConfigurationError(_))
    }

    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::MissingParameter(_))
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError(_))
    }

    /// The original transport error, for callers that need to downcast it.
    pub fn transport_source(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::Transport(source) => Some(source.as_ref()),
            _ => None,
        }
    }
}

use thiserror::Error;

/// Failures that prevent a request from completing or its body from being understood
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid payload in {context}: {reason}")]
    InvalidPayload { context: String, reason: String },
}

impl TransportError {
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    pub fn invalid_payload(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is temporary
    pub fn is_temporary(&self) -> bool {
        match self {
            TransportError::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

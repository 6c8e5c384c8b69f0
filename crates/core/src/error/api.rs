use thiserror::Error;

/// Error reported by the remote service through a non-2xx status and a JSON error body.
///
/// `status` is the value declared in the body, which may differ from the
/// status line of the response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("API error (#{status}): {message}")]
pub struct ApiError {
    status: u16,
    message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Server-side and throttling failures
    pub fn is_temporary(&self) -> bool {
        self.status >= 500 || self.status == 429
    }
}

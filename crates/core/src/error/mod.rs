mod api;
mod argument;
mod config;
mod transport;

pub use api::ApiError;
pub use argument::{require_non_empty, ArgumentError};
pub use config::ConfigError;
pub use transport::TransportError;

use thiserror::Error;

/// Error returned by every fallible client operation.
///
/// A failed call produces exactly one of these; no partial result accompanies it.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(TransportError::Http(e))
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::Transport(TransportError::Url(e))
    }
}

impl Error {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Error::Api(ApiError::new(status, message))
    }

    /// The API failure carried by this error, if the server reported one
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Check if a caller-side retry could plausibly succeed.
    ///
    /// The client never retries on its own.
    pub fn is_temporary(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_temporary(),
            Error::Api(e) => e.is_temporary(),
            Error::InvalidArgument(_) | Error::Config(_) => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Transport(TransportError::Decode { .. })
            | Error::Transport(TransportError::InvalidPayload { .. }) => ErrorCategory::Decode,
            Error::Transport(_) => ErrorCategory::Transport,
            Error::Api(_) => ErrorCategory::Api,
            Error::InvalidArgument(_) => ErrorCategory::Argument,
            Error::Config(_) => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for classification and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Transport,
    Decode,
    Api,
    Argument,
    Configuration,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Transport => write!(f, "transport"),
            ErrorCategory::Decode => write!(f, "decode"),
            ErrorCategory::Api => write!(f, "api"),
            ErrorCategory::Argument => write!(f, "argument"),
            ErrorCategory::Configuration => write!(f, "configuration"),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_declared_status_and_message() {
        let error = Error::api(404, "Could not find a random quote.");

        let api = error.as_api().expect("expected an API failure");
        assert_eq!(api.status(), 404);
        assert_eq!(api.message(), "Could not find a random quote.");
        assert!(api.is_not_found());
        assert_eq!(error.category(), ErrorCategory::Api);
        assert_eq!(
            error.to_string(),
            "API error (#404): Could not find a random quote."
        );
    }

    #[test]
    fn test_temporary_classification() {
        assert!(Error::api(503, "unavailable").is_temporary());
        assert!(Error::api(429, "slow down").is_temporary());
        assert!(!Error::api(404, "missing").is_temporary());
        assert!(!Error::from(ArgumentError::empty("id")).is_temporary());
    }

    #[test]
    fn test_decode_errors_are_categorized_as_decode() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: Error = TransportError::decode("quote", source).into();

        assert_eq!(error.category(), ErrorCategory::Decode);
        assert!(error.as_api().is_none());
        assert!(!error.is_temporary());
        assert!(error.to_string().starts_with("Failed to decode quote"));
    }

    #[test]
    fn test_argument_error_message() {
        let error: Error = ArgumentError::less_than_one("page", 0u32).into();
        assert_eq!(error.category(), ErrorCategory::Argument);
        assert_eq!(
            error.to_string(),
            "Invalid argument: 'page' must not be less than one (got 0)"
        );
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("id", "abc").is_ok());
        assert_eq!(
            require_non_empty("id", "").unwrap_err(),
            ArgumentError::empty("id")
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Transport.to_string(), "transport");
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }
}

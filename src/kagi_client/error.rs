//! Error types for the Kagi HTTP client

use thiserror::Error;

/// Errors that can occur when interacting with the Kagi API.
///
/// Display output is a single kind-prefixed line; it is what tool callers
/// see, so it never contains the API key or raw request internals.
#[derive(Debug, Error)]
pub enum KagiError {
    /// Caller input rejected before any network call is made
    #[error("ValidationError: {0}")]
    Validation(String),

    /// Non-2xx response from the API, or a transport failure that produced
    /// no HTTP status (reported as status 0)
    #[error("UpstreamError: HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    /// 2xx response whose body violates the documented contract
    #[error("ParseError: {0}")]
    Parse(String),

    /// No response within the configured bound
    #[error("TimeoutError: {0}")]
    Timeout(String),

    /// Invalid start-up configuration
    #[error("ConfigError: {0}")]
    Config(String),
}

impl KagiError {
    /// Map a reqwest transport failure onto the error taxonomy.
    ///
    /// Timeouts get their own kind; anything else that never reached an
    /// HTTP status is surfaced as an upstream error with status 0.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            KagiError::Timeout("no response from the Kagi API within the configured timeout".to_string())
        } else {
            KagiError::Upstream {
                status: 0,
                message: err.to_string(),
            }
        }
    }
}

/// Result type for Kagi client operations
pub type Result<T> = std::result::Result<T, KagiError>;

//! Unified error type definition

use thiserror::Error;

pub use crate::validate::ValidationError;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Draft rejected before any remote call was made
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Request never produced a usable response (DNS, TCP, TLS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl CoreError {
    /// Whether the error is expected behavior (user input) rather than a
    /// remote or transport fault. Log expected errors at `warn`, the rest
    /// at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

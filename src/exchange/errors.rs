// =================================================================
// exchange/errors.rs - Exchange Error Types
// =================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The exchange answered with a structured rejection.
    #[error("APIError(code={code}): {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Signing error: {0}")]
    Signing(String),
}

#[cfg(feature = "binance_exec")]
impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        ExchangeError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        ExchangeError::InvalidResponse(err.to_string())
    }
}

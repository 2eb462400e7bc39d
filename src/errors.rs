//! Order error taxonomy and the normalizer that turns any failure into the
//! single message shown to the user.

use log::error;
use thiserror::Error;

use crate::exchange::ExchangeError;

/// Bad user input, detected before anything is sent to the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Symbol must be a non-empty string")]
    EmptySymbol,

    #[error("Invalid quantity format")]
    InvalidQuantity,

    #[error("Invalid price format")]
    InvalidPrice,

    #[error("Side must be 'BUY' or 'SELL'")]
    InvalidSide,
}

/// Anything that can stop an order from being placed.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}

/// Map an order failure to the user-facing message and log it.
///
/// Structured exchange rejections become `"API Error: <msg>"`, everything
/// else, validation failures included, is reported as
/// `"Unexpected error: <description>"`.
pub fn handle_error(err: &OrderError, operation: &str) -> String {
    match err {
        OrderError::Exchange(ExchangeError::Api { message, .. }) => {
            error!("Binance API error during {}: {}", operation, message);
            format!("API Error: {}", message)
        }
        other => {
            error!("Unexpected error during {}: {}", operation, other);
            format!("Unexpected error: {}", other)
        }
    }
}

// exchange/mod.rs
pub mod errors;

#[cfg(feature = "binance_exec")]
pub mod binance;

#[cfg(feature = "binance_exec")]
pub mod signer;

pub use errors::ExchangeError;

#[cfg(feature = "binance_exec")]
pub use binance::BinanceFuturesClient;

use serde_json::Value;

use crate::orders::OrderRequest;

/// Order-entry side of a futures exchange.
///
/// Builders receive the client explicitly, so tests can swap in a double
/// and the live client never has to be a process-wide global.
pub trait FuturesClient {
    /// Submit a new order and return the exchange confirmation as received.
    fn create_order(&self, request: &OrderRequest) -> Result<Value, ExchangeError>;
}

impl<T: FuturesClient + ?Sized> FuturesClient for &T {
    fn create_order(&self, request: &OrderRequest) -> Result<Value, ExchangeError> {
        (**self).create_order(request)
    }
}

impl<T: FuturesClient + ?Sized> FuturesClient for Box<T> {
    fn create_order(&self, request: &OrderRequest) -> Result<Value, ExchangeError> {
        (**self).create_order(request)
    }
}

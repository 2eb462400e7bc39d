//! Order builders: validate, build an [`OrderRequest`], submit it through a
//! [`FuturesClient`], and fold every failure into an [`OrderResult`].

pub mod limit;
pub mod market;
pub mod stop_limit;
pub mod types;

pub use limit::create_limit_order;
pub use market::create_market_order;
pub use stop_limit::create_stop_limit_order;
pub use types::*;

use log::{error, info};
use serde_json::Value;

use crate::errors::{handle_error, OrderError};
use crate::exchange::FuturesClient;

/// Send a validated request to the exchange.
pub(crate) fn submit<C>(client: &C, request: &OrderRequest) -> Result<Value, OrderError>
where
    C: FuturesClient + ?Sized,
{
    Ok(client.create_order(request)?)
}

/// Log and wrap the outcome of an order attempt. No error escapes a builder.
pub(crate) fn conclude(
    outcome: Result<Value, OrderError>,
    operation: &str,
    success_label: &str,
    failure_label: &str,
) -> OrderResult {
    match outcome {
        Ok(order) => {
            info!("{}: {}", success_label, order);
            OrderResult::Success(order)
        }
        Err(e) => {
            let message = handle_error(&e, operation);
            error!("{}: {}", failure_label, message);
            OrderResult::Error(message)
        }
    }
}

use log::info;
use serde_json::Value;

use super::{conclude, submit, OrderRequest, OrderResult, TimeInForce};
use crate::errors::OrderError;
use crate::exchange::FuturesClient;
use crate::validation::{validate_price, validate_quantity, validate_side, validate_symbol};

/// Place a limit order at `price`. Callers without a preference pass
/// `TimeInForce::default()` (GTC).
pub fn create_limit_order<C>(
    client: &C,
    symbol: &str,
    side: &str,
    quantity: &str,
    price: &str,
    time_in_force: TimeInForce,
) -> OrderResult
where
    C: FuturesClient + ?Sized,
{
    conclude(
        place(client, symbol, side, quantity, price, time_in_force),
        "limit order",
        "Limit order placed",
        "Limit order failed",
    )
}

fn place<C>(
    client: &C,
    symbol: &str,
    side: &str,
    quantity: &str,
    price: &str,
    time_in_force: TimeInForce,
) -> Result<Value, OrderError>
where
    C: FuturesClient + ?Sized,
{
    let symbol = validate_symbol(symbol)?;
    let quantity = validate_quantity(quantity)?;
    let price = validate_price(price)?;
    let side = validate_side(side)?;

    info!(
        "Placing limit {} order for {} {} at ${}",
        side, quantity, symbol, price
    );

    let request = OrderRequest::limit(symbol, side, quantity, price, time_in_force);
    submit(client, &request)
}

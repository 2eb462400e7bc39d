use log::info;
use serde_json::Value;

use super::{conclude, submit, OrderRequest, OrderResult};
use crate::errors::OrderError;
use crate::exchange::FuturesClient;
use crate::validation::{validate_price, validate_quantity, validate_side, validate_symbol};

/// Place a stop-limit order: a GTC limit order at `price` that becomes
/// active once the market trades through `stop_price`.
pub fn create_stop_limit_order<C>(
    client: &C,
    symbol: &str,
    side: &str,
    quantity: &str,
    price: &str,
    stop_price: &str,
) -> OrderResult
where
    C: FuturesClient + ?Sized,
{
    conclude(
        place(client, symbol, side, quantity, price, stop_price),
        "stop-limit order",
        "Stop-limit order placed",
        "Stop-limit order failed",
    )
}

fn place<C>(
    client: &C,
    symbol: &str,
    side: &str,
    quantity: &str,
    price: &str,
    stop_price: &str,
) -> Result<Value, OrderError>
where
    C: FuturesClient + ?Sized,
{
    let symbol = validate_symbol(symbol)?;
    let quantity = validate_quantity(quantity)?;
    let price = validate_price(price)?;
    let stop_price = validate_price(stop_price)?;
    let side = validate_side(side)?;

    info!(
        "Placing stop-limit {} order for {} {}, stop: ${}, limit: ${}",
        side, quantity, symbol, stop_price, price
    );

    let request = OrderRequest::stop_limit(symbol, side, quantity, price, stop_price);
    submit(client, &request)
}

use log::info;
use serde_json::Value;

use super::{conclude, submit, OrderRequest, OrderResult};
use crate::errors::OrderError;
use crate::exchange::FuturesClient;
use crate::validation::{validate_quantity, validate_side, validate_symbol};

/// Place a market order.
///
/// `quantity` is the raw textual amount; it is parsed as an exact decimal.
pub fn create_market_order<C>(client: &C, symbol: &str, side: &str, quantity: &str) -> OrderResult
where
    C: FuturesClient + ?Sized,
{
    conclude(
        place(client, symbol, side, quantity),
        "market order",
        "Market order executed",
        "Market order failed",
    )
}

fn place<C>(client: &C, symbol: &str, side: &str, quantity: &str) -> Result<Value, OrderError>
where
    C: FuturesClient + ?Sized,
{
    let symbol = validate_symbol(symbol)?;
    let quantity = validate_quantity(quantity)?;
    let side = validate_side(side)?;

    info!("Placing market {} order for {} {}", side, quantity, symbol);

    let request = OrderRequest::market(symbol, side, quantity);
    submit(client, &request)
}

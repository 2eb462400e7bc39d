// =================================================================
// orders/types.rs - Order Data Structures
// =================================================================

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::fmt;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type as sent in the `type` field.
///
/// Stop-limit orders go out as `STOP`, which USDT-M futures treats as a
/// limit order armed by `stopPrice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Market,
    Limit,
    Stop,
}

impl OrderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::Stop => "STOP",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time in force policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeInForce {
    /// Good till canceled
    #[default]
    #[value(name = "GTC")]
    Gtc,
    /// Immediate or cancel
    #[value(name = "IOC")]
    Ioc,
    /// Fill or kill
    #[value(name = "FOK")]
    Fok,
    /// Post only
    #[value(name = "GTX")]
    Gtx,
}

impl TimeInForce {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gtc => "GTC",
            Self::Ioc => "IOC",
            Self::Fok => "FOK",
            Self::Gtx => "GTX",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated order, ready to be submitted.
///
/// Only the constructors below create one, so limit and stop orders always
/// carry a price and stop orders always carry a stop price.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    pub kind: OrderKind,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub time_in_force: Option<TimeInForce>,
}

impl OrderRequest {
    pub fn market(symbol: String, side: OrderSide, quantity: Decimal) -> Self {
        Self {
            symbol,
            side,
            kind: OrderKind::Market,
            quantity,
            price: None,
            stop_price: None,
            time_in_force: None,
        }
    }

    pub fn limit(
        symbol: String,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            symbol,
            side,
            kind: OrderKind::Limit,
            quantity,
            price: Some(price),
            stop_price: None,
            time_in_force: Some(time_in_force),
        }
    }

    /// Stop-limit orders are always good till canceled.
    pub fn stop_limit(
        symbol: String,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Self {
        Self {
            symbol,
            side,
            kind: OrderKind::Stop,
            quantity,
            price: Some(price),
            stop_price: Some(stop_price),
            time_in_force: Some(TimeInForce::Gtc),
        }
    }

    /// Wire parameters in submission order. Optional fields are omitted
    /// rather than sent empty.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", self.kind.as_str().to_string()),
            ("quantity", self.quantity.normalize().to_string()),
        ];

        if let Some(price) = self.price {
            params.push(("price", price.normalize().to_string()));
        }
        if let Some(stop_price) = self.stop_price {
            params.push(("stopPrice", stop_price.normalize().to_string()));
        }
        if let Some(tif) = self.time_in_force {
            params.push(("timeInForce", tif.as_str().to_string()));
        }

        params
    }
}

/// Outcome of an order attempt: the exchange confirmation passed through
/// untouched, or a normalized error message.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderResult {
    Success(Value),
    Error(String),
}

impl OrderResult {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            Self::Success(_) => None,
        }
    }

    /// JSON view: the confirmation itself, or `{"error": "..."}`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success(order) => order.clone(),
            Self::Error(message) => json!({ "error": message }),
        }
    }
}

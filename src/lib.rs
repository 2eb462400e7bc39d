pub mod cli;
pub mod config;
pub mod errors;
pub mod exchange;
pub mod orders;
pub mod utils;
pub mod validation;

pub use errors::{handle_error, OrderError, ValidationError};
pub use exchange::{ExchangeError, FuturesClient};
pub use orders::{
    create_limit_order, create_market_order, create_stop_limit_order, OrderKind, OrderRequest,
    OrderResult, OrderSide, TimeInForce,
};

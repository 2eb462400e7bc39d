//! Command-line front end: argument model, dispatch to the order builders,
//! and the mapping from results to printed line + exit code.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::exchange::FuturesClient;
use crate::orders::{
    create_limit_order, create_market_order, create_stop_limit_order, OrderResult, TimeInForce,
};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Parser)]
#[command(name = "futures_bot", about = "Binance Futures Trading Bot", version)]
pub struct Cli {
    /// YAML settings file (exchange section)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Place market order
    Market(MarketArgs),

    /// Place limit order
    Limit(LimitArgs),

    /// Place stop-limit order
    #[command(name = "stop-limit")]
    StopLimit(StopLimitArgs),

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Debug, Args)]
pub struct MarketArgs {
    /// Trading symbol (e.g., BTCUSDT)
    pub symbol: String,
    /// Order side: BUY or SELL
    pub side: String,
    /// Order quantity
    #[arg(allow_negative_numbers = true)]
    pub quantity: String,
}

#[derive(Debug, Args)]
pub struct LimitArgs {
    /// Trading symbol (e.g., BTCUSDT)
    pub symbol: String,
    /// Order side: BUY or SELL
    pub side: String,
    /// Order quantity
    #[arg(allow_negative_numbers = true)]
    pub quantity: String,
    /// Limit price
    #[arg(allow_negative_numbers = true)]
    pub price: String,
    /// Time in force
    #[arg(long, value_enum, ignore_case = true, default_value_t = TimeInForce::Gtc)]
    pub time_in_force: TimeInForce,
}

#[derive(Debug, Args)]
pub struct StopLimitArgs {
    /// Trading symbol
    pub symbol: String,
    /// Order side: BUY or SELL
    pub side: String,
    /// Order quantity
    #[arg(allow_negative_numbers = true)]
    pub quantity: String,
    /// Limit price
    #[arg(allow_negative_numbers = true)]
    pub price: String,
    /// Stop price
    #[arg(allow_negative_numbers = true)]
    pub stop_price: String,
}

impl Command {
    /// Name of an unrecognized subcommand, if that is what was given.
    pub fn unknown_name(&self) -> Option<&str> {
        match self {
            Self::Unknown(args) => Some(args.first().map(String::as_str).unwrap_or_default()),
            _ => None,
        }
    }
}

/// What the binary prints to stdout and the status it exits with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub message: String,
    pub exit_code: u8,
}

impl Report {
    pub fn success(message: String) -> Self {
        Self {
            message,
            exit_code: EXIT_SUCCESS,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            exit_code: EXIT_FAILURE,
        }
    }

    pub fn unknown_command(name: &str) -> Self {
        Self::failure(format!("Unknown command: {}", name))
    }

    pub fn from_result(result: &OrderResult) -> Self {
        match result {
            OrderResult::Error(message) => Self::failure(format!("Error: {}", message)),
            OrderResult::Success(_) => {
                Self::success(format!("Order successful: {}", result.to_json()))
            }
        }
    }
}

/// Run one command against `client`.
pub fn execute<C>(client: &C, command: &Command) -> Report
where
    C: FuturesClient + ?Sized,
{
    let result = match command {
        Command::Market(args) => {
            create_market_order(client, &args.symbol, &args.side, &args.quantity)
        }
        Command::Limit(args) => create_limit_order(
            client,
            &args.symbol,
            &args.side,
            &args.quantity,
            &args.price,
            args.time_in_force,
        ),
        Command::StopLimit(args) => create_stop_limit_order(
            client,
            &args.symbol,
            &args.side,
            &args.quantity,
            &args.price,
            &args.stop_price,
        ),
        Command::Unknown(_) => {
            return Report::unknown_command(command.unknown_name().unwrap_or_default());
        }
    };

    Report::from_result(&result)
}

/// Exit status for a failed parse: help and version output are not failures.
pub fn parse_error_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

//! Binance futures order CLI.
//!
//! ```bash
//! futures_bot market BTCUSDT BUY 0.01
//! futures_bot limit ETHUSDT SELL 1.5 3000
//! futures_bot stop-limit BTCUSDT BUY 0.5 61000 60000
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{error, info, warn};
use std::path::Path;
use std::process::ExitCode;

use futures_order_bot::cli::{self, Cli, Command, Report, EXIT_FAILURE};
use futures_order_bot::config::Settings;
use futures_order_bot::exchange::BinanceFuturesClient;
use futures_order_bot::utils::logging::{init_logging, LoggingConfig};

fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let log_config = LoggingConfig::from_env();
    if let Err(e) = init_logging(&log_config) {
        eprintln!(
            "⚠️  Could not open log file {}: {}",
            log_config.file.display(),
            e
        );
    }
    if dotenv.is_err() {
        info!("No .env file found, using environment variables");
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(io_err) = e.print() {
                warn!("Could not print argument error: {}", io_err);
            }
            return ExitCode::from(cli::parse_error_exit_code(&e));
        }
    };

    let Some(command) = cli.command else {
        if let Err(e) = Cli::command().print_help() {
            warn!("Could not print usage: {}", e);
        }
        return ExitCode::from(EXIT_FAILURE);
    };

    let report = match command.unknown_name() {
        Some(name) => Report::unknown_command(name),
        None => run(cli.config.as_deref(), &command).unwrap_or_else(|e| {
            error!("CLI execution failed: {:#}", e);
            Report::failure(format!("Error: {:#}", e))
        }),
    };

    println!("{}", report.message);
    ExitCode::from(report.exit_code)
}

fn run(config: Option<&Path>, command: &Command) -> Result<Report> {
    let settings = Settings::load(config).context("Failed to load settings")?;

    if settings.exchange.testnet {
        info!("Using Binance futures testnet");
    } else {
        warn!("Using Binance futures mainnet, orders are live");
    }

    let client = BinanceFuturesClient::new(&settings.credentials, &settings.exchange)
        .context("Failed to initialize Binance client")?;

    Ok(cli::execute(&client, command))
}

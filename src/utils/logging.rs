//! Logging setup: every record goes to an append-only log file and to
//! stderr, in the form `timestamp - target - LEVEL - message`.
//!
//! Verbosity defaults to `info` and can be changed through `RUST_LOG`:
//! ```bash
//! RUST_LOG=debug futures_bot market BTCUSDT BUY 0.01
//! RUST_LOG=futures_order_bot::exchange=debug futures_bot limit ETHUSDT SELL 1 3000
//! ```

use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "bot.log";
pub const LOG_FILE_ENV: &str = "ORDER_BOT_LOG_FILE";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub file: PathBuf,
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_FILE),
            level: LevelFilter::Info,
        }
    }
}

impl LoggingConfig {
    /// Log file location from `ORDER_BOT_LOG_FILE`, falling back to `bot.log`.
    pub fn from_env() -> Self {
        let file = std::env::var(LOG_FILE_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Self {
            file,
            ..Self::default()
        }
    }
}

/// Writes every buffer to both sinks.
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}

/// One log line, without the trailing newline.
pub fn format_line(timestamp: &str, target: &str, level: log::Level, message: &str) -> String {
    format!("{} - {} - {} - {}", timestamp, target, level, message)
}

/// Install the global logger.
///
/// If the log file cannot be opened, records still reach stderr and the
/// open error is returned so the caller can report it.
pub fn init_logging(config: &LoggingConfig) -> io::Result<()> {
    let (target, file_status) = match open_log_file(config) {
        Ok(file) => (Target::Pipe(Box::new(Tee::new(file, io::stderr()))), Ok(())),
        Err(e) => (Target::Stderr, Err(e)),
    };

    Builder::new()
        .filter_level(config.level)
        .parse_default_env()
        .format(|buf, record| {
            let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
            let line = format_line(
                &timestamp,
                record.target(),
                record.level(),
                &record.args().to_string(),
            );
            writeln!(buf, "{}", line)
        })
        .target(target)
        .try_init()
        .map_err(io::Error::other)?;

    file_status
}

fn open_log_file(config: &LoggingConfig) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
}

//! Credentials and exchange settings.
//!
//! Sources, lowest priority first: built-in defaults, an optional YAML file,
//! then environment variables (a `.env` file is loaded by the binary).

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";
pub const TESTNET_ENV: &str = "BINANCE_TESTNET";
pub const BASE_URL_ENV: &str = "BINANCE_FUTURES_URL";
pub const RECV_WINDOW_ENV: &str = "BINANCE_RECV_WINDOW";

pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";
pub const PLACEHOLDER_API_SECRET: &str = "your_api_secret_here";

/// API key pair used to sign requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    /// True when either value is still the placeholder used for unset variables.
    pub fn is_placeholder(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY || self.api_secret == PLACEHOLDER_API_SECRET
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExchangeSettings {
    #[serde(default = "default_testnet")]
    pub testnet: bool,
    /// Overrides the mainnet/testnet URL when set.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_recv_window_ms")]
    pub recv_window_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_testnet() -> bool {
    true
}

fn default_recv_window_ms() -> u64 {
    5000
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ExchangeSettings {
    fn default() -> Self {
        Self {
            testnet: default_testnet(),
            base_url: None,
            recv_window_ms: default_recv_window_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    exchange: ExchangeSettings,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub exchange: ExchangeSettings,
}

impl Settings {
    /// Load settings from the process environment and an optional YAML file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Same as [`Settings::load`] with an explicit variable lookup.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match path {
            Some(path) => load_settings_file(path)?,
            None => SettingsFile::default(),
        };
        let mut exchange = file.exchange;

        if let Some(raw) = lookup(TESTNET_ENV) {
            exchange.testnet = parse_bool(&raw)
                .with_context(|| format!("{} must be true or false, got '{}'", TESTNET_ENV, raw))?;
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            exchange.base_url = Some(url);
        }
        if let Some(raw) = lookup(RECV_WINDOW_ENV) {
            exchange.recv_window_ms = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number of milliseconds", RECV_WINDOW_ENV))?;
        }

        // Unset credentials fall back to placeholders instead of failing here;
        // the exchange rejects them on the first signed call.
        let credentials = Credentials {
            api_key: lookup(API_KEY_ENV).unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string()),
            api_secret: lookup(API_SECRET_ENV)
                .unwrap_or_else(|| PLACEHOLDER_API_SECRET.to_string()),
        };

        if credentials.is_placeholder() {
            warn!(
                "{} / {} not set, using placeholder credentials",
                API_KEY_ENV, API_SECRET_ENV
            );
        }

        Ok(Self {
            credentials,
            exchange,
        })
    }
}

fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

use chrono_tz::Tz;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

use crate::orders::{DEFAULT_TAX_RATE, ORDER_NUMBER_BASE};
use crate::utils::time::parse_timezone;

/// Terminal configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Store and export directory |
/// | STORE_FILE | pos.redb | redb file name under WORK_DIR |
/// | TAX_RATE | 0.08 | Fractional tax rate |
/// | TIMEZONE | UTC | Business time zone (IANA name) |
/// | ORDER_NUMBER_BASE | 1000 | First order number |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | (unset) | Enables daily log files |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/var/lib/pos TIMEZONE=Europe/Istanbul cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the store file and CSV exports
    pub work_dir: PathBuf,
    /// redb file name
    pub store_file: String,
    /// Fraction in [0, 1]
    pub tax_rate: Decimal,
    /// Business time zone for day boundaries and export timestamps
    pub timezone: Tz,
    pub order_number_base: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load from environment variables, using defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            store_file: std::env::var("STORE_FILE").unwrap_or_else(|_| "pos.redb".into()),
            tax_rate: std::env::var("TAX_RATE")
                .ok()
                .map_or(DEFAULT_TAX_RATE, |raw| parse_tax_rate(&raw)),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .map_or(Tz::UTC, |name| parse_timezone(&name)),
            order_number_base: std::env::var("ORDER_NUMBER_BASE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(ORDER_NUMBER_BASE),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the working directory, keeping everything else
    ///
    /// Mostly for tests
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Full path of the redb file
    pub fn store_path(&self) -> PathBuf {
        self.work_dir.join(&self.store_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Parse a fractional tax rate, falling back to the default outside [0, 1]
fn parse_tax_rate(raw: &str) -> Decimal {
    match Decimal::from_str(raw.trim()) {
        Ok(rate) if rate >= Decimal::ZERO && rate <= Decimal::ONE => rate,
        Ok(rate) => {
            tracing::warn!(%rate, "TAX_RATE outside [0, 1], using default");
            DEFAULT_TAX_RATE
        }
        Err(e) => {
            tracing::warn!("Failed to parse TAX_RATE '{}': {}, using default", raw, e);
            DEFAULT_TAX_RATE
        }
    }
}

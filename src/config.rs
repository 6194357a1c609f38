//! Application configuration loaded from environment variables.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Every field has a default matching the simulator's stock setup, so the
/// binary runs with no environment at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Market ===
    /// Trading pair in BASE:QUOTE form (e.g. "ETH:USDT").
    #[serde(default = "default_pair")]
    pub pair: String,

    /// Market-data API base URL.
    #[serde(default = "default_market_data_url")]
    pub market_data_url: String,

    /// Book precision parameter passed to the feed.
    #[serde(default = "default_precision")]
    pub book_precision: String,

    /// Price levels requested per side.
    #[serde(default = "default_book_depth")]
    pub book_depth: usize,

    // === Simulation ===
    /// Starting base-asset balance.
    #[serde(default = "default_base_balance")]
    pub base_balance: Decimal,

    /// Starting quote-asset balance.
    #[serde(default = "default_quote_balance")]
    pub quote_balance: Decimal,

    /// Synthetic orders generated per side each cycle.
    #[serde(default = "default_orders_per_side")]
    pub orders_per_side: usize,

    /// Relative band around best price/size for quote draws (0.05 = +/-5%).
    #[serde(default = "default_quote_range")]
    pub quote_range: Decimal,

    /// Optional RNG seed for reproducible quote draws.
    #[serde(default)]
    pub rng_seed: Option<u64>,

    // === Loop timing ===
    /// Seconds between polls.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Seconds between balance reports.
    #[serde(default = "default_report_interval")]
    pub report_interval_secs: u64,

    // === HTTP ===
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_pair() -> String {
    "ETH:USDT".to_string()
}

fn default_market_data_url() -> String {
    "https://api.rhino.fi".to_string()
}

fn default_precision() -> String {
    "P0".to_string()
}

fn default_book_depth() -> usize {
    25
}

fn default_base_balance() -> Decimal {
    Decimal::new(10, 0)
}

fn default_quote_balance() -> Decimal {
    Decimal::new(2000, 0)
}

fn default_orders_per_side() -> usize {
    5
}

fn default_quote_range() -> Decimal {
    Decimal::new(5, 2) // 0.05
}

fn default_poll_interval() -> u64 {
    5
}

fn default_report_interval() -> u64 {
    30
}

fn default_http_timeout_ms() -> u64 {
    2000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        let mut parts = self.pair.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(quote), None) if !base.is_empty() && !quote.is_empty() => {}
            _ => return Err(format!("PAIR must be BASE:QUOTE, got {:?}", self.pair)),
        }

        if url::Url::parse(&self.market_data_url).is_err() {
            return Err(format!(
                "MARKET_DATA_URL is not a valid URL: {}",
                self.market_data_url
            ));
        }

        if self.book_depth == 0 {
            return Err("BOOK_DEPTH must be at least 1".to_string());
        }

        if self.orders_per_side == 0 {
            return Err("ORDERS_PER_SIDE must be at least 1".to_string());
        }

        if self.quote_range <= Decimal::ZERO || self.quote_range >= Decimal::ONE {
            return Err("QUOTE_RANGE must be in (0, 1)".to_string());
        }

        if self.base_balance < Decimal::ZERO || self.quote_balance < Decimal::ZERO {
            return Err("starting balances must be non-negative".to_string());
        }

        if self.poll_interval_secs == 0 {
            return Err("POLL_INTERVAL_SECS must be at least 1".to_string());
        }

        Ok(())
    }
}

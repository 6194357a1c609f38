//! Unified error types for the simulator.

use thiserror::Error;

/// Unified error type for the simulator binary.
#[derive(Error, Debug)]
pub enum BotError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Market-data error.
    #[error("market error: {0}")]
    Market(#[from] MarketError),

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Market-data fetch errors.
///
/// The polling loop reacts to these by kind: timeouts and rejected requests
/// are recoverable, anything else tears the process down.
#[derive(Error, Debug)]
pub enum MarketError {
    /// The order-book request timed out.
    #[error("order book request for {pair} timed out")]
    Timeout {
        /// Pair whose book was requested.
        pair: String,
    },

    /// Upstream answered with a non-success status.
    #[error("order book request for {pair} failed: HTTP {status}")]
    BadStatus {
        /// Pair whose book was requested.
        pair: String,
        /// HTTP status code.
        status: u16,
        /// Response body, kept for diagnosis.
        body: String,
    },

    /// Transport-level failure other than a timeout.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// A success response whose body did not parse as a book.
    #[error("failed to parse order book response: {0}")]
    Parse(String),
}

impl MarketError {
    /// Whether the loop may continue (stale snapshot or backoff) after this
    /// error instead of terminating.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MarketError::Timeout { .. } | MarketError::BadStatus { .. }
        )
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_classification() {
        let timeout = MarketError::Timeout {
            pair: "ETH:USDT".to_string(),
        };
        let bad_status = MarketError::BadStatus {
            pair: "ETH:USDT".to_string(),
            status: 500,
            body: "oops".to_string(),
        };
        let parse = MarketError::Parse("not a book".to_string());

        assert!(timeout.is_recoverable());
        assert!(bad_status.is_recoverable());
        assert!(!parse.is_recoverable());
    }

    #[test]
    fn error_messages_carry_context() {
        let err = MarketError::BadStatus {
            pair: "ETH:USDT".to_string(),
            status: 503,
            body: "maintenance".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ETH:USDT"));
        assert!(msg.contains("503"));
    }
}

//! Market-side domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A spot trading pair in `BASE:QUOTE` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradingPair {
    /// Base asset (the thing being traded, e.g. "ETH").
    pub base: String,
    /// Quote asset (the thing it is priced in, e.g. "USDT").
    pub quote: String,
}

impl TradingPair {
    /// Create a new pair from its two legs.
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// Symbol in the upstream path form, e.g. "ETH:USDT".
    pub fn symbol(&self) -> String {
        format!("{}:{}", self.base, self.quote)
    }
}

impl FromStr for TradingPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(quote), None) if !base.is_empty() && !quote.is_empty() => {
                Ok(Self::new(base, quote))
            }
            _ => Err(format!("trading pair must be BASE:QUOTE, got {s:?}")),
        }
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.base, self.quote)
    }
}

//! Order book types and wire-format parsing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::trading::Side;

/// Raw level as delivered by the feed: `[price, count, amount]`.
///
/// Ask amounts arrive negative per the upstream convention.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawLevel(pub Decimal, pub Decimal, pub Decimal);

impl RawLevel {
    /// Price of the level.
    pub fn price(&self) -> Decimal {
        self.0
    }

    /// Number of orders the feed aggregated into the level.
    pub fn count(&self) -> Decimal {
        self.1
    }

    /// Signed size of the level.
    pub fn amount(&self) -> Decimal {
        self.2
    }
}

/// Single parsed price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Price at this level.
    pub price: Decimal,
    /// Size at this level, always non-negative.
    pub size: Decimal,
    /// Order count reported by the feed.
    pub count: Decimal,
}

impl PriceLevel {
    /// Normalize a raw wire level; sign information moves into the side the
    /// level is filed under.
    pub fn from_raw(raw: &RawLevel) -> Self {
        Self {
            price: raw.price(),
            size: raw.amount().abs(),
            count: raw.count(),
        }
    }
}

/// L2 order book snapshot for one pair.
///
/// Both sides are kept best-to-worst exactly as delivered; top-of-book is
/// index 0. A snapshot is replaced wholesale on every successful poll.
#[derive(Debug, Clone)]
pub struct OrderBook {
    /// Bid levels, best (highest) first.
    pub bids: Vec<PriceLevel>,
    /// Ask levels, best (lowest) first.
    pub asks: Vec<PriceLevel>,
    /// When this snapshot was taken.
    pub updated_at: OffsetDateTime,
}

impl OrderBook {
    /// Split a flat level array into sides.
    ///
    /// The feed returns `depth` bids, one separator entry, then asks; the
    /// separator at index `depth` is dropped.
    pub fn from_raw_levels(levels: &[RawLevel], depth: usize) -> Self {
        let bids = levels.iter().take(depth).map(PriceLevel::from_raw).collect();
        let asks = levels
            .iter()
            .skip(depth + 1)
            .map(PriceLevel::from_raw)
            .collect();
        Self {
            bids,
            asks,
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    /// Top level on one side.
    pub fn best(&self, side: Side) -> Option<&PriceLevel> {
        match side {
            Side::Bid => self.bids.first(),
            Side::Ask => self.asks.first(),
        }
    }

    /// Get the best bid level.
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// Get the best ask level.
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    /// Spread between best ask and best bid.
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.price - bid.price),
            _ => None,
        }
    }

    /// Whether the snapshot carries no levels at all.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

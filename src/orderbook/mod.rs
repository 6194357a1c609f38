//! Order book module for market data snapshots.
//!
//! This module handles:
//! - Snapshot types and best-of-book accessors
//! - Wire-format parsing (flat level array with a separator entry)

pub mod types;

pub use types::{OrderBook, PriceLevel, RawLevel};

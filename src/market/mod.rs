//! Market module for the simulated trading pair.
//!
//! This module handles:
//! - Trading pair types
//! - The public market-data HTTP client

pub mod client;
pub mod types;

pub use client::MarketClient;
pub use types::TradingPair;

//! Toy market-making simulation loop.
//!
//! Polls a public order-book feed for one trading pair, fabricates synthetic
//! limit orders around the top of book, logs their "placement", and settles
//! them locally against later snapshots, mutating an in-memory balance.
//! Nothing is ever routed to a real venue.
//!
//! # Cycle
//!
//! ```text
//! fetch snapshot -> generate quotes -> log placement
//!       -> simulate fills -> report balances -> sleep
//! ```
//!
//! Fully sequential: one task, one HTTP request per poll, no shared state.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`market`]: Trading pair and market-data client
//! - [`orderbook`]: Snapshot types and wire parsing
//! - [`quoting`]: Synthetic quote generation
//! - [`trading`]: Orders, balances, and the fill simulator
//! - [`bot`]: The sequential loop state
//! - [`metrics`]: Metrics facade helpers

pub mod bot;
pub mod config;
pub mod error;
pub mod market;
pub mod metrics;
pub mod orderbook;
pub mod quoting;
pub mod trading;

pub use bot::{Bot, FetchStatus};
pub use config::Config;
pub use error::{BotError, Result};

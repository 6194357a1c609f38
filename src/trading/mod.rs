//! Trading module for simulated order management.
//!
//! This module handles:
//! - Synthetic order and side types
//! - Balance tracking and affordability
//! - Local fill simulation

pub mod balances;
pub mod fills;
pub mod order;

pub use balances::{BalanceDelta, Balances};
pub use fills::{run_fill_pass, FillOutcome, FillReport};
pub use order::{OrderSet, Side, SyntheticOrder};

//! Quoting module for synthetic order generation.

pub mod quoter;

pub use quoter::{generate_quotes, QuoteParams};

//! The simulation bot: loop-lifetime state and the per-cycle steps.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::MarketError;
use crate::market::{MarketClient, TradingPair};
use crate::metrics;
use crate::orderbook::OrderBook;
use crate::quoting::{generate_quotes, QuoteParams};
use crate::trading::{run_fill_pass, Balances, FillReport, OrderSet};

/// Outcome of one market poll, as seen by the driver loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// A new snapshot replaced the previous one.
    Fresh,
    /// A recoverable fetch failure; the previous snapshot stays in use.
    Stale,
    /// No snapshot is available at all; the driver sleeps one interval and
    /// re-polls without running a trading cycle.
    Backoff,
}

/// Sequentially fetches, quotes, fills, and reports for a single pair.
///
/// All mutable loop state lives here and is owned exclusively by the driver;
/// balances persist for the process lifetime, snapshots are replaced
/// wholesale, and resting orders are recreated each quoted cycle.
#[derive(Debug)]
pub struct Bot {
    pair: TradingPair,
    balances: Balances,
    orders: OrderSet,
    book: Option<OrderBook>,
    quote_params: QuoteParams,
    rng: StdRng,
    report_interval: Duration,
    last_report: Option<Instant>,
}

impl Bot {
    /// Create a bot from config for one pair.
    pub fn new(config: &Config, pair: TradingPair) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            pair,
            balances: Balances::new(config.base_balance, config.quote_balance),
            orders: OrderSet::default(),
            book: None,
            quote_params: QuoteParams {
                orders_per_side: config.orders_per_side,
                range: config.quote_range,
            },
            rng,
            report_interval: Duration::from_secs(config.report_interval_secs),
            last_report: None,
        }
    }

    /// Fetch a snapshot and decide how the cycle may proceed.
    pub async fn poll_market(&mut self, client: &MarketClient) -> Result<FetchStatus, MarketError> {
        metrics::inc_cycles();
        match client.fetch_book(&self.pair).await {
            Ok(book) => {
                self.apply_snapshot(book);
                Ok(FetchStatus::Fresh)
            }
            Err(err) => self.absorb_fetch_error(err),
        }
    }

    /// Replace the snapshot wholesale.
    pub fn apply_snapshot(&mut self, book: OrderBook) {
        self.book = Some(book);
    }

    /// Stale/backoff policy for recoverable fetch failures; anything else
    /// propagates and tears the loop down.
    fn absorb_fetch_error(&mut self, err: MarketError) -> Result<FetchStatus, MarketError> {
        match err {
            MarketError::Timeout { ref pair } => {
                warn!(pair = %pair, "order book request timed out");
            }
            MarketError::BadStatus {
                ref pair,
                status,
                ref body,
            } => {
                warn!(pair = %pair, status, body = %body, "order book request rejected");
            }
            fatal => return Err(fatal),
        }

        metrics::inc_fetch_errors();
        if self.book.is_some() {
            Ok(FetchStatus::Stale)
        } else {
            Ok(FetchStatus::Backoff)
        }
    }

    /// Generate this cycle's synthetic orders and log their placement.
    ///
    /// Placement is the log line - nothing is routed anywhere.
    pub fn refresh_quotes(&mut self) {
        let Some(book) = self.book.as_ref() else { return };

        generate_quotes(book, &self.quote_params, &mut self.rng, &mut self.orders);

        for order in self.orders.iter() {
            metrics::inc_orders_placed();
            info!("PLACE {} @ {:.4} {:.4}", order.side, order.price, order.size);
        }
    }

    /// Run one fill pass against the latest snapshot.
    pub fn simulate_fills(&mut self) -> FillReport {
        let Some(book) = self.book.as_ref() else {
            return FillReport::default();
        };
        run_fill_pass(&mut self.orders, &mut self.balances, book, &self.pair)
    }

    /// Log balances when the report interval has elapsed (or none was ever
    /// made) and reset the timer. Observational only.
    pub fn maybe_report_balances(&mut self) {
        let due = match self.last_report {
            Some(at) => at.elapsed() >= self.report_interval,
            None => true,
        };
        if !due {
            return;
        }

        self.last_report = Some(Instant::now());
        info!(
            "CURRENT BALANCES: {} {:.4} {} {:.4}",
            self.pair.base, self.balances.base, self.pair.quote, self.balances.quote
        );
    }

    /// Current balances.
    pub fn balances(&self) -> Balances {
        self.balances
    }

    /// Orders still resting.
    pub fn outstanding(&self) -> &OrderSet {
        &self.orders
    }

    /// The traded pair.
    pub fn pair(&self) -> &TradingPair {
        &self.pair
    }

    /// The latest snapshot, if any poll has succeeded.
    pub fn book(&self) -> Option<&OrderBook> {
        self.book.as_ref()
    }
}

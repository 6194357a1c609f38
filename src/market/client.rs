//! HTTP client for the public market-data feed.

use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::MarketError;
use crate::metrics;
use crate::orderbook::{OrderBook, RawLevel};

use super::types::TradingPair;

/// Client for the public order-book endpoint.
#[derive(Debug, Clone)]
pub struct MarketClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Feed base URL, without a trailing slash.
    base_url: String,
    /// Book precision parameter.
    precision: String,
    /// Levels requested per side.
    depth: usize,
}

impl MarketClient {
    /// Create a new market-data client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(Duration::from_millis(500))
            .tcp_nodelay(true)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.market_data_url.trim_end_matches('/').to_string(),
            precision: config.book_precision.clone(),
            depth: config.book_depth,
        }
    }

    /// Levels requested per side.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Feed base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request the current order-book snapshot for `pair`.
    ///
    /// The feed answers with a flat JSON array: `depth` bids, one separator
    /// entry, then asks. Timeouts and non-success statuses come back as
    /// recoverable [`MarketError`] variants; any other transport fault is
    /// fatal to the loop.
    #[instrument(skip(self), fields(pair = %pair))]
    pub async fn fetch_book(&self, pair: &TradingPair) -> Result<OrderBook, MarketError> {
        let url = format!(
            "{}/market-data/book/{}/{}/{}",
            self.base_url,
            pair.symbol(),
            self.precision,
            self.depth
        );

        let start = Instant::now();
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| classify_transport_error(e, pair))?;
        metrics::record_book_fetch_latency(start);

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketError::BadStatus {
                pair: pair.symbol(),
                status: status.as_u16(),
                body,
            });
        }

        let levels: Vec<RawLevel> = response
            .json()
            .await
            .map_err(|e| MarketError::Parse(format!("order book body: {e}")))?;

        let book = OrderBook::from_raw_levels(&levels, self.depth);
        debug!(
            bids = book.bids.len(),
            asks = book.asks.len(),
            "order book snapshot parsed"
        );
        Ok(book)
    }
}

/// Split reqwest failures into the loop's recoverable/fatal taxonomy.
fn classify_transport_error(err: reqwest::Error, pair: &TradingPair) -> MarketError {
    if err.is_timeout() {
        MarketError::Timeout {
            pair: pair.symbol(),
        }
    } else {
        MarketError::Transport(err)
    }
}

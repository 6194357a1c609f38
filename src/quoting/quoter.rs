//! Synthetic quote generation around the top of book.

use rand::Rng;
use rust_decimal::Decimal;

use crate::orderbook::OrderBook;
use crate::trading::{OrderSet, Side, SyntheticOrder};

/// Parameters for one quoting pass.
#[derive(Debug, Clone, Copy)]
pub struct QuoteParams {
    /// Orders generated per side.
    pub orders_per_side: usize,
    /// Relative band around best price/size (0.05 = +/-5%).
    pub range: Decimal,
}

impl Default for QuoteParams {
    fn default() -> Self {
        Self {
            orders_per_side: 5,
            range: Decimal::new(5, 2),
        }
    }
}

/// Generate a fresh set of synthetic orders for every side with a book.
///
/// Prices are drawn uniformly in `[best*(1-range), best*(1+range)]` and
/// sizes independently in the same relative band around the best size;
/// the two draws are paired by index only. A quoted side replaces its prior
/// resting orders wholesale; a side with no levels is skipped and keeps
/// whatever was resting there.
pub fn generate_quotes<R: Rng>(
    book: &OrderBook,
    params: &QuoteParams,
    rng: &mut R,
    orders: &mut OrderSet,
) {
    for side in Side::ALL {
        let Some(best) = book.best(side) else { continue };

        let prices = draw_band(rng, best.price, params.range, params.orders_per_side);
        let sizes = draw_band(rng, best.size, params.range, params.orders_per_side);

        orders.replace_side(
            side,
            prices
                .into_iter()
                .zip(sizes)
                .map(|(price, size)| SyntheticOrder::new(side, price, size)),
        );
    }
}

/// Draw `n` uniform values in `[center*(1-range), center*(1+range)]`.
fn draw_band<R: Rng>(rng: &mut R, center: Decimal, range: Decimal, n: usize) -> Vec<Decimal> {
    let lo = center * (Decimal::ONE - range);
    let hi = center * (Decimal::ONE + range);
    (0..n)
        .map(|_| {
            if lo < hi {
                rng.gen_range(lo..hi)
            } else {
                // zero center collapses the band to a point
                center
            }
        })
        .collect()
}

//! Local fill simulation against the latest snapshot.

use rust_decimal::Decimal;
use tracing::info;

use crate::market::TradingPair;
use crate::metrics;
use crate::orderbook::OrderBook;

use super::balances::{BalanceDelta, Balances};
use super::order::{OrderSet, Side, SyntheticOrder};

/// What happened to one crossing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// Order executed; the delta was applied to the balances.
    Filled(BalanceDelta),
    /// Order crossed but could not be paid for; removed without touching the
    /// balances.
    Cancelled,
}

/// Per-pass summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Orders filled this pass.
    pub filled: usize,
    /// Orders cancelled for insufficient balance this pass.
    pub cancelled: usize,
}

/// Run one fill pass for both sides against `book`.
///
/// An order has crossed when its price is beyond the current best on its own
/// side: bids above best bid, asks below best ask. The rule is deliberately
/// naive - this is what the simulation measures, not a matching engine.
/// Crossing orders settle in insertion order, so earlier fills are visible to
/// later affordability checks; each side is then filtered once, leaving
/// non-crossing orders undisturbed.
pub fn run_fill_pass(
    orders: &mut OrderSet,
    balances: &mut Balances,
    book: &OrderBook,
    pair: &TradingPair,
) -> FillReport {
    let mut report = FillReport::default();

    for side in Side::ALL {
        let Some(best) = book.best(side) else { continue };
        let best_price = best.price;

        let mut removed: Vec<usize> = Vec::new();
        for (i, order) in orders.side(side).iter().enumerate() {
            if !crossed(order, best_price) {
                continue;
            }
            match settle(order, balances) {
                FillOutcome::Filled(delta) => {
                    report.filled += 1;
                    metrics::inc_orders_filled();
                    info!(
                        "FILLED {} @ {:.4} {:.4} ({} {:.4} {} {:.4})",
                        order.side,
                        order.price,
                        order.size,
                        pair.base,
                        delta.base,
                        pair.quote,
                        delta.quote
                    );
                }
                FillOutcome::Cancelled => {
                    report.cancelled += 1;
                    metrics::inc_orders_cancelled();
                    info!(
                        "CANCELLED {} @ {:.4} {:.4}",
                        order.side, order.price, order.size
                    );
                }
            }
            removed.push(i);
        }
        orders.remove_indices(side, &removed);
    }

    report
}

/// Crossing rule: the resting price has moved past the current best in the
/// adverse-for-passive direction.
fn crossed(order: &SyntheticOrder, best_price: Decimal) -> bool {
    match order.side {
        Side::Bid => order.price > best_price,
        Side::Ask => order.price < best_price,
    }
}

/// Settle one crossing order against the balances.
fn settle(order: &SyntheticOrder, balances: &mut Balances) -> FillOutcome {
    if !balances.can_afford(order) {
        return FillOutcome::Cancelled;
    }
    let delta = BalanceDelta::from_fill(order);
    balances.apply(delta);
    FillOutcome::Filled(delta)
}

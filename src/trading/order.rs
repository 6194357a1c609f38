//! Synthetic order types and the per-side order set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{Display, EnumString};

/// Book side of a resting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy-side quote.
    #[strum(serialize = "bid", to_string = "BID")]
    Bid,
    /// Sell-side quote.
    #[strum(serialize = "ask", to_string = "ASK")]
    Ask,
}

impl Side {
    /// Both sides, bids first - the order the feed and the loop use.
    pub const ALL: [Side; 2] = [Side::Bid, Side::Ask];

    /// Get the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

/// A randomly generated resting order, never routed anywhere.
///
/// Size is always non-negative; the side tag, not a sign convention, decides
/// how a fill moves the balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticOrder {
    /// Which side of the book the order rests on.
    pub side: Side,
    /// Limit price.
    pub price: Decimal,
    /// Order size, non-negative.
    pub size: Decimal,
}

impl SyntheticOrder {
    /// Create a new synthetic order.
    pub fn new(side: Side, price: Decimal, size: Decimal) -> Self {
        debug_assert!(size >= Decimal::ZERO, "order size must be non-negative");
        Self { side, price, size }
    }

    /// Quote spent (bid) or received (ask) if this order fills in full.
    pub fn notional(&self) -> Decimal {
        self.price * self.size
    }
}

/// Outstanding synthetic orders, keyed by side.
///
/// A fixed two-entry mapping; insertion order within a side is creation
/// order, and removal is index-stable (collect indices, filter once).
#[derive(Debug, Clone, Default)]
pub struct OrderSet {
    bids: SmallVec<[SyntheticOrder; 8]>,
    asks: SmallVec<[SyntheticOrder; 8]>,
}

impl OrderSet {
    /// Resting orders on one side, in creation order.
    pub fn side(&self, side: Side) -> &[SyntheticOrder] {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    /// Replace all resting orders on one side. Prior state for that side is
    /// discarded, not merged.
    pub fn replace_side(&mut self, side: Side, orders: impl IntoIterator<Item = SyntheticOrder>) {
        let slot = self.side_storage(side);
        slot.clear();
        slot.extend(orders);
    }

    /// Remove the given indices (ascending) from one side in a single pass,
    /// keeping the relative order of survivors.
    pub fn remove_indices(&mut self, side: Side, indices: &[usize]) {
        if indices.is_empty() {
            return;
        }
        let slot = self.side_storage(side);
        let mut idx = 0;
        slot.retain(|_| {
            let keep = !indices.contains(&idx);
            idx += 1;
            keep
        });
    }

    /// Total resting orders across both sides.
    pub fn len(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    /// Whether no orders are resting on either side.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Iterate all resting orders, bids first.
    pub fn iter(&self) -> impl Iterator<Item = &SyntheticOrder> {
        self.bids.iter().chain(self.asks.iter())
    }

    fn side_storage(&mut self, side: Side) -> &mut SmallVec<[SyntheticOrder; 8]> {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn order(side: Side, price: Decimal) -> SyntheticOrder {
        SyntheticOrder::new(side, price, dec!(1))
    }

    #[test]
    fn side_renders_uppercase() {
        assert_eq!(Side::Bid.to_string(), "BID");
        assert_eq!(Side::Ask.to_string(), "ASK");
        assert_eq!("bid".parse::<Side>().unwrap(), Side::Bid);
    }

    #[test]
    fn side_opposite() {
        assert_eq!(Side::Bid.opposite(), Side::Ask);
        assert_eq!(Side::Ask.opposite(), Side::Bid);
    }

    #[test]
    fn notional_is_price_times_size() {
        let order = SyntheticOrder::new(Side::Bid, dec!(101), dec!(5));
        assert_eq!(order.notional(), dec!(505));
    }

    #[test]
    fn replace_side_discards_prior_orders() {
        let mut set = OrderSet::default();
        set.replace_side(Side::Bid, vec![order(Side::Bid, dec!(1)), order(Side::Bid, dec!(2))]);
        set.replace_side(Side::Bid, vec![order(Side::Bid, dec!(3))]);

        assert_eq!(set.side(Side::Bid).len(), 1);
        assert_eq!(set.side(Side::Bid)[0].price, dec!(3));
    }

    #[test]
    fn replace_one_side_leaves_the_other() {
        let mut set = OrderSet::default();
        set.replace_side(Side::Ask, vec![order(Side::Ask, dec!(9))]);
        set.replace_side(Side::Bid, vec![order(Side::Bid, dec!(1))]);

        assert_eq!(set.side(Side::Ask).len(), 1);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_indices_keeps_survivors_in_order() {
        let mut set = OrderSet::default();
        set.replace_side(
            Side::Bid,
            (1..=5).map(|i| order(Side::Bid, Decimal::new(i, 0))),
        );

        set.remove_indices(Side::Bid, &[0, 2, 4]);

        let prices: Vec<Decimal> = set.side(Side::Bid).iter().map(|o| o.price).collect();
        assert_eq!(prices, vec![dec!(2), dec!(4)]);
    }

    #[test]
    fn remove_no_indices_is_noop() {
        let mut set = OrderSet::default();
        set.replace_side(Side::Ask, vec![order(Side::Ask, dec!(7))]);
        set.remove_indices(Side::Ask, &[]);
        assert_eq!(set.side(Side::Ask).len(), 1);
    }

    #[test]
    fn iter_walks_bids_then_asks() {
        let mut set = OrderSet::default();
        set.replace_side(Side::Ask, vec![order(Side::Ask, dec!(2))]);
        set.replace_side(Side::Bid, vec![order(Side::Bid, dec!(1))]);

        let sides: Vec<Side> = set.iter().map(|o| o.side).collect();
        assert_eq!(sides, vec![Side::Bid, Side::Ask]);
    }
}

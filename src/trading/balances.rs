//! Simulated account balances for the traded pair.

use rust_decimal::Decimal;

use super::order::{Side, SyntheticOrder};

/// Base/quote holdings, mutated only by simulated fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balances {
    /// Base-asset amount.
    pub base: Decimal,
    /// Quote-asset amount.
    pub quote: Decimal,
}

/// Signed balance movement produced by one fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceDelta {
    /// Change to the base balance.
    pub base: Decimal,
    /// Change to the quote balance.
    pub quote: Decimal,
}

impl BalanceDelta {
    /// Movement if `order` fills in full: a bid converts quote into base, an
    /// ask converts base into quote.
    pub fn from_fill(order: &SyntheticOrder) -> Self {
        match order.side {
            Side::Bid => Self {
                base: order.size,
                quote: -order.notional(),
            },
            Side::Ask => Self {
                base: -order.size,
                quote: order.notional(),
            },
        }
    }
}

impl Balances {
    /// Create balances from starting amounts.
    pub fn new(base: Decimal, quote: Decimal) -> Self {
        Self { base, quote }
    }

    /// Whether a fill of `order` can be paid for out of current holdings.
    ///
    /// Equality is affordable: a fill may drain a balance to exactly zero.
    pub fn can_afford(&self, order: &SyntheticOrder) -> bool {
        match order.side {
            Side::Bid => self.quote >= order.notional(),
            Side::Ask => self.base >= order.size,
        }
    }

    /// Apply a fill delta.
    pub fn apply(&mut self, delta: BalanceDelta) {
        self.base += delta.base;
        self.quote += delta.quote;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn bid_delta_converts_quote_to_base() {
        let order = SyntheticOrder::new(Side::Bid, dec!(101), dec!(5));
        let delta = BalanceDelta::from_fill(&order);
        assert_eq!(delta.base, dec!(5));
        assert_eq!(delta.quote, dec!(-505));
    }

    #[test]
    fn ask_delta_converts_base_to_quote() {
        let order = SyntheticOrder::new(Side::Ask, dec!(99), dec!(2));
        let delta = BalanceDelta::from_fill(&order);
        assert_eq!(delta.base, dec!(-2));
        assert_eq!(delta.quote, dec!(198));
    }

    #[test]
    fn affordability_is_inclusive_at_the_boundary() {
        let balances = Balances::new(dec!(2), dec!(505));

        // exactly affordable on both sides
        assert!(balances.can_afford(&SyntheticOrder::new(Side::Bid, dec!(101), dec!(5))));
        assert!(balances.can_afford(&SyntheticOrder::new(Side::Ask, dec!(50), dec!(2))));

        // one tick past the holdings
        assert!(!balances.can_afford(&SyntheticOrder::new(Side::Bid, dec!(101.01), dec!(5))));
        assert!(!balances.can_afford(&SyntheticOrder::new(Side::Ask, dec!(50), dec!(2.0001))));
    }

    #[test]
    fn apply_moves_both_legs() {
        let mut balances = Balances::new(dec!(10), dec!(2000));
        balances.apply(BalanceDelta {
            base: dec!(5),
            quote: dec!(-505),
        });
        assert_eq!(balances, Balances::new(dec!(15), dec!(1495)));
    }
}

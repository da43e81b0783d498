//! # POS Session State
//!
//! The register's working state: the cart plus the customer discount and
//! tax rate typed into the summary panel.
//!
//! ## Recompute Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  command ──► &mut PosSession ──► mutate cart / discount / tax           │
//! │                                         │                               │
//! │                                         ▼                               │
//! │                                  session.settle()  (always fresh)       │
//! │                                         │                               │
//! │                                         ▼                               │
//! │                                  CartResponse to the screen             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never stored on the session; every response settles again.

use shopzen_core::{Cart, Percent, SettlementParameters, SettlementResult};

/// Owned POS state, passed by `&mut` into cart commands.
#[derive(Debug, Clone)]
pub struct PosSession {
    cart: Cart,
    customer_discount: Percent,
    tax_rate: Percent,
}

impl PosSession {
    /// Creates an empty session with the given tax rate.
    pub fn new(tax_rate: Percent) -> Self {
        PosSession {
            cart: Cart::new(),
            customer_discount: Percent::zero(),
            tax_rate,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn customer_discount(&self) -> Percent {
        self.customer_discount
    }

    pub fn set_customer_discount(&mut self, discount: Percent) {
        self.customer_discount = discount;
    }

    pub fn tax_rate(&self) -> Percent {
        self.tax_rate
    }

    pub fn set_tax_rate(&mut self, tax_rate: Percent) {
        self.tax_rate = tax_rate;
    }

    /// POS sales take no prior payment.
    pub fn parameters(&self) -> SettlementParameters {
        SettlementParameters::new(self.customer_discount, self.tax_rate)
    }

    pub fn settle(&self) -> SettlementResult {
        self.cart.settle(&self.parameters())
    }

    /// Starts a new sale: empties the cart and drops the customer discount.
    /// The tax rate carries over.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.customer_discount = Percent::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopzen_core::{CatalogEntry, Money};

    #[test]
    fn test_clear_keeps_tax_rate() {
        let mut session = PosSession::new(Percent::from_whole(10));
        session
            .cart_mut()
            .add(CatalogEntry::new("1", "Phone Case", Money::from_cents(2_900)), 1)
            .unwrap();
        session.set_customer_discount(Percent::from_whole(5));

        session.clear();

        assert!(session.cart().is_empty());
        assert!(session.customer_discount().is_zero());
        assert_eq!(session.tax_rate(), Percent::from_whole(10));
    }

    #[test]
    fn test_settle_uses_session_parameters() {
        let mut session = PosSession::new(Percent::from_whole(10));
        session
            .cart_mut()
            .add(CatalogEntry::new("1", "iPhone 14 Pro", Money::from_cents(119_900)), 1)
            .unwrap();

        let totals = session.settle().rounded();
        assert_eq!(totals.grand_total.cents(), 131_890);

        session.set_tax_rate(Percent::zero());
        assert_eq!(session.settle().rounded().grand_total.cents(), 119_900);
    }
}

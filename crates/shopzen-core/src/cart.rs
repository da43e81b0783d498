//! # Cart
//!
//! The line-item collection behind both the POS cart and the purchase
//! invoice builder.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action                Method                  Effect                │
//! │  ─────────                ──────                  ──────                │
//! │                                                                         │
//! │  Click catalog item ────► add(entry, 1) ────────► push or qty += 1     │
//! │  Press + / - ───────────► set_quantity(id, n) ──► qty = n (n ≤ 0: drop) │
//! │  Type line discount ────► set_discount(id, p) ──► discount = p         │
//! │  Click trash ───────────► remove(id) ───────────► line dropped         │
//! │  Clear / new sale ──────► clear() ──────────────► empty                 │
//! │                                                                         │
//! │  After every action the caller re-runs `settle` for fresh totals.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CartError;
use crate::money::Money;
use crate::pricing::{self, LineBreakdown, SettlementParameters, SettlementResult};
use crate::types::Percent;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Catalog Entry
// =============================================================================

/// The part of a catalog item the cart needs when it is first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub unit_price: Money,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        CatalogEntry {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One catalog item's entry within a cart or invoice.
///
/// The unit price is captured when the line is created; later catalog price
/// edits do not reach lines already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog identifier, unique within the cart.
    pub id: String,

    /// Display name (frozen).
    pub name: String,

    /// Unit price (frozen).
    pub unit_price: Money,

    /// Always ≥ 1 while the line is in a cart.
    pub quantity: i64,

    /// Line-level discount applied to the gross amount.
    pub discount: Percent,
}

impl LineItem {
    /// `unit_price × quantity`, exact within the `Decimal` range.
    pub fn gross(&self) -> Decimal {
        self.unit_price
            .to_decimal()
            .saturating_mul(Decimal::from(self.quantity))
    }

    /// `gross × discount / 100`, exact.
    pub fn discount_amount(&self) -> Decimal {
        self.discount.of(self.gross())
    }

    /// `gross − discount_amount`, exact.
    pub fn net(&self) -> Decimal {
        self.gross().saturating_sub(self.discount_amount())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An insertion-ordered collection of line items.
///
/// ## Invariants
/// - Lines are unique by `id` (re-adding increments the quantity)
/// - Every line has `1 ≤ quantity ≤ MAX_LINE_QUANTITY`
/// - At most `MAX_CART_LINES` distinct lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a catalog item, or increases its quantity if already present.
    ///
    /// New lines start with no line discount.
    pub fn add(&mut self, entry: CatalogEntry, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return Err(CartError::NonPositiveQuantity(quantity));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == entry.id) {
            let new_qty = line
                .quantity
                .checked_add(quantity)
                .filter(|q| *q <= MAX_LINE_QUANTITY)
                .ok_or(CartError::QuantityTooLarge {
                    requested: line.quantity.saturating_add(quantity),
                    max: MAX_LINE_QUANTITY,
                })?;
            line.quantity = new_qty;
            return Ok(());
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CartError::CartFull {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(LineItem {
            id: entry.id,
            name: entry.name,
            unit_price: entry.unit_price,
            quantity,
            discount: Percent::zero(),
        });
        Ok(())
    }

    /// Sets a line's quantity. Zero or below removes the line.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return self.remove(id).map(|_| ());
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        self.line_mut(id)?.quantity = quantity;
        Ok(())
    }

    /// Sets a line's discount percentage.
    pub fn set_discount(&mut self, id: &str, discount: Percent) -> Result<(), CartError> {
        self.line_mut(id)?.discount = discount;
        Ok(())
    }

    /// Removes a line and returns it.
    pub fn remove(&mut self, id: &str) -> Result<LineItem, CartError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| CartError::LineNotFound(id.to_string()))?;
        Ok(self.lines.remove(index))
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all quantities (the "N items" badge).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Settles the cart against the given parameters.
    pub fn settle(&self, params: &SettlementParameters) -> SettlementResult {
        pricing::settle(&self.lines, params)
    }

    /// Per-line itemisation for receipts.
    pub fn breakdown(&self) -> Vec<LineBreakdown> {
        pricing::breakdown(&self.lines)
    }

    fn line_mut(&mut self, id: &str) -> Result<&mut LineItem, CartError> {
        self.lines
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| CartError::LineNotFound(id.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(id: &str, cents: i64) -> CatalogEntry {
        CatalogEntry::new(id, format!("Item {}", id), Money::from_cents(cents))
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut cart = Cart::new();
        cart.add(entry("3", 229_900), 1).unwrap();
        cart.add(entry("1", 119_900), 1).unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert!(cart.lines().iter().all(|l| l.discount.is_zero()));
    }

    #[test]
    fn test_re_adding_increments_quantity() {
        let mut cart = Cart::new();
        cart.add(entry("1", 999), 1).unwrap();
        cart.add(entry("1", 999), 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_re_adding_keeps_frozen_price() {
        let mut cart = Cart::new();
        cart.add(entry("1", 999), 1).unwrap();
        cart.add(entry("1", 1_299), 1).unwrap();

        assert_eq!(cart.get("1").unwrap().unit_price.cents(), 999);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add(entry("1", 999), 0),
            Err(CartError::NonPositiveQuantity(0))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::new();
        cart.add(entry("1", 100), MAX_LINE_QUANTITY).unwrap();
        let err = cart.add(entry("1", 100), 1).unwrap_err();
        assert!(matches!(err, CartError::QuantityTooLarge { .. }));
        assert_eq!(cart.get("1").unwrap().quantity, MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_re_adding_huge_quantity_does_not_overflow() {
        let mut cart = Cart::new();
        cart.add(entry("1", 100), 1).unwrap();

        assert_eq!(
            cart.add(entry("1", 100), i64::MAX),
            Err(CartError::QuantityTooLarge {
                requested: i64::MAX,
                max: MAX_LINE_QUANTITY
            })
        );
        assert_eq!(cart.get("1").unwrap().quantity, 1);
    }

    #[test]
    fn test_line_amounts_saturate_at_decimal_range() {
        let line = LineItem {
            id: "1".to_string(),
            name: "Bulk".to_string(),
            unit_price: Money::from_cents(i64::MAX),
            quantity: i64::MAX,
            discount: Percent::zero(),
        };
        assert_eq!(line.gross(), Decimal::MAX);
        assert_eq!(line.net(), Decimal::MAX);
    }

    #[test]
    fn test_cart_full() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_LINES {
            cart.add(entry(&i.to_string(), 100), 1).unwrap();
        }
        assert_eq!(
            cart.add(entry("overflow", 100), 1),
            Err(CartError::CartFull {
                max: MAX_CART_LINES
            })
        );
    }

    #[test]
    fn test_set_quantity_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(entry("1", 999), 2).unwrap();
        cart.add(entry("2", 500), 1).unwrap();

        cart.set_quantity("1", 0).unwrap();
        assert!(cart.get("1").is_none());
        assert_eq!(cart.len(), 1);

        cart.set_quantity("2", -4).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_line() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.set_quantity("missing", 3),
            Err(CartError::LineNotFound("missing".into()))
        );
    }

    #[test]
    fn test_line_amounts() {
        let mut cart = Cart::new();
        cart.add(entry("1", 10_000), 2).unwrap();
        cart.set_discount("1", Percent::from_whole(10)).unwrap();

        let line = cart.get("1").unwrap();
        assert_eq!(line.gross(), dec!(200));
        assert_eq!(line.discount_amount(), dec!(20));
        assert_eq!(line.net(), dec!(180));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(entry("1", 999), 1).unwrap();
        cart.add(entry("2", 999), 1).unwrap();

        let removed = cart.remove("1").unwrap();
        assert_eq!(removed.id, "1");
        assert!(cart.remove("1").is_err());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }
}

//! # Pricing Engine
//!
//! Turns a list of line items plus discount/tax parameters into a
//! settlement breakdown. Used by the POS cart and the purchase invoice
//! builder alike.
//!
//! ## Settlement Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  per line:  gross = unit_price × qty                                    │
//! │             net   = gross − gross × line_discount%                      │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  subtotal        = Σ net                                                │
//! │  global_discount = subtotal × discount%      (or a flat amount)         │
//! │  after_discount  = subtotal − global_discount                           │
//! │  tax             = after_discount × tax%                                │
//! │  grand_total     = after_discount + tax                                 │
//! │  balance_due     = max(0, grand_total − amount_paid)                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Discounts always come off before tax. Every figure is an exact decimal;
//! [`SettlementResult::rounded`] is the only place cents are rounded.
//!
//! `settle` is total: it never fails, never panics and never clamps
//! percentages. Inputs outside 0–100% or negative amounts are the caller's
//! to reject; figures past the `Decimal` range saturate at its ends.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::LineItem;
use crate::money::Money;
use crate::types::{PaymentStatus, Percent};

// =============================================================================
// Parameters
// =============================================================================

/// Discount applied to the post-line-discount subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum GlobalDiscount {
    /// Percentage of the subtotal (POS customer discount).
    Percent(Percent),
    /// Fixed amount (supplier invoice discount).
    Flat(Money),
}

impl GlobalDiscount {
    /// The discount amount for a given subtotal, unrounded.
    pub fn amount(&self, subtotal: Decimal) -> Decimal {
        match self {
            GlobalDiscount::Percent(pct) => pct.of(subtotal),
            GlobalDiscount::Flat(amount) => amount.to_decimal(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            GlobalDiscount::Percent(pct) => pct.is_zero(),
            GlobalDiscount::Flat(amount) => amount.is_zero(),
        }
    }
}

impl Default for GlobalDiscount {
    fn default() -> Self {
        GlobalDiscount::Percent(Percent::zero())
    }
}

/// Discount, tax and payment inputs for a settlement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SettlementParameters {
    pub global_discount: GlobalDiscount,
    pub tax_rate: Percent,
    /// Payments already received (purchase/invoice flows; zero at the POS).
    pub amount_paid: Money,
}

impl SettlementParameters {
    /// Percentage discount and tax, nothing paid yet.
    pub fn new(discount: Percent, tax_rate: Percent) -> Self {
        SettlementParameters {
            global_discount: GlobalDiscount::Percent(discount),
            tax_rate,
            amount_paid: Money::zero(),
        }
    }

    /// Flat discount and tax, nothing paid yet.
    pub fn with_flat_discount(discount: Money, tax_rate: Percent) -> Self {
        SettlementParameters {
            global_discount: GlobalDiscount::Flat(discount),
            tax_rate,
            amount_paid: Money::zero(),
        }
    }

    pub fn with_amount_paid(mut self, amount_paid: Money) -> Self {
        self.amount_paid = amount_paid;
        self
    }
}

// =============================================================================
// Results
// =============================================================================

/// Exact settlement figures.
///
/// ## Invariants
/// - `grand_total == (subtotal − global_discount_amount) + tax_amount`
/// - `balance_due == max(0, grand_total − amount_paid)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResult {
    #[ts(type = "string")]
    pub subtotal: Decimal,
    #[ts(type = "string")]
    pub global_discount_amount: Decimal,
    #[ts(type = "string")]
    pub after_discount: Decimal,
    #[ts(type = "string")]
    pub tax_amount: Decimal,
    #[ts(type = "string")]
    pub grand_total: Decimal,
    #[ts(type = "string")]
    pub balance_due: Decimal,
}

impl SettlementResult {
    /// Rounds every figure to cents for display, receipts and storage.
    pub fn rounded(&self) -> SettlementTotals {
        SettlementTotals {
            subtotal: Money::from_decimal_rounded(self.subtotal),
            global_discount_amount: Money::from_decimal_rounded(self.global_discount_amount),
            after_discount: Money::from_decimal_rounded(self.after_discount),
            tax_amount: Money::from_decimal_rounded(self.tax_amount),
            grand_total: Money::from_decimal_rounded(self.grand_total),
            balance_due: Money::from_decimal_rounded(self.balance_due),
        }
    }
}

/// Settlement figures rounded to cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SettlementTotals {
    pub subtotal: Money,
    pub global_discount_amount: Money,
    pub after_discount: Money,
    pub tax_amount: Money,
    pub grand_total: Money,
    pub balance_due: Money,
}

impl SettlementTotals {
    /// Payment status of `amount_paid` against the presented grand total.
    pub fn payment_status(&self, amount_paid: Money) -> PaymentStatus {
        PaymentStatus::classify(self.grand_total, amount_paid)
    }
}

/// Itemised view of one line, for receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineBreakdown {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub discount: Percent,
    #[ts(type = "string")]
    pub gross: Decimal,
    #[ts(type = "string")]
    pub discount_amount: Decimal,
    #[ts(type = "string")]
    pub net: Decimal,
}

impl LineBreakdown {
    /// Line net rounded for display.
    pub fn net_rounded(&self) -> Money {
        Money::from_decimal_rounded(self.net)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Settles a list of line items.
///
/// ## Example
/// ```rust
/// use shopzen_core::{settle, Cart, CatalogEntry, Money, Percent, SettlementParameters};
///
/// let mut cart = Cart::new();
/// cart.add(CatalogEntry::new("7", "Screen", Money::from_cents(10_000)), 2).unwrap();
/// cart.set_discount("7", Percent::from_whole(10)).unwrap();
///
/// let params = SettlementParameters::new(Percent::from_whole(5), Percent::from_whole(8));
/// let totals = settle(cart.lines(), &params).rounded();
///
/// assert_eq!(totals.subtotal.cents(), 18_000);
/// assert_eq!(totals.global_discount_amount.cents(), 900);
/// assert_eq!(totals.tax_amount.cents(), 1_368);
/// assert_eq!(totals.grand_total.cents(), 18_468);
/// ```
pub fn settle(lines: &[LineItem], params: &SettlementParameters) -> SettlementResult {
    let subtotal = lines
        .iter()
        .map(LineItem::net)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let global_discount_amount = params.global_discount.amount(subtotal);
    let after_discount = subtotal.saturating_sub(global_discount_amount);
    let tax_amount = params.tax_rate.of(after_discount);
    let grand_total = after_discount.saturating_add(tax_amount);
    let balance_due = grand_total
        .saturating_sub(params.amount_paid.to_decimal())
        .max(Decimal::ZERO);

    SettlementResult {
        subtotal,
        global_discount_amount,
        after_discount,
        tax_amount,
        grand_total,
        balance_due,
    }
}

/// Itemises each line: gross, line discount and net.
pub fn breakdown(lines: &[LineItem]) -> Vec<LineBreakdown> {
    lines
        .iter()
        .map(|line| LineBreakdown {
            id: line.id.clone(),
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            discount: line.discount,
            gross: line.gross(),
            discount_amount: line.discount_amount(),
            net: line.net(),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

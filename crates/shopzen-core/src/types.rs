//! # Domain Types
//!
//! Small value types shared by the cart, pricing and purchase modules.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Value Types                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐                         │
//! │  │    Percent      │   │    PaymentStatus     │                         │
//! │  │  ─────────────  │   │  ──────────────────  │                         │
//! │  │  Decimal        │   │  Paid    (green)     │                         │
//! │  │  10   = 10%     │   │  Partial (yellow)    │                         │
//! │  │  8.25 = 8.25%   │   │  Due     (red)       │                         │
//! │  └─────────────────┘   └──────────────────────┘                         │
//! │                                                                         │
//! │  Percent drives line discounts, the global discount and the tax rate.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Percent
// =============================================================================

/// A percentage held as an exact decimal: `Percent::from_whole(10)` is 10%.
///
/// Not clamped. Settlement accepts any value; range checks live in
/// [`crate::validation::validate_percent`] for callers that want them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(#[ts(type = "string")] Decimal);

impl Percent {
    /// Wraps a decimal percentage value.
    #[inline]
    pub const fn new(value: Decimal) -> Self {
        Percent(value)
    }

    /// Creates a percentage from a whole number (`10` → 10%).
    #[inline]
    pub fn from_whole(pct: i64) -> Self {
        Percent(Decimal::from(pct))
    }

    /// Creates a percentage from basis points (`825` → 8.25%).
    #[inline]
    pub fn from_bps(bps: i64) -> Self {
        Percent(Decimal::new(bps, 2))
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(Decimal::ZERO)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The percentage value (`8.25` for 8.25%).
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// The percentage as a fraction (`0.0825` for 8.25%).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Applies the percentage to an amount, unrounded.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use shopzen_core::Percent;
    ///
    /// let tax = Percent::from_whole(8).of(Decimal::from(171));
    /// assert_eq!(tax, Decimal::new(1368, 2)); // 13.68
    /// ```
    ///
    /// Products beyond the `Decimal` range saturate instead of panicking.
    #[inline]
    pub fn of(&self, amount: Decimal) -> Decimal {
        amount.saturating_mul(self.0) / Decimal::ONE_HUNDRED
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

/// Shows `8.25%`, `10%`.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

/// Parses user-typed percentages: `10`, `8.25`, `5%`.
impl FromStr for Percent {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();

        Decimal::from_str(number)
            .map(Percent)
            .map_err(|_| ValidationError::InvalidNumber {
                field: "percentage".to_string(),
                input: trimmed.to_string(),
            })
    }
}

// =============================================================================
// Payment Status
// =============================================================================

/// How much of an invoice has been settled.
///
/// ## Classification
/// ```text
/// amount_paid >= grand_total        → Paid
/// 0 < amount_paid < grand_total     → Partial
/// otherwise                         → Due
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Due,
}

impl PaymentStatus {
    /// Classifies a payment against the presented (rounded) grand total.
    ///
    /// ## Example
    /// ```rust
    /// use shopzen_core::{Money, PaymentStatus};
    ///
    /// let status = PaymentStatus::classify(
    ///     Money::from_cents(89_050),
    ///     Money::from_cents(50_000),
    /// );
    /// assert_eq!(status, PaymentStatus::Partial);
    /// ```
    pub fn classify(grand_total: Money, amount_paid: Money) -> Self {
        if amount_paid >= grand_total {
            PaymentStatus::Paid
        } else if amount_paid.is_positive() {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Due
        }
    }

    /// Badge colour used by the purchase table.
    pub const fn badge_color(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "green",
            PaymentStatus::Partial => "yellow",
            PaymentStatus::Due => "red",
        }
    }

    /// Upper-case badge text.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Partial => "PARTIAL",
            PaymentStatus::Due => "DUE",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Due => "due",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Money Module
//!
//! Provides the `Money` type for stored monetary values.
//!
//! ## Stored vs. Computed Amounts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  STORED (Money, integer cents)        COMPUTED (Decimal, unrounded)     │
//! │  ─────────────────────────────        ─────────────────────────────     │
//! │  unit price       $1199.00            line discount   19.788            │
//! │  amount paid      $500.00             subtotal        1179.212          │
//! │  flat discount    $50.00              tax (8.25%)     97.284990         │
//! │                                                                         │
//! │         │                                      │                        │
//! │         └──── to_decimal() (exact) ────────────┤                        │
//! │                                                ▼                        │
//! │                               from_decimal_rounded() ← display only    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Percent-of-cents math produces fractions of a cent. Rounding those at every
//! step drifts, so settlement stays in `Decimal` and converts back to `Money`
//! exactly once, when the figures are presented.
//!
//! ## Usage
//! ```rust
//! use shopzen_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let doubled = price * 2;             // $21.98
//! assert_eq!(doubled.cents(), 2198);
//!
//! let typed: Money = "$1,199.00".parse().unwrap();
//! assert_eq!(typed.cents(), 119_900);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// Decimal places used for every presented currency figure.
pub const CURRENCY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so that refunds and flat discounts can be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use shopzen_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a computed decimal to whole cents (half away from zero).
    ///
    /// This is the presentation step; call it once on a finished figure,
    /// never on an intermediate value.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use shopzen_core::money::Money;
    ///
    /// // 13.675 → $13.68
    /// let tax = Decimal::new(13_675, 3);
    /// assert_eq!(Money::from_decimal_rounded(tax).cents(), 1368);
    /// ```
    ///
    /// Figures beyond the range of `i64` cents clamp to the nearest end.
    pub fn from_decimal_rounded(value: Decimal) -> Self {
        Money::checked_from_decimal(value).unwrap_or(if value.is_sign_negative() {
            Money(i64::MIN)
        } else {
            Money(i64::MAX)
        })
    }

    /// Like [`Money::from_decimal_rounded`], but `None` when the rounded
    /// value does not fit in `i64` cents.
    pub fn checked_from_decimal(value: Decimal) -> Option<Self> {
        value
            .round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Money)
    }

    /// Returns the exact decimal value in major units ($12.34 → 12.34).
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, CURRENCY_DECIMALS)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Strictly more than nothing.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats with a currency symbol, sign first: `€12.50`, `-€3.00`.
    pub fn format_with(&self, symbol: &str) -> String {
        let value = self.to_decimal();
        if value.is_sign_negative() {
            format!("-{}{:.2}", symbol, value.abs())
        } else {
            format!("{}{:.2}", symbol, value)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$10.99` / `-$5.50`.
///
/// Receipts and the console use [`Money::format_with`] and their configured
/// symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

/// Parses user-typed amounts: `12`, `12.5`, `$1,199.00`, `-3.75`.
///
/// More than two decimals are rounded half away from zero. Text whose value
/// does not fit in `i64` cents is rejected, not clamped.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidNumber {
            field: "amount".to_string(),
            input: s.trim().to_string(),
        };

        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
            .collect();

        let value = Decimal::from_str(&cleaned).map_err(|_| invalid())?;
        Money::checked_from_decimal(value).ok_or_else(invalid)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

/// Unit price times quantity.
impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        Money(self.0 * quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.map(|m| m.0).sum())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

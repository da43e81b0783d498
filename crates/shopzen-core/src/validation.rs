//! # Validation Module
//!
//! Input parsing and range checks for the forms that feed the engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form text (frontend)                                         │
//! │  └── "12.50", "8 %", "" typed by the user                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_* : text → Money / Percent / quantity                       │
//! │  └── validate_* : range and required-field rules                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: pricing::settle                                              │
//! │  └── Total function, assumes inputs already passed layer 2             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopzen_core::validation::{parse_amount, validate_quantity};
//!
//! let price = parse_amount("purchase price", "4.50").unwrap();
//! assert_eq!(price.cents(), 450);
//!
//! assert!(validate_quantity(0).is_err());
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Percent;
use crate::{MAX_AMOUNT_CENTS, MAX_LINE_QUANTITY, MAX_TAX_PERCENT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest item or supplier name accepted.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Checks that a required text field is filled in and returns it trimmed.
///
/// ## Example
/// ```rust
/// use shopzen_core::validation::validate_required;
///
/// assert_eq!(validate_required("supplier", "  TechSupply Co. ").unwrap(), "TechSupply Co.");
/// assert!(validate_required("invoice number", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Validates an item or supplier name: required, at most 200 characters.
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = validate_required("name", name)?;

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity: positive and at most `MAX_LINE_QUANTITY`.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: "1".to_string(),
            max: MAX_LINE_QUANTITY.to_string(),
        });
    }

    Ok(())
}

/// Validates a non-negative amount no larger than `MAX_AMOUNT_CENTS`.
fn validate_non_negative_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    if amount.cents() > MAX_AMOUNT_CENTS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: Money::zero().to_string(),
            max: Money::from_cents(MAX_AMOUNT_CENTS).to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    validate_non_negative_amount("price", price)
}

/// Validates an amount already paid.
pub fn validate_amount_paid(amount: Money) -> ValidationResult<()> {
    validate_non_negative_amount("payment made", amount)
}

/// Validates a flat invoice discount: not negative and not more than the
/// exact subtotal it comes off.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use shopzen_core::validation::validate_flat_discount;
/// use shopzen_core::Money;
///
/// let subtotal = Decimal::new(81_750, 2);
/// assert!(validate_flat_discount(Money::from_cents(81_750), subtotal).is_ok());
/// assert!(validate_flat_discount(Money::from_cents(81_751), subtotal).is_err());
/// ```
pub fn validate_flat_discount(discount: Money, subtotal: Decimal) -> ValidationResult<()> {
    if discount.is_negative() {
        return Err(ValidationError::Negative {
            field: "discount".to_string(),
        });
    }

    if discount.to_decimal() > subtotal.max(Decimal::ZERO) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: Money::zero().to_string(),
            max: Money::from_decimal_rounded(subtotal.max(Decimal::ZERO)).to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage: 0 to 100 inclusive.
///
/// ## Example
/// ```rust
/// use shopzen_core::validation::validate_percent;
/// use shopzen_core::Percent;
///
/// assert!(validate_percent("discount", Percent::from_whole(100)).is_ok());
/// assert!(validate_percent("discount", Percent::from_whole(101)).is_err());
/// ```
pub fn validate_percent(field: &str, pct: Percent) -> ValidationResult<()> {
    if pct.value() < Decimal::ZERO || pct.value() > Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: "0".to_string(),
            max: "100".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate: 0 to `MAX_TAX_PERCENT` inclusive.
pub fn validate_tax_rate(rate: Percent) -> ValidationResult<()> {
    if rate.value() < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: "tax rate".to_string(),
        });
    }

    if rate.value() > Decimal::from(MAX_TAX_PERCENT) {
        return Err(ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: "0".to_string(),
            max: MAX_TAX_PERCENT.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Parsers
// =============================================================================

/// Parses a currency amount typed into `field`.
///
/// Magnitudes above `MAX_AMOUNT_CENTS` are out of range.
pub fn parse_amount(field: &str, text: &str) -> ValidationResult<Money> {
    let amount = Money::from_str(text).map_err(|_| ValidationError::InvalidNumber {
        field: field.to_string(),
        input: text.trim().to_string(),
    })?;

    if amount.cents().unsigned_abs() > MAX_AMOUNT_CENTS.unsigned_abs() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: Money::from_cents(-MAX_AMOUNT_CENTS).to_string(),
            max: Money::from_cents(MAX_AMOUNT_CENTS).to_string(),
        });
    }

    Ok(amount)
}

/// Like [`parse_amount`], but a blank field reads as zero.
///
/// Matches the discount / payment-made inputs, which start out empty.
pub fn parse_optional_amount(field: &str, text: &str) -> ValidationResult<Money> {
    if text.trim().is_empty() {
        return Ok(Money::zero());
    }
    parse_amount(field, text)
}

/// Parses a percentage typed into `field`; a blank field reads as zero.
pub fn parse_percent(field: &str, text: &str) -> ValidationResult<Percent> {
    if text.trim().is_empty() {
        return Ok(Percent::zero());
    }

    Percent::from_str(text).map_err(|_| ValidationError::InvalidNumber {
        field: field.to_string(),
        input: text.trim().to_string(),
    })
}

/// Parses and validates a quantity.
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field: "quantity".to_string(),
            input: trimmed.to_string(),
        })?;

    validate_quantity(qty)?;
    Ok(qty)
}

// =============================================================================
// Unit Tests
// =============================================================================

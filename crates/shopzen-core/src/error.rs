//! # Error Types
//!
//! Domain-specific error types for shopzen-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopzen-core errors (this file)                                       │
//! │  ├── CoreError        - Umbrella for everything below                  │
//! │  ├── CartError        - Cart/invoice mutations that cannot apply       │
//! │  └── ValidationError  - User input that fails parsing or range checks  │
//! │                                                                         │
//! │  Console errors (apps/console)                                         │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError/CartError → CoreError → ApiError → Frontend     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The settlement engine itself has no error type: it is total over its
//! inputs. Every variant here is local and recoverable by correcting input.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A cart or invoice mutation could not be applied.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Cart Error
// =============================================================================

/// Errors raised while mutating a cart or purchase invoice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// No line with this catalog identifier exists.
    ///
    /// ## When This Occurs
    /// - The line was removed in another action (quantity dropped to zero)
    /// - The frontend holds a stale row after the cart was cleared
    #[error("Line {0} is not in the cart")]
    LineNotFound(String),

    /// Lines are added with at least one unit.
    #[error("Cannot add a quantity of {0}; quantity must be at least 1")]
    NonPositiveQuantity(i64),

    /// Line quantity would exceed the per-line maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Cart already holds the maximum number of distinct lines.
    #[error("Cart cannot have more than {max} lines")]
    CartFull { max: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are reported inline next to the offending form field and never
/// abort anything; the user corrects the input and tries again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: String, max: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Text could not be read as a number.
    #[error("{field} is not a valid number: '{input}'")]
    InvalidNumber { field: String, input: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_messages() {
        let err = CartError::QuantityTooLarge {
            requested: 12_000,
            max: 9_999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 12000 exceeds maximum allowed (9999)"
        );
        assert_eq!(
            CartError::LineNotFound("42".into()).to_string(),
            "Line 42 is not in the cart"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "supplier".to_string(),
        };
        assert_eq!(err.to_string(), "supplier is required");

        let err = ValidationError::InvalidNumber {
            field: "price".to_string(),
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "price is not a valid number: 'abc'");
    }

    #[test]
    fn test_conversions_into_core_error() {
        let core_err: CoreError = ValidationError::Required {
            field: "invoice number".to_string(),
        }
        .into();
        assert!(matches!(core_err, CoreError::Validation(_)));

        let core_err: CoreError = CartError::CartFull { max: 100 }.into();
        assert_eq!(core_err.to_string(), "Cart cannot have more than 100 lines");
    }
}

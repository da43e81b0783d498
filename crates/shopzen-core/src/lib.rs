//! # shopzen-core: Pure Business Logic for ShopZen
//!
//! This crate holds the pricing and settlement rules shared by the
//! point-of-sale screen and the purchase invoice builder. Everything here is
//! a pure function or a plain owned value; nothing performs I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopZen Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Console (frontend)                       │   │
//! │  │    POS screen ──► Cart table ──► Summary ──► Print receipt      │   │
//! │  │    Purchases  ──► Invoice form ──► Status badge                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/console (sessions)                      │   │
//! │  │    add_to_cart, set_quantity, set_tax_rate, submit_purchase     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopzen-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐  │   │
//! │  │   │  money  │ │  cart   │ │ pricing │ │ purchase │ │receipt │  │   │
//! │  │   │ Money   │ │ Cart    │ │ settle  │ │ Draft    │ │ render │  │   │
//! │  │   │ Percent │ │LineItem │ │ Result  │ │ Ledger   │ │        │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type stored as integer cents
//! - [`types`] - Percent, PaymentStatus and other small value types
//! - [`cart`] - Line items and the insertion-ordered cart/invoice collection
//! - [`pricing`] - The settlement engine (discounts, tax, balance)
//! - [`purchase`] - Supplier purchase invoices and the purchase ledger
//! - [`receipt`] - Fixed-width text receipt layout
//! - [`validation`] - Caller-side input parsing and range checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output; settlement is never cached
//! 2. **Exact Math**: settlement runs on decimals and rounds once, for display
//! 3. **Total Engine**: `settle` never fails; validation belongs to callers
//!
//! ## Example Usage
//!
//! ```rust
//! use shopzen_core::{Cart, CatalogEntry, Money, Percent, SettlementParameters};
//!
//! let mut cart = Cart::new();
//! cart.add(CatalogEntry::new("1", "iPhone 14 Pro", Money::from_cents(119_900)), 1)
//!     .unwrap();
//!
//! let params = SettlementParameters::new(Percent::zero(), Percent::from_whole(10));
//! let totals = cart.settle(&params).rounded();
//!
//! assert_eq!(totals.subtotal.cents(), 119_900);
//! assert_eq!(totals.tax_amount.cents(), 11_990);
//! assert_eq!(totals.grand_total.cents(), 131_890);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod purchase;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CatalogEntry, LineItem};
pub use error::{CartError, CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{
    breakdown, settle, GlobalDiscount, LineBreakdown, SettlementParameters, SettlementResult,
    SettlementTotals,
};
pub use purchase::{PurchaseDraft, PurchaseLedger, PurchaseRecord, PurchaseSummary};
pub use receipt::{Receipt, ReceiptHeader};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart or invoice.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line.
///
/// Guards against typing 10000 instead of 10 at the register.
pub const MAX_LINE_QUANTITY: i64 = 9_999;

/// Largest amount a form accepts for a price, payment or flat discount
/// ($10,000,000.00).
pub const MAX_AMOUNT_CENTS: i64 = 1_000_000_000;

/// Highest tax rate accepted, in whole percent.
pub const MAX_TAX_PERCENT: i64 = 100;

/// Default POS tax rate, in whole percent.
pub const DEFAULT_POS_TAX_PERCENT: i64 = 10;

/// Default purchase invoice tax rate, in whole percent.
pub const DEFAULT_PURCHASE_TAX_PERCENT: i64 = 8;

//! # Console Commands
//!
//! Every action the shop console exposes.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── cart.rs      ◄─── POS cart, discounts, tax, receipt
//! ├── purchase.rs  ◄─── Purchase invoice form and ledger
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! Each command borrows only the state it needs and returns either a fresh
//! response or an [`ApiError`](crate::error::ApiError):
//! ```rust,ignore
//! // Only needs the POS session
//! fn get_cart(session: &PosSession) -> CartResponse
//!
//! // Mutates it
//! fn add_to_cart(session: &mut PosSession, entry: CatalogEntry, quantity: Option<i64>)
//!     -> Result<CartResponse, ApiError>
//!
//! // Needs both the session and configuration
//! fn print_receipt(session: &PosSession, config: &ConfigState, printed_at: NaiveDateTime)
//!     -> Result<String, ApiError>
//! ```

pub mod cart;
pub mod config;
pub mod purchase;

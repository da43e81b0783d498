//! # State Module
//!
//! Owned state objects for the console.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────────┐  ┌─────────────────┐  ┌──────────────────┐            │
//! │  │  PosSession  │  │ PurchaseSession │  │   ConfigState    │            │
//! │  │              │  │                 │  │                  │            │
//! │  │  Cart        │  │  PurchaseDraft  │  │  store_name      │            │
//! │  │  discount    │  │  PurchaseLedger │  │  tax rates       │            │
//! │  │  tax rate    │  │                 │  │  receipt width   │            │
//! │  └──────────────┘  └─────────────────┘  └──────────────────┘            │
//! │                                                                         │
//! │  Single-threaded: commands take `&mut` to the state they change.        │
//! │  ConfigState is read-only after startup.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod pos;
mod purchase;

pub use config::ConfigState;
pub use pos::PosSession;
pub use purchase::PurchaseSession;

//! # ShopZen Console Entry Point
//!
//! Settles a saved POS ticket and prints its receipt.
//!
//! ```text
//! $ shopzen demos/sale.json
//! $ shopzen demos/sale.json --width 32
//! $ shopzen demos/sale.json --json
//! ```
//!
//! The actual setup is in lib.rs for testability.

fn main() {
    if let Err(e) = shopzen_console::run() {
        eprintln!("shopzen: {}", e);
        std::process::exit(1);
    }
}

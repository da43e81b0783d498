//! # Cart Commands
//!
//! Commands behind the POS screen.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│ Receipt  │                         │
//! │  │  Cart    │     │          │     │ printed  │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │                        │                                                │
//! │                   add_to_cart          print_receipt                    │
//! │                   update_quantity                                       │
//! │                   update_line_discount                                  │
//! │                   set_customer_discount / set_tax_rate                  │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────► (back to empty)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating command answers with a freshly settled [`CartResponse`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shopzen_core::validation::{
    validate_item_name, validate_percent, validate_price, validate_quantity, validate_tax_rate,
};
use shopzen_core::{CatalogEntry, LineItem, Percent, Receipt, ReceiptHeader, SettlementTotals};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, PosSession};

/// Cart contents plus the settled summary panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    /// Sum of quantities, the "N items" badge
    pub item_count: i64,
    pub customer_discount: Percent,
    pub tax_rate: Percent,
    pub totals: SettlementTotals,
}

impl From<&PosSession> for CartResponse {
    fn from(session: &PosSession) -> Self {
        CartResponse {
            items: session.cart().lines().to_vec(),
            item_count: session.cart().total_quantity(),
            customer_discount: session.customer_discount(),
            tax_rate: session.tax_rate(),
            totals: session.settle().rounded(),
        }
    }
}

/// Gets the current cart and its totals.
pub fn get_cart(session: &PosSession) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(session)
}

/// Adds a catalog item to the cart.
///
/// ## Behavior
/// - Already in cart: quantity increases, the original price is kept
/// - Not in cart: added as a new line with no line discount
///
/// ## Arguments
/// * `entry` - The clicked catalog tile
/// * `quantity` - Units to add (default: 1)
pub fn add_to_cart(
    session: &mut PosSession,
    entry: CatalogEntry,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(item_id = %entry.id, quantity = %quantity, "add_to_cart command");

    validate_quantity(quantity)?;
    let name = validate_item_name(&entry.name)?;
    validate_price(entry.unit_price)?;

    session.cart_mut().add(
        CatalogEntry {
            name,
            ..entry
        },
        quantity,
    )?;

    Ok(CartResponse::from(&*session))
}

/// Sets a line's quantity. Zero or below removes the line.
pub fn update_quantity(
    session: &mut PosSession,
    line_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(line_id = %line_id, quantity = %quantity, "update_quantity command");

    session.cart_mut().set_quantity(line_id, quantity)?;
    Ok(CartResponse::from(&*session))
}

/// Sets a line's discount percentage (0 to 100).
pub fn update_line_discount(
    session: &mut PosSession,
    line_id: &str,
    discount: Percent,
) -> Result<CartResponse, ApiError> {
    debug!(line_id = %line_id, discount = %discount, "update_line_discount command");

    validate_percent("line discount", discount)?;
    session.cart_mut().set_discount(line_id, discount)?;
    Ok(CartResponse::from(&*session))
}

/// Removes a line from the cart.
pub fn remove_from_cart(session: &mut PosSession, line_id: &str) -> Result<CartResponse, ApiError> {
    debug!(line_id = %line_id, "remove_from_cart command");

    session.cart_mut().remove(line_id)?;
    Ok(CartResponse::from(&*session))
}

/// Empties the cart and resets the customer discount.
pub fn clear_cart(session: &mut PosSession) -> CartResponse {
    debug!("clear_cart command");

    session.clear();
    CartResponse::from(&*session)
}

/// Sets the whole-cart customer discount (0 to 100).
pub fn set_customer_discount(
    session: &mut PosSession,
    discount: Percent,
) -> Result<CartResponse, ApiError> {
    debug!(discount = %discount, "set_customer_discount command");

    validate_percent("customer discount", discount)?;
    session.set_customer_discount(discount);
    Ok(CartResponse::from(&*session))
}

/// Sets the tax rate applied after discounts.
pub fn set_tax_rate(session: &mut PosSession, tax_rate: Percent) -> Result<CartResponse, ApiError> {
    debug!(tax_rate = %tax_rate, "set_tax_rate command");

    validate_tax_rate(tax_rate)?;
    session.set_tax_rate(tax_rate);
    Ok(CartResponse::from(&*session))
}

/// Lays out the receipt for the current cart.
///
/// ## Errors
/// Refuses an empty cart; there is nothing to print.
pub fn print_receipt(
    session: &PosSession,
    config: &ConfigState,
    printed_at: NaiveDateTime,
) -> Result<String, ApiError> {
    debug!(lines = session.cart().len(), "print_receipt command");

    if session.cart().is_empty() {
        return Err(ApiError::validation("Cart is empty"));
    }

    let header = ReceiptHeader {
        store_name: config.store_name.clone(),
        tagline: config.tagline.clone(),
        printed_at,
        currency_symbol: config.currency_symbol.clone(),
    };
    let receipt = Receipt::new(header, session.cart().lines(), session.parameters());

    info!(
        grand_total = %config.format_currency(receipt.totals().grand_total),
        lines = session.cart().len(),
        "Receipt settled"
    );

    Ok(receipt.render(config.receipt_width))
}

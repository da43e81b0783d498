//! # Ticket Files
//!
//! A ticket is a saved POS sale in JSON. The `shopzen` binary replays one
//! into a [`PosSession`] through the same cart commands the screen uses.
//!
//! ## Format
//! ```json
//! {
//!   "lines": [
//!     { "id": "1", "name": "iPhone 14 Pro", "unitPrice": "1199.00", "quantity": 1 },
//!     { "id": "2", "name": "Phone Case", "unitPrice": "29", "quantity": 2, "discount": "10" }
//!   ],
//!   "customerDiscount": "5",
//!   "taxRate": "8.25"
//! }
//! ```
//!
//! Amounts and percentages are text, exactly as typed at the register.
//! `discount`, `customerDiscount` and `taxRate` may be omitted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shopzen_core::validation::{parse_amount, parse_percent};
use shopzen_core::CatalogEntry;
use thiserror::Error;

use crate::commands::cart::{
    add_to_cart, set_customer_discount, set_tax_rate, update_line_discount, CartResponse,
};
use crate::error::ApiError;
use crate::state::PosSession;

/// Failures while loading or replaying a ticket.
#[derive(Debug, Error)]
pub enum TicketError {
    #[error("Failed to read ticket: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed ticket: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ticket rejected: {0}")]
    Api(#[from] ApiError),
}

/// One cart line as stored in a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketLine {
    pub id: String,
    pub name: String,
    pub unit_price: String,
    pub quantity: i64,
    #[serde(default)]
    pub discount: Option<String>,
}

/// A saved sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub lines: Vec<TicketLine>,
    #[serde(default)]
    pub customer_discount: Option<String>,
    #[serde(default)]
    pub tax_rate: Option<String>,
}

impl Ticket {
    /// Reads and parses a ticket file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TicketError> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, TicketError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Replays the ticket into `session`, line by line.
    ///
    /// Stops at the first rejected value; lines before it stay in the cart.
    pub fn apply(&self, session: &mut PosSession) -> Result<CartResponse, ApiError> {
        for line in &self.lines {
            let unit_price = parse_amount("unit price", &line.unit_price)?;
            let entry = CatalogEntry::new(line.id.clone(), line.name.clone(), unit_price);
            add_to_cart(session, entry, Some(line.quantity))?;

            if let Some(discount) = &line.discount {
                let discount = parse_percent("line discount", discount)?;
                update_line_discount(session, &line.id, discount)?;
            }
        }

        if let Some(discount) = &self.customer_discount {
            set_customer_discount(session, parse_percent("customer discount", discount)?)?;
        }

        if let Some(tax_rate) = &self.tax_rate {
            set_tax_rate(session, parse_percent("tax rate", tax_rate)?)?;
        }

        Ok(CartResponse::from(&*session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shopzen_core::Percent;

    const SCENARIO_B: &str = r#"{
        "lines": [
            { "id": "1", "name": "iPhone 14 Pro", "unitPrice": "1199.00", "quantity": 1, "discount": "5" },
            { "id": "3", "name": "AirPods Pro", "unitPrice": "249.00", "quantity": 2 }
        ],
        "customerDiscount": "3",
        "taxRate": "10"
    }"#;

    #[test]
    fn test_apply_settles_like_the_register() {
        // 1139.05 + 498.00 = 1637.05, less 3% = 1587.9385, plus 10% tax
        let ticket = Ticket::parse(SCENARIO_B).unwrap();
        let mut session = PosSession::new(Percent::zero());

        let response = ticket.apply(&mut session).unwrap();

        assert_eq!(response.item_count, 3);
        assert_eq!(response.totals.subtotal.cents(), 163_705);
        assert_eq!(response.totals.global_discount_amount.cents(), 4_911);
        assert_eq!(response.totals.tax_amount.cents(), 15_879);
        assert_eq!(response.totals.grand_total.cents(), 174_673);
    }

    #[test]
    fn test_missing_tax_keeps_session_rate() {
        let ticket = Ticket::parse(
            r#"{ "lines": [{ "id": "9", "name": "USB-C Cable", "unitPrice": "19.99", "quantity": 1 }] }"#,
        )
        .unwrap();
        let mut session = PosSession::new(Percent::from_whole(10));

        let response = ticket.apply(&mut session).unwrap();
        assert_eq!(response.tax_rate, Percent::from_whole(10));
        assert_eq!(response.totals.grand_total.cents(), 2_199);
    }

    #[test]
    fn test_bad_price_is_rejected() {
        let ticket = Ticket::parse(
            r#"{ "lines": [{ "id": "9", "name": "Cable", "unitPrice": "cheap", "quantity": 1 }] }"#,
        )
        .unwrap();
        let mut session = PosSession::new(Percent::zero());

        let err = ticket.apply(&mut session).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_out_of_range_values_are_rejected_not_settled() {
        let huge_price = Ticket::parse(
            r#"{ "lines": [{ "id": "1", "name": "iPhone 14 Pro", "unitPrice": "79228162514264337593543950335", "quantity": 1 }] }"#,
        )
        .unwrap();
        let mut session = PosSession::new(Percent::zero());
        let err = huge_price.apply(&mut session).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(session.cart().is_empty());

        let huge_tax = Ticket::parse(
            r#"{
                "lines": [{ "id": "1", "name": "iPhone 14 Pro", "unitPrice": "1199", "quantity": 1 }],
                "taxRate": "79228162514264337593543950335"
            }"#,
        )
        .unwrap();
        let mut session = PosSession::new(Percent::from_whole(10));
        let err = huge_tax.apply(&mut session).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(session.tax_rate(), Percent::from_whole(10));
        assert_eq!(session.settle().rounded().grand_total.cents(), 131_890);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Ticket::parse("{ lines: "), Err(TicketError::Json(_))));
    }
}

//! # Receipt Layout
//!
//! Fixed-width text receipts for the thermal printer and the print preview.
//! Sending the text to a printer is the caller's job.
//!
//! ## Layout
//! ```text
//!                 ShopZen
//!          Mobile Shop Management
//! Date: 2024-01-16
//! Time: 14:03:00
//! ------------------------------------------
//! Screen Protector
//! 2 x $100.00                        $180.00
//!   Discount: 10%
//! ------------------------------------------
//! Subtotal:                          $180.00
//! Discount (5%):                      -$9.00
//! Tax (8%):                           $13.68
//! ==========================================
//! TOTAL:                             $184.68
//!
//!       Thank you for your business!
//!           Visit us again soon
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::money::Money;
use crate::pricing::{self, GlobalDiscount, LineBreakdown, SettlementParameters, SettlementTotals};

/// Narrowest width the layout supports.
pub const MIN_RECEIPT_WIDTH: usize = 24;

/// Store details printed at the top of every receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptHeader {
    pub store_name: String,
    pub tagline: String,
    pub printed_at: NaiveDateTime,
    /// Printed before every amount, e.g. `$` or `Rs `
    pub currency_symbol: String,
}

/// A settled cart ready to be laid out.
#[derive(Debug, Clone)]
pub struct Receipt {
    header: ReceiptHeader,
    lines: Vec<LineBreakdown>,
    params: SettlementParameters,
    totals: SettlementTotals,
}

impl Receipt {
    /// Itemises and settles `lines` under `params`.
    pub fn new(header: ReceiptHeader, lines: &[LineItem], params: SettlementParameters) -> Self {
        Receipt {
            header,
            lines: pricing::breakdown(lines),
            totals: pricing::settle(lines, &params).rounded(),
            params,
        }
    }

    pub fn totals(&self) -> &SettlementTotals {
        &self.totals
    }

    /// Renders the receipt at `width` characters per row.
    pub fn render(&self, width: usize) -> String {
        let width = width.max(MIN_RECEIPT_WIDTH);
        let mut out: Vec<String> = Vec::new();

        out.push(center(&self.header.store_name, width));
        if !self.header.tagline.is_empty() {
            out.push(center(&self.header.tagline, width));
        }
        out.push(format!("Date: {}", self.header.printed_at.format("%Y-%m-%d")));
        out.push(format!("Time: {}", self.header.printed_at.format("%H:%M:%S")));
        out.push("-".repeat(width));

        for line in &self.lines {
            out.push(line.name.clone());
            out.push(two_columns(
                &format!("{} x {}", line.quantity, self.money(line.unit_price)),
                &self.money(line.net_rounded()),
                width,
            ));
            if !line.discount.is_zero() {
                out.push(format!("  Discount: {}", line.discount));
            }
        }

        out.push("-".repeat(width));
        out.push(two_columns("Subtotal:", &self.money(self.totals.subtotal), width));

        if !self.params.global_discount.is_zero() {
            let label = match self.params.global_discount {
                GlobalDiscount::Percent(pct) => format!("Discount ({}):", pct),
                GlobalDiscount::Flat(_) => "Discount:".to_string(),
            };
            out.push(two_columns(
                &label,
                &format!("-{}", self.money(self.totals.global_discount_amount)),
                width,
            ));
        }

        out.push(two_columns(
            &format!("Tax ({}):", self.params.tax_rate),
            &self.money(self.totals.tax_amount),
            width,
        ));
        out.push("=".repeat(width));
        out.push(two_columns("TOTAL:", &self.money(self.totals.grand_total), width));

        if self.params.amount_paid != Money::zero() {
            out.push(two_columns("Paid:", &self.money(self.params.amount_paid), width));
            out.push(two_columns(
                "Balance:",
                &self.money(self.totals.balance_due),
                width,
            ));
        }

        out.push(String::new());
        out.push(center("Thank you for your business!", width));
        out.push(center("Visit us again soon", width));

        let mut text = out.join("\n");
        text.push('\n');
        text
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with(&self.header.currency_symbol)
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), text)
}

fn two_columns(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{}{}{}", left, " ".repeat(gap), right)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Cart, CatalogEntry};
    use crate::types::Percent;
    use chrono::NaiveDate;

    fn header() -> ReceiptHeader {
        ReceiptHeader {
            store_name: "ShopZen".to_string(),
            tagline: "Mobile Shop Management".to_string(),
            printed_at: NaiveDate::from_ymd_opt(2024, 1, 16)
                .unwrap()
                .and_hms_opt(14, 3, 0)
                .unwrap(),
            currency_symbol: "$".to_string(),
        }
    }

    fn discounted_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(
            CatalogEntry::new("7", "Screen Protector", Money::from_cents(10_000)),
            2,
        )
        .unwrap();
        cart.set_discount("7", Percent::from_whole(10)).unwrap();
        cart
    }

    #[test]
    fn test_two_columns_pads_to_width() {
        assert_eq!(two_columns("TOTAL:", "$1.00", 16), "TOTAL:     $1.00");
        assert_eq!(two_columns("very long label", "$1.00", 10), "very long label $1.00");
    }

    #[test]
    fn test_receipt_itemises_discounts_and_totals() {
        let params = SettlementParameters::new(Percent::from_whole(5), Percent::from_whole(8));
        let receipt = Receipt::new(header(), discounted_cart().lines(), params);
        let text = receipt.render(42);

        assert!(text.contains("Date: 2024-01-16"));
        assert!(text.contains("Time: 14:03:00"));
        assert!(text.contains("Screen Protector\n2 x $100.00"));
        assert!(text.contains("  Discount: 10%"));
        assert!(text.contains(&two_columns("Subtotal:", "$180.00", 42)));
        assert!(text.contains(&two_columns("Discount (5%):", "-$9.00", 42)));
        assert!(text.contains(&two_columns("Tax (8%):", "$13.68", 42)));
        assert!(text.contains(&two_columns("TOTAL:", "$184.68", 42)));
        assert!(!text.contains("Balance:"));
        assert_eq!(receipt.totals().grand_total.cents(), 18_468);
    }

    #[test]
    fn test_receipt_omits_zero_global_discount() {
        let params = SettlementParameters::new(Percent::zero(), Percent::from_whole(10));
        let text = Receipt::new(header(), discounted_cart().lines(), params).render(42);

        assert!(!text.contains("Discount ("));
        assert!(text.contains("Tax (10%):"));
    }

    #[test]
    fn test_receipt_shows_balance_when_paid() {
        let params = SettlementParameters::with_flat_discount(Money::zero(), Percent::zero())
            .with_amount_paid(Money::from_cents(5_000));
        let text = Receipt::new(header(), discounted_cart().lines(), params).render(42);

        assert!(text.contains(&two_columns("Paid:", "$50.00", 42)));
        assert!(text.contains(&two_columns("Balance:", "$130.00", 42)));
    }

    #[test]
    fn test_receipt_uses_header_currency_symbol() {
        let header = ReceiptHeader {
            currency_symbol: "€".to_string(),
            ..header()
        };
        let params = SettlementParameters::new(Percent::from_whole(5), Percent::from_whole(8));
        let text = Receipt::new(header, discounted_cart().lines(), params).render(42);

        assert!(text.contains("2 x €100.00"));
        assert!(text.contains(&two_columns("Discount (5%):", "-€9.00", 42)));
        assert!(text.contains(&two_columns("TOTAL:", "€184.68", 42)));
        assert!(!text.contains('$'));
    }

    #[test]
    fn test_every_row_fits_width() {
        let params = SettlementParameters::new(Percent::from_whole(5), Percent::from_whole(8));
        let text = Receipt::new(header(), discounted_cart().lines(), params).render(32);

        assert!(text.lines().all(|row| row.chars().count() <= 32));
    }
}

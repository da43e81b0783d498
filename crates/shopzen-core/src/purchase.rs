//! # Purchases
//!
//! Supplier purchase invoices: a draft being filled in, the record it
//! becomes on submit, and the ledger of submitted purchases.
//!
//! ## Purchase Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  PurchaseDraft ──── add items, set discount / tax / payment made ────┐  │
//! │       │                                                              │  │
//! │       │  totals() re-runs settle() after every edit  ◄───────────────┘  │
//! │       │                                                                 │
//! │       ▼ submit(today)                                                   │
//! │  ┌────────────────────────┐                                             │
//! │  │ supplier present?      │── no ──► ValidationError::Required          │
//! │  │ invoice no present?    │── no ──► ValidationError::Required          │
//! │  │ at least one item?     │── no ──► ValidationError::Required          │
//! │  │ discount ≤ subtotal?   │── no ──► ValidationError::OutOfRange        │
//! │  └───────────┬────────────┘                                             │
//! │              ▼                                                          │
//! │  PurchaseRecord { total, amount_paid, balance, status } ──► Ledger      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, LineItem};
use crate::error::ValidationError;
use crate::money::Money;
use crate::pricing::{GlobalDiscount, SettlementParameters, SettlementResult};
use crate::types::{PaymentStatus, Percent};
use crate::validation::{self, ValidationResult};
use crate::DEFAULT_PURCHASE_TAX_PERCENT;

// =============================================================================
// Draft
// =============================================================================

/// A purchase invoice being filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseDraft {
    pub supplier: String,
    pub invoice_no: String,
    /// Invoice date; submission falls back to today when absent.
    pub date: Option<NaiveDate>,
    pub items: Cart,
    pub discount: GlobalDiscount,
    pub tax_rate: Percent,
    pub amount_paid: Money,
}

impl Default for PurchaseDraft {
    fn default() -> Self {
        PurchaseDraft {
            supplier: String::new(),
            invoice_no: String::new(),
            date: None,
            items: Cart::new(),
            discount: GlobalDiscount::Flat(Money::zero()),
            tax_rate: Percent::from_whole(DEFAULT_PURCHASE_TAX_PERCENT),
            amount_paid: Money::zero(),
        }
    }
}

impl PurchaseDraft {
    /// An empty draft with the default purchase tax rate.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameters(&self) -> SettlementParameters {
        SettlementParameters {
            global_discount: self.discount,
            tax_rate: self.tax_rate,
            amount_paid: self.amount_paid,
        }
    }

    /// Live totals for the invoice form.
    pub fn totals(&self) -> SettlementResult {
        self.items.settle(&self.parameters())
    }

    /// Validates the draft and freezes it into a record.
    pub fn submit(&self, today: NaiveDate) -> ValidationResult<PurchaseRecord> {
        let supplier = validation::validate_required("supplier", &self.supplier)?;
        let invoice_no = validation::validate_required("invoice number", &self.invoice_no)?;

        if self.items.is_empty() {
            return Err(ValidationError::Required {
                field: "at least one item".to_string(),
            });
        }

        validation::validate_amount_paid(self.amount_paid)?;
        validation::validate_tax_rate(self.tax_rate)?;

        let totals = self.totals();
        match self.discount {
            GlobalDiscount::Flat(amount) => {
                validation::validate_flat_discount(amount, totals.subtotal)?
            }
            GlobalDiscount::Percent(pct) => validation::validate_percent("discount", pct)?,
        }
        let totals = totals.rounded();

        Ok(PurchaseRecord {
            id: Uuid::new_v4(),
            invoice_no,
            supplier,
            date: self.date.unwrap_or(today),
            items: self.items.lines().to_vec(),
            discount: self.discount,
            tax_rate: self.tax_rate,
            total: totals.grand_total,
            amount_paid: self.amount_paid,
            balance: totals.balance_due,
            status: totals.payment_status(self.amount_paid),
        })
    }
}

// =============================================================================
// Record
// =============================================================================

/// A submitted purchase. Figures are frozen, rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    #[ts(as = "String")]
    pub id: Uuid,
    pub invoice_no: String,
    pub supplier: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub items: Vec<LineItem>,
    pub discount: GlobalDiscount,
    pub tax_rate: Percent,
    pub total: Money,
    pub amount_paid: Money,
    /// `max(0, total − amount_paid)`.
    pub balance: Money,
    pub status: PaymentStatus,
}

// =============================================================================
// Ledger
// =============================================================================

/// Dashboard cards above the purchase table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSummary {
    pub count: usize,
    pub total_amount: Money,
    pub total_due: Money,
    pub paid_count: usize,
}

/// Submitted purchases in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PurchaseLedger {
    records: Vec<PurchaseRecord>,
}

impl PurchaseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: PurchaseRecord) {
        self.records.push(record);
    }

    /// Deletes a purchase, returning it if it existed.
    pub fn remove(&mut self, id: Uuid) -> Option<PurchaseRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: Uuid) -> Option<&PurchaseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    /// Purchases with the given payment status.
    pub fn with_status(&self, status: PaymentStatus) -> impl Iterator<Item = &PurchaseRecord> {
        self.records.iter().filter(move |r| r.status == status)
    }

    pub fn summary(&self) -> PurchaseSummary {
        PurchaseSummary {
            count: self.records.len(),
            total_amount: self.records.iter().map(|r| r.total).sum(),
            total_due: self.records.iter().map(|r| r.balance).sum(),
            paid_count: self.with_status(PaymentStatus::Paid).count(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

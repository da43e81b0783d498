//! # Purchase Commands
//!
//! Commands behind the purchases screen: the "Add Purchase" invoice form and
//! the table of submitted purchases.
//!
//! Form fields arrive as the raw text the user typed; parsing and range
//! checks happen here so that the pricing engine only ever sees valid values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shopzen_core::validation::{
    parse_amount, parse_optional_amount, parse_percent, parse_quantity, validate_amount_paid,
    validate_item_name, validate_price, validate_tax_rate,
};
use shopzen_core::{
    CatalogEntry, GlobalDiscount, LineItem, Money, PaymentStatus, Percent, PurchaseRecord,
    PurchaseSummary, SettlementTotals, ValidationError,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::PurchaseSession;

/// The invoice form with its live totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseFormResponse {
    pub supplier: String,
    pub invoice_no: String,
    pub date: Option<NaiveDate>,
    pub items: Vec<LineItem>,
    pub discount: GlobalDiscount,
    pub tax_rate: Percent,
    pub amount_paid: Money,
    pub totals: SettlementTotals,
    /// Badge the invoice would get if submitted now
    pub status: PaymentStatus,
}

impl From<&PurchaseSession> for PurchaseFormResponse {
    fn from(session: &PurchaseSession) -> Self {
        let draft = session.draft();
        let totals = draft.totals().rounded();

        PurchaseFormResponse {
            supplier: draft.supplier.clone(),
            invoice_no: draft.invoice_no.clone(),
            date: draft.date,
            items: draft.items.lines().to_vec(),
            discount: draft.discount,
            tax_rate: draft.tax_rate,
            amount_paid: draft.amount_paid,
            status: totals.payment_status(draft.amount_paid),
            totals,
        }
    }
}

/// The item row of the invoice form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItemInput {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

/// Invoice header and payment fields.
///
/// Blank discount and payment fields read as zero; a blank tax rate keeps
/// the current one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDetailsInput {
    pub supplier: String,
    pub invoice_no: String,
    pub date: Option<NaiveDate>,
    pub discount: String,
    pub tax_rate: String,
    pub amount_paid: String,
}

/// Gets the invoice form and its totals.
pub fn get_purchase_form(session: &PurchaseSession) -> PurchaseFormResponse {
    debug!("get_purchase_form command");
    PurchaseFormResponse::from(session)
}

/// Adds an item row to the invoice.
///
/// Each row becomes its own line, even when the name repeats.
pub fn add_purchase_item(
    session: &mut PurchaseSession,
    input: PurchaseItemInput,
) -> Result<PurchaseFormResponse, ApiError> {
    debug!(name = %input.name, quantity = %input.quantity, price = %input.price, "add_purchase_item command");

    let name = validate_item_name(&input.name)?;
    let quantity = parse_quantity(&input.quantity)?;
    let price = parse_amount("price", &input.price)?;
    validate_price(price)?;

    let entry = CatalogEntry::new(Uuid::new_v4().to_string(), name, price);
    session.draft_mut().items.add(entry, quantity)?;

    Ok(PurchaseFormResponse::from(&*session))
}

/// Removes an item row from the invoice.
pub fn remove_purchase_item(
    session: &mut PurchaseSession,
    line_id: &str,
) -> Result<PurchaseFormResponse, ApiError> {
    debug!(line_id = %line_id, "remove_purchase_item command");

    session.draft_mut().items.remove(line_id)?;
    Ok(PurchaseFormResponse::from(&*session))
}

/// Updates the invoice header, flat discount, tax rate and payment.
///
/// Nothing is applied unless every field parses.
pub fn update_purchase_details(
    session: &mut PurchaseSession,
    input: PurchaseDetailsInput,
) -> Result<PurchaseFormResponse, ApiError> {
    debug!(supplier = %input.supplier, invoice_no = %input.invoice_no, "update_purchase_details command");

    let discount = parse_optional_amount("discount", &input.discount)?;
    if discount.is_negative() {
        return Err(ValidationError::Negative {
            field: "discount".to_string(),
        }
        .into());
    }

    let tax_rate = if input.tax_rate.trim().is_empty() {
        session.draft().tax_rate
    } else {
        parse_percent("tax rate", &input.tax_rate)?
    };
    validate_tax_rate(tax_rate)?;

    let amount_paid = parse_optional_amount("payment made", &input.amount_paid)?;
    validate_amount_paid(amount_paid)?;

    let draft = session.draft_mut();
    draft.supplier = input.supplier;
    draft.invoice_no = input.invoice_no;
    draft.date = input.date;
    draft.discount = GlobalDiscount::Flat(discount);
    draft.tax_rate = tax_rate;
    draft.amount_paid = amount_paid;

    Ok(PurchaseFormResponse::from(&*session))
}

/// Submits the invoice into the ledger and starts a fresh form.
///
/// ## Arguments
/// * `today` - Date used when the form has no invoice date
pub fn submit_purchase(
    session: &mut PurchaseSession,
    today: NaiveDate,
) -> Result<PurchaseRecord, ApiError> {
    debug!("submit_purchase command");

    let record = session.draft().submit(today)?;

    info!(
        purchase_id = %record.id,
        supplier = %record.supplier,
        total = %record.total,
        status = %record.status,
        "Purchase recorded"
    );

    session.ledger_mut().record(record.clone());
    session.reset_draft();

    Ok(record)
}

/// Deletes a submitted purchase.
pub fn delete_purchase(session: &mut PurchaseSession, id: &str) -> Result<PurchaseRecord, ApiError> {
    debug!(purchase_id = %id, "delete_purchase command");

    let uuid = Uuid::parse_str(id).map_err(|_| ApiError::not_found("Purchase", id))?;
    session
        .ledger_mut()
        .remove(uuid)
        .ok_or_else(|| ApiError::not_found("Purchase", id))
}

/// Lists purchases, optionally only those with one payment status.
pub fn list_purchases(
    session: &PurchaseSession,
    status: Option<PaymentStatus>,
) -> Vec<PurchaseRecord> {
    debug!(status = ?status, "list_purchases command");

    match status {
        Some(status) => session.ledger().with_status(status).cloned().collect(),
        None => session.ledger().records().to_vec(),
    }
}

/// Totals for the cards above the purchases table.
pub fn purchase_summary(session: &PurchaseSession) -> PurchaseSummary {
    debug!("purchase_summary command");
    session.ledger().summary()
}

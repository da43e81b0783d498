//! # Purchase Session State
//!
//! The purchases screen: the invoice draft in the "Add Purchase" dialog and
//! the ledger of submitted purchases behind the table.

use shopzen_core::{Percent, PurchaseDraft, PurchaseLedger};

/// Owned purchases-screen state.
#[derive(Debug, Clone, Default)]
pub struct PurchaseSession {
    draft: PurchaseDraft,
    ledger: PurchaseLedger,
    default_tax_rate: Percent,
}

impl PurchaseSession {
    /// Creates a session whose drafts start at `default_tax_rate`.
    pub fn new(default_tax_rate: Percent) -> Self {
        PurchaseSession {
            draft: Self::fresh_draft(default_tax_rate),
            ledger: PurchaseLedger::new(),
            default_tax_rate,
        }
    }

    pub fn draft(&self) -> &PurchaseDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PurchaseDraft {
        &mut self.draft
    }

    pub fn ledger(&self) -> &PurchaseLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut PurchaseLedger {
        &mut self.ledger
    }

    /// Discards the draft and starts an empty one.
    pub fn reset_draft(&mut self) {
        self.draft = Self::fresh_draft(self.default_tax_rate);
    }

    fn fresh_draft(tax_rate: Percent) -> PurchaseDraft {
        PurchaseDraft {
            tax_rate,
            ..PurchaseDraft::new()
        }
    }
}

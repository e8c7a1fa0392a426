//! Invoice entry form state.
//!
//! The controller owns the record being edited. Field edits are applied
//! without validation; validation only runs on [`FormController::submit`].
//! The visible tab ([`FormMode`]) is carried alongside for the rendering
//! layer and has no effect on any other operation.

use invoice_core::error::{InvoiceError, Result};
use invoice_core::form::FormMode;
use invoice_core::invoice::{FieldPath, InvoiceRecord};
use invoice_core::validation::{ValidationErrorSet, validate};

use crate::draft_store::DraftStore;

/// Result of a submit attempt that reached the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was valid and stored; the form was reset to defaults.
    Submitted(InvoiceRecord),
    /// Required fields are missing; nothing changed.
    Rejected(ValidationErrorSet),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// Drives the invoice entry screen.
pub struct FormController {
    draft_store: DraftStore,
    record: InvoiceRecord,
    mode: FormMode,
}

impl FormController {
    /// Creates a controller holding a default record. Call
    /// [`FormController::initialize`] to restore the stored draft.
    pub fn new(draft_store: DraftStore) -> Self {
        Self {
            draft_store,
            record: InvoiceRecord::default(),
            mode: FormMode::default(),
        }
    }

    /// Seeds the form from the stored draft.
    ///
    /// When the store cannot be read the controller keeps its current
    /// in-memory record and returns the error so the caller can notify.
    pub fn initialize(&mut self) -> Result<()> {
        self.record = self.draft_store.load()?;
        Ok(())
    }

    pub fn record(&self) -> &InvoiceRecord {
        &self.record
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: FormMode) {
        tracing::debug!(from = %self.mode, to = %mode, "switching tab");
        self.mode = mode;
    }

    /// Writes `value` at `path` without validating it.
    ///
    /// # Panics
    ///
    /// Panics if `path` addresses an expense line that does not exist. Use
    /// [`FormController::set_field_str`] for paths that come from outside.
    pub fn set_field(&mut self, path: &FieldPath, value: impl Into<String>) {
        self.record.set(path, value);
    }

    /// Parses `path` and writes `value` there.
    ///
    /// Unknown fields and out-of-range expense indices are rejected with
    /// [`InvoiceError::InvalidFieldPath`].
    pub fn set_field_str(&mut self, path: &str, value: impl Into<String>) -> Result<FieldPath> {
        let parsed: FieldPath = path.parse()?;
        if let Some(index) = parsed.expense_index() {
            if !self.record.expenses.contains_index(index) {
                return Err(InvoiceError::invalid_path(
                    path,
                    format!(
                        "expense line {} does not exist ({} lines)",
                        index,
                        self.record.expenses.len()
                    ),
                ));
            }
        }
        self.set_field(&parsed, value);
        Ok(parsed)
    }

    /// Adds a blank expense line and returns its index.
    pub fn append_expense(&mut self) -> usize {
        let index = self.record.expenses.append();
        tracing::debug!(index, "expense line added");
        index
    }

    /// Stores the current record as the draft, regardless of validity.
    pub fn save_draft(&self) -> Result<()> {
        self.draft_store.save(&self.record)
    }

    /// Validates and, when valid, stores the record and resets the form.
    ///
    /// A rejected submit leaves both the in-memory record and the stored
    /// draft untouched. If the store write fails the record is kept so no
    /// edits are lost.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let errors = validate(&self.record);
        if !errors.is_empty() {
            tracing::info!(missing = errors.len(), "submit rejected");
            return Ok(SubmitOutcome::Rejected(errors));
        }

        self.draft_store.save(&self.record)?;
        let submitted = std::mem::take(&mut self.record);
        tracing::info!(invoice_number = %submitted.invoice_number, "invoice submitted");
        Ok(SubmitOutcome::Submitted(submitted))
    }
}

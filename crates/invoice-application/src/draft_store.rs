//! Durable draft slot.

use std::sync::Arc;

use invoice_core::error::{InvoiceError, Result};
use invoice_core::invoice::InvoiceRecord;
use invoice_core::storage::{DRAFT_KEY, KeyValueStore};

/// Persists the single in-progress invoice under the `invoiceForm` key.
#[derive(Clone)]
pub struct DraftStore {
    store: Arc<dyn KeyValueStore>,
}

impl DraftStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Replaces the stored draft with `record`, valid or not.
    pub fn save(&self, record: &InvoiceRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        self.store.set(DRAFT_KEY, &json)?;
        tracing::info!(expenses = record.expenses.len(), "draft saved");
        Ok(())
    }

    /// Returns the stored draft, or a fresh default record.
    ///
    /// Content that does not deserialize into a complete record is discarded
    /// in favor of the default so a corrupt draft never blocks the form.
    /// Only an unreadable store is reported as an error.
    pub fn load(&self) -> Result<InvoiceRecord> {
        let Some(raw) = self.store.get(DRAFT_KEY)? else {
            tracing::debug!("no draft stored; starting from defaults");
            return Ok(InvoiceRecord::default());
        };

        match serde_json::from_str::<InvoiceRecord>(&raw) {
            Ok(record) => {
                tracing::debug!(expenses = record.expenses.len(), "draft restored");
                Ok(record)
            }
            Err(e) => {
                let err = InvoiceError::malformed(DRAFT_KEY, e.to_string());
                tracing::warn!(error = %err, "discarding draft");
                Ok(InvoiceRecord::default())
            }
        }
    }

    /// Removes the stored draft. Idempotent.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(DRAFT_KEY)?;
        tracing::debug!("draft cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_core::invoice::{ExpenseField, FieldPath, InvoiceField};
    use invoice_infrastructure::InMemoryStore;

    fn store() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::new())
    }

    #[test]
    fn test_round_trip_preserves_partial_record() {
        let drafts = DraftStore::new(store());
        let mut record = InvoiceRecord::default();
        record.set(&FieldPath::Invoice(InvoiceField::Vendor), "Tech Solutions Inc.");
        record.expenses.append();
        record.set(&FieldPath::expense(1, ExpenseField::Location), "Chicago");

        drafts.save(&record).unwrap();

        assert_eq!(drafts.load().unwrap(), record);
    }

    #[test]
    fn test_load_without_draft_is_default() {
        let drafts = DraftStore::new(store());
        assert_eq!(drafts.load().unwrap(), InvoiceRecord::default());
    }

    #[test]
    fn test_load_heals_malformed_content() {
        let kv = store();
        let drafts = DraftStore::new(kv.clone());

        for bad in [
            "garbage",
            "[1, 2, 3]",
            r#"{"vendor": "A-1 Exterminators"}"#,
            r#"{"vendor":"","purchaseOrderNumber":"","invoiceNumber":"","invoiceDate":"",
               "totalAmount":"","paymentTerms":"","invoiceDueDate":"","glPostDate":"",
               "invoiceDescription":"","expenses":[],"comments":""}"#,
        ] {
            kv.set(DRAFT_KEY, bad).unwrap();
            assert_eq!(drafts.load().unwrap(), InvoiceRecord::default(), "{bad}");
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let kv = store();
        let drafts = DraftStore::new(kv.clone());
        drafts.save(&InvoiceRecord::default()).unwrap();

        drafts.clear().unwrap();
        drafts.clear().unwrap();

        assert_eq!(kv.get(DRAFT_KEY).unwrap(), None);
    }
}

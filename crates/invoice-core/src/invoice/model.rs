//! Invoice record domain model.

use serde::{Deserialize, Serialize};

use super::field::{ExpenseField, FieldPath, InvoiceField};
use super::line_items::ExpenseLines;

/// One line of the expense breakdown.
///
/// Lines have no durable id; a line is addressed by its position in
/// [`InvoiceRecord::expenses`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub amount: String,
    pub department: String,
    pub account: String,
    pub location: String,
    pub description: String,
}

impl ExpenseLine {
    pub fn field(&self, field: ExpenseField) -> &str {
        match field {
            ExpenseField::Amount => &self.amount,
            ExpenseField::Department => &self.department,
            ExpenseField::Account => &self.account,
            ExpenseField::Location => &self.location,
            ExpenseField::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, field: ExpenseField) -> &mut String {
        match field {
            ExpenseField::Amount => &mut self.amount,
            ExpenseField::Department => &mut self.department,
            ExpenseField::Account => &mut self.account,
            ExpenseField::Location => &mut self.location,
            ExpenseField::Description => &mut self.description,
        }
    }

    /// True when every field is the empty string.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// The invoice under entry.
///
/// Serialized in camelCase; this is the exact shape persisted as a draft.
/// Every field is required on the wire: a draft missing any of them is
/// treated as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub vendor: String,
    pub purchase_order_number: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub total_amount: String,
    pub payment_terms: String,
    pub invoice_due_date: String,
    pub gl_post_date: String,
    pub invoice_description: String,
    pub expenses: ExpenseLines,
    pub comments: String,
}

impl Default for InvoiceRecord {
    /// All strings empty and exactly one blank expense line.
    fn default() -> Self {
        Self {
            vendor: String::new(),
            purchase_order_number: String::new(),
            invoice_number: String::new(),
            invoice_date: String::new(),
            total_amount: String::new(),
            payment_terms: String::new(),
            invoice_due_date: String::new(),
            gl_post_date: String::new(),
            invoice_description: String::new(),
            expenses: ExpenseLines::new(),
            comments: String::new(),
        }
    }
}

impl InvoiceRecord {
    pub fn field(&self, field: InvoiceField) -> &str {
        match field {
            InvoiceField::Vendor => &self.vendor,
            InvoiceField::PurchaseOrderNumber => &self.purchase_order_number,
            InvoiceField::InvoiceNumber => &self.invoice_number,
            InvoiceField::InvoiceDate => &self.invoice_date,
            InvoiceField::TotalAmount => &self.total_amount,
            InvoiceField::PaymentTerms => &self.payment_terms,
            InvoiceField::InvoiceDueDate => &self.invoice_due_date,
            InvoiceField::GlPostDate => &self.gl_post_date,
            InvoiceField::InvoiceDescription => &self.invoice_description,
            InvoiceField::Comments => &self.comments,
        }
    }

    pub fn field_mut(&mut self, field: InvoiceField) -> &mut String {
        match field {
            InvoiceField::Vendor => &mut self.vendor,
            InvoiceField::PurchaseOrderNumber => &mut self.purchase_order_number,
            InvoiceField::InvoiceNumber => &mut self.invoice_number,
            InvoiceField::InvoiceDate => &mut self.invoice_date,
            InvoiceField::TotalAmount => &mut self.total_amount,
            InvoiceField::PaymentTerms => &mut self.payment_terms,
            InvoiceField::InvoiceDueDate => &mut self.invoice_due_date,
            InvoiceField::GlPostDate => &mut self.gl_post_date,
            InvoiceField::InvoiceDescription => &mut self.invoice_description,
            InvoiceField::Comments => &mut self.comments,
        }
    }

    /// Reads the value at `path`, or `None` for an out-of-range expense line.
    pub fn get(&self, path: &FieldPath) -> Option<&str> {
        match *path {
            FieldPath::Invoice(field) => Some(self.field(field)),
            FieldPath::Expense { index, field } => {
                self.expenses.get(index).map(|line| line.field(field))
            }
        }
    }

    /// Writes `value` at `path`.
    ///
    /// # Panics
    ///
    /// Panics if `path` addresses an expense line beyond the end of
    /// [`InvoiceRecord::expenses`]. Callers holding untrusted paths must
    /// check [`ExpenseLines::contains_index`] first.
    pub fn set(&mut self, path: &FieldPath, value: impl Into<String>) {
        match *path {
            FieldPath::Invoice(field) => *self.field_mut(field) = value.into(),
            FieldPath::Expense { index, field } => self.expenses.set_field(index, field, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_one_blank_expense() {
        let record = InvoiceRecord::default();
        assert_eq!(record.expenses.len(), 1);
        assert!(record.expenses.iter().all(ExpenseLine::is_blank));
        assert!(record.vendor.is_empty());
        assert!(record.comments.is_empty());
    }

    #[test]
    fn test_wire_shape_matches_draft_format() {
        let json = serde_json::to_value(InvoiceRecord::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "vendor": "",
                "purchaseOrderNumber": "",
                "invoiceNumber": "",
                "invoiceDate": "",
                "totalAmount": "",
                "paymentTerms": "",
                "invoiceDueDate": "",
                "glPostDate": "",
                "invoiceDescription": "",
                "expenses": [{
                    "amount": "",
                    "department": "",
                    "account": "",
                    "location": "",
                    "description": ""
                }],
                "comments": ""
            })
        );
    }

    #[test]
    fn test_missing_field_fails_to_deserialize() {
        let partial = serde_json::json!({ "vendor": "A-1 Exterminators" });
        assert!(serde_json::from_value::<InvoiceRecord>(partial).is_err());
    }

    #[test]
    fn test_set_and_get_by_path() {
        let mut record = InvoiceRecord::default();
        record.set(&FieldPath::Invoice(InvoiceField::GlPostDate), "2024-03-01");
        record.set(&FieldPath::expense(0, ExpenseField::Account), "1000 - Cash");

        assert_eq!(record.gl_post_date, "2024-03-01");
        assert_eq!(
            record.get(&FieldPath::expense(0, ExpenseField::Account)),
            Some("1000 - Cash")
        );
        assert_eq!(record.get(&FieldPath::expense(3, ExpenseField::Account)), None);
    }
}

//! Required-field validation.
//!
//! Validation is a pure function of the record and runs only when the
//! operator submits. A value is missing iff it is empty after trimming.
//! `comments` is the only optional field; every expense line, including a
//! freshly appended blank one, is checked against all of its fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::invoice::{ExpenseField, FieldPath, InvoiceField, InvoiceRecord};

/// Message attached to every missing required field.
pub const REQUIRED_MESSAGE: &str = "Required";

/// Field path → message for every invalid field.
///
/// Keys are the rendered form of [`FieldPath`] (`vendor`,
/// `expenses[1].amount`). Each invalid field appears exactly once; iteration
/// order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrorSet(BTreeMap<String, String>);

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: FieldPath, message: impl Into<String>) {
        self.0.insert(path.to_string(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.0.contains_key(&path.to_string())
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks every required field of `record`.
///
/// An empty result is the only condition under which a submit may proceed.
pub fn validate(record: &InvoiceRecord) -> ValidationErrorSet {
    let mut errors = ValidationErrorSet::new();

    for field in InvoiceField::iter().filter(|f| f.is_required()) {
        if is_blank(record.field(field)) {
            errors.insert(FieldPath::Invoice(field), REQUIRED_MESSAGE);
        }
    }

    for (index, line) in record.expenses.iter().enumerate() {
        for field in ExpenseField::iter() {
            if is_blank(line.field(field)) {
                errors.insert(FieldPath::expense(index, field), REQUIRED_MESSAGE);
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_record() -> InvoiceRecord {
        let mut record = InvoiceRecord::default();
        for field in InvoiceField::iter() {
            *record.field_mut(field) = format!("{} value", field);
        }
        for field in ExpenseField::iter() {
            record.expenses.set_field(0, field, format!("{} value", field));
        }
        record
    }

    #[test]
    fn test_default_record_reports_every_required_field() {
        let errors = validate(&InvoiceRecord::default());
        // 9 top-level fields + 5 fields of the single default line
        assert_eq!(errors.len(), 14);
        assert!(errors.get("comments").is_none());
        assert_eq!(errors.get("vendor"), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.get("expenses[0].description"), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_filled_record_is_valid() {
        assert!(validate(&filled_record()).is_empty());
    }

    #[test]
    fn test_comments_are_optional() {
        let mut record = filled_record();
        record.comments.clear();
        assert!(validate(&record).is_empty());
    }

    #[test]
    fn test_each_single_blank_field_is_reported_alone() {
        for field in InvoiceField::iter().filter(|f| f.is_required()) {
            let mut record = filled_record();
            record.field_mut(field).clear();

            let errors = validate(&record);
            assert_eq!(errors.len(), 1, "only {field} should be reported");
            assert!(errors.contains(&FieldPath::Invoice(field)));
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut record = filled_record();
        record.invoice_number = "   \t".to_string();
        record.expenses.set_field(0, ExpenseField::Amount, "\n");

        let errors = validate(&record);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&FieldPath::Invoice(InvoiceField::InvoiceNumber)));
        assert!(errors.contains(&FieldPath::expense(0, ExpenseField::Amount)));
    }

    #[test]
    fn test_blank_appended_line_reports_all_five_fields() {
        let mut record = filled_record();
        record.expenses.append();

        let errors = validate(&record);
        assert_eq!(errors.len(), 5);
        assert!(errors.paths().all(|p| p.starts_with("expenses[1].")));
    }

    #[test]
    fn test_error_set_serializes_as_flat_map() {
        let mut record = filled_record();
        record.vendor.clear();
        let json = serde_json::to_value(validate(&record)).unwrap();
        assert_eq!(json, serde_json::json!({ "vendor": "Required" }));
    }
}

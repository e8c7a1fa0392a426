//! Field identifiers and field paths.
//!
//! A field path names either a top-level invoice field (`vendor`) or a field
//! of one expense line (`expenses[1].amount`). The dotted form used by form
//! libraries (`expenses.1.amount`) is accepted on input; output always uses
//! the bracketed form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{InvoiceError, Result};

const EXPENSES_PREFIX: &str = "expenses";

/// Top-level scalar fields of an invoice record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum InvoiceField {
    Vendor,
    PurchaseOrderNumber,
    InvoiceNumber,
    InvoiceDate,
    TotalAmount,
    PaymentTerms,
    InvoiceDueDate,
    GlPostDate,
    InvoiceDescription,
    Comments,
}

impl InvoiceField {
    /// Every field except `comments` must be non-blank to submit.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Comments)
    }

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Vendor => "Vendor",
            Self::PurchaseOrderNumber => "Purchase Order Number",
            Self::InvoiceNumber => "Invoice Number",
            Self::InvoiceDate => "Invoice Date",
            Self::TotalAmount => "Total Amount",
            Self::PaymentTerms => "Payment Terms",
            Self::InvoiceDueDate => "Invoice Due Date",
            Self::GlPostDate => "GL Post Date",
            Self::InvoiceDescription => "Invoice Description",
            Self::Comments => "Comments",
        }
    }
}

/// Fields of a single expense line. All of them are required.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ExpenseField {
    Amount,
    Department,
    Account,
    Location,
    Description,
}

impl ExpenseField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Amount => "Line Amount",
            Self::Department => "Department",
            Self::Account => "Account",
            Self::Location => "Location",
            Self::Description => "Description",
        }
    }
}

/// Address of one editable value inside an [`crate::invoice::InvoiceRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    Invoice(InvoiceField),
    Expense { index: usize, field: ExpenseField },
}

impl FieldPath {
    pub fn expense(index: usize, field: ExpenseField) -> Self {
        Self::Expense { index, field }
    }

    /// Index of the addressed expense line, if any.
    pub fn expense_index(&self) -> Option<usize> {
        match self {
            Self::Invoice(_) => None,
            Self::Expense { index, .. } => Some(*index),
        }
    }
}

impl From<InvoiceField> for FieldPath {
    fn from(field: InvoiceField) -> Self {
        Self::Invoice(field)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invoice(field) => write!(f, "{}", field),
            Self::Expense { index, field } => {
                write!(f, "{}[{}].{}", EXPENSES_PREFIX, index, field)
            }
        }
    }
}

impl FromStr for FieldPath {
    type Err = InvoiceError;

    fn from_str(s: &str) -> Result<Self> {
        let path = s.trim();

        let Some(rest) = path.strip_prefix(EXPENSES_PREFIX) else {
            return InvoiceField::from_str(path)
                .map(Self::Invoice)
                .map_err(|_| InvoiceError::invalid_path(s, "unknown field"));
        };

        // expenses[1].amount | expenses.1.amount
        let (index, field) = if let Some(bracketed) = rest.strip_prefix('[') {
            bracketed
                .split_once("].")
                .ok_or_else(|| InvoiceError::invalid_path(s, "expected expenses[<index>].<field>"))?
        } else if let Some(dotted) = rest.strip_prefix('.') {
            dotted
                .split_once('.')
                .ok_or_else(|| InvoiceError::invalid_path(s, "expected expenses.<index>.<field>"))?
        } else {
            return Err(InvoiceError::invalid_path(
                s,
                "expense fields need a line index",
            ));
        };

        let index = index
            .parse::<usize>()
            .map_err(|_| InvoiceError::invalid_path(s, "line index is not a number"))?;
        let field = ExpenseField::from_str(field)
            .map_err(|_| InvoiceError::invalid_path(s, "unknown expense field"))?;

        Ok(Self::Expense { index, field })
    }
}

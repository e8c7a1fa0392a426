//! Invoice domain module.
//!
//! # Module Structure
//!
//! - `model`: The invoice record and a single expense line
//! - `line_items`: The append-only expense collection embedded in a record
//! - `field`: Field identifiers and textual field paths

mod field;
mod line_items;
mod model;

pub use field::{ExpenseField, FieldPath, InvoiceField};
pub use line_items::ExpenseLines;
pub use model::{ExpenseLine, InvoiceRecord};

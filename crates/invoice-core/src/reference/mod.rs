//! Read-only reference tables for the invoice entry screen.
//!
//! Option lists feed the select inputs. The form engine never validates a
//! field value against these tables.
//!
//! # Module Structure
//!
//! - `model`: Option row types
//! - `provider`: Provider trait and the built-in static tables

mod model;
mod provider;

pub use model::{NamedOption, PurchaseOrder, ReferenceKind, Vendor};
pub use provider::{ReferenceData, StaticReferenceData};

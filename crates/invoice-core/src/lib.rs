//! Domain model for the invoice entry workflow.
//!
//! This crate holds the version-agnostic types shared by every layer: the
//! invoice record and its expense lines, the session marker, the
//! required-field validator, the presentation modes of the entry form, the
//! static reference tables, and the [`storage::KeyValueStore`] seam that
//! infrastructure implements.

pub mod error;
pub mod form;
pub mod invoice;
pub mod reference;
pub mod session;
pub mod storage;
pub mod validation;

// Re-export common error type
pub use error::InvoiceError;

//! Durable key/value storage seam.
//!
//! Session and draft state live in two independent slots of a string-keyed
//! store whose values are JSON text. Implementations live in the
//! infrastructure crate.

use crate::error::Result;

/// Storage key holding the serialized [`crate::session::Session`].
pub const SESSION_KEY: &str = "user";

/// Storage key holding the serialized [`crate::invoice::InvoiceRecord`] draft.
pub const DRAFT_KEY: &str = "invoiceForm";

/// An abstract durable store of JSON text values addressed by key.
///
/// # Implementation Notes
///
/// - `set` replaces the whole value; a reader never observes a partial write.
/// - `remove` on a missing key succeeds.
/// - Every failure to reach the underlying medium is reported as
///   [`crate::InvoiceError::StorageUnavailable`].
pub trait KeyValueStore: Send + Sync {
    /// Reads the raw value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: Value found
    /// - `Ok(None)`: Key not present
    /// - `Err(_)`: The store could not be read
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` from the store.
    fn remove(&self, key: &str) -> Result<()>;
}

//! Invoice file attachment.
//!
//! The entry screen lets the operator pick or drop an invoice file. Its text
//! is read and logged; nothing populates form fields from it.

use std::fs;
use std::path::Path;

use invoice_core::error::{InvoiceError, Result};

/// Raw content of an attached file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedFile {
    pub file_name: String,
    pub content: String,
}

/// Reads attached files as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileIngestor;

impl FileIngestor {
    pub fn new() -> Self {
        Self
    }

    /// Reads `path` as UTF-8, replacing invalid sequences.
    pub fn ingest(&self, path: &Path) -> Result<IngestedFile> {
        let bytes = fs::read(path)
            .map_err(|e| InvoiceError::io(format!("Failed to read {}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = String::from_utf8_lossy(&bytes).into_owned();

        tracing::info!(file = %file_name, bytes = bytes.len(), "file loaded");
        tracing::debug!(file = %file_name, %content, "file content");

        Ok(IngestedFile { file_name, content })
    }
}

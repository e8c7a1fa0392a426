use std::path::Path;

use anyhow::Result;
use invoice_application::InvoiceDesk;
use invoice_infrastructure::FileIngestor;

use super::enter_invoice_screen;

/// Reads an invoice file. Its content is logged only; no field is filled in.
pub fn run(desk: &InvoiceDesk, file: &Path) -> Result<()> {
    enter_invoice_screen(desk)?;
    let ingested = FileIngestor::new().ingest(file)?;
    println!(
        "📎 {} loaded ({} bytes). Fields were not changed.",
        ingested.file_name,
        ingested.content.len()
    );
    Ok(())
}

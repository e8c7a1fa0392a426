use anyhow::{Context, Result, bail};
use invoice_application::{InvoiceDesk, SubmitOutcome};
use invoice_core::form::FormMode;
use invoice_core::invoice::InvoiceRecord;

use super::enter_invoice_screen;
use super::render;

/// Parses a `path=value` command-line assignment.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(path, value)| (path.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected <path>=<value>, got '{raw}'"))
}

pub fn show(desk: &InvoiceDesk, mode: FormMode, json: bool) -> Result<()> {
    let mut screen = enter_invoice_screen(desk)?;
    screen.controller.set_mode(mode);

    if json {
        let pretty = serde_json::to_string_pretty(screen.controller.record())?;
        println!("{pretty}");
    } else {
        print!("{}", render::FormView::new(&screen.controller, desk.reference()));
    }
    Ok(())
}

pub fn set(desk: &InvoiceDesk, assignments: &[(String, String)]) -> Result<()> {
    let mut screen = enter_invoice_screen(desk)?;
    for (path, value) in assignments {
        screen.controller.set_field_str(path, value.as_str())?;
    }
    screen
        .controller
        .save_draft()
        .context("Draft could not be saved")?;
    println!("💾 Draft saved ({} field(s) updated).", assignments.len());
    Ok(())
}

pub fn add_expense(desk: &InvoiceDesk, count: usize) -> Result<()> {
    let mut screen = enter_invoice_screen(desk)?;
    for _ in 0..count {
        let index = screen.controller.append_expense();
        println!("➕ Added expense line {index}.");
    }
    screen
        .controller
        .save_draft()
        .context("Draft could not be saved")?;
    Ok(())
}

pub fn save_draft(desk: &InvoiceDesk) -> Result<()> {
    let screen = enter_invoice_screen(desk)?;
    screen
        .controller
        .save_draft()
        .context("Draft could not be saved")?;
    println!("💾 Draft saved successfully!");
    Ok(())
}

/// Status line printed after a successful submit.
///
/// The form resets only in memory; the stored draft keeps the submitted
/// invoice until the next save or logout.
fn submitted_message(record: &InvoiceRecord) -> String {
    format!(
        "✅ Invoice {} submitted successfully!\n\
         ℹ️  The saved draft still holds this invoice; run `invoice-desk logout` to clear it.",
        record.invoice_number
    )
}

/// Applies `assignments`, then submits.
///
/// On success the submitted invoice is also left in the draft slot, so a
/// later `show` or `submit` sees it again.
pub fn submit(desk: &InvoiceDesk, assignments: &[(String, String)]) -> Result<()> {
    let mut screen = enter_invoice_screen(desk)?;
    for (path, value) in assignments {
        screen.controller.set_field_str(path, value.as_str())?;
    }

    match screen.controller.submit().context("Invoice could not be submitted")? {
        SubmitOutcome::Submitted(record) => {
            println!("{}", submitted_message(&record));
            Ok(())
        }
        SubmitOutcome::Rejected(errors) => {
            for (path, message) in errors.iter() {
                eprintln!("  - {path}: {message}");
            }
            bail!("{} required field(s) missing", errors.len())
        }
    }
}

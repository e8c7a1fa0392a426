pub mod attach;
pub mod form;
pub mod options;
pub mod render;
pub mod session;

use anyhow::{Result, bail};
use invoice_application::{InvoiceDesk, InvoiceScreen, Navigation};

/// Navigates to the invoice screen or fails with the redirect target.
pub fn enter_invoice_screen(desk: &InvoiceDesk) -> Result<InvoiceScreen> {
    match desk.navigate_to_invoice() {
        Navigation::Invoice(screen) => {
            if let Some(e) = &screen.load_error {
                eprintln!("⚠️  Could not load the saved draft ({e}); starting from a blank form.");
            }
            Ok(screen)
        }
        Navigation::Redirect(route) => {
            bail!(
                "Not logged in. Redirected to the login screen ({}); run `invoice-desk login`.",
                route.path()
            )
        }
    }
}

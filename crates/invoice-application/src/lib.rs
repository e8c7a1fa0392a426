//! Application services for the invoice entry workflow.
//!
//! Everything here is built over an injected
//! [`invoice_core::storage::KeyValueStore`]; no service reaches for ambient
//! global state.

pub mod access_guard;
pub mod desk;
pub mod draft_store;
pub mod form_controller;
pub mod login;
pub mod session_store;

pub use access_guard::{AccessGuard, Authorization, Route};
pub use desk::{InvoiceDesk, InvoiceScreen, Navigation};
pub use draft_store::DraftStore;
pub use form_controller::{FormController, SubmitOutcome};
pub use login::{LoginErrors, LoginOutcome, LoginService};
pub use session_store::SessionStore;

//! Wiring of the invoice workflow services over one store.

use std::sync::Arc;

use invoice_core::error::InvoiceError;
use invoice_core::reference::{ReferenceData, StaticReferenceData};
use invoice_core::storage::KeyValueStore;

use crate::access_guard::{AccessGuard, Authorization, Route};
use crate::draft_store::DraftStore;
use crate::form_controller::FormController;
use crate::login::LoginService;
use crate::session_store::SessionStore;

/// The invoice screen as entered after a successful guard check.
pub struct InvoiceScreen {
    pub controller: FormController,
    /// Set when the draft could not be read; the form starts from defaults.
    pub load_error: Option<InvoiceError>,
}

/// Where a navigation attempt to the invoice screen ended up.
pub enum Navigation {
    Invoice(InvoiceScreen),
    Redirect(Route),
}

/// Owns the session and draft services for one process.
///
/// Built once at startup over the chosen [`KeyValueStore`] and dropped at
/// exit; services never reach the store any other way.
pub struct InvoiceDesk {
    sessions: SessionStore,
    drafts: DraftStore,
    reference: Arc<dyn ReferenceData>,
}

impl InvoiceDesk {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_reference_data(store, Arc::new(StaticReferenceData::default()))
    }

    pub fn with_reference_data(
        store: Arc<dyn KeyValueStore>,
        reference: Arc<dyn ReferenceData>,
    ) -> Self {
        Self {
            sessions: SessionStore::new(store.clone()),
            drafts: DraftStore::new(store),
            reference,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn drafts(&self) -> &DraftStore {
        &self.drafts
    }

    pub fn reference(&self) -> &dyn ReferenceData {
        self.reference.as_ref()
    }

    pub fn access_guard(&self) -> AccessGuard {
        AccessGuard::new(self.sessions.clone())
    }

    pub fn login_service(&self) -> LoginService {
        LoginService::new(self.sessions.clone())
    }

    /// Navigates to the invoice screen, consulting the guard first.
    pub fn navigate_to_invoice(&self) -> Navigation {
        if let Authorization::Redirect(route) = self.access_guard().authorize() {
            return Navigation::Redirect(route);
        }

        let mut controller = FormController::new(self.drafts.clone());
        let load_error = controller.initialize().err();
        if let Some(e) = &load_error {
            tracing::warn!(error = %e, "draft could not be loaded; starting from defaults");
        }

        Navigation::Invoice(InvoiceScreen {
            controller,
            load_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_core::invoice::InvoiceField;
    use invoice_infrastructure::InMemoryStore;

    #[test]
    fn test_navigation_requires_login() {
        let desk = InvoiceDesk::open(Arc::new(InMemoryStore::new()));
        assert!(matches!(
            desk.navigate_to_invoice(),
            Navigation::Redirect(Route::Login)
        ));
    }

    #[test]
    fn test_navigation_restores_draft() {
        let desk = InvoiceDesk::open(Arc::new(InMemoryStore::new()));
        desk.login_service().login("alice", "pw").unwrap();

        let Navigation::Invoice(mut screen) = desk.navigate_to_invoice() else {
            panic!("expected invoice screen");
        };
        screen
            .controller
            .set_field(&InvoiceField::InvoiceNumber.into(), "INV-1042");
        screen.controller.save_draft().unwrap();

        let Navigation::Invoice(reopened) = desk.navigate_to_invoice() else {
            panic!("expected invoice screen");
        };
        assert!(reopened.load_error.is_none());
        assert_eq!(reopened.controller.record().invoice_number, "INV-1042");
    }
}

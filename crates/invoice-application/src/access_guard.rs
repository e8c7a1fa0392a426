//! Route protection for the invoice screen.

use crate::session_store::SessionStore;

/// Navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Public login screen.
    Login,
    /// Invoice entry screen; requires a session.
    Invoice,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Invoice => "/invoice",
        }
    }
}

/// Decision for one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Allow,
    Redirect(Route),
}

impl Authorization {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Admits navigation to the invoice screen only with a live session.
///
/// The session is re-read on every check, so a logout from another process
/// is honored on the next navigation.
#[derive(Clone)]
pub struct AccessGuard {
    sessions: SessionStore,
}

impl AccessGuard {
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }

    /// Authorizes entry to the protected invoice screen.
    pub fn authorize(&self) -> Authorization {
        match self.sessions.get_session() {
            Some(session) if session.is_authenticated => Authorization::Allow,
            _ => {
                tracing::debug!("no authenticated session; redirecting to login");
                Authorization::Redirect(Route::Login)
            }
        }
    }
}

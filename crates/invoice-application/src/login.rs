//! Login and logout.
//!
//! There is no credential check: any non-empty username and password open
//! a session for that username.

use invoice_core::error::Result;
use invoice_core::session::Session;

use crate::access_guard::Route;
use crate::session_store::SessionStore;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Per-field messages for an incomplete login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A session was opened; navigate to `redirect`.
    Authenticated { session: Session, redirect: Route },
    /// The form is incomplete; stay on the login screen.
    Rejected(LoginErrors),
}

/// Opens and closes sessions from the login screen.
#[derive(Clone)]
pub struct LoginService {
    sessions: SessionStore,
}

impl LoginService {
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        let errors = LoginErrors {
            username: username.is_empty().then_some(USERNAME_REQUIRED),
            password: password.is_empty().then_some(PASSWORD_REQUIRED),
        };
        if !errors.is_empty() {
            return Ok(LoginOutcome::Rejected(errors));
        }

        let session = self.sessions.set_session(username)?;
        Ok(LoginOutcome::Authenticated {
            session,
            redirect: Route::Invoice,
        })
    }

    /// Ends the session, discarding any draft, and returns the login route.
    pub fn logout(&self) -> Result<Route> {
        self.sessions.clear_session()?;
        Ok(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_infrastructure::InMemoryStore;
    use std::sync::Arc;

    fn service() -> (LoginService, SessionStore) {
        let sessions = SessionStore::new(Arc::new(InMemoryStore::new()));
        (LoginService::new(sessions.clone()), sessions)
    }

    #[test]
    fn test_login_opens_session_and_redirects_to_invoice() {
        let (login, sessions) = service();

        let outcome = login.login("alice", "hunter2").unwrap();

        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                session: Session::authenticated("alice"),
                redirect: Route::Invoice,
            }
        );
        assert_eq!(sessions.get_session().unwrap().username, "alice");
    }

    #[test]
    fn test_missing_credentials_are_rejected_without_session() {
        let (login, sessions) = service();

        let outcome = login.login("", "").unwrap();

        let LoginOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(errors.username, Some(USERNAME_REQUIRED));
        assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
        assert!(sessions.get_session().is_none());
    }

    #[test]
    fn test_missing_password_only() {
        let (login, _) = service();
        let LoginOutcome::Rejected(errors) = login.login("alice", "").unwrap() else {
            panic!("expected rejection");
        };
        assert_eq!(errors.username, None);
        assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn test_logout_returns_login_route() {
        let (login, sessions) = service();
        login.login("alice", "pw").unwrap();

        assert_eq!(login.logout().unwrap(), Route::Login);
        assert!(sessions.get_session().is_none());
    }
}

//! Durable session slot.

use std::sync::Arc;

use invoice_core::error::Result;
use invoice_core::session::Session;
use invoice_core::storage::{DRAFT_KEY, KeyValueStore, SESSION_KEY};

/// Reads and writes the login marker under the `user` key.
///
/// Logging out also discards the draft: in-progress invoice work does not
/// outlive the session that created it.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Marks `username` as logged in. The name is not validated.
    pub fn set_session(&self, username: &str) -> Result<Session> {
        let session = Session::authenticated(username);
        let json = serde_json::to_string(&session)?;
        self.store.set(SESSION_KEY, &json)?;
        tracing::info!(username, "session opened");
        Ok(session)
    }

    /// Returns the current session, if any.
    ///
    /// Missing, malformed or unreadable content all read as "no session",
    /// which sends the operator back to the login screen.
    pub fn get_session(&self) -> Option<Session> {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "session unreadable; treating as logged out");
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "malformed session; treating as logged out");
                None
            }
        }
    }

    /// Removes the session and the draft. Calling it while logged out is a no-op.
    pub fn clear_session(&self) -> Result<()> {
        self.store.remove(SESSION_KEY)?;
        self.store.remove(DRAFT_KEY)?;
        tracing::info!("session cleared");
        Ok(())
    }
}

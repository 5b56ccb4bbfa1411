use std::sync::Arc;

use edu_core::{GuardResult, Role, Route, Session, evaluate_guard};
use storage::{SessionStore, StoredSession};

use crate::error::SessionError;

/// Single owner of the persisted session.
///
/// Every read and write of the session store goes through here; other
/// components receive a `SessionGuard` and never hold the store directly.
/// All operations are synchronous and run to completion.
#[derive(Clone)]
pub struct SessionGuard {
    store: Arc<dyn SessionStore>,
}

impl SessionGuard {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Current session, possibly empty.
    ///
    /// Unreadable storage and half-written records read as an empty session.
    #[must_use]
    pub fn get_session(&self) -> Session {
        match self.store.get() {
            Ok(record) => {
                if record.is_partial() {
                    tracing::warn!("stored session has token without role or role without token");
                }
                record.into_session()
            }
            Err(err) => {
                tracing::warn!(error = %err, "session store unreadable, treating as signed out");
                Session::empty()
            }
        }
    }

    /// Persist a freshly authenticated session.
    ///
    /// Input is validated before the store is touched, so a rejected write
    /// leaves the previous session in place.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidWrite` for a blank token or a missing
    /// role, and `SessionError::Storage` if the store refuses the write.
    pub fn set_session(
        &self,
        token: &str,
        role: Role,
        username: Option<&str>,
    ) -> Result<Session, SessionError> {
        let session = Session::authenticated(token, role, username.map(str::to_owned))?;
        self.store.set(&StoredSession::from_session(&session))?;
        tracing::info!(role = %role, username = session.username().unwrap_or(""), "session stored");
        Ok(session)
    }

    /// Drop token, role and username. Clearing an empty session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the store refuses the removal.
    pub fn clear_session(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        tracing::debug!("session cleared");
        Ok(())
    }

    /// Clear the session only while it still holds `token`.
    ///
    /// Returns whether anything was cleared. A session stored after `token`
    /// was sent is left alone.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the store refuses the removal.
    pub fn clear_session_if(&self, token: &str) -> Result<bool, SessionError> {
        if self.get_session().token() != Some(token) {
            return Ok(false);
        }
        self.clear_session()?;
        Ok(true)
    }

    #[must_use]
    pub fn is_authorized(&self, required: Option<Role>) -> bool {
        edu_core::is_authorized(&self.get_session(), required)
    }

    #[must_use]
    pub fn landing_route_for(&self, role: Role) -> Route {
        edu_core::landing_route_for(role)
    }

    /// Check run by a view before its first render.
    #[must_use]
    pub fn guard(&self, required: Option<Role>) -> GuardResult {
        let session = self.get_session();
        let result = evaluate_guard(&session, required);
        if let GuardResult::Deny(route) = result {
            tracing::debug!(
                required = required.map_or("any", |r| r.as_str()),
                redirect = %route,
                "guard denied"
            );
        }
        result
    }

    /// Token to attach to an outgoing request, read at call time.
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        self.get_session().token().map(str::to_owned)
    }
}

use edu_core::{Role, Session};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::file::FileSessionStore;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of the session: three loose strings under fixed keys.
///
/// Nothing is validated at this level; `into_session` applies the
/// token/role pairing rule when the record is read back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredSession {
    pub token: Option<String>,
    pub role: Option<String>,
    pub username: Option<String>,
}

impl StoredSession {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        if !session.is_authenticated() {
            return Self::default();
        }
        Self {
            token: session.token().map(str::to_owned),
            role: Some(session.role().as_str().to_owned()),
            username: session.username().map(str::to_owned),
        }
    }

    /// Convert the record back into a domain `Session`.
    ///
    /// Unknown role strings count as "no role", which empties the session.
    #[must_use]
    pub fn into_session(self) -> Session {
        let role = self.role.as_deref().map_or(Role::None, Role::parse);
        Session::from_parts(self.token, role, self.username)
    }

    /// True when exactly one of token/role is present.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.token.is_some() != self.role.is_some()
    }
}

/// Read/write access to the one persisted session of this client.
///
/// Implementations must make `set` appear atomic to `get`: a reader sees the
/// previous record or the new one, never a mix. There is no cross-process
/// locking; the last writer wins.
pub trait SessionStore: Send + Sync {
    /// Load the stored record. A store that was never written returns an
    /// empty record, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be read or decoded.
    fn get(&self) -> Result<StoredSession, StorageError>;

    /// Replace the stored record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    fn set(&self, record: &StoredSession) -> Result<(), StorageError>;

    /// Remove the stored record. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium refuses the removal.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Simple in-memory store for tests and throwaway runs.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    record: Arc<Mutex<StoredSession>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record, e.g. a hand-crafted partial session.
    #[must_use]
    pub fn with_record(record: StoredSession) -> Self {
        Self {
            record: Arc::new(Mutex::new(record)),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self) -> Result<StoredSession, StorageError> {
        let guard = self
            .record
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    fn set(&self, record: &StoredSession) -> Result<(), StorageError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = record.clone();
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = StoredSession::default();
        Ok(())
    }
}

/// Holds the session store behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub session: Arc<dyn SessionStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            session: Arc::new(InMemorySessionStore::new()),
        }
    }

    /// Persist the session as a JSON file at `path`.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            session: Arc::new(FileSessionStore::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_session_through_record() {
        let session = Session::authenticated("abc", Role::Student, Some("amira".into())).unwrap();
        let record = StoredSession::from_session(&session);
        assert_eq!(record.role.as_deref(), Some("student"));
        assert_eq!(record.into_session(), session);
    }

    #[test]
    fn unknown_role_reads_as_empty_session() {
        let record = StoredSession {
            token: Some("abc".into()),
            role: Some("superuser".into()),
            username: None,
        };
        assert!(!record.is_partial());
        assert_eq!(record.into_session(), Session::empty());
    }

    #[test]
    fn partial_records_are_detected() {
        let record = StoredSession {
            token: Some("abc".into()),
            role: None,
            username: None,
        };
        assert!(record.is_partial());
        assert_eq!(record.into_session(), Session::empty());
    }

    #[test]
    fn in_memory_clear_is_idempotent() {
        let store = InMemorySessionStore::new();
        store
            .set(&StoredSession {
                token: Some("t".into()),
                role: Some("admin".into()),
                username: None,
            })
            .unwrap();
        store.clear().unwrap();
        let once = store.get().unwrap();
        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), once);
        assert_eq!(once, StoredSession::default());
    }

    #[test]
    fn clones_share_the_same_record() {
        let store = InMemorySessionStore::new();
        let other = store.clone();
        let session = Session::authenticated("t", Role::Admin, None).unwrap();
        store.set(&StoredSession::from_session(&session)).unwrap();
        assert_eq!(other.get().unwrap().into_session(), session);
    }
}

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::repository::{SessionStore, StorageError, StoredSession};

/// Session persisted as a small JSON object on disk.
///
/// Each write goes to its own sibling temp file which is then renamed over
/// the target, so readers see whole records only and concurrent writers
/// resolve as last-writer-wins.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = std::ffi::OsString::from(".");
        name.push(
            self.path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("session")),
        );
        name.push(format!(".{}.{}.tmp", std::process::id(), Uuid::new_v4().simple()));
        self.path.with_file_name(name)
    }

    fn write_temp(temp: &Path, body: &[u8]) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp)?;
        file.write_all(body)?;
        file.sync_all()?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<StoredSession, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(StoredSession::default()),
            Err(err) => return Err(err.into()),
        };
        if raw.trim().is_empty() {
            return Ok(StoredSession::default());
        }
        serde_json::from_str(&raw).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    fn set(&self, record: &StoredSession) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let body = serde_json::to_vec_pretty(record)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        let temp = self.temp_path();
        let written = Self::write_temp(&temp, &body)
            .and_then(|()| fs::rename(&temp, &self.path).map_err(StorageError::from));
        if let Err(err) = written {
            let _ = fs::remove_file(&temp);
            return Err(err);
        }
        tracing::debug!(path = %self.path.display(), "session file written");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "session file removed");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

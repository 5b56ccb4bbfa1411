#![forbid(unsafe_code)]

pub mod file;
pub mod repository;

pub use file::FileSessionStore;
pub use repository::{InMemorySessionStore, SessionStore, Storage, StorageError, StoredSession};

//! Session storage seam.
//!
//! The session is a single serialized blob: written wholesale on login,
//! deleted wholesale on logout. Implementations only move strings around;
//! encoding lives here so every medium stores the same format.

use std::sync::{Arc, Mutex};

use crate::errors::StoreError;
use crate::models::Session;

/// A place that holds at most one serialized session.
pub trait SessionStore {
    /// Read the stored blob, if any.
    ///
    /// # Errors
    /// Returns an error if the medium cannot be read.
    fn load_raw(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored blob.
    ///
    /// # Errors
    /// Returns an error if the medium cannot be written.
    fn save_raw(&self, blob: &str) -> Result<(), StoreError>;

    /// Delete the stored blob. Clearing an empty store is not an error.
    ///
    /// # Errors
    /// Returns an error if the medium cannot be written.
    fn clear(&self) -> Result<(), StoreError>;

    /// Current session. Unreadable storage and corrupt blobs read as `None`.
    fn load(&self) -> Option<Session> {
        let blob = match self.load_raw() {
            Ok(Some(blob)) => blob,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "session storage unreadable");
                return None;
            }
        };
        match Session::from_storage_str(&blob) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring corrupt session blob");
                None
            }
        }
    }

    /// Overwrite the stored session.
    ///
    /// # Errors
    /// Returns an error if encoding or writing fails.
    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let blob = session.to_storage_string()?;
        self.save_raw(&blob)
    }
}

/// In-process store, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `session`.
    ///
    /// # Errors
    /// Returns an error if the session cannot be encoded.
    pub fn with_session(session: &Session) -> Result<Self, StoreError> {
        let store = Self::new();
        store.save(session)?;
        Ok(store)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, StoreError> {
        self.blob
            .lock()
            .map_err(|_| StoreError::Unavailable("session lock poisoned".to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn load_raw(&self) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn save_raw(&self, blob: &str) -> Result<(), StoreError> {
        *self.lock()? = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.lock()? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use serde_json::Map;

    fn session() -> Session {
        Session {
            email: "demo@test.com".to_string(),
            name: "Demo User".to_string(),
            role: UserRole::User,
            token: "mock-user-token".to_string(),
            avatar: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn empty_store_has_no_session() {
        let store = MemorySessionStore::new();
        assert!(store.load().is_none());
        assert!(store.clear().is_ok());
    }

    #[test]
    fn save_overwrites_and_clear_deletes() {
        let store = MemorySessionStore::with_session(&session()).unwrap();
        assert_eq!(store.load(), Some(session()));

        let mut admin = session();
        admin.role = UserRole::Admin;
        store.save(&admin).unwrap();
        assert!(store.load().unwrap().is_admin());

        store.clear().unwrap();
        assert!(store.load().is_none());
        assert!(store.load_raw().unwrap().is_none());
    }

    #[test]
    fn clones_share_the_blob() {
        let store = MemorySessionStore::new();
        let other = store.clone();
        store.save(&session()).unwrap();
        assert_eq!(other.load().map(|s| s.email), Some("demo@test.com".to_string()));
    }

    #[test]
    fn corrupt_blob_reads_as_signed_out() {
        let store = MemorySessionStore::new();
        store.save_raw("not-json").unwrap();
        assert!(store.load().is_none());
    }
}

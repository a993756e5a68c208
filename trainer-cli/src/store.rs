//! Session file for the command-line client.

use directories::BaseDirs;
use shared::{SessionStore, StoreError};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Overrides the session file location.
pub const SESSION_FILE_ENV: &str = "TRAINER_SESSION_FILE";

/// Default location of the session file: `<config dir>/interview-trainer/session.json`.
pub fn session_path() -> PathBuf {
    if let Ok(path) = std::env::var(SESSION_FILE_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    BaseDirs::new().map_or_else(
        || PathBuf::from("./session.json"),
        |dirs| dirs.config_dir().join("interview-trainer").join("session.json"),
    )
}

/// Session blob kept in a single JSON file, readable only by the owner on
/// unix.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load_raw(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn save_raw(&self, blob: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        fs::write(&self.path, blob).map_err(|err| self.io_error(err))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|err| self.io_error(err))?;
        }
        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

#[cfg(test)]
#[allow(unsafe_code)] // environment mutation in edition 2024
mod tests {
    use super::*;
    use serial_test::serial;
    use shared::models::{Session, UserRole};
    use tempfile::TempDir;

    fn session() -> Session {
        Session::from_storage_str(
            r#"{"email":"admin@test.com","role":"admin","token":"mock-admin-token","name":"Admin User","team":"hr"}"#,
        )
        .unwrap()
    }

    #[test]
    fn round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));
        assert!(store.load().is_none());

        store.save(&session()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.role, UserRole::Admin);
        assert_eq!(loaded.extra["team"], "hr");

        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.save(&session()).unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn corrupt_file_reads_as_signed_out() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.save_raw("{not json").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    #[serial]
    fn env_overrides_location() {
        unsafe { std::env::set_var(SESSION_FILE_ENV, "/tmp/trainer-session.json") };
        assert_eq!(session_path(), PathBuf::from("/tmp/trainer-session.json"));
        unsafe { std::env::remove_var(SESSION_FILE_ENV) };
        assert!(session_path().ends_with("session.json"));
    }
}

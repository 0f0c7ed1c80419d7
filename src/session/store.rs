//! On-disk credential store
//!
//! One JSON blob under a fixed key, written as `<state_dir>/auth_credentials.json`.
//! The file holds the password in plain text, the same as the browser
//! storage it mirrors, so it is created owner-readable only on unix.

use crate::api::Credentials;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Fixed storage key for the credential blob
pub const CREDENTIALS_KEY: &str = "auth_credentials";

#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        Self {
            path: state_dir
                .as_ref()
                .join(format!("{}.json", CREDENTIALS_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored credentials, or None if nothing is stored.
    ///
    /// A blob that exists but does not parse is an error; the caller
    /// decides whether to clear it.
    pub fn load(&self) -> Result<Option<Credentials>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read {}", self.path.display()))
            }
        };

        let creds = serde_json::from_str(&raw)
            .with_context(|| format!("malformed credentials in {}", self.path.display()))?;
        Ok(Some(creds))
    }

    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let blob = serde_json::to_string(credentials).context("failed to encode credentials")?;
        std::fs::write(&self.path, blob)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("failed to set permissions on {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Remove the blob. Already gone is fine.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("failed to remove {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_load_clear() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("nested"));
        let creds = Credentials::new("owner", "p@ss word");

        store.save(&creds).unwrap();
        assert!(store.path().ends_with("auth_credentials.json"));
        assert_eq!(store.load().unwrap(), Some(creds));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Second clear is a no-op
        store.clear().unwrap();
    }

    #[test]
    fn blob_is_plain_username_password_json() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path());
        store.save(&Credentials::new("a", "b")).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({"username": "a", "password": "b"}));
    }

    #[test]
    fn corrupt_blob_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn blob_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path());
        store.save(&Credentials::new("a", "b")).unwrap();
        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

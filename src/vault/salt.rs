//! Per-store salt persistence.
//!
//! The salt lives in a file named `salt` inside the store directory.
//! It is written once, on first use, and read back unchanged ever after
//! so the same passphrase keeps deriving the same key.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, Span};

use crate::crypto::kdf::generate_salt;
use crate::errors::Result;

/// File name of the salt inside a store directory.
pub const SALT_FILE_NAME: &str = "salt";

/// Raw salt bytes as read from (or written to) disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salt(Vec<u8>);

impl Salt {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reads or creates the salt for one store directory.
pub struct SaltManager {
    path: PathBuf,
    span: Span,
}

impl SaltManager {
    /// Create a manager for `store_dir`, logging under `span`.
    pub fn new(store_dir: &Path, span: Span) -> Self {
        Self {
            path: store_dir.join(SALT_FILE_NAME),
            span,
        }
    }

    /// Path of the salt file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the stored salt, generating and persisting one if absent.
    ///
    /// An existing file is returned as-is with no length check. Two
    /// processes initializing the same empty store at once can race here.
    pub fn get_or_create(&self) -> Result<Salt> {
        if self.path.exists() {
            let bytes = fs::read(&self.path)?;
            debug!(parent: &self.span, path = %self.path.display(), "Reusing existing salt");
            return Ok(Salt(bytes));
        }

        let salt = generate_salt()?;
        fs::write(&self.path, salt)?;
        debug!(parent: &self.span, path = %self.path.display(), "Generated new salt");
        Ok(Salt(salt.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::kdf::SALT_LEN;
    use tempfile::TempDir;

    #[test]
    fn creates_salt_file_on_first_call() {
        let dir = TempDir::new().unwrap();
        let manager = SaltManager::new(dir.path(), Span::none());

        let salt = manager.get_or_create().unwrap();
        assert_eq!(salt.len(), SALT_LEN);
        assert_eq!(fs::read(manager.path()).unwrap(), salt.as_bytes());
    }

    #[test]
    fn reuses_existing_salt() {
        let dir = TempDir::new().unwrap();
        let first = SaltManager::new(dir.path(), Span::none())
            .get_or_create()
            .unwrap();
        let second = SaltManager::new(dir.path(), Span::none())
            .get_or_create()
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn fresh_stores_get_different_salts() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let salt_a = SaltManager::new(a.path(), Span::none())
            .get_or_create()
            .unwrap();
        let salt_b = SaltManager::new(b.path(), Span::none())
            .get_or_create()
            .unwrap();
        assert_ne!(salt_a, salt_b);
    }

    #[test]
    fn short_salt_file_is_returned_unchanged() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SALT_FILE_NAME), [7u8; 5]).unwrap();

        let salt = SaltManager::new(dir.path(), Span::none())
            .get_or_create()
            .unwrap();
        assert_eq!(salt.as_bytes(), &[7u8; 5]);
    }

    #[test]
    fn existing_salt_is_never_rewritten() {
        let dir = TempDir::new().unwrap();
        let manager = SaltManager::new(dir.path(), Span::none());
        manager.get_or_create().unwrap();
        let modified = fs::metadata(manager.path()).unwrap().modified().unwrap();

        manager.get_or_create().unwrap();
        let modified_again = fs::metadata(manager.path()).unwrap().modified().unwrap();
        assert_eq!(modified, modified_again);
    }
}

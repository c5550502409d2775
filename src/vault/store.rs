//! High-level secret store operations.
//!
//! `SecretVault` derives the store key once at construction and then
//! encrypts or decrypts one record file per call, e.g.
//! `vault.set("db_pw", "s3cr3t", false)`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info_span, warn, Span};
use zeroize::Zeroize;

use crate::crypto::encryption::{decrypt, encrypt};
use crate::crypto::kdf::{derive_key, DEFAULT_ITERATIONS};
use crate::crypto::keys::DerivedKey;
use crate::errors::{Result, SecretStoreError};

use super::salt::SaltManager;
use super::secret::{list_secret_names, secret_path};

/// Tunables for opening a store.
#[derive(Debug, Clone)]
pub struct VaultOptions {
    /// PBKDF2 iteration count. Must match the count the store was
    /// created with.
    pub iterations: u32,

    /// Write records to a temp file and rename them into place.
    pub atomic_writes: bool,

    /// Span every diagnostic event is emitted under. `None` creates a
    /// `secret_store` span carrying the store directory.
    pub span: Option<Span>,
}

impl Default for VaultOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            atomic_writes: false,
            span: None,
        }
    }
}

/// Handle to an opened store directory.
#[derive(Debug)]
pub struct SecretVault {
    store_dir: PathBuf,

    /// Derived from passphrase + salt, zeroized on drop.
    key: DerivedKey,

    atomic_writes: bool,
    iterations: u32,
    span: Span,
}

impl SecretVault {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open (or initialize) the store at `store_dir` with default options.
    pub fn open(store_dir: &Path, passphrase: &str) -> Result<Self> {
        Self::open_with_options(store_dir, passphrase, VaultOptions::default())
    }

    /// Open (or initialize) the store at `store_dir`.
    ///
    /// Creates the directory if needed, reads or creates its salt, and
    /// derives the key. Only I/O and KDF parameter problems fail here; a
    /// wrong passphrase is not detected until a record is decrypted.
    pub fn open_with_options(
        store_dir: &Path,
        passphrase: &str,
        options: VaultOptions,
    ) -> Result<Self> {
        let span = options
            .span
            .unwrap_or_else(|| info_span!("secret_store", dir = %store_dir.display()));
        debug!(parent: &span, "Starting initialization of secret store");

        fs::create_dir_all(store_dir)?;

        let salt = SaltManager::new(store_dir, span.clone()).get_or_create()?;

        let mut key_bytes = derive_key(passphrase.as_bytes(), salt.as_bytes(), options.iterations)?;
        let key = DerivedKey::new(key_bytes);
        key_bytes.zeroize();

        debug!(parent: &span, iterations = options.iterations, "Finished initialization");

        Ok(Self {
            store_dir: store_dir.to_path_buf(),
            key,
            atomic_writes: options.atomic_writes,
            iterations: options.iterations,
            span,
        })
    }

    // ------------------------------------------------------------------
    // Secret operations
    // ------------------------------------------------------------------

    /// Decrypt and return the secret stored under `name`.
    ///
    /// Returns `Ok(None)` if no record exists. Fails with `BadPassword`
    /// if the record does not authenticate under this vault's key,
    /// whether because of the passphrase or because the file is damaged.
    pub fn get(&self, name: &str) -> Result<Option<String>> {
        let path = secret_path(&self.store_dir, name)?;

        // Absence is decided the same way as `contains`.
        if !path.exists() {
            debug!(parent: &self.span, name = %name, "Secret not found");
            return Ok(None);
        }

        let envelope = fs::read(&path)?;

        // Any authentication failure is reported as a bad password.
        let plaintext = decrypt(self.key.as_bytes(), &envelope).map_err(|e| {
            warn!(parent: &self.span, "Invalid password provided to secret store");
            e
        })?;

        // On error, zeroize the bytes inside the error before discarding.
        let value = String::from_utf8(plaintext).map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            SecretStoreError::InvalidUtf8(name.to_string())
        })?;

        debug!(
            parent: &self.span,
            name = %name,
            path = %path.display(),
            "Returning secret"
        );
        Ok(Some(value))
    }

    /// Encrypt `value` and store it under `name`.
    ///
    /// Refuses to replace an existing record unless `overwrite` is set;
    /// in that case nothing is written and the old record is untouched.
    pub fn set(&self, name: &str, value: &str, overwrite: bool) -> Result<()> {
        let path = secret_path(&self.store_dir, name)?;

        // Never clobber an existing record without explicit consent.
        if !overwrite && path.exists() {
            warn!(
                parent: &self.span,
                name = %name,
                "Cannot create secret as it already exists"
            );
            return Err(SecretStoreError::SecretExists(name.to_string()));
        }

        // Fresh nonce per call, so rewriting the same value changes the file.
        let envelope = encrypt(self.key.as_bytes(), value.as_bytes())?;

        if self.atomic_writes {
            write_atomic(&path, &envelope)?;
        } else {
            fs::write(&path, &envelope)?;
        }

        debug!(
            parent: &self.span,
            name = %name,
            path = %path.display(),
            atomic = self.atomic_writes,
            "Wrote secret"
        );
        Ok(())
    }

    /// Returns `true` if a record exists for `name`. No decryption.
    pub fn contains(&self, name: &str) -> Result<bool> {
        Ok(secret_path(&self.store_dir, name)?.exists())
    }

    /// Names of all records in the store, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        list_secret_names(&self.store_dir)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the store directory.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Returns the PBKDF2 iteration count the key was derived with.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Returns `true` if records are written via temp file + rename.
    pub fn atomic_writes(&self) -> bool {
        self.atomic_writes
    }
}

/// Write `data` next to `path` and rename it over the target.
///
/// The temp file sits in the same directory so the rename stays on one
/// filesystem.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, data)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

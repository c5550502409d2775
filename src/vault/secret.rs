//! Mapping between secret names and record files.
//!
//! A secret named `db password` lives in `<store_dir>/db password.sec`.
//! Names are free-form text, but anything that would place the record
//! outside the store directory is rejected.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, SecretStoreError};

/// Suffix appended to a secret's name to form its file name.
pub const SECRET_FILE_SUFFIX: &str = ".sec";

/// Validate that a secret name maps to a file directly inside the store.
///
/// Spaces and any other printable text are fine. Empty names, `.`, `..`,
/// and names containing `/`, `\` or NUL are rejected.
pub fn validate_secret_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SecretStoreError::InvalidSecretName(
            "secret name cannot be empty".into(),
        ));
    }
    if name == "." || name == ".." {
        return Err(SecretStoreError::InvalidSecretName(format!(
            "'{name}' is a reserved path component"
        )));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(SecretStoreError::InvalidSecretName(format!(
            "'{}' contains a path separator or NUL byte",
            name.escape_debug()
        )));
    }
    Ok(())
}

/// Build the record path for `name` inside `store_dir`.
pub fn secret_path(store_dir: &Path, name: &str) -> Result<PathBuf> {
    validate_secret_name(name)?;
    Ok(store_dir.join(format!("{name}{SECRET_FILE_SUFFIX}")))
}

/// Recover a secret name from a record file name, if it is one.
///
/// Temp files from atomic writes end in `.tmp` and never match.
pub fn secret_name_from_file(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(SECRET_FILE_SUFFIX)
        .filter(|name| !name.is_empty())
}

/// Names of all record files in `store_dir`, sorted.
///
/// Only the directory listing is read; nothing is decrypted.
pub fn list_secret_names(store_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(store_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if let Some(name) = file_name.to_str().and_then(secret_name_from_file) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

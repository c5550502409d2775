use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::kdf::DEFAULT_ITERATIONS;
use crate::errors::{Result, SecretStoreError};
use crate::vault::VaultOptions;

/// Project-level configuration, loaded from `.filesecret.toml`.
///
/// Every field has a default so the CLI works without any config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Store directory, relative to the project root unless absolute.
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// PBKDF2 iteration count. Changing it for an existing store makes
    /// every secret in it undecryptable.
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,

    /// Write records via temp file + rename.
    #[serde(default)]
    pub atomic_writes: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_store_dir() -> String {
    ".secrets".to_string()
}

fn default_kdf_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            kdf_iterations: default_kdf_iterations(),
            atomic_writes: false,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    pub const FILE_NAME: &'static str = ".filesecret.toml";

    /// Load settings from `<project_dir>/.filesecret.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SecretStoreError::ConfigError(format!(
                "Failed to parse {}: {e}",
                config_path.display()
            ))
        })?;

        Ok(settings)
    }

    /// Resolve the store directory against `project_dir`.
    pub fn store_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.store_dir)
    }

    /// Convert into options for `SecretVault::open_with_options`.
    pub fn vault_options(&self) -> VaultOptions {
        VaultOptions {
            iterations: self.kdf_iterations,
            atomic_writes: self.atomic_writes,
            span: None,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────

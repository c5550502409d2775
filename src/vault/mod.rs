//! Vault module: per-directory encrypted secret storage.
//!
//! This module provides:
//! - Salt persistence for a store directory (`salt`)
//! - Secret name to record file mapping (`secret`)
//! - The high-level `SecretVault` for reading and writing secrets (`store`)

pub mod salt;
pub mod secret;
pub mod store;

pub use salt::{Salt, SaltManager, SALT_FILE_NAME};
pub use secret::{list_secret_names, secret_path, validate_secret_name, SECRET_FILE_SUFFIX};
pub use store::{SecretVault, VaultOptions};

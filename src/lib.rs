//! Per-directory encrypted secret store.
//!
//! A store is a directory holding a random `salt` file and one
//! `<name>.sec` file per secret. Opening a store derives a key from the
//! passphrase and salt; every secret is then encrypted individually.
//!
//! ```no_run
//! use filesecretstore::SecretVault;
//!
//! # fn main() -> filesecretstore::errors::Result<()> {
//! let vault = SecretVault::open(std::path::Path::new(".secrets"), "passphrase")?;
//! vault.set("db_pw", "s3cr3t", false)?;
//! assert_eq!(vault.get("db_pw")?.as_deref(), Some("s3cr3t"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod vault;

pub use errors::{Result, SecretStoreError};
pub use vault::{SecretVault, VaultOptions};

//! `filesecret get`: decrypt and print a single secret's value.

use crate::cli::{open_vault, Cli};
use crate::errors::{Result, SecretStoreError};

/// Execute the `get` command.
pub fn execute(cli: &Cli, name: &str) -> Result<()> {
    let vault = open_vault(cli)?;

    match vault.get(name)? {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => Err(SecretStoreError::CommandFailed(format!(
            "secret '{name}' not found"
        ))),
    }
}

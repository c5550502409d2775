//! `filesecret set`: encrypt and store a secret.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{Result, SecretStoreError};

/// Execute the `set` command.
pub fn execute(cli: &Cli, name: &str, value: Option<&str>, force: bool) -> Result<()> {
    let secret_value = if let Some(v) = value {
        output::warning("Value provided on command line: it may appear in shell history.");
        Zeroizing::new(v.to_string())
    } else if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        let trimmed_len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed_len);
        buf
    } else {
        let v = dialoguer::Password::new()
            .with_prompt(format!("Enter value for {name}"))
            .allow_empty_password(true)
            .interact()
            .map_err(|e| SecretStoreError::CommandFailed(format!("input prompt: {e}")))?;
        Zeroizing::new(v)
    };

    let vault = open_vault(cli)?;

    let existed = vault.contains(name)?;
    vault.set(name, &secret_value, force)?;

    if existed {
        output::success(&format!("Secret '{name}' updated"));
    } else {
        output::success(&format!("Secret '{name}' added"));
    }

    Ok(())
}

//! `filesecret init`: create the store directory and its salt.

use crate::cli::output;
use crate::cli::{is_initialized, load_settings, prompt_new_password, Cli};
use crate::errors::Result;
use crate::vault::SecretVault;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (cwd, settings) = load_settings(cli)?;
    let path = settings.store_path(&cwd);

    if is_initialized(&path) {
        output::info(&format!("Store already initialized at {}", path.display()));
        output::tip("Use `filesecret set <NAME>` to add secrets.");
        return Ok(());
    }

    let password = prompt_new_password()?;
    SecretVault::open_with_options(&path, &password, settings.vault_options())?;

    output::success(&format!("Store created at {}", path.display()));
    output::tip("Run `filesecret set <NAME>` to add a secret.");
    output::tip("Keep the passphrase safe: it cannot be recovered.");

    Ok(())
}

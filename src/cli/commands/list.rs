//! `filesecret list`: show the names of stored secrets.

use crate::cli::output;
use crate::cli::{is_initialized, store_path, Cli};
use crate::errors::Result;
use crate::vault::list_secret_names;

/// Execute the `list` command.
///
/// Names are read straight from the directory, so no passphrase is needed.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = store_path(cli)?;

    if !is_initialized(&path) {
        output::info(&format!("No store at {}", path.display()));
        output::tip("Run `filesecret init` to create one.");
        return Ok(());
    }

    let names = list_secret_names(&path)?;
    output::print_secret_names(&names);
    Ok(())
}

//! `filesecret version`: display version.

use crate::errors::Result;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    println!("filesecret {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

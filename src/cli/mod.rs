//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, SecretStoreError};
use crate::vault::{SecretVault, SALT_FILE_NAME};

/// Environment variable checked for the passphrase before prompting.
pub const PASSWORD_ENV_VAR: &str = "FILESECRET_PASSWORD";

/// Passphrases shorter than this get a warning at `init`.
const RECOMMENDED_PASSWORD_LEN: usize = 8;

/// filesecret CLI: per-directory encrypted secret store.
#[derive(Parser)]
#[command(
    name = "filesecret",
    about = "Per-directory encrypted secret store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store directory (default: `store_dir` from .filesecret.toml, else .secrets)
    #[arg(long, global = true)]
    pub store_dir: Option<String>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create the store directory and its salt
    Init,

    /// Store a secret
    Set {
        /// Secret name (spaces allowed)
        name: String,
        /// Secret value (omit for interactive prompt or piped stdin)
        value: Option<String>,
        /// Replace the secret if it already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Print a secret's value
    Get {
        /// Secret name
        name: String,
    },

    /// List the names of all stored secrets
    List,

    /// Show version
    Version,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the store passphrase, trying in order:
/// 1. `FILESECRET_PASSWORD` env var (CI/CD)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter store passphrase")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| SecretStoreError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new passphrase with confirmation (used by `init`).
///
/// Short passphrases are accepted with a warning.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    let password = match password_from_env() {
        Some(pw) => pw,
        None => {
            let pw = dialoguer::Password::new()
                .with_prompt("Choose store passphrase")
                .with_confirmation(
                    "Confirm store passphrase",
                    "Passphrases do not match, try again",
                )
                .allow_empty_password(true)
                .interact()
                .map_err(|e| SecretStoreError::CommandFailed(format!("password prompt: {e}")))?;
            Zeroizing::new(pw)
        }
    };

    if password.chars().count() < RECOMMENDED_PASSWORD_LEN {
        output::warning(&format!(
            "Passphrase is shorter than {RECOMMENDED_PASSWORD_LEN} characters."
        ));
    }

    Ok(password)
}

fn password_from_env() -> Option<Zeroizing<String>> {
    match std::env::var(PASSWORD_ENV_VAR) {
        Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
        _ => None,
    }
}

/// Load settings from the working directory and apply CLI overrides.
pub fn load_settings(cli: &Cli) -> Result<(PathBuf, Settings)> {
    let cwd = std::env::current_dir()?;
    let mut settings = Settings::load(&cwd)?;
    if let Some(dir) = &cli.store_dir {
        settings.store_dir = dir.clone();
    }
    Ok((cwd, settings))
}

/// Resolve the store directory from the CLI arguments and settings.
pub fn store_path(cli: &Cli) -> Result<PathBuf> {
    let (cwd, settings) = load_settings(cli)?;
    Ok(settings.store_path(&cwd))
}

/// Returns `true` if the store at `path` already has a salt.
pub fn is_initialized(path: &std::path::Path) -> bool {
    path.join(SALT_FILE_NAME).exists()
}

/// Prompt for the passphrase and open the configured store.
pub fn open_vault(cli: &Cli) -> Result<SecretVault> {
    let (cwd, settings) = load_settings(cli)?;
    let path = settings.store_path(&cwd);
    let password = prompt_password()?;
    SecretVault::open_with_options(&path, &password, settings.vault_options())
}

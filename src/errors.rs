use thiserror::Error;

/// All errors that can occur in a secret store.
#[derive(Debug, Error)]
pub enum SecretStoreError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Authenticated decryption failed. Wrong passphrase and corrupted
    /// ciphertext are reported the same way.
    #[error("Invalid password provided to secret store")]
    BadPassword,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Secret errors ---
    #[error("Cannot create secret '{0}' as it already exists (use --force to overwrite)")]
    SecretExists(String),

    #[error("Invalid secret name: {0}")]
    InvalidSecretName(String),

    #[error("Secret '{0}' does not contain valid UTF-8")]
    InvalidUtf8(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for secret store results.
pub type Result<T> = std::result::Result<T, SecretStoreError>;

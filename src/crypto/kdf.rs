//! Passphrase-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is the work factor against offline guessing.
//! It is not stored anywhere, so a store must always be opened with the
//! count it was created with or every secret will fail to decrypt.

use hmac::Hmac;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::Sha256;

use crate::errors::{Result, SecretStoreError};

/// Length of the per-store salt in bytes (256 bits).
pub const SALT_LEN: usize = 32;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 720_000;

/// Derive a 32-byte key from a passphrase and salt.
///
/// The same passphrase + salt + iterations always produce the same key.
/// Any passphrase is accepted, including the empty one.
pub fn derive_key(passphrase: &[u8], salt: &[u8], iterations: u32) -> Result<[u8; KEY_LEN]> {
    if iterations < 1 {
        return Err(SecretStoreError::KeyDerivationFailed(
            "PBKDF2 iterations must be at least 1".into(),
        ));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(passphrase, salt, iterations, &mut key)
        .map_err(|e| SecretStoreError::KeyDerivationFailed(format!("PBKDF2 failed: {e}")))?;

    Ok(key)
}

/// Generate a fresh 32-byte salt from the operating system RNG.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| std::io::Error::other(format!("OS random source unavailable: {e}")))?;
    Ok(salt)
}

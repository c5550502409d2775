//! AES-256-GCM authenticated encryption for secret records.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce, so
//! encrypting the same value twice never yields the same bytes.
//!
//! Layout of a record envelope:
//!   [ version: 1 byte | 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::errors::{Result, SecretStoreError};

/// Envelope format version written as the first byte.
pub const ENVELOPE_VERSION: u8 = 1;

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
const TAG_LEN: usize = 16;

/// Smallest envelope that could possibly authenticate (empty plaintext).
const MIN_ENVELOPE_LEN: usize = 1 + NONCE_LEN + TAG_LEN;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns `version || nonce || ciphertext`.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| SecretStoreError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Generate a random 12-byte nonce.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| SecretStoreError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prefix version and nonce so the record is a single blob.
    let mut output = Vec::with_capacity(1 + NONCE_LEN + ciphertext.len());
    output.push(ENVELOPE_VERSION);
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt an envelope produced by `encrypt`.
///
/// Every failure (short input, unknown version, bad tag, wrong key)
/// collapses into `BadPassword`.
pub fn decrypt(key: &[u8], envelope: &[u8]) -> Result<Vec<u8>> {
    // Too short to hold version, nonce and tag, or an unknown version.
    if envelope.len() < MIN_ENVELOPE_LEN || envelope[0] != ENVELOPE_VERSION {
        return Err(SecretStoreError::BadPassword);
    }

    // Split nonce from ciphertext.
    let (nonce_bytes, ciphertext) = envelope[1..].split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| SecretStoreError::BadPassword)?;

    // Decrypt and verify the auth tag.
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| SecretStoreError::BadPassword)
}

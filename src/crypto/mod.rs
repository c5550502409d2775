//! Cryptographic primitives for the secret store.
//!
//! This module provides:
//! - AES-256-GCM record envelopes (`encryption`)
//! - PBKDF2-HMAC-SHA256 key derivation and salt generation (`kdf`)
//! - The zeroize-on-drop `DerivedKey` holder (`keys`)

pub mod encryption;
pub mod kdf;
pub mod keys;

pub use encryption::{decrypt, encrypt};
pub use kdf::{derive_key, generate_salt, DEFAULT_ITERATIONS, KEY_LEN, SALT_LEN};
pub use keys::DerivedKey;

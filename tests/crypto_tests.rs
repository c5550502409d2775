//! Integration tests for the crypto module.

use filesecretstore::crypto::encryption::ENVELOPE_VERSION;
use filesecretstore::crypto::{decrypt, derive_key, encrypt, generate_salt, DerivedKey};
use filesecretstore::SecretStoreError;

// ---------------------------------------------------------------------------
// Envelope encryption
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = [0xABu8; 32];
    let plaintext = b"postgres://user:pw@localhost/db";

    let envelope = encrypt(&key, plaintext).expect("encrypt should succeed");

    // 1-byte version + 12-byte nonce + 16-byte tag.
    assert_eq!(envelope.len(), plaintext.len() + 29);
    assert_eq!(envelope[0], ENVELOPE_VERSION);

    let recovered = decrypt(&key, &envelope).expect("decrypt should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn empty_plaintext_roundtrips() {
    let key = [0x01u8; 32];
    let envelope = encrypt(&key, b"").unwrap();
    assert_eq!(decrypt(&key, &envelope).unwrap(), b"");
}

#[test]
fn encrypt_produces_different_envelopes_each_time() {
    let key = [0xCDu8; 32];
    let plaintext = b"s3cr3t";

    let first = encrypt(&key, plaintext).expect("encrypt 1");
    let second = encrypt(&key, plaintext).expect("encrypt 2");

    assert_ne!(first, second, "fresh nonce per call");
    assert_eq!(decrypt(&key, &first).unwrap(), plaintext);
    assert_eq!(decrypt(&key, &second).unwrap(), plaintext);
}

#[test]
fn decrypt_with_wrong_key_is_bad_password() {
    let envelope = encrypt(&[0x11u8; 32], b"value").unwrap();
    assert!(matches!(
        decrypt(&[0x22u8; 32], &envelope),
        Err(SecretStoreError::BadPassword)
    ));
}

#[test]
fn decrypt_truncated_envelope_is_bad_password() {
    let key = [0xAAu8; 32];
    let envelope = encrypt(&key, b"value").unwrap();

    for len in [0, 1, 13, 28, envelope.len() - 1] {
        assert!(
            matches!(
                decrypt(&key, &envelope[..len]),
                Err(SecretStoreError::BadPassword)
            ),
            "truncated to {len} bytes"
        );
    }
}

#[test]
fn decrypt_tampered_envelope_is_bad_password() {
    let key = [0xBBu8; 32];
    let mut envelope = encrypt(&key, b"value").unwrap();
    let last = envelope.len() - 1;
    envelope[last] ^= 0x01;

    assert!(matches!(
        decrypt(&key, &envelope),
        Err(SecretStoreError::BadPassword)
    ));
}

#[test]
fn decrypt_unknown_version_is_bad_password() {
    let key = [0xBBu8; 32];
    let mut envelope = encrypt(&key, b"value").unwrap();
    envelope[0] = 0x80;

    assert!(matches!(
        decrypt(&key, &envelope),
        Err(SecretStoreError::BadPassword)
    ));
}

// ---------------------------------------------------------------------------
// Key derivation (PBKDF2-HMAC-SHA256)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_is_deterministic() {
    let salt = [0x42u8; 32];
    let a = derive_key(b"passphrase", &salt, 1_000).unwrap();
    let b = derive_key(b"passphrase", &salt, 1_000).unwrap();
    assert_eq!(a, b);
}

#[test]
fn derive_key_depends_on_every_input() {
    let salt = [0x42u8; 32];
    let base = derive_key(b"passphrase", &salt, 1_000).unwrap();

    assert_ne!(base, derive_key(b"passphrase2", &salt, 1_000).unwrap());
    assert_ne!(base, derive_key(b"passphrase", &[0x43u8; 32], 1_000).unwrap());
    assert_ne!(base, derive_key(b"passphrase", &salt, 1_001).unwrap());
}

#[test]
fn derive_key_matches_rfc7914_vector() {
    // PBKDF2-HMAC-SHA256 test vector from RFC 7914 section 11.
    let key = derive_key(b"passwd", b"salt", 1).unwrap();
    let expected: [u8; 32] = [
        0x55, 0xac, 0x04, 0x6e, 0x56, 0xe3, 0x08, 0x9f, 0xec, 0x16, 0x91, 0xc2, 0x25, 0x44,
        0xb6, 0x05, 0xf9, 0x41, 0x85, 0x21, 0x6d, 0xde, 0x04, 0x65, 0xe6, 0x8b, 0x9d, 0x57,
        0xc2, 0x0d, 0xac, 0xbc,
    ];
    assert_eq!(key, expected);
}

#[test]
fn derive_key_accepts_empty_passphrase() {
    let key = derive_key(b"", &[0u8; 32], 1_000).unwrap();
    assert_eq!(key.len(), 32);
}

#[test]
fn derive_key_rejects_zero_iterations() {
    assert!(matches!(
        derive_key(b"pw", &[0u8; 32], 0),
        Err(SecretStoreError::KeyDerivationFailed(_))
    ));
}

#[test]
fn generate_salt_is_random() {
    let a = generate_salt().unwrap();
    let b = generate_salt().unwrap();
    assert_eq!(a.len(), 32);
    assert_ne!(a, b);
}

#[test]
fn derived_key_debug_is_redacted() {
    let key = DerivedKey::new([0x5Au8; 32]);
    let rendered = format!("{key:?}");
    assert_eq!(rendered, "DerivedKey(<redacted>)");
    assert_eq!(key.as_bytes(), &[0x5Au8; 32]);
}

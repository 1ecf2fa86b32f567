//! Fuzz target for signature-to-key derivation
//!
//! # Strategy
//!
//! - Arbitrary signature bytes (empty, short, signature-sized, oversized)
//! - Arbitrary KDF nonces, so every skip offset 0..=510 is reachable
//!
//! # Invariants
//!
//! - Derivation never panics
//! - Empty signatures are rejected
//! - Derivation is deterministic
//! - Changing the nonce changes the key

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pond_crypto::{SecretError, v1::derive_key};

#[derive(Debug, Clone, Arbitrary)]
struct DerivationInput {
    /// Raw signature bytes
    signature: Vec<u8>,
    /// HKDF salt
    kdf_nonce: [u8; 32],
}

fuzz_target!(|input: DerivationInput| {
    let Ok(key) = derive_key(&input.signature, &input.kdf_nonce) else {
        assert!(input.signature.is_empty(), "non-empty signature rejected");
        return;
    };
    assert!(!input.signature.is_empty());

    let again = derive_key(&input.signature, &input.kdf_nonce).unwrap();
    assert_eq!(key.as_bytes(), again.as_bytes(), "derivation not deterministic");

    let mut other_nonce = input.kdf_nonce;
    other_nonce[31] ^= 1;
    let other = derive_key(&input.signature, &other_nonce).unwrap();
    assert_ne!(key.as_bytes(), other.as_bytes(), "nonce ignored");

    assert!(matches!(derive_key(&[], &input.kdf_nonce), Err(SecretError::Derivation { .. })));
});

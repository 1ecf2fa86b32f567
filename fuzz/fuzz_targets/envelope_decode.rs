//! Fuzz target for envelope parsing
//!
//! Feeds arbitrary bytes to `Envelope::decode` and to the top-level
//! `decrypt`, which dispatches on the version byte before any signing.
//!
//! The fuzzer should NEVER panic. All invalid inputs should return an error.
//!
//! # Invariants
//!
//! - Decoded envelopes re-encode to the exact input bytes
//! - Anything not produced by the signing key fails with a typed error

#![no_main]

use ed25519_dalek::SigningKey;
use libfuzzer_sys::fuzz_target;
use pond_crypto::{SecretError, decrypt, v1::Envelope};

fuzz_target!(|data: &[u8]| {
    if let Ok(envelope) = Envelope::decode(data) {
        assert_eq!(envelope.encode(), data, "decode/encode mismatch");
    }

    let key = SigningKey::from_bytes(&[0x42; 32]);
    match decrypt(&key, data, &["fuzz"]) {
        Ok(_) => panic!("forged envelope accepted"),
        Err(
            SecretError::MalformedEnvelope { .. }
            | SecretError::UnsupportedVersion(_)
            | SecretError::AuthenticationFailed,
        ) => {}
        Err(other) => panic!("unexpected error: {other}"),
    }
});

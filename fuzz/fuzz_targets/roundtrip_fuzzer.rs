//! Fuzz target for the full encrypt/decrypt cycle
//!
//! Randomness is taken from the fuzz input, so nonces and padding lengths
//! cover every value including all-zero and all-0xff.
//!
//! # Invariants
//!
//! - decrypt(encrypt(m)) == m
//! - Envelope length is prefix + tag + padding (1..=32) + plaintext
//! - Flipping any bit after the version byte fails authentication
//! - Dropping the last keyword fails authentication

#![no_main]

use arbitrary::Arbitrary;
use ed25519_dalek::SigningKey;
use libfuzzer_sys::fuzz_target;
use pond_crypto::{
    Entropy, SecretError, decrypt, encrypt,
    v1::{BOX_TAG_SIZE, PREFIX_SIZE, RANDOM_SIZE},
};

#[derive(Debug, Clone, Arbitrary)]
struct RoundtripScenario {
    key_seed: [u8; 32],
    keywords: Vec<String>,
    plaintext: String,
    random: [u8; RANDOM_SIZE],
    flip_at: u16,
    flip_bit: u8,
}

/// Replays the scenario's random bytes
struct Replay([u8; RANDOM_SIZE]);

impl Entropy for Replay {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), SecretError> {
        let n = buffer.len().min(RANDOM_SIZE);
        buffer[..n].copy_from_slice(&self.0[..n]);
        Ok(())
    }
}

fuzz_target!(|scenario: RoundtripScenario| {
    let key = SigningKey::from_bytes(&scenario.key_seed);
    let entropy = Replay(scenario.random);

    let envelope = encrypt(&key, &scenario.keywords, &scenario.plaintext, &entropy).unwrap();
    let padding = envelope.len() - PREFIX_SIZE - BOX_TAG_SIZE - scenario.plaintext.len();
    assert!((1..=32).contains(&padding), "padding length {padding}");

    let decrypted = decrypt(&key, &envelope, &scenario.keywords).unwrap();
    assert_eq!(decrypted, scenario.plaintext);

    let mut tampered = envelope.clone();
    let index = 1 + usize::from(scenario.flip_at) % (tampered.len() - 1);
    tampered[index] ^= 1 << (scenario.flip_bit % 8);
    assert_eq!(decrypt(&key, &tampered, &scenario.keywords), Err(SecretError::AuthenticationFailed));

    if let Some((_, shorter)) = scenario.keywords.split_last() {
        assert_eq!(decrypt(&key, &envelope, shorter), Err(SecretError::AuthenticationFailed));
    }
});

//! Fixed v1 vectors.
//!
//! A stub signer returns `SHA256(message)` and the entropy source is fixed, so
//! every intermediate value and the full envelope are reproducible byte for
//! byte. Any conforming implementation must produce the same bytes.

use pond_crypto::{
    Entropy, SecretError, Signer, canonical_message, decrypt, encrypt, sign_keywords,
    v1::{Envelope, derive_key},
};
use sha2::{Digest, Sha256};

/// Test-only "signer": hashes the message instead of signing it
struct Sha256Signer;

impl Signer for Sha256Signer {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SecretError> {
        Ok(Sha256::digest(message).to_vec())
    }

    fn public_identity(&self) -> Vec<u8> {
        b"sha256-stub".to_vec()
    }
}

/// Every byte is zero
struct ZeroEntropy;

impl Entropy for ZeroEntropy {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), SecretError> {
        buffer.fill(0);
        Ok(())
    }
}

/// Byte `i` of every draw is `i`
struct CountingEntropy;

impl Entropy for CountingEntropy {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), SecretError> {
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = i as u8;
        }
        Ok(())
    }
}

const KEYWORDS: [&str; 2] = ["alpha", "bravo"];

fn zero_prefix() -> String {
    format!("01{}", "00".repeat(88))
}

#[test]
fn zero_nonce_message() {
    let message = canonical_message(&[0u8; 32], &KEYWORDS);
    assert_eq!(
        hex::encode(message),
        format!("706f6e642f736563726574000a0d0a00{}000a0d0a00616c706861000a0d0a00627261766f", "00".repeat(32))
    );
}

#[test]
fn zero_nonce_signature_and_key() {
    let signature = sign_keywords(&Sha256Signer, &KEYWORDS, &[0u8; 32]).unwrap();
    assert_eq!(
        hex::encode(signature.as_slice()),
        "92fea8870a956c07cdbaf82ec9f2ed157bf08a4019baf201262853853b75d488"
    );

    // Offset is 0 + 0x92 = 146 bytes into the HKDF stream
    let key = derive_key(&signature, &[0u8; 32]).unwrap();
    assert_eq!(
        hex::encode(key.as_bytes()),
        "497f4436e25ad235abefe203d7410a0d9f025b705bcedf61dfa564a90790ada4"
    );
}

#[test]
fn zero_nonce_envelope() {
    let envelope = encrypt(&Sha256Signer, &KEYWORDS, "hello", &ZeroEntropy).unwrap();

    assert_eq!(envelope.len(), 111);
    assert_eq!(
        hex::encode(&envelope),
        format!("{}d0c2ba139c2687419d8eb6d19753d6e6eb93093a6587", zero_prefix())
    );
    assert_eq!(decrypt(&Sha256Signer, &envelope, &KEYWORDS).unwrap(), "hello");
}

#[test]
fn zero_nonce_empty_plaintext() {
    let envelope = encrypt(&Sha256Signer, &KEYWORDS, "", &ZeroEntropy).unwrap();

    // Smallest possible envelope: prefix, tag and one padding byte
    assert_eq!(envelope.len(), pond_crypto::v1::MIN_ENVELOPE_SIZE);
    assert_eq!(hex::encode(&envelope), format!("{}0309cc5e0b6e5ed453668e7d433e65a0eb", zero_prefix()));
    assert_eq!(decrypt(&Sha256Signer, &envelope, &KEYWORDS).unwrap(), "");
}

#[test]
fn swapped_keywords_change_everything() {
    let swapped = ["bravo", "alpha"];

    let signature = sign_keywords(&Sha256Signer, &swapped, &[0u8; 32]).unwrap();
    assert_eq!(
        hex::encode(signature.as_slice()),
        "1ab1038d0d7cdf60788a843c346e9b72247c10dce76ce112355f0e5661a68692"
    );

    let envelope = encrypt(&Sha256Signer, &swapped, "hello", &ZeroEntropy).unwrap();
    assert_eq!(
        hex::encode(&envelope),
        format!("{}e5a3833a35edb4520df7db40f37ab31a4d6427fef4bd", zero_prefix())
    );

    assert_eq!(
        decrypt(&Sha256Signer, &envelope, &KEYWORDS),
        Err(SecretError::AuthenticationFailed)
    );
}

#[test]
fn counting_entropy_envelope() {
    let envelope = encrypt(&Sha256Signer, &KEYWORDS, "hello", &CountingEntropy).unwrap();

    // Padding source starts at byte 88, so 1 + 88 % 32 = 25 bytes of padding
    assert_eq!(envelope.len(), 89 + 16 + 25 + 5);

    let prefix: Vec<u8> = (0u8..88).collect();
    assert_eq!(
        hex::encode(&envelope),
        format!(
            "01{}{}",
            hex::encode(prefix),
            "ac542723e7fdbec809d7f8b11fe993ccca84bde249fc7cc22038efb9d347e9880e285f1481668e8402c2417f2a2b"
        )
    );

    let parsed = Envelope::decode(&envelope).unwrap();
    let signature = sign_keywords(&Sha256Signer, &KEYWORDS, &parsed.signature_nonce).unwrap();
    assert_eq!(
        hex::encode(signature.as_slice()),
        "c9fa2d38b69a91abe7106e051a2d4bc019658456c017bc52681f30b35dc4b503"
    );

    // Offset is 0x20 + 0xc9 = 233 bytes into the HKDF stream
    let key = derive_key(&signature, &parsed.kdf_nonce).unwrap();
    assert_eq!(
        hex::encode(key.as_bytes()),
        "4e942536cb08c0afbdc7dcf10b510942667830d11a1250d51ebdb00acf89ffdc"
    );

    assert_eq!(decrypt(&Sha256Signer, &envelope, &KEYWORDS).unwrap(), "hello");
}

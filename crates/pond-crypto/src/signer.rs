//! Signer adapter and canonical message construction.
//!
//! The encryption key is never stored. It is re-derived by signing a
//! reproducible message built from a fixed header, a nonce and the caller's
//! keywords, so only the holder of the private key who also knows the keyword
//! list can reconstruct it.

use ed25519_dalek::{Signer as _, SigningKey};
use zeroize::Zeroizing;

use crate::error::SecretError;

/// Protocol header, first component of every signed message and the HKDF info
pub const MAGIC_HEADER: &[u8] = b"pond/secret";

/// Separator between message components.
///
/// Binary sequence that does not occur in natural keyword text, so keyword
/// boundaries stay unambiguous even if a keyword contains the header.
pub const MAGIC_SEPARATOR: &[u8] = &[0x00, b'\n', b'\r', b'\n', 0x00];

/// Capability to sign arbitrary bytes with a private key.
///
/// Implementations own the key material; nothing else in this crate sees it.
///
/// # Invariants
///
/// - `sign()` MUST be deterministic: the same message always produces the same
///   signature. A randomized scheme encrypts fine but can never decrypt,
///   because the derived key is not reproducible.
pub trait Signer {
    /// Sign `message`, returning the raw signature bytes.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SecretError>;

    /// Public half of the key, for export and display.
    fn public_identity(&self) -> Vec<u8>;
}

impl<S: Signer + ?Sized> Signer for &S {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SecretError> {
        (**self).sign(message)
    }

    fn public_identity(&self) -> Vec<u8> {
        (**self).public_identity()
    }
}

impl Signer for SigningKey {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SecretError> {
        let signature = self
            .try_sign(message)
            .map_err(|e| SecretError::Signing { reason: e.to_string() })?;
        Ok(signature.to_bytes().to_vec())
    }

    fn public_identity(&self) -> Vec<u8> {
        self.verifying_key().to_bytes().to_vec()
    }
}

/// Build the exact byte sequence that gets signed.
///
/// `HEADER ++ SEP ++ nonce ++ SEP ++ keyword_1 ++ SEP ++ ... ++ keyword_n`
///
/// Keyword order is significant. With no keywords the message ends after the
/// nonce.
pub fn canonical_message<K: AsRef<str>>(nonce: &[u8], keywords: &[K]) -> Vec<u8> {
    let keyword_bytes: usize = keywords.iter().map(|k| k.as_ref().len()).sum();
    let capacity = MAGIC_HEADER.len()
        + nonce.len()
        + keyword_bytes
        + MAGIC_SEPARATOR.len() * (keywords.len() + 1);

    let mut message = Vec::with_capacity(capacity);
    message.extend_from_slice(MAGIC_HEADER);
    message.extend_from_slice(MAGIC_SEPARATOR);
    message.extend_from_slice(nonce);
    for keyword in keywords {
        message.extend_from_slice(MAGIC_SEPARATOR);
        message.extend_from_slice(keyword.as_ref().as_bytes());
    }

    debug_assert_eq!(message.len(), capacity);
    message
}

/// Sign the canonical message for `keywords` under `nonce`.
///
/// The returned signature is keying material and is wiped when dropped.
pub fn sign_keywords<S, K>(
    signer: &S,
    keywords: &[K],
    nonce: &[u8],
) -> Result<Zeroizing<Vec<u8>>, SecretError>
where
    S: Signer + ?Sized,
    K: AsRef<str>,
{
    let message = canonical_message(nonce, keywords);
    let signature = Zeroizing::new(signer.sign(&message)?);
    if signature.is_empty() {
        return Err(SecretError::Signing { reason: "signer returned an empty signature".to_string() });
    }
    Ok(signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptySigner;

    impl Signer for EmptySigner {
        fn sign(&self, _message: &[u8]) -> Result<Vec<u8>, SecretError> {
            Ok(Vec::new())
        }

        fn public_identity(&self) -> Vec<u8> {
            Vec::new()
        }
    }

    fn test_key() -> SigningKey {
        SigningKey::from_bytes(&[7u8; 32])
    }

    #[test]
    fn message_layout() {
        let message = canonical_message(&[0xAA; 4], &["alpha", "bravo"]);

        let mut expected = Vec::new();
        expected.extend_from_slice(b"pond/secret");
        expected.extend_from_slice(b"\0\n\r\n\0");
        expected.extend_from_slice(&[0xAA; 4]);
        expected.extend_from_slice(b"\0\n\r\n\0");
        expected.extend_from_slice(b"alpha");
        expected.extend_from_slice(b"\0\n\r\n\0");
        expected.extend_from_slice(b"bravo");

        assert_eq!(message, expected);
    }

    #[test]
    fn message_without_keywords_ends_at_nonce() {
        let keywords: [&str; 0] = [];
        let message = canonical_message(&[1, 2, 3], &keywords);
        assert_eq!(message, b"pond/secret\0\n\r\n\0\x01\x02\x03");
    }

    #[test]
    fn keyword_order_changes_message() {
        let nonce = [0u8; 32];
        assert_ne!(
            canonical_message(&nonce, &["alpha", "bravo"]),
            canonical_message(&nonce, &["bravo", "alpha"])
        );
    }

    #[test]
    fn keyword_boundaries_are_unambiguous() {
        let nonce = [0u8; 32];
        assert_ne!(
            canonical_message(&nonce, &["ab", "c"]),
            canonical_message(&nonce, &["a", "bc"])
        );
        assert_ne!(canonical_message(&nonce, &["abc"]), canonical_message(&nonce, &["ab", "c"]));
    }

    #[test]
    fn accepts_owned_keywords() {
        let owned = vec!["alpha".to_string(), "bravo".to_string()];
        assert_eq!(canonical_message(&[9], &owned), canonical_message(&[9], &["alpha", "bravo"]));
    }

    #[test]
    fn ed25519_signing_is_deterministic() {
        let key = test_key();
        let first = sign_keywords(&key, &["alpha"], &[1u8; 32]).unwrap();
        let second = sign_keywords(&key, &["alpha"], &[1u8; 32]).unwrap();

        assert_eq!(first.len(), 64);
        assert_eq!(first, second);
    }

    #[test]
    fn ed25519_public_identity_is_verifying_key() {
        let key = test_key();
        assert_eq!(key.public_identity(), key.verifying_key().to_bytes().to_vec());
    }

    #[test]
    fn different_nonce_different_signature() {
        let key = test_key();
        let first = sign_keywords(&key, &["alpha"], &[1u8; 32]).unwrap();
        let second = sign_keywords(&key, &["alpha"], &[2u8; 32]).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn empty_signature_is_rejected() {
        let result = sign_keywords(&EmptySigner, &["alpha"], &[0u8; 32]);
        assert!(matches!(result, Err(SecretError::Signing { .. })));
    }
}

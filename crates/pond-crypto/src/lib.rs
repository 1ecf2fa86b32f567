//! Pond Secret Encryption
//!
//! Encrypts secret values so that decrypting them requires both a private
//! signing key and the ordered list of keywords used at encryption time. The
//! symmetric key is never stored: it is re-derived on demand by signing a
//! reproducible message and stretching the signature with HKDF.
//!
//! # Key Lifecycle
//!
//! ```text
//! HEADER ‖ nonce ‖ keyword_1 ‖ ... ‖ keyword_n
//!        │
//!        ▼
//! Signer → Signature (never stored)
//!        │
//!        ▼
//! HKDF → Secret Key (per envelope, wiped after use)
//!        │
//!        ▼
//! XSalsa20-Poly1305 → Envelope
//! ```
//!
//! # Security
//!
//! Binding:
//! - The key depends on the signature, which only the key holder can produce
//! - The signed message contains every keyword in order; any change yields a
//!   different key
//!
//! Authenticity:
//! - XSalsa20-Poly1305 rejects tampered envelopes
//! - Failures carry no detail: wrong key, wrong keywords and corruption look
//!   the same to the caller
//!
//! Length hiding:
//! - 1 to 32 bytes of random padding are sealed with the plaintext
//!
//! # Concurrency
//!
//! All operations are stateless single calls. They are safe to run from many
//! threads as long as the [`Signer`] and [`Entropy`] implementations are.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod entropy;
pub mod error;
pub mod keyfile;
pub mod signer;
pub mod v1;

pub use entropy::{DeterministicEntropy, Entropy, SystemEntropy};
pub use error::SecretError;
pub use keyfile::load_signing_key;
pub use signer::{MAGIC_HEADER, MAGIC_SEPARATOR, Signer, canonical_message, sign_keywords};

/// Envelope format versions, identified by the first envelope byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Version {
    /// Signature-derived key, HKDF-SHA256, XSalsa20-Poly1305
    V1 = v1::TAG,
}

impl Version {
    /// Format written by [`encrypt`].
    pub const CURRENT: Self = Self::V1;

    /// Tag byte for this version.
    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Version {
    type Error = SecretError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            v1::TAG => Ok(Self::V1),
            other => Err(SecretError::UnsupportedVersion(other)),
        }
    }
}

/// Encrypt `plaintext` with the current format.
///
/// See [`v1::encrypt`].
pub fn encrypt<S, K, E>(
    signer: &S,
    keywords: &[K],
    plaintext: &str,
    entropy: &E,
) -> Result<Vec<u8>, SecretError>
where
    S: Signer + ?Sized,
    K: AsRef<str>,
    E: Entropy + ?Sized,
{
    match Version::CURRENT {
        Version::V1 => v1::encrypt(signer, keywords, plaintext, entropy),
    }
}

/// Decrypt an envelope of any supported version.
///
/// The format is selected by the first byte; unknown tags are rejected
/// before any cryptographic operation.
///
/// # Errors
///
/// - `MalformedEnvelope`: empty input, or shorter than the selected format
///   allows
/// - `UnsupportedVersion`: unknown tag byte
/// - Any error of the selected format's `decrypt`
pub fn decrypt<S, K>(signer: &S, envelope: &[u8], keywords: &[K]) -> Result<String, SecretError>
where
    S: Signer + ?Sized,
    K: AsRef<str>,
{
    let Some(&tag) = envelope.first() else {
        return Err(SecretError::MalformedEnvelope { actual: 0, minimum: 1 });
    };

    match Version::try_from(tag)? {
        Version::V1 => v1::decrypt(signer, envelope, keywords),
    }
}

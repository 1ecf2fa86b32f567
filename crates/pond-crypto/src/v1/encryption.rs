//! v1 encrypt/decrypt using XSalsa20-Poly1305
//!
//! All randomness comes from the caller's [`Entropy`] source, drawn once per
//! envelope. This enables deterministic test vectors without global state.

use crypto_secretbox::{
    XSalsa20Poly1305,
    aead::{AeadInPlace, KeyInit, generic_array::GenericArray},
};
use zeroize::Zeroizing;

use super::{
    BOX_NONCE_SIZE, BOX_TAG_SIZE, KDF_NONCE_SIZE, PADDING_MAX_SIZE, RANDOM_SIZE,
    SIGNATURE_NONCE_SIZE,
    derivation::{SecretKey, derive_key},
    envelope::{Envelope, take},
    padding::{pad, unpad},
};
use crate::{
    entropy::Entropy,
    error::SecretError,
    signer::{Signer, sign_keywords},
};

/// Encrypt `plaintext` bound to `signer` and `keywords`.
///
/// Returns the encoded v1 envelope.
///
/// # Security
///
/// - Three fresh nonces and the padding are drawn from `entropy` in a single
///   read; `entropy` MUST be a CSPRNG in production
/// - The derived key, the signature and the padded plaintext are wiped after
///   use
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
    let mut random = Zeroizing::new([0u8; RANDOM_SIZE]);
    entropy.random_bytes(random.as_mut_slice())?;

    let mut cursor = 0;
    let signature_nonce = take::<SIGNATURE_NONCE_SIZE>(random.as_slice(), &mut cursor);
    let kdf_nonce = take::<KDF_NONCE_SIZE>(random.as_slice(), &mut cursor);
    let box_nonce = take::<BOX_NONCE_SIZE>(random.as_slice(), &mut cursor);
    let padding = Zeroizing::new(take::<PADDING_MAX_SIZE>(random.as_slice(), &mut cursor));
    debug_assert_eq!(cursor, RANDOM_SIZE);

    let signature = sign_keywords(signer, keywords, &signature_nonce)?;
    let key = derive_key(&signature, &kdf_nonce)?;
    let padded = pad(&padding, plaintext.as_bytes());
    let sealed = seal(&key, &box_nonce, &padded)?;

    let envelope = Envelope { signature_nonce, kdf_nonce, box_nonce, sealed }.encode();
    tracing::debug!(keywords = keywords.len(), envelope_len = envelope.len(), "sealed v1 secret");
    Ok(envelope)
}

/// Decrypt a v1 envelope with the same `signer` and `keywords` used to
/// encrypt it.
///
/// # Errors
///
/// - `MalformedEnvelope` / `UnsupportedVersion`: rejected before any
///   cryptographic operation
/// - `AuthenticationFailed`: wrong signer, wrong keywords (including order) or
///   corrupted envelope; the cases are indistinguishable
/// - `MalformedPlaintext`: authenticated payload has bad padding or is not
///   UTF-8
pub fn decrypt<S, K>(signer: &S, envelope: &[u8], keywords: &[K]) -> Result<String, SecretError>
where
    S: Signer + ?Sized,
    K: AsRef<str>,
{
    let envelope = Envelope::decode(envelope)?;

    let signature = sign_keywords(signer, keywords, &envelope.signature_nonce)?;
    let key = derive_key(&signature, &envelope.kdf_nonce)?;
    let padded = open(&key, &envelope.box_nonce, &envelope.sealed)?;

    let plaintext = std::str::from_utf8(unpad(&padded)?)
        .map_err(|e| SecretError::MalformedPlaintext { reason: e.to_string() })?;

    tracing::debug!(keywords = keywords.len(), envelope_len = envelope.len(), "opened v1 secret");
    Ok(plaintext.to_owned())
}

/// Seal `padded` as a NaCl secretbox: `tag || ciphertext`.
fn seal(
    key: &SecretKey,
    nonce: &[u8; BOX_NONCE_SIZE],
    padded: &[u8],
) -> Result<Vec<u8>, SecretError> {
    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(key.as_bytes()));

    let mut sealed = vec![0u8; BOX_TAG_SIZE + padded.len()];
    sealed[BOX_TAG_SIZE..].copy_from_slice(padded);

    let tag = cipher
        .encrypt_in_place_detached(
            GenericArray::from_slice(nonce),
            b"",
            &mut sealed[BOX_TAG_SIZE..],
        )
        .map_err(|_| SecretError::MalformedPlaintext {
            reason: format!("{} bytes exceed the secretbox limit", padded.len()),
        })?;
    sealed[..BOX_TAG_SIZE].copy_from_slice(&tag);

    Ok(sealed)
}

/// Open a NaCl secretbox, returning the padded plaintext.
fn open(
    key: &SecretKey,
    nonce: &[u8; BOX_NONCE_SIZE],
    sealed: &[u8],
) -> Result<Zeroizing<Vec<u8>>, SecretError> {
    let Some((tag, ciphertext)) = sealed.split_at_checked(BOX_TAG_SIZE) else {
        return Err(SecretError::AuthenticationFailed);
    };

    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(key.as_bytes()));
    let mut buffer = Zeroizing::new(ciphertext.to_vec());

    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(nonce),
            b"",
            buffer.as_mut_slice(),
            GenericArray::from_slice(tag),
        )
        .map_err(|_| {
            tracing::debug!("v1 secretbox authentication failed");
            SecretError::AuthenticationFailed
        })?;

    Ok(buffer)
}

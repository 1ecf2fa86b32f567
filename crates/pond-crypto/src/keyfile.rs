//! Loading signing keys from the filesystem

use std::path::Path;

use ed25519_dalek::{SigningKey, pkcs8::DecodePrivateKey};
use zeroize::Zeroizing;

use crate::error::SecretError;

/// Load an Ed25519 private key from a PKCS#8 PEM file.
///
/// # Errors
///
/// - `KeyUnavailable`: the file cannot be read or does not hold an Ed25519
///   PKCS#8 key
pub fn load_signing_key(path: impl AsRef<Path>) -> Result<SigningKey, SecretError> {
    let path = path.as_ref();
    let unavailable =
        |reason: String| SecretError::KeyUnavailable { path: path.display().to_string(), reason };

    let pem = Zeroizing::new(std::fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?);
    let key = SigningKey::from_pkcs8_pem(pem.as_str()).map_err(|e| unavailable(e.to_string()))?;

    tracing::debug!(path = %path.display(), "loaded signing key");
    Ok(key)
}

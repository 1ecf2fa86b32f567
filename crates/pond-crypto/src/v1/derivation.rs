//! Key derivation from a signature using HKDF

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

use super::{BOX_KEY_SIZE, KDF_NONCE_SIZE};
use crate::{error::SecretError, signer::MAGIC_HEADER};

/// A 32-byte secretbox key derived from a signature.
///
/// Re-derived for every operation and wiped on drop.
pub struct SecretKey {
    key: [u8; BOX_KEY_SIZE],
}

impl SecretKey {
    /// Raw key bytes for XSalsa20-Poly1305.
    pub fn as_bytes(&self) -> &[u8; BOX_KEY_SIZE] {
        &self.key
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Derive the envelope key from a signature and the KDF nonce.
///
/// HKDF-SHA256 with salt = `kdf_nonce`, secret = `signature` and info =
/// [`MAGIC_HEADER`]. The first `kdf_nonce[0] + signature[0]` bytes of the
/// expanded stream are discarded and the next 32 bytes become the key, which
/// moves the key to an input-dependent offset. The offset is part of the
/// format and must be reproduced exactly.
///
/// Any non-empty signature is accepted; its length depends on the signer
/// (64 bytes for Ed25519). Signatures are high-entropy, so a fast KDF is
/// sufficient; there is no password to stretch.
///
/// # Errors
///
/// - `Derivation`: empty signature, or HKDF refused the output length
pub fn derive_key(
    signature: &[u8],
    kdf_nonce: &[u8; KDF_NONCE_SIZE],
) -> Result<SecretKey, SecretError> {
    let Some(&first) = signature.first() else {
        return Err(SecretError::Derivation { reason: "empty signature".to_string() });
    };

    let skip = usize::from(kdf_nonce[0]) + usize::from(first);
    tracing::trace!(skip, "deriving v1 key");

    let length = skip + BOX_KEY_SIZE;
    let hkdf = Hkdf::<Sha256>::new(Some(kdf_nonce.as_slice()), signature);
    let mut stream = Zeroizing::new(vec![0u8; length]);
    hkdf.expand(MAGIC_HEADER, stream.as_mut_slice()).map_err(|e| SecretError::Derivation {
        reason: format!("failed to expand {length} bytes: {e}"),
    })?;

    let mut key = [0u8; BOX_KEY_SIZE];
    key.copy_from_slice(&stream[skip..]);
    Ok(SecretKey { key })
}

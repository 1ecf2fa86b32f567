//! Length-hiding padding.
//!
//! A random prefix of 1..=32 bytes is sealed together with the plaintext.
//! The first padding byte encodes the padding length, so no extra length
//! field is needed:
//!
//! ```text
//! padding_len = 1 + padding[0] % 32
//! ```

use zeroize::Zeroizing;

use super::PADDING_MAX_SIZE;
use crate::error::SecretError;

/// Padding length encoded by the first padding byte.
pub fn padding_len(first: u8) -> usize {
    1 + usize::from(first) % PADDING_MAX_SIZE
}

/// Prepend padding cut from `random` to `plaintext`.
///
/// The result is secret and is wiped on drop.
pub fn pad(random: &[u8; PADDING_MAX_SIZE], plaintext: &[u8]) -> Zeroizing<Vec<u8>> {
    let len = padding_len(random[0]);
    let mut padded = Zeroizing::new(Vec::with_capacity(len + plaintext.len()));
    padded.extend_from_slice(&random[..len]);
    padded.extend_from_slice(plaintext);
    padded
}

/// Strip the padding prefix from decrypted bytes.
///
/// # Errors
///
/// - `MalformedPlaintext`: empty input, or the encoded length exceeds the
///   input
pub fn unpad(padded: &[u8]) -> Result<&[u8], SecretError> {
    let Some(&first) = padded.first() else {
        return Err(SecretError::MalformedPlaintext {
            reason: "missing padding length tag after decryption".to_string(),
        });
    };

    let skip = padding_len(first);
    padded.get(skip..).ok_or_else(|| SecretError::MalformedPlaintext {
        reason: format!(
            "invalid padding length ({skip} bytes) in decrypted value ({} bytes)",
            padded.len()
        ),
    })
}

//! v1 envelope binary layout.
//!
//! ```text
//! | tag (1) | signature_nonce (32) | kdf_nonce (32) | box_nonce (24) | sealed (variable) |
//! ```
//!
//! `sealed` is a NaCl secretbox: 16-byte Poly1305 tag followed by the
//! XSalsa20 ciphertext of `padding || plaintext`. There are no length fields;
//! every prefix field has a fixed size.

use super::{
    BOX_NONCE_SIZE, KDF_NONCE_SIZE, MIN_ENVELOPE_SIZE, PREFIX_SIZE, SIGNATURE_NONCE_SIZE, TAG,
};
use crate::error::SecretError;

/// A parsed v1 envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Nonce included in the signed message
    pub signature_nonce: [u8; SIGNATURE_NONCE_SIZE],
    /// HKDF salt
    pub kdf_nonce: [u8; KDF_NONCE_SIZE],
    /// XSalsa20-Poly1305 nonce
    pub box_nonce: [u8; BOX_NONCE_SIZE],
    /// Poly1305 tag followed by ciphertext
    pub sealed: Vec<u8>,
}

impl Envelope {
    /// Total encoded length.
    pub(crate) fn len(&self) -> usize {
        PREFIX_SIZE + self.sealed.len()
    }

    /// Serialize to wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.push(TAG);
        out.extend_from_slice(&self.signature_nonce);
        out.extend_from_slice(&self.kdf_nonce);
        out.extend_from_slice(&self.box_nonce);
        out.extend_from_slice(&self.sealed);
        out
    }

    /// Parse wire bytes.
    ///
    /// Validates structure only; nothing is authenticated here.
    ///
    /// # Errors
    ///
    /// - `MalformedEnvelope`: shorter than [`MIN_ENVELOPE_SIZE`]
    /// - `UnsupportedVersion`: tag byte is not [`TAG`]
    pub fn decode(bytes: &[u8]) -> Result<Self, SecretError> {
        if bytes.len() < MIN_ENVELOPE_SIZE {
            return Err(SecretError::MalformedEnvelope {
                actual: bytes.len(),
                minimum: MIN_ENVELOPE_SIZE,
            });
        }
        if bytes[0] != TAG {
            return Err(SecretError::UnsupportedVersion(bytes[0]));
        }

        let mut cursor = 1;
        let signature_nonce = take::<SIGNATURE_NONCE_SIZE>(bytes, &mut cursor);
        let kdf_nonce = take::<KDF_NONCE_SIZE>(bytes, &mut cursor);
        let box_nonce = take::<BOX_NONCE_SIZE>(bytes, &mut cursor);
        debug_assert_eq!(cursor, PREFIX_SIZE);

        Ok(Self { signature_nonce, kdf_nonce, box_nonce, sealed: bytes[cursor..].to_vec() })
    }
}

/// Copy `N` bytes at `cursor` and advance it.
///
/// Callers check the total length first.
pub(super) fn take<const N: usize>(bytes: &[u8], cursor: &mut usize) -> [u8; N] {
    let mut field = [0u8; N];
    field.copy_from_slice(&bytes[*cursor..*cursor + N]);
    *cursor += N;
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Envelope {
        Envelope {
            signature_nonce: [0x01; SIGNATURE_NONCE_SIZE],
            kdf_nonce: [0x02; KDF_NONCE_SIZE],
            box_nonce: [0x03; BOX_NONCE_SIZE],
            sealed: vec![0x04; 17],
        }
    }

    #[test]
    fn field_offsets() {
        let bytes = sample().encode();

        assert_eq!(bytes.len(), MIN_ENVELOPE_SIZE);
        assert_eq!(bytes[0], TAG);
        assert_eq!(&bytes[1..33], &[0x01; 32]);
        assert_eq!(&bytes[33..65], &[0x02; 32]);
        assert_eq!(&bytes[65..89], &[0x03; 24]);
        assert_eq!(&bytes[89..], &[0x04; 17]);
    }

    #[test]
    fn decode_reads_encoded_fields() {
        let envelope = sample();
        assert_eq!(Envelope::decode(&envelope.encode()).unwrap(), envelope);
    }

    #[test]
    fn decode_rejects_short_input() {
        let bytes = sample().encode();
        let result = Envelope::decode(&bytes[..MIN_ENVELOPE_SIZE - 1]);

        assert_eq!(
            result,
            Err(SecretError::MalformedEnvelope { actual: MIN_ENVELOPE_SIZE - 1, minimum: 106 })
        );
    }

    #[test]
    fn decode_rejects_unknown_tag() {
        let mut bytes = sample().encode();
        bytes[0] = 2;

        assert_eq!(Envelope::decode(&bytes), Err(SecretError::UnsupportedVersion(2)));
    }

    #[test]
    fn len_matches_encoding() {
        let envelope = sample();
        assert_eq!(envelope.len(), envelope.encode().len());
    }
}

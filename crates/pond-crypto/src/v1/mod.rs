//! Original envelope format (version tag 1).
//!
//! # Pipeline
//!
//! ```text
//! keywords + signature_nonce
//!        │
//!        ▼ Signer::sign(canonical message)
//! Signature
//!        │
//!        ▼ HKDF-SHA256(salt = kdf_nonce), skip nonce[0] + sig[0] bytes
//! SecretKey (32 bytes)
//!        │
//!        ▼ XSalsa20-Poly1305(box_nonce, padding || plaintext)
//! tag || signature_nonce || kdf_nonce || box_nonce || sealed
//! ```
//!
//! Decryption re-signs the same keywords with the nonce recovered from the
//! envelope, so it needs the same signer and the same keyword order.

pub mod derivation;
pub mod encryption;
pub mod envelope;
pub mod padding;

pub use derivation::{SecretKey, derive_key};
pub use encryption::{decrypt, encrypt};
pub use envelope::Envelope;
pub use padding::{pad, padding_len, unpad};

/// Version tag, first byte of every v1 envelope
pub const TAG: u8 = 1;

/// Nonce mixed into the signed message
pub const SIGNATURE_NONCE_SIZE: usize = 32;

/// HKDF salt
pub const KDF_NONCE_SIZE: usize = 32;

/// XSalsa20-Poly1305 nonce
pub const BOX_NONCE_SIZE: usize = 24;

/// Upper bound of the random padding
pub const PADDING_MAX_SIZE: usize = 32;

/// XSalsa20-Poly1305 key
pub const BOX_KEY_SIZE: usize = 32;

/// Poly1305 authentication tag
pub const BOX_TAG_SIZE: usize = 16;

/// Tag plus the three nonces
pub const PREFIX_SIZE: usize = 1 + SIGNATURE_NONCE_SIZE + KDF_NONCE_SIZE + BOX_NONCE_SIZE;

/// Smallest valid envelope: prefix, Poly1305 tag and one byte of padding
pub const MIN_ENVELOPE_SIZE: usize = PREFIX_SIZE + BOX_TAG_SIZE + 1;

/// Random bytes drawn per envelope: three nonces and the padding source
pub const RANDOM_SIZE: usize =
    SIGNATURE_NONCE_SIZE + KDF_NONCE_SIZE + BOX_NONCE_SIZE + PADDING_MAX_SIZE;

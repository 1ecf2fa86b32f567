//! Error types for secret encryption and decryption

use thiserror::Error;

/// Errors from sealing or opening a secret envelope
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SecretError {
    /// Private key could not be loaded or unlocked
    #[error("signing key unavailable at {path}: {reason}")]
    KeyUnavailable {
        /// Where the key was expected
        path: String,
        /// Why loading failed
        reason: String,
    },

    /// The signer failed to produce a signature
    #[error("signing failed: {reason}")]
    Signing {
        /// Reason reported by the signer
        reason: String,
    },

    /// Key derivation rejected its input
    #[error("key derivation failed: {reason}")]
    Derivation {
        /// Reason for the failure
        reason: String,
    },

    /// Envelope carries a format tag we do not know
    #[error("unsupported encryption version {0}")]
    UnsupportedVersion(u8),

    /// Authenticated decryption rejected the envelope.
    ///
    /// Carries no detail: wrong key, wrong keywords and corrupted
    /// ciphertext are indistinguishable.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Decrypted bytes are not a valid padded UTF-8 plaintext
    #[error("malformed plaintext: {reason}")]
    MalformedPlaintext {
        /// What was wrong with the plaintext
        reason: String,
    },

    /// Envelope is shorter than its fixed-size prefix
    #[error("encrypted value is too short: got {actual} bytes (want {minimum}+ bytes)")]
    MalformedEnvelope {
        /// Length of the rejected envelope
        actual: usize,
        /// Smallest length the format allows
        minimum: usize,
    },

    /// Random source failed to produce bytes
    #[error("entropy unavailable: {reason}")]
    EntropyUnavailable {
        /// Reason reported by the random source
        reason: String,
    },
}

impl SecretError {
    /// Returns true if the failure came from the environment rather than the
    /// envelope, so the same call may succeed later.
    ///
    /// Protocol and cryptographic failures are final: retrying the same
    /// envelope with the same inputs always fails the same way.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::KeyUnavailable { .. } | Self::EntropyUnavailable { .. } => true,

            Self::Signing { .. }
            | Self::Derivation { .. }
            | Self::UnsupportedVersion(_)
            | Self::AuthenticationFailed
            | Self::MalformedPlaintext { .. }
            | Self::MalformedEnvelope { .. } => false,
        }
    }
}

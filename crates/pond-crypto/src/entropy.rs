//! Entropy abstraction for nonce and padding generation.
//!
//! Decouples the envelope codec from the operating system RNG. Production
//! code uses [`SystemEntropy`]; tests and vector generation can supply
//! reproducible bytes without touching global state.

use hkdf::Hkdf;
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

use crate::error::SecretError;

/// Source of random bytes for nonces and padding.
///
/// # Invariants
///
/// - `random_bytes()` MUST use cryptographically secure entropy in production
/// - A failure to produce bytes is reported, never replaced by weaker bytes
pub trait Entropy {
    /// Fills the provided buffer with random bytes.
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), SecretError>;
}

impl<E: Entropy + ?Sized> Entropy for &E {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), SecretError> {
        (**self).random_bytes(buffer)
    }
}

/// Operating system CSPRNG (getrandom).
///
/// Stateless and safe to share between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl SystemEntropy {
    /// Create a handle to the system random source.
    pub fn new() -> Self {
        Self
    }
}

impl Entropy for SystemEntropy {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), SecretError> {
        getrandom::fill(buffer)
            .map_err(|e| SecretError::EntropyUnavailable { reason: e.to_string() })
    }
}

/// Info label for the deterministic HKDF stream
const DETERMINISTIC_INFO: &[u8] = b"pond/secrets: deterministic nonce";

/// Largest output HKDF-SHA512 can produce
pub const DETERMINISTIC_MAX_BYTES: usize = 255 * 64;

/// Deterministic, NOT cryptographically secure byte source.
///
/// Output looks random but carries exactly as much entropy as the seed. Each
/// call returns the same prefix of one HKDF-SHA512 stream, so two calls
/// requesting the same length return identical bytes. Use a fresh seed per
/// envelope; intended for reproducible test vectors only.
pub struct DeterministicEntropy {
    seed: Zeroizing<Vec<u8>>,
}

impl DeterministicEntropy {
    /// Create a source that expands `seed`.
    pub fn new(seed: impl AsRef<[u8]>) -> Self {
        Self { seed: Zeroizing::new(seed.as_ref().to_vec()) }
    }
}

impl std::fmt::Debug for DeterministicEntropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeterministicEntropy").finish_non_exhaustive()
    }
}

impl Entropy for DeterministicEntropy {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), SecretError> {
        if buffer.len() > DETERMINISTIC_MAX_BYTES {
            return Err(SecretError::EntropyUnavailable {
                reason: format!(
                    "requested {} deterministic bytes, HKDF limit is {DETERMINISTIC_MAX_BYTES}",
                    buffer.len()
                ),
            });
        }

        let salt = Sha256::digest(self.seed.as_slice());
        let hkdf = Hkdf::<Sha512>::new(Some(salt.as_slice()), self.seed.as_slice());
        hkdf.expand(DETERMINISTIC_INFO, buffer)
            .map_err(|e| SecretError::EntropyUnavailable { reason: e.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_entropy_bytes_are_random() {
        let entropy = SystemEntropy::new();

        let mut bytes1 = [0u8; 32];
        let mut bytes2 = [0u8; 32];
        entropy.random_bytes(&mut bytes1).unwrap();
        entropy.random_bytes(&mut bytes2).unwrap();

        // Extremely unlikely to be equal if random
        assert_ne!(bytes1, bytes2);
    }

    #[test]
    fn deterministic_entropy_known_answer() {
        let entropy = DeterministicEntropy::new(b"test-vector-seed");
        let mut bytes = [0u8; 16];
        entropy.random_bytes(&mut bytes).unwrap();

        assert_eq!(hex::encode(bytes), "d17d15dd1d9bfeb68402d541f7c60a23");
    }

    #[test]
    fn deterministic_entropy_repeats_prefix() {
        let entropy = DeterministicEntropy::new(b"seed");

        let mut short = [0u8; 16];
        let mut long = [0u8; 64];
        entropy.random_bytes(&mut short).unwrap();
        entropy.random_bytes(&mut long).unwrap();

        assert_eq!(short, long[..16]);
    }

    #[test]
    fn deterministic_entropy_differs_by_seed() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        DeterministicEntropy::new(b"seed-a").random_bytes(&mut a).unwrap();
        DeterministicEntropy::new(b"seed-b").random_bytes(&mut b).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn deterministic_entropy_rejects_oversized_request() {
        let entropy = DeterministicEntropy::new(b"seed");
        let mut buffer = vec![0u8; DETERMINISTIC_MAX_BYTES + 1];

        let result = entropy.random_bytes(&mut buffer);
        assert!(matches!(result, Err(SecretError::EntropyUnavailable { .. })));
    }

    #[test]
    fn deterministic_entropy_accepts_limit() {
        let entropy = DeterministicEntropy::new(b"seed");
        let mut buffer = vec![0u8; DETERMINISTIC_MAX_BYTES];

        assert!(entropy.random_bytes(&mut buffer).is_ok());
    }
}

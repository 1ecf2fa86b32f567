//! Sample generation

use std::ops::RangeInclusive;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use pond_crypto::{
    DeterministicEntropy, Entropy, Signer, SystemEntropy, sign_keywords,
    v1::{Envelope, derive_key},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{
    error::VectorError,
    sample::{Sample, SampleCollection},
    words,
};

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of samples
    pub rounds: usize,
    /// Keywords per sample
    pub keywords: RangeInclusive<usize>,
    /// `;`-separated slugs per message
    pub slugs: RangeInclusive<usize>,
    /// Makes keywords, messages and nonces reproducible
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Samples per file unless overridden.
    pub const DEFAULT_ROUNDS: usize = 10;

    fn validate(&self) -> Result<(), VectorError> {
        for (name, range) in [("keywords", &self.keywords), ("slugs", &self.slugs)] {
            if range.is_empty() {
                return Err(VectorError::Config {
                    reason: format!("{name} range {range:?} is empty"),
                });
            }
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { rounds: Self::DEFAULT_ROUNDS, keywords: 2..=4, slugs: 1..=9, seed: None }
    }
}

/// Encrypt `config.rounds` random messages and record every intermediate
/// value.
///
/// Each sample's nonces are read back from its own envelope, so the recorded
/// signature and key are the ones that decrypt it.
///
/// With a seed, round `i` draws nonces from a [`DeterministicEntropy`]
/// seeded with `"{seed}/{i}"`; the output is byte-identical across runs for
/// the same signing key.
pub fn generate<S>(signer: &S, config: &GeneratorConfig) -> Result<SampleCollection, VectorError>
where
    S: Signer + ?Sized,
{
    config.validate()?;

    let mut rng = ChaCha20Rng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
    let mut samples = Vec::with_capacity(config.rounds);

    for round in 0..config.rounds {
        let count = rng.gen_range(config.keywords.clone());
        let keywords = words::words(&mut rng, count);
        let message = (0..rng.gen_range(config.slugs.clone()))
            .map(|_| words::slug(&mut rng))
            .collect::<Vec<_>>()
            .join(";");

        let sample = match config.seed {
            Some(seed) => {
                let entropy = DeterministicEntropy::new(format!("{seed}/{round}"));
                seal_sample(signer, keywords, message, &entropy)?
            }
            None => seal_sample(signer, keywords, message, &SystemEntropy::new())?,
        };
        samples.push(sample);
    }

    tracing::info!(rounds = config.rounds, seeded = config.seed.is_some(), "generated samples");
    Ok(SampleCollection { key: STANDARD.encode(signer.public_identity()), samples })
}

fn seal_sample<S, E>(
    signer: &S,
    keywords: Vec<String>,
    message: String,
    entropy: &E,
) -> Result<Sample, VectorError>
where
    S: Signer + ?Sized,
    E: Entropy + ?Sized,
{
    let encrypted = pond_crypto::encrypt(signer, &keywords, &message, entropy)?;
    let envelope = Envelope::decode(&encrypted)?;

    let signature = sign_keywords(signer, &keywords, &envelope.signature_nonce)?;
    let key = derive_key(&signature, &envelope.kdf_nonce)?;

    Ok(Sample {
        encrypted,
        kdf_nonce: envelope.kdf_nonce.to_vec(),
        key: key.as_bytes().to_vec(),
        keywords,
        message,
        signature: signature.to_vec(),
        signature_nonce: envelope.signature_nonce.to_vec(),
    })
}

//! Sample verification

use base64::{Engine as _, engine::general_purpose::STANDARD};
use pond_crypto::{Signer, sign_keywords, v1::derive_key};

use crate::{
    error::VectorError,
    sample::{Sample, SampleCollection},
};

/// Check every sample in `collection` against `signer`.
///
/// For each sample the signature and key are recomputed from the recorded
/// nonces, then the envelope is decrypted. Stops at the first difference.
///
/// Returns the number of samples checked.
pub fn verify<S>(signer: &S, collection: &SampleCollection) -> Result<usize, VectorError>
where
    S: Signer + ?Sized,
{
    if collection.key != STANDARD.encode(signer.public_identity()) {
        return Err(VectorError::KeyMismatch);
    }

    for (index, sample) in collection.samples.iter().enumerate() {
        verify_sample(signer, index, sample)?;
        tracing::debug!(index, "sample ok");
    }

    tracing::info!(samples = collection.samples.len(), "verified samples");
    Ok(collection.samples.len())
}

fn verify_sample<S>(signer: &S, index: usize, sample: &Sample) -> Result<(), VectorError>
where
    S: Signer + ?Sized,
{
    let signature_nonce = fixed::<32>(index, "signature_nonce", &sample.signature_nonce)?;
    let kdf_nonce = fixed::<32>(index, "kdf_nonce", &sample.kdf_nonce)?;

    let signature = sign_keywords(signer, &sample.keywords, &signature_nonce)?;
    if signature.as_slice() != sample.signature.as_slice() {
        return Err(VectorError::Mismatch { index, field: "signature" });
    }

    let key = derive_key(&signature, &kdf_nonce)?;
    if key.as_bytes().as_slice() != sample.key.as_slice() {
        return Err(VectorError::Mismatch { index, field: "key" });
    }

    let message = pond_crypto::decrypt(signer, &sample.encrypted, &sample.keywords)?;
    if message != sample.message {
        return Err(VectorError::Mismatch { index, field: "message" });
    }
    Ok(())
}

fn fixed<const N: usize>(
    index: usize,
    field: &'static str,
    bytes: &[u8],
) -> Result<[u8; N], VectorError> {
    <[u8; N]>::try_from(bytes).map_err(|_| VectorError::FieldLength {
        index,
        field,
        expected: N,
        actual: bytes.len(),
    })
}

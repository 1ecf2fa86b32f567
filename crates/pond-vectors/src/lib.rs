//! Pond Secret Sample Files
//!
//! Generates and checks JSON sample files for the v1 envelope format. A
//! sample records the plaintext, keywords, nonces, signature, derived key and
//! envelope, so another implementation can check each stage independently
//! against the same signing key.
//!
//! Sample files contain derived keys and plaintexts. Use them with test keys
//! only.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod generator;
pub mod sample;
pub mod verifier;
pub mod words;

pub use error::VectorError;
pub use generator::{GeneratorConfig, generate};
pub use sample::{Sample, SampleCollection};
pub use verifier::verify;

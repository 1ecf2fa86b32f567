//! Sample file format
//!
//! ```json
//! {
//!   "key": "<base64 public identity>",
//!   "samples": [
//!     { "encrypted": "...", "kdf_nonce": "...", "key": "...", "keywords": ["..."],
//!       "message": "...", "signature": "...", "signature_nonce": "..." }
//!   ]
//! }
//! ```
//!
//! Binary fields are standard base64 with padding. Fields are declared in
//! sorted order so output is stable.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::error::VectorError;

/// A key identity and the samples produced with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCollection {
    /// Base64 public identity of the signer
    pub key: String,
    /// One entry per generated envelope
    pub samples: Vec<Sample>,
}

/// One envelope with every intermediate value needed to check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Encoded envelope
    #[serde(with = "base64_field")]
    pub encrypted: Vec<u8>,
    /// HKDF salt taken from the envelope
    #[serde(with = "base64_field")]
    pub kdf_nonce: Vec<u8>,
    /// Derived symmetric key
    #[serde(with = "base64_field")]
    pub key: Vec<u8>,
    /// Keywords in signing order
    pub keywords: Vec<String>,
    /// Plaintext
    pub message: String,
    /// Signature over the canonical message
    #[serde(with = "base64_field")]
    pub signature: Vec<u8>,
    /// Signature nonce taken from the envelope
    #[serde(with = "base64_field")]
    pub signature_nonce: Vec<u8>,
}

impl SampleCollection {
    /// Read a sample file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, VectorError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|source| VectorError::Io { path: path.to_path_buf(), source })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Write a sample file, replacing any existing one.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), VectorError> {
        let path = path.as_ref();
        let io = |source| VectorError::Io { path: path.to_path_buf(), source };

        let mut writer = BufWriter::new(File::create(path).map_err(io)?);
        self.write_to(&mut writer)?;
        writer.flush().map_err(io)
    }

    /// Pretty-print as JSON followed by a newline.
    pub fn write_to(&self, mut writer: impl Write) -> Result<(), VectorError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n").map_err(serde_json::Error::io)?;
        Ok(())
    }
}

mod base64_field {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD.decode(text).map_err(D::Error::custom)
    }
}

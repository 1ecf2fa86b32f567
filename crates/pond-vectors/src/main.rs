//! Pond secret sample file tool.
//!
//! # Usage
//!
//! ```bash
//! # Write 10 samples to stdout
//! pond-vectors generate --key tests/keys/storage.pem
//!
//! # Reproducible file
//! pond-vectors generate --key storage.pem --rounds 25 --seed 1 --output sample_v1.json
//!
//! # Check a file produced by any implementation
//! pond-vectors verify --key storage.pem --samples sample_v1.json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pond_crypto::load_signing_key;
use pond_vectors::{GeneratorConfig, SampleCollection, generate, verify};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Pond secret sample files
#[derive(Parser, Debug)]
#[command(name = "pond-vectors")]
#[command(about = "Generate and verify pond/secret v1 sample files")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt random messages and record every intermediate value
    Generate {
        /// Ed25519 private key (PKCS#8 PEM)
        #[arg(short, long)]
        key: PathBuf,

        /// Number of samples
        #[arg(short, long, default_value_t = GeneratorConfig::DEFAULT_ROUNDS)]
        rounds: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recompute and decrypt every sample in a file
    Verify {
        /// Ed25519 private key (PKCS#8 PEM)
        #[arg(short, long)]
        key: PathBuf,

        /// Sample file to check
        #[arg(short, long)]
        samples: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // stdout carries sample JSON
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    match args.command {
        Command::Generate { key, rounds, seed, output } => {
            let signer = load_signing_key(&key)?;
            let config = GeneratorConfig { rounds, seed, ..GeneratorConfig::default() };
            let collection = generate(&signer, &config)?;

            match output {
                Some(path) => {
                    collection.write(&path)?;
                    tracing::info!(path = %path.display(), "wrote sample file");
                }
                None => collection.write_to(std::io::stdout().lock())?,
            }
        }
        Command::Verify { key, samples } => {
            let signer = load_signing_key(&key)?;
            let collection = SampleCollection::read(&samples)?;
            let count = verify(&signer, &collection)?;

            tracing::info!(count, path = %samples.display(), "all samples match");
        }
    }

    Ok(())
}

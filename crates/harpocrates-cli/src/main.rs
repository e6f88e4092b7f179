//! Command-line interface for the Harpocrates cipher.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use harpocrates_core::Lut;
use harpocrates_gen::{derive_inverse_lut, generate_lut, generate_lut_with};
use harpocrates_runtime::{decrypt_in_place, encrypt_in_place, Harpocrates};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Harpocrates CLI.
#[derive(Parser)]
#[command(
    name = "harpocrates",
    version,
    author,
    about = "Harpocrates data-at-rest encryption"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random look-up table and write it hex-encoded.
    Keygen {
        /// Output path for the key file.
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
        /// Optional RNG seed for reproducible key material (testing only).
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a file whose length is a multiple of 16 bytes.
    Enc {
        /// Path to the hex-encoded key file.
        #[arg(long, value_name = "FILE")]
        lut: PathBuf,
        /// Input plaintext file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file using the same key file (the inverse table is derived).
    Dec {
        /// Path to the hex-encoded key file.
        #[arg(long, value_name = "FILE")]
        lut: PathBuf,
        /// Input ciphertext file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Generate a throwaway key, encrypt a sample buffer, decrypt it back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Keygen { out, seed } => cmd_keygen(&out, seed),
        Commands::Enc { lut, input, output } => cmd_enc(&lut, &input, &output),
        Commands::Dec { lut, input, output } => cmd_dec(&lut, &input, &output),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_keygen(out: &PathBuf, seed: Option<u64>) -> Result<()> {
    let mut lut = [0u8; 256];
    match seed {
        Some(value) => generate_lut_with(&mut seeded_rng(value), &mut lut),
        None => generate_lut(&mut lut).context("generate look-up table")?,
    }
    fs::write(out, hex::encode(lut)).with_context(|| format!("write {}", out.display()))?;
    Ok(())
}

fn cmd_enc(lut_path: &PathBuf, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let lut = load_lut(lut_path)?;
    let mut data =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    if data.len() % 16 != 0 {
        bail!("input length must be a multiple of 16 bytes");
    }
    encrypt_in_place(&lut, &mut data).context("encrypt")?;
    fs::write(output_path, data).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_dec(lut_path: &PathBuf, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let lut = load_lut(lut_path)?;
    let inv_lut = derive_inverse_lut(&lut).context("derive inverse table")?;
    let mut data =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    if data.len() % 16 != 0 {
        bail!("input length must be a multiple of 16 bytes");
    }
    decrypt_in_place(&inv_lut, &mut data).context("decrypt")?;
    fs::write(output_path, data).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let cipher = match seed {
        Some(value) => Harpocrates::from_rng(&mut seeded_rng(value)),
        None => Harpocrates::generate().context("generate key")?,
    };

    let mut plain = [0u8; 64];
    match seed {
        Some(value) => seeded_rng(value.wrapping_add(1)).fill_bytes(&mut plain),
        None => rand::thread_rng().fill_bytes(&mut plain),
    }

    let mut enc = [0u8; 64];
    let mut dec = [0u8; 64];
    cipher.encrypt(&plain, &mut enc).context("encrypt")?;
    cipher.decrypt(&enc, &mut dec).context("decrypt")?;

    println!("plaintext:  {}", hex::encode(plain));
    println!("ciphertext: {}", hex::encode(enc));
    println!("decrypted:  {}", hex::encode(dec));
    if dec != plain {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn load_lut(path: &PathBuf) -> Result<Lut> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let bytes = hex::decode(text.trim()).context("decode key hex")?;
    if bytes.len() != 256 {
        bail!("key file must decode to 256 bytes");
    }
    let mut lut = [0u8; 256];
    lut.copy_from_slice(&bytes);
    Ok(lut)
}

fn seeded_rng(seed: u64) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    seed_bytes[..8].copy_from_slice(&seed.to_le_bytes());
    ChaCha20Rng::from_seed(seed_bytes)
}

//! Command line interface
//!
//! Each subcommand reads one key, converts it, and writes the result to the
//! given output. Nothing is written on failure.

pub mod input;

use crate::config::Config;
use crate::crypto::{expand_seed, KeyCodec, KeyScheme, Keypair, SEED_LENGTH};
use crate::errors::{KeyConvError, Result};
use crate::keystore::{parse_byte_literal, parse_hex, read_wallet_file, write_wallet_file};
use crate::security::SecretKeyBytes;
use clap::{Parser, Subcommand};
use input::InputSource;
use secrecy::ExposeSecret;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use zeroize::Zeroize;

#[derive(Parser, Debug)]
#[command(name = "keyconv", version, about = "Convert Solana wallet keys between base58 and byte arrays")]
pub struct Cli {
    /// Config file (default: ./keyconv.toml, /etc/keyconv/config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Key layout: keypair (64 bytes) or seed (32 bytes)
    #[arg(long, global = true)]
    pub scheme: Option<KeyScheme>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a base58 private key into a byte array
    Decode {
        /// Base58 key (prompted for when omitted)
        key: Option<String>,

        /// Read the key from this environment variable
        #[arg(long, conflicts_with = "key")]
        env: Option<String>,

        /// Write the bytes to a new wallet file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Encode a byte array as a base58 private key
    Encode {
        /// Byte array such as [81,137,...] (prompted for when omitted)
        bytes: Option<String>,

        /// Read the bytes from this environment variable
        #[arg(long, conflicts_with = "bytes")]
        env: Option<String>,

        /// Read the bytes from a wallet file
        #[arg(long, conflicts_with_all = ["bytes", "env"])]
        file: Option<PathBuf>,

        /// Input is hex instead of a byte array
        #[arg(long)]
        hex: bool,
    },

    /// Show the wallet address of a key and verify keypair consistency
    Inspect {
        /// Base58 key (prompted for when omitted)
        key: Option<String>,

        /// Read the key from this environment variable
        #[arg(long, conflicts_with = "key")]
        env: Option<String>,

        /// Read the key from a wallet file
        #[arg(long, conflicts_with_all = ["key", "env"])]
        file: Option<PathBuf>,
    },

    /// Expand a 32-byte seed into a base58 64-byte keypair
    Expand {
        /// Seed as a byte array, or hex with --hex (prompted for when omitted)
        seed: Option<String>,

        /// Read the seed from this environment variable
        #[arg(long, conflicts_with = "seed")]
        env: Option<String>,

        /// Input is hex instead of a byte array
        #[arg(long)]
        hex: bool,
    },
}

/// Run `command` with settings from `config`, writing results to `out`
pub fn run(command: Command, config: &Config, out: &mut dyn Write) -> Result<()> {
    let codec = KeyCodec::new(config.codec.scheme);

    match command {
        Command::Decode { key, env, out: path } => {
            let text = InputSource::resolve(key, env).read("Enter base58 private key: ")?;
            let secret = codec.decode(text.expose_secret())?;
            info!("Decoded {}-byte {} key", secret.len(), codec.scheme());

            match path {
                Some(path) => {
                    write_wallet_file(&path, &secret)?;
                    writeln!(out, "Wrote {}-byte key to {}", secret.len(), path.display())?;
                }
                None => {
                    let mut json = secret_json(&secret)?;
                    let written = write_secret(out, &json);
                    json.zeroize();
                    written?;
                }
            }
        }

        Command::Encode {
            bytes,
            env,
            file,
            hex,
        } => {
            let secret = match file {
                Some(path) => read_wallet_file(&path, &codec)?,
                None => {
                    let text = InputSource::resolve(bytes, env).read("Enter key bytes: ")?;
                    codec.validate(parse_bytes(text.expose_secret(), hex)?)?
                }
            };

            let encoded = codec.encode(secret.expose())?;
            info!("Encoded {}-byte {} key", secret.len(), codec.scheme());
            write_secret(out, &encoded)?;
        }

        Command::Inspect { key, env, file } => {
            let secret = match file {
                Some(path) => read_wallet_file(&path, &codec)?,
                None => {
                    let text =
                        InputSource::resolve(key, env).read("Enter base58 private key: ")?;
                    codec.decode(text.expose_secret())?
                }
            };

            let keypair = Keypair::from_secret(&secret, codec.scheme())?;
            writeln!(out, "address: {}", keypair.public_key_base58())?;
            writeln!(out, "scheme:  {}", codec.scheme())?;
            writeln!(out, "length:  {} bytes", secret.len())?;
            if codec.scheme() == KeyScheme::Keypair {
                writeln!(out, "keypair: public key matches seed")?;
            }
        }

        Command::Expand { seed, env, hex } => {
            let text = InputSource::resolve(seed, env).read("Enter seed: ")?;
            let seed = SecretKeyBytes::new(parse_bytes(text.expose_secret(), hex)?);
            if seed.len() != SEED_LENGTH {
                return Err(KeyConvError::InvalidInput(format!(
                    "got {} bytes, expected {} for a seed",
                    seed.len(),
                    SEED_LENGTH
                )));
            }

            let keypair = expand_seed(seed.expose())?;
            let encoded = KeyCodec::new(KeyScheme::Keypair).encode(keypair.expose())?;
            info!(
                "Expanded seed for {}",
                Keypair::from_seed(seed.expose())?.public_key_base58()
            );
            write_secret(out, &encoded)?;
        }
    }

    Ok(())
}

fn parse_bytes(text: &str, hex: bool) -> Result<Vec<u8>> {
    if hex {
        parse_hex(text)
    } else {
        parse_byte_literal(text)
    }
}

fn secret_json(secret: &SecretKeyBytes) -> Result<String> {
    Ok(serde_json::to_string(secret.expose())?)
}

/// Write one line of secret text, wiping the buffer afterwards
fn write_secret(out: &mut dyn Write, text: &str) -> Result<()> {
    let mut line = format!("{}\n", text);
    let written = out.write_all(line.as_bytes());
    line.zeroize();
    written?;
    out.flush()?;
    Ok(())
}

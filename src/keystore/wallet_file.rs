//! JSON wallet files
//!
//! Two layouts are read:
//! - a bare byte array, as written by `solana-keygen` (`[81,137,...]`)
//! - an object with a `"Private Key"` field holding either a base58 string
//!   or a byte array, as exported by some wallet tooling
//!
//! Only the bare byte-array layout is written.

use crate::crypto::KeyCodec;
use crate::errors::{KeyConvError, Result};
use crate::security::SecretKeyBytes;
use serde::Deserialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};
use zeroize::Zeroize;

/// On-disk wallet file layout
#[derive(Deserialize)]
#[serde(untagged)]
pub enum WalletFile {
    Bytes(Vec<u8>),
    Named {
        #[serde(rename = "Private Key")]
        private_key: PrivateKeyField,
    },
}

/// Value of a `"Private Key"` field
#[derive(Deserialize)]
#[serde(untagged)]
pub enum PrivateKeyField {
    Base58(String),
    Bytes(Vec<u8>),
}

impl WalletFile {
    /// Parse wallet JSON text
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|_| {
            KeyConvError::WalletFile(
                "expected a byte array or an object with a \"Private Key\" field".to_string(),
            )
        })
    }

    /// Extract the secret key, validated against `codec`'s scheme
    pub fn into_secret(self, codec: &KeyCodec) -> Result<SecretKeyBytes> {
        match self {
            WalletFile::Bytes(bytes)
            | WalletFile::Named {
                private_key: PrivateKeyField::Bytes(bytes),
            } => codec.validate(bytes),
            WalletFile::Named {
                private_key: PrivateKeyField::Base58(mut text),
            } => {
                let decoded = codec.decode(text.trim());
                text.zeroize();
                decoded
            }
        }
    }
}

/// Load the secret key from a wallet file
pub fn read_wallet_file(path: &Path, codec: &KeyCodec) -> Result<SecretKeyBytes> {
    debug!("Reading wallet file {:?}", path);

    let mut json = fs::read_to_string(path)
        .map_err(|e| KeyConvError::WalletFile(format!("{}: {}", path.display(), e)))?;
    let parsed = WalletFile::parse(&json);
    json.zeroize();

    parsed?.into_secret(codec)
}

/// Write `secret` as a bare byte-array wallet file
///
/// Refuses to overwrite an existing file. On unix the file is created with
/// mode 0600.
pub fn write_wallet_file(path: &Path, secret: &SecretKeyBytes) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .map_err(|e| KeyConvError::WalletFile(format!("{}: {}", path.display(), e)))?;

    let mut json = serde_json::to_string(secret.expose())?;
    let written = file.write_all(json.as_bytes()).and_then(|_| file.sync_all());
    json.zeroize();

    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(KeyConvError::WalletFile(format!(
            "{}: {}",
            path.display(),
            e
        )));
    }

    info!("Wrote {}-byte wallet file {:?}", secret.len(), path);
    Ok(())
}

//! Base58 key codec
//!
//! Converts wallet secret keys between base58 text (the form wallets such
//! as Phantom export) and raw byte arrays (the form Solana CLI keypair
//! files hold). Every conversion is checked against a [`KeyScheme`] so a
//! truncated or over-long key is rejected instead of passed along.

use crate::errors::{KeyConvError, Result};
use crate::security::SecretKeyBytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ed25519 seed length
pub const SEED_LENGTH: usize = 32;

/// Solana keypair length: seed followed by public key
pub const KEYPAIR_LENGTH: usize = 64;

/// Layout of the secret key bytes being converted
///
/// Parsed the same way from the command line, config files and the
/// environment: `keypair`/`64` or `seed`/`32`, in any letter case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyScheme {
    /// 64 bytes: 32-byte seed || 32-byte public key
    #[default]
    Keypair,
    /// 32-byte Ed25519 seed only
    Seed,
}

impl KeyScheme {
    pub fn key_length(&self) -> usize {
        match self {
            KeyScheme::Keypair => KEYPAIR_LENGTH,
            KeyScheme::Seed => SEED_LENGTH,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyScheme::Keypair => "keypair",
            KeyScheme::Seed => "seed",
        }
    }
}

impl FromStr for KeyScheme {
    type Err = KeyConvError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "keypair" | "64" => Ok(KeyScheme::Keypair),
            "seed" | "32" => Ok(KeyScheme::Seed),
            _ => Err(KeyConvError::ConfigError(format!(
                "Unknown key scheme '{}' (expected keypair or seed)",
                s
            ))),
        }
    }
}

impl TryFrom<String> for KeyScheme {
    type Error = KeyConvError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<KeyScheme> for String {
    fn from(scheme: KeyScheme) -> Self {
        scheme.as_str().to_string()
    }
}

impl fmt::Display for KeyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stateless base58 <-> bytes converter for one key scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyCodec {
    scheme: KeyScheme,
}

impl KeyCodec {
    pub fn new(scheme: KeyScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> KeyScheme {
        self.scheme
    }

    /// Decode base58 key text into secret key bytes
    ///
    /// Fails with [`KeyConvError::InvalidEncoding`] when the text is empty,
    /// holds a character outside the base58 alphabet (whitespace included),
    /// or encodes a key of the wrong length for this scheme.
    pub fn decode(&self, input: &str) -> Result<SecretKeyBytes> {
        if input.is_empty() {
            return Err(KeyConvError::InvalidEncoding(
                "input is empty".to_string(),
            ));
        }

        let bytes = SecretKeyBytes::new(
            bs58::decode(input)
                .with_alphabet(bs58::Alphabet::BITCOIN)
                .into_vec()
                .map_err(|e| KeyConvError::InvalidEncoding(e.to_string()))?,
        );

        let expected = self.scheme.key_length();
        if bytes.len() != expected {
            return Err(KeyConvError::InvalidEncoding(format!(
                "decoded {} bytes, expected {} for a {} key",
                bytes.len(),
                expected,
                self.scheme
            )));
        }

        Ok(bytes)
    }

    /// Encode secret key bytes as canonical base58 text
    ///
    /// Fails with [`KeyConvError::InvalidInput`] when the bytes are empty
    /// or not the length this scheme requires.
    pub fn encode(&self, input: &[u8]) -> Result<String> {
        if input.is_empty() {
            return Err(KeyConvError::InvalidInput(
                "byte sequence is empty".to_string(),
            ));
        }

        let expected = self.scheme.key_length();
        if input.len() != expected {
            return Err(KeyConvError::InvalidInput(format!(
                "got {} bytes, expected {} for a {} key",
                input.len(),
                expected,
                self.scheme
            )));
        }

        Ok(bs58::encode(input)
            .with_alphabet(bs58::Alphabet::BITCOIN)
            .into_string())
    }

    /// Check that `bytes` has this scheme's length, wrapping it if so
    pub fn validate(&self, bytes: Vec<u8>) -> Result<SecretKeyBytes> {
        let bytes = SecretKeyBytes::new(bytes);
        if bytes.is_empty() || bytes.len() != self.scheme.key_length() {
            return Err(KeyConvError::InvalidInput(format!(
                "got {} bytes, expected {} for a {} key",
                bytes.len(),
                self.scheme.key_length(),
                self.scheme
            )));
        }
        Ok(bytes)
    }
}

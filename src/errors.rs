//! Error types for keyconv

use thiserror::Error;

/// Main error type for keyconv operations
#[derive(Error, Debug)]
pub enum KeyConvError {
    // Codec errors
    #[error("Invalid base58 encoding: {0}")]
    InvalidEncoding(String),

    #[error("Invalid key bytes: {0}")]
    InvalidInput(String),

    // Key errors
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Keypair mismatch: public key half does not match seed (expected {expected}, found {found})")]
    KeypairMismatch { expected: String, found: String },

    // Storage errors
    #[error("Wallet file error: {0}")]
    WalletFile(String),

    #[error("I/O error: {0}")]
    Io(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl KeyConvError {
    /// True for the two errors the codec itself reports
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self,
            KeyConvError::InvalidEncoding(_) | KeyConvError::InvalidInput(_)
        )
    }

    /// Process exit status for this error
    ///
    /// 2 when the key itself was malformed, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        if self.is_codec_error() {
            2
        } else {
            1
        }
    }
}

impl From<std::io::Error> for KeyConvError {
    fn from(err: std::io::Error) -> Self {
        KeyConvError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KeyConvError {
    fn from(err: serde_json::Error) -> Self {
        KeyConvError::WalletFile(format!("JSON error: {}", err))
    }
}

impl From<hex::FromHexError> for KeyConvError {
    fn from(err: hex::FromHexError) -> Self {
        KeyConvError::InvalidKeyFormat(format!("Hex decode error: {}", err))
    }
}

impl From<config::ConfigError> for KeyConvError {
    fn from(err: config::ConfigError) -> Self {
        KeyConvError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KeyConvError>;

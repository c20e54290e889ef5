//! keyconv - Solana wallet key format conversion
//!
//! Converts private keys between the base58 text that browser wallets
//! export and the byte arrays that Solana CLI keypair files hold.
//!
//! ```
//! use keyconv::crypto::{KeyCodec, KeyScheme};
//!
//! let codec = KeyCodec::new(KeyScheme::Seed);
//! let encoded = codec.encode(&[7u8; 32]).unwrap();
//! assert_eq!(codec.decode(&encoded).unwrap().expose(), &[7u8; 32]);
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod keystore;
pub mod security;

pub use crypto::{KeyCodec, KeyScheme};
pub use errors::{KeyConvError, Result};
pub use security::SecretKeyBytes;

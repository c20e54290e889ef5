//! Wallet key input and storage
//!
//! This module provides:
//! - Reading and writing JSON wallet files
//! - Parsing byte-array and hex key literals

pub mod literal;
pub mod wallet_file;

pub use literal::{parse_byte_literal, parse_hex};
pub use wallet_file::{read_wallet_file, write_wallet_file, WalletFile};

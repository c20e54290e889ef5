//! Key encoding and Solana keypair utilities

pub mod codec;
pub mod sol;

pub use codec::{KeyCodec, KeyScheme, KEYPAIR_LENGTH, SEED_LENGTH};
pub use sol::{expand_seed, Keypair};

//! Solana keypair utilities
//!
//! Provides:
//! - Public key (wallet address) derivation from secret bytes
//! - Consistency check of 64-byte keypairs
//! - Seed to keypair expansion

use crate::crypto::codec::{KeyScheme, KEYPAIR_LENGTH, SEED_LENGTH};
use crate::errors::{KeyConvError, Result};
use crate::security::SecretKeyBytes;
use ed25519_dalek::SigningKey;

/// Solana key pair (Ed25519)
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Create from raw private key bytes (32 bytes seed)
    pub fn from_seed(bytes: &[u8]) -> Result<Self> {
        let seed: [u8; SEED_LENGTH] = bytes.try_into().map_err(|_| {
            KeyConvError::InvalidKeyFormat(format!(
                "Expected {} bytes seed, got {}",
                SEED_LENGTH,
                bytes.len()
            ))
        })?;

        Ok(Self {
            signing_key: SigningKey::from_bytes(&seed),
        })
    }

    /// Create from full 64-byte keypair (as used by Solana CLI)
    ///
    /// The trailing 32 bytes must be the public key of the leading seed.
    pub fn from_keypair_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEYPAIR_LENGTH {
            return Err(KeyConvError::InvalidKeyFormat(format!(
                "Expected {} bytes keypair, got {}",
                KEYPAIR_LENGTH,
                bytes.len()
            )));
        }

        let keypair = Self::from_seed(&bytes[..SEED_LENGTH])?;
        let derived = keypair.public_key();
        if derived[..] != bytes[SEED_LENGTH..] {
            return Err(KeyConvError::KeypairMismatch {
                expected: keypair.public_key_base58(),
                found: bs58::encode(&bytes[SEED_LENGTH..]).into_string(),
            });
        }

        Ok(keypair)
    }

    /// Create from secret bytes laid out per `scheme`
    pub fn from_secret(secret: &SecretKeyBytes, scheme: KeyScheme) -> Result<Self> {
        match scheme {
            KeyScheme::Keypair => Self::from_keypair_bytes(secret.expose()),
            KeyScheme::Seed => Self::from_seed(secret.expose()),
        }
    }

    /// Get the public key (32 bytes)
    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Get the public key as base58 string (Solana address format)
    pub fn public_key_base58(&self) -> String {
        bs58::encode(self.public_key()).into_string()
    }

    /// Export the full keypair bytes (64 bytes: seed || pubkey)
    pub fn keypair_bytes(&self) -> SecretKeyBytes {
        SecretKeyBytes::new(self.signing_key.to_keypair_bytes().to_vec())
    }
}

/// Expand a 32-byte seed into the 64-byte Solana keypair layout
pub fn expand_seed(seed: &[u8]) -> Result<SecretKeyBytes> {
    Ok(Keypair::from_seed(seed)?.keypair_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032 section 7.1, test 1
    const SEED_HEX: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const PUBKEY_HEX: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const PUBKEY_BASE58: &str = "FVen3X669xLzsi6N2V91DoiyzHzg1uAgqiT8jZ9nS96Z";

    fn keypair_vector() -> Vec<u8> {
        let mut bytes = hex::decode(SEED_HEX).unwrap();
        bytes.extend(hex::decode(PUBKEY_HEX).unwrap());
        bytes
    }

    #[test]
    fn test_public_key_from_seed() {
        let seed = hex::decode(SEED_HEX).unwrap();
        let keypair = Keypair::from_seed(&seed).unwrap();

        assert_eq!(hex::encode(keypair.public_key()), PUBKEY_HEX);
        assert_eq!(keypair.public_key_base58(), PUBKEY_BASE58);
    }

    #[test]
    fn test_keypair_bytes_verify() {
        let keypair = Keypair::from_keypair_bytes(&keypair_vector()).unwrap();
        assert_eq!(keypair.public_key_base58(), PUBKEY_BASE58);
    }

    #[test]
    fn test_tampered_public_half_is_rejected() {
        let mut bytes = keypair_vector();
        bytes[63] ^= 0x01;

        let err = Keypair::from_keypair_bytes(&bytes).err().unwrap();
        match err {
            KeyConvError::KeypairMismatch { expected, .. } => {
                assert_eq!(expected, PUBKEY_BASE58);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_expand_seed() {
        let seed = hex::decode(SEED_HEX).unwrap();
        let expanded = expand_seed(&seed).unwrap();

        assert_eq!(expanded.len(), 64);
        assert_eq!(expanded.expose(), keypair_vector().as_slice());
    }

    #[test]
    fn test_from_secret_respects_scheme() {
        let secret = SecretKeyBytes::new(keypair_vector());
        assert!(Keypair::from_secret(&secret, KeyScheme::Keypair).is_ok());
        assert!(matches!(
            Keypair::from_secret(&secret, KeyScheme::Seed),
            Err(KeyConvError::InvalidKeyFormat(_))
        ));
    }

    #[test]
    fn test_wrong_lengths() {
        assert!(Keypair::from_seed(&[1u8; 31]).is_err());
        assert!(Keypair::from_keypair_bytes(&[1u8; 63]).is_err());
    }
}

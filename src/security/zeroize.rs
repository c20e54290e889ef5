//! Secure memory zeroization utilities
//!
//! Secret key bytes and base58 key text are wiped when dropped. Uses the
//! `zeroize` crate so the compiler cannot elide the wipe.

use std::fmt;

pub use secrecy::SecretString;
use zeroize::ZeroizeOnDrop;

/// Raw secret key bytes, zeroed on drop
///
/// `Debug` prints only the length.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct SecretKeyBytes {
    inner: Vec<u8>,
}

impl SecretKeyBytes {
    pub fn new(data: Vec<u8>) -> Self {
        Self { inner: data }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn expose(&self) -> &[u8] {
        &self.inner
    }
}

impl fmt::Debug for SecretKeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKeyBytes([REDACTED; {}])", self.inner.len())
    }
}

impl From<Vec<u8>> for SecretKeyBytes {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

/// Wrap key text (e.g. a base58 private key read from a prompt)
pub fn secret_string(s: String) -> SecretString {
    SecretString::new(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_key_bytes_from_vec() {
        let secret = SecretKeyBytes::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(secret.expose(), &[1, 2, 3, 4, 5]);
        assert_eq!(secret.len(), 5);
        assert!(!secret.is_empty());
    }

    #[test]
    fn test_debug_is_redacted() {
        let secret = SecretKeyBytes::new(vec![81u8, 137, 204]);
        let printed = format!("{:?}", secret);
        assert_eq!(printed, "SecretKeyBytes([REDACTED; 3])");
        assert!(!printed.contains("137"));
    }

    #[test]
    fn test_secret_string() {
        let secret = secret_string("4YFq9y5f5hi77Bq8".to_string());
        assert_eq!(secret.expose_secret(), "4YFq9y5f5hi77Bq8");
    }
}

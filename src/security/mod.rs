//! Security utilities for handling secret key material
//!
//! This module provides:
//! - Zeroize-on-drop containers for decoded key bytes and key text
//! - Process hardening (core dumps disabled) for the CLI

pub mod process;
pub mod zeroize;

pub use self::process::harden_process;
pub use self::zeroize::{secret_string, SecretKeyBytes, SecretString};

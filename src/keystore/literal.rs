//! Key literal parsing
//!
//! Byte arrays are accepted in the JSON form printed by wallet tooling,
//! e.g. `[81, 137, 204, 28]`. Hex accepts an optional `0x` prefix.

use crate::errors::{KeyConvError, Result};

/// Parse a JSON byte-array literal
pub fn parse_byte_literal(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    if !trimmed.starts_with('[') {
        return Err(KeyConvError::InvalidKeyFormat(
            "byte array must be written as [n, n, ...]".to_string(),
        ));
    }

    serde_json::from_str::<Vec<u8>>(trimmed).map_err(|e| {
        KeyConvError::InvalidKeyFormat(format!("Invalid byte array: {}", e))
    })
}

/// Parse hex key text
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    Ok(hex::decode(digits)?)
}

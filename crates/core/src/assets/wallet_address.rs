use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

const ADDRESS_HEX_LEN: usize = 40;

/// A syntactically valid EVM account address (`0x` + 40 hex digits).
///
/// Only the shape is checked; whether the account exists on chain is the
/// balance source's concern. The original casing is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| ValidationError::InvalidWalletAddress(trimmed.to_string()))?;

        if hex.len() != ADDRESS_HEX_LEN || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidWalletAddress(trimmed.to_string()));
        }

        Ok(Self(format!("0x{}", hex)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for log lines, e.g. `0x1234…abcd`.
    pub fn short(&self) -> String {
        format!("{}…{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.0
    }
}

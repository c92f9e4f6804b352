//! Validated Ethereum-style addresses and the leaf encoding built on them

use crate::core::error::{MintkitError, Result};
use crate::core::hash::keccak256;
use crate::core::types::Leaf;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of hex digits after the `0x` prefix
const ADDRESS_HEX_LEN: usize = 40;

/// A 20-byte address.
///
/// Input is accepted in any letter case; EIP-55 checksum casing is not
/// checked. The canonical form is lowercase hex with a `0x` prefix.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Parse an address string such as `0xAbC...` (surrounding whitespace is ignored)
    pub fn parse(input: &str) -> Result<Self> {
        let lowered = input.trim().to_ascii_lowercase();
        let digits = lowered
            .strip_prefix("0x")
            .ok_or_else(|| MintkitError::malformed_address(input, "missing 0x prefix"))?;

        if digits.len() != ADDRESS_HEX_LEN {
            return Err(MintkitError::malformed_address(
                input,
                format!(
                    "expected {} hex digits, got {}",
                    ADDRESS_HEX_LEN,
                    digits.len()
                ),
            ));
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| MintkitError::malformed_address(input, e.to_string()))?;
        Ok(Address(bytes))
    }

    /// Raw 20 bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase `0x`-prefixed form; the only form that is ever hashed
    pub fn canonical(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// The leaf for this address: keccak-256 over the UTF-8 bytes of the
    /// canonical string (42 bytes), not over the decoded 20 raw bytes.
    /// Deployed roots depend on this exact encoding.
    pub fn leaf(&self) -> Leaf {
        keccak256(self.canonical().as_bytes())
    }
}

/// Parse `address` and return its leaf
pub fn encode_leaf(address: &str) -> Result<Leaf> {
    Ok(Address::parse(address)?.leaf())
}

impl FromStr for Address {
    type Err = MintkitError;

    fn from_str(s: &str) -> Result<Self> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.canonical())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.canonical())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Address::parse(&text).map_err(serde::de::Error::custom)
    }
}

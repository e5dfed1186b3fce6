//! Address types for PIVY.
//!
//! - [`AptosAddress`]: a 32-byte Aptos account address, produced by the
//!   secp256k1 single-key authentication-key derivation.

use serde::{Deserialize, Serialize};

use crate::constants::APTOS_ADDRESS_SIZE;
use crate::error::{PivyError, Result};

/// A 32-byte Aptos account address.
///
/// Produced by `address_of` in the crypto crate from a compressed secp256k1
/// public key; represented as `0x`-prefixed lowercase hex at the API
/// boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AptosAddress {
    bytes: [u8; APTOS_ADDRESS_SIZE],
}

impl AptosAddress {
    /// Creates an address from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != APTOS_ADDRESS_SIZE {
            return Err(PivyError::BadKeyFormat(format!(
                "address must be {APTOS_ADDRESS_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; APTOS_ADDRESS_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Creates an address from a fixed-size array.
    pub fn from_array(bytes: [u8; APTOS_ADDRESS_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; APTOS_ADDRESS_SIZE] {
        &self.bytes
    }

    /// Parses from hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    /// Returns the zero address.
    pub fn zero() -> Self {
        Self {
            bytes: [0u8; APTOS_ADDRESS_SIZE],
        }
    }

    /// Returns true if this is the zero address.
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }
}

impl std::fmt::Debug for AptosAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AptosAddress({self})")
    }
}

impl std::fmt::Display for AptosAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.bytes))
    }
}

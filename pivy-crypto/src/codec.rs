//! Key material codec.
//!
//! Accepts key material in any of the shapes a host boundary hands us (hex,
//! base58, raw bytes, or a JSON `{type:"Buffer",data:[...]}` blob) and
//! produces canonical fixed-size byte arrays, or rejects.
//!
//! [`KeyBytes`] is the typed entry point for a boundary that already knows
//! its own encoding. [`normalize_32`] / [`normalize_point`] are the
//! permissive dispatchers for boundaries that don't, use them sparingly.

use pivy_core::constants::{COMPRESSED_POINT_SIZE, LABEL_FIELD_SIZE, SCALAR_SIZE};
use pivy_core::error::{PivyError, Result};
use serde_json::Value;

// ═══════════════════════════════════════════════════════════════════════════════
// TYPED ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════════

/// Key material from a boundary that already knows its own encoding.
pub struct KeyBytes(Vec<u8>);

impl KeyBytes {
    /// Decodes a hex string (upper- or lowercase).
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self(hex::decode(s)?))
    }

    /// Decodes a base58 string.
    pub fn from_base58(s: &str) -> Result<Self> {
        Ok(Self(bs58::decode(s).into_vec()?))
    }

    /// Wraps raw bytes directly.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Consumes self, returning the owned bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Borrows the bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PERMISSIVE DISPATCH (untyped boundaries only)
// ═══════════════════════════════════════════════════════════════════════════════

/// Key material of unknown shape, as received at an untyped API boundary.
pub enum RawKeyMaterial<'a> {
    /// Already-decoded bytes.
    Bytes(&'a [u8]),
    /// A string that might be 64-char hex or base58.
    Text(&'a str),
}

fn is_hex_str(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalizes key material to a canonical 32-byte scalar, or rejects.
///
/// Accepts 32 raw bytes, a 64-character hex string, or a base58 string that
/// decodes to exactly 32 bytes. A base58 string decoding to 33 bytes (the
/// compressed-point case) is rejected here, not silently truncated; use
/// [`normalize_point`] for that shape.
pub fn normalize_32(raw: RawKeyMaterial<'_>) -> Result<[u8; SCALAR_SIZE]> {
    to_fixed_array(decode_dispatch(raw, SCALAR_SIZE)?)
}

/// Normalizes key material to a canonical 33-byte compressed point, or rejects.
pub fn normalize_point(raw: RawKeyMaterial<'_>) -> Result<[u8; COMPRESSED_POINT_SIZE]> {
    to_fixed_array(decode_dispatch(raw, COMPRESSED_POINT_SIZE)?)
}

fn decode_dispatch(raw: RawKeyMaterial<'_>, expected_len: usize) -> Result<Vec<u8>> {
    match raw {
        RawKeyMaterial::Bytes(b) => Ok(b.to_vec()),
        RawKeyMaterial::Text(s) => {
            if s.len() == expected_len * 2 && is_hex_str(s) {
                Ok(hex::decode(s)?)
            } else {
                Ok(bs58::decode(s).into_vec()?)
            }
        }
    }
}

fn to_fixed_array<const N: usize>(bytes: Vec<u8>) -> Result<[u8; N]> {
    if bytes.len() != N {
        return Err(PivyError::BadKeyFormat(format!(
            "expected {N} bytes, got {}",
            bytes.len()
        )));
    }
    let mut arr = [0u8; N];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}

/// Decodes the JSON `{type:"Buffer", data:[...]}` shape some hosts serialize
/// byte arrays as, to a canonical 32-byte scalar.
pub fn normalize_32_value(value: &Value) -> Result<[u8; SCALAR_SIZE]> {
    to_fixed_array(decode_buffer_value(value)?)
}

/// Decodes the JSON `{type:"Buffer", data:[...]}` shape to a canonical
/// 33-byte compressed point.
pub fn normalize_point_value(value: &Value) -> Result<[u8; COMPRESSED_POINT_SIZE]> {
    to_fixed_array(decode_buffer_value(value)?)
}

fn decode_buffer_value(value: &Value) -> Result<Vec<u8>> {
    let data = value
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| PivyError::BadKeyFormat("not a {type:\"Buffer\",data:[...]} shape".into()))?;

    data.iter()
        .map(|v| {
            v.as_u64()
                .filter(|n| *n <= u8::MAX as u64)
                .map(|n| n as u8)
                .ok_or_else(|| PivyError::BadKeyFormat("buffer data entry out of byte range".into()))
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// LABEL HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

/// UTF-8 encodes a label string to raw bytes.
pub fn encode_utf8_label(label: &str) -> Vec<u8> {
    label.as_bytes().to_vec()
}

/// Right-zero-pads (or silently truncates) a byte string to the fixed
/// on-chain label width.
pub fn pad_label_32(bytes: &[u8]) -> [u8; LABEL_FIELD_SIZE] {
    let mut out = [0u8; LABEL_FIELD_SIZE];
    let n = bytes.len().min(LABEL_FIELD_SIZE);
    out[..n].copy_from_slice(&bytes[..n]);
    out
}

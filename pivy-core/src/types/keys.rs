//! Key byte-container types for PIVY.
//!
//! These are canonical, fixed-size byte containers only; curve validity
//! (is this 32-byte string a valid non-zero scalar below the group order? is
//! this 33-byte string a valid compressed point?) is established by
//! `pivy-crypto`, which is the only crate that links `secp256k1`. Keeping
//! the byte containers here lets error/codec/address types live without
//! pulling in curve arithmetic.
//!
//! - [`Scalar`]: a 32-byte secp256k1 private scalar, zeroized on drop.
//! - [`CompressedPoint`]: a 33-byte compressed secp256k1 public key.
//! - [`MetaKeyPair`]: a receiver's long-lived spend + view keypairs.
//! - [`EphemeralKeyPair`]: a payer's one-shot per-payment keypair.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{COMPRESSED_POINT_SIZE, SCALAR_SIZE};
use crate::error::{PivyError, Result};

// ═══════════════════════════════════════════════════════════════════════════════
// SCALAR
// ═══════════════════════════════════════════════════════════════════════════════

/// A secp256k1 private scalar: 32 bytes, zeroized when dropped.
///
/// This type does not itself validate that the scalar is non-zero and below
/// the curve order; that check requires curve arithmetic and is performed
/// by the crypto crate's key-construction functions.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar([u8; SCALAR_SIZE]);

impl Scalar {
    /// Builds a scalar from exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SCALAR_SIZE {
            return Err(PivyError::BadKeyFormat(format!(
                "scalar must be {SCALAR_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; SCALAR_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Builds a scalar from a fixed-size array.
    pub fn from_array(bytes: [u8; SCALAR_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; SCALAR_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scalar([REDACTED])")
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.0.ct_eq(&other.0).into()
    }
}
impl Eq for Scalar {}

// ═══════════════════════════════════════════════════════════════════════════════
// COMPRESSED POINT
// ═══════════════════════════════════════════════════════════════════════════════

/// A secp256k1 public key in compressed SEC1 form: 33 bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct CompressedPoint([u8; COMPRESSED_POINT_SIZE]);

impl CompressedPoint {
    /// Builds a compressed point from exactly 33 bytes.
    ///
    /// This only checks length; whether the bytes decode to a valid curve
    /// point is established by the crypto crate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != COMPRESSED_POINT_SIZE {
            return Err(PivyError::BadKeyFormat(format!(
                "compressed point must be {COMPRESSED_POINT_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; COMPRESSED_POINT_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Builds a compressed point from a fixed-size array.
    pub fn from_array(bytes: [u8; COMPRESSED_POINT_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; COMPRESSED_POINT_SIZE] {
        &self.0
    }

    /// Returns base58-encoded form, the wire encoding for public keys.
    pub fn to_base58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }

    /// Decodes base58-encoded form.
    pub fn from_base58(s: &str) -> Result<Self> {
        let bytes = bs58::decode(s).into_vec()?;
        Self::from_bytes(&bytes)
    }

    /// Returns lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Decodes lowercase or uppercase hex form.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }
}

impl std::fmt::Debug for CompressedPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompressedPoint({})", self.to_hex())
    }
}

// Serde implementation that uses hex encoding, matching the wire-adjacent
// representation rather than a raw byte array.
impl Serialize for CompressedPoint {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for CompressedPoint {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// META KEY PAIR
// ═══════════════════════════════════════════════════════════════════════════════

/// A receiver's long-lived spend keypair: controls funds.
#[derive(ZeroizeOnDrop)]
pub struct SpendKeyPair {
    /// Private spend scalar. Must never leave the receiver.
    pub private: Scalar,
    /// Public spend point. Freely shareable.
    #[zeroize(skip)]
    pub public: CompressedPoint,
}

/// A receiver's long-lived view keypair: controls detection and decryption.
#[derive(ZeroizeOnDrop)]
pub struct ViewKeyPair {
    /// Private view scalar. Must never leave the receiver.
    pub private: Scalar,
    /// Public view point. Freely shareable.
    #[zeroize(skip)]
    pub public: CompressedPoint,
}

/// A receiver's full meta-key set: `(spend, view)`.
///
/// Private halves must never leave the receiver; public halves are freely
/// shareable in base58 form as the receiver's meta-address.
#[derive(ZeroizeOnDrop)]
pub struct MetaKeyPair {
    /// Spend keypair, authorizes spending.
    pub spend: SpendKeyPair,
    /// View keypair, authorizes detection and decryption only.
    pub view: ViewKeyPair,
}

impl MetaKeyPair {
    /// Assembles a meta-keypair from its spend and view halves.
    pub fn new(spend: SpendKeyPair, view: ViewKeyPair) -> Self {
        Self { spend, view }
    }
}

impl std::fmt::Debug for MetaKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetaKeyPair")
            .field("spend_public", &self.spend.public)
            .field("view_public", &self.view.public)
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// EPHEMERAL KEY PAIR
// ═══════════════════════════════════════════════════════════════════════════════

/// A payer's one-shot per-payment keypair.
///
/// Must never be reused across payments: reuse lets any receiver correlate
/// two payments from the same payer.
#[derive(ZeroizeOnDrop)]
pub struct EphemeralKeyPair {
    /// Private half, used to derive the stealth key and encrypt payloads.
    pub private: Scalar,
    /// Public half, published so the receiver can recompute the derivation.
    #[zeroize(skip)]
    pub public: CompressedPoint,
}

impl EphemeralKeyPair {
    /// Assembles an ephemeral keypair from its private and public halves.
    pub fn new(private: Scalar, public: CompressedPoint) -> Self {
        Self { private, public }
    }
}

impl std::fmt::Debug for EphemeralKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EphemeralKeyPair")
            .field("public", &self.public)
            .finish()
    }
}

//! Error types for PIVY.
//!
//! The taxonomy covers malformed key material, failed stealth derivation,
//! and failed decryption. Nothing here is retried or logged internally;
//! errors surface at the call site and the host decides what to do with
//! them.

use thiserror::Error;

/// Result type alias using [`PivyError`].
pub type Result<T> = std::result::Result<T, PivyError>;

/// Main error type for all PIVY stealth-address operations.
#[derive(Debug, Error)]
pub enum PivyError {
    /// Malformed hex/base58, wrong length, invalid curve point, zero scalar,
    /// or a scalar at or above the curve order.
    #[error("bad key format: {0}")]
    BadKeyFormat(String),

    /// Derived stealth scalar is zero or the derived point is the identity.
    /// Negligible probability in practice; the caller should retry with a
    /// fresh ephemeral keypair.
    #[error("stealth derivation failed: {0}")]
    DerivationFailure(String),

    /// Ephemeral-blob integrity check failed: the ephemeral public key
    /// recomputed from the decrypted private key does not match the
    /// decrypted blob's trailing 33 bytes.
    #[error("decryption failed: {0}")]
    DecryptionFailure(String),

    /// Advisory-only: a payload exceeds an on-chain field cap. Non-fatal;
    /// the library still returns the computed value.
    #[error("length exceeded: {field} is {actual} bytes, cap is {cap}")]
    LengthExceeded {
        /// Name of the field that exceeded its cap.
        field: &'static str,
        /// Actual length in bytes.
        actual: usize,
        /// The advisory cap in bytes.
        cap: usize,
    },

    /// Hex decoding failed.
    #[error("invalid hex encoding: {0}")]
    HexError(#[from] hex::FromHexError),

    /// Base58 decoding failed.
    #[error("invalid base58 encoding: {0}")]
    Base58Error(#[from] bs58::decode::Error),
}

impl PivyError {
    /// Returns true if this is a key-format/validation error rather than a
    /// derivation or decryption outcome.
    pub fn is_bad_key_format(&self) -> bool {
        matches!(self, PivyError::BadKeyFormat(_))
    }

    /// Returns true if this error kind is purely advisory (non-fatal).
    pub fn is_advisory(&self) -> bool {
        matches!(self, PivyError::LengthExceeded { .. })
    }
}

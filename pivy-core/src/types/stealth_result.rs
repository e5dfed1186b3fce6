//! Stealth-derivation result types.
//!
//! Pure data produced by the crypto crate's derivation functions; defined
//! here because they compose only the byte containers already in this
//! crate, not because any derivation logic lives in this crate.

use zeroize::ZeroizeOnDrop;

use super::{AptosAddress, CompressedPoint, Scalar};

/// Result of the payer-side stealth derivation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StealthPublicResult {
    /// The derived stealth public key.
    pub stealth_pub_key: CompressedPoint,
    /// The Aptos address corresponding to `stealth_pub_key`.
    pub stealth_address: AptosAddress,
}

/// Result of the receiver-side stealth derivation.
///
/// Invariant: `derive_public_key(stealth_priv_key) == stealth_pub_key` and
/// `address_of(stealth_pub_key) == stealth_address`.
#[derive(ZeroizeOnDrop)]
pub struct StealthKeyPair {
    /// The derived stealth private key. Spends funds sent to `stealth_address`.
    pub stealth_priv_key: Scalar,
    /// The derived stealth public key.
    #[zeroize(skip)]
    pub stealth_pub_key: CompressedPoint,
    /// The Aptos address corresponding to `stealth_pub_key`.
    #[zeroize(skip)]
    pub stealth_address: AptosAddress,
}

impl std::fmt::Debug for StealthKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StealthKeyPair")
            .field("stealth_pub_key", &self.stealth_pub_key)
            .field("stealth_address", &self.stealth_address)
            .finish()
    }
}

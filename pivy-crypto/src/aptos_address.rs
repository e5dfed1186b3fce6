//! Aptos account-address derivation from a secp256k1 public key.
//!
//! Implements the single-key secp256k1 authentication scheme: the address is
//! `SHA3-256(scheme_tag ‖ pubkey_len ‖ uncompressed_pubkey ‖ auth_scheme)`.
//! This byte layout is normative: it must bit-match the Aptos SDK so that a
//! key imported there produces the same address this crate returns.

use secp256k1::PublicKey;
use sha3::{Digest, Sha3_256};

use pivy_core::constants::{
    APTOS_ADDRESS_PREIMAGE_SIZE, APTOS_ADDRESS_SIZE, APTOS_PUBKEY_LEN_BYTE,
    APTOS_SECP256K1_SCHEME_TAG, APTOS_SINGLE_KEY_AUTH_SCHEME,
};
use pivy_core::error::{PivyError, Result};
use pivy_core::types::{AptosAddress, CompressedPoint};

/// Derives the 32-byte Aptos address for a compressed secp256k1 public key.
pub fn address_of(pubkey: &CompressedPoint) -> Result<AptosAddress> {
    let parsed = PublicKey::from_slice(pubkey.as_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid public key: {e}")))?;
    let uncompressed = parsed.serialize_uncompressed();

    let mut preimage = Vec::with_capacity(APTOS_ADDRESS_PREIMAGE_SIZE);
    preimage.push(APTOS_SECP256K1_SCHEME_TAG);
    preimage.push(APTOS_PUBKEY_LEN_BYTE);
    preimage.extend_from_slice(&uncompressed);
    preimage.push(APTOS_SINGLE_KEY_AUTH_SCHEME);
    debug_assert_eq!(preimage.len(), APTOS_ADDRESS_PREIMAGE_SIZE);

    let digest = Sha3_256::digest(&preimage);
    debug_assert_eq!(digest.len(), APTOS_ADDRESS_SIZE);

    AptosAddress::from_bytes(&digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secp256k1::{Secp256k1, SecretKey};

    fn pubkey_from_scalar(byte: u8) -> CompressedPoint {
        let secp = Secp256k1::new();
        let secret = SecretKey::from_slice(&[byte; 32]).unwrap();
        let public = PublicKey::from_secret_key(&secp, &secret);
        CompressedPoint::from_array(public.serialize())
    }

    #[test]
    fn address_is_deterministic() {
        let pk = pubkey_from_scalar(0x11);
        let a1 = address_of(&pk).unwrap();
        let a2 = address_of(&pk).unwrap();
        assert_eq!(a1, a2);
    }

    #[test]
    fn different_keys_yield_different_addresses() {
        let a = address_of(&pubkey_from_scalar(0x01)).unwrap();
        let b = address_of(&pubkey_from_scalar(0x02)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_point_is_rejected() {
        let bogus = CompressedPoint::from_array([0xFF; 33]);
        assert!(address_of(&bogus).is_err());
    }

    #[test]
    fn display_is_0x_prefixed_64_hex_digits() {
        let addr = address_of(&pubkey_from_scalar(0x05)).unwrap();
        let s = addr.to_string();
        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 66);
    }
}

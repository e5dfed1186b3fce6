//! Stealth address derivation (C5), the heart of the protocol.
//!
//! Let `G` be the secp256k1 generator and `n` the group order. The tweak is
//! `t = decode_scalar(SHA-256(ECDH(a, B)_X)) mod n` for whichever scalar/point
//! pair the two sides hold. Payer computes `P_stealth = S + t·G`; receiver
//! computes `k_stealth = (s + t) mod n`. ECDH commutativity
//! (`ECDH(e, V) == ECDH(v, E)`) makes both sides land on the same `t`, so
//! `k_stealth·G == P_stealth` and the derived addresses match.

use secp256k1::{PublicKey, SecretKey};

use pivy_core::error::{PivyError, Result};
use pivy_core::types::{CompressedPoint, Scalar, StealthKeyPair, StealthPublicResult};

use crate::aptos_address::address_of;
use crate::cipher::ecdh_shared_key;

/// Interprets a 32-byte hash output as a secp256k1 tweak scalar.
///
/// Rejects rather than reducing mod `n`: `n` is only negligibly smaller than
/// 2^256, so a uniform 32-byte digest lands at or above `n` with vanishingly
/// small probability, and both sides of a derivation hit this rejection
/// identically since they hash the same ECDH output. Reject-and-regenerate
/// keeps the scalar decode a single well-defined secp256k1 crate call
/// instead of a hand-rolled bignum reduction for a branch this unlikely to
/// ever execute; that case surfaces as `DerivationFailure`.
fn decode_scalar(bytes: [u8; 32]) -> Option<secp256k1::Scalar> {
    secp256k1::Scalar::from_be_bytes(bytes).ok()
}

/// Payer-side stealth derivation.
///
/// Inputs: the receiver's meta-spend public key `S`, meta-view public key
/// `V`, and the payer's ephemeral private key `e`. Computes
/// `t = decode_scalar(SHA-256(ECDH(e, V)_X))` and `P_stealth = S + t·G`.
///
/// Rejects with `DerivationFailure` if the tweak reduces to zero (SHOULD per
/// protocol: a zero tweak would make `P_stealth == S`, leaking `s` to any
/// payer who can guess it). Regenerate the ephemeral keypair and retry.
pub fn derive_stealth_pub(
    spend_pub: &CompressedPoint,
    view_pub: &CompressedPoint,
    eph_priv: &Scalar,
) -> Result<StealthPublicResult> {
    let spend = PublicKey::from_slice(spend_pub.as_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid spend public key: {e}")))?;
    let view = PublicKey::from_slice(view_pub.as_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid view public key: {e}")))?;
    let eph_secret = SecretKey::from_slice(eph_priv.as_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid ephemeral private key: {e}")))?;

    let shared_key = ecdh_shared_key(&eph_secret, &view)?;
    let tweak = decode_scalar(shared_key)
        .ok_or_else(|| PivyError::DerivationFailure("tweak scalar out of range".into()))?;

    if tweak == secp256k1::Scalar::ZERO {
        return Err(PivyError::DerivationFailure(
            "zero tweak; regenerate the ephemeral keypair".into(),
        ));
    }

    let tweak_point = PublicKey::from_secret_key(
        secp256k1::SECP256K1,
        &SecretKey::from_slice(&tweak.to_be_bytes())
            .map_err(|e| PivyError::DerivationFailure(format!("invalid tweak scalar: {e}")))?,
    );

    let stealth_pub = spend
        .combine(&tweak_point)
        .map_err(|e| PivyError::DerivationFailure(format!("stealth point is identity: {e}")))?;

    let stealth_pub_key = CompressedPoint::from_array(stealth_pub.serialize());
    let stealth_address = address_of(&stealth_pub_key)?;

    Ok(StealthPublicResult {
        stealth_pub_key,
        stealth_address,
    })
}

/// Receiver-side stealth derivation.
///
/// Inputs: the receiver's meta-spend private key `s`, meta-view private key
/// `v`, and the payer's published ephemeral public key `E`. Computes
/// `t = decode_scalar(SHA-256(ECDH(v, E)_X))` and `k_stealth = (s + t) mod n`.
///
/// Rejects with `DerivationFailure` if `k_stealth` reduces to zero, mirroring
/// the payer-side rejection so both sides agree on when a payment is unusable.
pub fn derive_stealth_keypair(
    spend_priv: &Scalar,
    view_priv: &Scalar,
    eph_pub: &CompressedPoint,
) -> Result<StealthKeyPair> {
    let spend_secret = SecretKey::from_slice(spend_priv.as_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid spend private key: {e}")))?;
    let view_secret = SecretKey::from_slice(view_priv.as_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid view private key: {e}")))?;
    let eph = PublicKey::from_slice(eph_pub.as_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid ephemeral public key: {e}")))?;

    let shared_key = ecdh_shared_key(&view_secret, &eph)?;
    let tweak = decode_scalar(shared_key)
        .ok_or_else(|| PivyError::DerivationFailure("tweak scalar out of range".into()))?;

    if tweak == secp256k1::Scalar::ZERO {
        return Err(PivyError::DerivationFailure(
            "zero tweak; regenerate the ephemeral keypair".into(),
        ));
    }

    let stealth_secret = spend_secret
        .add_tweak(&tweak)
        .map_err(|_| PivyError::DerivationFailure("stealth scalar reduced to zero".into()))?;

    let stealth_pub = PublicKey::from_secret_key(secp256k1::SECP256K1, &stealth_secret);
    let stealth_pub_key = CompressedPoint::from_array(stealth_pub.serialize());
    let stealth_address = address_of(&stealth_pub_key)?;

    Ok(StealthKeyPair {
        stealth_priv_key: Scalar::from_bytes(&stealth_secret.secret_bytes())?,
        stealth_pub_key,
        stealth_address,
    })
}

//! Meta- and ephemeral-key generation (C4).
//!
//! Key generation is generic over the RNG so tests can use a seeded
//! deterministic generator while the public entry points default to the OS
//! CSPRNG. `secp256k1::SecretKey::new` already performs rejection sampling
//! internally, so every scalar drawn this way is non-zero and below the
//! curve order by construction.

use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use secp256k1::{PublicKey, SecretKey};

use pivy_core::error::Result;
use pivy_core::types::{CompressedPoint, EphemeralKeyPair, MetaKeyPair, Scalar, SpendKeyPair, ViewKeyPair};

fn keypair_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> (Scalar, CompressedPoint) {
    let secret = SecretKey::new(rng);
    let public = PublicKey::from_secret_key(secp256k1::SECP256K1, &secret);
    let scalar = Scalar::from_bytes(&secret.secret_bytes())
        .expect("secp256k1 scalars are always exactly 32 bytes");
    (scalar, CompressedPoint::from_array(public.serialize()))
}

/// Generates a receiver's meta-spend and meta-view keypairs using the
/// supplied RNG.
pub fn generate_meta_keys_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> MetaKeyPair {
    let (spend_priv, spend_pub) = keypair_with_rng(rng);
    let (view_priv, view_pub) = keypair_with_rng(rng);
    MetaKeyPair::new(
        SpendKeyPair {
            private: spend_priv,
            public: spend_pub,
        },
        ViewKeyPair {
            private: view_priv,
            public: view_pub,
        },
    )
}

/// Generates a receiver's meta-spend and meta-view keypairs using the OS CSPRNG.
pub fn generate_meta_keys() -> MetaKeyPair {
    generate_meta_keys_with_rng(&mut OsRng)
}

/// Generates a one-shot ephemeral keypair using the supplied RNG.
///
/// Callers must never reuse the result across payments.
pub fn generate_ephemeral_key_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> EphemeralKeyPair {
    let (private, public) = keypair_with_rng(rng);
    EphemeralKeyPair::new(private, public)
}

/// Generates a one-shot ephemeral keypair using the OS CSPRNG.
pub fn generate_ephemeral_key() -> EphemeralKeyPair {
    generate_ephemeral_key_with_rng(&mut OsRng)
}

/// Derives the compressed public key for a raw 32-byte secp256k1 scalar.
pub fn derive_public_key(scalar: &Scalar) -> Result<CompressedPoint> {
    let secret = SecretKey::from_slice(scalar.as_bytes())
        .map_err(|e| pivy_core::error::PivyError::BadKeyFormat(format!("invalid scalar: {e}")))?;
    let public = PublicKey::from_secret_key(secp256k1::SECP256K1, &secret);
    Ok(CompressedPoint::from_array(public.serialize()))
}

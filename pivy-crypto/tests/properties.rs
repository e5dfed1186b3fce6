//! Property tests for the round-trip and rejection guarantees the stealth
//! protocol depends on.

use pivy_core::types::{CompressedPoint, Scalar};
use pivy_crypto::{
    decrypt_ephemeral_priv_key, decrypt_note, derive_public_key, derive_stealth_keypair,
    derive_stealth_pub, encrypt_ephemeral_priv_key, encrypt_note, generate_ephemeral_key_with_rng,
    generate_meta_keys_with_rng,
};
use proptest::prelude::*;
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use secp256k1::{PublicKey, Secp256k1, SecretKey};

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    any::<u64>().prop_map(|seed| {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        generate_ephemeral_key_with_rng(&mut rng).private.clone()
    })
}

proptest! {
    /// Payer- and receiver-side derivations agree on address and public key
    /// for any valid meta/ephemeral keypair combination.
    #[test]
    fn stealth_round_trip(seed_meta in any::<u64>(), seed_eph in any::<u64>()) {
        let mut meta_rng = ChaCha20Rng::seed_from_u64(seed_meta);
        let meta = generate_meta_keys_with_rng(&mut meta_rng);
        let mut eph_rng = ChaCha20Rng::seed_from_u64(seed_eph);
        let eph = generate_ephemeral_key_with_rng(&mut eph_rng);

        let payer = derive_stealth_pub(&meta.spend.public, &meta.view.public, &eph.private);
        let receiver = derive_stealth_keypair(&meta.spend.private, &meta.view.private, &eph.public);

        // Both sides reject the same negligible-probability zero-tweak case,
        // or both succeed and agree.
        match (payer, receiver) {
            (Ok(p), Ok(r)) => {
                prop_assert_eq!(p.stealth_address, r.stealth_address);
                prop_assert_eq!(p.stealth_pub_key.as_bytes(), r.stealth_pub_key.as_bytes());
                let recomputed = derive_public_key(&r.stealth_priv_key).unwrap();
                prop_assert_eq!(recomputed.as_bytes(), p.stealth_pub_key.as_bytes());
            }
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "payer and receiver disagreed on derivation success"),
        }
    }

    /// Note encryption round-trips for any ephemeral/view keypair and message.
    #[test]
    fn note_round_trip(eph_priv in scalar_strategy(), view_priv in scalar_strategy(), msg in ".{0,200}") {
        let eph_secret = SecretKey::from_slice(eph_priv.as_bytes()).unwrap();
        let view_secret = SecretKey::from_slice(view_priv.as_bytes()).unwrap();
        let secp = Secp256k1::new();
        let view_pub = PublicKey::from_secret_key(&secp, &view_secret);
        let eph_pub = PublicKey::from_secret_key(&secp, &eph_secret);

        let mut rng = OsRng;
        let ciphertext = encrypt_note(&msg, &eph_priv, &view_pub, &mut rng).unwrap();
        let decrypted = decrypt_note(&ciphertext, &view_priv, &eph_pub).unwrap();
        prop_assert_eq!(decrypted, msg.into_bytes());
    }

    /// Ephemeral-blob round-trip: decrypting what we encrypted always
    /// recovers the original private scalar.
    #[test]
    fn ephemeral_blob_round_trip(eph_priv in scalar_strategy(), view_priv in scalar_strategy()) {
        let secp = Secp256k1::new();
        let eph_secret = SecretKey::from_slice(eph_priv.as_bytes()).unwrap();
        let eph_pub_point = PublicKey::from_secret_key(&secp, &eph_secret);
        let eph_pub = CompressedPoint::from_array(eph_pub_point.serialize());

        let view_secret = SecretKey::from_slice(view_priv.as_bytes()).unwrap();
        let view_pub = PublicKey::from_secret_key(&secp, &view_secret);

        let mut rng = OsRng;
        let blob = encrypt_ephemeral_priv_key(&eph_priv, &eph_pub, &view_pub, &mut rng).unwrap();
        let recovered = decrypt_ephemeral_priv_key(&blob, &view_priv, &eph_pub_point).unwrap();
        prop_assert_eq!(recovered.as_bytes(), eph_priv.as_bytes());
    }
}

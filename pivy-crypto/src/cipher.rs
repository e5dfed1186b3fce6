//! ECDH shared-secret derivation and the symmetric keystream cipher.
//!
//! The cipher is an unauthenticated XOR keystream: it provides
//! confidentiality only, against a passive observer who does not know the
//! derived key. It is not an AEAD and has no integrity tag; the
//! ephemeral-key specialization below recovers integrity "by redundancy"
//! (the recomputed public key must match), but note encryption has none.
//! A future revision should move to an AEAD construction (e.g.
//! ChaCha20-Poly1305) using the same 24-byte nonce slot.

use rand_core::{CryptoRng, RngCore};
use secp256k1::{PublicKey, SecretKey};
use sha2::{Digest, Sha256};

use pivy_core::constants::{CIPHER_NONCE_SIZE, COMPRESSED_POINT_SIZE, EPHEMERAL_BLOB_PLAINTEXT_SIZE, SCALAR_SIZE};
use pivy_core::error::{PivyError, Result};
use pivy_core::types::{CompressedPoint, EncryptedBlob, Scalar};

// ═══════════════════════════════════════════════════════════════════════════════
// ECDH
// ═══════════════════════════════════════════════════════════════════════════════

/// Computes the raw 33-byte compressed ECDH shared point `priv · pub`.
///
/// Fails with `BadKeyFormat` if either input is not a valid curve element or
/// the result is the point at infinity (only possible when an input is
/// invalid, since both curve points here are non-identity by construction).
pub fn ecdh_shared_point(
    priv_scalar: &SecretKey,
    pub_point: &PublicKey,
) -> Result<[u8; COMPRESSED_POINT_SIZE]> {
    let tweak = secp256k1::Scalar::from_be_bytes(priv_scalar.secret_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid scalar: {e}")))?;
    let shared = pub_point
        .mul_tweak(secp256k1::SECP256K1, &tweak)
        .map_err(|e| PivyError::BadKeyFormat(format!("ecdh failed: {e}")))?;
    Ok(shared.serialize())
}

/// Derives the 32-byte symmetric key `K = SHA-256(ECDH(priv, pub)_X)`.
///
/// This is the single ECDH-to-key derivation reused both by the cipher
/// below and by the stealth tweak computation, since both need the same `K`
/// (the stealth tweak just reinterprets it as a scalar).
pub fn ecdh_shared_key(priv_scalar: &SecretKey, pub_point: &PublicKey) -> Result<[u8; 32]> {
    let point = ecdh_shared_point(priv_scalar, pub_point)?;
    let mut hasher = Sha256::new();
    hasher.update(&point[1..COMPRESSED_POINT_SIZE]);
    Ok(hasher.finalize().into())
}

// ═══════════════════════════════════════════════════════════════════════════════
// CORE XOR KEYSTREAM
// ═══════════════════════════════════════════════════════════════════════════════

fn xor_with_key(data: &[u8], key: &[u8; 32]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, &b)| b ^ key[i % key.len()])
        .collect()
}

/// Encrypts `plaintext` under `key`, drawing a fresh nonce from `rng`.
///
/// The nonce is not consumed by the XOR itself; it only gives each
/// ciphertext a distinct-looking prefix and reserves space for a future
/// AEAD upgrade.
pub fn encrypt<R: RngCore + CryptoRng>(
    plaintext: &[u8],
    key: &[u8; 32],
    rng: &mut R,
) -> EncryptedBlob {
    let mut nonce = [0u8; CIPHER_NONCE_SIZE];
    rng.fill_bytes(&mut nonce);
    let ciphertext = xor_with_key(plaintext, key);
    EncryptedBlob::new(nonce, ciphertext)
}

/// Decrypts `blob` under `key`. The nonce is ignored.
pub fn decrypt(blob: &EncryptedBlob, key: &[u8; 32]) -> Vec<u8> {
    xor_with_key(blob.ciphertext(), key)
}

// ═══════════════════════════════════════════════════════════════════════════════
// EPHEMERAL-KEY BLOB
// ═══════════════════════════════════════════════════════════════════════════════

/// Encrypts an ephemeral keypair's private half for the on-chain
/// announcement, under the ECDH key shared between the ephemeral private
/// key and the receiver's meta-view public key.
///
/// Plaintext layout: `ephPriv (32) ‖ ephPub_compressed (33)`. Output is the
/// base58-encoded `nonce ‖ ciphertext`.
pub fn encrypt_ephemeral_priv_key<R: RngCore + CryptoRng>(
    eph_priv: &Scalar,
    eph_pub: &CompressedPoint,
    view_pub: &PublicKey,
    rng: &mut R,
) -> Result<String> {
    let eph_secret = SecretKey::from_slice(eph_priv.as_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid ephemeral private key: {e}")))?;
    let key = ecdh_shared_key(&eph_secret, view_pub)?;

    let mut plaintext = Vec::with_capacity(EPHEMERAL_BLOB_PLAINTEXT_SIZE);
    plaintext.extend_from_slice(eph_priv.as_bytes());
    plaintext.extend_from_slice(eph_pub.as_bytes());

    let blob = encrypt(&plaintext, &key, rng);
    Ok(blob.to_base58())
}

/// Decrypts an ephemeral-key blob using the receiver's meta-view private key
/// and the published ephemeral public key, recomputing the ephemeral public
/// key from the recovered private half and rejecting on mismatch.
///
/// This is integrity-by-redundancy, not a MAC: any single-bit flip in the
/// ciphertext region almost certainly changes the recovered private key, so
/// the recomputed public key will not match the decrypted tail.
pub fn decrypt_ephemeral_priv_key(
    blob_base58: &str,
    view_priv: &Scalar,
    eph_pub_hint: &PublicKey,
) -> Result<Scalar> {
    let blob = EncryptedBlob::from_base58(blob_base58)?;
    let view_secret = SecretKey::from_slice(view_priv.as_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid view private key: {e}")))?;
    let key = ecdh_shared_key(&view_secret, eph_pub_hint)?;

    let plaintext = decrypt(&blob, &key);
    if plaintext.len() != EPHEMERAL_BLOB_PLAINTEXT_SIZE {
        return Err(PivyError::DecryptionFailure(
            "decrypted ephemeral blob has unexpected length".into(),
        ));
    }

    let recovered_priv = &plaintext[..SCALAR_SIZE];
    let claimed_pub = &plaintext[SCALAR_SIZE..];

    let recovered_secret = SecretKey::from_slice(recovered_priv)
        .map_err(|_| PivyError::DecryptionFailure("recovered scalar is invalid".into()))?;
    let recomputed_pub = PublicKey::from_secret_key(secp256k1::SECP256K1, &recovered_secret);

    if recomputed_pub.serialize().as_slice() != claimed_pub {
        return Err(PivyError::DecryptionFailure(
            "recomputed ephemeral public key does not match decrypted blob".into(),
        ));
    }

    Scalar::from_bytes(recovered_priv)
}

// ═══════════════════════════════════════════════════════════════════════════════
// NOTE ENCRYPTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Encrypts a UTF-8 note under the ECDH key shared between the ephemeral
/// private key and the receiver's meta-view public key. No integrity check
/// beyond the caller's own framing.
pub fn encrypt_note<R: RngCore + CryptoRng>(
    note: &str,
    eph_priv: &Scalar,
    view_pub: &PublicKey,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let eph_secret = SecretKey::from_slice(eph_priv.as_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid ephemeral private key: {e}")))?;
    let key = ecdh_shared_key(&eph_secret, view_pub)?;
    let blob = encrypt(note.as_bytes(), &key, rng);
    Ok(blob.to_bytes())
}

/// Decrypts a note under the ECDH key shared between the receiver's
/// meta-view private key and the published ephemeral public key.
///
/// Returns whatever bytes the XOR yields; the caller must validate the
/// result (e.g. as UTF-8) at a higher layer since this cipher has no
/// integrity check.
pub fn decrypt_note(blob_bytes: &[u8], view_priv: &Scalar, eph_pub: &PublicKey) -> Result<Vec<u8>> {
    let blob = EncryptedBlob::from_bytes(blob_bytes)?;
    let view_secret = SecretKey::from_slice(view_priv.as_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid view private key: {e}")))?;
    let key = ecdh_shared_key(&view_secret, eph_pub)?;
    Ok(decrypt(&blob, &key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;
    use secp256k1::Secp256k1;

    fn keypair(byte: u8) -> (SecretKey, PublicKey) {
        let secp = Secp256k1::new();
        let secret = SecretKey::from_slice(&[byte; 32]).unwrap();
        let public = PublicKey::from_secret_key(&secp, &secret);
        (secret, public)
    }

    #[test]
    fn ecdh_is_commutative() {
        let (a_priv, a_pub) = keypair(0x11);
        let (b_priv, b_pub) = keypair(0x22);

        let k1 = ecdh_shared_key(&a_priv, &b_pub).unwrap();
        let k2 = ecdh_shared_key(&b_priv, &a_pub).unwrap();
        assert_eq!(k1, k2);
    }

    #[test]
    fn note_round_trips() {
        let (eph_priv_sk, _eph_pub) = keypair(0x03);
        let (_view_priv_sk, view_pub) = keypair(0x02);
        let eph_priv = Scalar::from_bytes(&eph_priv_sk.secret_bytes()).unwrap();

        let mut rng = OsRng;
        let ciphertext = encrypt_note("Hello Aptos", &eph_priv, &view_pub, &mut rng).unwrap();
        assert_eq!(ciphertext.len(), CIPHER_NONCE_SIZE + "Hello Aptos".len());

        let (view_priv_sk, _view_pub2) = keypair(0x02);
        let view_priv = Scalar::from_bytes(&view_priv_sk.secret_bytes()).unwrap();
        let (_eph_priv2, eph_pub) = keypair(0x03);

        let decrypted = decrypt_note(&ciphertext, &view_priv, &eph_pub).unwrap();
        assert_eq!(decrypted, b"Hello Aptos");
    }

    #[test]
    fn ephemeral_blob_round_trips_and_rejects_bit_flip() {
        let (eph_priv_sk, eph_pub_sk) = keypair(0x03);
        let (_view_priv_sk, view_pub) = keypair(0x02);
        let eph_priv = Scalar::from_bytes(&eph_priv_sk.secret_bytes()).unwrap();
        let eph_pub = CompressedPoint::from_array(eph_pub_sk.serialize());

        let mut rng = OsRng;
        let blob = encrypt_ephemeral_priv_key(&eph_priv, &eph_pub, &view_pub, &mut rng).unwrap();

        let (view_priv_sk, _) = keypair(0x02);
        let view_priv = Scalar::from_bytes(&view_priv_sk.secret_bytes()).unwrap();

        let recovered = decrypt_ephemeral_priv_key(&blob, &view_priv, &eph_pub_sk).unwrap();
        assert_eq!(recovered.as_bytes(), eph_priv.as_bytes());

        let mut raw = bs58::decode(&blob).into_vec().unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0xFF;
        let tampered = bs58::encode(raw).into_string();

        let result = decrypt_ephemeral_priv_key(&tampered, &view_priv, &eph_pub_sk);
        assert!(result.is_err());
    }
}

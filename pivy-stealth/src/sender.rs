//! Payer-side orchestration: compose key generation, encryption, and
//! stealth derivation into a single payment-construction call.
//!
//! This module adds no cryptography of its own; it is pure composition of
//! `pivy-crypto`'s C1-C5 primitives into the payer's half of the data flow:
//! generate ephemeral key -> encrypt ephemeral blob and note -> derive
//! stealth public key -> address.

use secp256k1::PublicKey;
use tracing::{debug, warn};

use pivy_core::constants::{LABEL_FIELD_SIZE, MAX_NOTE_SIZE, MAX_PAYLOAD_SIZE};
use pivy_core::error::{PivyError, Result};
use pivy_core::types::{AptosAddress, CompressedPoint, EphemeralKeyPair};
use pivy_crypto::{
    derive_stealth_pub, encrypt_ephemeral_priv_key, encrypt_note, generate_ephemeral_key,
    pad_label_32,
};

use crate::MetaPublicAddress;

/// Everything a host needs to build the Aptos transfer and publish the
/// on-chain announcement for one stealth payment.
#[derive(Debug)]
pub struct StealthPaymentOutput {
    /// The derived stealth public key.
    pub stealth_pub_key: CompressedPoint,
    /// The Aptos address to send funds to.
    pub stealth_address: AptosAddress,
    /// The ephemeral public key to publish (`eph_pubkey` announcement field).
    pub eph_pub_key: CompressedPoint,
    /// Base58-encoded encrypted ephemeral private key blob.
    pub encrypted_eph_priv_key: String,
    /// Encrypted note bytes (`nonce ‖ ciphertext`), if a note was supplied.
    pub encrypted_note: Option<Vec<u8>>,
    /// Right-zero-padded 32-byte label, if one was supplied.
    pub label: Option<[u8; LABEL_FIELD_SIZE]>,
}

/// Builds a stealth payment to `receiver`, optionally attaching an encrypted
/// note and an on-chain label.
///
/// `payload`, if present, is only length-checked against the advisory
/// on-chain cap. It is carried by the caller as plaintext, not encrypted by
/// this function: the public payload and the encrypted note are distinct
/// announcement fields.
pub fn create_stealth_payment(
    receiver: &MetaPublicAddress,
    note: Option<&str>,
    label: Option<&str>,
    payload: Option<&str>,
) -> Result<StealthPaymentOutput> {
    if let Some(p) = payload {
        if p.len() > MAX_PAYLOAD_SIZE {
            warn!(len = p.len(), cap = MAX_PAYLOAD_SIZE, "payload exceeds advisory cap");
        }
    }

    let eph: EphemeralKeyPair = generate_ephemeral_key();
    let view_pub = PublicKey::from_slice(receiver.view_pub.as_bytes())
        .map_err(|e| PivyError::BadKeyFormat(format!("invalid receiver view key: {e}")))?;

    let mut rng = rand::rngs::OsRng;
    let encrypted_eph_priv_key =
        encrypt_ephemeral_priv_key(&eph.private, &eph.public, &view_pub, &mut rng)?;

    let encrypted_note = note
        .map(|n| {
            if n.len() > MAX_NOTE_SIZE {
                warn!(len = n.len(), cap = MAX_NOTE_SIZE, "note exceeds advisory cap");
            }
            encrypt_note(n, &eph.private, &view_pub, &mut rng)
        })
        .transpose()?;

    let derivation = derive_stealth_pub(&receiver.spend_pub, &receiver.view_pub, &eph.private)?;
    debug!(address = %derivation.stealth_address, "derived stealth payment");

    Ok(StealthPaymentOutput {
        stealth_pub_key: derivation.stealth_pub_key,
        stealth_address: derivation.stealth_address,
        eph_pub_key: eph.public.clone(),
        encrypted_eph_priv_key,
        encrypted_note,
        label: label.map(|l| pad_label_32(l.as_bytes())),
    })
}

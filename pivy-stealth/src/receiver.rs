//! Receiver-side orchestration: given a published ephemeral key and the
//! receiver's own meta keys, reconstruct the stealth keypair and decrypt the
//! attached note.
//!
//! A single-announcement primitive, not a batch scanner or indexing
//! service. A host loops this over its own announcement feed.

use secp256k1::PublicKey;
use tracing::warn;

use pivy_core::error::{PivyError, Result};
use pivy_core::types::{AptosAddress, CompressedPoint, MetaKeyPair, StealthKeyPair};
use pivy_crypto::{decrypt_note, derive_stealth_keypair};

use crate::MetaPublicAddress;

/// A receiver's handle for reconstructing stealth payments addressed to it.
///
/// Holds the full meta-keypair (spend + view privates); never persist or log
/// this beyond the scope that needs it.
pub struct PivyReceiver {
    keys: MetaKeyPair,
}

/// The outcome of successfully reconstructing one stealth payment.
pub struct ReceivedPayment {
    /// The reconstructed stealth keypair, able to spend the payment.
    pub stealth_keypair: StealthKeyPair,
    /// The decrypted note, if the announcement carried one.
    pub note: Option<Vec<u8>>,
}

impl PivyReceiver {
    /// Wraps an existing meta-keypair.
    pub fn new(keys: MetaKeyPair) -> Self {
        Self { keys }
    }

    /// Returns the public halves shareable as this receiver's meta-address.
    pub fn meta_public_address(&self) -> MetaPublicAddress {
        MetaPublicAddress {
            spend_pub: self.keys.spend.public.clone(),
            view_pub: self.keys.view.public.clone(),
        }
    }

    /// Attempts to reconstruct the stealth payment published under
    /// `eph_pub`, confirming it belongs to this receiver by checking that
    /// the derived address matches `expected_address` (the address observed
    /// on-chain as the transfer destination).
    ///
    /// Returns `Ok(None)` when the derived address does not match, the
    /// ordinary outcome while scanning announcements that belong to other
    /// receivers, not an error. Returns `Err` only for a genuine derivation
    /// or decryption failure.
    pub fn try_receive(
        &self,
        eph_pub: &CompressedPoint,
        expected_address: &AptosAddress,
        encrypted_note: Option<&[u8]>,
    ) -> Result<Option<ReceivedPayment>> {
        let stealth_keypair = derive_stealth_keypair(
            &self.keys.spend.private,
            &self.keys.view.private,
            eph_pub,
        )
        .inspect_err(|err| warn!(%err, "stealth derivation failed"))?;

        if &stealth_keypair.stealth_address != expected_address {
            return Ok(None);
        }

        let eph_pub_point = PublicKey::from_slice(eph_pub.as_bytes())
            .map_err(|e| PivyError::BadKeyFormat(format!("invalid ephemeral public key: {e}")))?;

        let note = match encrypted_note {
            Some(bytes) => Some(
                decrypt_note(bytes, &self.keys.view.private, &eph_pub_point)
                    .inspect_err(|err| warn!(%err, "note decryption failed"))?,
            ),
            None => None,
        };

        Ok(Some(ReceivedPayment {
            stealth_keypair,
            note,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::create_stealth_payment;
    use pivy_crypto::generate_meta_keys;

    #[test]
    fn receiver_reconstructs_payment_sent_to_it() {
        let meta = generate_meta_keys();
        let receiver = PivyReceiver::new(meta);
        let public = receiver.meta_public_address();

        let payment = create_stealth_payment(&public, Some("hi"), None, None).unwrap();

        let result = receiver
            .try_receive(
                &payment.eph_pub_key,
                &payment.stealth_address,
                payment.encrypted_note.as_deref(),
            )
            .unwrap();

        let received = result.expect("payment should be detected");
        assert_eq!(
            received.stealth_keypair.stealth_address,
            payment.stealth_address
        );
        assert_eq!(received.note.unwrap(), b"hi");
    }

    #[test]
    fn receiver_does_not_claim_a_payment_for_someone_else() {
        let mallory = PivyReceiver::new(generate_meta_keys());
        let alice = generate_meta_keys();
        let alice_public = MetaPublicAddress {
            spend_pub: alice.spend.public.clone(),
            view_pub: alice.view.public.clone(),
        };

        let payment = create_stealth_payment(&alice_public, None, None, None).unwrap();

        let result = mallory
            .try_receive(&payment.eph_pub_key, &payment.stealth_address, None)
            .unwrap();

        assert!(result.is_none());
    }
}

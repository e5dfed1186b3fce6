//! # PIVY Stealth
//!
//! Payer/receiver convenience API composing `pivy-crypto`'s primitives into
//! the two workflows a host application actually drives: create a stealth
//! payment, and reconstruct one from a published announcement. This crate
//! adds no new cryptography; it is orchestration.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod receiver;
pub mod sender;

pub use receiver::{PivyReceiver, ReceivedPayment};
pub use sender::{create_stealth_payment, StealthPaymentOutput};

use pivy_core::types::CompressedPoint;

/// The public halves of a receiver's meta-keypair, shareable as their
/// meta-address.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MetaPublicAddress {
    /// Public spend key.
    pub spend_pub: CompressedPoint,
    /// Public view key.
    pub view_pub: CompressedPoint,
}

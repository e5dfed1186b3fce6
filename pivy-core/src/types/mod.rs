//! Domain types for PIVY.
//!
//! - [`Scalar`] / [`CompressedPoint`]: canonical key byte containers.
//! - [`MetaKeyPair`] / [`EphemeralKeyPair`]: the protocol's two keypair kinds.
//! - [`AptosAddress`]: a 32-byte Aptos account address.
//! - [`EncryptedBlob`]: the `nonce ‖ ciphertext` wire layout.

mod address;
mod blob;
mod keys;
mod stealth_result;

pub use address::*;
pub use blob::*;
pub use keys::*;
pub use stealth_result::*;

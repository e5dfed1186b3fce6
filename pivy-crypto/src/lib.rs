//! # PIVY Crypto
//!
//! The cryptographic core of the PIVY stealth-address protocol: secp256k1
//! key derivation, Aptos address encoding, ECDH, the symmetric cipher, and
//! the stealth-address tweak derivation itself.
//!
//! Pure and synchronous throughout: no I/O, no shared mutable state, no
//! background tasks. Every function here is reentrant.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod aptos_address;
pub mod cipher;
pub mod codec;
pub mod keygen;
pub mod stealth;

pub use aptos_address::address_of;
pub use cipher::{
    decrypt, decrypt_ephemeral_priv_key, decrypt_note, ecdh_shared_key, ecdh_shared_point,
    encrypt, encrypt_ephemeral_priv_key, encrypt_note,
};
pub use codec::{
    encode_utf8_label, normalize_32, normalize_32_value, normalize_point, normalize_point_value,
    pad_label_32, KeyBytes, RawKeyMaterial,
};
pub use keygen::{
    derive_public_key, generate_ephemeral_key, generate_ephemeral_key_with_rng,
    generate_meta_keys, generate_meta_keys_with_rng,
};
pub use stealth::{derive_stealth_keypair, derive_stealth_pub};

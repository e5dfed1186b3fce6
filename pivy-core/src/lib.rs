//! # PIVY Core
//!
//! Core types, errors, and constants for the PIVY stealth-address protocol
//! on Aptos.
//!
//! This crate holds no cryptographic logic; it defines the canonical byte
//! containers, the error taxonomy, and the protocol's fixed sizes. The
//! actual secp256k1 arithmetic, ECDH, and Aptos address derivation live in
//! `pivy-crypto`.
//!
//! ```
//! use pivy_core::CompressedPoint;
//!
//! let point = CompressedPoint::from_array([0x02; 33]);
//! let json = serde_json::to_string(&point).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod types;

pub use constants::*;
pub use error::{PivyError, Result};
pub use types::*;

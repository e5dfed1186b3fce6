//! Protocol constants for PIVY.
//!
//! Sizes are fixed by secp256k1 (scalars, compressed/uncompressed points) and
//! by the Aptos single-key secp256k1 authentication scheme.

// ═══════════════════════════════════════════════════════════════════════════════
// SECP256K1 SIZES
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of a secp256k1 private scalar in bytes.
pub const SCALAR_SIZE: usize = 32;

/// Size of a compressed secp256k1 public key (1 parity byte + 32-byte X).
pub const COMPRESSED_POINT_SIZE: usize = 33;

/// Size of an uncompressed secp256k1 public key (0x04 + 32-byte X + 32-byte Y).
pub const UNCOMPRESSED_POINT_SIZE: usize = 65;

// ═══════════════════════════════════════════════════════════════════════════════
// APTOS ADDRESS DERIVATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of an Aptos account address in bytes.
pub const APTOS_ADDRESS_SIZE: usize = 32;

/// Aptos auth-key scheme tag for a secp256k1 single-key account.
pub const APTOS_SECP256K1_SCHEME_TAG: u8 = 0x01;

/// Length byte for the embedded uncompressed public key (65, little-endian single byte).
pub const APTOS_PUBKEY_LEN_BYTE: u8 = 0x41;

/// Single-key authentication scheme discriminator appended after the public key.
pub const APTOS_SINGLE_KEY_AUTH_SCHEME: u8 = 0x02;

/// Total length of the byte string hashed to produce an Aptos address:
/// scheme tag (1) + length byte (1) + uncompressed pubkey (65) + auth scheme (1).
pub const APTOS_ADDRESS_PREIMAGE_SIZE: usize = 1 + 1 + UNCOMPRESSED_POINT_SIZE + 1;

// ═══════════════════════════════════════════════════════════════════════════════
// SYMMETRIC CIPHER
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of the random nonce prefix on every encrypted blob.
pub const CIPHER_NONCE_SIZE: usize = 24;

/// Plaintext size of the ephemeral-key blob: `ephPriv (32) || ephPub (33)`.
pub const EPHEMERAL_BLOB_PLAINTEXT_SIZE: usize = SCALAR_SIZE + COMPRESSED_POINT_SIZE;

// ═══════════════════════════════════════════════════════════════════════════════
// ON-CHAIN FIELD CAPS (advisory, enforced by the on-chain collaborator)
// ═══════════════════════════════════════════════════════════════════════════════

/// Fixed width of the `label` event field (right-zero-padded UTF-8, excess truncated).
pub const LABEL_FIELD_SIZE: usize = 32;

/// Maximum length of the public `payload` message field.
pub const MAX_PAYLOAD_SIZE: usize = 121;

/// Maximum length of the encrypted `note` field.
pub const MAX_NOTE_SIZE: usize = 256;

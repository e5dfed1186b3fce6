//! Encrypted-blob wire type for PIVY.

use crate::constants::CIPHER_NONCE_SIZE;
use crate::error::{PivyError, Result};

/// An opaque byte string: a random nonce prefix followed by XOR-ciphertext.
///
/// The nonce is not consumed by the cipher itself; it only gives each
/// ciphertext a distinct-looking prefix and reserves space for a future
/// authenticated upgrade. See the crypto crate's `cipher` module for the
/// encryption/decryption logic that produces and consumes this layout.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptedBlob {
    nonce: [u8; CIPHER_NONCE_SIZE],
    ciphertext: Vec<u8>,
}

impl EncryptedBlob {
    /// Assembles a blob from its nonce and ciphertext parts.
    pub fn new(nonce: [u8; CIPHER_NONCE_SIZE], ciphertext: Vec<u8>) -> Self {
        Self { nonce, ciphertext }
    }

    /// Splits `nonce ‖ ciphertext` into its two parts.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < CIPHER_NONCE_SIZE {
            return Err(PivyError::BadKeyFormat(format!(
                "encrypted blob must be at least {CIPHER_NONCE_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        let mut nonce = [0u8; CIPHER_NONCE_SIZE];
        nonce.copy_from_slice(&bytes[..CIPHER_NONCE_SIZE]);
        let ciphertext = bytes[CIPHER_NONCE_SIZE..].to_vec();
        Ok(Self { nonce, ciphertext })
    }

    /// Returns the nonce prefix.
    pub fn nonce(&self) -> &[u8; CIPHER_NONCE_SIZE] {
        &self.nonce
    }

    /// Returns the ciphertext region, excluding the nonce.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Serializes to the `nonce ‖ ciphertext` wire layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(CIPHER_NONCE_SIZE + self.ciphertext.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Base58-encodes the wire layout, the boundary encoding used for the
    /// ephemeral-key blob.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.to_bytes()).into_string()
    }

    /// Decodes a base58-encoded blob.
    pub fn from_base58(s: &str) -> Result<Self> {
        let bytes = bs58::decode(s).into_vec()?;
        Self::from_bytes(&bytes)
    }
}

impl std::fmt::Debug for EncryptedBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptedBlob")
            .field("nonce", &hex::encode(self.nonce))
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_roundtrip_preserves_nonce_and_ciphertext() {
        let blob = EncryptedBlob::new([7u8; CIPHER_NONCE_SIZE], vec![1, 2, 3, 4]);
        let bytes = blob.to_bytes();
        let parsed = EncryptedBlob::from_bytes(&bytes).unwrap();
        assert_eq!(parsed.nonce(), blob.nonce());
        assert_eq!(parsed.ciphertext(), blob.ciphertext());
    }

    #[test]
    fn base58_roundtrip() {
        let blob = EncryptedBlob::new([3u8; CIPHER_NONCE_SIZE], vec![9, 9, 9]);
        let encoded = blob.to_base58();
        let decoded = EncryptedBlob::from_base58(&encoded).unwrap();
        assert_eq!(decoded, blob);
    }

    #[test]
    fn too_short_is_rejected() {
        let err = EncryptedBlob::from_bytes(&[0u8; 10]).unwrap_err();
        assert!(err.is_bad_key_format());
    }

    #[test]
    fn empty_ciphertext_is_a_valid_blob() {
        let blob = EncryptedBlob::new([1u8; CIPHER_NONCE_SIZE], vec![]);
        let parsed = EncryptedBlob::from_bytes(&blob.to_bytes()).unwrap();
        assert!(parsed.ciphertext().is_empty());
    }
}

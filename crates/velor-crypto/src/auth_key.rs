//! Authentication key derivation.
//!
//! Every Velor account is controlled by an authentication key derived from
//! the canonical bytes of its public key (or key set) and a scheme byte. The
//! scheme byte is a domain separator: identical key bytes under different
//! schemes never derive the same authentication key.

use crate::error::{CryptoError, CryptoResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The authentication key scheme byte for legacy Ed25519 accounts.
pub const ED25519_SCHEME: u8 = 0;

/// The authentication key scheme byte for single-key accounts (unified).
pub const SINGLE_KEY_SCHEME: u8 = 2;

/// The authentication key scheme byte for multi-key accounts (unified).
pub const MULTI_KEY_SCHEME: u8 = 3;

/// Derives an authentication key from public key bytes and a scheme.
///
/// The authentication key is SHA3-256(public_key_bytes || scheme_byte).
pub fn derive_authentication_key(public_key: &[u8], scheme: u8) -> [u8; 32] {
    use sha3::{Digest, Sha3_256};
    let mut hasher = Sha3_256::new();
    hasher.update(public_key);
    hasher.update([scheme]);
    let result = hasher.finalize();
    let mut auth_key = [0u8; 32];
    auth_key.copy_from_slice(&result);
    auth_key
}

/// An authentication key used to verify account ownership.
///
/// The authentication key is derived from the public key and can be
/// rotated to support key rotation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthenticationKey([u8; 32]);

impl AuthenticationKey {
    /// Creates an authentication key from bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives the authentication key for the given preimage and scheme.
    pub fn from_preimage(public_key: &[u8], scheme: u8) -> Self {
        Self(derive_authentication_key(public_key, scheme))
    }

    /// Creates an authentication key from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte slice length is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != 32 {
            return Err(CryptoError::InvalidAuthenticationKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let mut key = [0u8; 32];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Creates an authentication key from a hex string.
    pub fn from_hex(hex_str: &str) -> CryptoResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Returns the authentication key as bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the authentication key as a byte array.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the authentication key as a hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AuthenticationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthenticationKey({})", self.to_hex())
    }
}

impl fmt::Display for AuthenticationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

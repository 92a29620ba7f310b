//! Secp256r1 (P-256) ECDSA signature scheme implementation.
//!
//! Secp256r1, also known as P-256 or prime256v1, is commonly used in
//! `WebAuthn` and passkey implementations.

use crate::error::{CryptoError, CryptoResult};
use crate::traits::{PublicKey, Signature, Signer, Verifier};
use p256::ecdsa::{
    Signature as P256Signature, SigningKey, VerifyingKey, signature::Signer as P256Signer,
    signature::Verifier as P256Verifier,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secp256r1 private key length in bytes.
pub const SECP256R1_PRIVATE_KEY_LENGTH: usize = 32;
/// Secp256r1 public key length in bytes (uncompressed SEC1, the canonical
/// wire form).
pub const SECP256R1_PUBLIC_KEY_LENGTH: usize = 65;
/// Secp256r1 signature length in bytes (r || s).
pub const SECP256R1_SIGNATURE_LENGTH: usize = 64;

/// A Secp256r1 (P-256) ECDSA private key.
///
/// The private key is zeroized when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secp256r1PrivateKey {
    #[zeroize(skip)]
    inner: SigningKey,
}

impl Secp256r1PrivateKey {
    /// Generates a new random Secp256r1 private key.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::rngs::OsRng);
        Self { inner: signing_key }
    }

    /// Creates a private key from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != SECP256R1_PRIVATE_KEY_LENGTH {
            return Err(CryptoError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                SECP256R1_PRIVATE_KEY_LENGTH,
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { inner: signing_key })
    }

    /// Creates a private key from a hex string.
    pub fn from_hex(hex_str: &str) -> CryptoResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Returns the private key as bytes.
    pub fn to_bytes(&self) -> [u8; SECP256R1_PRIVATE_KEY_LENGTH] {
        self.inner.to_bytes().into()
    }

    /// Returns the private key as a hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.inner.to_bytes()))
    }

    /// Returns the corresponding public key.
    pub fn public_key(&self) -> Secp256r1PublicKey {
        Secp256r1PublicKey {
            inner: *self.inner.verifying_key(),
        }
    }

    /// Signs a message (pre-hashed with SHA256) and returns the signature.
    pub fn sign(&self, message: &[u8]) -> Secp256r1Signature {
        let hash = crate::hash::sha2_256(message);
        let signature: P256Signature = self.inner.sign(&hash);
        Secp256r1Signature { inner: signature }
    }
}

impl Signer for Secp256r1PrivateKey {
    type Signature = Secp256r1Signature;

    fn sign(&self, message: &[u8]) -> Secp256r1Signature {
        Secp256r1PrivateKey::sign(self, message)
    }

    fn public_key(&self) -> Secp256r1PublicKey {
        Secp256r1PrivateKey::public_key(self)
    }
}

impl fmt::Debug for Secp256r1PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secp256r1PrivateKey([REDACTED])")
    }
}

/// A Secp256r1 (P-256) ECDSA public key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Secp256r1PublicKey {
    inner: VerifyingKey,
}

impl Secp256r1PublicKey {
    /// Creates a public key from SEC1 bytes (compressed or uncompressed).
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let verifying_key = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        Ok(Self {
            inner: verifying_key,
        })
    }

    /// Creates a public key from a hex string.
    pub fn from_hex(hex_str: &str) -> CryptoResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Returns the public key as uncompressed SEC1 bytes (65 bytes), the
    /// canonical wire form.
    pub fn to_bytes(&self) -> Vec<u8> {
        use p256::elliptic_curve::sec1::ToEncodedPoint;
        self.inner.to_encoded_point(false).as_bytes().to_vec()
    }

    /// Returns the public key as a hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }

    /// Verifies a signature against a message.
    pub fn verify(&self, message: &[u8], signature: &Secp256r1Signature) -> CryptoResult<()> {
        let hash = crate::hash::sha2_256(message);
        self.inner
            .verify(&hash, &signature.inner)
            .map_err(|_| CryptoError::InvalidSignature("verification failed".to_string()))
    }
}

impl PublicKey for Secp256r1PublicKey {
    const LENGTH: usize = SECP256R1_PUBLIC_KEY_LENGTH;

    fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        Secp256r1PublicKey::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Secp256r1PublicKey::to_bytes(self)
    }
}

impl Verifier for Secp256r1PublicKey {
    type Signature = Secp256r1Signature;

    fn verify(&self, message: &[u8], signature: &Secp256r1Signature) -> CryptoResult<()> {
        Secp256r1PublicKey::verify(self, message, signature)
    }
}

impl fmt::Debug for Secp256r1PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secp256r1PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for Secp256r1PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Secp256r1PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Secp256r1PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_hex(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
        }
    }
}

/// A Secp256r1 (P-256) ECDSA signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Secp256r1Signature {
    inner: P256Signature,
}

impl Secp256r1Signature {
    /// Creates a signature from raw bytes (64 bytes, r || s).
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != SECP256R1_SIGNATURE_LENGTH {
            return Err(CryptoError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                SECP256R1_SIGNATURE_LENGTH,
                bytes.len()
            )));
        }
        let signature = P256Signature::from_slice(bytes)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        Ok(Self { inner: signature })
    }

    /// Creates a signature from a hex string.
    pub fn from_hex(hex_str: &str) -> CryptoResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Returns the signature as bytes (64 bytes, r || s).
    pub fn to_bytes(&self) -> [u8; SECP256R1_SIGNATURE_LENGTH] {
        self.inner.to_bytes().into()
    }

    /// Returns the signature as a hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

impl Signature for Secp256r1Signature {
    type PublicKey = Secp256r1PublicKey;
    const LENGTH: usize = SECP256R1_SIGNATURE_LENGTH;

    fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        Secp256r1Signature::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.inner.to_bytes().to_vec()
    }
}

impl fmt::Debug for Secp256r1Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secp256r1Signature({})", self.to_hex())
    }
}

impl fmt::Display for Secp256r1Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Secp256r1Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Secp256r1Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_hex(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_sign() {
        let private_key = Secp256r1PrivateKey::generate();
        let message = b"hello world";
        let signature = private_key.sign(message);

        let public_key = private_key.public_key();
        assert!(public_key.verify(message, &signature).is_ok());
    }

    #[test]
    fn test_wrong_message_fails() {
        let private_key = Secp256r1PrivateKey::generate();
        let signature = private_key.sign(b"hello world");

        let public_key = private_key.public_key();
        assert!(public_key.verify(b"hello world!", &signature).is_err());
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let private_key = Secp256r1PrivateKey::generate();
        let bytes = private_key.to_bytes();
        let restored = Secp256r1PrivateKey::from_bytes(&bytes).unwrap();
        assert_eq!(private_key.to_bytes(), restored.to_bytes());
    }

    #[test]
    fn test_public_key_length() {
        let private_key = Secp256r1PrivateKey::generate();
        let public_key = private_key.public_key();
        assert_eq!(public_key.to_bytes().len(), SECP256R1_PUBLIC_KEY_LENGTH);
    }

    #[test]
    fn test_public_key_from_bytes_roundtrip() {
        let private_key = Secp256r1PrivateKey::generate();
        let public_key = private_key.public_key();
        let restored = Secp256r1PublicKey::from_bytes(&public_key.to_bytes()).unwrap();
        assert_eq!(public_key, restored);
    }

    #[test]
    fn test_signature_from_bytes_roundtrip() {
        let private_key = Secp256r1PrivateKey::generate();
        let signature = private_key.sign(b"test");
        let restored = Secp256r1Signature::from_bytes(&signature.to_bytes()).unwrap();
        assert_eq!(signature.to_bytes(), restored.to_bytes());
    }

    #[test]
    fn test_invalid_key_and_signature_bytes() {
        assert!(Secp256r1PrivateKey::from_bytes(&[0u8; 16]).is_err());
        assert!(Secp256r1PublicKey::from_bytes(&[0u8; 16]).is_err());
        assert!(Secp256r1Signature::from_bytes(&[0u8; 16]).is_err());
    }
}

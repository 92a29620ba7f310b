//! Polymorphic single-key wrappers.
//!
//! [`AnyPublicKey`] and [`AnySignature`] tag a primitive key or signature
//! with its scheme variant so downstream code can store, serialize, and
//! verify mixed-scheme values uniformly. The variant is carried by the enum
//! arm itself, so the tag written on the wire always agrees with the wrapped
//! value — the two cannot drift apart.
//!
//! On the wire a wrapped value is the ULEB128 scheme tag followed by the
//! primitive's fixed-length canonical bytes; the length is implied by the
//! scheme, never written.

use crate::auth_key::{AuthenticationKey, SINGLE_KEY_SCHEME};
use crate::codec::{CanonicalDeserialize, CanonicalSerialize, Deserializer, Serializer};
use crate::ed25519::{Ed25519PrivateKey, Ed25519PublicKey, Ed25519Signature};
use crate::error::{CryptoError, CryptoResult};
use crate::secp256k1::{Secp256k1PrivateKey, Secp256k1PublicKey, Secp256k1Signature};
use crate::secp256r1::{Secp256r1PrivateKey, Secp256r1PublicKey, Secp256r1Signature};
use crate::traits::{PublicKey, Signature};
use std::fmt;

/// Supported signature scheme variants.
///
/// The discriminant doubles as the wire tag, written as a ULEB128 integer.
/// Adding a scheme means adding a variant here and an arm to each wrapper;
/// the compiler flags every match that needs updating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnyKeyVariant {
    /// Ed25519 key or signature.
    Ed25519 = 0,
    /// Secp256k1 ECDSA key or signature.
    Secp256k1 = 1,
    /// Secp256r1 (P-256) ECDSA key or signature.
    Secp256r1 = 2,
}

impl AnyKeyVariant {
    /// Gets the variant from a byte.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::UnknownVariant`] if the byte value is not an
    /// assigned variant.
    pub fn from_byte(byte: u8) -> CryptoResult<Self> {
        match byte {
            0 => Ok(Self::Ed25519),
            1 => Ok(Self::Secp256k1),
            2 => Ok(Self::Secp256r1),
            _ => Err(CryptoError::UnknownVariant(u64::from(byte))),
        }
    }

    /// Get the byte representation.
    pub fn as_byte(&self) -> u8 {
        *self as u8
    }
}

/// Reads a ULEB128 scheme tag and maps it to a variant.
fn read_variant(deserializer: &mut Deserializer<'_>) -> CryptoResult<AnyKeyVariant> {
    let tag = deserializer.deserialize_uleb128()?;
    match u8::try_from(tag) {
        Ok(byte) => AnyKeyVariant::from_byte(byte),
        Err(_) => Err(CryptoError::UnknownVariant(tag)),
    }
}

/// A public key of any supported signature scheme.
///
/// # Example
///
/// ```rust
/// use velor_crypto::ed25519::Ed25519PrivateKey;
/// use velor_crypto::single_key::AnyPublicKey;
///
/// let private_key = Ed25519PrivateKey::generate();
/// let any_key: AnyPublicKey = private_key.public_key().into();
///
/// let signature = private_key.sign(b"hello").into();
/// assert!(any_key.verify_signature(b"hello", &signature));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum AnyPublicKey {
    /// Ed25519 public key.
    Ed25519(Ed25519PublicKey),
    /// Secp256k1 ECDSA public key.
    Secp256k1(Secp256k1PublicKey),
    /// Secp256r1 (P-256) ECDSA public key.
    Secp256r1(Secp256r1PublicKey),
}

impl AnyPublicKey {
    /// Gets the signature scheme variant.
    pub fn variant(&self) -> AnyKeyVariant {
        match self {
            Self::Ed25519(_) => AnyKeyVariant::Ed25519,
            Self::Secp256k1(_) => AnyKeyVariant::Secp256k1,
            Self::Secp256r1(_) => AnyKeyVariant::Secp256r1,
        }
    }

    /// Returns the wrapped key's canonical bytes, without the scheme tag.
    pub fn key_bytes(&self) -> Vec<u8> {
        match self {
            Self::Ed25519(key) => key.to_bytes().to_vec(),
            Self::Secp256k1(key) => key.to_bytes(),
            Self::Secp256r1(key) => key.to_bytes(),
        }
    }

    /// Verifies a signature against a message.
    ///
    /// Returns `true` only if the signature's scheme matches this key's
    /// scheme and the underlying verification succeeds. A mismatched scheme
    /// pair compares as not verified; it is never an error.
    pub fn verify_signature(&self, message: &[u8], signature: &AnySignature) -> bool {
        match (self, signature) {
            (Self::Ed25519(key), AnySignature::Ed25519(sig)) => key.verify(message, sig).is_ok(),
            (Self::Secp256k1(key), AnySignature::Secp256k1(sig)) => {
                key.verify(message, sig).is_ok()
            }
            (Self::Secp256r1(key), AnySignature::Secp256r1(sig)) => {
                key.verify(message, sig).is_ok()
            }
            _ => false,
        }
    }

    /// Derives the authentication key for this key under the unified
    /// single-key scheme.
    ///
    /// The preimage is the key's canonical encoding (tag included), so the
    /// same curve point under two schemes derives two different accounts.
    pub fn auth_key(&self) -> AuthenticationKey {
        AuthenticationKey::from_preimage(&self.to_canonical_bytes(), SINGLE_KEY_SCHEME)
    }
}

impl From<Ed25519PublicKey> for AnyPublicKey {
    fn from(key: Ed25519PublicKey) -> Self {
        Self::Ed25519(key)
    }
}

impl From<Secp256k1PublicKey> for AnyPublicKey {
    fn from(key: Secp256k1PublicKey) -> Self {
        Self::Secp256k1(key)
    }
}

impl From<Secp256r1PublicKey> for AnyPublicKey {
    fn from(key: Secp256r1PublicKey) -> Self {
        Self::Secp256r1(key)
    }
}

impl CanonicalSerialize for AnyPublicKey {
    fn serialize(&self, serializer: &mut Serializer) {
        serializer.serialize_uleb128(u64::from(self.variant().as_byte()));
        serializer.serialize_fixed_bytes(&self.key_bytes());
    }
}

impl CanonicalDeserialize for AnyPublicKey {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> CryptoResult<Self> {
        match read_variant(deserializer)? {
            AnyKeyVariant::Ed25519 => {
                let bytes = deserializer.deserialize_fixed_bytes(Ed25519PublicKey::LENGTH)?;
                Ok(Self::Ed25519(Ed25519PublicKey::from_bytes(bytes)?))
            }
            AnyKeyVariant::Secp256k1 => {
                let bytes = deserializer.deserialize_fixed_bytes(Secp256k1PublicKey::LENGTH)?;
                Ok(Self::Secp256k1(Secp256k1PublicKey::from_bytes(bytes)?))
            }
            AnyKeyVariant::Secp256r1 => {
                let bytes = deserializer.deserialize_fixed_bytes(Secp256r1PublicKey::LENGTH)?;
                Ok(Self::Secp256r1(Secp256r1PublicKey::from_bytes(bytes)?))
            }
        }
    }
}

impl fmt::Debug for AnyPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnyPublicKey({:?}, 0x{})",
            self.variant(),
            hex::encode(self.key_bytes())
        )
    }
}

impl fmt::Display for AnyPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}:0x{}",
            self.variant(),
            hex::encode(self.key_bytes())
        )
    }
}

/// A signature of any supported signature scheme.
#[derive(Clone, PartialEq, Eq)]
pub enum AnySignature {
    /// Ed25519 signature.
    Ed25519(Ed25519Signature),
    /// Secp256k1 ECDSA signature.
    Secp256k1(Secp256k1Signature),
    /// Secp256r1 (P-256) ECDSA signature.
    Secp256r1(Secp256r1Signature),
}

impl AnySignature {
    /// Gets the signature scheme variant.
    pub fn variant(&self) -> AnyKeyVariant {
        match self {
            Self::Ed25519(_) => AnyKeyVariant::Ed25519,
            Self::Secp256k1(_) => AnyKeyVariant::Secp256k1,
            Self::Secp256r1(_) => AnyKeyVariant::Secp256r1,
        }
    }

    /// Returns the wrapped signature's canonical bytes, without the scheme
    /// tag.
    pub fn signature_bytes(&self) -> Vec<u8> {
        match self {
            Self::Ed25519(sig) => sig.to_bytes().to_vec(),
            Self::Secp256k1(sig) => sig.to_bytes().to_vec(),
            Self::Secp256r1(sig) => sig.to_bytes().to_vec(),
        }
    }
}

impl From<Ed25519Signature> for AnySignature {
    fn from(signature: Ed25519Signature) -> Self {
        Self::Ed25519(signature)
    }
}

impl From<Secp256k1Signature> for AnySignature {
    fn from(signature: Secp256k1Signature) -> Self {
        Self::Secp256k1(signature)
    }
}

impl From<Secp256r1Signature> for AnySignature {
    fn from(signature: Secp256r1Signature) -> Self {
        Self::Secp256r1(signature)
    }
}

impl CanonicalSerialize for AnySignature {
    fn serialize(&self, serializer: &mut Serializer) {
        serializer.serialize_uleb128(u64::from(self.variant().as_byte()));
        serializer.serialize_fixed_bytes(&self.signature_bytes());
    }
}

impl CanonicalDeserialize for AnySignature {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> CryptoResult<Self> {
        match read_variant(deserializer)? {
            AnyKeyVariant::Ed25519 => {
                let bytes = deserializer.deserialize_fixed_bytes(Ed25519Signature::LENGTH)?;
                Ok(Self::Ed25519(Ed25519Signature::from_bytes(bytes)?))
            }
            AnyKeyVariant::Secp256k1 => {
                let bytes = deserializer.deserialize_fixed_bytes(Secp256k1Signature::LENGTH)?;
                Ok(Self::Secp256k1(Secp256k1Signature::from_bytes(bytes)?))
            }
            AnyKeyVariant::Secp256r1 => {
                let bytes = deserializer.deserialize_fixed_bytes(Secp256r1Signature::LENGTH)?;
                Ok(Self::Secp256r1(Secp256r1Signature::from_bytes(bytes)?))
            }
        }
    }
}

impl fmt::Debug for AnySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnySignature({:?}, {} bytes)",
            self.variant(),
            self.signature_bytes().len()
        )
    }
}

/// A private key of any supported signature scheme.
#[derive(Clone)]
pub enum AnyPrivateKey {
    /// Ed25519 private key.
    Ed25519(Ed25519PrivateKey),
    /// Secp256k1 ECDSA private key.
    Secp256k1(Secp256k1PrivateKey),
    /// Secp256r1 (P-256) ECDSA private key.
    Secp256r1(Secp256r1PrivateKey),
}

impl AnyPrivateKey {
    /// Gets the signature scheme variant.
    pub fn variant(&self) -> AnyKeyVariant {
        match self {
            Self::Ed25519(_) => AnyKeyVariant::Ed25519,
            Self::Secp256k1(_) => AnyKeyVariant::Secp256k1,
            Self::Secp256r1(_) => AnyKeyVariant::Secp256r1,
        }
    }

    /// Gets the public key.
    pub fn public_key(&self) -> AnyPublicKey {
        match self {
            Self::Ed25519(key) => AnyPublicKey::Ed25519(key.public_key()),
            Self::Secp256k1(key) => AnyPublicKey::Secp256k1(key.public_key()),
            Self::Secp256r1(key) => AnyPublicKey::Secp256r1(key.public_key()),
        }
    }

    /// Signs a message.
    pub fn sign(&self, message: &[u8]) -> AnySignature {
        match self {
            Self::Ed25519(key) => AnySignature::Ed25519(key.sign(message)),
            Self::Secp256k1(key) => AnySignature::Secp256k1(key.sign(message)),
            Self::Secp256r1(key) => AnySignature::Secp256r1(key.sign(message)),
        }
    }
}

impl From<Ed25519PrivateKey> for AnyPrivateKey {
    fn from(key: Ed25519PrivateKey) -> Self {
        Self::Ed25519(key)
    }
}

impl From<Secp256k1PrivateKey> for AnyPrivateKey {
    fn from(key: Secp256k1PrivateKey) -> Self {
        Self::Secp256k1(key)
    }
}

impl From<Secp256r1PrivateKey> for AnyPrivateKey {
    fn from(key: Secp256r1PrivateKey) -> Self {
        Self::Secp256r1(key)
    }
}

impl fmt::Debug for AnyPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnyPrivateKey({:?})", self.variant())
    }
}

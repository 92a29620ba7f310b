//! `MultiKey` threshold signature scheme implementation.
//!
//! A [`MultiKey`] is an ordered set of [`AnyPublicKey`]s plus a required
//! signature threshold, defining a K-of-N authentication policy where each
//! key can be a different scheme (e.g. 2-of-3 with one Ed25519 key and two
//! Secp256k1 keys). A [`MultiKeySignature`] pairs a signer bitmap with the
//! signatures for its set bits, in ascending bit order.

use crate::auth_key::{AuthenticationKey, MULTI_KEY_SCHEME};
use crate::bitmap::{self, BITMAP_NUM_OF_BYTES, SignerBitmap};
use crate::codec::{CanonicalDeserialize, CanonicalSerialize, Deserializer, Serializer};
use crate::error::{CryptoError, CryptoResult};
use crate::single_key::{AnyPublicKey, AnySignature};
use std::fmt;

/// Maximum number of keys in a multi-key set, bounded by the signer bitmap.
pub const MAX_NUM_OF_KEYS: usize = bitmap::NUM_SLOTS;

// The bitmap addresses every key slot by u8 index.
const _: () = assert!(MAX_NUM_OF_KEYS <= u8::MAX as usize);

/// Minimum threshold (at least 1 signature required).
pub const MIN_THRESHOLD: u8 = 1;

/// A threshold key set supporting mixed signature schemes.
///
/// Key order is significant: a key's position is its bit index in the signer
/// bitmap. The set is immutable once constructed.
///
/// # Example
///
/// ```rust
/// use velor_crypto::ed25519::Ed25519PrivateKey;
/// use velor_crypto::multi_key::MultiKey;
///
/// let keys: Vec<_> = (0..3)
///     .map(|_| Ed25519PrivateKey::generate().public_key())
///     .collect();
/// let multi_key = MultiKey::new(keys, 2).unwrap();
///
/// assert_eq!(multi_key.num_keys(), 3);
/// assert_eq!(multi_key.threshold(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MultiKey {
    /// The individual public keys.
    public_keys: Vec<AnyPublicKey>,
    /// The required threshold (K in K-of-N).
    threshold: u8,
}

impl MultiKey {
    /// Creates a new threshold key set.
    ///
    /// Primitive keys are accepted directly and normalized into
    /// [`AnyPublicKey`]s.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::TooManyKeys`] if more than 32 keys are
    /// supplied, or [`CryptoError::InvalidThreshold`] if the threshold is
    /// zero or exceeds the number of keys.
    pub fn new<K: Into<AnyPublicKey>>(public_keys: Vec<K>, threshold: u8) -> CryptoResult<Self> {
        let public_keys: Vec<AnyPublicKey> = public_keys.into_iter().map(Into::into).collect();
        if public_keys.len() > MAX_NUM_OF_KEYS {
            return Err(CryptoError::TooManyKeys {
                count: public_keys.len(),
                max: MAX_NUM_OF_KEYS,
            });
        }
        if threshold < MIN_THRESHOLD || usize::from(threshold) > public_keys.len() {
            return Err(CryptoError::InvalidThreshold {
                threshold,
                num_keys: public_keys.len(),
            });
        }
        Ok(Self {
            public_keys,
            threshold,
        })
    }

    /// Returns the number of public keys.
    pub fn num_keys(&self) -> usize {
        self.public_keys.len()
    }

    /// Returns the threshold.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Returns the individual public keys.
    pub fn public_keys(&self) -> &[AnyPublicKey] {
        &self.public_keys
    }

    /// Returns the key at the given index.
    pub fn get(&self, index: usize) -> Option<&AnyPublicKey> {
        self.public_keys.get(index)
    }

    /// Builds a signer bitmap for the given positions in this key set.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::IndexOutOfRange`] if a position is not below
    /// the key count, or [`CryptoError::DuplicateIndex`] if one repeats.
    pub fn create_bitmap(&self, indices: &[u8]) -> CryptoResult<SignerBitmap> {
        bitmap::encode(indices, self.public_keys.len())
    }

    /// Verifies a threshold signature against a message.
    ///
    /// Each set bit in the signature's bitmap names a key slot; the
    /// signature at the matching position must verify against that key.
    /// Returns `true` only if every claimed signer verifies and the number
    /// of signers reaches the threshold.
    pub fn verify_signature(&self, message: &[u8], signature: &MultiKeySignature) -> bool {
        // The bitmap's set-bit count equals the signature count by
        // construction, so zip pairs them exactly.
        if signature.num_signatures() < usize::from(self.threshold) {
            return false;
        }
        for (index, sig) in bitmap::set_indices(signature.bitmap()).zip(signature.signatures()) {
            match self.get(usize::from(index)) {
                Some(key) if key.verify_signature(message, sig) => {}
                _ => return false,
            }
        }
        true
    }

    /// Derives the authentication key for this key set under the multi-key
    /// scheme.
    pub fn auth_key(&self) -> AuthenticationKey {
        AuthenticationKey::from_preimage(&self.to_canonical_bytes(), MULTI_KEY_SCHEME)
    }
}

impl CanonicalSerialize for MultiKey {
    fn serialize(&self, serializer: &mut Serializer) {
        serializer.serialize_sequence(&self.public_keys);
        serializer.serialize_u8(self.threshold);
    }
}

impl CanonicalDeserialize for MultiKey {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> CryptoResult<Self> {
        let public_keys: Vec<AnyPublicKey> = deserializer.deserialize_sequence()?;
        let threshold = deserializer.deserialize_u8()?;
        // Decoded values satisfy the same invariants as constructed ones.
        Self::new(public_keys, threshold)
    }
}

impl fmt::Debug for MultiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MultiKey({}-of-{} keys)",
            self.threshold,
            self.public_keys.len()
        )
    }
}

impl fmt::Display for MultiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_canonical_bytes()))
    }
}

/// A threshold signature: a signer bitmap plus the signatures for its set
/// bits.
///
/// The i-th signature corresponds to the i-th set bit of the bitmap in
/// ascending bit-index order. The signature count is never written on the
/// wire; it is always recoverable as the bitmap's set-bit count.
#[derive(Clone, PartialEq, Eq)]
pub struct MultiKeySignature {
    /// Signatures ordered by ascending signer index.
    signatures: Vec<AnySignature>,
    /// Bitmap naming the signer slots that produced the signatures.
    bitmap: SignerBitmap,
}

impl MultiKeySignature {
    /// Creates a threshold signature from signatures and a raw bitmap.
    ///
    /// The signatures must be ordered by ascending signer index, matching
    /// the bitmap's set bits. The bitmap bytes are copied; the caller's
    /// buffer is not retained.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidBitmapLength`] if the bitmap is not
    /// exactly 4 bytes, [`CryptoError::TooManySignatures`] if more than 32
    /// signatures are supplied, or [`CryptoError::SignatureCountMismatch`]
    /// if the bitmap's set-bit count differs from the signature count.
    pub fn new<S: Into<AnySignature>>(signatures: Vec<S>, bitmap_bytes: &[u8]) -> CryptoResult<Self> {
        if bitmap_bytes.len() != BITMAP_NUM_OF_BYTES {
            return Err(CryptoError::InvalidBitmapLength {
                expected: BITMAP_NUM_OF_BYTES,
                got: bitmap_bytes.len(),
            });
        }
        let mut bitmap = [0u8; BITMAP_NUM_OF_BYTES];
        bitmap.copy_from_slice(bitmap_bytes);
        Self::from_parts(signatures.into_iter().map(Into::into).collect(), bitmap)
    }

    /// Creates a threshold signature from signatures and signer indices.
    ///
    /// The signatures must be ordered by ascending signer index.
    ///
    /// # Errors
    ///
    /// Returns the bitmap encoding errors of [`bitmap::encode`] in addition
    /// to the count checks of [`MultiKeySignature::new`].
    pub fn from_indices<S: Into<AnySignature>>(
        signatures: Vec<S>,
        indices: &[u8],
    ) -> CryptoResult<Self> {
        let bitmap = bitmap::encode(indices, bitmap::NUM_SLOTS)?;
        Self::from_parts(signatures.into_iter().map(Into::into).collect(), bitmap)
    }

    /// Creates a threshold signature from `(signer_index, signature)` pairs.
    ///
    /// The pairs may arrive in any order; they are sorted by index before
    /// the bitmap is built.
    pub fn from_signers(mut signatures: Vec<(u8, AnySignature)>) -> CryptoResult<Self> {
        signatures.sort_by_key(|(index, _)| *index);
        let indices: Vec<u8> = signatures.iter().map(|(index, _)| *index).collect();
        let bitmap = bitmap::encode(&indices, bitmap::NUM_SLOTS)?;
        Self::from_parts(
            signatures.into_iter().map(|(_, sig)| sig).collect(),
            bitmap,
        )
    }

    /// Central cross-check binding the two independently supplied fields.
    fn from_parts(signatures: Vec<AnySignature>, bitmap: SignerBitmap) -> CryptoResult<Self> {
        if signatures.len() > MAX_NUM_OF_KEYS {
            return Err(CryptoError::TooManySignatures {
                count: signatures.len(),
                max: MAX_NUM_OF_KEYS,
            });
        }
        let bitmap_count = bitmap::count_ones(&bitmap) as usize;
        if bitmap_count != signatures.len() {
            return Err(CryptoError::SignatureCountMismatch {
                bitmap_count,
                signature_count: signatures.len(),
            });
        }
        Ok(Self { signatures, bitmap })
    }

    /// Returns the number of signatures.
    pub fn num_signatures(&self) -> usize {
        self.signatures.len()
    }

    /// Returns the signatures, ordered by ascending signer index.
    pub fn signatures(&self) -> &[AnySignature] {
        &self.signatures
    }

    /// Returns the signer bitmap.
    pub fn bitmap(&self) -> &SignerBitmap {
        &self.bitmap
    }

    /// Checks if a particular signer index contributed a signature.
    pub fn has_signature(&self, index: u8) -> bool {
        bitmap::is_set(&self.bitmap, index)
    }
}

impl CanonicalSerialize for MultiKeySignature {
    fn serialize(&self, serializer: &mut Serializer) {
        serializer.serialize_bytes(&self.bitmap);
        // No count prefix: the reader recovers it from the bitmap.
        for signature in &self.signatures {
            signature.serialize(serializer);
        }
    }
}

impl CanonicalDeserialize for MultiKeySignature {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> CryptoResult<Self> {
        let bitmap_bytes = deserializer.deserialize_bytes()?;
        if bitmap_bytes.len() != BITMAP_NUM_OF_BYTES {
            return Err(CryptoError::InvalidBitmapLength {
                expected: BITMAP_NUM_OF_BYTES,
                got: bitmap_bytes.len(),
            });
        }
        let mut bitmap = [0u8; BITMAP_NUM_OF_BYTES];
        bitmap.copy_from_slice(bitmap_bytes);

        let expected = bitmap::count_ones(&bitmap) as usize;
        let mut signatures = Vec::with_capacity(expected);
        for _ in 0..expected {
            signatures.push(AnySignature::deserialize(deserializer)?);
        }
        Self::from_parts(signatures, bitmap)
    }
}

impl fmt::Debug for MultiKeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MultiKeySignature({} signatures, bitmap={:?})",
            self.signatures.len(),
            self.bitmap
        )
    }
}

impl fmt::Display for MultiKeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_canonical_bytes()))
    }
}

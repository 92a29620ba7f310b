//! Error types for Velor cryptographic operations.
//!
//! This module provides a unified error type [`CryptoError`] covering key
//! material validation, canonical decoding, and threshold bookkeeping.

use thiserror::Error;

/// A specialized Result type for Velor crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// The error type for Velor cryptographic operations.
///
/// Every validation failure is reported eagerly, at construction or decode
/// time. No value of a key, signature, or bitmap type can exist in a state
/// that violates its invariants.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Invalid public key material
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Invalid private key material
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Invalid signature material
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Invalid authentication key material
    #[error("Invalid authentication key: {0}")]
    InvalidAuthenticationKey(String),

    /// Error occurred during hex encoding/decoding
    #[error("Hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Decoded a scheme tag outside the enumerated set
    #[error("Unknown key scheme variant: {0}")]
    UnknownVariant(u64),

    /// Threshold is zero or exceeds the number of keys
    #[error("Invalid threshold: {threshold} of {num_keys} keys")]
    InvalidThreshold {
        /// The rejected threshold
        threshold: u8,
        /// Number of keys in the set
        num_keys: usize,
    },

    /// More keys than the signer bitmap can address
    #[error("Too many keys: {count} (max {max})")]
    TooManyKeys {
        /// Number of keys supplied
        count: usize,
        /// Maximum number of keys supported
        max: usize,
    },

    /// A signer index appeared more than once
    #[error("Duplicate signer index {0}")]
    DuplicateIndex(u8),

    /// A signer index exceeds the valid slot range
    #[error("Signer index {index} out of range (max {max})")]
    IndexOutOfRange {
        /// The rejected index
        index: u8,
        /// Largest valid index
        max: usize,
    },

    /// More signatures than the signer bitmap can address
    #[error("Too many signatures: {count} (max {max})")]
    TooManySignatures {
        /// Number of signatures supplied
        count: usize,
        /// Maximum number of signatures supported
        max: usize,
    },

    /// A raw signer bitmap was not exactly the required length
    #[error("Invalid bitmap length: expected {expected} bytes, got {got}")]
    InvalidBitmapLength {
        /// Required bitmap length in bytes
        expected: usize,
        /// Length of the supplied bitmap
        got: usize,
    },

    /// The bitmap's set-bit count disagrees with the signature count
    #[error(
        "Signature count mismatch: bitmap has {bitmap_count} set bits, got {signature_count} signatures"
    )]
    SignatureCountMismatch {
        /// Number of set bits in the bitmap
        bitmap_count: usize,
        /// Number of signatures supplied
        signature_count: usize,
    },

    /// Decoding ran out of input before the expected length was satisfied
    #[error("Truncated input: needed {needed} more bytes, {remaining} remaining")]
    TruncatedInput {
        /// Bytes the decoder still needed
        needed: usize,
        /// Bytes left in the input
        remaining: usize,
    },

    /// Decoding finished with unconsumed input left over
    #[error("Trailing input: {0} bytes left over after value")]
    TrailingInput(usize),

    /// A variable-length integer was not in canonical (smallest) form
    #[error("Invalid ULEB128 encoding: {0}")]
    InvalidUleb128(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CryptoError::InvalidPublicKey("bad key".to_string());
        assert_eq!(err.to_string(), "Invalid public key: bad key");
    }

    #[test]
    fn test_threshold_error_display() {
        let err = CryptoError::InvalidThreshold {
            threshold: 4,
            num_keys: 3,
        };
        assert!(err.to_string().contains("4"));
        assert!(err.to_string().contains("3"));
    }

    #[test]
    fn test_unknown_variant_display() {
        let err = CryptoError::UnknownVariant(99);
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_count_mismatch_display() {
        let err = CryptoError::SignatureCountMismatch {
            bitmap_count: 3,
            signature_count: 2,
        };
        assert!(err.to_string().contains("3 set bits"));
        assert!(err.to_string().contains("2 signatures"));
    }
}

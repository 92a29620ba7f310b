//! # Velor Crypto
//!
//! Cryptographic key and signature types for the Velor SDK.
//!
//! This crate implements the key/signature abstraction used to authenticate
//! Velor accounts: accounts secured by a single key of any supported scheme,
//! and accounts secured by a K-of-N threshold policy over multiple
//! heterogeneous keys. Values serialize to a strict canonical binary format
//! that other Velor implementations agree with byte for byte.
//!
//! ## Quick Start
//!
//! ```rust
//! use velor_crypto::ed25519::Ed25519PrivateKey;
//! use velor_crypto::multi_key::{MultiKey, MultiKeySignature};
//!
//! // A 2-of-3 threshold key set
//! let signers: Vec<_> = (0..3).map(|_| Ed25519PrivateKey::generate()).collect();
//! let public_keys: Vec<_> = signers.iter().map(|k| k.public_key()).collect();
//! let multi_key = MultiKey::new(public_keys, 2).unwrap();
//!
//! // Keys 0 and 2 sign
//! let message = b"transfer 100 coins";
//! let signature = MultiKeySignature::from_signers(vec![
//!     (0, signers[0].sign(message).into()),
//!     (2, signers[2].sign(message).into()),
//! ])
//! .unwrap();
//!
//! assert!(multi_key.verify_signature(message, &signature));
//! println!("account auth key: {}", multi_key.auth_key());
//! ```
//!
//! ## Modules
//!
//! - [`ed25519`], [`secp256k1`], [`secp256r1`] - Primitive signature schemes
//! - [`single_key`] - Scheme-tagged polymorphic wrappers
//! - [`multi_key`] - K-of-N threshold key sets and signatures
//! - [`bitmap`] - Signer bitmap codec
//! - [`auth_key`] - Authentication key derivation
//! - [`codec`] - Canonical binary serialization
//! - [`hash`] - Hash functions
//!
//! All operations are pure, synchronous, CPU-bound computations over
//! immutable values; nothing here performs I/O or retains shared mutable
//! state.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod auth_key;
pub mod bitmap;
pub mod codec;
pub mod ed25519;
pub mod error;
pub mod hash;
pub mod multi_key;
pub mod secp256k1;
pub mod secp256r1;
pub mod single_key;
pub mod traits;

// Re-export commonly used types
pub use auth_key::AuthenticationKey;
pub use codec::{CanonicalDeserialize, CanonicalSerialize};
pub use error::{CryptoError, CryptoResult};
pub use multi_key::{MultiKey, MultiKeySignature};
pub use single_key::{AnyKeyVariant, AnyPrivateKey, AnyPublicKey, AnySignature};

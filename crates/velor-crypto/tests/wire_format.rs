//! Wire-format tests.
//!
//! These pin the canonical byte layout that other Velor implementations
//! produce and consume. The fixed vectors here must never change; a failure
//! means the crate no longer agrees with the rest of the ecosystem.

use velor_crypto::auth_key::{derive_authentication_key, MULTI_KEY_SCHEME, SINGLE_KEY_SCHEME};
use velor_crypto::ed25519::Ed25519PrivateKey;
use velor_crypto::secp256k1::Secp256k1PrivateKey;
use velor_crypto::secp256r1::Secp256r1PrivateKey;
use velor_crypto::{
    AnyPublicKey, AnySignature, CanonicalDeserialize, CanonicalSerialize, CryptoError, MultiKey,
    MultiKeySignature,
};

/// A fixed Ed25519 private key so the vectors below are stable.
const ED25519_SEED_HEX: &str = "9bf49a6a0755f953811fce125f2683d50429c3bb49e074147e0089a52eae155f";

fn fixed_ed25519_key() -> Ed25519PrivateKey {
    Ed25519PrivateKey::from_hex(ED25519_SEED_HEX).unwrap()
}

#[test]
fn ed25519_any_key_is_tag_then_raw_key() {
    let public_key = fixed_ed25519_key().public_key();
    let any_key = AnyPublicKey::from(public_key);

    let mut expected = vec![0x00];
    expected.extend_from_slice(&public_key.to_bytes());

    assert_eq!(any_key.to_canonical_bytes(), expected);

    let restored = AnyPublicKey::from_canonical_bytes(&expected).unwrap();
    assert_eq!(any_key, restored);
}

#[test]
fn any_key_roundtrip_every_scheme() {
    let keys: Vec<AnyPublicKey> = vec![
        Ed25519PrivateKey::generate().public_key().into(),
        Secp256k1PrivateKey::generate().public_key().into(),
        Secp256r1PrivateKey::generate().public_key().into(),
    ];

    for key in keys {
        let bytes = key.to_canonical_bytes();
        let restored = AnyPublicKey::from_canonical_bytes(&bytes).unwrap();
        assert_eq!(key, restored);
    }
}

#[test]
fn any_signature_roundtrip_every_scheme() {
    let message = b"wire format";
    let signatures: Vec<AnySignature> = vec![
        Ed25519PrivateKey::generate().sign(message).into(),
        Secp256k1PrivateKey::generate().sign(message).into(),
        Secp256r1PrivateKey::generate().sign(message).into(),
    ];

    for signature in signatures {
        let bytes = signature.to_canonical_bytes();
        let restored = AnySignature::from_canonical_bytes(&bytes).unwrap();
        assert_eq!(signature, restored);
    }
}

#[test]
fn unassigned_tag_is_rejected() {
    let mut bytes = vec![99u8];
    bytes.extend_from_slice(&[0u8; 32]);
    assert!(matches!(
        AnyPublicKey::from_canonical_bytes(&bytes),
        Err(CryptoError::UnknownVariant(99))
    ));
}

#[test]
fn non_minimal_tag_encoding_is_rejected() {
    // 0x80 0x00 is tag 0 spelled in two bytes; canonical form is one.
    let mut bytes = vec![0x80, 0x00];
    bytes.extend_from_slice(&fixed_ed25519_key().public_key().to_bytes());
    assert!(matches!(
        AnyPublicKey::from_canonical_bytes(&bytes),
        Err(CryptoError::InvalidUleb128(_))
    ));
}

#[test]
fn multi_key_layout() {
    let signers: Vec<_> = (0..3).map(|_| Ed25519PrivateKey::generate()).collect();
    let public_keys: Vec<_> = signers.iter().map(|k| k.public_key()).collect();
    let multi_key = MultiKey::new(public_keys.clone(), 2).unwrap();

    // ULEB128 key count, each key as tag || raw bytes, then the threshold.
    let bytes = multi_key.to_canonical_bytes();
    assert_eq!(bytes[0], 0x03);
    let mut offset = 1;
    for public_key in &public_keys {
        assert_eq!(bytes[offset], 0x00);
        assert_eq!(
            &bytes[offset + 1..offset + 33],
            public_key.to_bytes().as_slice()
        );
        offset += 33;
    }
    assert_eq!(bytes[offset], 0x02);
    assert_eq!(bytes.len(), offset + 1);

    let restored = MultiKey::from_canonical_bytes(&bytes).unwrap();
    assert_eq!(multi_key, restored);
}

#[test]
fn multi_key_signature_layout_for_signers_0_and_2() {
    let signers: Vec<_> = (0..3).map(|_| Ed25519PrivateKey::generate()).collect();
    let public_keys: Vec<_> = signers.iter().map(|k| k.public_key()).collect();
    let multi_key = MultiKey::new(public_keys, 2).unwrap();

    let message = b"2-of-3";
    let multi_sig = MultiKeySignature::from_signers(vec![
        (0, signers[0].sign(message).into()),
        (2, signers[2].sign(message).into()),
    ])
    .unwrap();

    // Signers {0, 2} set the two highest bits of byte 0.
    assert_eq!(multi_sig.bitmap(), &[0b1010_0000, 0x00, 0x00, 0x00]);

    // Length-prefixed bitmap, then each signature with no count field.
    let bytes = multi_sig.to_canonical_bytes();
    assert_eq!(&bytes[..5], &[0x04, 0b1010_0000, 0x00, 0x00, 0x00]);
    assert_eq!(bytes.len(), 5 + 2 * 65);

    // The decoder recovers the signature count from the bitmap alone.
    let restored = MultiKeySignature::from_canonical_bytes(&bytes).unwrap();
    assert_eq!(restored.num_signatures(), 2);
    assert!(multi_key.verify_signature(message, &restored));
}

#[test]
fn multi_key_signature_truncation_is_an_error() {
    let signers: Vec<_> = (0..2).map(|_| Ed25519PrivateKey::generate()).collect();
    let message = b"short read";
    let multi_sig = MultiKeySignature::from_signers(vec![
        (0, signers[0].sign(message).into()),
        (1, signers[1].sign(message).into()),
    ])
    .unwrap();

    let bytes = multi_sig.to_canonical_bytes();
    for cut in [bytes.len() - 1, bytes.len() - 65, 5, 3] {
        assert!(
            MultiKeySignature::from_canonical_bytes(&bytes[..cut]).is_err(),
            "decoding {cut} bytes should fail"
        );
    }
}

#[test]
fn multi_key_roundtrip_mixed_schemes() {
    let public_keys: Vec<AnyPublicKey> = vec![
        Ed25519PrivateKey::generate().public_key().into(),
        Secp256k1PrivateKey::generate().public_key().into(),
        Secp256r1PrivateKey::generate().public_key().into(),
    ];
    let multi_key = MultiKey::new(public_keys, 2).unwrap();

    let bytes = multi_key.to_canonical_bytes();
    let restored = MultiKey::from_canonical_bytes(&bytes).unwrap();
    assert_eq!(multi_key, restored);
    assert_eq!(multi_key.auth_key(), restored.auth_key());
}

#[test]
fn auth_key_scheme_separation_on_the_wire() {
    let any_key = AnyPublicKey::from(fixed_ed25519_key().public_key());
    let bytes = any_key.to_canonical_bytes();

    // The single-key and multi-key schemes are domain separators over the
    // same preimage bytes.
    assert_ne!(
        derive_authentication_key(&bytes, SINGLE_KEY_SCHEME),
        derive_authentication_key(&bytes, MULTI_KEY_SCHEME)
    );
    assert_eq!(
        any_key.auth_key().to_bytes(),
        derive_authentication_key(&bytes, SINGLE_KEY_SCHEME)
    );
}

#[test]
fn fixed_ed25519_vector() {
    // Pinned end-to-end vector: key bytes and the derived wrapper encoding.
    let public_key = fixed_ed25519_key().public_key();
    let any_key = AnyPublicKey::from(public_key);
    let encoded = hex::encode(any_key.to_canonical_bytes());

    // Tag 00 followed by the 64 hex chars of the public key.
    assert_eq!(encoded.len(), 66);
    assert!(encoded.starts_with("00"));
    assert_eq!(&encoded[2..], hex::encode(public_key.to_bytes()));

    // Decoding the hex vector reconstructs an equal wrapper.
    let decoded = AnyPublicKey::from_canonical_bytes(&hex::decode(&encoded).unwrap()).unwrap();
    assert_eq!(decoded, any_key);
}

//! End to end properties of the verification pipeline.
use ecverify::{
    decode, digest, identity_from_public_key,
    primitives::{alloy_primitives::U256, keccak256, Identity, B256, SECP256K1_ORDER},
    verify, verify_message, DigestInput, Signature, SignatureError, VerificationResult,
};
use k256::ecdsa::SigningKey;
use rstest::rstest;

const MESSAGE: &[u8] = b"Hello, Ethereum!";

/// Deterministic stand in for a freshly generated key.
fn key(seed: u64) -> SigningKey {
    SigningKey::from_slice(keccak256(seed.to_be_bytes()).as_slice()).unwrap()
}

fn identity(key: &SigningKey) -> Identity {
    let point = key.verifying_key().to_encoded_point(false);
    identity_from_public_key(point.as_bytes().try_into().unwrap())
}

/// Signs like `personal_sign`: legacy `v`.
fn sign(key: &SigningKey, message: &[u8]) -> [u8; 65] {
    let (sig, recid) = key
        .sign_prehash_recoverable(digest(message).as_slice())
        .unwrap();
    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&sig.to_bytes());
    out[64] = recid.to_byte() + 27;
    out
}

#[test]
fn hello_ethereum_scenario() {
    let key = key(0);
    let signer = identity(&key);
    let signature = sign(&key, MESSAGE);

    assert_eq!(
        verify_message(MESSAGE, &signature, &signer),
        VerificationResult::Valid
    );

    let other = identity(&self::key(1));
    assert_ne!(other, signer);
    assert_eq!(
        verify_message(MESSAGE, &signature, &other),
        VerificationResult::IdentityMismatch
    );

    assert_eq!(
        verify_message(MESSAGE, &signature[..64], &signer),
        VerificationResult::InvalidSignatureEncoding(SignatureError::InvalidLength { len: 64 })
    );
}

#[rstest]
#[case::empty(b"")]
#[case::hello(MESSAGE)]
#[case::multiline(b"line one\nline two\n")]
#[case::binary(&[0x19u8, 0x00, 0xff, 0x80])]
#[case::kilobyte(&[0x5au8; 1024])]
fn soundness(#[case] message: &[u8]) {
    for seed in 0..8 {
        let key = key(seed);
        let signature = sign(&key, message);
        assert!(verify(DigestInput::Message(message), &signature, &identity(&key)).is_valid());
        assert!(verify(
            DigestInput::Digest(digest(message)),
            &signature,
            &identity(&key)
        )
        .is_valid());
    }
}

#[test]
fn raw_recovery_id_verifies_too() {
    let key = key(7);
    let mut signature = sign(&key, MESSAGE);
    signature[64] -= 27;
    assert!(verify_message(MESSAGE, &signature, &identity(&key)).is_valid());
}

#[test]
fn single_bit_flips_never_verify() {
    let key = key(3);
    let signer = identity(&key);
    let signature = sign(&key, MESSAGE);

    for byte in 0..signature.len() {
        for bit in 0..8 {
            let mut forged = signature;
            forged[byte] ^= 1 << bit;
            let result = verify_message(MESSAGE, &forged, &signer);
            assert!(
                matches!(
                    result,
                    VerificationResult::IdentityMismatch
                        | VerificationResult::RecoveryFailed
                        | VerificationResult::InvalidSignatureEncoding(_)
                ),
                "byte {byte} bit {bit}: {result:?}"
            );
            // r and s flips that still decode must fail cryptographically
            if byte < 64 && decode(&forged).is_ok() {
                assert!(
                    matches!(
                        result,
                        VerificationResult::IdentityMismatch | VerificationResult::RecoveryFailed
                    ),
                    "byte {byte} bit {bit}: {result:?}"
                );
            }
        }
    }
}

#[test]
fn message_bit_flips_never_verify() {
    let key = key(4);
    let signer = identity(&key);
    let signature = sign(&key, MESSAGE);

    for byte in 0..MESSAGE.len() {
        for bit in 0..8 {
            let mut forged = MESSAGE.to_vec();
            forged[byte] ^= 1 << bit;
            let result = verify_message(&forged, &signature, &signer);
            assert!(
                matches!(
                    result,
                    VerificationResult::IdentityMismatch | VerificationResult::RecoveryFailed
                ),
                "byte {byte} bit {bit}: {result:?}"
            );
        }
    }
}

#[test]
fn high_s_twin_is_rejected() {
    let key = key(5);
    let signature = sign(&key, MESSAGE);

    // (r, n - s, v ^ 1) is the malleated twin: it recovers the same key.
    let s = U256::from_be_slice(&signature[32..64]);
    let high_s = U256::from_be_bytes(SECP256K1_ORDER.0) - s;
    let mut twin = signature;
    twin[32..64].copy_from_slice(&high_s.to_be_bytes::<32>());
    twin[64] = if signature[64] == 27 { 28 } else { 27 };

    assert_eq!(
        verify_message(MESSAGE, &twin, &identity(&key)),
        VerificationResult::InvalidSignatureEncoding(SignatureError::NonCanonicalS)
    );
}

#[test]
fn round_trip() {
    // valid signatures in both recovery id forms
    for seed in 0..16 {
        let mut signature = sign(&key(seed), MESSAGE);
        assert_eq!(decode(&signature).unwrap().encode(), signature);
        signature[64] -= 27;
        assert_eq!(decode(&signature).unwrap().encode(), signature);
    }

    // arbitrary bytes: whatever decodes re-encodes to itself
    let mut decoded = 0;
    for seed in 0u64..256 {
        let mut input = [0u8; 65];
        input[..32].copy_from_slice(keccak256(seed.to_le_bytes()).as_slice());
        let s = keccak256(keccak256(seed.to_le_bytes()));
        input[32..64].copy_from_slice(s.as_slice());
        input[64] = [0, 1, 27, 28][(seed % 4) as usize];
        if let Ok(signature) = Signature::decode(&input) {
            decoded += 1;
            assert_eq!(signature.encode(), input);
            assert_eq!(signature.to_string().parse::<Signature>(), Ok(signature));
        }
    }
    // about half of uniformly random s values are in the lower half
    assert!(decoded > 64, "only {decoded} inputs decoded");
}

#[test]
fn digest_is_deterministic() {
    let first: B256 = digest(MESSAGE);
    for _ in 0..4 {
        assert_eq!(digest(MESSAGE), first);
    }
}

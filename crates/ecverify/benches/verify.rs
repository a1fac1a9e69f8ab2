#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecverify::{
    decode, digest, identity_from_public_key, primitives::keccak256, recover::k256 as k256_backend,
    verify_message,
};
use k256::ecdsa::SigningKey;

/// Benchmarks the stages of verification and the full pipeline.
pub fn benchmark_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");

    let message = b"Hello, Ethereum!";
    let key = SigningKey::from_slice(keccak256(b"bench").as_slice()).unwrap();
    let point = key.verifying_key().to_encoded_point(false);
    let signer = identity_from_public_key(point.as_bytes().try_into().unwrap());

    let hashed = digest(message);
    let (sig, recid) = key.sign_prehash_recoverable(hashed.as_slice()).unwrap();
    let mut signature = [0u8; 65];
    signature[..64].copy_from_slice(&sig.to_bytes());
    signature[64] = recid.to_byte() + 27;
    let decoded = decode(&signature).unwrap();

    group.bench_function("digest", |b| b.iter(|| digest(black_box(message))));
    group.bench_function("decode", |b| b.iter(|| decode(black_box(&signature))));
    group.bench_function("recover", |b| {
        b.iter(|| ecverify::recover(black_box(&hashed), black_box(&decoded)))
    });
    group.bench_function("recover k256", |b| {
        b.iter(|| k256_backend::recover_public_key(black_box(&hashed), black_box(&decoded)))
    });
    group.bench_function("verify message", |b| {
        b.iter(|| verify_message(black_box(message), black_box(&signature), &signer))
    });

    group.finish();
}

criterion_group!(benches, benchmark_verify);
criterion_main!(benches);

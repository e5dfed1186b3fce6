//! Criterion benchmarks for PIVY crypto: keygen, ECDH, and stealth derivation.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pivy_crypto::{
    derive_stealth_keypair, derive_stealth_pub, ecdh_shared_key, generate_ephemeral_key,
    generate_meta_keys,
};
use secp256k1::{PublicKey, Secp256k1, SecretKey};

fn bench_keygen(c: &mut Criterion) {
    let mut g = c.benchmark_group("keygen");
    g.throughput(Throughput::Elements(1));
    g.bench_function("generate_meta_keys", |b| {
        b.iter(|| black_box(generate_meta_keys()));
    });
    g.bench_function("generate_ephemeral_key", |b| {
        b.iter(|| black_box(generate_ephemeral_key()));
    });
    g.finish();
}

fn bench_ecdh(c: &mut Criterion) {
    let secp = Secp256k1::new();
    let a = SecretKey::from_slice(&[0x11; 32]).unwrap();
    let b_secret = SecretKey::from_slice(&[0x22; 32]).unwrap();
    let b_pub = PublicKey::from_secret_key(&secp, &b_secret);

    let mut g = c.benchmark_group("ecdh");
    g.throughput(Throughput::Elements(1));
    g.bench_function("ecdh_shared_key", |b| {
        b.iter(|| black_box(ecdh_shared_key(&a, &b_pub)).unwrap());
    });
    g.finish();
}

fn bench_stealth_derivation(c: &mut Criterion) {
    let meta = generate_meta_keys();
    let eph = generate_ephemeral_key();

    let mut g = c.benchmark_group("stealth_derivation");
    g.throughput(Throughput::Elements(1));
    g.bench_function("derive_stealth_pub", |b| {
        b.iter(|| {
            black_box(derive_stealth_pub(
                &meta.spend.public,
                &meta.view.public,
                &eph.private,
            ))
            .unwrap()
        });
    });
    g.bench_function("derive_stealth_keypair", |b| {
        b.iter(|| {
            black_box(derive_stealth_keypair(
                &meta.spend.private,
                &meta.view.private,
                &eph.public,
            ))
            .unwrap()
        });
    });
    g.finish();
}

criterion_group!(benches, bench_keygen, bench_ecdh, bench_stealth_derivation);
criterion_main!(benches);

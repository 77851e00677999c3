use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kerl_bundle::core::{bytes_to_trytes, trytes_to_bytes, Kerl};
use kerl_bundle::{normalized_hash, BundleConfig};
use kerl_bundle_testkit::{construct_bundle, known_transfer, KNOWN_ADDRESSES};

fn bench_finalize(c: &mut Criterion) {
    let txs = known_transfer();

    c.bench_function("compute_hash/3tx", |b| {
        let bundle = construct_bundle(&txs, BundleConfig::default()).unwrap();
        b.iter(|| black_box(bundle.compute_hash().unwrap()))
    });

    c.bench_function("finalize/3tx_404_increments", |b| {
        b.iter(|| {
            let mut bundle = construct_bundle(&txs, BundleConfig::default()).unwrap();
            black_box(bundle.finalize().unwrap())
        })
    });
}

fn bench_primitives(c: &mut Criterion) {
    let address = kerl_bundle::Address::parse(KNOWN_ADDRESSES[0]).unwrap();
    let block = address.to_bytes().unwrap();

    c.bench_function("kerl/absorb_squeeze", |b| {
        b.iter(|| {
            let mut kerl = Kerl::new();
            kerl.absorb(black_box(&block));
            black_box(kerl.squeeze())
        })
    });

    c.bench_function("codec/trytes_to_bytes", |b| {
        b.iter(|| black_box(trytes_to_bytes(black_box(address.trytes())).unwrap()))
    });

    c.bench_function("codec/bytes_to_trytes", |b| {
        b.iter(|| black_box(bytes_to_trytes(black_box(&block))))
    });

    let hash = {
        let mut kerl = Kerl::new();
        kerl.absorb(&block);
        kerl.squeeze()
    };
    c.bench_function("normalize", |b| b.iter(|| black_box(normalized_hash(black_box(&hash)))));
}

criterion_group!(benches, bench_finalize, bench_primitives);
criterion_main!(benches);

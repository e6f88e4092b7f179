use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use harpocrates_gen::{derive_inverse_lut, generate_lut_with};
use harpocrates_runtime::{decrypt, encrypt, Harpocrates};

fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("keygen");
    group.bench_function("generate_lut", |b| {
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        let mut lut = [0u8; 256];
        b.iter(|| generate_lut_with(&mut rng, &mut lut));
    });
    group.bench_function("derive_inverse_lut", |b| {
        let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
        let mut lut = [0u8; 256];
        generate_lut_with(&mut rng, &mut lut);
        b.iter(|| derive_inverse_lut(&lut).unwrap());
    });
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let cipher = Harpocrates::from_rng(&mut rng);

    let mut plain = [0u8; 16];
    rng.fill_bytes(&mut plain);
    let ct = cipher.encrypt_block(&plain);

    let mut group = c.benchmark_group("block");
    group.throughput(Throughput::Bytes(16));
    group.bench_function("encrypt_block", |b| b.iter(|| cipher.encrypt_block(&plain)));
    group.bench_function("decrypt_block", |b| b.iter(|| cipher.decrypt_block(&ct)));
    group.finish();
}

fn bench_bulk(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let cipher = Harpocrates::from_rng(&mut rng);

    let mut group = c.benchmark_group("bulk");
    for len in [1usize << 10, 1 << 16] {
        let mut plain = vec![0u8; len];
        rng.fill_bytes(&mut plain);
        let mut enc = vec![0u8; len];
        encrypt(cipher.lut(), &plain, &mut enc).unwrap();

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("encrypt/{len}"), |b| {
            let mut out = vec![0u8; len];
            b.iter(|| encrypt(cipher.lut(), &plain, &mut out).unwrap());
        });
        group.bench_function(format!("decrypt/{len}"), |b| {
            let mut out = vec![0u8; len];
            b.iter(|| decrypt(cipher.inverse_lut(), &enc, &mut out).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_keygen, bench_block, bench_bulk);
criterion_main!(benches);

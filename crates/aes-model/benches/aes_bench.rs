use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_model::{Aes, Key, KeySize, RoundKeySchedule, Trace};

fn random_key(rng: &mut ChaCha20Rng, size: KeySize) -> Key {
    let mut bytes = vec![0u8; size.bytes()];
    rng.fill_bytes(&mut bytes);
    Key::try_from(&bytes[..]).expect("valid key length")
}

fn bench_key_expansion(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut group = c.benchmark_group("key_expansion");
    for size in KeySize::ALL {
        let key = random_key(&mut rng, size);
        group.bench_with_input(BenchmarkId::from_parameter(size.bits()), &key, |b, key| {
            b.iter(|| RoundKeySchedule::new(key));
        });
    }
    group.finish();
}

fn bench_blocks(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let mut group = c.benchmark_group("block");
    for size in KeySize::ALL {
        let aes = Aes::new(&random_key(&mut rng, size));
        group.bench_function(BenchmarkId::new("encrypt", size.bits()), |b| {
            b.iter(|| aes.encrypt_block(&block));
        });
        group.bench_function(BenchmarkId::new("decrypt", size.bits()), |b| {
            b.iter(|| aes.decrypt_block(&block));
        });
    }
    group.finish();
}

fn bench_traced(c: &mut Criterion) {
    let aes = Aes::new(&Key::from([0u8; 16]));
    let block = [0u8; 16];
    let mut group = c.benchmark_group("traced");
    group.sample_size(20);
    group.bench_function("encrypt_aes128", |b| {
        let mut trace = Trace::new();
        b.iter(|| {
            trace.clear();
            aes.encrypt_block_traced(&block, &mut trace)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_key_expansion, bench_blocks, bench_traced);
criterion_main!(benches);

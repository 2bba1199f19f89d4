use core::iter;

use criterion::measurement::WallTime;
use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkGroup, BenchmarkId, Criterion,
    PlotConfiguration, SamplingMode, Throughput,
};
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hexrsa::{decrypt, encrypt, RSAPrivateKey, RSAPublicKey, RSA};

fn crypto_material() -> (RSAPublicKey, RSAPrivateKey) {
    // 997 * 991 is the widest modulus the prime range allows
    RSA::key_pair_from_primes(&BigInt::from(997), &BigInt::from(991), &BigInt::from(65537)).unwrap()
}

fn message(len: usize) -> String {
    iter::repeat("Hello, RSA! ").flat_map(str::chars).take(len).collect()
}

fn prepare_benchmark<'a>(
    c: &'a mut Criterion,
    group_name: &str,
    sampling_mode: SamplingMode,
    axis_scale: AxisScale,
) -> BenchmarkGroup<'a, WallTime> {
    let plotting_config = PlotConfiguration::default().summary_scale(axis_scale);
    let mut group = c.benchmark_group(group_name);
    group
        .sampling_mode(sampling_mode)
        .plot_config(plotting_config);
    group
}

fn bench_key_generation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(123);
    c.bench_function("Key generation", |b| {
        b.iter(|| {
            let _key_pair = RSA::new_key_pair(&mut rng).unwrap();
        })
    });
}

fn bench_encryption(c: &mut Criterion) {
    let (public_key, _) = crypto_material();
    let lengths = [10, 100, 1000, 10_000];

    let mut group = prepare_benchmark(c, "Encryption", SamplingMode::Auto, AxisScale::Logarithmic);

    for len in lengths.iter() {
        let plaintext = message(*len);
        assert_eq!(plaintext.chars().count(), *len);

        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &plaintext, |b, plaintext| {
            b.iter(|| {
                let _cipher_hex = encrypt(&public_key, plaintext);
            })
        });
    }
    group.finish();
}

fn bench_decryption(c: &mut Criterion) {
    let (public_key, private_key) = crypto_material();
    let lengths = [10, 100, 1000, 10_000];

    let mut group = prepare_benchmark(c, "Decryption", SamplingMode::Flat, AxisScale::Logarithmic);

    for len in lengths.iter() {
        let plaintext = message(*len);
        let cipher_hex = encrypt(&public_key, &plaintext);

        group.throughput(Throughput::Elements(*len as u64));
        group.sample_size(10).bench_with_input(
            BenchmarkId::from_parameter(len),
            &cipher_hex,
            |b, cipher_hex| {
                b.iter(|| {
                    let decrypted = decrypt(&private_key, cipher_hex).unwrap();
                    assert_eq!(decrypted, plaintext);
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_key_generation, bench_encryption, bench_decryption);
criterion_main!(benches);

//! Benchmarks for the braid-word transformation surface.
//!
//! Random words are generated with a seeded RNG so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use artin::BraidWord;

/// Random word of `len` generators over `strands` strands
fn random_word(rng: &mut StdRng, strands: i32, len: usize) -> BraidWord {
    let generators = (0..len)
        .map(|_| {
            let magnitude = rng.gen_range(1..strands);
            if rng.gen_bool(0.5) {
                magnitude
            } else {
                -magnitude
            }
        })
        .collect();

    BraidWord::new(generators).unwrap()
}

fn bench_relation_scans(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let braid = random_word(&mut rng, 10, 1024);

    c.bench_function("braid_relation1_performable_indices/1024", |b| {
        b.iter(|| black_box(&braid).braid_relation1_performable_indices())
    });

    c.bench_function("braid_relation2_performable_indices/1024", |b| {
        b.iter(|| black_box(&braid).braid_relation2_performable_indices())
    });

    c.bench_function("remove_sigma_inverse_pair_performable_indices/1024", |b| {
        b.iter(|| black_box(&braid).remove_sigma_inverse_pair_performable_indices())
    });
}

fn bench_free_reduction_sweep(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let braid = random_word(&mut rng, 6, 512);

    c.bench_function("free_reduction_sweep/512", |b| {
        b.iter(|| {
            let mut braid = braid.clone();
            while let Some(&index) = braid
                .remove_sigma_inverse_pair_performable_indices()
                .first()
            {
                braid.remove_sigma_inverse_pair(index).unwrap();
            }
            braid.len()
        })
    });
}

fn bench_markov_churn(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(13);
    let braid = random_word(&mut rng, 8, 256);

    c.bench_function("stabilization_destabilization/256", |b| {
        b.iter(|| {
            let mut braid = braid.clone();
            for _ in 0..64 {
                braid.stabilization(false);
            }
            while braid.is_destabilization_performable() {
                braid.destabilization().unwrap();
            }
            braid.strand_count()
        })
    });

    c.bench_function("conjugation_and_shift/256", |b| {
        b.iter(|| {
            let mut braid = braid.clone();
            for index in 1..8 {
                braid.conjugation(index).unwrap();
                braid.shift_left();
            }
            braid.len()
        })
    });
}

criterion_group!(
    benches,
    bench_relation_scans,
    bench_free_reduction_sweep,
    bench_markov_churn
);
criterion_main!(benches);

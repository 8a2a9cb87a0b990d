#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use block_push_solver::config::{Bounds, HashKind};
use block_push_solver::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_reference(c: &mut Criterion) {
    bench_level(c, HashKind::Djb, "levels/reference.txt", 50);
}

#[allow(unused)]
fn bench_reference_fnv(c: &mut Criterion) {
    bench_level(c, HashKind::Fnv, "levels/reference.txt", 50);
}

#[allow(unused)]
fn bench_three_blocks(c: &mut Criterion) {
    bench_level(c, HashKind::Djb, "levels/three-blocks.txt", 20);
}

fn bench_level(c: &mut Criterion, hash: HashKind, level_path: &str, samples: usize) {
    let level = level_path.load_level(&Bounds::default()).unwrap();

    c.bench(
        &format!("{}", hash),
        Benchmark::new(level_path, move |b| {
            b.iter(|| {
                criterion::black_box(
                    level.solve(criterion::black_box(hash), criterion::black_box(false)),
                )
            })
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_reference,
    bench_reference_fnv,
    //bench_three_blocks,
);
criterion_main!(benches);

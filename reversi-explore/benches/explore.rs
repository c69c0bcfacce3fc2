use criterion::*;

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};

use rand::rngs::StdRng;
use rand::SeedableRng;
use reversi_explore::explore::{
    collect_breadth_first, collect_deduplicated_breadth_first, sample_within_depth_range,
};
use reversi_explore::hash::HashFunction;
use reversi_explore::{Board, BoardSequence, BoardSet, Turn};

fn criterion_breadth_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("breadth_first");
    group.sample_size(10);

    for plies in [4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("sequence", plies), &plies, |b, &plies| {
            b.iter(|| {
                let mut sequence = BoardSequence::new();
                collect_breadth_first(Board::opening(), Turn::Black, plies, &mut sequence)
            })
        });
        group.bench_with_input(BenchmarkId::new("set", plies), &plies, |b, &plies| {
            b.iter(|| {
                let mut set = BoardSet::new();
                collect_deduplicated_breadth_first(Board::opening(), Turn::Black, plies, &mut set)
            })
        });
    }

    group.finish();
}

fn criterion_hashes(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut population = BoardSequence::new();
    sample_within_depth_range(
        Board::opening(),
        Turn::Black,
        10,
        40,
        &mut rng,
        20_000,
        &mut population,
    )
    .expect("valid depth range");

    let mut group = c.benchmark_group("set_insert");
    group.throughput(Throughput::Elements(population.len() as u64));

    for hash in HashFunction::CANDIDATES {
        group.bench_with_input(
            BenchmarkId::from_parameter(hash),
            &hash,
            |b, &hash| {
                b.iter(|| {
                    let mut set = BoardSet::with_hash(hash);
                    set.extend(population.iter());
                    set.len()
                })
            },
        );
    }

    group.finish();
}

#[cfg(unix)]
criterion_group! {
    name = explore;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_breadth_first, criterion_hashes
}

#[cfg(not(unix))]
criterion_group! {
    name = explore;
    config = Criterion::default();
    targets = criterion_breadth_first, criterion_hashes
}

criterion_main!(explore);

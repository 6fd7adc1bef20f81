use criterion::{criterion_group, criterion_main, Criterion};
use maze_carver::{
    generators,
    pathing,
    random::{SeededRandom, ThreadRandom},
};

fn bench_recursive_backtracker_32(c: &mut Criterion) {
    let mut random = ThreadRandom::new();
    c.bench_function("recursive_backtracker_32", move |b| {
        b.iter(|| generators::generate(32, 32, &mut random).unwrap())
    });
}

fn bench_recursive_backtracker_seeded_128(c: &mut Criterion) {
    let mut random = SeededRandom::new(1);
    c.bench_function("recursive_backtracker_seeded_128", move |b| {
        b.iter(|| generators::generate(128, 128, &mut random).unwrap())
    });
}

fn bench_solution_64(c: &mut Criterion) {
    let maze = generators::generate_seeded(64, 64, 3).unwrap();
    c.bench_function("solution_64", move |b| {
        b.iter(|| pathing::solution(&maze))
    });
}

criterion_group!(benches,
                 bench_recursive_backtracker_32,
                 bench_recursive_backtracker_seeded_128,
                 bench_solution_64);
criterion_main!(benches);

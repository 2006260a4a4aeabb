//! Benchmark for the all-pairs simulation tick at the default
//! population size (600 particles).

use criterion::{Criterion, criterion_group, criterion_main};
use plife_core::{config::Config, simulation::Simulation};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_step(c: &mut Criterion) {
    let cfg = Config::default();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut sim = Simulation::new(cfg, &mut rng);

    // The population mutates across iterations, which is fine: the tick is
    // all-pairs, so the workload size never changes.
    c.bench_function("step/600 particles", |b| b.iter(|| sim.step()));
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench_step
}

criterion_main!(benches);

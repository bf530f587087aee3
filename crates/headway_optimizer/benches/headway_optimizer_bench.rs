use std::{hint::black_box, sync::Arc};

use criterion::{Criterion, criterion_group, criterion_main};
use headway_optimizer::{
    genome::{departure_schedule::DepartureSchedule, genome::Genome},
    problem::{
        arrival_model::{ArrivalModel, ArrivalSample},
        station::Station,
    },
    timetable::{simulator::simulate, wait_scorer::score_schedule},
};
use rand::{SeedableRng, rngs::SmallRng};

fn rush_hour_arrivals() -> ArrivalModel {
    let mut samples = Vec::new();
    for minute in 0..180 {
        let peak = if (30..=90).contains(&minute) { 6 } else { 2 };
        samples.push(ArrivalSample::new(Station::A, minute, peak + 2));
        samples.push(ArrivalSample::new(Station::B, minute, peak));
        samples.push(ArrivalSample::new(Station::C, minute, peak / 2));
    }

    ArrivalModel::new(samples)
}

fn timetable_benchmark(c: &mut Criterion) {
    let arrivals = Arc::new(rush_hour_arrivals());
    let genome = DepartureSchedule::seeded(Arc::clone(&arrivals));
    let schedule = genome.schedule();

    c.bench_function("simulate seed timetable", |b| {
        b.iter(|| simulate(black_box(&arrivals), black_box(genome.departures())))
    });

    c.bench_function("score seed timetable", |b| {
        b.iter(|| score_schedule(black_box(&arrivals), black_box(&schedule)))
    });

    c.bench_function("evaluate seed genome", |b| {
        b.iter(|| black_box(&genome).evaluate())
    });

    c.bench_function("mutate genome", |b| {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut mutated = genome.clone();
        b.iter(|| mutated.mutate(&mut rng))
    });
}

criterion_group!(benches, timetable_benchmark);
criterion_main!(benches);

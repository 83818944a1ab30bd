criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(30)
        .measurement_time(std::time::Duration::from_secs(3));
    targets =
        simulating_a_single_bout,
        generating_a_fighter,
        advancing_one_universe_week,
}

fn simulating_a_single_bout(c: &mut criterion::Criterion) {
    let red = boxsim_core::generate_fighter(1, 28);
    let blue = boxsim_core::generate_fighter(2, 28);
    let config = boxsim_core::FightConfig { seed: 42, ..Default::default() };

    c.bench_function("simulate a 12-round bout", |b| {
        b.iter(|| {
            let fight = boxsim_core::Fight {
                red: red.clone(),
                blue: blue.clone(),
                config: config.clone(),
            };
            let mut log = EventLog::default();
            boxsim_core::run_fight(&fight, &mut log)
        })
    });
}

fn generating_a_fighter(c: &mut criterion::Criterion) {
    c.bench_function("generate a procedural fighter", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            boxsim_core::generate_fighter(seed, 28)
        })
    });
}

fn advancing_one_universe_week(c: &mut criterion::Criterion) {
    c.bench_function("advance one week for a 60-fighter universe", |b| {
        b.iter_batched(
            || boxsim_core::Universe::bootstrap(99, 60),
            |mut universe| {
                let mut progress = boxsim_core::universe::NoopProgress;
                universe.advance_week(&mut progress).unwrap()
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

use boxsim_core::models::events::EventLog;

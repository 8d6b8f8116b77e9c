use criterion::Criterion;
use fxhash::FxHashMap;
use phenome::{
    evaluate,
    random::{random_genome, Shape, WyRng},
    NodeId,
};

fn bench_step(bench: &mut Criterion) {
    let shape = Shape {
        inputs: 2,
        outputs: 1,
        hidden: 100,
        edges: 400,
        ..Shape::default()
    };
    let plan = random_genome(&mut WyRng::seeded(0x5eed), &shape)
        .unwrap()
        .compile()
        .unwrap();
    let mut state = plan.state();
    let i = vec![0.7, 0.3];

    bench.bench_function("plan-step", |b| {
        b.iter(|| state.step(&plan, &i).unwrap()[0])
    });

    let inputs = plan
        .inputs()
        .iter()
        .copied()
        .zip(i.iter().copied())
        .collect::<FxHashMap<NodeId, f64>>();
    bench.bench_function("plan-evaluate", |b| {
        b.iter(|| evaluate(&plan, &mut state, &inputs).unwrap())
    });
}

#[cfg(feature = "parallel")]
fn bench_trials(bench: &mut Criterion) {
    let plan = random_genome(&mut WyRng::seeded(0x5eed), &Shape::default())
        .unwrap()
        .compile()
        .unwrap();

    bench.bench_function("plan-trials", |b| {
        b.iter(|| {
            phenome::parallel::evaluate_trials(&plan, 64, |trial, state| {
                (0..100)
                    .map(|t| state.step(&plan, &[trial as f64, t as f64]).unwrap()[0])
                    .sum::<f64>()
            })
        })
    });
}

pub fn benches() {
    #[cfg(not(feature = "smol_bench"))]
    let mut criterion: criterion::Criterion<_> = Criterion::default()
        .sample_size(1000)
        .significance_level(0.1);
    #[cfg(feature = "smol_bench")]
    let mut criterion: criterion::Criterion<_> = {
        use core::time::Duration;
        Criterion::default()
            .measurement_time(Duration::from_millis(1))
            .sample_size(10)
            .nresamples(1)
            .without_plots()
            .configure_from_args()
    };
    bench_step(&mut criterion);
    #[cfg(feature = "parallel")]
    bench_trials(&mut criterion);
}

fn main() {
    benches();
    criterion::Criterion::default()
        .configure_from_args()
        .final_summary();
}

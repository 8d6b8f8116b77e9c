use criterion::Criterion;
use phenome::{
    compile,
    random::{random_genome, Shape, WyRng},
    Genome, PlanCache,
};

fn population(shape: &Shape, size: usize) -> Vec<Genome> {
    let mut rng = WyRng::seeded(0x5eed);
    (0..size)
        .map(|_| random_genome(&mut rng, shape).unwrap())
        .collect()
}

fn bench_compile(bench: &mut Criterion) {
    let small = population(&Shape::default(), 100);
    let large = population(
        &Shape {
            inputs: 16,
            outputs: 4,
            hidden: 200,
            edges: 1000,
            ..Shape::default()
        },
        10,
    );

    bench.bench_function("compile-small", |b| {
        b.iter(|| small.iter().map(|g| compile(g).unwrap()).count())
    });
    bench.bench_function("compile-large", |b| {
        b.iter(|| large.iter().map(|g| compile(g).unwrap()).count())
    });
}

fn bench_cache(bench: &mut Criterion) {
    let genomes = population(&Shape::default(), 100);
    let mut cache = PlanCache::new();

    bench.bench_function("compile-cached", |b| {
        b.iter(|| {
            genomes
                .iter()
                .map(|g| cache.get_or_compile(g).unwrap())
                .count()
        })
    });
}

#[cfg(feature = "parallel")]
fn bench_compile_all(bench: &mut Criterion) {
    let genomes = population(&Shape::default(), 1000);

    bench.bench_function("compile-all", |b| {
        b.iter(|| phenome::parallel::compile_all(&genomes))
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
    bench_compile(&mut criterion);
    bench_cache(&mut criterion);
    #[cfg(feature = "parallel")]
    bench_compile_all(&mut criterion);
}

fn main() {
    benches();
    criterion::Criterion::default()
        .configure_from_args()
        .final_summary();
}

use approx::relative_eq;
use phenome::{
    random::{default_rng, random_genome, Shape},
    Activation, Edge, Genome, Node, PlanCache,
};
use std::error::Error;

const CASES: [([f64; 2], f64); 4] = [([0., 0.], 0.), ([0., 1.], 1.), ([1., 0.], 1.), ([1., 1.], 0.)];
const SEARCH: usize = 10_000;

fn solution() -> Genome {
    Genome::default()
        .with_node(Node::input(0))
        .with_node(Node::input(1))
        .with_node(Node::output(4, Activation::Sigmoid))
        .with_node(Node::hidden(247, Activation::Tanh))
        .with_node(Node::hidden(301, Activation::Tanh))
        .with_node(Node::hidden(508, Activation::Cos))
        .with_edge(Edge::new(1, 508, -3.))
        .with_edge(Edge::new(0, 508, 3.))
        .with_edge(Edge::new(508, 301, -3.))
        .with_edge(Edge::new(508, 247, -3.))
        .with_edge(Edge::new(301, 247, 2.672))
        .with_edge(Edge::new(508, 4, -3.))
        .with_edge(Edge::new(247, 4, 3.))
        .with_edge(Edge::new(301, 4, 3.))
}

/// Number of cases answered within 0.05
fn score(cache: &mut PlanCache, genome: &Genome) -> Result<usize, Box<dyn Error>> {
    let plan = cache.get_or_compile(genome)?;
    let mut state = plan.state();
    let mut hits = 0;
    for (input, want) in CASES {
        let v = state.step(&plan, &input)?[0];
        if relative_eq!(v, want, epsilon = 0.05) {
            hits += 1;
        }
        state.reset();
    }
    Ok(hits)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let genome = solution();
    let plan = genome.compile()?;
    let mut state = plan.state();
    for (input, want) in CASES {
        let v = state.step(&plan, &input)?[0];
        println!("{input:?} -> {v:.6} (want {want})");
    }
    println!("{}", plan.dot());

    // how rare is a solution among random topologies
    let mut rng = default_rng();
    let mut cache = PlanCache::new();
    let shape = Shape {
        hidden: 3,
        edges: 8,
        recurrent: false,
        ..Shape::default()
    };
    let mut best = (0, None);
    for _ in 0..SEARCH {
        let candidate = random_genome(&mut rng, &shape)?;
        let s = score(&mut cache, &candidate)?;
        if s > best.0 {
            best = (s, Some(candidate));
        }
    }
    println!("best of {SEARCH} random genomes solves {}/4 cases", best.0);
    if let Some(g) = best.1 {
        println!("{}", g.to_json()?);
    }
    Ok(())
}

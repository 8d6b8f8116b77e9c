use phenome::{Activation, Edge, Genome, Node};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // a leaky integrator, out = tanh(in + 0.9 * previous out). 2 copies it, closing a second
    // cycle back into 1 over a zero weight edge
    let genome = Genome::default()
        .with_node(Node::input(0))
        .with_node(Node::output(1, Activation::Tanh))
        .with_node(Node::output(2, Activation::Linear).with_default(-1.))
        .with_edge(Edge::new(0, 1, 1.))
        .with_edge(Edge::new(1, 1, 0.9))
        .with_edge(Edge::new(2, 1, 0.))
        .with_edge(Edge::new(1, 2, 1.));
    let plan = genome.compile()?;
    println!("{}", plan.dot());

    let mut state = plan.state();
    let pulse = [1., 0., 0., 0., 0., 0., 1., 1., 0., 0.];
    for (t, x) in pulse.iter().enumerate() {
        let out = state.step(&plan, &[*x])?;
        println!("t={t:<2} in={x:.1} out={:.4} copy={:.4}", out[0], out[1]);
    }

    state.reset();
    println!("after reset: {:?}", state.step(&plan, &[0.])?);
    Ok(())
}

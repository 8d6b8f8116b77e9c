//! Flat, ordered evaluation plans compiled from a [Genome].
//!
//! A plan addresses node values by slot. Inputs take slots `0..inputs().len()` in ascending id
//! order, and the k-th step writes slot `inputs().len() + k`. Each step only does arithmetic over
//! slots precomputed here, so evaluating a plan never touches the graph.

mod dot;

use crate::{
    activation::Activation,
    error::CompileError,
    genome::{Genome, NodeId},
    resolve::{resolve, Index},
    state::State,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Where a link reads its value from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// computed earlier in the same evaluation, or an input
    Current(usize),
    /// left behind by the previous evaluation
    Previous(usize),
}

impl Slot {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Current(i) | Self::Previous(i) => i,
        }
    }

    #[inline]
    pub fn is_recurrent(self) -> bool {
        matches!(self, Self::Previous(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub slot: Slot,
    pub weight: f64,
}

/// One non-input node's computation: `activation(bias + Σ weight * value(slot))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub node: NodeId,
    pub activation: Activation,
    pub bias: f64,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    inputs: Vec<NodeId>,
    outputs: Vec<NodeId>,
    output_slots: Vec<usize>,
    steps: Vec<Step>,
    defaults: Vec<f64>,
}

/// Compile a genome into a plan. Fails without producing anything if the genome is malformed
/// or can't be evaluated.
pub fn compile(genome: &Genome) -> Result<Plan, CompileError> {
    let index = Index::new(genome)?;
    let resolution = resolve(&index);

    let inputs = (0..index.len())
        .filter(|&d| index.node(d).is_input())
        .collect::<Vec<_>>();

    let mut slots = vec![0usize; index.len()];
    for (s, &d) in inputs.iter().chain(resolution.order.iter()).enumerate() {
        slots[d] = s;
    }

    let mut incoming = vec![Vec::new(); index.len()];
    for &(from, to, e) in index.edges() {
        let slot = if resolution.recurrent[e] {
            Slot::Previous(slots[from])
        } else {
            Slot::Current(slots[from])
        };
        incoming[to].push(Link {
            slot,
            weight: genome.edges()[e].weight,
        });
    }

    let steps = resolution
        .order
        .iter()
        .map(|&d| {
            let node = index.node(d);
            Step {
                node: node.id,
                activation: node.activation,
                bias: node.bias,
                links: std::mem::take(&mut incoming[d]),
            }
        })
        .collect::<Vec<_>>();

    let mut defaults = vec![0.; index.len()];
    for d in 0..index.len() {
        defaults[slots[d]] = index.node(d).default;
    }

    let outputs = (0..index.len())
        .filter(|&d| index.node(d).is_output())
        .collect::<Vec<_>>();

    let plan = Plan {
        inputs: inputs.iter().map(|&d| index.node(d).id).collect(),
        output_slots: outputs.iter().map(|&d| slots[d]).collect(),
        outputs: outputs.iter().map(|&d| index.node(d).id).collect(),
        steps,
        defaults,
    };

    debug!(
        "compiled {} nodes into {} steps ({} links, {} recurrent)",
        index.len(),
        plan.steps.len(),
        plan.links().count(),
        plan.links().filter(|l| l.slot.is_recurrent()).count()
    );

    Ok(plan)
}

impl Plan {
    /// Input node ids, ascending. Positional input is read in this order
    #[inline]
    pub fn inputs(&self) -> &[NodeId] {
        &self.inputs
    }

    /// Output node ids, ascending. Positional output is written in this order
    #[inline]
    pub fn outputs(&self) -> &[NodeId] {
        &self.outputs
    }

    #[inline]
    pub fn output_slots(&self) -> &[usize] {
        &self.output_slots
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of value slots, one per node
    #[inline]
    pub fn slots(&self) -> usize {
        self.defaults.len()
    }

    /// Previous-step value of every slot before the first evaluation
    #[inline]
    pub fn defaults(&self) -> &[f64] {
        &self.defaults
    }

    /// Index into [Plan::steps] of the step computing `id`, or None for inputs and unknown ids
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.steps.iter().position(|s| s.node == id)
    }

    /// Value slot of `id`, for inputs and steps alike
    pub fn slot(&self, id: NodeId) -> Option<usize> {
        match self.inputs.binary_search(&id) {
            Ok(i) => Some(i),
            Err(_) => self.position(id).map(|p| self.inputs.len() + p),
        }
    }

    /// Node whose value lives in `slot`
    pub fn node_at(&self, slot: usize) -> Option<NodeId> {
        match slot.checked_sub(self.inputs.len()) {
            None => self.inputs.get(slot).copied(),
            Some(p) => self.steps.get(p).map(|s| s.node),
        }
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.steps.iter().flat_map(|s| s.links.iter())
    }

    pub fn is_recurrent(&self) -> bool {
        self.links().any(|l| l.slot.is_recurrent())
    }

    /// A fresh evaluation state for this plan
    pub fn state(&self) -> State {
        State::new(self)
    }
}

impl TryFrom<&Genome> for Plan {
    type Error = CompileError;

    fn try_from(genome: &Genome) -> Result<Self, Self::Error> {
        compile(genome)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        error::{Invalid, Malformed},
        genome::{Edge, Node},
    };

    fn chain() -> Genome {
        Genome::default()
            .with_node(Node::input(10))
            .with_node(Node::input(11))
            .with_node(Node::output(1, Activation::Sigmoid).with_default(0.5))
            .with_node(Node::hidden(5, Activation::Tanh).with_bias(0.25))
            .with_edge(Edge::new(10, 5, 2.))
            .with_edge(Edge::new(11, 5, -1.))
            .with_edge(Edge::new(5, 1, 3.))
            .with_edge(Edge::new(1, 5, 0.5))
    }

    #[test]
    fn test_layout() {
        let plan = compile(&chain()).unwrap();
        assert_eq!(plan.inputs(), &[NodeId(10), NodeId(11)]);
        assert_eq!(plan.outputs(), &[NodeId(1)]);
        assert_eq!(plan.slots(), 4);
        assert_eq!(plan.steps().len(), 2);

        assert_eq!(plan.position(NodeId(5)), Some(0));
        assert_eq!(plan.position(NodeId(1)), Some(1));
        assert_eq!(plan.position(NodeId(10)), None);

        assert_eq!(plan.slot(NodeId(10)), Some(0));
        assert_eq!(plan.slot(NodeId(11)), Some(1));
        assert_eq!(plan.slot(NodeId(5)), Some(2));
        assert_eq!(plan.slot(NodeId(1)), Some(3));
        assert_eq!(plan.slot(NodeId(2)), None);
        assert_eq!(plan.output_slots(), &[3]);

        for s in 0..plan.slots() {
            assert_eq!(plan.slot(plan.node_at(s).unwrap()), Some(s));
        }
        assert_eq!(plan.node_at(4), None);
    }

    #[test]
    fn test_steps() {
        let plan = compile(&chain()).unwrap();
        let hidden = &plan.steps()[0];
        assert_eq!(hidden.node, NodeId(5));
        assert_eq!(hidden.activation, Activation::Tanh);
        assert_eq!(hidden.bias, 0.25);
        assert_eq!(
            hidden.links,
            vec![
                Link {
                    slot: Slot::Current(0),
                    weight: 2.
                },
                Link {
                    slot: Slot::Current(1),
                    weight: -1.
                },
                Link {
                    slot: Slot::Previous(3),
                    weight: 0.5
                },
            ]
        );

        let out = &plan.steps()[1];
        assert_eq!(out.node, NodeId(1));
        assert_eq!(
            out.links,
            vec![Link {
                slot: Slot::Current(2),
                weight: 3.
            }]
        );
        assert!(plan.is_recurrent());
        assert_eq!(plan.defaults(), &[0., 0., 0., 0.5]);
    }

    #[test]
    fn test_parallel_edges_summed_separately() {
        let genome = Genome::with_io(1, 1, Activation::Linear)
            .with_edge(Edge::new(0, 1, 1.))
            .with_edge(Edge::new(0, 1, 2.))
            .with_edge(Edge::new(0, 1, 4.).disabled());
        let plan = compile(&genome).unwrap();
        assert_eq!(plan.steps()[0].links.len(), 2);
        assert!(!plan.is_recurrent());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(compile(&chain()).unwrap(), compile(&chain()).unwrap());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            compile(&Genome::default()),
            Err(CompileError::InvalidGenome(Invalid::NoNodes))
        );
        assert_eq!(
            Plan::try_from(&chain().with_edge(Edge::new(5, 4, 1.))),
            Err(CompileError::MalformedGenome(Malformed::DanglingEdge {
                edge: 4,
                node: NodeId(4)
            }))
        );
    }

    #[test]
    fn test_serde() {
        let plan = compile(&chain()).unwrap();
        let s = serde_json::to_string(&plan).unwrap();
        assert_eq!(serde_json::from_str::<Plan>(&s).unwrap(), plan);
    }
}

//! The genome handed over by an evolutionary search: an arena of nodes, and the weighted
//! edges between them addressed by [NodeId]. Nothing here knows about evaluation order; that
//! is derived by [compile](crate::compile) and kept in the resulting [Plan].

pub mod edge;
pub mod node;

pub use edge::Edge;
pub use node::{Node, NodeId, NodeKind};

use crate::{error::CompileError, plan::Plan, resolve::Index};
use core::hash::{Hash, Hasher};
use fxhash::FxHasher64;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl Genome {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// A genome of `inputs` input nodes followed by `outputs` output nodes, with ids counting up
    /// from 0 and no edges
    pub fn with_io(inputs: usize, outputs: usize, activation: crate::Activation) -> Self {
        let mut nodes = Vec::with_capacity(inputs + outputs);
        for id in 0..inputs {
            nodes.push(Node::input(id as u64));
        }
        for id in inputs..inputs + outputs {
            nodes.push(Node::output(id as u64, activation));
        }
        Self {
            nodes,
            edges: vec![],
        }
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.push_node(node);
        self
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.push_edge(edge);
        self
    }

    #[inline]
    pub fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    #[inline]
    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_input())
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_output())
    }

    /// Check every structural and semantic invariant [compile](crate::compile) relies on
    pub fn validate(&self) -> Result<(), CompileError> {
        Index::new(self).map(|_| ())
    }

    pub fn compile(&self) -> Result<Plan, CompileError> {
        crate::compile(self)
    }

    /// Hash of this genome's content, in the order its nodes and edges are stored. Genomes with
    /// equal fingerprints compile to the same plan, barring collisions.
    pub fn fingerprint(&self) -> u64 {
        let mut h = FxHasher64::default();
        self.hash(&mut h);
        h.finish()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl Hash for Genome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nodes.hash(state);
        self.edges.hash(state);
    }
}

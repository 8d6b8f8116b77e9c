//! Evaluation order for a genome's nodes.
//!
//! Nodes are first mapped onto dense indices in ascending id order. A three colour depth-first
//! search, rooted at the inputs and then at any node still unvisited (again by ascending id),
//! marks every edge that reaches a node on the current path as recurrent. What remains is acyclic,
//! and Kahn's algorithm orders it, always taking the lowest ready id next.

use crate::{
    error::{CompileError, Invalid, Malformed},
    genome::Genome,
};
use core::cmp::Reverse;
use fxhash::FxHashMap;
use log::trace;
use std::collections::BinaryHeap;

/// Dense view of a validated genome. `dense[i]` is the position in [Genome::nodes] of the node
/// with the i-th smallest id.
#[derive(Debug)]
pub struct Index<'g> {
    genome: &'g Genome,
    dense: Vec<usize>,
    /// enabled edges as (from, to, edge index), with dense endpoints
    edges: Vec<(usize, usize, usize)>,
}

impl<'g> Index<'g> {
    /// Index a genome, rejecting it if it breaks any invariant evaluation depends on
    pub fn new(genome: &'g Genome) -> Result<Self, CompileError> {
        let nodes = genome.nodes();
        if nodes.is_empty() {
            return Err(Invalid::NoNodes.into());
        }

        let mut dense = (0..nodes.len()).collect::<Vec<_>>();
        dense.sort_by_key(|&i| nodes[i].id);
        if let Some(w) = dense.windows(2).find(|w| nodes[w[0]].id == nodes[w[1]].id) {
            return Err(Malformed::DuplicateNode(nodes[w[0]].id).into());
        }

        let mut lookup = FxHashMap::default();
        lookup.reserve(nodes.len());
        for (d, &i) in dense.iter().enumerate() {
            lookup.insert(nodes[i].id, d);
        }

        let mut edges = Vec::with_capacity(genome.edges().len());
        for (e, edge) in genome.edges().iter().enumerate() {
            let from = *lookup.get(&edge.from).ok_or(Malformed::DanglingEdge {
                edge: e,
                node: edge.from,
            })?;
            let to = *lookup.get(&edge.to).ok_or(Malformed::DanglingEdge {
                edge: e,
                node: edge.to,
            })?;
            if nodes[dense[to]].is_input() {
                return Err(Malformed::InputHasIncoming {
                    edge: e,
                    node: edge.to,
                }
                .into());
            }
            if edge.enabled {
                edges.push((from, to, e));
            }
        }

        if !nodes.iter().any(|n| n.is_output()) {
            return Err(Invalid::NoOutputs.into());
        }

        Ok(Self {
            genome,
            dense,
            edges,
        })
    }

    #[inline]
    pub fn genome(&self) -> &'g Genome {
        self.genome
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// The node at dense index `d`
    #[inline]
    pub fn node(&self, d: usize) -> &'g crate::genome::Node {
        &self.genome.nodes()[self.dense[d]]
    }

    /// Enabled edges as (from, to, edge index), with dense endpoints
    #[inline]
    pub fn edges(&self) -> &[(usize, usize, usize)] {
        &self.edges
    }
}

/// Outcome of resolving an [Index]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// dense indices of every non-input node, in evaluation order
    pub order: Vec<usize>,
    /// for each edge of the genome, whether it reads the previous evaluation's value.
    /// Disabled edges are never recurrent.
    pub recurrent: Vec<bool>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unseen,
    OnPath,
    Done,
}

pub fn resolve(index: &Index) -> Resolution {
    let n = index.len();
    let mut recurrent = vec![false; index.genome().edges().len()];

    // outgoing (to, edge) per node, visited lowest destination first
    let mut out = vec![Vec::new(); n];
    for &(from, to, e) in index.edges() {
        out[from].push((to, e));
    }
    for o in out.iter_mut() {
        o.sort_unstable();
    }

    let mut marks = vec![Mark::Unseen; n];
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let roots = (0..n)
        .filter(|&d| index.node(d).is_input())
        .chain((0..n).filter(|&d| !index.node(d).is_input()));
    for root in roots {
        if marks[root] != Mark::Unseen {
            continue;
        }
        marks[root] = Mark::OnPath;
        stack.push((root, 0));

        while let Some((at, cursor)) = stack.last_mut() {
            let Some(&(to, e)) = out[*at].get(*cursor) else {
                marks[*at] = Mark::Done;
                stack.pop();
                continue;
            };
            *cursor += 1;
            match marks[to] {
                Mark::OnPath => {
                    trace!(
                        "edge {e} ({} -> {}) closes a cycle, reading it from the previous step",
                        index.node(*at).id,
                        index.node(to).id
                    );
                    recurrent[e] = true;
                }
                Mark::Unseen => {
                    marks[to] = Mark::OnPath;
                    stack.push((to, 0));
                }
                Mark::Done => {}
            }
        }
    }

    // Kahn over what's left, inputs being available from the start
    let mut pending = vec![0usize; n];
    let mut unlocks = vec![Vec::new(); n];
    for &(from, to, e) in index.edges() {
        if !recurrent[e] && !index.node(from).is_input() {
            pending[to] += 1;
            unlocks[from].push(to);
        }
    }

    let mut ready = (0..n)
        .filter(|&d| !index.node(d).is_input() && pending[d] == 0)
        .map(Reverse)
        .collect::<BinaryHeap<_>>();
    let mut order = Vec::with_capacity(n);
    while let Some(Reverse(d)) = ready.pop() {
        order.push(d);
        for &to in &unlocks[d] {
            pending[to] -= 1;
            if pending[to] == 0 {
                ready.push(Reverse(to));
            }
        }
    }

    debug_assert_eq!(
        order.len(),
        (0..n).filter(|&d| !index.node(d).is_input()).count(),
        "forward edges left a cycle"
    );

    Resolution { order, recurrent }
}

//! Random genomes, for exercising the compiler on topologies nobody wrote by hand.

use crate::{
    activation::Activation,
    constants::{PHENOME_RANDOM_WEIGHT_LIMIT, PHENOME_RANDOM_WEIGHT_STD},
    genome::{Edge, Genome, Node},
};
use core::cmp::min;
use rand::{
    seq::{IndexedRandom, SliceRandom},
    Rng, RngCore,
};
use rand_distr::{Distribution, Normal, NormalError};
use std::{
    fs::File,
    io::{self, Read},
    time::{SystemTime, UNIX_EPOCH},
};

/// Shape of a random genome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub inputs: usize,
    pub outputs: usize,
    pub hidden: usize,
    pub edges: usize,
    /// whether edges may point against the node order, forming cycles
    pub recurrent: bool,
    /// chance of each edge being disabled, clamped to at most 1. NaN counts as 0
    pub disabled: f64,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            inputs: 2,
            outputs: 1,
            hidden: 4,
            edges: 12,
            recurrent: true,
            disabled: 0.,
        }
    }
}

/// A random genome of `shape`, with normally distributed weights and random activations.
///
/// Node ids are scattered and shuffled, so the compiler can't lean on them being sorted or
/// dense. When `shape.recurrent` is false every edge agrees with one hidden total order,
/// making the genome acyclic.
pub fn random_genome(rng: &mut impl RngCore, shape: &Shape) -> Result<Genome, NormalError> {
    let weights = Normal::new(0., PHENOME_RANDOM_WEIGHT_STD)?;
    let total = shape.inputs + shape.outputs + shape.hidden;

    // rank in the hidden total order, inputs first
    let mut ids = (0..total as u64)
        .map(|i| i * 3 + rng.random_range(0..3))
        .collect::<Vec<_>>();
    ids.shuffle(rng);

    let mut ranked = Vec::with_capacity(total);
    for (rank, &id) in ids.iter().enumerate() {
        let node = if rank < shape.inputs {
            Node::input(id)
        } else if rank < shape.inputs + shape.outputs {
            Node::output(id, random_activation(rng))
        } else {
            Node::hidden(id, random_activation(rng))
        };
        ranked.push(node.with_bias(clamp(weights.sample(rng))));
    }

    let mut edges = Vec::with_capacity(shape.edges);
    if total > shape.inputs {
        for _ in 0..shape.edges {
            let to = rng.random_range(shape.inputs..total);
            let from = if shape.recurrent {
                rng.random_range(0..total)
            } else if to == 0 {
                continue;
            } else {
                rng.random_range(0..to)
            };
            let mut edge = Edge::new(ids[from], ids[to], clamp(weights.sample(rng)));
            // NaN and non-positive chances disable nothing
            if shape.disabled > 0. {
                edge.enabled = !rng.random_bool(shape.disabled.min(1.));
            }
            edges.push(edge);
        }
    }

    let mut nodes = ranked;
    nodes.shuffle(rng);
    Ok(Genome::new(nodes, edges))
}

fn random_activation(rng: &mut impl RngCore) -> Activation {
    *Activation::ALL.choose(rng).unwrap_or(&Activation::Linear)
}

fn clamp(w: f64) -> f64 {
    w.clamp(-PHENOME_RANDOM_WEIGHT_LIMIT, PHENOME_RANDOM_WEIGHT_LIMIT)
}

pub struct WyRng {
    state: u64,
}

impl WyRng {
    pub fn seeded(state: u64) -> Self {
        Self { state }
    }
}

impl RngCore for WyRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        const WY_CONST_0: u64 = 0x2d35_8dcc_aa6c_78a5;
        const WY_CONST_1: u64 = 0x8bb8_4b93_962e_acc9;
        self.state = self.state.wrapping_add(WY_CONST_0);
        let t = u128::from(self.state) * u128::from(self.state ^ WY_CONST_1);
        (t as u64) ^ (t >> 64) as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let mut idx = 0;
        while idx < dst.len() {
            let lim = min(8, dst.len() - idx);
            dst[idx..idx + lim].copy_from_slice(&self.next_u64().to_ne_bytes()[..lim]);
            idx += lim;
        }
    }
}

pub fn seed_urandom() -> io::Result<u64> {
    let mut file = File::open("/dev/urandom")?;
    let mut buffer = [0u8; 8];
    file.read_exact(&mut buffer)?;
    Ok(u64::from_le_bytes(buffer))
}

/// A [WyRng] seeded from /dev/urandom, or the clock where that isn't available
pub fn default_rng() -> WyRng {
    WyRng::seeded(seed_urandom().unwrap_or_else(|_| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    }))
}

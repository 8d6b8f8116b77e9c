use super::NodeId;
use core::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

/// A weighted, directed connection between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
    /// disabled edges stay in the genome, but have no effect on its behaviour
    #[serde(default = "enabled")]
    pub enabled: bool,
}

fn enabled() -> bool {
    true
}

impl Edge {
    pub fn new(from: u64, to: u64, weight: f64) -> Self {
        Self {
            from: NodeId(from),
            to: NodeId(to),
            weight,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl Default for Edge {
    fn default() -> Self {
        Self {
            from: NodeId(0),
            to: NodeId(0),
            weight: 0.,
            enabled: true,
        }
    }
}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.weight.to_bits().hash(state);
        self.enabled.hash(state);
    }
}

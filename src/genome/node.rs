use crate::{activation::Activation, constants::PHENOME_DEFAULT_RECURRENT_VALUE};
use core::{
    fmt,
    hash::{Hash, Hasher},
};
use serde::{Deserialize, Serialize};

/// Unique identity of a node within a genome. Ids carry no meaning beyond ordering, which
/// breaks ties when several nodes could be evaluated next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Input,
    Hidden,
    Output,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    #[serde(default)]
    pub activation: Activation,
    /// added to the weighted sum before activation
    #[serde(default)]
    pub bias: f64,
    /// value read through recurrent links before the first evaluation, and after a reset
    #[serde(default = "default_recurrent")]
    pub default: f64,
}

fn default_recurrent() -> f64 {
    PHENOME_DEFAULT_RECURRENT_VALUE
}

impl Node {
    pub fn new(id: u64, kind: NodeKind, activation: Activation) -> Self {
        Self {
            id: NodeId(id),
            kind,
            activation,
            bias: 0.,
            default: PHENOME_DEFAULT_RECURRENT_VALUE,
        }
    }

    /// An input node. Inputs are seeded directly, so their activation is never applied
    pub fn input(id: u64) -> Self {
        Self::new(id, NodeKind::Input, Activation::Linear)
    }

    pub fn hidden(id: u64, activation: Activation) -> Self {
        Self::new(id, NodeKind::Hidden, activation)
    }

    pub fn output(id: u64, activation: Activation) -> Self {
        Self::new(id, NodeKind::Output, activation)
    }

    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn with_default(mut self, default: f64) -> Self {
        self.default = default;
        self
    }

    #[inline]
    pub fn is_input(&self) -> bool {
        matches!(self.kind, NodeKind::Input)
    }

    #[inline]
    pub fn is_output(&self) -> bool {
        matches!(self.kind, NodeKind::Output)
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.kind.hash(state);
        self.activation.hash(state);
        self.bias.to_bits().hash(state);
        self.default.to_bits().hash(state);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_constructors() {
        let n = Node::input(3);
        assert!(n.is_input());
        assert_eq!(n.activation, Activation::Linear);

        let n = Node::output(4, Activation::Sigmoid).with_bias(0.5).with_default(1.);
        assert!(n.is_output());
        assert_eq!(n.id, NodeId(4));
        assert_eq!(n.bias, 0.5);
        assert_eq!(n.default, 1.);
    }

    #[test]
    fn test_deserialize_defaults() {
        let n: Node = serde_json::from_str(r#"{"id": 9, "kind": "hidden"}"#).unwrap();
        assert_eq!(n, Node::hidden(9, Activation::Linear));
    }
}

//! Failures surfaced while compiling a [Genome](crate::Genome) or evaluating a
//! [Plan](crate::Plan). None of them are transient: the caller has to fix the genome or the
//! input before retrying.

use crate::genome::NodeId;
use thiserror::Error;

/// Structural inconsistencies inside a genome
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("edge {edge} references node {node}, which is not in the genome")]
    DanglingEdge { edge: usize, node: NodeId },
    #[error("node id {0} is used more than once")]
    DuplicateNode(NodeId),
    #[error("edge {edge} ends at input node {node}")]
    InputHasIncoming { edge: usize, node: NodeId },
}

/// Genomes that are well formed, but can't produce anything
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Invalid {
    #[error("genome has no nodes")]
    NoNodes,
    #[error("genome has no output nodes")]
    NoOutputs,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("malformed genome: {0}")]
    MalformedGenome(#[from] Malformed),
    #[error("invalid genome: {0}")]
    InvalidGenome(#[from] Invalid),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("no value supplied for input node {0}")]
    MissingInput(NodeId),
}

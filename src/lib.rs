//! Compile evolved genomes into flat evaluation plans, and run them.
//!
//! ```
//! use phenome::{evaluate, Activation, Edge, Genome, Node, NodeId};
//!
//! let genome = Genome::with_io(2, 1, Activation::Tanh)
//!     .with_node(Node::hidden(3, Activation::Relu))
//!     .with_edge(Edge::new(0, 3, 1.))
//!     .with_edge(Edge::new(1, 3, -1.))
//!     .with_edge(Edge::new(3, 2, 2.));
//!
//! let plan = genome.compile().unwrap();
//! let mut state = plan.state();
//! let out = evaluate(&plan, &mut state, &[(NodeId(0), 1.), (NodeId(1), 0.)]).unwrap();
//! assert_eq!(out[&NodeId(2)], 2f64.tanh());
//! ```

pub mod activation;
pub mod cache;
pub mod constants;
pub mod error;
pub mod genome;
pub mod macros;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod plan;
pub mod random;
pub mod resolve;
pub mod state;

pub use activation::Activation;
pub use cache::PlanCache;
pub use error::{CompileError, EvalError, Invalid, Malformed};
pub use genome::{Edge, Genome, Node, NodeId, NodeKind};
pub use plan::{compile, Link, Plan, Slot, Step};
pub use state::{evaluate, new_state, reset, Inputs, State};

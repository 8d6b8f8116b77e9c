//! Evaluating [Plan]s.
//!
//! A [State] belongs to one evaluation session. It holds the values of the last evaluation,
//! which recurrent links read on the next one. Plans are never written to, so any number of
//! sessions may share one plan, each with their own state.

use crate::{error::EvalError, genome::NodeId, plan::Plan, plan::Slot};
use core::hash::BuildHasher;
use fxhash::FxHashMap;
use std::collections::{BTreeMap, HashMap};

/// Values for a plan's input nodes, looked up by id
pub trait Inputs {
    fn value(&self, id: NodeId) -> Option<f64>;
}

impl<S: BuildHasher> Inputs for HashMap<NodeId, f64, S> {
    #[inline]
    fn value(&self, id: NodeId) -> Option<f64> {
        self.get(&id).copied()
    }
}

impl Inputs for BTreeMap<NodeId, f64> {
    #[inline]
    fn value(&self, id: NodeId) -> Option<f64> {
        self.get(&id).copied()
    }
}

impl Inputs for [(NodeId, f64)] {
    fn value(&self, id: NodeId) -> Option<f64> {
        self.iter().find_map(|&(k, v)| (k == id).then_some(v))
    }
}

impl<const N: usize> Inputs for [(NodeId, f64); N] {
    fn value(&self, id: NodeId) -> Option<f64> {
        self.as_slice().value(id)
    }
}

impl Inputs for Vec<(NodeId, f64)> {
    fn value(&self, id: NodeId) -> Option<f64> {
        self.as_slice().value(id)
    }
}

#[derive(Debug, Clone)]
pub struct State {
    /// scratch for the evaluation in progress
    current: Vec<f64>,
    /// every slot's value as of the last evaluation
    previous: Vec<f64>,
    defaults: Vec<f64>,
    output: Vec<f64>,
}

impl State {
    pub fn new(plan: &Plan) -> Self {
        Self {
            current: plan.defaults().to_vec(),
            previous: plan.defaults().to_vec(),
            defaults: plan.defaults().to_vec(),
            output: vec![0.; plan.outputs().len()],
        }
    }

    /// Forget everything evaluated so far, as if this state had just been created
    pub fn reset(&mut self) {
        self.previous.copy_from_slice(&self.defaults);
        self.current.copy_from_slice(&self.defaults);
        for o in self.output.iter_mut() {
            *o = 0.;
        }
    }

    /// Every slot's value as of the last evaluation, laid out as described in [Plan]
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.previous
    }

    /// Output of the last evaluation, in [Plan::outputs] order. Zeroed until the first one
    #[inline]
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// Evaluate `plan` once with positional input, given in [Plan::inputs] order. Values past the
    /// plan's inputs are ignored. Returns outputs in [Plan::outputs] order.
    pub fn step(&mut self, plan: &Plan, input: &[f64]) -> Result<&[f64], EvalError> {
        self.check(plan);
        if let Some(&id) = plan.inputs().get(input.len()) {
            return Err(EvalError::MissingInput(id));
        }
        let n = plan.inputs().len();
        self.current[..n].copy_from_slice(&input[..n]);
        self.run(plan);
        Ok(&self.output)
    }

    /// Evaluate `plan` once, looking up each input by id. Fails with the lowest missing input
    /// id, leaving this state as it was.
    pub fn step_with(
        &mut self,
        plan: &Plan,
        inputs: &(impl Inputs + ?Sized),
    ) -> Result<&[f64], EvalError> {
        self.check(plan);
        if let Some(&id) = plan.inputs().iter().find(|&&id| inputs.value(id).is_none()) {
            return Err(EvalError::MissingInput(id));
        }
        for (slot, &id) in plan.inputs().iter().enumerate() {
            self.current[slot] = inputs.value(id).unwrap_or_default();
        }
        self.run(plan);
        Ok(&self.output)
    }

    fn check(&self, plan: &Plan) {
        assert_eq!(
            self.previous.len(),
            plan.slots(),
            "state has {} slots, but plan has {}",
            self.previous.len(),
            plan.slots()
        );
        assert_eq!(
            self.output.len(),
            plan.outputs().len(),
            "state has {} outputs, but plan has {}",
            self.output.len(),
            plan.outputs().len()
        );
        assert!(
            self.defaults
                .iter()
                .zip(plan.defaults())
                .all(|(a, b)| a.to_bits() == b.to_bits()),
            "state was created with different node defaults than the plan's"
        );
    }

    /// Run every step, with inputs already seeded into `current`
    fn run(&mut self, plan: &Plan) {
        let base = plan.inputs().len();
        for (p, step) in plan.steps().iter().enumerate() {
            let mut sum = step.bias;
            for link in &step.links {
                sum += link.weight
                    * match link.slot {
                        Slot::Current(i) => self.current[i],
                        Slot::Previous(i) => self.previous[i],
                    };
            }
            self.current[base + p] = step.activation.apply(sum);
        }

        for (o, &s) in self.output.iter_mut().zip(plan.output_slots()) {
            *o = self.current[s];
        }
        // every slot is rewritten next evaluation, so the old snapshot becomes scratch
        core::mem::swap(&mut self.current, &mut self.previous);
    }
}

/// A fresh state for `plan`, with recurrent links reading node defaults
pub fn new_state(plan: &Plan) -> State {
    State::new(plan)
}

pub fn reset(state: &mut State) {
    state.reset();
}

/// Evaluate `plan` once, producing the value of every output node
pub fn evaluate(
    plan: &Plan,
    state: &mut State,
    inputs: &(impl Inputs + ?Sized),
) -> Result<FxHashMap<NodeId, f64>, EvalError> {
    let output = state.step_with(plan, inputs)?;
    Ok(plan.outputs().iter().copied().zip(output.iter().copied()).collect())
}

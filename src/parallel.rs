//! Population scale compilation and evaluation on rayon's thread pool.
//!
//! Plans are shared read-only between workers, and every closure invocation gets a state of
//! its own, so no two workers ever write to the same memory.

use crate::{compile, error::CompileError, genome::Genome, plan::Plan, state::State};
use rayon::prelude::*;

/// Compile every genome, keeping results in population order
pub fn compile_all(genomes: &[Genome]) -> Vec<Result<Plan, CompileError>> {
    genomes.par_iter().map(compile).collect()
}

/// Run `f` once per plan, each time with a fresh state for that plan
pub fn evaluate_all<T, F>(plans: &[Plan], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&Plan, &mut State) -> T + Sync,
{
    plans
        .par_iter()
        .map(|plan| {
            let mut state = plan.state();
            f(plan, &mut state)
        })
        .collect()
}

/// Run `trials` independent sessions of one plan, passing each its trial index and a fresh state
pub fn evaluate_trials<T, F>(plan: &Plan, trials: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, &mut State) -> T + Sync,
{
    (0..trials)
        .into_par_iter()
        .map(|trial| {
            let mut state = plan.state();
            f(trial, &mut state)
        })
        .collect()
}

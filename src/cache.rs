//! Compiled plans keyed by genome content, so that genomes surviving unchanged from one
//! generation to the next aren't compiled again.

use crate::{error::CompileError, genome::Genome, plan::Plan};
use fxhash::FxHashMap;
use log::{debug, trace};
use std::sync::Arc;

/// Plans are never evicted: the cache holds every distinct genome it has compiled until
/// [PlanCache::clear], which callers are expected to run between generations.
#[derive(Debug, Default)]
pub struct PlanCache {
    /// fingerprint -> every (genome, plan) pair sharing it
    plans: FxHashMap<u64, Vec<(Genome, Arc<Plan>)>>,
    hits: usize,
    misses: usize,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The plan for `genome`, compiling it only if no equal genome was compiled before.
    /// Genomes that fail to compile aren't cached.
    pub fn get_or_compile(&mut self, genome: &Genome) -> Result<Arc<Plan>, CompileError> {
        let fingerprint = genome.fingerprint();
        let cached = self
            .plans
            .get(&fingerprint)
            .and_then(|bucket| bucket.iter().find(|(g, _)| g == genome))
            .map(|(_, plan)| Arc::clone(plan));
        if let Some(plan) = cached {
            self.hits += 1;
            trace!("plan cache hit for {fingerprint:016x}");
            return Ok(plan);
        }

        let plan = Arc::new(genome.compile()?);
        self.misses += 1;
        debug!(
            "plan cache miss for {fingerprint:016x}, {} plans cached",
            self.len() + 1
        );
        self.plans
            .entry(fingerprint)
            .or_default()
            .push((genome.clone(), Arc::clone(&plan)));
        Ok(plan)
    }

    pub fn len(&self) -> usize {
        self.plans.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// (hits, misses) since creation or the last [PlanCache::clear]
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        self.plans.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

//! The decision engine: owns the random stream, the candidate counter, the
//! per-tree mutation cap, and the consumed-index set shared across forks.
//!
//! Determinism contract: the stream is a ChaCha8 generator seeded explicitly
//! at construction; selections use a uniform `gen_range` over the ordered
//! candidate slice and the rate gate spends one `f64` draw. Reproducing a
//! seed and an input tree reproduces the output exactly, across process
//! restarts.

use crate::config::EngineConfig;
use crate::error::{MutationError, Result};
use crate::operators::OperatorCategory;
use crate::report::MutationRecord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Outcome of a single candidate decision. The traversal substitutes a
/// `Replaced` node in place and passes an `Unchanged` one through (typically
/// descending into its children).
#[derive(Debug, Clone, PartialEq)]
pub enum Mutated<N> {
    Replaced(N),
    Unchanged(N),
}

impl<N> Mutated<N> {
    pub fn is_replaced(&self) -> bool {
        matches!(self, Mutated::Replaced(_))
    }

    pub fn into_inner(self) -> N {
        match self {
            Mutated::Replaced(node) | Mutated::Unchanged(node) => node,
        }
    }
}

/// What to log if the mutation is authorized. The engine fills in the
/// candidate index itself.
#[derive(Debug, Clone, Copy)]
pub struct MutationDetails {
    pub category: OperatorCategory,
    pub original: Option<&'static str>,
    pub replacement: &'static str,
}

pub struct Engine {
    config: EngineConfig,
    rng: ChaCha8Rng,
    candidate_index: usize,
    mutations_applied: usize,
    /// Candidate indices already consumed by a mutation in any engine sharing
    /// this set. The mutex serializes check-and-insert so the no-repeat
    /// guarantee holds even when forks run on separate threads.
    consumed: Arc<Mutex<HashSet<usize>>>,
    records: Vec<MutationRecord>,
}

impl Engine {
    /// Build an engine from a validated configuration and an explicit seed.
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            candidate_index: 0,
            mutations_applied: 0,
            consumed: Arc::new(Mutex::new(HashSet::new())),
            records: Vec::new(),
        })
    }

    /// Spawn a child engine for the next mutant of the same tree: same
    /// config, same shared consumed set, fresh counters, and a random stream
    /// seeded from this engine's stream (never from system entropy) so the
    /// whole family is reproducible from one root seed.
    pub fn fork(&mut self) -> Engine {
        let seed = self.rng.gen::<u64>();
        Engine {
            config: self.config.clone(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            candidate_index: 0,
            mutations_applied: 0,
            consumed: Arc::clone(&self.consumed),
            records: Vec::new(),
        }
    }

    /// Select one element uniformly at random. An empty candidate set is a
    /// broken operator table, not a runtime condition.
    pub fn pick<T: Copy>(&mut self, candidates: &[T]) -> Result<T> {
        if candidates.is_empty() {
            return Err(MutationError::InvalidInput(
                "pick called with an empty candidate set".to_string(),
            ));
        }
        let index = self.rng.gen_range(0..candidates.len());
        Ok(candidates[index])
    }

    /// Gate one candidate. Ordering matters: the cap and the consumed set are
    /// checked before the rate draw, so the stream only advances for
    /// candidates that reach the draw.
    fn decide(&mut self, rate: f64) -> bool {
        if self.mutations_applied >= self.config.max_mutations {
            return false;
        }

        // A poisoned set is still a usable set; recover rather than panic
        let mut consumed = self
            .consumed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if consumed.contains(&self.candidate_index) {
            return false;
        }

        if self.rng.gen::<f64>() >= rate {
            return false;
        }

        self.mutations_applied += 1;
        consumed.insert(self.candidate_index);
        true
    }

    /// Evaluate one candidate: bump the candidate index (every visited
    /// candidate consumes exactly one index, mutated or not), then either
    /// materialize the replacement through the converter or hand the node
    /// back unchanged.
    pub fn mutate_node<N, F>(
        &mut self,
        node: N,
        details: MutationDetails,
        rate: f64,
        materialize: F,
    ) -> Result<Mutated<N>>
    where
        F: FnOnce(N) -> Result<N>,
    {
        self.candidate_index += 1;

        if self.decide(rate) {
            self.records.push(MutationRecord {
                candidate_index: self.candidate_index,
                category: details.category,
                original: details.original.map(|s| s.to_string()),
                replacement: details.replacement.to_string(),
            });
            Ok(Mutated::Replaced(materialize(node)?))
        } else {
            Ok(Mutated::Unchanged(node))
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// How many candidates this engine has been shown so far.
    pub fn candidates_seen(&self) -> usize {
        self.candidate_index
    }

    pub fn mutations_applied(&self) -> usize {
        self.mutations_applied
    }

    pub fn records(&self) -> &[MutationRecord] {
        &self.records
    }

    pub fn take_records(&mut self) -> Vec<MutationRecord> {
        std::mem::take(&mut self.records)
    }
}

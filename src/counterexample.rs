//! ═══════════════════════════════════════════════════════════════════════════════
//! COUNTEREXAMPLE — Distinct States, Identical Behaviour
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Falsifies "different predictor states cannot behave identically forever".
//!
//! A witness is a pair (fresh, biased) such that:
//! - both adapted to the same circular sequence S,
//! - both kept reproducing S for SimulatedInfinity further rounds,
//! - fresh != biased.
//!
//! Search:
//!   L = initial length (clamped to >= 2)
//!   repeat SimulatedInfinity attempts at L, then back off to L-1, ..., 2
//!   no witness at L = 2  →  NoCounterexample
//!
//! Attempts are bounded by SimulatedInfinity × (initial length − 1).
//! ═══════════════════════════════════════════════════════════════════════════════

use rand::Rng;
use tracing::debug;

use crate::adaptation::{adapted, biased_predictor, persists};
use crate::config::SimulatedInfinity;
use crate::error::{TestbedError, TestbedResult};
use crate::pattern::PatternLike;
use crate::predictor::PredictiveState;
use crate::sequence::{circular_sequence, TemporalSequence};

const MIN_LENGTH: usize = 2;

// ═══════════════════════════════════════════════════════════════════════════════
// WITNESS
// ═══════════════════════════════════════════════════════════════════════════════

/// Two unequal predictor states that reproduce the same sequence
#[derive(Debug, Clone)]
pub struct Witness<C, P> {
    /// Predictor that started from the blank state
    pub fresh: C,
    /// Predictor that started from unrelated random experience
    pub biased: C,
    /// Sequence both predictors reproduce
    pub sequence: TemporalSequence<P>,
    /// Length at which the witness was found
    pub length: usize,
    /// Attempts spent across all lengths, including the successful one
    pub attempts: usize,
}

// ═══════════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterexampleSearch {
    pub initial_length: usize,
    /// Length of the random experience fed to the biased predictor
    pub bias_strength: usize,
    pub infinity: SimulatedInfinity,
}

impl CounterexampleSearch {
    /// Search starting at `initial_length`, biasing with as many patterns
    pub fn new(initial_length: usize, infinity: SimulatedInfinity) -> Self {
        Self {
            initial_length,
            bias_strength: initial_length.max(1),
            infinity,
        }
    }

    pub fn with_bias_strength(mut self, bias_strength: usize) -> Self {
        self.bias_strength = bias_strength;
        self
    }

    /// Upper bound on attempts before the search gives up
    pub fn max_attempts(&self) -> usize {
        self.infinity.get() * (self.initial_length.max(MIN_LENGTH) - 1)
    }

    pub fn run<C, P, R>(&self, rng: &mut R) -> TestbedResult<Witness<C, P>>
    where
        C: PredictiveState<P>,
        P: PatternLike,
        R: Rng + ?Sized,
    {
        let mut attempts = 0;
        let mut length = self.initial_length.max(MIN_LENGTH);

        loop {
            for _ in 0..self.infinity.get() {
                attempts += 1;
                if let Some((fresh, biased, sequence)) = self.attempt::<C, P, R>(rng, length)? {
                    debug!(length, attempts, "counterexample found");
                    return Ok(Witness {
                        fresh,
                        biased,
                        sequence,
                        length,
                        attempts,
                    });
                }
            }

            if length == MIN_LENGTH {
                return Err(TestbedError::NoCounterexample {
                    initial_length: self.initial_length,
                    attempts,
                });
            }
            debug!(from = length, to = length - 1, attempts, "counterexample search backing off");
            length -= 1;
        }
    }

    fn attempt<C, P, R>(&self, rng: &mut R, length: usize) -> TestbedResult<Option<(C, C, Vec<P>)>>
    where
        C: PredictiveState<P>,
        P: PatternLike,
        R: Rng + ?Sized,
    {
        let sequence = circular_sequence(rng, length)?;
        let mut fresh = C::default();
        let mut biased: C = biased_predictor(rng, self.bias_strength)?;

        let found = adapted(&mut fresh, &sequence, self.infinity)
            && adapted(&mut biased, &sequence, self.infinity)
            && persists(&mut fresh, &sequence, self.infinity)
            && persists(&mut biased, &sequence, self.infinity)
            && fresh != biased;

        Ok(found.then_some((fresh, biased, sequence)))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptation::free_behaviour;
    use crate::pattern::Bits;
    use crate::predictor::{EchoCortex, SlotCortex};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type P = Bits<64>;

    #[test]
    fn test_slot_memory_yields_witness_at_initial_length() {
        let mut rng = StdRng::seed_from_u64(4);
        let search = CounterexampleSearch::new(3, SimulatedInfinity::new(20));

        let witness = search.run::<SlotCortex<P, 8>, P, _>(&mut rng).unwrap();

        assert_eq!(witness.length, 3);
        assert_eq!(witness.attempts, 1);
        assert_ne!(witness.fresh, witness.biased);

        let mut fresh = witness.fresh.clone();
        let mut biased = witness.biased.clone();
        assert_eq!(free_behaviour(&mut fresh, 12), free_behaviour(&mut biased, 12));
    }

    #[test]
    fn test_search_exhausts_with_bounded_attempts() {
        let mut rng = StdRng::seed_from_u64(4);
        let search = CounterexampleSearch::new(4, SimulatedInfinity::new(10));

        let err = search.run::<EchoCortex<P>, P, _>(&mut rng).unwrap_err();

        assert_eq!(
            err,
            TestbedError::NoCounterexample {
                initial_length: 4,
                attempts: 30
            }
        );
        assert_eq!(search.max_attempts(), 30);
        assert!(err.is_property_failure());
    }

    #[test]
    fn test_short_initial_length_is_clamped() {
        let mut rng = StdRng::seed_from_u64(4);
        let search = CounterexampleSearch::new(1, SimulatedInfinity::new(10));

        let err = search.run::<EchoCortex<P>, P, _>(&mut rng).unwrap_err();

        assert_eq!(
            err,
            TestbedError::NoCounterexample {
                initial_length: 1,
                attempts: 10
            }
        );
    }

    #[test]
    fn test_backoff_reaches_learnable_length() {
        // the biased start context costs a slot, leaving room for a length-3 cycle
        let mut rng = StdRng::seed_from_u64(6);
        let search = CounterexampleSearch::new(6, SimulatedInfinity::new(20)).with_bias_strength(1);

        let witness = search.run::<SlotCortex<P, 5>, P, _>(&mut rng).unwrap();

        assert_eq!(witness.length, 3);
        assert_eq!(witness.attempts, 61);
    }
}

//! Transition memory with a plasticity budget.
//!
//! Transitions (previous input -> next input) start out tentative. A tentative
//! transition seen often enough in a row is committed, paying its cost
//! (`ones(successor) + 1`) from a fixed plasticity budget. Only committed
//! transitions drive predictions, and every prediction is masked by the
//! complement of the last input so a bit never spikes twice in a row.
//!
//! How many confirmations a commit needs depends on a running trace of the
//! whole input history, so adaptation time depends on both the content of a
//! sequence and on everything fed before it. Once the budget is spent no new
//! transition can be committed.

use std::collections::VecDeque;

use crate::pattern::{count_ones, PatternLike};

use super::PredictiveState;

pub const DEFAULT_PLASTICITY: usize = 48;

/// Tentative transitions kept before the oldest is forgotten
pub const TENTATIVE_SLOTS: usize = 32;

/// Contradictions in a row before a committed successor is replaced
const OVERWRITE_STRIKES: u8 = 2;

const TRACE_SEED: u64 = 0x9E37_79B9_7F4A_7C15;
const TRACE_PRIME: u64 = 0x0000_0100_0000_01B3;

#[derive(Debug, Clone, PartialEq)]
struct Committed<P> {
    context: P,
    successor: P,
    strikes: u8,
}

#[derive(Debug, Clone, PartialEq)]
struct Tentative<P> {
    context: P,
    successor: P,
    seen: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionCortex<P, const PLASTICITY: usize = DEFAULT_PLASTICITY> {
    last: P,
    committed: Vec<Committed<P>>,
    tentative: VecDeque<Tentative<P>>,
    spent: usize,
    trace: u64,
}

impl<P: PatternLike, const PLASTICITY: usize> Default for TransitionCortex<P, PLASTICITY> {
    fn default() -> Self {
        Self {
            last: P::default(),
            committed: Vec::new(),
            tentative: VecDeque::with_capacity(TENTATIVE_SLOTS),
            spent: 0,
            trace: 0,
        }
    }
}

impl<P: PatternLike, const PLASTICITY: usize> TransitionCortex<P, PLASTICITY> {
    /// Budget left for committing new transitions
    pub fn plasticity_left(&self) -> usize {
        PLASTICITY - self.spent
    }

    pub fn committed_transitions(&self) -> usize {
        self.committed.len()
    }

    /// Two or three confirmations, chosen by the history trace
    fn required_confirmations(&self) -> u8 {
        2 + (self.trace >> 63) as u8
    }

    fn absorb(&mut self, pattern: &P) {
        let mut trace = self.trace ^ TRACE_SEED;
        for i in 0..pattern.size() {
            trace = (trace.rotate_left(5) ^ u64::from(pattern.bit(i))).wrapping_mul(TRACE_PRIME);
        }
        self.trace = trace;
    }

    fn learn(&mut self, pattern: &P) {
        if let Some(t) = self.committed.iter_mut().find(|t| t.context == self.last) {
            if t.successor == *pattern {
                t.strikes = 0;
            } else {
                t.strikes += 1;
                if t.strikes >= OVERWRITE_STRIKES {
                    t.successor = pattern.clone();
                    t.strikes = 0;
                }
            }
            return;
        }

        let required = self.required_confirmations();
        let Some(i) = self.tentative.iter().position(|t| t.context == self.last) else {
            if self.tentative.len() == TENTATIVE_SLOTS {
                self.tentative.pop_front();
            }
            self.tentative.push_back(Tentative {
                context: self.last.clone(),
                successor: pattern.clone(),
                seen: 1,
            });
            return;
        };

        let candidate = &mut self.tentative[i];
        if candidate.successor == *pattern {
            candidate.seen = candidate.seen.saturating_add(1);
        } else {
            candidate.successor = pattern.clone();
            candidate.seen = 1;
        }
        if candidate.seen < required {
            return;
        }

        let cost = count_ones(pattern) + 1;
        if self.spent + cost > PLASTICITY {
            return;
        }
        if let Some(candidate) = self.tentative.remove(i) {
            self.spent += cost;
            self.committed.push(Committed {
                context: candidate.context,
                successor: candidate.successor,
                strikes: 0,
            });
        }
    }
}

impl<P: PatternLike, const PLASTICITY: usize> PredictiveState<P>
    for TransitionCortex<P, PLASTICITY>
{
    fn feed(&mut self, pattern: &P) -> &mut Self {
        self.learn(pattern);
        self.absorb(pattern);
        self.last = pattern.clone();
        self
    }

    fn predict(&self) -> P {
        self.committed
            .iter()
            .find(|t| t.context == self.last)
            .map(|t| t.successor.and(&self.last.complement()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Bits;

    type Cortex = TransitionCortex<Bits<16>>;

    fn spike() -> Bits<16> {
        Bits::from_indices(&[3])
    }

    #[test]
    fn test_fresh_cortex_predicts_nothing() {
        let cortex = Cortex::default();
        assert_eq!(cortex.predict(), Bits::zero());
        assert_eq!(cortex.plasticity_left(), DEFAULT_PLASTICITY);
    }

    #[test]
    fn test_repeated_transition_is_committed() {
        let mut cortex = Cortex::default();
        for _ in 0..3 {
            cortex.feed(&spike()).feed(&Bits::zero());
        }
        // zero -> spike and spike -> zero have each been seen three times
        assert_eq!(cortex.committed_transitions(), 2);
        assert_eq!(cortex.plasticity_left(), DEFAULT_PLASTICITY - 3);
        assert_eq!(cortex.predict(), spike());
    }

    #[test]
    fn test_prediction_respects_refractory_mask() {
        let mut cortex = Cortex::default();
        for _ in 0..4 {
            cortex.feed(&spike());
        }
        // spike -> spike is committed but can never be predicted
        assert_eq!(cortex.committed_transitions(), 1);
        assert_eq!(cortex.predict(), Bits::zero());
    }

    #[test]
    fn test_single_contradiction_keeps_committed_successor() {
        let other = Bits::<16>::from_indices(&[9]);
        let mut cortex = Cortex::default();
        for _ in 0..3 {
            cortex.feed(&spike()).feed(&Bits::zero());
        }
        cortex.feed(&other).feed(&Bits::zero());

        assert_eq!(cortex.predict(), spike());
    }

    #[test]
    fn test_history_changes_state() {
        let mut a = Cortex::default();
        let mut b = Cortex::default();
        a.feed(&Bits::zero());
        assert_ne!(a, b);
        b.feed(&Bits::zero());
        assert_eq!(a, b);
    }
}

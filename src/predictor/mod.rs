//! ═══════════════════════════════════════════════════════════════════════════════
//! PREDICTOR — Black-Box Predictive State Interface
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Minimal trait for the model under test (the "cortex").
//!
//! The harness never looks inside a predictor. It only:
//! - default-constructs it (the unbiased start state)
//! - feeds it patterns
//! - asks it for the next expected pattern
//! - clones and compares whole states
//!
//! The reference implementations here exist to validate the harness itself.
//! ═══════════════════════════════════════════════════════════════════════════════

mod echo;
mod slots;
mod transition;

pub use echo::EchoCortex;
pub use slots::SlotCortex;
pub use transition::{TransitionCortex, DEFAULT_PLASTICITY, TENTATIVE_SLOTS};

use crate::pattern::PatternLike;

// ═══════════════════════════════════════════════════════════════════════════════
// PREDICTOR TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Capability contract for predictors
///
/// `Default` must be the unbiased start state: every default-constructed
/// instance compares equal. `PartialEq` must be a deep comparison of state.
/// `feed` and `predict` are assumed total; the harness has no timeout.
pub trait PredictiveState<P: PatternLike>: Clone + PartialEq + Default {
    /// Advance the state by one input pattern
    fn feed(&mut self, pattern: &P) -> &mut Self;

    /// Next expected pattern given the current state
    fn predict(&self) -> P;

    fn feed_all(&mut self, patterns: &[P]) -> &mut Self {
        for pattern in patterns {
            self.feed(pattern);
        }
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════

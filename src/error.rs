//! ═══════════════════════════════════════════════════════════════════════════════
//! ERROR — Unified Error Type for the Testbed
//! ═══════════════════════════════════════════════════════════════════════════════
//! Two fatal classes: precondition violations and property failures.
//! Neither is recovered from; the suite runner stops at the first one.
//! ═══════════════════════════════════════════════════════════════════════════════

use thiserror::Error;

use crate::axioms::Axiom;

/// The unified error type for the testbed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TestbedError {
    /// A sequence of unsupported length was requested
    #[error("{operation} requires length >= {minimum}, got {length}")]
    InvalidLength {
        operation: &'static str,
        length: usize,
        minimum: usize,
    },

    /// Configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No circular sequence of this length was learnable by a fresh predictor
    #[error("no learnable sequence of length {length} found in {attempts} samples")]
    NoLearnableSequence { length: usize, attempts: usize },

    /// An axiom check evaluated to false
    #[error("axiom #{} {} violated: {check}", .axiom.number(), .axiom.name())]
    AxiomViolated { axiom: Axiom, check: &'static str },

    /// Counterexample search exhausted every length down to the floor
    #[error(
        "no counterexample found from length {initial_length} down to 2 \
         ({attempts} attempts): behaviour fully determines state"
    )]
    NoCounterexample {
        initial_length: usize,
        attempts: usize,
    },
}

impl TestbedError {
    /// Property failures, as opposed to precondition violations
    pub fn is_property_failure(&self) -> bool {
        matches!(
            self,
            TestbedError::AxiomViolated { .. } | TestbedError::NoCounterexample { .. }
        )
    }
}

/// Result alias used throughout the crate
pub type TestbedResult<T> = Result<T, TestbedError>;

/// Turn a boolean check into an axiom verdict
pub(crate) fn ensure(condition: bool, axiom: Axiom, check: &'static str) -> TestbedResult<()> {
    if condition {
        Ok(())
    } else {
        Err(TestbedError::AxiomViolated { axiom, check })
    }
}

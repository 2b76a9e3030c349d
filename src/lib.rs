//! ═══════════════════════════════════════════════════════════════════════════════
//! PREDICTOR AXIOMS — Conformance Testbed for Predictive State Machines
//! ═══════════════════════════════════════════════════════════════════════════════
//! Plug in a predictor, get a fail-fast verdict on twelve behavioural axioms.
//! Learning is judged only by what the predictor predicts, never by its insides.
//! ═══════════════════════════════════════════════════════════════════════════════

// ═══════════════════════════════════════════════════════════════════════════════
// CONTRACTS — What a pattern and a predictor must provide
// ═══════════════════════════════════════════════════════════════════════════════

pub mod pattern;
pub mod predictor;

// ═══════════════════════════════════════════════════════════════════════════════
// HARNESS — Generation, adaptation, probing, search, axioms
// ═══════════════════════════════════════════════════════════════════════════════

pub mod adaptation;
pub mod axioms;
pub mod capacity;
pub mod counterexample;
pub mod sequence;

// ═══════════════════════════════════════════════════════════════════════════════
// RUNTIME — Configuration, errors, logging, reports
// ═══════════════════════════════════════════════════════════════════════════════

pub mod config;
pub mod error;
pub mod report;
pub mod telemetry;
pub mod testbed;

pub use axioms::{Axiom, AxiomSuite, SuiteContext};
pub use config::{SimulatedInfinity, TestbedConfig};
pub use counterexample::{CounterexampleSearch, Witness};
pub use error::{TestbedError, TestbedResult};
pub use pattern::{Bits, PatternLike};
pub use predictor::{EchoCortex, PredictiveState, SlotCortex, TransitionCortex};
pub use report::{AxiomOutcome, SuiteReport};
pub use testbed::Testbed;

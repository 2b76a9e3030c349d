//! ═══════════════════════════════════════════════════════════════════════════════
//! AXIOMS — Ordered, Fail-Fast Conformance Battery
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//!   #  1-5   structural    state equality under construction and feeding
//!   #  6-10  adaptive      what can and cannot be learned, and how fast
//!   # 11-12  behavioural   what free-running and disrupted behaviour reveals
//!
//! Every scenario builds its own predictors and answers with one boolean.
//! The first false answer stops the run.
//! ═══════════════════════════════════════════════════════════════════════════════

mod adaptive;
mod behavioural;
mod structural;

use std::fmt;
use std::marker::PhantomData;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::SimulatedInfinity;
use crate::error::TestbedResult;
use crate::pattern::PatternLike;
use crate::predictor::PredictiveState;
use crate::report::SuiteReport;

// ═══════════════════════════════════════════════════════════════════════════════
// CATALOGUE
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axiom {
    Genesis,
    Emergence,
    Determinism,
    Time,
    Sensitivity,
    RefractoryPeriod,
    Scalability,
    Ageing,
    ContentDependence,
    StateDependence,
    Unobservability,
    Advantage,
}

impl Axiom {
    /// Execution order
    pub const ALL: [Axiom; 12] = [
        Axiom::Genesis,
        Axiom::Emergence,
        Axiom::Determinism,
        Axiom::Time,
        Axiom::Sensitivity,
        Axiom::RefractoryPeriod,
        Axiom::Scalability,
        Axiom::Ageing,
        Axiom::ContentDependence,
        Axiom::StateDependence,
        Axiom::Unobservability,
        Axiom::Advantage,
    ];

    pub fn number(&self) -> usize {
        match self {
            Axiom::Genesis => 1,
            Axiom::Emergence => 2,
            Axiom::Determinism => 3,
            Axiom::Time => 4,
            Axiom::Sensitivity => 5,
            Axiom::RefractoryPeriod => 6,
            Axiom::Scalability => 7,
            Axiom::Ageing => 8,
            Axiom::ContentDependence => 9,
            Axiom::StateDependence => 10,
            Axiom::Unobservability => 11,
            Axiom::Advantage => 12,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Axiom::Genesis => "genesis",
            Axiom::Emergence => "emergence",
            Axiom::Determinism => "determinism",
            Axiom::Time => "time",
            Axiom::Sensitivity => "sensitivity",
            Axiom::RefractoryPeriod => "refractory_period",
            Axiom::Scalability => "scalability",
            Axiom::Ageing => "ageing",
            Axiom::ContentDependence => "content_dependence",
            Axiom::StateDependence => "state_dependence",
            Axiom::Unobservability => "unobservability",
            Axiom::Advantage => "advantage",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Axiom::Genesis => "Genesis",
            Axiom::Emergence => "Emergence",
            Axiom::Determinism => "Determinism",
            Axiom::Time => "Time",
            Axiom::Sensitivity => "Sensitivity",
            Axiom::RefractoryPeriod => "Refractory period",
            Axiom::Scalability => "Scalability",
            Axiom::Ageing => "Ageing",
            Axiom::ContentDependence => "Content-dependence",
            Axiom::StateDependence => "State-dependence",
            Axiom::Unobservability => "Unobservability",
            Axiom::Advantage => "Advantage",
        }
    }

    pub fn statement(&self) -> &'static str {
        match self {
            Axiom::Genesis => "The system starts from a blank state, free of bias.",
            Axiom::Emergence => "Bias emerges from the inputs.",
            Axiom::Determinism => "Equal experience implies equal state.",
            Axiom::Time => "The ordering of inputs affects the system.",
            Axiom::Sensitivity => "A one-bit difference in the past is never washed out.",
            Axiom::RefractoryPeriod => "Each spike must be followed by a no-spike.",
            Axiom::Scalability => "The system can adapt to sequences longer than its capacity.",
            Axiom::Ageing => "An endless stream of new sequences eventually defeats adaptation.",
            Axiom::ContentDependence => "Adaptation time depends on the sequence content.",
            Axiom::StateDependence => "Adaptation time depends on prior experience.",
            Axiom::Unobservability => "Different internal states can produce identical behaviour.",
            Axiom::Advantage => "Adapted predictors predict more accurately.",
        }
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.number(), self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SUITE
// ═══════════════════════════════════════════════════════════════════════════════

/// Parameters shared by every scenario of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteContext {
    /// Probed capacity of a fresh predictor
    pub capacity: usize,
    pub infinity: SimulatedInfinity,
}

impl SuiteContext {
    /// Length of the sequences the adaptive scenarios learn
    pub fn sequence_length(&self) -> usize {
        self.capacity.max(2)
    }
}

/// The axiom battery for predictor `C` over patterns `P`
pub struct AxiomSuite<C, P> {
    context: SuiteContext,
    _marker: PhantomData<fn() -> (C, P)>,
}

impl<C, P> AxiomSuite<C, P>
where
    C: PredictiveState<P>,
    P: PatternLike,
{
    pub fn new(capacity: usize, infinity: SimulatedInfinity) -> Self {
        Self {
            context: SuiteContext { capacity, infinity },
            _marker: PhantomData,
        }
    }

    /// Evaluate a single axiom
    pub fn check<R: Rng + ?Sized>(&self, axiom: Axiom, rng: &mut R) -> TestbedResult<()> {
        let ctx = &self.context;
        match axiom {
            Axiom::Genesis => structural::genesis::<C, P, R>(ctx, rng),
            Axiom::Emergence => structural::emergence::<C, P, R>(ctx, rng),
            Axiom::Determinism => structural::determinism::<C, P, R>(ctx, rng),
            Axiom::Time => structural::time::<C, P, R>(ctx, rng),
            Axiom::Sensitivity => structural::sensitivity::<C, P, R>(ctx, rng),
            Axiom::RefractoryPeriod => adaptive::refractory_period::<C, P, R>(ctx, rng),
            Axiom::Scalability => adaptive::scalability::<C, P, R>(ctx, rng),
            Axiom::Ageing => adaptive::ageing::<C, P, R>(ctx, rng),
            Axiom::ContentDependence => adaptive::content_dependence::<C, P, R>(ctx, rng),
            Axiom::StateDependence => adaptive::state_dependence::<C, P, R>(ctx, rng),
            Axiom::Unobservability => behavioural::unobservability::<C, P, R>(ctx, rng),
            Axiom::Advantage => behavioural::advantage::<C, P, R>(ctx, rng),
        }
    }

    /// Run every axiom in order, stopping at the first failure
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R, report: &mut SuiteReport) -> TestbedResult<()> {
        for axiom in Axiom::ALL {
            info!(axiom = axiom.number(), name = axiom.name(), "{}", axiom.statement());
            let result = self.check(axiom, rng);
            report.record(axiom, &result);
            if let Err(e) = result {
                warn!(axiom = axiom.number(), error = %e, "axiom failed");
                return Err(e);
            }
        }
        info!(axioms = Axiom::ALL.len(), "all axioms hold");
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════

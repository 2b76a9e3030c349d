//! ═══════════════════════════════════════════════════════════════════════════════
//! REPORT — Suite Verdict
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Verdict rule:
//!   PASS iff every axiom was evaluated AND none failed
//!
//! The suite is fail-fast, so a failing report lists the axioms up to and
//! including the first failure and nothing after it.
//! ═══════════════════════════════════════════════════════════════════════════════

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::axioms::Axiom;
use crate::error::{TestbedError, TestbedResult};

const RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════════";

// ═══════════════════════════════════════════════════════════════════════════════
// OUTCOMES
// ═══════════════════════════════════════════════════════════════════════════════

/// Verdict for a single axiom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxiomOutcome {
    pub number: usize,
    pub key: String,
    pub name: String,
    pub passed: bool,
    /// Error message when the axiom failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AxiomOutcome {
    pub fn new(axiom: Axiom, result: &TestbedResult<()>) -> Self {
        Self {
            number: axiom.number(),
            key: axiom.key().to_string(),
            name: axiom.name().to_string(),
            passed: result.is_ok(),
            detail: result.as_ref().err().map(|e| e.to_string()),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SUITE REPORT
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Predictor type under test
    pub predictor: String,
    /// Bits per pattern
    pub pattern_width: usize,
    pub simulated_infinity: usize,
    /// Seed that reproduces this run
    pub seed: u64,
    /// Probed capacity; absent if the probe itself failed
    pub capacity: Option<usize>,
    pub outcomes: Vec<AxiomOutcome>,
    /// First error that stopped the run
    pub failure: Option<String>,
    #[serde(skip)]
    error: Option<TestbedError>,
}

impl SuiteReport {
    pub fn new(predictor: impl Into<String>, pattern_width: usize, simulated_infinity: usize, seed: u64) -> Self {
        Self {
            predictor: predictor.into(),
            pattern_width,
            simulated_infinity,
            seed,
            ..Self::default()
        }
    }

    pub fn record(&mut self, axiom: Axiom, result: &TestbedResult<()>) {
        self.outcomes.push(AxiomOutcome::new(axiom, result));
        if let Err(e) = result {
            self.fail(e.clone());
        }
    }

    /// Stop the report at an error outside any axiom (e.g. the capacity probe)
    pub fn fail(&mut self, error: TestbedError) {
        self.failure = Some(error.to_string());
        self.error = Some(error);
    }

    pub fn passed(&self) -> bool {
        self.failure.is_none() && self.outcomes.len() == Axiom::ALL.len()
    }

    pub fn error(&self) -> Option<&TestbedError> {
        self.error.as_ref()
    }

    /// `Ok(self)` on a full pass, the stopping error otherwise
    pub fn into_result(self) -> TestbedResult<Self> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self),
        }
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "                     PREDICTOR AXIOM TESTBED REPORT")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "  Predictor:           {}", self.predictor)?;
        writeln!(f, "  Pattern width:       {} bits", self.pattern_width)?;
        writeln!(f, "  Simulated infinity:  {}", self.simulated_infinity)?;
        writeln!(f, "  Seed:                {}", self.seed)?;
        match self.capacity {
            Some(capacity) => writeln!(f, "  Capacity:            {capacity}")?,
            None => writeln!(f, "  Capacity:            n/a")?,
        }
        writeln!(f)?;

        for outcome in &self.outcomes {
            let mark = if outcome.passed { "PASS" } else { "FAIL" };
            writeln!(f, "  [{mark}] #{:<2} {}", outcome.number, outcome.name)?;
            if let Some(detail) = &outcome.detail {
                writeln!(f, "         {detail}")?;
            }
        }

        writeln!(f, "{RULE}")?;
        match (&self.failure, self.passed()) {
            (_, true) => writeln!(f, "  VERDICT: PASS")?,
            (Some(failure), false) => writeln!(f, "  VERDICT: FAIL  {failure}")?,
            (None, false) => writeln!(f, "  VERDICT: INCOMPLETE")?,
        }
        write!(f, "{RULE}")
    }
}

//! ═══════════════════════════════════════════════════════════════════════════════
//! TESTBED — Probe, Then Run the Battery
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Owns the configuration and the only randomness source of a run. The seed is
//! always known, either configured or drawn once from OS entropy, and it is
//! logged and reported so any run can be replayed exactly.
//! ═══════════════════════════════════════════════════════════════════════════════

use std::marker::PhantomData;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::axioms::AxiomSuite;
use crate::capacity::max_adaptable_length;
use crate::config::TestbedConfig;
use crate::error::TestbedResult;
use crate::pattern::PatternLike;
use crate::predictor::PredictiveState;
use crate::report::SuiteReport;

pub struct Testbed<C, P> {
    config: TestbedConfig,
    seed: u64,
    rng: StdRng,
    label: String,
    _marker: PhantomData<fn() -> (C, P)>,
}

impl<C, P> Testbed<C, P>
where
    C: PredictiveState<P>,
    P: PatternLike,
{
    pub fn new(config: TestbedConfig) -> TestbedResult<Self> {
        config.validate()?;
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed: u64 = rand::rng().random();
                info!(seed, "no seed configured, drew one from entropy");
                seed
            }
        };
        Ok(Self {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
            label: std::any::type_name::<C>().to_string(),
            _marker: PhantomData,
        })
    }

    /// Name shown in reports instead of the predictor's type name
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &TestbedConfig {
        &self.config
    }

    pub fn probe_capacity(&mut self) -> TestbedResult<usize> {
        let capacity = max_adaptable_length::<C, P, _>(&mut self.rng, self.config.infinity())?;
        info!(capacity, predictor = %self.label, "probed capacity");
        Ok(capacity)
    }

    /// Probe capacity, then run every axiom until the first failure
    pub fn run(&mut self) -> SuiteReport {
        let infinity = self.config.infinity();
        let mut report = SuiteReport::new(
            self.label.clone(),
            P::default().size(),
            infinity.get(),
            self.seed,
        );
        info!(
            predictor = %self.label,
            seed = self.seed,
            simulated_infinity = infinity.get(),
            "starting axiom testbed"
        );

        let capacity = match self.probe_capacity() {
            Ok(capacity) => capacity,
            Err(e) => {
                report.fail(e);
                return report;
            }
        };
        report.capacity = Some(capacity);

        let suite = AxiomSuite::<C, P>::new(capacity, infinity);
        if let Err(e) = suite.run(&mut self.rng, &mut report) {
            debug!(error = %e, "suite stopped early");
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axioms::Axiom;
    use crate::error::TestbedError;
    use crate::pattern::Bits;
    use crate::predictor::{EchoCortex, SlotCortex};

    type P = Bits<64>;

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = TestbedConfig::default().with_simulated_infinity(1);
        let err = Testbed::<EchoCortex<P>, P>::new(config).err();
        assert!(matches!(err, Some(TestbedError::InvalidConfig(_))));
    }

    #[test]
    fn test_seed_is_drawn_when_missing() {
        let testbed = Testbed::<EchoCortex<P>, P>::new(TestbedConfig::default()).unwrap();
        let replay = TestbedConfig::default().with_seed(testbed.seed());
        assert_eq!(
            Testbed::<EchoCortex<P>, P>::new(replay).unwrap().seed(),
            testbed.seed()
        );
    }

    #[test]
    fn test_echo_report() {
        let config = TestbedConfig::default().with_simulated_infinity(40).with_seed(3);
        let mut testbed = Testbed::<EchoCortex<P>, P>::new(config).unwrap().with_label("echo");

        let report = testbed.run();

        assert_eq!(report.predictor, "echo");
        assert_eq!(report.pattern_width, 64);
        assert_eq!(report.seed, 3);
        assert_eq!(report.capacity, Some(1));
        assert!(!report.passed());
        assert!(matches!(
            report.error(),
            Some(TestbedError::AxiomViolated {
                axiom: Axiom::Sensitivity,
                ..
            })
        ));
    }

    #[test]
    fn test_same_seed_same_report() {
        let config = TestbedConfig::default().with_simulated_infinity(60).with_seed(12);
        let first = Testbed::<SlotCortex<P, 6>, P>::new(config.clone()).unwrap().run();
        let second = Testbed::<SlotCortex<P, 6>, P>::new(config).unwrap().run();

        assert_eq!(first.capacity, Some(5));
        assert_eq!(first.capacity, second.capacity);
        assert_eq!(first.outcomes, second.outcomes);
    }
}

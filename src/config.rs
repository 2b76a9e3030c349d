//! Testbed configuration.
//!
//! Layering: defaults, then environment (`AXIOMS_SIMULATED_INFINITY`,
//! `AXIOMS_SEED`), then whatever the caller overrides (the CLI flags).

use serde::{Deserialize, Serialize};

use crate::error::{TestbedError, TestbedResult};

pub const DEFAULT_SIMULATED_INFINITY: usize = 500;

pub const ENV_SIMULATED_INFINITY: &str = "AXIOMS_SIMULATED_INFINITY";
pub const ENV_SEED: &str = "AXIOMS_SEED";

/// Bound standing in for "unboundedly many" attempts, repetitions and steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulatedInfinity(usize);

impl SimulatedInfinity {
    pub const fn new(bound: usize) -> Self {
        Self(bound)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    pub const fn is_reached(self, count: usize) -> bool {
        count >= self.0
    }
}

impl Default for SimulatedInfinity {
    fn default() -> Self {
        Self(DEFAULT_SIMULATED_INFINITY)
    }
}

impl std::fmt::Display for SimulatedInfinity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for a testbed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestbedConfig {
    /// Bound substituted for "unboundedly many attempts"
    pub simulated_infinity: usize,
    /// Seed for the randomness source; drawn from OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for TestbedConfig {
    fn default() -> Self {
        Self {
            simulated_infinity: DEFAULT_SIMULATED_INFINITY,
            seed: None,
        }
    }
}

impl TestbedConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> TestbedResult<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> TestbedResult<()> {
        self.apply_overrides(
            std::env::var(ENV_SIMULATED_INFINITY).ok().as_deref(),
            std::env::var(ENV_SEED).ok().as_deref(),
        )
    }

    fn apply_overrides(&mut self, infinity: Option<&str>, seed: Option<&str>) -> TestbedResult<()> {
        if let Some(raw) = infinity {
            self.simulated_infinity = raw.trim().parse().map_err(|e| {
                TestbedError::InvalidConfig(format!("{ENV_SIMULATED_INFINITY}={raw:?}: {e}"))
            })?;
        }
        if let Some(raw) = seed {
            let seed = raw
                .trim()
                .parse()
                .map_err(|e| TestbedError::InvalidConfig(format!("{ENV_SEED}={raw:?}: {e}")))?;
            self.seed = Some(seed);
        }
        Ok(())
    }

    pub fn infinity(&self) -> SimulatedInfinity {
        SimulatedInfinity::new(self.simulated_infinity)
    }

    pub fn with_simulated_infinity(mut self, simulated_infinity: usize) -> Self {
        self.simulated_infinity = simulated_infinity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> TestbedResult<()> {
        // circular sequences need two steps, and one adaptation round must fit
        if self.simulated_infinity < 2 {
            return Err(TestbedError::InvalidConfig(format!(
                "simulated_infinity must be >= 2, got {}",
                self.simulated_infinity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TestbedConfig::default();
        assert_eq!(config.simulated_infinity, 500);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_infinity_bound() {
        let infinity = TestbedConfig::default().infinity();
        assert_eq!(infinity, SimulatedInfinity::default());
        assert!(!infinity.is_reached(499));
        assert!(infinity.is_reached(500));
        assert_eq!(serde_json::to_string(&infinity).unwrap(), "500");
    }

    #[test]
    fn test_overrides_parse() {
        let mut config = TestbedConfig::default();
        config.apply_overrides(Some(" 64 "), Some("7")).unwrap();
        assert_eq!(config.simulated_infinity, 64);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_bad_override_is_rejected() {
        let mut config = TestbedConfig::default();
        let err = config.apply_overrides(Some("lots"), None).unwrap_err();
        assert!(matches!(err, TestbedError::InvalidConfig(_)));
        assert_eq!(config.simulated_infinity, 500);
    }

    #[test]
    fn test_validate_rejects_tiny_infinity() {
        let config = TestbedConfig::default().with_simulated_infinity(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: TestbedConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
        assert_eq!(config.simulated_infinity, DEFAULT_SIMULATED_INFINITY);
        assert_eq!(config.seed, Some(3));
    }
}

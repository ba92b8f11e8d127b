use crate::error::{EvoError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for a single evolutionary run.
///
/// `max_attempts` caps every rejection-sampling loop (random generation,
/// recombination, mutation draws). The default `None` keeps those loops
/// unbounded: a survivability constraint that is near-impossible to satisfy
/// will then spin until the process is killed, which is the documented
/// behavior rather than a bug. Set a cap to get a distinguishable
/// [`EvoError::Infeasible`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of generations to breed.
    pub generations: usize,
    /// Archive capacity: how many all-time best candidates to keep.
    pub n_best: usize,
    /// Children produced per generation; also the initial population size.
    pub n_children: usize,
    /// Fire the progress callback every this many generations. Must be
    /// supplied together with a callback, or not at all.
    pub progress_every: Option<usize>,
    /// Fixed RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Upper bound for each rejection-sampling loop.
    pub max_attempts: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: 1000,
            n_best: 5,
            n_children: 4,
            progress_every: None,
            seed: None,
            max_attempts: None,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n_children < 1 {
            return Err(EvoError::Configuration(
                "n_children must be at least 1".to_string(),
            ));
        }
        if self.n_best < 1 {
            return Err(EvoError::Configuration(
                "n_best must be at least 1".to_string(),
            ));
        }
        if self.progress_every == Some(0) {
            return Err(EvoError::Configuration(
                "progress_every must be at least 1".to_string(),
            ));
        }
        if self.max_attempts == Some(0) {
            return Err(EvoError::Configuration(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: RunConfig = toml::from_str(&contents)
            .map_err(|e| EvoError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| EvoError::Configuration(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}

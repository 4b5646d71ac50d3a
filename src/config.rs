use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::PercolationError;
use crate::stats::PercolationStats;

/// Parameters of one threshold experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Grid side length `N`.
    pub grid_size: usize,
    /// Number of independent trials `T`.
    pub trials: usize,
    /// Seed for a reproducible run. Without one the generator is seeded from OS entropy.
    pub seed: Option<u64>,
}

impl ExperimentConfig {
    pub fn new(grid_size: usize, trials: usize) -> Self {
        Self {
            grid_size,
            trials,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), PercolationError> {
        if self.grid_size == 0 {
            return Err(PercolationError::InvalidGridSize(self.grid_size));
        }
        if self.trials == 0 {
            return Err(PercolationError::InvalidTrialCount(self.trials));
        }
        Ok(())
    }

    pub fn run(&self) -> Result<PercolationStats, PercolationError> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        PercolationStats::new(self.grid_size, self.trials, &mut rng)
    }
}

//! Monte-Carlo estimation of the percolation threshold.
use core::fmt;

use log::{debug, info, trace};
use num_traits::Float;

use crate::error::PercolationError;
use crate::percolation::Percolation;
use crate::random::UniformSource;

/// z-score of a two-sided 95% confidence interval under the normal approximation.
const CONFIDENCE_95: f64 = 1.96;

/// Thresholds observed over `trials` independent runs on an `n × n` grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PercolationStats {
    n: usize,
    trials: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Run `trials` independent experiments on fresh `n × n` grids, drawing sites from `rng`.
    pub fn new<R: UniformSource + ?Sized>(
        n: usize,
        trials: usize,
        rng: &mut R,
    ) -> Result<Self, PercolationError> {
        if n == 0 {
            return Err(PercolationError::InvalidGridSize(n));
        }
        if trials == 0 {
            return Err(PercolationError::InvalidTrialCount(trials));
        }

        let thresholds = (0..trials)
            .map(|trial| {
                let threshold = run_trial(n, rng)?;
                debug!("trial {trial}: percolated at threshold {threshold}");
                Ok(threshold)
            })
            .collect::<Result<Vec<_>, PercolationError>>()?;

        let stats = Self {
            n,
            trials,
            thresholds,
        };
        info!(
            "{} trials on a {n}x{n} grid: mean {}, stddev {}",
            stats.trials,
            stats.mean(),
            stats.stddev()
        );
        Ok(stats)
    }

    pub fn grid_size(&self) -> usize {
        self.n
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Per-trial fraction of open sites at the moment the grid first percolated.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        mean(&self.thresholds)
    }

    /// Sample standard deviation. NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        stddev(&self.thresholds)
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials as f64).sqrt()
    }
}

impl fmt::Display for PercolationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mean() = {:?}", self.mean())?;
        writeln!(f, "stddev() = {:?}", self.stddev())?;
        write!(
            f,
            "95% confidence interval = [{:?}, {:?}]",
            self.confidence_lo(),
            self.confidence_hi()
        )
    }
}

/// Open uniformly random sites of a fresh `n × n` grid until it percolates, and return the
/// fraction of sites opened.
pub fn run_trial<R: UniformSource + ?Sized>(n: usize, rng: &mut R) -> Result<f64, PercolationError> {
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        open_random_site(&mut grid, rng)?;
    }
    Ok(grid.number_of_open_sites() as f64 / grid.sites() as f64)
}

/// Draw coordinates over the whole grid, retrying until a blocked site comes up, then open it.
/// The grid must still have a blocked site.
fn open_random_site<R: UniformSource + ?Sized>(
    grid: &mut Percolation,
    rng: &mut R,
) -> Result<(), PercolationError> {
    let n = grid.size();
    loop {
        let row = rng.uniform_int(1, n + 1);
        let col = rng.uniform_int(1, n + 1);
        if !grid.is_open(row, col)? {
            return grid.open(row, col);
        }
        trace!("site ({row}, {col}) already open, drawing again");
    }
}

/// Arithmetic mean. NaN when `xs` is empty.
pub fn mean<T: Float>(xs: &[T]) -> T {
    let sum = xs.iter().fold(T::zero(), |acc, &x| acc + x);
    sum / count(xs.len())
}

/// Sample standard deviation, dividing by `len - 1`. NaN when `xs` has fewer than two elements.
pub fn stddev<T: Float>(xs: &[T]) -> T {
    let mu = mean(xs);
    let squares = xs.iter().fold(T::zero(), |acc, &x| {
        let d = x - mu;
        acc + d * d
    });
    (squares / (count::<T>(xs.len()) - T::one())).sqrt()
}

fn count<T: Float>(n: usize) -> T {
    num_traits::cast::<usize, T>(n).unwrap_or_else(T::nan)
}

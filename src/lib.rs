//! # Percolation
//!
//! A model of site percolation on an `N × N` grid, and a Monte-Carlo driver that estimates the
//! percolation threshold: the fraction of sites which must be open before an open path joins
//! the top row to the bottom row.
//!
//! ```rust
//! use percolation::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let stats = PercolationStats::new(10, 20, &mut rng).unwrap();
//! assert!(stats.thresholds().iter().all(|&t| t > 0.0 && t <= 1.0));
//! assert!(stats.confidence_lo() <= stats.mean() && stats.mean() <= stats.confidence_hi());
//! ```
//!
//! The grid ([`percolation::Percolation`]) is backed by two weighted quick-union structures
//! ([`union_find::UnionFind`]). Randomness enters only through [`random::UniformSource`], which
//! every [`rand::Rng`] implements.

pub mod config;
pub mod error;
pub mod percolation;
pub mod random;
pub mod stats;
pub mod union_find;

pub mod prelude {
    //! The types needed to run an experiment.
    pub use crate::config::ExperimentConfig;
    pub use crate::error::PercolationError;
    pub use crate::percolation::Percolation;
    pub use crate::random::UniformSource;
    pub use crate::stats::PercolationStats;
    pub use crate::union_find::{UnionFind, UnionFindError};
}

use crate::union_find::UnionFindError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    #[error("grid size must be greater than zero, got {0}")]
    InvalidGridSize(usize),
    #[error("trial count must be greater than zero, got {0}")]
    InvalidTrialCount(usize),
    #[error("site ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error(transparent)]
    UnionFind(#[from] UnionFindError),
}

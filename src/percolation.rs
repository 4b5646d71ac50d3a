use crate::error::PercolationError;
use crate::union_find::UnionFind;

/// An `n × n` grid of sites, each either blocked or open.
///
/// Sites are addressed by 1-based `(row, col)` coordinates. Connectivity is tracked in two
/// independent union-find structures which share the site indices `0..n²`:
///
/// - `grid` has a virtual top node and a virtual bottom node, and answers [`Percolation::percolates`].
/// - `full` has only the virtual top node, and answers [`Percolation::is_full`]. Without the
///   bottom node, a site attached only to the bottom row can never be reported full through
///   a detour via the bottom ("backwash").
///
/// ```rust
/// # use percolation::percolation::Percolation;
/// let mut p = Percolation::new(2).unwrap();
/// p.open(1, 1).unwrap();
/// assert!(!p.percolates());
/// p.open(2, 1).unwrap();
/// assert!(p.percolates());
/// assert!(p.is_full(2, 1).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    grid: UnionFind,
    full: UnionFind,
    open: Vec<bool>,
    open_sites: usize,
    top: usize,
    bottom: usize,
}

impl Percolation {
    /// A grid with every site blocked. Fails when `n == 0` or when `n² + 2` overflows `usize`.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n == 0 {
            return Err(PercolationError::InvalidGridSize(n));
        }

        let sites = n
            .checked_mul(n)
            .filter(|s| s.checked_add(2).is_some())
            .ok_or(PercolationError::InvalidGridSize(n))?;
        Ok(Self {
            n,
            grid: UnionFind::new(sites + 2),
            full: UnionFind::new(sites + 1),
            open: vec![false; sites],
            open_sites: 0,
            top: sites,
            bottom: sites + 1,
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Total number of sites, `n²`.
    pub fn sites(&self) -> usize {
        self.open.len()
    }

    /// Open the site at `(row, col)` and connect it to its open neighbours.
    /// Opening an already open site changes nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        let idx = self.index(row, col)?;
        if self.open[idx] {
            return Ok(());
        }

        self.open[idx] = true;
        self.open_sites += 1;

        if row == 1 {
            self.grid.union(self.top, idx)?;
            self.full.union(self.top, idx)?;
        }

        // Only `grid` ever sees the virtual bottom node.
        if row == self.n {
            self.grid.union(self.bottom, idx)?;
        }

        for (r, c) in self.neighbours(row, col) {
            let other = self.linear(r, c);
            if self.open[other] {
                self.grid.union(other, idx)?;
                self.full.union(other, idx)?;
            }
        }

        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        Ok(self.open[self.index(row, col)?])
    }

    /// Is the site at `(row, col)` open and connected to the top row through open sites?
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let idx = self.index(row, col)?;
        Ok(self.full.connected(idx, self.top)?)
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Does an open path join the top row to the bottom row?
    pub fn percolates(&self) -> bool {
        self.grid
            .connected(self.top, self.bottom)
            .expect("virtual nodes exist")
    }

    /// Validated 0-based linear index of `(row, col)`.
    fn index(&self, row: usize, col: usize) -> Result<usize, PercolationError> {
        if self.contains(row, col) {
            Ok(self.linear(row, col))
        } else {
            Err(PercolationError::OutOfBounds {
                row,
                col,
                size: self.n,
            })
        }
    }

    fn contains(&self, row: usize, col: usize) -> bool {
        in_grid(self.n, row, col)
    }

    fn linear(&self, row: usize, col: usize) -> usize {
        self.n * (row - 1) + (col - 1)
    }

    /// In-bounds neighbours among up, right, down and left.
    fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let n = self.n;
        [
            (row.wrapping_sub(1), col),
            (row, col + 1),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
        ]
        .into_iter()
        .filter(move |&(r, c)| in_grid(n, r, c))
    }
}

fn in_grid(n: usize, row: usize, col: usize) -> bool {
    (1..=n).contains(&row) && (1..=n).contains(&col)
}

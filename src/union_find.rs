//! Weighted quick-union over the elements `0..n`.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnionFindError {
    #[error("element {index} is out of range for a union-find of {len} elements")]
    OutOfRange { index: usize, len: usize },
}

/// A forest of parent pointers where each tree is one connected component.
///
/// Merges attach the root of the smaller tree beneath the root of the larger one, so
/// every tree has height at most `log2(n)` and [`UnionFind::find`] needs no mutation.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// `n` singleton components.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn components(&self) -> usize {
        self.components
    }

    /// The root of the tree containing `x`.
    pub fn find(&self, x: usize) -> Result<usize, UnionFindError> {
        self.check(x)?;
        let mut node = x;
        while self.parent[node] != node {
            node = self.parent[node];
        }
        Ok(node)
    }

    /// Merge the components containing `x` and `y`. Merging a component with itself is a no-op.
    pub fn union(&mut self, x: usize, y: usize) -> Result<(), UnionFindError> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(());
        }

        let (root, parent) = if self.size[root_x] >= self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };

        self.parent[root] = parent;
        self.size[parent] += self.size[root];
        self.components -= 1;
        Ok(())
    }

    pub fn connected(&self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(x)? == self.find(y)?)
    }

    fn check(&self, index: usize) -> Result<(), UnionFindError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(UnionFindError::OutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}

//! Per-axis neighbourhood index ranges.

use std::iter::Chain;
use std::ops::Range;

/// The local bin indices neighbouring a bin along one axis.
///
/// Stored as at most two contiguous ranges so that a periodic
/// neighbourhood crossing the wrap point (e.g. `10, 1, 2` on a ten-bin
/// closed axis) needs no allocation. Iteration yields the first range,
/// then the second, which for a wrapped neighbourhood is the walk order
/// from the lowest offset to the highest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighbourhoodIndices {
    first: Range<usize>,
    second: Range<usize>,
}

impl NeighbourhoodIndices {
    /// A neighbourhood containing no bins.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The contiguous bins `begin..end`.
    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            first: range,
            second: 0..0,
        }
    }

    /// Two contiguous runs, visited in order.
    pub fn from_ranges(first: Range<usize>, second: Range<usize>) -> Self {
        Self { first, second }
    }

    /// Number of bins in the neighbourhood.
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    /// `true` if the neighbourhood contains no bins.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if `bin` is part of the neighbourhood.
    pub fn contains(&self, bin: usize) -> bool {
        self.first.contains(&bin) || self.second.contains(&bin)
    }

    /// Iterate over the bins in walk order.
    pub fn iter(&self) -> Chain<Range<usize>, Range<usize>> {
        self.first.clone().chain(self.second.clone())
    }
}

impl IntoIterator for NeighbourhoodIndices {
    type Item = usize;
    type IntoIter = Chain<Range<usize>, Range<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.first.chain(self.second)
    }
}

impl IntoIterator for &NeighbourhoodIndices {
    type Item = usize;
    type IntoIter = Chain<Range<usize>, Range<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

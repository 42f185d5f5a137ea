//! Mixed-radix folding between local bin tuples and global indices.

use gridbin_core::GridError;

/// Storage layout of an `N`-axis grid.
///
/// Axis `i` contributes a digit in `[0, n_bins_i + 1]`; the last axis
/// varies fastest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexLayout<const N: usize> {
    extents: [usize; N],
    strides: [usize; N],
    size: usize,
}

impl<const N: usize> IndexLayout<N> {
    /// Build the layout for axes with the given real bin counts.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for `N == 0` and
    /// `Err(GridError::SizeOverflow)` if `∏(n_bins_i + 2)` overflows.
    pub fn new(n_bins: [usize; N]) -> Result<Self, GridError> {
        if N == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut extents = [0usize; N];
        for (e, n) in extents.iter_mut().zip(n_bins) {
            *e = n.checked_add(2).ok_or(GridError::SizeOverflow)?;
        }
        // strides[i] = product(extents[j] for j > i)
        let mut strides = [1usize; N];
        for i in (1..N).rev() {
            strides[i - 1] = strides[i]
                .checked_mul(extents[i])
                .ok_or(GridError::SizeOverflow)?;
        }
        let size = extents
            .iter()
            .try_fold(1usize, |acc, &e| acc.checked_mul(e))
            .ok_or(GridError::SizeOverflow)?;
        Ok(Self {
            extents,
            strides,
            size,
        })
    }

    /// Total number of cells, flow bins included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// `n_bins_i + 2` per axis.
    pub fn extents(&self) -> &[usize; N] {
        &self.extents
    }

    /// Global-index step per unit of each local index.
    pub fn strides(&self) -> &[usize; N] {
        &self.strides
    }

    /// Fold local indices into a global index. Components are not checked.
    #[inline]
    pub fn fold(&self, local: &[usize; N]) -> usize {
        local
            .iter()
            .zip(self.strides.iter())
            .map(|(l, s)| l * s)
            .sum()
    }

    /// Unfold a global index in `[0, size)` into local indices.
    #[inline]
    pub fn unfold(&self, mut global: usize) -> [usize; N] {
        let mut local = [0usize; N];
        for (l, s) in local.iter_mut().zip(self.strides.iter()) {
            *l = global / s;
            global %= s;
        }
        local
    }

    /// Check every component against its axis extent.
    pub fn check_local(&self, local: &[usize]) -> Result<(), GridError> {
        if local.len() != N {
            return Err(GridError::DimensionMismatch {
                expected: N,
                actual: local.len(),
            });
        }
        for (axis, (&index, &extent)) in local.iter().zip(self.extents.iter()).enumerate() {
            if index >= extent {
                return Err(GridError::LocalIndexOutOfRange {
                    axis,
                    index,
                    max: extent - 1,
                });
            }
        }
        Ok(())
    }

    /// Check a global index against the grid size.
    pub fn check_global(&self, index: usize) -> Result<(), GridError> {
        if index < self.size {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                index,
                size: self.size,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strides_rightmost_fastest() {
        let l = IndexLayout::new([4, 3]).unwrap();
        assert_eq!(l.extents(), &[6, 5]);
        assert_eq!(l.strides(), &[5, 1]);
        assert_eq!(l.size(), 30);
        assert_eq!(l.fold(&[2, 1]), 11);
        assert_eq!(l.unfold(11), [2, 1]);
    }

    #[test]
    fn three_axes() {
        let l = IndexLayout::new([2, 3, 2]).unwrap();
        assert_eq!(l.size(), 80);
        assert_eq!(l.strides(), &[20, 4, 1]);
        assert_eq!(l.fold(&[1, 1, 1]), 25);
    }

    #[test]
    fn zero_axes_rejected() {
        assert_eq!(IndexLayout::<0>::new([]), Err(GridError::EmptyGrid));
    }

    #[test]
    fn overflow_rejected() {
        assert_eq!(
            IndexLayout::new([usize::MAX / 2, usize::MAX / 2]),
            Err(GridError::SizeOverflow)
        );
        assert_eq!(IndexLayout::new([usize::MAX]), Err(GridError::SizeOverflow));
    }

    #[test]
    fn checks_report_offending_component() {
        let l = IndexLayout::new([4, 3]).unwrap();
        assert_eq!(l.check_local(&[5, 4]), Ok(()));
        assert_eq!(
            l.check_local(&[5, 5]),
            Err(GridError::LocalIndexOutOfRange {
                axis: 1,
                index: 5,
                max: 4
            })
        );
        assert_eq!(
            l.check_local(&[1]),
            Err(GridError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            l.check_global(30),
            Err(GridError::IndexOutOfRange { index: 30, size: 30 })
        );
    }

    proptest! {
        #[test]
        fn fold_unfold_is_bijective(
            a in 1usize..8,
            b in 1usize..8,
            c in 1usize..8,
            seed in any::<usize>(),
        ) {
            let l = IndexLayout::new([a, b, c]).unwrap();
            let g = seed % l.size();
            let local = l.unfold(g);
            prop_assert!(l.check_local(&local).is_ok());
            prop_assert_eq!(l.fold(&local), g);
        }
    }
}

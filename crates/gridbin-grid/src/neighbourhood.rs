//! Neighbourhood and closest-point queries.

use crate::grid::Grid;
use crate::index::IndexLayout;
use gridbin_axis::{BinnedAxis, NeighbourhoodIndices};

/// Fold the Cartesian product of per-axis neighbourhoods into global
/// indices. Empty if any axis contributes nothing.
pub(crate) fn fold_product<const N: usize>(
    layout: &IndexLayout<N>,
    per_axis: &[NeighbourhoodIndices; N],
) -> Vec<usize> {
    if per_axis.iter().any(NeighbourhoodIndices::is_empty) {
        return Vec::new();
    }
    let lists: [Vec<usize>; N] = std::array::from_fn(|i| per_axis[i].iter().collect());
    let total: usize = lists.iter().map(Vec::len).product();
    let mut result = Vec::with_capacity(total);
    let mut cursor = [0usize; N];
    let mut local = [0usize; N];

    loop {
        for i in 0..N {
            local[i] = lists[i][cursor[i]];
        }
        result.push(layout.fold(&local));

        // Advance odometer (rightmost = fastest).
        let mut carry = true;
        for i in (0..N).rev() {
            if carry {
                cursor[i] += 1;
                if cursor[i] < lists[i].len() {
                    carry = false;
                } else {
                    cursor[i] = 0;
                }
            }
        }
        if carry {
            break;
        }
    }
    result
}

impl<T, const N: usize> Grid<T, N> {
    /// Global indices of the cells within `offsets.0 ..= offsets.1` bins of
    /// `local` along every axis.
    ///
    /// Each axis contributes its own boundary-aware neighbourhood (see
    /// [`BinnedAxis::neighbourhood`]); the result is their Cartesian
    /// product. Closed axes wrap, bound axes stop at the real bins, open
    /// axes stop at the flow bins.
    pub fn neighbourhood_indices_with(
        &self,
        local: &[usize; N],
        offsets: (isize, isize),
    ) -> Vec<usize> {
        let per_axis: [NeighbourhoodIndices; N] =
            std::array::from_fn(|i| self.axes()[i].neighbourhood(local[i], offsets));
        fold_product(self.layout(), &per_axis)
    }

    /// Global indices of the cells within `size` bins of `local` along every
    /// axis, `local` included.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbin_axis::EquidistantAxis;
    /// use gridbin_grid::Grid;
    ///
    /// let axis = EquidistantAxis::closed(0.0, 1.0, 10).unwrap();
    /// let g: Grid<f64, 1> = Grid::new([axis.into()]).unwrap();
    /// assert_eq!(g.neighbourhood_indices(&[1], 1), vec![10, 1, 2]);
    /// assert!(g.neighbourhood_indices(&[0], 1).is_empty());
    /// ```
    pub fn neighbourhood_indices(&self, local: &[usize; N], size: usize) -> Vec<usize> {
        let size = isize::try_from(size).unwrap_or(isize::MAX);
        self.neighbourhood_indices_with(local, (-size, size))
    }

    /// [`neighbourhood_indices`](Self::neighbourhood_indices) around the
    /// cell containing `point`.
    pub fn neighbourhood_indices_at(&self, point: &[f64; N], size: usize) -> Vec<usize> {
        self.neighbourhood_indices(&self.local_bins_from_position(point), size)
    }

    /// Global indices of the grid points supporting interpolation at
    /// `point`: the containing cell and its upper neighbour along each axis.
    ///
    /// Closed axes wrap the upper neighbour onto the first bin; bound axes
    /// drop it past the last real bin.
    pub fn closest_points_indices(&self, point: &[f64; N]) -> Vec<usize> {
        self.neighbourhood_indices_with(&self.local_bins_from_position(point), (0, 1))
    }
}

//! The statically-dimensioned binned grid.

use crate::index::IndexLayout;
use gridbin_axis::{Axis, BinnedAxis};
use gridbin_core::GridError;
use std::ops::AddAssign;
use tracing::debug;

/// An `N`-dimensional grid of values indexed by binned coordinates.
///
/// Each axis is independently equidistant or variable and carries its own
/// boundary policy. Storage holds one value per cell including the
/// underflow and overflow bins of every axis, so a grid over axes with
/// `n_0, ..., n_{N-1}` real bins stores `∏(n_i + 2)` values.
///
/// A cell can be addressed three ways, which all agree:
///
/// - by a point: `at(&[x, y])`
/// - by a global index: `at_global(g)`
/// - by local bin indices: `at_local(&[i, j])`
///
/// Out-of-domain points never fail; they resolve according to each axis's
/// boundary policy.
///
/// # Examples
///
/// ```
/// use gridbin_axis::{EquidistantAxis, VariableAxis};
/// use gridbin_grid::Grid;
///
/// let x = EquidistantAxis::open(0.0, 4.0, 4).unwrap();
/// let y = VariableAxis::open(vec![0.0, 1.0, 4.0]).unwrap();
/// let mut grid: Grid<f64, 2> = Grid::new([x.into(), y.into()]).unwrap();
///
/// assert_eq!(grid.size(), 24);
/// grid.set(&[1.2, 2.5], 7.0);
/// let g = grid.global_bin_index(&[1.2, 2.5]);
/// assert_eq!(grid.local_bin_indices(g), [2, 2]);
/// assert_eq!(*grid.at_local(&[2, 2]), 7.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T, const N: usize> {
    axes: [Axis; N],
    layout: IndexLayout<N>,
    values: Vec<T>,
}

impl<T: Clone + Default, const N: usize> Grid<T, N> {
    /// Create a grid over `axes` with every cell set to `T::default()`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for `N == 0` and
    /// `Err(GridError::SizeOverflow)` if the cell count overflows `usize`.
    pub fn new(axes: [Axis; N]) -> Result<Self, GridError> {
        let layout = IndexLayout::new(std::array::from_fn(|i| axes[i].n_bins()))?;
        let size = layout.size();
        debug!(ndim = N, size, "allocating grid");
        Ok(Self {
            axes,
            layout,
            values: vec![T::default(); size],
        })
    }
}

impl<T: Clone + Default, const N: usize> TryFrom<Vec<Axis>> for Grid<T, N> {
    type Error = GridError;

    fn try_from(axes: Vec<Axis>) -> Result<Self, Self::Error> {
        let actual = axes.len();
        let axes: [Axis; N] = axes.try_into().map_err(|_| GridError::DimensionMismatch {
            expected: N,
            actual,
        })?;
        Self::new(axes)
    }
}

impl<T, const N: usize> Grid<T, N> {
    /// Number of axes.
    pub const NDIM: usize = N;

    /// Total number of cells, under/overflow included.
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Real bins per axis.
    pub fn n_bins(&self) -> [usize; N] {
        std::array::from_fn(|i| self.axes[i].n_bins())
    }

    /// The axes, in order.
    pub fn axes(&self) -> &[Axis; N] {
        &self.axes
    }

    /// Axis `i`, or `None` if `i >= N`.
    pub fn axis(&self, i: usize) -> Option<&Axis> {
        self.axes.get(i)
    }

    /// Lower domain bound of every axis.
    pub fn min(&self) -> [f64; N] {
        std::array::from_fn(|i| self.axes[i].min())
    }

    /// Upper domain bound of every axis.
    pub fn max(&self) -> [f64; N] {
        std::array::from_fn(|i| self.axes[i].max())
    }

    /// Real bin edges of every axis.
    pub fn bin_edges(&self) -> [Vec<f64>; N] {
        std::array::from_fn(|i| self.axes[i].bin_edges())
    }

    /// Storage layout.
    pub fn layout(&self) -> &IndexLayout<N> {
        &self.layout
    }

    // ── Index conversions ───────────────────────────────────────

    /// Local bin indices of the cell containing `point`.
    pub fn local_bins_from_position(&self, point: &[f64; N]) -> [usize; N] {
        std::array::from_fn(|i| self.axes[i].bin(point[i]))
    }

    /// Global index of the cell containing `point`.
    pub fn global_bin_index(&self, point: &[f64; N]) -> usize {
        self.layout.fold(&self.local_bins_from_position(point))
    }

    /// Fold local bin indices into a global index.
    ///
    /// # Panics
    ///
    /// Panics if a component lies outside `[0, n_bins_i + 1]`.
    pub fn global_bin_index_from_local(&self, local: &[usize; N]) -> usize {
        if let Err(e) = self.layout.check_local(local) {
            panic!("{e}");
        }
        self.layout.fold(local)
    }

    /// Local bin indices of global index `global`.
    pub fn local_bin_indices(&self, global: usize) -> [usize; N] {
        debug_assert!(global < self.size());
        self.layout.unfold(global)
    }

    /// `true` if every coordinate lies in its axis's `[min, max)`.
    pub fn is_inside(&self, point: &[f64; N]) -> bool {
        self.axes.iter().zip(point).all(|(a, &x)| a.is_inside(x))
    }

    // ── Bin geometry ────────────────────────────────────────────

    /// Centre of the cell at `local`.
    pub fn bin_center(&self, local: &[usize; N]) -> [f64; N] {
        std::array::from_fn(|i| self.axes[i].bin_center(local[i]))
    }

    /// Lower-left corner of the cell at `local`.
    pub fn lower_left_bin_edge(&self, local: &[usize; N]) -> [f64; N] {
        std::array::from_fn(|i| self.axes[i].lower_bin_edge(local[i]))
    }

    /// Upper-right corner of the cell at `local`.
    pub fn upper_right_bin_edge(&self, local: &[usize; N]) -> [f64; N] {
        std::array::from_fn(|i| self.axes[i].upper_bin_edge(local[i]))
    }

    // ── Value access ────────────────────────────────────────────

    /// Value of the cell containing `point`.
    pub fn at(&self, point: &[f64; N]) -> &T {
        &self.values[self.global_bin_index(point)]
    }

    /// Mutable value of the cell containing `point`.
    pub fn at_mut(&mut self, point: &[f64; N]) -> &mut T {
        let g = self.global_bin_index(point);
        &mut self.values[g]
    }

    /// Value of cell `global`.
    ///
    /// # Panics
    ///
    /// Panics if `global >= self.size()`. See [`get_global`](Self::get_global).
    pub fn at_global(&self, global: usize) -> &T {
        &self.values[global]
    }

    /// Mutable value of cell `global`.
    ///
    /// # Panics
    ///
    /// Panics if `global >= self.size()`.
    pub fn at_global_mut(&mut self, global: usize) -> &mut T {
        &mut self.values[global]
    }

    /// Value of cell `global`, or `None` past the end.
    pub fn get_global(&self, global: usize) -> Option<&T> {
        self.values.get(global)
    }

    /// Value of the cell at `local`.
    ///
    /// # Panics
    ///
    /// Panics if a component exceeds its axis's overflow bin.
    pub fn at_local(&self, local: &[usize; N]) -> &T {
        &self.values[self.global_bin_index_from_local(local)]
    }

    /// Mutable value of the cell at `local`.
    ///
    /// # Panics
    ///
    /// Panics if a component exceeds its axis's overflow bin.
    pub fn at_local_mut(&mut self, local: &[usize; N]) -> &mut T {
        let g = self.global_bin_index_from_local(local);
        &mut self.values[g]
    }

    /// Overwrite the cell containing `point`.
    pub fn set(&mut self, point: &[f64; N], value: T) {
        *self.at_mut(point) = value;
    }

    /// Add `value` to the cell containing `point`.
    pub fn accumulate(&mut self, point: &[f64; N], value: T)
    where
        T: AddAssign,
    {
        *self.at_mut(point) += value;
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.values.fill(value);
    }

    /// All cells in global-index order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// All cells in global-index order, mutably.
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }
}

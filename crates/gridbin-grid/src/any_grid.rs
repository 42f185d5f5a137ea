//! The type-erased `AnyGrid` trait and `dyn AnyGrid` downcast support.

use crate::config::GridConfig;
use crate::grid::Grid;
use gridbin_axis::Axis;
use gridbin_core::{GridError, Interpolable, LocalBins};
use std::any::Any;

/// Values a type-erased grid can hold.
///
/// Blanket-implemented for every interpolable, thread-safe, owned type.
pub trait GridValue: Interpolable + Send + Sync + 'static {}

impl<T: Interpolable + Send + Sync + 'static> GridValue for T {}

/// Runtime-dimensioned view of a [`Grid`].
///
/// Implemented for every `Grid<T, N>`. Points and index tuples are slices
/// whose length is checked against the grid's dimensionality, and global
/// and local indices are range-checked, so every fallible operation
/// returns a [`GridError`] instead of panicking.
///
/// # Object Safety
///
/// Designed for use as `Box<dyn AnyGrid<T>>`. Use `downcast_ref` on
/// `dyn AnyGrid<T>` to recover the concrete `Grid<T, N>`.
pub trait AnyGrid<T: GridValue>: Any + Send + Sync {
    /// Number of axes.
    fn ndim(&self) -> usize;

    /// Total number of cells, under/overflow included.
    fn size(&self) -> usize;

    /// Real bins per axis.
    fn n_bins(&self) -> LocalBins;

    /// Axis `i`, or `None` past the last axis.
    fn axis(&self, i: usize) -> Option<&Axis>;

    /// Global index of the cell containing `point`.
    fn global_bin_index(&self, point: &[f64]) -> Result<usize, GridError>;

    /// Fold local bin indices into a global index.
    fn global_bin_index_from_local(&self, local: &[usize]) -> Result<usize, GridError>;

    /// Local bin indices of a global index.
    fn local_bin_indices(&self, global: usize) -> Result<LocalBins, GridError>;

    /// `true` if `point` lies inside every axis's domain.
    fn is_inside(&self, point: &[f64]) -> Result<bool, GridError>;

    /// Value of the cell containing `point`.
    fn value_at(&self, point: &[f64]) -> Result<&T, GridError>;

    /// Mutable value of the cell containing `point`.
    fn value_at_mut(&mut self, point: &[f64]) -> Result<&mut T, GridError>;

    /// Value of a cell by global index.
    fn value_at_global(&self, global: usize) -> Result<&T, GridError>;

    /// Mutable value of a cell by global index.
    fn value_at_global_mut(&mut self, global: usize) -> Result<&mut T, GridError>;

    /// Value of a cell by local bin indices.
    fn value_at_local(&self, local: &[usize]) -> Result<&T, GridError>;

    /// Mutable value of a cell by local bin indices.
    fn value_at_local_mut(&mut self, local: &[usize]) -> Result<&mut T, GridError>;

    /// Overwrite the cell containing `point`.
    fn set_value(&mut self, point: &[f64], value: T) -> Result<(), GridError>;

    /// Multilinear interpolation at `point`.
    fn interpolate(&self, point: &[f64]) -> Result<T, GridError>;

    /// Global indices within `size` bins of `local` along every axis.
    fn neighbourhood_indices(&self, local: &[usize], size: usize)
        -> Result<Vec<usize>, GridError>;

    /// Global indices of the grid points supporting interpolation at `point`.
    fn closest_points_indices(&self, point: &[f64]) -> Result<Vec<usize>, GridError>;

    /// All cells in global-index order.
    fn values(&self) -> &[T];

    /// All cells in global-index order, mutably.
    fn values_mut(&mut self) -> &mut [T];

    /// Configuration record of the axes.
    fn config(&self) -> GridConfig;
}

impl<T: GridValue> dyn AnyGrid<T> {
    /// Attempt to downcast to a concrete grid type.
    pub fn downcast_ref<G: AnyGrid<T>>(&self) -> Option<&G> {
        (self as &dyn Any).downcast_ref::<G>()
    }

    /// Attempt to downcast to a concrete grid type, mutably.
    pub fn downcast_mut<G: AnyGrid<T>>(&mut self) -> Option<&mut G> {
        (self as &mut dyn Any).downcast_mut::<G>()
    }
}

fn fixed<'a, U, const N: usize>(s: &'a [U]) -> Result<&'a [U; N], GridError> {
    s.try_into().map_err(|_| GridError::DimensionMismatch {
        expected: N,
        actual: s.len(),
    })
}

impl<T: GridValue, const N: usize> Grid<T, N> {
    fn checked_local<'a>(&self, local: &'a [usize]) -> Result<&'a [usize; N], GridError> {
        self.layout().check_local(local)?;
        fixed(local)
    }
}

impl<T: GridValue, const N: usize> AnyGrid<T> for Grid<T, N> {
    fn ndim(&self) -> usize {
        N
    }

    fn size(&self) -> usize {
        Grid::size(self)
    }

    fn n_bins(&self) -> LocalBins {
        LocalBins::from_slice(&Grid::n_bins(self))
    }

    fn axis(&self, i: usize) -> Option<&Axis> {
        Grid::axis(self, i)
    }

    fn global_bin_index(&self, point: &[f64]) -> Result<usize, GridError> {
        Ok(Grid::global_bin_index(self, fixed(point)?))
    }

    fn global_bin_index_from_local(&self, local: &[usize]) -> Result<usize, GridError> {
        Ok(Grid::global_bin_index_from_local(self, self.checked_local(local)?))
    }

    fn local_bin_indices(&self, global: usize) -> Result<LocalBins, GridError> {
        self.layout().check_global(global)?;
        Ok(LocalBins::from_slice(&Grid::local_bin_indices(self, global)))
    }

    fn is_inside(&self, point: &[f64]) -> Result<bool, GridError> {
        Ok(Grid::is_inside(self, fixed(point)?))
    }

    fn value_at(&self, point: &[f64]) -> Result<&T, GridError> {
        Ok(self.at(fixed(point)?))
    }

    fn value_at_mut(&mut self, point: &[f64]) -> Result<&mut T, GridError> {
        Ok(self.at_mut(fixed(point)?))
    }

    fn value_at_global(&self, global: usize) -> Result<&T, GridError> {
        self.get_global(global).ok_or(GridError::IndexOutOfRange {
            index: global,
            size: Grid::size(self),
        })
    }

    fn value_at_global_mut(&mut self, global: usize) -> Result<&mut T, GridError> {
        self.layout().check_global(global)?;
        Ok(self.at_global_mut(global))
    }

    fn value_at_local(&self, local: &[usize]) -> Result<&T, GridError> {
        Ok(self.at_local(self.checked_local(local)?))
    }

    fn value_at_local_mut(&mut self, local: &[usize]) -> Result<&mut T, GridError> {
        let local = self.checked_local(local)?;
        Ok(self.at_local_mut(local))
    }

    fn set_value(&mut self, point: &[f64], value: T) -> Result<(), GridError> {
        self.set(fixed(point)?, value);
        Ok(())
    }

    fn interpolate(&self, point: &[f64]) -> Result<T, GridError> {
        Ok(Grid::interpolate(self, fixed(point)?))
    }

    fn neighbourhood_indices(
        &self,
        local: &[usize],
        size: usize,
    ) -> Result<Vec<usize>, GridError> {
        Ok(Grid::neighbourhood_indices(self, self.checked_local(local)?, size))
    }

    fn closest_points_indices(&self, point: &[f64]) -> Result<Vec<usize>, GridError> {
        Ok(Grid::closest_points_indices(self, fixed(point)?))
    }

    fn values(&self) -> &[T] {
        Grid::values(self)
    }

    fn values_mut(&mut self) -> &mut [T] {
        Grid::values_mut(self)
    }

    fn config(&self) -> GridConfig {
        GridConfig::from_axes(self.axes())
    }
}

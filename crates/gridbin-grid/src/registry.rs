//! Registry of grid constructors keyed by dimensionality.

use crate::any_grid::{AnyGrid, GridValue};
use crate::config::GridConfig;
use crate::grid::Grid;
use gridbin_axis::Axis;
use gridbin_core::GridError;
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

type Constructor<T> = fn(Vec<Axis>) -> Result<Box<dyn AnyGrid<T>>, GridError>;

fn construct<T: GridValue, const N: usize>(
    axes: Vec<Axis>,
) -> Result<Box<dyn AnyGrid<T>>, GridError> {
    Ok(Box::new(Grid::<T, N>::try_from(axes)?))
}

/// Builds type-erased grids from configuration records.
///
/// Dimensionality is a compile-time parameter of [`Grid`], so only the
/// instantiations registered here can be built at runtime. [`new`](Self::new)
/// registers one to four axes; more can be added with
/// [`register`](Self::register).
///
/// # Examples
///
/// ```
/// use gridbin_axis::{AxisBoundary, AxisConfig};
/// use gridbin_grid::{GridConfig, GridRegistry};
///
/// let registry = GridRegistry::<f64>::new();
/// let config = GridConfig::new(vec![AxisConfig::EquidistantAxis {
///     min: 0.0,
///     max: 1.0,
///     n_bins: 10,
///     boundary: AxisBoundary::Closed,
/// }]);
/// let grid = registry.build(&config).unwrap();
/// assert_eq!(grid.ndim(), 1);
/// assert_eq!(grid.size(), 12);
/// ```
pub struct GridRegistry<T: GridValue> {
    constructors: IndexMap<usize, Constructor<T>>,
}

impl<T: GridValue> fmt::Debug for GridRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridRegistry")
            .field("dimensions", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: GridValue> GridRegistry<T> {
    /// A registry supporting one- to four-dimensional grids.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<1>();
        registry.register::<2>();
        registry.register::<3>();
        registry.register::<4>();
        registry
    }

    /// A registry with no dimensionalities registered.
    pub fn empty() -> Self {
        Self {
            constructors: IndexMap::new(),
        }
    }

    /// Register `Grid<T, N>`. Re-registering is a no-op.
    pub fn register<const N: usize>(&mut self) -> &mut Self {
        if N > 0 {
            self.constructors.entry(N).or_insert(construct::<T, N>);
        }
        self
    }

    /// `true` if grids with `ndim` axes can be built.
    pub fn supports(&self, ndim: usize) -> bool {
        self.constructors.contains_key(&ndim)
    }

    /// Registered dimensionalities, in registration order.
    pub fn dimensions(&self) -> impl Iterator<Item = usize> + '_ {
        self.constructors.keys().copied()
    }

    /// Validate `config` and build the grid it describes.
    ///
    /// Returns `Err(GridError::EmptyGrid)` or `Err(GridError::InvalidAxis)`
    /// for invalid axis records, and `Err(GridError::UnsupportedDimension)`
    /// if no constructor is registered for the number of axes.
    pub fn build(&self, config: &GridConfig) -> Result<Box<dyn AnyGrid<T>>, GridError> {
        let axes = config.build_axes()?;
        let ndim = axes.len();
        let constructor = self
            .constructors
            .get(&ndim)
            .ok_or(GridError::UnsupportedDimension { ndim })?;
        let grid = constructor(axes)?;
        debug!(ndim, size = grid.size(), "built grid from record");
        Ok(grid)
    }

    /// Decode a JSON record and build the grid it describes.
    pub fn build_json(&self, json: &str) -> Result<Box<dyn AnyGrid<T>>, GridError> {
        self.build(&GridConfig::from_json(json)?)
    }
}

impl<T: GridValue> Default for GridRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

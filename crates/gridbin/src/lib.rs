//! gridbin: multi-dimensional binned grids.
//!
//! This is the top-level facade crate that re-exports the public API of the
//! gridbin sub-crates. Grids are built from per-dimension axes, each either
//! equidistant or variable-width, and each with an open, bound, or closed
//! (periodic) boundary.
//!
//! # Quick start
//!
//! ```rust
//! use gridbin::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Four open bins over [0, 4) by two periodic bins with edges {0, 1, 4}.
//! let mut grid: Grid<f64, 2> = Grid::new([
//!     EquidistantAxis::open(0.0, 4.0, 4)?.into(),
//!     VariableAxis::closed(vec![0.0, 1.0, 4.0])?.into(),
//! ])?;
//! assert_eq!(grid.size(), 6 * 4);
//!
//! grid.set(&[1.5, 0.5], 2.0);
//! assert_eq!(grid.global_bin_index(&[1.5, 0.5]), 9);
//! assert_eq!(*grid.at_local(&[2, 1]), 2.0);
//!
//! // The closed axis wraps: y = 5 lands back in the first bin.
//! assert_eq!(*grid.at(&[1.5, 5.0]), 2.0);
//!
//! // Rebuild the same shape at runtime from its configuration record.
//! let json = GridConfig::from_axes(grid.axes()).to_json()?;
//! let erased = GridRegistry::<f64>::new().build_json(&json)?;
//! assert_eq!(erased.ndim(), 2);
//! assert_eq!(erased.size(), grid.size());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridbin-core` | Errors, `LocalBins`, `Interpolable` |
//! | [`axis`] | `gridbin-axis` | Binning strategies, boundary policies, axis records |
//! | [`grid`] | `gridbin-grid` | `Grid`, `AnyGrid`, the registry, grid records |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`gridbin-core`).
///
/// Contains the error taxonomy ([`types::AxisError`], [`types::GridError`])
/// and the [`types::Interpolable`] value capability.
pub use gridbin_core as types;

/// One-dimensional binning axes (`gridbin-axis`).
///
/// Provides the [`axis::BinnedAxis`] trait, the [`axis::EquidistantAxis`]
/// and [`axis::VariableAxis`] strategies, and [`axis::AxisBoundary`].
pub use gridbin_axis as axis;

/// N-dimensional grids (`gridbin-grid`).
///
/// [`grid::Grid`] for statically dimensioned grids, [`grid::AnyGrid`] and
/// [`grid::GridRegistry`] when the dimensionality comes from configuration.
pub use gridbin_grid as grid;

pub use gridbin_axis::{
    Axis, AxisBoundary, AxisConfig, AxisKind, BinnedAxis, EquidistantAxis, NeighbourhoodIndices,
    VariableAxis,
};
pub use gridbin_core::{AxisError, GridError, Interpolable, LocalBins};
pub use gridbin_grid::{AnyGrid, Grid, GridConfig, GridRegistry, GridValue};

/// Common imports for typical gridbin usage.
///
/// ```rust
/// use gridbin::prelude::*;
/// ```
pub mod prelude {
    // Axes
    pub use gridbin_axis::{Axis, AxisBoundary, BinnedAxis, EquidistantAxis, VariableAxis};

    // Grids
    pub use gridbin_grid::{AnyGrid, Grid, GridConfig, GridRegistry};

    // Errors and values
    pub use gridbin_core::{AxisError, GridError, Interpolable};
}

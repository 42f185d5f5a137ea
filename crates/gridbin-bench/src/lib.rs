//! Benchmark profiles for gridbin grids.
//!
//! - [`reference_grid`]: 3D open grid, 100 x 100 x 10 real bins (~125K cells)
//! - [`periodic_grid`]: the same shape with every axis closed
//! - [`query_points`]: deterministic query points spread over and past the domain

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridbin_axis::{Axis, AxisBoundary, EquidistantAxis, VariableAxis};
use gridbin_core::GridError;
use gridbin_grid::Grid;

fn profile(boundary: AxisBoundary) -> Result<Grid<f64, 3>, GridError> {
    let x = EquidistantAxis::new(0.0, 1.0, 100, boundary)
        .map_err(|source| GridError::InvalidAxis { axis: 0, source })?;
    let y = EquidistantAxis::new(-1.0, 1.0, 100, boundary)
        .map_err(|source| GridError::InvalidAxis { axis: 1, source })?;
    // Log-spaced edges exercise the binary search path.
    let edges: Vec<f64> = (0..=10).map(|i| 10f64.powf(i as f64 / 5.0)).collect();
    let z = VariableAxis::new(edges, boundary)
        .map_err(|source| GridError::InvalidAxis { axis: 2, source })?;

    let mut grid = Grid::new([Axis::from(x), Axis::from(y), Axis::from(z)])?;
    for (i, v) in grid.values_mut().iter_mut().enumerate() {
        *v = (i % 97) as f64;
    }
    Ok(grid)
}

/// Open 3D grid with 100 x 100 x 10 real bins and non-trivial contents.
///
/// Axes: `[0, 1)` and `[-1, 1)` equidistant, then `[1, 100)` with
/// log-spaced variable edges.
pub fn reference_grid() -> Result<Grid<f64, 3>, GridError> {
    profile(AxisBoundary::Open)
}

/// [`reference_grid`] with every axis periodic.
pub fn periodic_grid() -> Result<Grid<f64, 3>, GridError> {
    profile(AxisBoundary::Closed)
}

/// `count` deterministic points covering the reference domain plus a 10%
/// margin on every side.
pub fn query_points(count: usize) -> Vec<[f64; 3]> {
    (0..count as u64)
        .map(|i| {
            let u = unit(i.wrapping_mul(6364136223846793007));
            let v = unit(i.wrapping_mul(1442695040888963407));
            let w = unit(i.wrapping_mul(2862933555777941757));
            [
                -0.1 + 1.2 * u,
                -1.2 + 2.4 * v,
                10f64.powf(-0.2 + 2.4 * w),
            ]
        })
        .collect()
}

fn unit(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}

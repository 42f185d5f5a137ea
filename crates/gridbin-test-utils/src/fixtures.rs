//! Reusable axes and grids.
//!
//! The shapes here mirror the grids the integration tests pin exact
//! indices against:
//!
//! - [`unit_grid`]: `N` axes over `[0, 1)` with one boundary policy.
//! - [`interpolation_grid`]: three coarse axes with known corner values.
//! - [`mixed_at_grid`]: equidistant x variable, filled through `set`.

use gridbin_axis::{Axis, AxisBoundary, EquidistantAxis, VariableAxis};
use gridbin_grid::Grid;

pub fn open(min: f64, max: f64, n_bins: usize) -> Axis {
    EquidistantAxis::open(min, max, n_bins)
        .expect("valid equidistant axis")
        .into()
}

pub fn bound(min: f64, max: f64, n_bins: usize) -> Axis {
    EquidistantAxis::bound(min, max, n_bins)
        .expect("valid equidistant axis")
        .into()
}

pub fn closed(min: f64, max: f64, n_bins: usize) -> Axis {
    EquidistantAxis::closed(min, max, n_bins)
        .expect("valid equidistant axis")
        .into()
}

pub fn variable(edges: &[f64]) -> Axis {
    VariableAxis::open(edges.to_vec())
        .expect("valid variable axis")
        .into()
}

/// `N` equidistant axes over `[0, 1)` with `n_bins[i]` bins each.
pub fn unit_grid<const N: usize>(n_bins: [usize; N], boundary: AxisBoundary) -> Grid<f64, N> {
    let axes = n_bins.map(|n| {
        Axis::from(EquidistantAxis::new(0.0, 1.0, n, boundary).expect("valid unit axis"))
    });
    Grid::new(axes).expect("fixture grid fits in memory")
}

/// Set every cell to its own global index.
pub fn fill_with_index<const N: usize>(grid: &mut Grid<f64, N>) {
    for (i, v) in grid.values_mut().iter_mut().enumerate() {
        *v = i as f64;
    }
}

/// Axes `[1,3]/2`, `[1,5]/2`, `[1,7]/2` with the eight grid points
/// `(x, y, z)`, `x in {1,2}`, `y in {1,3}`, `z in {1,4}` set to
/// `10, 20, ..., 80` (x fastest).
pub fn interpolation_grid() -> Grid<f64, 3> {
    let mut g = Grid::new([open(1.0, 3.0, 2), open(1.0, 5.0, 2), open(1.0, 7.0, 2)])
        .expect("fixture grid fits in memory");
    let mut value = 10.0;
    for z in [1.0, 4.0] {
        for y in [1.0, 3.0] {
            for x in [1.0, 2.0] {
                g.set(&[x, y, z], value);
                value += 10.0;
            }
        }
    }
    g
}

/// Equidistant `[0,6]/4` x variable `{0, 1.5, 3}`, with the fifteen
/// grid points `(1.5 i, 1.5 j)` set to `5 j + i`.
pub fn mixed_at_grid() -> Grid<f64, 2> {
    let mut g = Grid::new([open(0.0, 6.0, 4), variable(&[0.0, 1.5, 3.0])])
        .expect("fixture grid fits in memory");
    for j in 0..3 {
        for i in 0..5 {
            let point = [1.5 * i as f64, 1.5 * j as f64];
            g.set(&point, (5 * j + i) as f64);
        }
    }
    g
}

//! Multilinear interpolation over grid cells.

use crate::grid::Grid;
use gridbin_axis::{Axis, BinnedAxis};
use gridbin_core::Interpolable;

impl<T: Interpolable, const N: usize> Grid<T, N> {
    /// Multilinear interpolation of the stored field at `point`.
    ///
    /// Each cell's value is taken to be the field at the cell's lower-left
    /// corner. For the cell containing `point`, the `2^N` corner values are
    /// those of the cell itself and of its upper neighbours along each axis
    /// (as chosen by the axis boundary policy), weighted by the fractional
    /// position of `point` between the cell's lower-left and upper-right
    /// edges.
    ///
    /// Closed axes fold the coordinate back into the domain first. Weights
    /// are clamped to `[0, 1]`, so points past a bound or open edge take
    /// the value of the nearest cell instead of extrapolating.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbin_axis::EquidistantAxis;
    /// use gridbin_grid::Grid;
    ///
    /// let axis = EquidistantAxis::open(1.0, 3.0, 2).unwrap();
    /// let mut g: Grid<f64, 1> = Grid::new([axis.into()]).unwrap();
    /// g.set(&[1.0], 10.0);
    /// g.set(&[2.0], 20.0);
    /// assert_eq!(g.interpolate(&[1.5]), 15.0);
    /// ```
    pub fn interpolate(&self, point: &[f64; N]) -> T {
        let axes = self.axes();
        let folded: [f64; N] = std::array::from_fn(|i| fold_periodic(&axes[i], point[i]));
        let bins = self.local_bins_from_position(&folded);
        let lower_left = self.lower_left_bin_edge(&bins);
        let upper_right = self.upper_right_bin_edge(&bins);

        let mut upper_bins = [0usize; N];
        let mut upper_weights = [0.0f64; N];
        for (i, axis) in axes.iter().enumerate() {
            upper_bins[i] = axis.next_bin(bins[i]);
            upper_weights[i] =
                ((folded[i] - lower_left[i]) / (upper_right[i] - lower_left[i])).clamp(0.0, 1.0);
        }

        let mut result = T::default();
        let mut corner = [0usize; N];
        for mask in 0..(1usize << N) {
            let mut weight = 1.0;
            for i in 0..N {
                if mask & (1 << i) != 0 {
                    corner[i] = upper_bins[i];
                    weight *= upper_weights[i];
                } else {
                    corner[i] = bins[i];
                    weight *= 1.0 - upper_weights[i];
                }
            }
            if weight != 0.0 {
                result.add_scaled(self.at_local(&corner), weight);
            }
        }
        result
    }
}

/// `x` moved into `[min, max)` on closed axes; unchanged otherwise.
fn fold_periodic(axis: &Axis, x: f64) -> f64 {
    if !axis.boundary().is_periodic() || axis.is_inside(x) {
        return x;
    }
    let folded = axis.min() + (x - axis.min()).rem_euclid(axis.max() - axis.min());
    // rem_euclid can round up to the full span.
    if folded < axis.max() {
        folded
    } else {
        axis.min()
    }
}

//! Uniform-width binning axis.

use crate::axis::{AxisKind, BinnedAxis};
use crate::boundary::AxisBoundary;
use gridbin_core::AxisError;

/// `n_bins` bins of identical width covering `[min, max)`.
///
/// # Examples
///
/// ```
/// use gridbin_axis::{BinnedAxis, EquidistantAxis};
///
/// let axis = EquidistantAxis::open(0.0, 4.0, 4).unwrap();
/// assert_eq!(axis.bin(-0.3), 0);
/// assert_eq!(axis.bin(0.0), 1);
/// assert_eq!(axis.bin(3.9999), 4);
/// assert_eq!(axis.bin(4.0), 5);
/// assert_eq!(axis.bin_center(2), 1.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EquidistantAxis {
    min: f64,
    max: f64,
    n_bins: usize,
    width: f64,
    boundary: AxisBoundary,
}

impl EquidistantAxis {
    /// Create an axis with `n_bins` uniform bins over `[min, max)`.
    ///
    /// Returns `Err(AxisError::EmptyAxis)` if `n_bins == 0`,
    /// `Err(AxisError::NonFiniteBound)` if either bound is NaN or infinite,
    /// and `Err(AxisError::InvalidRange)` if `min >= max`.
    pub fn new(
        min: f64,
        max: f64,
        n_bins: usize,
        boundary: AxisBoundary,
    ) -> Result<Self, AxisError> {
        if n_bins == 0 {
            return Err(AxisError::EmptyAxis);
        }
        for value in [min, max] {
            if !value.is_finite() {
                return Err(AxisError::NonFiniteBound { value });
            }
        }
        if min >= max {
            return Err(AxisError::InvalidRange { min, max });
        }
        Ok(Self {
            min,
            max,
            n_bins,
            width: (max - min) / n_bins as f64,
            boundary,
        })
    }

    /// Open axis: out-of-domain values land in under/overflow.
    pub fn open(min: f64, max: f64, n_bins: usize) -> Result<Self, AxisError> {
        Self::new(min, max, n_bins, AxisBoundary::Open)
    }

    /// Bound axis: out-of-domain values clamp onto the edge bins.
    pub fn bound(min: f64, max: f64, n_bins: usize) -> Result<Self, AxisError> {
        Self::new(min, max, n_bins, AxisBoundary::Bound)
    }

    /// Closed (periodic) axis.
    pub fn closed(min: f64, max: f64, n_bins: usize) -> Result<Self, AxisError> {
        Self::new(min, max, n_bins, AxisBoundary::Closed)
    }

    /// Width of every bin.
    pub fn bin_width(&self) -> f64 {
        self.width
    }
}

impl BinnedAxis for EquidistantAxis {
    fn n_bins(&self) -> usize {
        self.n_bins
    }

    fn boundary(&self) -> AxisBoundary {
        self.boundary
    }

    fn kind(&self) -> AxisKind {
        AxisKind::Equidistant
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn raw_bin(&self, x: f64) -> isize {
        if x.is_nan() {
            return 0;
        }
        // Float-to-int `as` saturates, so infinities land far outside.
        (((x - self.min) / self.width).floor() as isize).saturating_add(1)
    }

    fn lower_bin_edge(&self, bin: usize) -> f64 {
        self.min + (bin as f64 - 1.0) * self.width
    }

    fn upper_bin_edge(&self, bin: usize) -> f64 {
        self.min + bin as f64 * self.width
    }

    fn bin_center(&self, bin: usize) -> f64 {
        self.min + (bin as f64 - 0.5) * self.width
    }

    fn bin_edges(&self) -> Vec<f64> {
        (0..=self.n_bins)
            .map(|i| self.min + i as f64 * self.width)
            .collect()
    }
}

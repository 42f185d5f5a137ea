//! Variable-width binning axis defined by explicit edges.

use crate::axis::{AxisKind, BinnedAxis};
use crate::boundary::AxisBoundary;
use gridbin_core::AxisError;

/// Bins delimited by strictly increasing edges.
///
/// `edges.len() - 1` real bins; bin `i` covers `[edges[i-1], edges[i])`.
///
/// # Examples
///
/// ```
/// use gridbin_axis::{BinnedAxis, VariableAxis};
///
/// let axis = VariableAxis::open(vec![0.0, 1.0, 4.0]).unwrap();
/// assert_eq!(axis.n_bins(), 2);
/// assert_eq!(axis.bin(0.7), 1);
/// assert_eq!(axis.bin(2.7), 2);
/// assert_eq!(axis.bin(4.0), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VariableAxis {
    edges: Vec<f64>,
    boundary: AxisBoundary,
}

impl VariableAxis {
    /// Create an axis from its bin edges.
    ///
    /// Returns `Err(AxisError::TooFewEdges)` for fewer than two edges,
    /// `Err(AxisError::NonFiniteBound)` if any edge is NaN or infinite, and
    /// `Err(AxisError::NonIncreasingEdges)` at the first edge that does not
    /// exceed its predecessor.
    pub fn new(edges: Vec<f64>, boundary: AxisBoundary) -> Result<Self, AxisError> {
        if edges.len() < 2 {
            return Err(AxisError::TooFewEdges { count: edges.len() });
        }
        if let Some(&value) = edges.iter().find(|e| !e.is_finite()) {
            return Err(AxisError::NonFiniteBound { value });
        }
        if let Some(i) = edges.windows(2).position(|w| w[1] <= w[0]) {
            return Err(AxisError::NonIncreasingEdges {
                index: i + 1,
                previous: edges[i],
                current: edges[i + 1],
            });
        }
        Ok(Self { edges, boundary })
    }

    /// Open axis: out-of-domain values land in under/overflow.
    pub fn open(edges: Vec<f64>) -> Result<Self, AxisError> {
        Self::new(edges, AxisBoundary::Open)
    }

    /// Bound axis: out-of-domain values clamp onto the edge bins.
    pub fn bound(edges: Vec<f64>) -> Result<Self, AxisError> {
        Self::new(edges, AxisBoundary::Bound)
    }

    /// Closed (periodic) axis.
    pub fn closed(edges: Vec<f64>) -> Result<Self, AxisError> {
        Self::new(edges, AxisBoundary::Closed)
    }

    /// The bin edges, in increasing order.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Edge `i`, extrapolated past either end with the width of the
    /// adjacent real bin.
    fn edge_at(&self, i: isize) -> f64 {
        let n = self.edges.len() - 1;
        if i < 0 {
            let w = self.edges[1] - self.edges[0];
            self.edges[0] + i as f64 * w
        } else if i as usize > n {
            let w = self.edges[n] - self.edges[n - 1];
            self.edges[n] + (i as usize - n) as f64 * w
        } else {
            self.edges[i as usize]
        }
    }
}

impl BinnedAxis for VariableAxis {
    fn n_bins(&self) -> usize {
        self.edges.len() - 1
    }

    fn boundary(&self) -> AxisBoundary {
        self.boundary
    }

    fn kind(&self) -> AxisKind {
        AxisKind::Variable
    }

    fn min(&self) -> f64 {
        self.edges[0]
    }

    fn max(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    fn raw_bin(&self, x: f64) -> isize {
        if x.is_nan() {
            return 0;
        }
        if self.boundary.is_periodic() && !self.is_inside(x) {
            // Count whole periods, then search the folded coordinate, so the
            // raw bin keeps counting past the domain like an equidistant one.
            let span = self.max() - self.min();
            let periods = ((x - self.min()) / span).floor();
            let folded = x - periods * span;
            let inner = self.edges.partition_point(|&e| e <= folded) as isize;
            return (periods as isize)
                .saturating_mul(self.n_bins() as isize)
                .saturating_add(inner);
        }
        self.edges.partition_point(|&e| e <= x) as isize
    }

    fn lower_bin_edge(&self, bin: usize) -> f64 {
        self.edge_at(bin as isize - 1)
    }

    fn upper_bin_edge(&self, bin: usize) -> f64 {
        self.edge_at(bin as isize)
    }

    fn bin_edges(&self) -> Vec<f64> {
        self.edges.clone()
    }
}

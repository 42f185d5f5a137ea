//! The `BinnedAxis` trait and the `Axis` tagged union stored by grids.

use crate::boundary::AxisBoundary;
use crate::equidistant::EquidistantAxis;
use crate::neighbourhood::NeighbourhoodIndices;
use crate::variable::VariableAxis;

/// Which binning strategy an axis uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Uniform bin width.
    Equidistant,
    /// Explicit bin edges.
    Variable,
}

/// A one-dimensional binning strategy.
///
/// Implementors supply the raw coordinate-to-bin mapping and bin
/// geometry; the boundary-policy handling on top of that is shared.
///
/// # Contract
///
/// - `n_bins() >= 1`, and real bins are numbered `1..=n_bins()`.
/// - `raw_bin(x)` is `0` below `min()`, `n_bins() + 1` at or above
///   `max()` (possibly further out), and `b` when
///   `lower_bin_edge(b) <= x < upper_bin_edge(b)`.
/// - `upper_bin_edge(b) == lower_bin_edge(b + 1)` for every `b`.
/// - Edge accessors accept the underflow and overflow bins and
///   extrapolate past the domain.
pub trait BinnedAxis {
    /// Number of real bins.
    fn n_bins(&self) -> usize;

    /// Boundary policy.
    fn boundary(&self) -> AxisBoundary;

    /// Binning strategy.
    fn kind(&self) -> AxisKind;

    /// Lower edge of the domain.
    fn min(&self) -> f64;

    /// Upper edge of the domain (exclusive).
    fn max(&self) -> f64;

    /// Bin number of `x` before the boundary policy is applied.
    fn raw_bin(&self, x: f64) -> isize;

    /// Lower edge of `bin`.
    fn lower_bin_edge(&self, bin: usize) -> f64;

    /// Upper edge of `bin`.
    fn upper_bin_edge(&self, bin: usize) -> f64;

    /// All `n_bins() + 1` edges of the real bins.
    fn bin_edges(&self) -> Vec<f64>;

    /// Centre of `bin`.
    fn bin_center(&self, bin: usize) -> f64 {
        0.5 * (self.lower_bin_edge(bin) + self.upper_bin_edge(bin))
    }

    /// Local bin index of `x` under the boundary policy.
    fn bin(&self, x: f64) -> usize {
        self.wrap_bin(self.raw_bin(x))
    }

    /// Apply the boundary policy to a raw bin number.
    fn wrap_bin(&self, raw: isize) -> usize {
        self.boundary().wrap_bin(raw, self.n_bins())
    }

    /// `true` if `min() <= x < max()`.
    fn is_inside(&self, x: f64) -> bool {
        self.min() <= x && x < self.max()
    }

    /// Bins within `bin + offsets.0 ..= bin + offsets.1` under the boundary
    /// policy. See [`AxisBoundary::neighbourhood`].
    fn neighbourhood(&self, bin: usize, offsets: (isize, isize)) -> NeighbourhoodIndices {
        self.boundary()
            .neighbourhood(bin, offsets.0, offsets.1, self.n_bins())
    }

    /// Upper interpolation corner paired with `bin`.
    fn next_bin(&self, bin: usize) -> usize {
        self.boundary().next_bin(bin, self.n_bins())
    }

    /// Real bins plus underflow and overflow.
    fn total_bins(&self) -> usize {
        self.n_bins() + 2
    }
}

/// An axis of either strategy.
///
/// Grids hold `[Axis; N]` so each dimension can independently be
/// equidistant or variable, open, bound, or closed.
#[derive(Clone, Debug, PartialEq)]
pub enum Axis {
    /// Uniform bins.
    Equidistant(EquidistantAxis),
    /// Explicit edges.
    Variable(VariableAxis),
}

impl Axis {
    /// The equidistant axis, if this is one.
    pub fn as_equidistant(&self) -> Option<&EquidistantAxis> {
        match self {
            Self::Equidistant(a) => Some(a),
            Self::Variable(_) => None,
        }
    }

    /// The variable axis, if this is one.
    pub fn as_variable(&self) -> Option<&VariableAxis> {
        match self {
            Self::Variable(a) => Some(a),
            Self::Equidistant(_) => None,
        }
    }
}

macro_rules! delegate {
    ($self:ident, $a:ident => $e:expr) => {
        match $self {
            Axis::Equidistant($a) => $e,
            Axis::Variable($a) => $e,
        }
    };
}

impl BinnedAxis for Axis {
    fn n_bins(&self) -> usize {
        delegate!(self, a => a.n_bins())
    }

    fn boundary(&self) -> AxisBoundary {
        delegate!(self, a => a.boundary())
    }

    fn kind(&self) -> AxisKind {
        delegate!(self, a => a.kind())
    }

    fn min(&self) -> f64 {
        delegate!(self, a => a.min())
    }

    fn max(&self) -> f64 {
        delegate!(self, a => a.max())
    }

    fn raw_bin(&self, x: f64) -> isize {
        delegate!(self, a => a.raw_bin(x))
    }

    fn lower_bin_edge(&self, bin: usize) -> f64 {
        delegate!(self, a => a.lower_bin_edge(bin))
    }

    fn upper_bin_edge(&self, bin: usize) -> f64 {
        delegate!(self, a => a.upper_bin_edge(bin))
    }

    fn bin_center(&self, bin: usize) -> f64 {
        delegate!(self, a => a.bin_center(bin))
    }

    fn bin_edges(&self) -> Vec<f64> {
        delegate!(self, a => a.bin_edges())
    }
}

impl From<EquidistantAxis> for Axis {
    fn from(a: EquidistantAxis) -> Self {
        Self::Equidistant(a)
    }
}

impl From<VariableAxis> for Axis {
    fn from(a: VariableAxis) -> Self {
        Self::Variable(a)
    }
}

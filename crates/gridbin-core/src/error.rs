//! Error types for axis and grid construction.
//!
//! Organized by subsystem: [`AxisError`] for invalid binning parameters,
//! [`GridError`] for grid composition, runtime arity checks, and
//! configuration records. Lookups with out-of-domain coordinates are not
//! errors; they resolve to underflow/overflow bins.

use std::error::Error;
use std::fmt;

/// Invalid axis construction parameters.
///
/// Fatal at construction time: no partially-built axis is ever returned.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisError {
    /// An equidistant axis was requested with zero bins.
    EmptyAxis,
    /// The axis domain is empty or inverted (`min >= max`).
    InvalidRange {
        /// Lower domain bound.
        min: f64,
        /// Upper domain bound.
        max: f64,
    },
    /// A domain bound or bin edge is NaN or infinite.
    NonFiniteBound {
        /// The offending value.
        value: f64,
    },
    /// A variable axis needs at least two edges to form one bin.
    TooFewEdges {
        /// Number of edges supplied.
        count: usize,
    },
    /// Bin edges are not strictly increasing.
    NonIncreasingEdges {
        /// Index of the first edge that is not greater than its predecessor.
        index: usize,
        /// The edge preceding `index`.
        previous: f64,
        /// The edge at `index`.
        current: f64,
    },
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAxis => write!(f, "axis must have at least one bin"),
            Self::InvalidRange { min, max } => {
                write!(f, "invalid axis range: min ({min}) must be less than max ({max})")
            }
            Self::NonFiniteBound { value } => write!(f, "axis bound {value} is not finite"),
            Self::TooFewEdges { count } => {
                write!(f, "variable axis needs at least 2 edges, got {count}")
            }
            Self::NonIncreasingEdges {
                index,
                previous,
                current,
            } => write!(
                f,
                "bin edges must be strictly increasing: edge {index} ({current}) <= edge {} ({previous})",
                index - 1
            ),
        }
    }
}

impl Error for AxisError {}

/// Errors from grid construction, type-erased access, and configuration
/// records.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// One of the grid's axes failed validation.
    InvalidAxis {
        /// Position of the axis within the grid.
        axis: usize,
        /// The underlying axis error.
        source: AxisError,
    },
    /// A point, index tuple, or axis list has the wrong number of entries.
    DimensionMismatch {
        /// Dimensionality of the grid.
        expected: usize,
        /// Number of entries supplied.
        actual: usize,
    },
    /// A grid was requested with zero axes.
    EmptyGrid,
    /// The total number of cells overflows `usize`.
    SizeOverflow,
    /// A global bin index is outside `[0, size)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of cells in the grid.
        size: usize,
    },
    /// A local bin index is outside `[0, n_bins + 1]` for its axis.
    LocalIndexOutOfRange {
        /// Axis position.
        axis: usize,
        /// The offending local index.
        index: usize,
        /// Largest valid local index (the overflow bin).
        max: usize,
    },
    /// No grid constructor is registered for this dimensionality.
    UnsupportedDimension {
        /// The requested number of axes.
        ndim: usize,
    },
    /// A configuration record could not be decoded.
    InvalidRecord {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAxis { axis, source } => write!(f, "axis {axis}: {source}"),
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: grid has {expected} axes, got {actual}")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one axis"),
            Self::SizeOverflow => write!(f, "total grid size overflows usize"),
            Self::IndexOutOfRange { index, size } => {
                write!(f, "global bin index {index} out of range [0, {size})")
            }
            Self::LocalIndexOutOfRange { axis, index, max } => {
                write!(f, "local bin index {index} on axis {axis} out of range [0, {max}]")
            }
            Self::UnsupportedDimension { ndim } => {
                write!(f, "no grid registered for {ndim} dimensions")
            }
            Self::InvalidRecord { reason } => write!(f, "invalid configuration record: {reason}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidAxis { source, .. } => Some(source),
            _ => None,
        }
    }
}

//! Axis boundary policies and their bin arithmetic.

use crate::neighbourhood::NeighbourhoodIndices;
use serde::{Deserialize, Serialize};

/// How an axis treats coordinates and neighbourhoods past its domain.
///
/// The policy is applied to the *raw* bin number `floor`-computed from a
/// coordinate (which may be negative or beyond the overflow bin) and to
/// neighbourhood walks around a bin.
///
/// # Examples
///
/// ```
/// use gridbin_axis::AxisBoundary;
///
/// // Ten real bins: 1..=10, underflow 0, overflow 11.
/// assert_eq!(AxisBoundary::Open.wrap_bin(-3, 10), 0);
/// assert_eq!(AxisBoundary::Bound.wrap_bin(-3, 10), 1);
/// assert_eq!(AxisBoundary::Closed.wrap_bin(0, 10), 10);
/// assert_eq!(AxisBoundary::Closed.wrap_bin(11, 10), 1);
///
/// let n: Vec<usize> = AxisBoundary::Closed.neighbourhood(1, -1, 1, 10).into_iter().collect();
/// assert_eq!(n, vec![10, 1, 2]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisBoundary {
    /// Out-of-domain values land in the underflow/overflow bins.
    #[default]
    Open,
    /// Out-of-domain values are clamped onto the first/last real bin.
    Bound,
    /// Periodic: the first and last real bins are adjacent.
    Closed,
}

impl AxisBoundary {
    /// Map a raw bin number onto a valid local bin index.
    ///
    /// - **Open**: clamps to `[0, n_bins + 1]`.
    /// - **Bound**: clamps to the real bins `[1, n_bins]`.
    /// - **Closed**: wraps modulo `n_bins` onto `[1, n_bins]`; the
    ///   underflow and overflow bins are never produced.
    pub fn wrap_bin(self, raw: isize, n_bins: usize) -> usize {
        let n = n_bins as isize;
        match self {
            Self::Open => raw.clamp(0, n + 1) as usize,
            Self::Bound => raw.clamp(1, n) as usize,
            Self::Closed => (1 + (raw as i128 - 1).rem_euclid(n_bins as i128)) as usize,
        }
    }

    /// The bins from `bin + lower` to `bin + upper` (inclusive) that exist
    /// under this policy.
    ///
    /// - **Open**: the walk is clipped to `[0, n_bins + 1]`.
    /// - **Bound**: empty when `bin` is an underflow/overflow bin,
    ///   otherwise clipped to `[1, n_bins]`.
    /// - **Closed**: empty when `bin` is an underflow/overflow bin. A walk
    ///   spanning at least `n_bins` bins returns every real bin once;
    ///   otherwise each step is wrapped onto `[1, n_bins]`.
    ///
    /// Returns an empty neighbourhood when `lower > upper`.
    pub fn neighbourhood(
        self,
        bin: usize,
        lower: isize,
        upper: isize,
        n_bins: usize,
    ) -> NeighbourhoodIndices {
        if lower > upper {
            return NeighbourhoodIndices::empty();
        }
        let n = n_bins as isize;
        let centre = bin as isize;
        let (lo, hi) = (centre.saturating_add(lower), centre.saturating_add(upper));
        match self {
            Self::Open => clipped(lo, hi, 0, n + 1),
            Self::Bound => {
                if bin == 0 || bin > n_bins {
                    return NeighbourhoodIndices::empty();
                }
                clipped(lo, hi, 1, n)
            }
            Self::Closed => {
                if bin == 0 || bin > n_bins {
                    return NeighbourhoodIndices::empty();
                }
                if upper.saturating_sub(lower) >= n {
                    return NeighbourhoodIndices::from_range(1..n_bins + 1);
                }
                let start = self.wrap_bin(lo, n_bins);
                let len = (upper - lower + 1) as usize;
                let end = start + len;
                if end <= n_bins + 1 {
                    NeighbourhoodIndices::from_range(start..end)
                } else {
                    NeighbourhoodIndices::from_ranges(start..n_bins + 1, 1..end - n_bins)
                }
            }
        }
    }

    /// The upper corner paired with `bin` for interpolation.
    ///
    /// Open axes step into the overflow bin, bound axes stay on the last
    /// real bin, closed axes wrap to the first real bin.
    pub fn next_bin(self, bin: usize, n_bins: usize) -> usize {
        match self {
            Self::Open => (bin + 1).min(n_bins + 1),
            Self::Bound => (bin + 1).clamp(1, n_bins),
            Self::Closed => self.wrap_bin(bin as isize + 1, n_bins),
        }
    }

    /// `true` for the periodic policy.
    pub fn is_periodic(self) -> bool {
        self == Self::Closed
    }
}

/// Intersect the walk `lo..=hi` with `min..=max`.
fn clipped(lo: isize, hi: isize, min: isize, max: isize) -> NeighbourhoodIndices {
    let lo = lo.max(min);
    let hi = hi.min(max);
    if lo > hi {
        NeighbourhoodIndices::empty()
    } else {
        NeighbourhoodIndices::from_range(lo as usize..hi as usize + 1)
    }
}

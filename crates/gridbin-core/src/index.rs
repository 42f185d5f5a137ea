//! Runtime local-bin index tuples.

use smallvec::SmallVec;

/// Local bin indices of a grid cell, one entry per axis.
///
/// Entry `i` lies in `[0, n_bins_i + 1]`: `0` is the underflow bin,
/// `n_bins_i + 1` the overflow bin. Statically-typed grids use
/// `[usize; N]` directly; this type is used where the dimensionality is
/// only known at runtime (type-erased grids). Inline storage covers up to
/// four axes without heap allocation.
pub type LocalBins = SmallVec<[usize; 4]>;

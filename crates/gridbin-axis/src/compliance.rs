//! BinnedAxis contract test helpers.
//!
//! Reused by the equidistant, variable, and `Axis` test modules.

use crate::axis::BinnedAxis;
use crate::boundary::AxisBoundary;

/// Assert that every real bin centre maps back to its own bin.
pub fn assert_centers_round_trip(axis: &dyn BinnedAxis) {
    for bin in 1..=axis.n_bins() {
        let c = axis.bin_center(bin);
        assert_eq!(axis.bin(c), bin, "centre {c} of bin {bin} resolved elsewhere");
        assert!(axis.is_inside(c), "centre {c} of bin {bin} is outside the domain");
    }
}

/// Assert that adjacent bins share an edge and edges increase.
pub fn assert_edges_continuous(axis: &dyn BinnedAxis) {
    for bin in 0..=axis.n_bins() {
        let upper = axis.upper_bin_edge(bin);
        let next_lower = axis.lower_bin_edge(bin + 1);
        assert!(
            (upper - next_lower).abs() <= 1e-12 * upper.abs().max(1.0),
            "upper edge of bin {bin} ({upper}) != lower edge of bin {} ({next_lower})",
            bin + 1
        );
        assert!(axis.lower_bin_edge(bin) < upper, "bin {bin} has no width");
    }
    let edges = axis.bin_edges();
    assert_eq!(edges.len(), axis.n_bins() + 1);
    assert_eq!(edges[0], axis.min());
    assert!((edges[edges.len() - 1] - axis.max()).abs() <= 1e-12 * axis.max().abs().max(1.0));
}

/// Assert that lookups just outside the domain follow the boundary policy.
pub fn assert_out_of_domain_policy(axis: &dyn BinnedAxis) {
    let n = axis.n_bins();
    let below = axis.min() - 1e-6 * (axis.max() - axis.min());
    let (expect_below, expect_above) = match axis.boundary() {
        AxisBoundary::Open => (0, n + 1),
        AxisBoundary::Bound => (1, n),
        AxisBoundary::Closed => (n, 1),
    };
    assert_eq!(axis.bin(below), expect_below, "lookup below min");
    assert_eq!(axis.bin(axis.max()), expect_above, "lookup at max");
    assert!(!axis.is_inside(axis.max()));
}

/// Assert that every neighbourhood is duplicate-free and contains only
/// valid local indices.
pub fn assert_neighbourhoods_valid(axis: &dyn BinnedAxis) {
    let n = axis.n_bins();
    for bin in 0..=n + 1 {
        for size in 0..=(n as isize + 1) {
            let nb = axis.neighbourhood(bin, (-size, size));
            let mut seen: Vec<usize> = nb.iter().collect();
            let len = seen.len();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(len, seen.len(), "duplicate bins around {bin} (size {size})");
            assert!(seen.iter().all(|&b| b <= n + 1), "index past overflow around {bin}");
            if axis.boundary() != AxisBoundary::Open {
                assert!(seen.iter().all(|&b| (1..=n).contains(&b)));
            }
        }
    }
}

/// Run every compliance check.
pub fn run_full_compliance(axis: &dyn BinnedAxis) {
    assert_centers_round_trip(axis);
    assert_edges_continuous(axis);
    assert_out_of_domain_policy(axis);
    assert_neighbourhoods_valid(axis);
}

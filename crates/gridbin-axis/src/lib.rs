//! One-dimensional binning axes for gridbin grids.
//!
//! This crate defines the [`BinnedAxis`] trait, the per-dimension
//! binning strategy that grids compose, along with its two concrete
//! strategies and their configuration records.
//!
//! # Strategies
//!
//! - [`EquidistantAxis`]: `n` bins of uniform width over `[min, max)`
//! - [`VariableAxis`]: bins between explicit, strictly increasing edges
//!
//! Both carry an [`AxisBoundary`] (open, bound, or closed) that decides
//! what happens to coordinates outside the domain and to neighbourhoods
//! that reach past its edges.
//!
//! # Bin numbering
//!
//! Real bins are numbered `1..=n_bins`. Bin `0` is the underflow bin and
//! bin `n_bins + 1` the overflow bin.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod boundary;
pub mod config;
pub mod equidistant;
pub mod neighbourhood;
pub mod variable;

#[cfg(test)]
pub(crate) mod compliance;

pub use axis::{Axis, AxisKind, BinnedAxis};
pub use boundary::AxisBoundary;
pub use config::AxisConfig;
pub use equidistant::EquidistantAxis;
pub use gridbin_core::AxisError;
pub use neighbourhood::NeighbourhoodIndices;
pub use variable::VariableAxis;

//! Multi-dimensional binned grids.
//!
//! A [`Grid<T, N>`](Grid) composes `N` axes from `gridbin-axis` into a
//! dense cell store with under/overflow bins on every axis. It supports
//! point lookup, mixed-radix global/local index conversion, multilinear
//! interpolation, and boundary-aware neighbourhood queries.
//!
//! # Type erasure
//!
//! [`AnyGrid`] is the object-safe, slice-based view of every `Grid<T, N>`.
//! [`GridRegistry`] builds boxed grids from [`GridConfig`] records for the
//! dimensionalities it has registered.
//!
//! # Global index layout
//!
//! Axis `i` contributes a digit in `[0, n_bins_i + 1]`; the last axis
//! varies fastest:
//!
//! ```text
//! stride[N-1] = 1
//! stride[i]   = stride[i+1] * (n_bins_{i+1} + 2)
//! global      = sum(local[i] * stride[i])
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod any_grid;
pub mod config;
pub mod grid;
pub mod index;
mod interpolate;
mod neighbourhood;
pub mod registry;

pub use any_grid::{AnyGrid, GridValue};
pub use config::GridConfig;
pub use grid::Grid;
pub use index::IndexLayout;
pub use registry::GridRegistry;

//! Core types and traits for the gridbin workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error taxonomy shared by axes and grids, the runtime local-bin
//! index type, and the [`Interpolable`] capability that grid values
//! need for multilinear interpolation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod value;

pub use error::{AxisError, GridError};
pub use index::LocalBins;
pub use value::Interpolable;

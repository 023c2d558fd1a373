//! Grid field storage for the parax stepping engines.
//!
//! Fields are fixed-extent `f64` arrays where the first and last index on
//! each axis are boundary nodes holding externally supplied values, and
//! everything in between is interior unknowns. This crate provides:
//!
//! - [`Field1D`]: a line of values with interior slicing
//! - [`Field2D`]: a row-major plane with per-line access and interior
//!   scatter along either axis
//! - [`Transposed`]: a zero-copy view of a [`Field2D`] with the axes
//!   swapped (index remapping over the same backing storage)
//! - [`GridView`]: the read-only indexing contract shared by [`Field2D`]
//!   and [`Transposed`], letting one sweep kernel serve both orientations

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid1d;
pub mod grid2d;
pub mod view;

pub use grid1d::Field1D;
pub use grid2d::Field2D;
pub use view::{GridView, Transposed};

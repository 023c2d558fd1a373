//! Tridiagonal linear-system solving for the parax stepping engines.
//!
//! [`thomas::solve`] is the classical O(n) Thomas algorithm with a
//! caller-provided scratch slice, so repeated per-line solves never
//! allocate. Off-diagonals are passed as [`Band`] values: either a
//! per-node slice or a single broadcast scalar, behind one indexing
//! contract — the separable engine's uniform coupling uses the scalar
//! form without materializing an array.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod band;
pub mod thomas;

pub use band::Band;

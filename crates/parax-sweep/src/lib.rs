//! Parallel per-line sweep dispatch for the parax stepping engines.
//!
//! An implicit 2D step decomposes into one independent tridiagonal solve
//! per grid line. [`sweep_lines`] runs those solves across rayon's worker
//! pool: each task gets a worker-local clone of a scratch prototype and a
//! disjoint row of a [`LineSet`] staging buffer to write its solution
//! into. Nothing is shared mutably between tasks, so results are
//! bit-identical regardless of worker count or execution order, and a
//! failing line aborts the whole dispatch before the caller scatters
//! anything into the current field.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dispatch;
pub mod lineset;
pub mod scratch;

pub use dispatch::sweep_lines;
pub use lineset::LineSet;
pub use scratch::LineScratch;

//! parax: implicit finite-difference stepping engines for parabolic PDEs.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all parax sub-crates. For most users, adding `parax` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use parax::prelude::*;
//!
//! // A 1D Crank–Nicolson run over 5 grid nodes (3 interior unknowns).
//! let mut engine = Implicit1D::new();
//! engine.resize(5).unwrap();
//!
//! // Constant diffusion coupling at both time levels.
//! engine.ra_mut().fill(0.2);
//! engine.rap_mut().fill(0.2);
//!
//! // Initial condition on the previous level, boundaries pinned at 0.
//! engine.up_mut().copy_from(&[0.0, 1.0, 2.0, 3.0, 0.0]);
//! engine.u_mut().set_boundary(0.0, 0.0);
//!
//! engine.step().unwrap();
//! engine.update();
//!
//! // The advanced field now sits on the previous level, boundaries
//! // untouched.
//! assert_eq!(engine.up()[0], 0.0);
//! assert!(engine.up().interior().iter().all(|v| v.is_finite()));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `parax-core` | Error taxonomy, [`types::Axis`], extent minimum |
//! | [`field`] | `parax-field` | `Field1D`, `Field2D`, transpose views |
//! | [`solver`] | `parax-solver` | Thomas tridiagonal solve, `Band` |
//! | [`sweep`] | `parax-sweep` | Parallel line dispatch, staging, scratch |
//! | [`engine`] | `parax-engine` | The three stepping engines and metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error taxonomy and axis vocabulary (`parax-core`).
pub use parax_core as types;

/// Grid field storage and views (`parax-field`).
///
/// [`field::Field2D`] and its [`field::Transposed`] view implement
/// [`field::GridView`], the indexing contract the engines sweep through.
pub use parax_field as field;

/// Tridiagonal solving (`parax-solver`).
///
/// [`solver::thomas::solve`] is the O(n) Thomas algorithm;
/// [`solver::Band`] carries off-diagonals as per-node slices or a
/// broadcast scalar.
pub use parax_solver as solver;

/// Parallel per-line dispatch (`parax-sweep`).
///
/// [`sweep::sweep_lines`] runs one tridiagonal solve per grid line with
/// worker-local scratch cloned from a prototype.
pub use parax_sweep as sweep;

/// The stepping engines (`parax-engine`).
///
/// [`engine::Implicit1D`], [`engine::Adi2D`], and
/// [`engine::Separable2D`] share the resize / step / update lifecycle.
pub use parax_engine as engine;

/// Common imports for typical parax usage.
///
/// ```rust
/// use parax::prelude::*;
/// ```
pub mod prelude {
    // Engines and metrics
    pub use parax_engine::{Adi2D, Implicit1D, Separable2D, StepMetrics};

    // Fields and views
    pub use parax_field::{Field1D, Field2D, GridView, Transposed};

    // Errors and axis vocabulary
    pub use parax_core::{Axis, SizeError, SolveError, StepError};

    // Solver surface
    pub use parax_solver::Band;
}

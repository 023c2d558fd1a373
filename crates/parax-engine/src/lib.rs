//! Implicit finite-difference stepping engines for parabolic PDEs.
//!
//! Three sibling engines share one design: double-buffered coefficient
//! and field state (current and previous time levels), per-line
//! tridiagonal assembly, and a barrier-style parallel solve that writes
//! only the interior of the current field.
//!
//! - [`Implicit1D`]: a single Crank–Nicolson sweep along the only axis
//! - [`Adi2D`]: alternating-direction-implicit half-steps
//!   ([`step_1`](Adi2D::step_1) / [`step_2`](Adi2D::step_2)) over a fully
//!   coupled 2D grid, the second half-step running on transposed views
//! - [`Separable2D`]: the x-implicit sweep specialized for a coupling
//!   coefficient that is constant along each line, broadcast as a scalar
//!   off-diagonal
//!
//! Every engine follows the same lifecycle: construct, size with
//! `resize`, fill coefficients and boundary values, then repeat
//! (`step`, `update`) for the life of the run. `update` exchanges the
//! current/previous buffer identities in O(1); nothing allocates per
//! step beyond one scratch prototype per dispatch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adi2d;
pub mod implicit1d;
pub mod metrics;
pub mod separable2d;

pub use adi2d::Adi2D;
pub use implicit1d::Implicit1D;
pub use metrics::StepMetrics;
pub use separable2d::Separable2D;

//! Thomas algorithm for tridiagonal systems.
//!
//! Row `k` of the system reads
//! `sub(k)·x[k-1] + diag[k]·x[k] + sup(k)·x[k+1] = rhs[k]`,
//! with `sub(0)` and `sup(n-1)` ignored. Forward elimination stores the
//! modified super-diagonal in the caller's scratch slice and the modified
//! right-hand side directly in `out`, so the back substitution finishes
//! in place and nothing allocates.

use parax_core::SolveError;

use crate::band::Band;

/// Solve a tridiagonal system in O(n).
///
/// `diag` and `rhs` must have equal length `n`; `out` and `scratch` must
/// each hold at least `n` entries, and both bands must span `n` rows.
/// `out` receives the solution. The same [`Band`] may be passed for `sub`
/// and `sup` when the system is symmetric.
///
/// Returns [`SolveError::Empty`] for `n == 0` and
/// [`SolveError::SingularPivot`] if elimination hits a zero pivot; `out`
/// contents are unspecified on error.
pub fn solve(
    sub: Band<'_>,
    diag: &[f64],
    sup: Band<'_>,
    rhs: &[f64],
    out: &mut [f64],
    scratch: &mut [f64],
) -> Result<(), SolveError> {
    let n = diag.len();
    if n == 0 {
        return Err(SolveError::Empty);
    }
    debug_assert_eq!(rhs.len(), n);
    debug_assert!(out.len() >= n && scratch.len() >= n);
    debug_assert!(sub.spans(n) && sup.spans(n));

    let mut pivot = diag[0];
    if pivot == 0.0 {
        return Err(SolveError::SingularPivot { row: 0 });
    }
    scratch[0] = sup.at(0) / pivot;
    out[0] = rhs[0] / pivot;

    for k in 1..n {
        let s = sub.at(k);
        pivot = diag[k] - s * scratch[k - 1];
        if pivot == 0.0 {
            return Err(SolveError::SingularPivot { row: k });
        }
        scratch[k] = sup.at(k) / pivot;
        out[k] = (rhs[k] - s * out[k - 1]) / pivot;
    }

    for k in (0..n - 1).rev() {
        out[k] -= scratch[k] * out[k + 1];
    }

    Ok(())
}

//! The parallel per-line dispatch.

use parax_core::{SolveError, StepError};
use rayon::prelude::*;

use crate::lineset::LineSet;

/// Run one task per line of `out`, in parallel, with worker-local scratch.
///
/// The task for position `k` receives the grid line index `lo + k`, a
/// mutable scratch instance cloned from `prototype` for the worker
/// running it, and the disjoint output row it owns. Tasks only read
/// shared state, so the dispatch is deterministic under any worker count.
///
/// The first failing line converts to
/// [`StepError::LineSolveFailed`] and cancels outstanding work; `out`
/// rows are unspecified on error, which is why callers stage into a
/// [`LineSet`] and scatter only after a fully successful barrier.
pub fn sweep_lines<S, F>(
    out: &mut LineSet,
    lo: usize,
    prototype: &S,
    task: F,
) -> Result<(), StepError>
where
    S: Clone + Send + Sync,
    F: Fn(usize, &mut S, &mut [f64]) -> Result<(), SolveError> + Sync,
{
    let line_len = out.line_len();
    out.active_mut()
        .par_chunks_mut(line_len)
        .enumerate()
        .try_for_each_init(
            || prototype.clone(),
            |scratch, (k, row)| {
                task(lo + k, scratch, row).map_err(|source| StepError::LineSolveFailed {
                    line: lo + k,
                    source,
                })
            },
        )
}

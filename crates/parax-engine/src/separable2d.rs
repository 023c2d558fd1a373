//! 2D engine specialized for a separable coupling coefficient.

use std::mem;
use std::time::Instant;

use parax_core::{Axis, SizeError, StepError, MIN_EXTENT};
use parax_field::{Field1D, Field2D};
use parax_solver::{thomas, Band};
use parax_sweep::{sweep_lines, LineScratch, LineSet};

use crate::metrics::StepMetrics;

/// x-implicit engine for a coupling coefficient that depends only on `y`.
///
/// Structurally the same sweep as [`Adi2D::step_2`](crate::Adi2D::step_2),
/// but the coupling `ra` is stored as a single value per y-line
/// (`Field1D` of length `ny`) and broadcast into the off-diagonals as
/// [`Band::Uniform`] instead of being materialized per node. `ra` has no
/// time dependence and is not exchanged by [`update`](Self::update);
/// under a spatially constant coupling the numerical result matches the
/// fully coupled sweep exactly.
#[derive(Clone, Debug, Default)]
pub struct Separable2D {
    ra: Field1D,
    rf: Field2D,
    rfp: Field2D,
    u: Field2D,
    up: Field2D,
    staged: LineSet,
    metrics: StepMetrics,
    sized: bool,
}

impl Separable2D {
    /// Create an unsized engine; call [`resize`](Self::resize) before
    /// stepping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate for an `nx × ny` grid: the reaction and field pairs as
    /// planes, the coupling as one scalar per y-line.
    ///
    /// Discards previous contents. Returns [`SizeError::TooSmall`] when
    /// either extent is below 3.
    pub fn resize(&mut self, nx: usize, ny: usize) -> Result<(), SizeError> {
        if nx < MIN_EXTENT {
            return Err(SizeError::TooSmall {
                axis: "nx",
                len: nx,
                min: MIN_EXTENT,
            });
        }
        if ny < MIN_EXTENT {
            return Err(SizeError::TooSmall {
                axis: "ny",
                len: ny,
                min: MIN_EXTENT,
            });
        }
        self.ra.resize(ny);
        self.rf.resize(nx, ny);
        self.rfp.resize(nx, ny);
        self.u.resize(nx, ny);
        self.up.resize(nx, ny);
        self.staged.reshape(ny - 2, nx - 2);
        self.sized = true;
        Ok(())
    }

    /// Advance the field one implicit step.
    ///
    /// Every interior y-line is an independent tridiagonal solve over the
    /// interior x-range with the scalar off-diagonal `-ra[y]/2`, solved
    /// in parallel and scattered into the transposed (column) interior of
    /// `u` after the barrier.
    pub fn step(&mut self) -> Result<(), StepError> {
        if !self.sized {
            return Err(StepError::NotSized);
        }
        let started = Instant::now();
        let n = self.u.nx() - 2;
        let lines = self.u.ny() - 2;

        let Self {
            ra,
            rf,
            rfp,
            u,
            up,
            staged,
            ..
        } = self;
        let (ra, rf, rfp, uref, upref) = (&*ra, &*rf, &*rfp, &*u, &*up);

        staged.reshape(lines, n);
        sweep_lines(staged, 1, &LineScratch::new(n), |j, d, out| {
            let r = ra[j];
            let band = Band::Uniform(-r / 2.0);
            for i in 1..=n {
                d.diag[i - 1] = 1.0 + r - rf.at(i, j);
                d.rhs[i - 1] = (upref.at(i + 1, j) + upref.at(i - 1, j)) * r / 2.0
                    + upref.at(i, j) * (1.0 + rfp.at(i, j) - r);
            }
            d.rhs[0] += uref.at(0, j) * r / 2.0;
            d.rhs[n - 1] += uref.at(n + 1, j) * r / 2.0;

            thomas::solve(band, &d.diag, band, &d.rhs, out, &mut d.work)
        })?;

        for k in 0..staged.lines() {
            u.scatter_interior(Axis::X, k + 1, staged.row(k));
        }

        self.metrics = StepMetrics {
            lines_solved: lines,
            interior_unknowns: lines * n,
            total_us: started.elapsed().as_micros() as u64,
        };
        Ok(())
    }

    /// Exchange the current and previous reaction and field buffers.
    ///
    /// The separable coupling has no time level and stays put.
    pub fn update(&mut self) {
        mem::swap(&mut self.rf, &mut self.rfp);
        mem::swap(&mut self.u, &mut self.up);
    }

    /// Metrics from the most recent successful [`step`](Self::step).
    pub fn metrics(&self) -> &StepMetrics {
        &self.metrics
    }

    // ── State access ────────────────────────────────────────────

    /// Per-line coupling coefficient (length `ny`).
    pub fn ra(&self) -> &Field1D {
        &self.ra
    }

    /// Per-line coupling coefficient, mutable.
    pub fn ra_mut(&mut self) -> &mut Field1D {
        &mut self.ra
    }

    /// Current reaction coefficient.
    pub fn rf(&self) -> &Field2D {
        &self.rf
    }

    /// Current reaction coefficient, mutable.
    pub fn rf_mut(&mut self) -> &mut Field2D {
        &mut self.rf
    }

    /// Previous reaction coefficient.
    pub fn rfp(&self) -> &Field2D {
        &self.rfp
    }

    /// Previous reaction coefficient, mutable.
    pub fn rfp_mut(&mut self) -> &mut Field2D {
        &mut self.rfp
    }

    /// Current field. The boundary frame is caller-owned input; the
    /// interior is written by [`step`](Self::step).
    pub fn u(&self) -> &Field2D {
        &self.u
    }

    /// Current field, mutable (for boundary values and initialization).
    pub fn u_mut(&mut self) -> &mut Field2D {
        &mut self.u
    }

    /// Previous field.
    pub fn up(&self) -> &Field2D {
        &self.up
    }

    /// Previous field, mutable.
    pub fn up_mut(&mut self) -> &mut Field2D {
        &mut self.up
    }
}

//! 1D Crank–Nicolson stepping engine.

use std::mem;
use std::time::Instant;

use parax_core::{SizeError, StepError, MIN_EXTENT};
use parax_field::Field1D;
use parax_solver::{thomas, Band};
use parax_sweep::LineScratch;

use crate::metrics::StepMetrics;

/// Implicit Crank–Nicolson engine on a 1D grid.
///
/// State is double-buffered: `ra`/`rf`/`u` hold the current time level,
/// `rap`/`rfp`/`up` the previous one. `ra` is the off-diagonal coupling
/// coefficient, `rf` the diagonal reaction coefficient. A step solves one
/// tridiagonal system over the interior `1..len-1` and writes only that
/// sub-range of `u`; the endpoints are boundary nodes owned by the
/// caller.
///
/// # Examples
///
/// ```
/// use parax_engine::Implicit1D;
///
/// let mut engine = Implicit1D::new();
/// engine.resize(5).unwrap();
/// engine.ra_mut().fill(0.2);
/// engine.rap_mut().fill(0.2);
/// engine.up_mut().copy_from(&[0.0, 1.0, 2.0, 3.0, 0.0]);
/// engine.step().unwrap();
/// assert_eq!(engine.u()[0], 0.0); // boundary node untouched
/// engine.update(); // ready the next step
/// ```
#[derive(Clone, Debug, Default)]
pub struct Implicit1D {
    ra: Field1D,
    rap: Field1D,
    rf: Field1D,
    rfp: Field1D,
    u: Field1D,
    up: Field1D,
    scratch: LineScratch,
    metrics: StepMetrics,
    sized: bool,
}

impl Implicit1D {
    /// Create an unsized engine; call [`resize`](Self::resize) before
    /// stepping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate all buffers for a grid of `len` nodes (two boundary nodes
    /// plus `len - 2` interior unknowns).
    ///
    /// Discards previous contents. Returns [`SizeError::TooSmall`] when
    /// `len < 3`, which would leave no interior to solve.
    pub fn resize(&mut self, len: usize) -> Result<(), SizeError> {
        if len < MIN_EXTENT {
            return Err(SizeError::TooSmall {
                axis: "n",
                len,
                min: MIN_EXTENT,
            });
        }
        self.ra.resize(len);
        self.rap.resize(len);
        self.rf.resize(len);
        self.rfp.resize(len);
        self.u.resize(len);
        self.up.resize(len);
        self.scratch = LineScratch::new(len - 2);
        self.sized = true;
        Ok(())
    }

    /// Advance the field one implicit step.
    ///
    /// Assembles the interior tridiagonal system from the current
    /// coefficients and the previous field, folds the caller-supplied
    /// boundary values of `u` into the first and last right-hand-side
    /// rows, solves, and writes the solution into the interior of `u`.
    pub fn step(&mut self) -> Result<(), StepError> {
        if !self.sized {
            return Err(StepError::NotSized);
        }
        let started = Instant::now();
        let n = self.u.len() - 2;

        let Self {
            ra,
            rap,
            rf,
            rfp,
            u,
            up,
            scratch: d,
            ..
        } = self;

        for i in 1..=n {
            d.sub[i - 1] = -ra[i] / 2.0;
            d.diag[i - 1] = 1.0 + ra[i] - rf[i];
            d.rhs[i - 1] = (up[i + 1] + up[i - 1]) * rap[i] / 2.0
                + up[i] * (1.0 + rfp[i] - rap[i]);
        }
        d.rhs[0] += u[0] * ra[1] / 2.0;
        d.rhs[n - 1] += u[n + 1] * ra[n] / 2.0;

        thomas::solve(
            Band::PerNode(&d.sub),
            &d.diag,
            Band::PerNode(&d.sub),
            &d.rhs,
            u.interior_mut(),
            &mut d.work,
        )
        .map_err(|source| StepError::LineSolveFailed { line: 0, source })?;

        self.metrics = StepMetrics {
            lines_solved: 1,
            interior_unknowns: n,
            total_us: started.elapsed().as_micros() as u64,
        };
        Ok(())
    }

    /// Exchange the current and previous roles of every buffer.
    ///
    /// O(1): buffer identities swap, no data is copied.
    pub fn update(&mut self) {
        mem::swap(&mut self.ra, &mut self.rap);
        mem::swap(&mut self.rf, &mut self.rfp);
        mem::swap(&mut self.u, &mut self.up);
    }

    /// Metrics from the most recent successful [`step`](Self::step).
    pub fn metrics(&self) -> &StepMetrics {
        &self.metrics
    }

    // ── State access ────────────────────────────────────────────

    /// Current off-diagonal coupling coefficient.
    pub fn ra(&self) -> &Field1D {
        &self.ra
    }

    /// Current off-diagonal coupling coefficient, mutable.
    pub fn ra_mut(&mut self) -> &mut Field1D {
        &mut self.ra
    }

    /// Previous off-diagonal coupling coefficient.
    pub fn rap(&self) -> &Field1D {
        &self.rap
    }

    /// Previous off-diagonal coupling coefficient, mutable.
    pub fn rap_mut(&mut self) -> &mut Field1D {
        &mut self.rap
    }

    /// Current reaction coefficient.
    pub fn rf(&self) -> &Field1D {
        &self.rf
    }

    /// Current reaction coefficient, mutable.
    pub fn rf_mut(&mut self) -> &mut Field1D {
        &mut self.rf
    }

    /// Previous reaction coefficient.
    pub fn rfp(&self) -> &Field1D {
        &self.rfp
    }

    /// Previous reaction coefficient, mutable.
    pub fn rfp_mut(&mut self) -> &mut Field1D {
        &mut self.rfp
    }

    /// Current field (time level n+1). Boundary endpoints are inputs;
    /// the interior is written by [`step`](Self::step).
    pub fn u(&self) -> &Field1D {
        &self.u
    }

    /// Current field, mutable (for boundary values and initialization).
    pub fn u_mut(&mut self) -> &mut Field1D {
        &mut self.u
    }

    /// Previous field (time level n).
    pub fn up(&self) -> &Field1D {
        &self.up
    }

    /// Previous field, mutable.
    pub fn up_mut(&mut self) -> &mut Field1D {
        &mut self.up
    }
}

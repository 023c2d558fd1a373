//! 2D fully-coupled alternating-direction-implicit engine.

use std::mem;
use std::time::Instant;

use parax_core::{Axis, SizeError, StepError, MIN_EXTENT};
use parax_field::{Field2D, GridView};
use parax_solver::{thomas, Band};
use parax_sweep::{sweep_lines, LineScratch, LineSet};

use crate::metrics::StepMetrics;

/// ADI engine on a fully coupled 2D grid.
///
/// Holds three coefficient roles at two time levels — `ra`/`rap`
/// (x-coupling), `rc`/`rcp` (y-coupling), `rf`/`rfp` (reaction) — plus
/// the field pair `u`/`up`, all `nx × ny`. One full time step is the
/// sequence [`step_1`](Self::step_1) → [`update`](Self::update) →
/// [`step_2`](Self::step_2) → [`update`](Self::update): the first
/// half-step advances `y` implicitly, the second advances `x` implicitly
/// on transposed views of the same storage with the two coupling roles
/// exchanged. Each half-step's interior lines are mutually independent
/// tridiagonal solves, dispatched in parallel with worker-local scratch
/// and scattered into `u` only after every line has succeeded.
///
/// Calling `step_2` without the intervening `update` computes on
/// operands the splitting does not define; the engine does not police
/// that ordering.
#[derive(Clone, Debug, Default)]
pub struct Adi2D {
    ra: Field2D,
    rap: Field2D,
    rc: Field2D,
    rcp: Field2D,
    rf: Field2D,
    rfp: Field2D,
    u: Field2D,
    up: Field2D,
    staged: LineSet,
    metrics: StepMetrics,
    sized: bool,
}

/// Assemble and solve every interior line of one half-step.
///
/// `c` is the coupling coefficient along the implicit (swept) axis, `ap`
/// the previous-level coupling along the explicit (line) axis, `f`/`fp`
/// the reaction pair, `u` the current field (read only for its boundary
/// nodes), `up` the previous field. Solutions are staged one row per
/// line; the caller scatters them after the barrier.
fn half_step<V: GridView>(
    c: &V,
    f: &V,
    ap: &V,
    fp: &V,
    u: &V,
    up: &V,
    staged: &mut LineSet,
) -> Result<(), StepError> {
    let lines = c.rows() - 2;
    let n = c.cols() - 2;
    staged.reshape(lines, n);

    sweep_lines(staged, 1, &LineScratch::new(n), |i, d, out| {
        for j in 1..=n {
            d.sub[j - 1] = -c.at(i, j);
            d.diag[j - 1] = 1.0 + 2.0 * c.at(i, j) - f.at(i, j);
            d.rhs[j - 1] = (up.at(i + 1, j) + up.at(i - 1, j)) * ap.at(i, j)
                + up.at(i, j) * (1.0 + fp.at(i, j) - 2.0 * ap.at(i, j));
        }
        d.rhs[0] += u.at(i, 0) * c.at(i, 0);
        d.rhs[n - 1] += u.at(i, n + 1) * c.at(i, n + 1);

        thomas::solve(
            Band::PerNode(&d.sub),
            &d.diag,
            Band::PerNode(&d.sub),
            &d.rhs,
            out,
            &mut d.work,
        )
    })
}

impl Adi2D {
    /// Create an unsized engine; call [`resize`](Self::resize) before
    /// stepping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate all buffers for an `nx × ny` grid.
    ///
    /// Discards previous contents. Returns [`SizeError::TooSmall`] when
    /// either extent is below 3 (no interior on that axis).
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
        self.ra.resize(nx, ny);
        self.rap.resize(nx, ny);
        self.rc.resize(nx, ny);
        self.rcp.resize(nx, ny);
        self.rf.resize(nx, ny);
        self.rfp.resize(nx, ny);
        self.u.resize(nx, ny);
        self.up.resize(nx, ny);
        self.staged.reshape(nx - 2, ny - 2);
        self.sized = true;
        Ok(())
    }

    /// First ADI half-step: each interior x-line solved implicitly along
    /// `y`, driven by `rc`, with the x-neighbour contribution taken
    /// explicitly from the previous level through `rap`.
    pub fn step_1(&mut self) -> Result<(), StepError> {
        if !self.sized {
            return Err(StepError::NotSized);
        }
        let started = Instant::now();
        let Self {
            rc,
            rf,
            rap,
            rfp,
            u,
            up,
            staged,
            ..
        } = self;

        half_step(&*rc, &*rf, &*rap, &*rfp, &*u, &*up, staged)?;
        for k in 0..staged.lines() {
            u.scatter_interior(Axis::Y, k + 1, staged.row(k));
        }

        self.record(started);
        Ok(())
    }

    /// Second ADI half-step: each interior y-line solved implicitly along
    /// `x`.
    ///
    /// Runs the [`step_1`](Self::step_1) kernel on transposed views of
    /// every operand with the `ra`/`rc` roles exchanged, so the sweep
    /// axis flips without copying storage.
    pub fn step_2(&mut self) -> Result<(), StepError> {
        if !self.sized {
            return Err(StepError::NotSized);
        }
        let started = Instant::now();
        let Self {
            ra,
            rf,
            rcp,
            rfp,
            u,
            up,
            staged,
            ..
        } = self;

        half_step(
            &ra.transposed(),
            &rf.transposed(),
            &rcp.transposed(),
            &rfp.transposed(),
            &u.transposed(),
            &up.transposed(),
            staged,
        )?;
        for k in 0..staged.lines() {
            u.scatter_interior(Axis::X, k + 1, staged.row(k));
        }

        self.record(started);
        Ok(())
    }

    /// Exchange the current and previous roles of every buffer, readying
    /// the operands for the complementary half-step.
    pub fn update(&mut self) {
        mem::swap(&mut self.ra, &mut self.rap);
        mem::swap(&mut self.rc, &mut self.rcp);
        mem::swap(&mut self.rf, &mut self.rfp);
        mem::swap(&mut self.u, &mut self.up);
    }

    fn record(&mut self, started: Instant) {
        self.metrics = StepMetrics {
            lines_solved: self.staged.lines(),
            interior_unknowns: self.staged.lines() * self.staged.line_len(),
            total_us: started.elapsed().as_micros() as u64,
        };
    }

    /// Metrics from the most recent successful half-step.
    pub fn metrics(&self) -> &StepMetrics {
        &self.metrics
    }

    // ── State access ────────────────────────────────────────────

    /// Current x-coupling coefficient.
    pub fn ra(&self) -> &Field2D {
        &self.ra
    }

    /// Current x-coupling coefficient, mutable.
    pub fn ra_mut(&mut self) -> &mut Field2D {
        &mut self.ra
    }

    /// Previous x-coupling coefficient.
    pub fn rap(&self) -> &Field2D {
        &self.rap
    }

    /// Previous x-coupling coefficient, mutable.
    pub fn rap_mut(&mut self) -> &mut Field2D {
        &mut self.rap
    }

    /// Current y-coupling coefficient.
    pub fn rc(&self) -> &Field2D {
        &self.rc
    }

    /// Current y-coupling coefficient, mutable.
    pub fn rc_mut(&mut self) -> &mut Field2D {
        &mut self.rc
    }

    /// Previous y-coupling coefficient.
    pub fn rcp(&self) -> &Field2D {
        &self.rcp
    }

    /// Previous y-coupling coefficient, mutable.
    pub fn rcp_mut(&mut self) -> &mut Field2D {
        &mut self.rcp
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
    /// interior is written by the half-steps.
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

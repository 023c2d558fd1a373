//! Benchmark profiles for the parax stepping engines.
//!
//! Provides pre-built, deterministically initialized engines so benches
//! measure stepping, not setup:
//!
//! - [`reference_1d`]: 4K-node line
//! - [`reference_2d`]: 128x128 fully coupled grid
//! - [`reference_separable`]: 128x128 separable grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use parax_engine::{Adi2D, Implicit1D, Separable2D};

/// A 4096-node 1D engine with constant coupling and a bump initial field.
pub fn reference_1d() -> Implicit1D {
    let len = 4096;
    let mut engine = Implicit1D::new();
    engine.resize(len).unwrap();
    engine.ra_mut().fill(0.3);
    engine.rap_mut().fill(0.3);
    for i in 0..len {
        let x = (i as f64 - (len - 1) as f64 / 2.0) / 200.0;
        engine.up_mut()[i] = (-x * x).exp();
    }
    engine.up_mut().set_boundary(0.0, 0.0);
    engine
}

/// A 128x128 fully coupled engine with constant couplings and a centred
/// bump on the previous level.
pub fn reference_2d() -> Adi2D {
    let n = 128;
    let mut engine = Adi2D::new();
    engine.resize(n, n).unwrap();
    engine.ra_mut().fill(0.2);
    engine.rap_mut().fill(0.2);
    engine.rc_mut().fill(0.2);
    engine.rcp_mut().fill(0.2);
    fill_bump(engine.up_mut(), n);
    engine
}

/// A 128x128 separable engine with per-line coupling and a centred bump.
pub fn reference_separable() -> Separable2D {
    let n = 128;
    let mut engine = Separable2D::new();
    engine.resize(n, n).unwrap();
    for j in 0..n {
        engine.ra_mut()[j] = 0.1 + 0.2 * (j as f64 / n as f64);
    }
    fill_bump(engine.up_mut(), n);
    engine
}

fn fill_bump(field: &mut parax_field::Field2D, n: usize) {
    let mid = (n - 1) as f64 / 2.0;
    for i in 0..n {
        for j in 0..n {
            let dx = (i as f64 - mid) / 20.0;
            let dy = (j as f64 - mid) / 20.0;
            field.set(i, j, (-(dx * dx + dy * dy)).exp());
        }
    }
    field.fill_boundary(0.0);
}

//! Minimal 1D run: diffuse a Gaussian bump with pinned zero boundaries.
//!
//! ```text
//! cargo run --example quickstart
//! ```

use parax_engine::Implicit1D;

fn main() {
    let len = 65;
    let steps = 200;

    let mut engine = Implicit1D::new();
    engine.resize(len).unwrap();

    // Constant diffusion coupling at both time levels, no reaction term.
    engine.ra_mut().fill(0.3);
    engine.rap_mut().fill(0.3);

    // Initial condition on the previous level.
    for i in 0..len {
        let x = (i as f64 - (len - 1) as f64 / 2.0) / 6.0;
        engine.up_mut()[i] = (-x * x).exp();
    }
    engine.up_mut().set_boundary(0.0, 0.0);

    for _ in 0..steps {
        engine.u_mut().set_boundary(0.0, 0.0);
        engine.step().unwrap();
        engine.update();
    }

    // The latest solution sits on the previous level after the final
    // update. Print a coarse profile.
    println!("profile after {steps} steps:");
    for i in (0..len).step_by(8) {
        let v = engine.up()[i];
        let bar = "#".repeat((v * 40.0).round() as usize);
        println!("{i:3} {v:8.5} {bar}");
    }
    println!(
        "last step: {} unknowns in {} us",
        engine.metrics().interior_unknowns,
        engine.metrics().total_us
    );
}

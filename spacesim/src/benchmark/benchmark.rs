use std::time::Instant;

use log::info;

use crate::configuration::config::PhysicsConfig;
use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::integrator::{euler_step, Interactions};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, System};
use crate::simulation::vector::NVec2;

/// Helper to build a manual System of size `n`
/// deterministic positions, no rand needed
pub fn make_system(n: usize) -> Result<System> {
    let mut sys = System::new();
    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new(
            4000.0 + (i_f * 0.37).sin() * 2000.0,
            4000.0 + (i_f * 0.13).cos() * 2000.0,
        );
        sys.insert(Body::new(i as BodyId + 1, None, x, NVec2::zeros(), 1.0)?)?;
    }
    Ok(sys)
}

/// Time one physics model for `steps` ticks, milliseconds per tick
fn time_steps(sys_template: &System, physics: PhysicsConfig, steps: usize) -> Result<f64> {
    let params = Parameters::default();
    let engine = Engine {
        physics,
        ..Default::default()
    };
    let interactions = Interactions::for_engine(&engine, &params);
    let mut sys = sys_template.clone();

    // Warm up
    euler_step(&mut sys, &interactions, &engine, params.delta)?;

    let t0 = Instant::now();
    for _ in 0..steps {
        euler_step(&mut sys, &interactions, &engine, params.delta)?;
    }
    Ok(t0.elapsed().as_secs_f64() * 1000.0 / steps as f64)
}

/// Per-tick cost of the all-pairs pass for a range of n, both physics models
pub fn bench_step(ns: &[usize], steps: usize) -> Result<Vec<(usize, f64, f64)>> {
    let mut rows = Vec::with_capacity(ns.len());
    for &n in ns {
        let sys = make_system(n)?;
        let legacy_ms = time_steps(&sys, PhysicsConfig::Legacy, steps)?;
        let textbook_ms = time_steps(&sys, PhysicsConfig::Textbook, steps)?;

        info!("N = {n:5}, legacy = {legacy_ms:8.4} ms/tick, textbook = {textbook_ms:8.4} ms/tick");
        rows.push((n, legacy_ms, textbook_ms));
    }
    Ok(rows)
}

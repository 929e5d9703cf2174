//! Fixed-step explicit Euler stepper
//!
//! One tick is: drift every body with its pre-tick velocity, then run the
//! pairwise pass (gravity kick followed by overlap test and bounce, for
//! every ordered pair). Velocities changed by the pass only show up in
//! positions on the next tick, apart from the unit step a bounce takes.

use log::{trace, warn};

use crate::configuration::config::{DegeneracyConfig, PhysicsConfig};
use crate::error::{Result, SimError};
use crate::simulation::collision::{self, CollisionEvent, ObliqueBounce, Resolution};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AttractionSet, AxisSignGravity, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyId, System};
use crate::simulation::vector::VecOps;

/// Everything the pairwise pass needs: gravity terms, bounce model, scale
pub struct Interactions {
    pub attraction: AttractionSet,
    pub bounce: ObliqueBounce,
    pub size_scale: f64,
}

impl Interactions {
    /// Interactions matching the engine's physics model
    pub fn for_engine(engine: &Engine, params: &Parameters) -> Self {
        match engine.physics {
            PhysicsConfig::Legacy => Self {
                attraction: AttractionSet::new().with(AxisSignGravity { g: params.g }),
                bounce: ObliqueBounce::legacy(),
                size_scale: params.size_scale,
            },
            PhysicsConfig::Textbook => Self {
                attraction: AttractionSet::new().with(NewtonianGravity { g: params.g }),
                bounce: ObliqueBounce::textbook(),
                size_scale: params.size_scale,
            },
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub tick: u64, // tick number, 1-based
    pub collisions: Vec<CollisionEvent>, // bounces that rewrote a target velocity
    pub consumed: usize, // overlaps absorbed by a pending flag
    pub degenerate: Vec<(BodyId, BodyId)>, // coincident pairs seen, as (target, source)
}

impl TickReport {
    /// Number of velocity rewrites `id` received this tick
    pub fn rewrites_of(&self, id: BodyId) -> usize {
        self.collisions
            .iter()
            .map(|c| (c.target == id) as usize + (c.source_updated && c.source == id) as usize)
            .sum()
    }
}

/// Move every body by `v * delta`
pub fn drift(sys: &mut System, delta: f64) {
    for b in sys.bodies_mut() {
        b.advance(delta);
    }
}

/// Gravity and bounces over every ordered pair, in registry order.
///
/// Each pair reads positions and velocities as left by the pairs before
/// it. With `DegeneracyConfig::Halt` a coincident pair aborts the pass
/// before its kick is applied; earlier pairs keep their updates.
pub fn interaction_pass(
    sys: &mut System,
    interactions: &Interactions,
    engine: &Engine,
) -> Result<TickReport> {
    let tick = sys.tick + 1;
    let mut report = TickReport {
        tick,
        ..Default::default()
    };

    let n = sys.len();
    for i in 0..n {
        for j in 0..n {
            let (target, source) = {
                let bodies = sys.bodies();
                (&bodies[i], &bodies[j])
            };
            if target.id == source.id {
                continue;
            }

            let distance = (target.x - source.x).length();
            if distance == 0.0 {
                match engine.degeneracy {
                    DegeneracyConfig::Propagate => {}
                    DegeneracyConfig::Report => {
                        warn!(
                            "tick {tick}: bodies {} and {} coincide, kick is not finite",
                            target.id, source.id
                        );
                        report.degenerate.push((target.id, source.id));
                    }
                    DegeneracyConfig::Halt => {
                        return Err(SimError::Coincident {
                            target: target.id,
                            other: source.id,
                            tick,
                        });
                    }
                }
            }

            let dv = interactions.attraction.kick(target, source, distance);
            let (target, source) = sys.pair_mut(i, j);
            target.v += dv;

            if collision::overlapping(distance, target, source, interactions.size_scale) {
                match collision::resolve(target, source, &interactions.bounce) {
                    Resolution::Consumed => report.consumed += 1,
                    Resolution::TargetOnly => {
                        report.consumed += 1;
                        report.collisions.push(CollisionEvent {
                            target: target.id,
                            source: source.id,
                            source_updated: false,
                        });
                    }
                    Resolution::Both => report.collisions.push(CollisionEvent {
                        target: target.id,
                        source: source.id,
                        source_updated: true,
                    }),
                }
            }
        }
    }

    Ok(report)
}

/// Advance the system by one tick of `delta`.
pub fn euler_step(
    sys: &mut System,
    interactions: &Interactions,
    engine: &Engine,
    delta: f64,
) -> Result<TickReport> {
    drift(sys, delta);
    let report = interaction_pass(sys, interactions, engine)?;

    sys.t += delta;
    sys.tick = report.tick;

    trace!(
        "tick {} t={} collisions={} consumed={}",
        report.tick,
        sys.t,
        report.collisions.len(),
        report.consumed
    );
    Ok(report)
}

//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active interactions (`Interactions`)
//!
//! `Scenario::step` is what a host calls once per frame; renderers read
//! `Scenario::system` (or a `visualization::adapter::snapshot`) between
//! calls.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::engine::Engine;
use crate::simulation::integrator::{euler_step, Interactions, TickReport};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};
use crate::simulation::vector::NVec2;

/// A fully-initialized simulation.
///
/// The scenario is the only owner of body state. Every mutation goes
/// through [`Scenario::step`]; between steps the state is stable and can be
/// read freely.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub interactions: Interactions,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if !(p_cfg.size_scale.is_finite() && p_cfg.size_scale >= 0.0) {
            return Err(SimError::InvalidParam(format!(
                "size_scale must be finite and >= 0, got {}",
                p_cfg.size_scale
            )));
        }
        if !(p_cfg.delta.is_finite() && p_cfg.g.is_finite()) {
            return Err(SimError::InvalidParam("delta and g must be finite".into()));
        }
        let parameters = Parameters {
            world_size: p_cfg.world_size,
            size_scale: p_cfg.size_scale,
            g: p_cfg.g,
            delta: p_cfg.delta,
            ticks: p_cfg.ticks,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            physics: cfg.engine.physics,
            degeneracy: cfg.engine.degeneracy,
        };

        // Bodies: map `BodyConfig` -> runtime `Body`, ids must be unique
        let bodies = cfg
            .bodies
            .into_iter()
            .map(|bc: BodyConfig| {
                Body::new(
                    bc.id,
                    bc.name,
                    NVec2::new(bc.x[0], bc.x[1]),
                    NVec2::new(bc.v[0], bc.v[1]),
                    bc.m,
                )
            })
            .collect::<Result<Vec<_>>>()?;
        let system = System::with_bodies(bodies)?;

        let interactions = Interactions::for_engine(&engine, &parameters);

        info!(
            "scenario ready: {} bodies, physics {:?}, degeneracy {:?}",
            system.len(),
            engine.physics,
            engine.degeneracy
        );

        Ok(Self {
            engine,
            parameters,
            system,
            interactions,
        })
    }

    /// The seed scenario in a world of the default size
    pub fn default_line() -> Result<Self> {
        Self::build_scenario(ScenarioConfig::default_line(Parameters::default().world_size))
    }

    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        Self::build_scenario(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_yaml_reader(BufReader::new(file))
    }

    /// Advance one tick by `delta`.
    pub fn step(&mut self, delta: f64) -> Result<TickReport> {
        euler_step(&mut self.system, &self.interactions, &self.engine, delta)
    }

    /// Advance one tick by the configured default delta.
    pub fn step_default(&mut self) -> Result<TickReport> {
        self.step(self.parameters.delta)
    }

    /// Run `ticks` steps of `delta`, returning each tick's report.
    pub fn run(&mut self, ticks: u64, delta: f64) -> Result<Vec<TickReport>> {
        (0..ticks).map(|_| self.step(delta)).collect()
    }
}

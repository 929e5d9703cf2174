//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – physics model and degeneracy policy
//! - [`ParametersConfig`] – world extent, scale, constants, run length
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The seed scenario shipped as `scenarios/default.yaml`:
//!
//! ```yaml
//! engine:
//!   physics: legacy         # or "textbook"
//!   degeneracy: report      # "propagate", "report" or "halt"
//!
//! parameters:
//!   world_size: 8000.0      # side of the square world
//!   size_scale: 10.0        # radius multiplier for overlap tests
//!   g: 1.0                  # gravitational constant
//!   delta: 1.0              # frame-time scalar per tick
//!   ticks: 400              # ticks for a headless run
//!
//! bodies:
//!   - id: 1
//!     name: planet1
//!     x: [4050.0, 4100.0]
//!     v: [0.0, -1.0]
//!     m: 1.0
//!   # ...
//! ```
//!
//! Every `engine` and `parameters` key is optional.

use serde::{Deserialize, Serialize};

use crate::simulation::params::Parameters;
use crate::simulation::states::BodyId;

/// Which physics model the engine runs
/// physics: "legacy"` or `physics: "textbook"
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhysicsConfig {
    #[default]
    #[serde(rename = "legacy")] // axis-sign gravity pull, 60 degree collision axis, mirrored headings
    Legacy,

    #[serde(rename = "textbook")] // gravity along the line of centers, momentum-conserving bounce
    Textbook,
}

/// What the stepper does when two bodies coincide (infinite gravity kick)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneracyConfig {
    #[serde(rename = "propagate")] // say nothing, NaN/inf flows into the state
    Propagate,

    #[default]
    #[serde(rename = "report")] // log a warning and list the pair in the tick report
    Report,

    #[serde(rename = "halt")] // fail the step before the kick is applied
    Halt,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub physics: PhysicsConfig,
    pub degeneracy: DegeneracyConfig,
}

/// Global numerical and physical parameters for a scenario
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub world_size: f64, // side of the square world
    pub size_scale: f64, // radius multiplier
    pub g: f64,          // gravitational constant
    pub delta: f64,      // frame delta used when a caller passes none
    pub ticks: u64,      // run length for headless runs
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            world_size: p.world_size,
            size_scale: p.size_scale,
            g: p.g,
            delta: p.delta,
            ticks: p.ticks,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub id: BodyId,           // unique id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>, // display name
    pub x: [f64; 2],          // initial position
    pub v: [f64; 2],          // initial velocity, world units per tick
    pub m: f64,               // mass, radius is derived from it
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// The seed configuration: five unit masses in a row heading down,
    /// one mass-40 body 200 units above them drifting up slowly.
    pub fn default_line(world_size: f64) -> Self {
        let c = world_size / 2.0;
        let mut bodies: Vec<BodyConfig> = (0..5)
            .map(|k| BodyConfig {
                id: k + 1,
                name: Some(format!("planet{}", k + 1)),
                x: [c + 50.0 + 20.0 * k as f64, c + 100.0],
                v: [0.0, -1.0],
                m: 1.0,
            })
            .collect();
        bodies.push(BodyConfig {
            id: 7,
            name: Some("planet11".into()),
            x: [c + 100.0, c - 100.0],
            v: [0.0, 0.1],
            m: 40.0,
        });

        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig {
                world_size,
                ..Default::default()
            },
            bodies,
        }
    }
}

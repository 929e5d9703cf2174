pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodyId, System};
pub use simulation::vector::{NVec2, VecOps};
pub use simulation::forces::{Attraction, AttractionSet, AxisSignGravity, NewtonianGravity};
pub use simulation::collision::{CollisionEvent, ObliqueBounce, Resolution};
pub use simulation::integrator::{euler_step, Interactions, TickReport};
pub use simulation::scenario::Scenario;
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;

pub use configuration::config::{BodyConfig, DegeneracyConfig, EngineConfig, ParametersConfig, PhysicsConfig, ScenarioConfig};

pub use visualization::adapter::{snapshot, BodyView, CsvRenderer, Renderer, TrailRecorder};

pub use benchmark::benchmark::bench_step;

pub use error::{Result, SimError};

//! High-level runtime engine settings
//!
//! Selects the physics model (the legacy approximations or textbook
//! Newtonian gravity and bounces) and what happens when two bodies end up
//! on the same point.

use crate::configuration::config::{DegeneracyConfig, PhysicsConfig};

#[derive(Debug, Clone)]
pub struct Engine {
    pub physics: PhysicsConfig, // legacy or textbook
    pub degeneracy: DegeneracyConfig, // propagate, report or halt
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::Legacy,
            degeneracy: DegeneracyConfig::Report,
        }
    }
}

//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - world extent and the scale applied to body radii,
//! - gravitational constant `g` (1 in every shipped scenario),
//! - default frame delta and tick count for headless runs

#[derive(Debug, Clone)]
pub struct Parameters {
    pub world_size: f64, // side of the square world, used for seeding and rendering
    pub size_scale: f64, // multiplies radii for overlap tests and sprite sizes
    pub g: f64, // gravitational constant
    pub delta: f64, // frame-time scalar used when the caller gives none
    pub ticks: u64, // tick count for headless runs
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            world_size: 8000.0,
            size_scale: 10.0,
            g: 1.0,
            delta: 1.0,
            ticks: 400,
        }
    }
}

//! Gravity contributors for the pairwise pass
//!
//! Every contributor turns one ordered `(target, source)` pair into a
//! velocity kick on the target. Kicks are added to the velocity directly:
//! there is no separate acceleration buffer and no division by the target's
//! mass, so a light body and a heavy body receive the same kick from the
//! same source.

use crate::simulation::states::Body;
use crate::simulation::vector::NVec2;

/// Collection of gravity terms
/// Each term implements [`Attraction`] and their kicks are summed
/// into a single velocity change for the target
pub struct AttractionSet {
    terms: Vec<Box<dyn Attraction + Send + Sync>>,
}

impl AttractionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Attraction + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total kick on `target` from `source` at separation `distance`
    pub fn kick(&self, target: &Body, source: &Body, distance: f64) -> NVec2 {
        let mut dv = NVec2::zeros();
        for term in &self.terms {
            dv += term.kick(target, source, distance);
        }
        dv
    }
}

impl Default for AttractionSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for pairwise gravity terms
/// `distance` is `|target.x - source.x|`, already computed by the caller
pub trait Attraction {
    fn kick(&self, target: &Body, source: &Body, distance: f64) -> NVec2;
}

/// Magnitude of the pull a body of `source_mass` exerts at `distance`.
/// Infinite at zero distance.
#[inline]
pub fn pull(g: f64, source_mass: f64, distance: f64) -> f64 {
    g * source_mass / distance.powi(2)
}

/// Sign of the pull along one axis: toward the source, `+1` on a tie
#[inline]
fn axis_sign(source: f64, target: f64) -> f64 {
    if source < target { -1.0 } else { 1.0 }
}

/// Gravity pulled along each axis separately.
///
/// The full magnitude `g * m_source / d^2` is applied on both axes, each
/// signed toward the source. A body diagonally offset therefore gets a
/// kick of length `sqrt(2)` times the pull, and a body level with the
/// source still gets a full kick along the other axis.
pub struct AxisSignGravity {
    pub g: f64, // gravitational constant
}

impl Attraction for AxisSignGravity {
    fn kick(&self, target: &Body, source: &Body, distance: f64) -> NVec2 {
        let force = pull(self.g, source.m, distance);
        let dir = NVec2::new(
            axis_sign(source.x.x, target.x.x),
            axis_sign(source.x.y, target.x.y),
        );
        force * dir
    }
}

/// Gravity along the true line of centers
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Attraction for NewtonianGravity {
    fn kick(&self, target: &Body, source: &Body, distance: f64) -> NVec2 {
        // r points from target to source; r / d is the unit pull direction
        let r = source.x - target.x;
        pull(self.g, source.m, distance) * (r / distance)
    }
}

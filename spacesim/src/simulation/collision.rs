//! Overlap detection and bounce resolution
//!
//! A pair overlaps when its separation is at most `size_scale * (r1 + r2)`.
//! Overlapping pairs exchange velocity through the oblique elastic-collision
//! decomposition: each velocity is split into a part along a collision axis
//! `ph` and a part across it; the parts along the axis are exchanged with
//! the 1D elastic rule, the parts across it are kept.
//!
//! # Legacy model
//!
//! The default model does not use the line of centers as its axis. It uses
//! the line of centers turned by 60 degrees, and it feeds the formula the
//! *negated* heading of each velocity (a mirror about the x axis). Net
//! effect for an isolated pair: momentum along x is conserved, momentum
//! along y comes out mirrored. `ObliqueBounce::textbook` gives the
//! momentum-conserving variant.
//!
//! # Once-per-visit guard
//!
//! The pairwise pass visits every pair twice, once from each side. A body
//! whose velocity was rewritten carries `collision_resolved = true`; the
//! next time that body would be rewritten, the flag is cleared instead and
//! its velocity is left alone. Flags are not cleared at the start of a
//! tick, so a flag raised late in one tick can absorb a bounce early in
//! the next.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

use log::debug;

use crate::simulation::states::{Body, BodyId};
use crate::simulation::vector::{NVec2, VecOps};

/// Position step taken by a body right after its velocity is rewritten.
/// Independent of the frame delta.
pub const BOUNCE_STEP: f64 = 1.0;

/// Whether `target` and `source`, `distance` apart, touch.
#[inline]
pub fn overlapping(distance: f64, target: &Body, source: &Body, size_scale: f64) -> bool {
    distance <= size_scale * (target.radius + source.radius)
}

/// Oblique elastic bounce with a configurable collision axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObliqueBounce {
    pub axis_offset: f64, // angle added to the line of centers
    pub mirror_headings: bool, // feed -heading(v) instead of heading(v)
}

impl ObliqueBounce {
    pub fn legacy() -> Self {
        Self {
            axis_offset: FRAC_PI_3,
            mirror_headings: true,
        }
    }

    pub fn textbook() -> Self {
        Self {
            axis_offset: 0.0,
            mirror_headings: false,
        }
    }

    /// Collision axis `ph` for the pair, from source toward target.
    pub fn axis(&self, target: &Body, source: &Body) -> f64 {
        (target.x - source.x).rotated(self.axis_offset).heading()
    }

    fn heading(&self, v: NVec2) -> f64 {
        if self.mirror_headings {
            -v.heading()
        } else {
            v.heading()
        }
    }

    /// Post-bounce velocities `(target, source)`, both computed from the
    /// pre-bounce state of the pair.
    pub fn velocities(&self, target: &Body, source: &Body) -> (NVec2, NVec2) {
        let v1 = target.v.length();
        let v2 = source.v.length();
        let m1 = target.m;
        let m2 = source.m;
        let m = m1 + m2;
        let dir1 = self.heading(target.v);
        let dir2 = self.heading(source.v);
        let ph = self.axis(target, source);

        let along1 = v1 * (dir1 - ph).cos() * (m1 - m2) + 2.0 * m2 * v2 * (dir2 - ph).cos();
        let across1 = v1 * (dir1 - ph).sin();
        let new_target = NVec2::new(
            along1 * ph.cos() / m + across1 * (ph + FRAC_PI_2).cos(),
            along1 * ph.sin() / m + across1 * (ph + FRAC_PI_2).sin(),
        );

        let along2 = v2 * (dir2 - ph).cos() * (m2 - m1) + 2.0 * m1 * v1 * (dir1 - ph).cos();
        let across2 = v2 * (dir2 - ph).sin();
        let new_source = NVec2::new(
            along2 * ph.cos() / m + across2 * (ph + FRAC_PI_2).cos(),
            along2 * ph.sin() / m + across2 * (ph + FRAC_PI_2).sin(),
        );

        (new_target, new_source)
    }
}

impl Default for ObliqueBounce {
    fn default() -> Self {
        Self::legacy()
    }
}

/// What a call to [`resolve`] did to the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Target had already bounced; its flag was cleared, nothing else changed.
    Consumed,
    /// Target bounced; source had already bounced and only had its flag cleared.
    TargetOnly,
    /// Both bodies bounced.
    Both,
}

/// Bounce an overlapping pair, honoring the once-per-visit guard.
pub fn resolve(target: &mut Body, source: &mut Body, model: &ObliqueBounce) -> Resolution {
    if target.collision_resolved {
        target.collision_resolved = false;
        return Resolution::Consumed;
    }

    let (new_target, new_source) = model.velocities(target, source);
    debug!(
        "bounce {} <- {}: v {:?} -> {:?}",
        target.id, source.id, target.v, new_target
    );

    target.v = new_target;
    target.advance(BOUNCE_STEP);
    target.collision_resolved = true;

    if source.collision_resolved {
        source.collision_resolved = false;
        Resolution::TargetOnly
    } else {
        source.v = new_source;
        source.advance(BOUNCE_STEP);
        source.collision_resolved = true;
        Resolution::Both
    }
}

/// A bounce that rewrote a target's velocity during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub target: BodyId,
    pub source: BodyId,
    pub source_updated: bool,
}

//! 2D vector helpers on top of nalgebra
//!
//! Bodies carry `NVec2` (`nalgebra::Vector2<f64>`) values. nalgebra already
//! provides the algebra; this module names the handful of operations the
//! force and collision code is written in terms of, so the formulas read
//! the same way they are stated:
//! - `add`, `scale`
//! - `magnitude`: Euclidean length
//! - `direction`: heading angle, `atan2(y, x)`
//! - `rotate`: counter-clockwise rotation about the origin

use nalgebra::{Rotation2, Vector2};

pub type NVec2 = Vector2<f64>;

/// Named vector operations used by the physics passes
pub trait VecOps {
    fn length(&self) -> f64;
    fn heading(&self) -> f64;
    fn rotated(&self, theta: f64) -> NVec2;
}

impl VecOps for NVec2 {
    #[inline]
    fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn rotated(&self, theta: f64) -> NVec2 {
        Rotation2::new(theta) * *self
    }
}

#[inline]
pub fn add(a: NVec2, b: NVec2) -> NVec2 {
    a + b
}

#[inline]
pub fn scale(v: NVec2, k: f64) -> NVec2 {
    v * k
}

#[inline]
pub fn magnitude(v: NVec2) -> f64 {
    v.length()
}

#[inline]
pub fn direction(v: NVec2) -> f64 {
    v.heading()
}

#[inline]
pub fn rotate(v: NVec2, theta: f64) -> NVec2 {
    v.rotated(theta)
}

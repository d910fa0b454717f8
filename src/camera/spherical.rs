//! Position ↔ spherical conversions about the body center.
//!
//! Scene space is Y-up with the body center at the origin. The polar
//! angle is measured from the +Y axis (0 at the top pole, π at the
//! bottom), azimuth rotates around Y with azimuth 0 on +Z.

use glam::Vec3;

/// Spherical description of a camera position relative to the body
/// center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the body center.
    pub distance: f32,
    /// Angle from the +Y axis, in radians.
    pub polar: f32,
    /// Angle around the Y axis, in radians (0 on +Z).
    pub azimuth: f32,
}

impl Spherical {
    /// Convert a Cartesian position to spherical coordinates.
    ///
    /// The origin is degenerate: it maps to all-zero coordinates
    /// (polar 0 by definition) rather than propagating NaN.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        let distance = position.length();
        if distance <= f32::EPSILON {
            return Self {
                distance: 0.0,
                polar: 0.0,
                azimuth: 0.0,
            };
        }
        let polar = (position.y / distance).clamp(-1.0, 1.0).acos();
        let azimuth = position.x.atan2(position.z);
        Self {
            distance,
            polar,
            azimuth,
        }
    }

    /// Convert spherical coordinates back to a Cartesian position.
    #[must_use]
    pub fn to_position(self) -> Vec3 {
        let horizontal = self.distance * self.polar.sin();
        Vec3::new(
            horizontal * self.azimuth.sin(),
            self.distance * self.polar.cos(),
            horizontal * self.azimuth.cos(),
        )
    }
}

//! Committed camera position and look-at target.

use glam::Vec3;

/// The fixed look-at origin the camera always orbits.
pub const BODY_CENTER: Vec3 = Vec3::ZERO;

/// The camera pose the renderer reads every frame.
///
/// Created once per controller and mutated exclusively by
/// [`CameraController`](crate::camera::CameraController); every other
/// component only consumes values derived from it. The look-at target
/// is always the body center, regardless of navigation mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    position: Vec3,
}

impl CameraState {
    /// Create a camera state at the given position.
    #[must_use]
    pub(crate) fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Current camera position in scene space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look-at target: always the body center.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        BODY_CENTER
    }

    /// Distance from the body center (derived).
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.position.length()
    }

    pub(crate) fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{CameraState, BODY_CENTER};

    #[test]
    fn target_is_always_body_center() {
        let mut state = CameraState::new(Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(state.target(), BODY_CENTER);
        state.set_position(Vec3::new(3.0, 1.0, -2.0));
        assert_eq!(state.target(), BODY_CENTER);
    }

    #[test]
    fn distance_is_derived_from_position() {
        let state = CameraState::new(Vec3::new(0.0, 3.0, 4.0));
        assert_eq!(state.distance(), 5.0);
    }
}

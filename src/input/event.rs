//! Platform-agnostic navigation input events.
//!
//! These are fed into
//! [`CameraController::handle_event`](crate::camera::CameraController::handle_event),
//! which routes them to the directional tracker and the zoom session.
//! The host converts its own event types (winit key events, CEC remote
//! codes, on-screen button callbacks) into these at the boundary.

/// One of the four pan directions a navigation input can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Tilt toward the top pole (decreasing polar angle).
    Up,
    /// Tilt toward the bottom pole (increasing polar angle).
    Down,
    /// Orbit left around the vertical axis.
    Left,
    /// Orbit right around the vertical axis.
    Right,
}

impl Direction {
    /// All four directions, in tracker index order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Dense index for per-direction state arrays.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

/// Platform-agnostic navigation input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// A directional control went down.
    DirectionPress(Direction),
    /// A directional control came back up.
    DirectionRelease(Direction),
    /// The zoom control went down (hold-to-zoom begins).
    ZoomStart,
    /// The zoom control came back up (session ends, direction toggles).
    ZoomEnd,
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn indices_are_dense_and_unique() {
        let mut seen = [false; 4];
        for dir in Direction::ALL {
            let i = dir.index();
            assert!(!seen[i], "duplicate index {i}");
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}

//! Hold-to-zoom session state machine.
//!
//! Zoom is driven by a single held control: the first hold zooms in,
//! the next zooms out, alternating every completed session. The toggle
//! is owned here — callers never pick a direction, they only report
//! hold start/end. While a session is active the per-tick distance step
//! is proportional to the current distance, so perceived zoom speed is
//! the same up close and far out.

/// Which way an active zoom session moves the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Toward the body (distance shrinks).
    In,
    /// Away from the body (distance grows).
    Out,
}

impl ZoomDirection {
    fn flipped(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }
}

/// Hold-to-zoom session controller.
///
/// Owned by the camera controller. Sessions alternate direction: the
/// stored direction flips when a session *ends*, so an interrupted
/// (cancelled) session does not consume its turn.
#[derive(Debug, Clone, Copy)]
pub struct ZoomController {
    active: bool,
    direction: ZoomDirection,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self {
            active: false,
            direction: ZoomDirection::In,
        }
    }
}

impl ZoomController {
    /// Create a controller whose first session zooms in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session using the stored direction.
    ///
    /// No-op if a session is already active (a duplicate hold-start is
    /// call-order misuse, defined as harmless).
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
    }

    /// End the active session and flip the stored direction for the
    /// next one. No-op if no session is active.
    pub fn end(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.direction = self.direction.flipped();
    }

    /// Forcibly end the session without consuming the toggle.
    ///
    /// Used when the arbiter tears a gesture down mid-session (e.g. the
    /// menu opened); the interrupted session keeps its direction for
    /// the next attempt.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Whether a session is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Direction the current (or next) session moves the camera.
    #[must_use]
    pub fn direction(&self) -> ZoomDirection {
        self.direction
    }

    /// Apply one tick of zoom to `distance`.
    ///
    /// `rate` is the proportional zoom rate in 1/seconds and `delta`
    /// the frame delta in seconds. Returns the new distance, clamped
    /// into `[min_distance, max_distance]`; at a boundary the value
    /// silently stops changing. When no session is active the input
    /// distance is returned unchanged.
    #[must_use]
    pub fn step(
        &self,
        distance: f32,
        delta: f32,
        rate: f32,
        min_distance: f32,
        max_distance: f32,
    ) -> f32 {
        if !self.active {
            return distance;
        }
        let signed: f32 = match self.direction {
            ZoomDirection::In => -1.0,
            ZoomDirection::Out => 1.0,
        };
        let stepped = distance * signed.mul_add(rate * delta, 1.0);
        stepped.clamp(min_distance, max_distance)
    }
}

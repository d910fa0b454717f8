//! Input handling for directional navigation and hold-to-zoom.
//!
//! Raw press/release events from the host (keyboard, remote control,
//! on-screen buttons) are absorbed into per-direction speed state with
//! debouncing and hold acceleration, plus a hold-to-zoom session state
//! machine whose direction toggles between sessions.

/// Per-direction press/release tracking with debounce and acceleration.
pub mod directional;
/// Platform-agnostic navigation input events.
pub mod event;
/// Hold-to-zoom session state machine.
pub mod zoom;

pub use directional::DirectionalInput;
pub use event::{Direction, NavEvent};
pub use zoom::{ZoomController, ZoomDirection};

//! Camera navigation around the body center.
//!
//! Provides the per-frame [`CameraController`], the spherical
//! coordinate math it is built on, the owned [`CameraState`], and the
//! navigation-mode arbiter.

/// Per-frame navigation controller; the only mutator of camera state.
pub mod controller;
/// Navigation modes and level-triggered arbitration.
pub mod mode;
/// Position ↔ spherical conversions about the body center.
pub mod spherical;
/// Committed camera position and look-at target.
pub mod state;

pub use controller::{CameraController, DirectionalInputHook, ZoomChangeHook};
pub use mode::{NavFlags, NavMode, NavSignals};
pub use spherical::Spherical;
pub use state::CameraState;

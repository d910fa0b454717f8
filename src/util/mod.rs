//! Small shared utilities.

/// Framerate-independent smoothing factors.
pub mod smoothing;

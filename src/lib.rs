// -- Lint policy ---------------------------------------------------------
// Broad groups and per-lint allowances live in Cargo.toml [lints]; only
// the non-negotiable restrictions are pinned here.

// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera navigation core for a real-time Earth/satellite 3D viewer.
//!
//! Orbview positions and orients a virtual camera around a fixed body
//! center (the celestial body at the origin) under several mutually
//! exclusive navigation modes, absorbing irregular input events
//! (key/remote hold, hold-to-zoom) with debouncing and hold
//! acceleration. The renderer, the windowing/input backend, and the
//! tracked-object position feed are external collaborators; this crate
//! only decides where the camera is.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - the per-frame navigation controller
//! - [`camera::NavSignals`] / [`camera::NavMode`] - mode arbitration
//! - [`input::NavEvent`] - platform-agnostic input events
//! - [`options::Options`] - runtime configuration (camera bounds,
//!   navigation rates, input tuning)
//! - [`feed::TrackedSample`] - the tracked object's position samples
//!
//! # Architecture
//!
//! The host render loop calls [`camera::CameraController::tick`] exactly
//! once per frame with the measured frame delta and the current
//! application flags. Everything time-deferred (key-repeat acceleration,
//! debouncing, smoothing) is evaluated against timestamps recorded on
//! the controller's own clock, so the whole subsystem is deterministic
//! and replayable from a synthetic sequence of frame deltas.

pub mod camera;
pub mod error;
pub mod feed;
pub mod input;
pub mod options;
pub mod util;

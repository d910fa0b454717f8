//! Per-frame camera navigation controller.
//!
//! [`CameraController`] is the single per-frame entry point of the
//! navigation core. Each render frame the host calls
//! [`tick`](CameraController::tick) with the measured frame delta and
//! the current application flags; the controller arbitrates the active
//! mode, computes the desired camera position for it, smooths and
//! clamps the result, and commits it to the owned [`CameraState`].
//!
//! Nothing in here returns errors: per design, abnormal conditions
//! (missing sample, clock glitch, call-order misuse, a panicking
//! notification hook) degrade to "hold the current state this tick."

use glam::Vec3;

use crate::camera::mode::{NavFlags, NavMode, NavSignals};
use crate::camera::spherical::Spherical;
use crate::camera::state::CameraState;
use crate::feed::{GeodeticConverter, TrackedSample};
use crate::input::{
    Direction, DirectionalInput, NavEvent, ZoomController, ZoomDirection,
};
use crate::options::Options;
use crate::util::smoothing::damp_factor;

/// Fire-and-forget UI hook: a direction is driving the camera at the
/// given angular speed (radians/second).
pub type DirectionalInputHook = Box<dyn FnMut(Direction, f32)>;

/// Fire-and-forget UI hook: an active zoom session changed the
/// distance. Arguments are (zooming in, distance delta).
pub type ZoomChangeHook = Box<dyn FnMut(bool, f32)>;

/// Orchestrates mode arbitration, per-mode motion, smoothing, and
/// clamping; the only component that mutates [`CameraState`].
pub struct CameraController {
    opts: Options,
    state: CameraState,
    directional: DirectionalInput,
    zoom: ZoomController,
    mode: NavMode,
    /// Accumulated tick clock in seconds; the time base for every
    /// recorded timestamp (debounce, acceleration).
    clock: f64,
    orbit_angle: f32,
    /// ManualFree reversion lerp toward the canonical position is in
    /// progress.
    reverting: bool,
    latest_sample: Option<TrackedSample>,
    converter: Box<dyn GeodeticConverter>,
    on_directional_input: Option<DirectionalInputHook>,
    on_zoom_change: Option<ZoomChangeHook>,
}

impl CameraController {
    /// Create a controller at the canonical manual position.
    ///
    /// `converter` is the host's geographic → Cartesian collaborator
    /// for tracked-object samples.
    #[must_use]
    pub fn new(opts: Options, converter: Box<dyn GeodeticConverter>) -> Self {
        let directional = DirectionalInput::new(opts.input);
        let start = Self::canonical_position(&opts);
        Self {
            opts,
            state: CameraState::new(start),
            directional,
            zoom: ZoomController::new(),
            mode: NavMode::ManualFree,
            clock: 0.0,
            orbit_angle: 0.0,
            reverting: false,
            latest_sample: None,
            converter,
            on_directional_input: None,
            on_zoom_change: None,
        }
    }

    // -- External inputs --------------------------------------------------

    /// Route a platform-agnostic navigation event to the right tracker.
    pub fn handle_event(&mut self, event: NavEvent) {
        match event {
            NavEvent::DirectionPress(direction) => {
                self.direction_press(direction);
            }
            NavEvent::DirectionRelease(direction) => {
                self.direction_release(direction);
            }
            NavEvent::ZoomStart => self.zoom_start(),
            NavEvent::ZoomEnd => self.zoom_end(),
        }
    }

    /// A directional control went down. Idempotent and debounced.
    pub fn direction_press(&mut self, direction: Direction) {
        self.directional.press(direction, self.clock);
    }

    /// A directional control came back up. No-op without a matching
    /// press.
    pub fn direction_release(&mut self, direction: Direction) {
        self.directional.release(direction, self.clock);
    }

    /// The zoom control went down. No-op if a session is already
    /// active.
    pub fn zoom_start(&mut self) {
        self.zoom.start();
    }

    /// The zoom control came back up; the session direction toggles for
    /// the next hold. No-op if no session is active.
    pub fn zoom_end(&mut self) {
        self.zoom.end();
    }

    /// Store the most recent tracked-object sample from the feed.
    pub fn push_sample(&mut self, sample: TrackedSample) {
        self.latest_sample = Some(sample);
    }

    /// The external free-look collaborator received input.
    ///
    /// Hard-stops the ManualFree reversion lerp immediately; it is not
    /// resumed.
    pub fn notify_free_look(&mut self) {
        self.reverting = false;
    }

    /// Install the directional-input UI feedback hook.
    pub fn set_directional_input_hook(&mut self, hook: DirectionalInputHook) {
        self.on_directional_input = Some(hook);
    }

    /// Install the zoom-change UI feedback hook.
    pub fn set_zoom_change_hook(&mut self, hook: ZoomChangeHook) {
        self.on_zoom_change = Some(hook);
    }

    // -- Read access for the renderer and UI ------------------------------

    /// Committed camera position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.state.position()
    }

    /// Committed look-at target (always the body center).
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.state.target()
    }

    /// Current distance from the body center.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.state.distance()
    }

    /// Mode selected by the most recent tick.
    #[must_use]
    pub fn mode(&self) -> NavMode {
        self.mode
    }

    /// Read access to the directional tracker (UI state displays).
    #[must_use]
    pub fn directional(&self) -> &DirectionalInput {
        &self.directional
    }

    /// Read access to the zoom session state.
    #[must_use]
    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    /// Current option set.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.opts
    }

    // -- Per-frame entry point ---------------------------------------------

    /// Advance the controller by one frame.
    ///
    /// `delta` is the measured frame time in seconds; out-of-range
    /// values (negative, NaN, stall spikes) are clamped into
    /// `[0, max_frame_delta]` before use. `signals` are the external
    /// application/UI flags, read once per tick.
    pub fn tick(&mut self, delta: f32, signals: NavSignals) {
        let delta = if delta.is_finite() {
            delta.clamp(0.0, self.opts.navigation.max_frame_delta)
        } else {
            0.0
        };
        self.clock += f64::from(delta);

        if !signals.directional_profile {
            self.clear_gestures();
        }

        let flags = NavFlags {
            follow_target: signals.follow_target,
            auto_orbit: signals.auto_orbit,
            directional_active: self.directional.any_active()
                || self.zoom.is_active(),
            menu_visible: signals.menu_visible,
        };
        self.apply_mode(flags.resolve());

        match self.mode {
            NavMode::Follow => self.tick_follow(delta),
            NavMode::AutoOrbit => self.tick_auto_orbit(delta),
            NavMode::Directional => self.tick_directional(delta),
            NavMode::ManualFree => self.tick_manual_free(delta),
        }
    }

    // -- Mode bookkeeping --------------------------------------------------

    fn apply_mode(&mut self, mode: NavMode) {
        // A mode exit forced mid-gesture (menu opened while a direction
        // is held) tears the whole gesture down; the next directional
        // session starts from a clean slate.
        if mode != NavMode::Directional
            && (self.directional.any_active() || self.zoom.is_active())
        {
            self.clear_gestures();
        }

        if mode == self.mode {
            return;
        }
        log::debug!("nav mode {:?} -> {mode:?}", self.mode);

        if mode == NavMode::AutoOrbit {
            // Resume the orbit from the camera's current azimuth so the
            // circle picks up nearby instead of swinging wide.
            self.orbit_angle =
                Spherical::from_position(self.state.position()).azimuth;
        }

        if mode == NavMode::ManualFree
            && matches!(self.mode, NavMode::Follow | NavMode::AutoOrbit)
        {
            self.reverting = true;
        } else {
            self.reverting = false;
        }

        self.mode = mode;
    }

    fn clear_gestures(&mut self) {
        self.directional.clear_all();
        self.zoom.cancel();
    }

    // -- Per-mode motion ---------------------------------------------------

    fn tick_follow(&mut self, delta: f32) {
        let Some(tracked) = self.tracked_position() else {
            // Missing or invalid sample: hold position this tick.
            return;
        };
        // The camera sits further out along the ray from the body
        // center through the tracked object, so the object always lies
        // between camera and body center.
        let desired =
            tracked * self.opts.camera.follow_distance_multiplier;
        let factor =
            damp_factor(self.opts.navigation.follow_lerp_rate, delta);
        self.commit(self.state.position().lerp(desired, factor));
    }

    fn tick_auto_orbit(&mut self, delta: f32) {
        self.orbit_angle = (self.opts.navigation.orbit_speed)
            .mul_add(delta, self.orbit_angle)
            .rem_euclid(std::f32::consts::TAU);
        let desired = Spherical {
            distance: self.opts.navigation.orbit_distance.clamp(
                self.opts.camera.min_distance,
                self.opts.camera.max_distance,
            ),
            polar: std::f32::consts::FRAC_PI_2,
            azimuth: self.orbit_angle,
        }
        .to_position();
        let factor =
            damp_factor(self.opts.navigation.follow_lerp_rate, delta);
        self.commit(self.state.position().lerp(desired, factor));
    }

    fn tick_directional(&mut self, delta: f32) {
        self.directional.tick(self.clock);

        let zooming = self.zoom.is_active();
        let suppress_horizontal = zooming
            && self.opts.navigation.suppress_horizontal_while_zooming;

        let up = self.directional.speed(Direction::Up);
        let down = self.directional.speed(Direction::Down);
        let (left, right) = if suppress_horizontal {
            (0.0, 0.0)
        } else {
            (
                self.directional.speed(Direction::Left),
                self.directional.speed(Direction::Right),
            )
        };

        let mut sph = Spherical::from_position(self.state.position());
        sph.distance = sph.distance.clamp(
            self.opts.camera.min_distance,
            self.opts.camera.max_distance,
        );
        // Rotation is rate-based: the gradualness comes from the speeds
        // themselves, no extra position lerp on top.
        sph.azimuth += (right - left) * delta;
        sph.polar = (down - up).mul_add(delta, sph.polar).clamp(
            self.opts.camera.min_polar,
            self.opts.camera.max_polar,
        );

        let before = sph.distance;
        sph.distance = self.zoom.step(
            sph.distance,
            delta,
            self.opts.navigation.zoom_rate,
            self.opts.camera.min_distance,
            self.opts.camera.max_distance,
        );
        let zoom_delta = sph.distance - before;

        self.commit(sph.to_position());

        let speeds = [
            (Direction::Up, up),
            (Direction::Down, down),
            (Direction::Left, left),
            (Direction::Right, right),
        ];
        for (direction, speed) in speeds {
            if speed > 0.0 {
                self.fire_directional_hook(direction, speed);
            }
        }
        if zooming && zoom_delta != 0.0 {
            let zooming_in = self.zoom.direction() == ZoomDirection::In;
            self.fire_zoom_hook(zooming_in, zoom_delta);
        }
    }

    fn tick_manual_free(&mut self, delta: f32) {
        // Free-look input is owned by an external collaborator; the
        // controller only drives the reversion lerp back to the
        // canonical position after follow/orbit hand over.
        if !self.reverting {
            return;
        }
        let target = Self::canonical_position(&self.opts);
        let factor =
            damp_factor(self.opts.navigation.revert_lerp_rate, delta);
        self.commit(self.state.position().lerp(target, factor));
        if self.state.position().distance(target)
            <= self.opts.navigation.revert_epsilon
        {
            self.reverting = false;
        }
    }

    // -- Helpers -----------------------------------------------------------

    /// Latest sample converted to scene space, or `None` when there is
    /// nothing usable to follow.
    fn tracked_position(&self) -> Option<Vec3> {
        let sample = self.latest_sample.as_ref()?;
        let position = self.converter.to_cartesian(sample)?;
        if position.length_squared() <= f32::EPSILON {
            return None;
        }
        Some(position)
    }

    /// Clamp into the legal distance/polar band and commit.
    fn commit(&mut self, position: Vec3) {
        let mut sph = Spherical::from_position(position);
        sph.distance = sph.distance.clamp(
            self.opts.camera.min_distance,
            self.opts.camera.max_distance,
        );
        sph.polar = sph.polar.clamp(
            self.opts.camera.min_polar,
            self.opts.camera.max_polar,
        );
        self.state.set_position(sph.to_position());
    }

    fn canonical_position(opts: &Options) -> Vec3 {
        Spherical {
            distance: opts.camera.default_distance.clamp(
                opts.camera.min_distance,
                opts.camera.max_distance,
            ),
            polar: opts
                .camera
                .default_polar
                .clamp(opts.camera.min_polar, opts.camera.max_polar),
            azimuth: opts.camera.default_azimuth,
        }
        .to_position()
    }

    fn fire_directional_hook(&mut self, direction: Direction, speed: f32) {
        if let Some(hook) = self.on_directional_input.as_mut() {
            let call = std::panic::AssertUnwindSafe(|| hook(direction, speed));
            if std::panic::catch_unwind(call).is_err() {
                log::warn!("directional input hook panicked; ignored");
            }
        }
    }

    fn fire_zoom_hook(&mut self, zooming_in: bool, delta: f32) {
        if let Some(hook) = self.on_zoom_change.as_mut() {
            let call = std::panic::AssertUnwindSafe(|| hook(zooming_in, delta));
            if std::panic::catch_unwind(call).is_err() {
                log::warn!("zoom change hook panicked; ignored");
            }
        }
    }
}

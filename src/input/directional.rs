//! Per-direction press/release tracking with debounce and acceleration.
//!
//! Remote controls and key auto-repeat deliver press/release events at
//! irregular, sometimes very high, frequency. This tracker absorbs them
//! into a stable per-direction angular-speed state: accepted events are
//! debounced, holds start at a base speed, and a hold longer than the
//! acceleration delay ramps the speed up to a maximum.
//!
//! All time-deferred behavior is evaluated inside [`DirectionalInput::tick`]
//! by comparing recorded timestamps against the caller's clock. No host
//! timer is involved, so a synthetic time sequence replays identically.

use crate::input::event::Direction;
use crate::options::InputOptions;

/// Tracking state for one direction.
#[derive(Debug, Clone, Copy)]
struct DirectionState {
    /// Whether the direction is currently held.
    active: bool,
    /// Whether the hold has passed the acceleration delay.
    accelerating: bool,
    /// Clock time at which the current hold started.
    press_start: f64,
    /// Clock time of the last *accepted* press/release for debouncing.
    last_event: f64,
    /// Current angular speed in radians/second (0 when inactive).
    speed: f32,
}

impl Default for DirectionState {
    fn default() -> Self {
        Self {
            active: false,
            accelerating: false,
            press_start: 0.0,
            // Far enough in the past that the first event always passes
            // the debounce gate.
            last_event: f64::NEG_INFINITY,
            speed: 0.0,
        }
    }
}

/// Debounced, accelerating per-direction input tracker.
///
/// Owned by the camera controller; hosts do not normally talk to this
/// type directly.
#[derive(Debug, Clone)]
pub struct DirectionalInput {
    states: [DirectionState; 4],
    opts: InputOptions,
}

impl DirectionalInput {
    /// Create a tracker with the given tuning.
    #[must_use]
    pub fn new(opts: InputOptions) -> Self {
        Self {
            states: [DirectionState::default(); 4],
            opts,
        }
    }

    /// Record a press at clock time `now` (seconds).
    ///
    /// A press while the direction is already active is a no-op
    /// (idempotent). A press closer than the debounce interval to the
    /// previous accepted event for the same direction is dropped
    /// silently. An accepted press arms acceleration: after the
    /// configured delay has elapsed, [`tick`](Self::tick) flips the
    /// hold into the accelerating state.
    pub fn press(&mut self, direction: Direction, now: f64) {
        let st = &mut self.states[direction.index()];
        if st.active {
            return;
        }
        if now - st.last_event < f64::from(self.opts.debounce_interval) {
            return;
        }
        st.active = true;
        st.accelerating = false;
        st.press_start = now;
        st.last_event = now;
        st.speed = self.opts.base_speed;
    }

    /// Record a release at clock time `now` (seconds).
    ///
    /// A release while the direction is inactive is a no-op. A release
    /// closer than the debounce interval to the previous accepted event
    /// is dropped, which keeps contact bounce (spurious release/press
    /// pairs) from interrupting a hold.
    pub fn release(&mut self, direction: Direction, now: f64) {
        let st = &mut self.states[direction.index()];
        if !st.active {
            return;
        }
        if now - st.last_event < f64::from(self.opts.debounce_interval) {
            return;
        }
        let last_event = now;
        *st = DirectionState {
            last_event,
            ..DirectionState::default()
        };
    }

    /// Re-evaluate acceleration for every active hold at clock time `now`.
    ///
    /// While a hold is accelerating, its speed grows linearly with hold
    /// time and saturates at the configured maximum; the value is
    /// monotonically non-decreasing for the duration of the hold.
    pub fn tick(&mut self, now: f64) {
        let delay = f64::from(self.opts.acceleration_delay);
        for st in &mut self.states {
            if !st.active {
                continue;
            }
            if !st.accelerating && now - st.press_start >= delay {
                st.accelerating = true;
            }
            if st.accelerating {
                let ramp = (now - st.press_start - delay).max(0.0) as f32;
                let target = self
                    .opts
                    .base_speed
                    .mul_add(self.opts.acceleration_rate * ramp, self.opts.base_speed);
                st.speed = target.min(self.opts.max_speed).max(st.speed);
            }
        }
    }

    /// Current speed for a direction in radians/second (0 when inactive).
    #[must_use]
    pub fn speed(&self, direction: Direction) -> f32 {
        let st = &self.states[direction.index()];
        if st.active {
            st.speed
        } else {
            0.0
        }
    }

    /// Whether the direction is currently held.
    #[must_use]
    pub fn is_active(&self, direction: Direction) -> bool {
        self.states[direction.index()].active
    }

    /// Whether any direction is currently held.
    #[must_use]
    pub fn any_active(&self) -> bool {
        self.states.iter().any(|st| st.active)
    }

    /// Forcibly clear every direction, including debounce history.
    ///
    /// Called when the arbiter forces a mode exit mid-gesture (menu
    /// opened, profile deactivated) so the next directional session
    /// starts from a clean slate.
    pub fn clear_all(&mut self) {
        self.states = [DirectionState::default(); 4];
    }
}

#[cfg(test)]
mod tests {
    use super::DirectionalInput;
    use crate::input::event::Direction;
    use crate::options::InputOptions;

    fn tracker() -> DirectionalInput {
        DirectionalInput::new(InputOptions::default())
    }

    #[test]
    fn press_activates_at_base_speed() {
        let opts = InputOptions::default();
        let mut input = tracker();
        input.press(Direction::Up, 0.0);
        assert!(input.is_active(Direction::Up));
        assert_eq!(input.speed(Direction::Up), opts.base_speed);
    }

    #[test]
    fn second_press_is_idempotent() {
        let mut input = tracker();
        input.press(Direction::Left, 0.0);
        input.tick(1.0);
        let speed_before = input.speed(Direction::Left);

        // Held for a second already; a duplicate press must not reset
        // the hold or its acceleration.
        input.press(Direction::Left, 1.0);
        input.tick(1.0);
        assert_eq!(input.speed(Direction::Left), speed_before);
    }

    #[test]
    fn release_without_press_is_noop() {
        let mut input = tracker();
        input.release(Direction::Right, 5.0);
        assert!(!input.any_active());
        // Debounce history must not have been touched by the no-op.
        input.press(Direction::Right, 5.0);
        assert!(input.is_active(Direction::Right));
    }

    #[test]
    fn rapid_re_press_is_debounced() {
        let opts = InputOptions::default();
        let mut input = tracker();

        input.press(Direction::Up, 0.0);
        input.release(Direction::Up, 1.0);
        // Repeat press inside the debounce window: dropped silently.
        input.press(Direction::Up, 1.0 + f64::from(opts.debounce_interval) / 2.0);
        assert!(!input.is_active(Direction::Up));

        // Past the window it is accepted again.
        input.press(Direction::Up, 1.0 + f64::from(opts.debounce_interval) * 2.0);
        assert!(input.is_active(Direction::Up));
    }

    #[test]
    fn bounce_release_is_dropped() {
        let mut input = tracker();
        input.press(Direction::Down, 0.0);
        // Contact bounce right after the press: hold survives.
        input.release(Direction::Down, 0.01);
        assert!(input.is_active(Direction::Down));
    }

    #[test]
    fn acceleration_waits_for_delay() {
        let opts = InputOptions::default();
        let mut input = tracker();
        input.press(Direction::Up, 0.0);

        input.tick(f64::from(opts.acceleration_delay) / 2.0);
        assert_eq!(input.speed(Direction::Up), opts.base_speed);

        input.tick(f64::from(opts.acceleration_delay) + 0.1);
        assert!(input.speed(Direction::Up) > opts.base_speed);
    }

    #[test]
    fn speed_is_monotonic_while_held() {
        let mut input = tracker();
        input.press(Direction::Right, 0.0);
        let mut previous = 0.0_f32;
        for frame in 0..200 {
            input.tick(f64::from(frame) * 0.016);
            let speed = input.speed(Direction::Right);
            assert!(speed >= previous, "speed regressed at frame {frame}");
            previous = speed;
        }
    }

    #[test]
    fn two_second_hold_reaches_max_speed() {
        // Press "up" continuously for 2000 ms with 16 ms ticks; at
        // t=2000 ms the speed has saturated at the configured maximum.
        let opts = InputOptions::default();
        let mut input = tracker();
        input.press(Direction::Up, 0.0);
        for frame in 1..=125 {
            input.tick(f64::from(frame) * 0.016);
        }
        input.tick(2.0);
        assert_eq!(input.speed(Direction::Up), opts.max_speed);
    }

    #[test]
    fn fresh_press_resets_to_base_speed() {
        let opts = InputOptions::default();
        let mut input = tracker();

        input.press(Direction::Up, 0.0);
        input.tick(2.0);
        assert_eq!(input.speed(Direction::Up), opts.max_speed);

        input.release(Direction::Up, 2.0);
        assert_eq!(input.speed(Direction::Up), 0.0);

        input.press(Direction::Up, 3.0);
        input.tick(3.0);
        assert_eq!(input.speed(Direction::Up), opts.base_speed);
    }

    #[test]
    fn clear_all_wipes_every_direction() {
        let mut input = tracker();
        input.press(Direction::Up, 0.0);
        input.press(Direction::Left, 0.0);
        input.clear_all();
        assert!(!input.any_active());
        for dir in Direction::ALL {
            assert_eq!(input.speed(dir), 0.0);
        }
        // Clean slate includes debounce history: an immediate press works.
        input.press(Direction::Up, 0.0);
        assert!(input.is_active(Direction::Up));
    }
}

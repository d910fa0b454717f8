use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Directional-input tuning: hold speeds, acceleration, debouncing.
pub struct InputOptions {
    /// Angular speed of a fresh hold, radians/second.
    #[schemars(title = "Base Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub base_speed: f32,
    /// Speed ceiling an accelerated hold saturates at, radians/second.
    #[schemars(title = "Max Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub max_speed: f32,
    /// Hold time in seconds before acceleration kicks in.
    #[schemars(title = "Acceleration Delay", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub acceleration_delay: f32,
    /// Linear speed growth once accelerating: speed multiplies by
    /// `1 + rate * seconds_past_delay` (clamped at `max_speed`).
    #[schemars(title = "Acceleration Rate", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub acceleration_rate: f32,
    /// Minimum spacing in seconds between accepted press/release events
    /// for the same direction; closer repeats are dropped.
    #[schemars(skip)]
    pub debounce_interval: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            base_speed: 0.35,
            max_speed: 1.4,
            acceleration_delay: 0.3,
            acceleration_rate: 2.5,
            debounce_interval: 0.15,
        }
    }
}

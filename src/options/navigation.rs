use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Motion rates and per-mode behavior of the navigation controller.
pub struct NavigationOptions {
    /// Auto-orbit angular speed in radians/second.
    #[schemars(title = "Orbit Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub orbit_speed: f32,
    /// Radius of the auto-orbit circle in scene units.
    #[schemars(title = "Orbit Distance", range(min = 1.1, max = 50.0), extend("step" = 0.1))]
    pub orbit_distance: f32,
    /// Exponential smoothing rate (1/s) for follow and auto-orbit
    /// position approach. Higher is snappier.
    #[schemars(title = "Smoothing Rate", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub follow_lerp_rate: f32,
    /// Exponential smoothing rate (1/s) for the reversion toward the
    /// canonical position when manual mode takes over.
    #[schemars(skip)]
    pub revert_lerp_rate: f32,
    /// Distance below which the reversion lerp is considered finished.
    #[schemars(skip)]
    pub revert_epsilon: f32,
    /// Proportional zoom rate in 1/seconds: each second of held zoom
    /// changes the distance by this fraction of itself.
    #[schemars(title = "Zoom Rate", range(min = 0.1, max = 3.0), extend("step" = 0.1))]
    pub zoom_rate: f32,
    /// While a zoom session is active, ignore left/right pan input
    /// (up/down stays live). Inherited behavior kept as policy.
    #[schemars(title = "Lock Pan While Zooming")]
    pub suppress_horizontal_while_zooming: bool,
    /// Upper clamp for the per-frame delta in seconds; protects the
    /// controller from clock glitches and long stalls.
    #[schemars(skip)]
    pub max_frame_delta: f32,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            orbit_speed: 0.15,
            orbit_distance: 4.0,
            follow_lerp_rate: 3.0,
            revert_lerp_rate: 2.0,
            revert_epsilon: 1e-3,
            zoom_rate: 0.9,
            suppress_horizontal_while_zooming: true,
            max_frame_delta: 0.25,
        }
    }
}

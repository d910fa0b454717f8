use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera placement bounds and canonical positions.
///
/// Distances are in scene units (one unit = one body radius), angles in
/// radians. The polar angle is measured from the +Y pole, so the
/// allowed band `[min_polar, max_polar]` keeps the camera strictly off
/// both poles.
pub struct CameraOptions {
    /// Closest allowed distance from the body center.
    #[schemars(title = "Minimum Distance", range(min = 1.01, max = 10.0))]
    pub min_distance: f32,
    /// Farthest allowed distance from the body center.
    #[schemars(title = "Maximum Distance", range(min = 2.0, max = 200.0))]
    pub max_distance: f32,
    /// Lower polar bound (radians from the +Y pole).
    #[schemars(skip)]
    pub min_polar: f32,
    /// Upper polar bound (radians from the +Y pole).
    #[schemars(skip)]
    pub max_polar: f32,
    /// How far beyond the tracked object the follow camera sits, as a
    /// multiple of the object's distance from the body center.
    ///
    /// Inherited tuning value; exposed as configuration rather than
    /// derived from any principle.
    #[schemars(title = "Follow Distance", range(min = 1.05, max = 5.0), extend("step" = 0.05))]
    pub follow_distance_multiplier: f32,
    /// Distance of the canonical manual-mode position.
    #[schemars(title = "Default Distance", range(min = 1.1, max = 50.0), extend("step" = 0.1))]
    pub default_distance: f32,
    /// Polar angle of the canonical manual-mode position.
    #[schemars(skip)]
    pub default_polar: f32,
    /// Azimuth of the canonical manual-mode position.
    #[schemars(skip)]
    pub default_azimuth: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            min_distance: 1.2,
            max_distance: 40.0,
            min_polar: 0.05,
            max_polar: std::f32::consts::PI - 0.05,
            follow_distance_multiplier: 1.8,
            default_distance: 3.2,
            default_polar: std::f32::consts::FRAC_PI_3,
            default_azimuth: 0.0,
        }
    }
}

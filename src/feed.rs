//! Tracked-object position samples and the geodetic conversion seam.
//!
//! An external feed pushes [`TrackedSample`] values into the controller
//! at whatever cadence the data source provides. Geographic → Cartesian
//! conversion is owned by the host application; the controller only
//! requires something implementing [`GeodeticConverter`]. A simple
//! spherical-body converter is provided for tests and demos.

use glam::Vec3;

/// One position report for the tracked object, in geodetic coordinates.
///
/// Read-only to the navigation core; the feed collaborator produces
/// these and the controller consumes the most recent one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedSample {
    /// Geodetic latitude in degrees, range `[-90, 90]`.
    pub latitude_deg: f32,
    /// Geodetic longitude in degrees, range `[-180, 180]`.
    pub longitude_deg: f32,
    /// Altitude above the body surface in kilometers.
    pub altitude_km: f32,
    /// Feed timestamp in seconds (feed-defined epoch).
    pub timestamp: f64,
}

impl TrackedSample {
    /// Whether the sample carries usable values.
    ///
    /// A sample that fails this check is treated by the controller as
    /// absent: the camera holds its last position for the tick.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude_deg.is_finite()
            && self.longitude_deg.is_finite()
            && self.altitude_km.is_finite()
            && self.timestamp.is_finite()
            && (-90.0..=90.0).contains(&self.latitude_deg)
            && (-180.0..=180.0).contains(&self.longitude_deg)
            && self.altitude_km >= 0.0
    }
}

/// Conversion from geodetic samples to scene-space Cartesian positions.
///
/// Scene space is Y-up with the body center at the origin; one scene
/// unit is one body radius. The real converter lives in the host
/// application (it knows the body model the renderer uses); this trait
/// is the seam it plugs into.
pub trait GeodeticConverter {
    /// Convert a sample to a scene-space position, or `None` if the
    /// sample cannot be converted.
    fn to_cartesian(&self, sample: &TrackedSample) -> Option<Vec3>;
}

/// Reference converter assuming a perfectly spherical body.
///
/// Good enough for tests and for hosts that do not need an ellipsoid
/// model: latitude/longitude map onto a sphere of `radius_km`, altitude
/// extends the ray radially.
#[derive(Debug, Clone, Copy)]
pub struct SphericalBody {
    /// Body radius in kilometers (one scene unit).
    pub radius_km: f32,
}

impl SphericalBody {
    /// Earth with the mean volumetric radius.
    pub const EARTH: Self = Self { radius_km: 6371.0 };
}

impl Default for SphericalBody {
    fn default() -> Self {
        Self::EARTH
    }
}

impl GeodeticConverter for SphericalBody {
    fn to_cartesian(&self, sample: &TrackedSample) -> Option<Vec3> {
        if !sample.is_valid() || self.radius_km <= 0.0 {
            return None;
        }

        let lat = sample.latitude_deg.to_radians();
        let lon = sample.longitude_deg.to_radians();
        let r = (self.radius_km + sample.altitude_km) / self.radius_km;

        // Y-up: latitude lifts out of the equatorial XZ plane,
        // longitude rotates around Y with lon=0 on +Z.
        let y = r * lat.sin();
        let horizontal = r * lat.cos();
        let x = horizontal * lon.sin();
        let z = horizontal * lon.cos();

        Some(Vec3::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::{GeodeticConverter, SphericalBody, TrackedSample};

    fn sample(lat: f32, lon: f32, alt: f32) -> TrackedSample {
        TrackedSample {
            latitude_deg: lat,
            longitude_deg: lon,
            altitude_km: alt,
            timestamp: 0.0,
        }
    }

    #[test]
    fn surface_sample_lands_on_unit_sphere() {
        let body = SphericalBody::EARTH;
        let p = body.to_cartesian(&sample(12.0, -45.0, 0.0)).unwrap();
        assert!((p.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn altitude_extends_radially() {
        let body = SphericalBody::EARTH;
        let low = body.to_cartesian(&sample(30.0, 60.0, 0.0)).unwrap();
        let high = body.to_cartesian(&sample(30.0, 60.0, 400.0)).unwrap();
        // Same direction, larger magnitude.
        assert!(high.length() > low.length());
        assert!(low.normalize().dot(high.normalize()) > 0.999_99);
    }

    #[test]
    fn zero_zero_maps_to_plus_z() {
        let body = SphericalBody::EARTH;
        let p = body.to_cartesian(&sample(0.0, 0.0, 0.0)).unwrap();
        assert!((p.x).abs() < 1e-6);
        assert!((p.y).abs() < 1e-6);
        assert!((p.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn north_pole_maps_to_plus_y() {
        let body = SphericalBody::EARTH;
        let p = body.to_cartesian(&sample(90.0, 0.0, 0.0)).unwrap();
        assert!((p.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn invalid_samples_are_rejected() {
        let body = SphericalBody::EARTH;
        assert!(body.to_cartesian(&sample(f32::NAN, 0.0, 0.0)).is_none());
        assert!(body.to_cartesian(&sample(91.0, 0.0, 0.0)).is_none());
        assert!(body.to_cartesian(&sample(0.0, 200.0, 0.0)).is_none());
        assert!(body.to_cartesian(&sample(0.0, 0.0, -5.0)).is_none());
    }
}

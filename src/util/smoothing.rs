//! Framerate-independent smoothing factors.
//!
//! A naive `position.lerp(target, K)` per frame smooths harder at low
//! frame rates and softer at high ones. Deriving the per-frame factor
//! from an exponential decay makes the half-life of the approach
//! independent of how often the render loop ticks.

/// Per-frame lerp factor for an exponential approach.
///
/// `rate` is the decay rate in 1/seconds (higher = snappier), `dt` the
/// frame delta in seconds. Returns a factor in `[0, 1]` suitable for
/// `current.lerp(target, factor)`.
///
/// Negative inputs are treated as zero, which yields a factor of 0
/// (no movement) rather than an overshoot.
#[inline]
#[must_use]
pub fn damp_factor(rate: f32, dt: f32) -> f32 {
    let x = (rate * dt).max(0.0);
    1.0 - (-x).exp()
}

#[cfg(test)]
mod tests {
    use super::damp_factor;

    #[test]
    fn zero_dt_means_no_movement() {
        assert_eq!(damp_factor(5.0, 0.0), 0.0);
    }

    #[test]
    fn factor_stays_in_unit_interval() {
        for dt in [0.001, 0.016, 0.1, 1.0, 100.0] {
            let f = damp_factor(4.0, dt);
            assert!((0.0..=1.0).contains(&f), "factor {f} out of range");
        }
    }

    #[test]
    fn larger_dt_moves_further() {
        let slow = damp_factor(3.0, 0.016);
        let fast = damp_factor(3.0, 0.032);
        assert!(fast > slow);
    }

    #[test]
    fn two_small_steps_equal_one_big_step() {
        // The defining property: smoothing is independent of tick size.
        let start = 0.0_f32;
        let target = 1.0_f32;

        let one = start + (target - start) * damp_factor(2.0, 0.032);

        let f = damp_factor(2.0, 0.016);
        let mid = start + (target - start) * f;
        let two = mid + (target - mid) * f;

        assert!((one - two).abs() < 1e-6);
    }

    #[test]
    fn negative_inputs_clamp_to_no_movement() {
        assert_eq!(damp_factor(3.0, -0.5), 0.0);
        assert_eq!(damp_factor(-3.0, 0.5), 0.0);
    }
}

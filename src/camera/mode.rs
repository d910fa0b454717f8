//! Navigation modes and level-triggered arbitration.
//!
//! Exactly one mode is active per tick. Arbitration is deliberately
//! stateless: the mode is recomputed from the current flag values every
//! tick, never from transition edges, so it is trivially unit-testable
//! and cannot get stuck on a missed edge.

/// The camera navigation mode active for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// Chase the tracked object along its radial ray.
    Follow,
    /// Cruise a fixed-radius equatorial circle.
    AutoOrbit,
    /// Idle; an external free-look collaborator owns camera input.
    ManualFree,
    /// Driven by held directional/zoom input.
    Directional,
}

/// External application/UI flags read once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavSignals {
    /// Follow mode requested.
    pub follow_target: bool,
    /// Auto-orbit requested.
    pub auto_orbit: bool,
    /// Directional navigation profile enabled; while false, held
    /// gestures are force-cleared and directional input is inert.
    pub directional_profile: bool,
    /// An overlay menu is open; overlay UI always wins over camera
    /// motion.
    pub menu_visible: bool,
}

/// Resolved arbitration inputs for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavFlags {
    /// Follow mode requested.
    pub follow_target: bool,
    /// Auto-orbit requested.
    pub auto_orbit: bool,
    /// Any tracked direction or zoom session is currently active.
    pub directional_active: bool,
    /// An overlay menu is open.
    pub menu_visible: bool,
}

impl NavFlags {
    /// Pick the active mode. First matching rule wins:
    ///
    /// 1. menu visible → [`NavMode::ManualFree`] (overlay always wins)
    /// 2. directional input active → [`NavMode::Directional`]
    /// 3. auto-orbit → [`NavMode::AutoOrbit`]
    /// 4. follow → [`NavMode::Follow`]
    /// 5. otherwise → [`NavMode::ManualFree`]
    #[must_use]
    pub fn resolve(self) -> NavMode {
        if self.menu_visible {
            NavMode::ManualFree
        } else if self.directional_active {
            NavMode::Directional
        } else if self.auto_orbit {
            NavMode::AutoOrbit
        } else if self.follow_target {
            NavMode::Follow
        } else {
            NavMode::ManualFree
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NavFlags, NavMode};

    #[test]
    fn no_flags_means_manual_free() {
        assert_eq!(NavFlags::default().resolve(), NavMode::ManualFree);
    }

    #[test]
    fn menu_wins_over_everything() {
        let flags = NavFlags {
            follow_target: true,
            auto_orbit: true,
            directional_active: true,
            menu_visible: true,
        };
        assert_eq!(flags.resolve(), NavMode::ManualFree);
    }

    #[test]
    fn directional_beats_orbit_and_follow() {
        let flags = NavFlags {
            follow_target: true,
            auto_orbit: true,
            directional_active: true,
            menu_visible: false,
        };
        assert_eq!(flags.resolve(), NavMode::Directional);
    }

    #[test]
    fn orbit_beats_follow() {
        let flags = NavFlags {
            follow_target: true,
            auto_orbit: true,
            directional_active: false,
            menu_visible: false,
        };
        assert_eq!(flags.resolve(), NavMode::AutoOrbit);
    }

    #[test]
    fn follow_alone_resolves_to_follow() {
        let flags = NavFlags {
            follow_target: true,
            ..NavFlags::default()
        };
        assert_eq!(flags.resolve(), NavMode::Follow);
    }

    #[test]
    fn resolution_is_level_triggered() {
        // Same flags, same answer, no hidden state between calls.
        let flags = NavFlags {
            auto_orbit: true,
            ..NavFlags::default()
        };
        assert_eq!(flags.resolve(), flags.resolve());
    }
}

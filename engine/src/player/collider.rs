//! Collider Height Profile
//!
//! Crouching lowers the collider by changing only the vertical component of
//! the body's local scale. The horizontal components always come from the
//! scale captured when the controller was built, so repeated crouch/stand
//! cycles never compound.

use glam::Vec3;

use super::locomotion::LocomotionMode;
use crate::config::ControllerConfig;

/// Standing/crouching heights plus the body's original scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderProfile {
    /// Vertical scale while walking or sprinting
    standing_height: f32,
    /// Vertical scale while crouching
    crouching_height: f32,
    /// Local scale captured at construction
    original_scale: Vec3,
}

impl ColliderProfile {
    /// Create a profile; `original_scale` is fixed for the profile's lifetime.
    pub fn new(standing_height: f32, crouching_height: f32, original_scale: Vec3) -> Self {
        Self {
            standing_height,
            crouching_height,
            original_scale,
        }
    }

    /// Build from configuration and the body's current local scale.
    pub fn from_config(config: &ControllerConfig, original_scale: Vec3) -> Self {
        Self::new(config.standing_height, config.crouching_height, original_scale)
    }

    /// Vertical scale for the given mode.
    pub fn height(&self, mode: LocomotionMode) -> f32 {
        if mode.is_crouched() {
            self.crouching_height
        } else {
            self.standing_height
        }
    }

    /// Full local scale for the given mode.
    pub fn scale_for(&self, mode: LocomotionMode) -> Vec3 {
        Vec3::new(self.original_scale.x, self.height(mode), self.original_scale.z)
    }

    /// The scale captured at construction.
    pub fn original_scale(&self) -> Vec3 {
        self.original_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crouch_scales_only_y() {
        let profile = ColliderProfile::new(1.0, 0.5, Vec3::new(2.0, 1.0, 3.0));
        let scale = profile.scale_for(LocomotionMode::Crouching);
        assert_eq!(scale, Vec3::new(2.0, 0.5, 3.0));
    }

    #[test]
    fn test_sprint_uses_standing_height() {
        let profile = ColliderProfile::new(1.0, 0.5, Vec3::ONE);
        assert_eq!(profile.height(LocomotionMode::Sprinting), 1.0);
        assert_eq!(profile.height(LocomotionMode::Walking), 1.0);
    }

    #[test]
    fn test_repeated_crouch_not_cumulative() {
        let profile = ColliderProfile::new(1.0, 0.5, Vec3::new(1.5, 1.0, 1.5));
        for _ in 0..10 {
            assert_eq!(
                profile.scale_for(LocomotionMode::Crouching),
                Vec3::new(1.5, 0.5, 1.5)
            );
            assert_eq!(
                profile.scale_for(LocomotionMode::Walking),
                Vec3::new(1.5, 1.0, 1.5)
            );
        }
        assert_eq!(profile.original_scale(), Vec3::new(1.5, 1.0, 1.5));
    }
}

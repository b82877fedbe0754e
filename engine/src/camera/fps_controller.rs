//! First-Person Look Controller
//!
//! Accumulates yaw and pitch from mouse deltas and produces two orientations:
//! the camera (yaw then pitch, no roll) and the body (yaw only). The body
//! orientation also defines the forward/right basis that movement input is
//! projected onto, so walking follows where the player faces regardless of
//! camera pitch.
//!
//! Key features:
//! - Angles kept in degrees; pitch clamped to ±90, yaw unbounded
//! - Rotation per update = delta × sensitivity × fixed step duration
//! - NO smoothing - instant response
//!
//! # Coordinate System
//! - +X = right, +Y = up, -Z = forward at yaw 0
//! - Positive yaw turns right, positive pitch looks up

use glam::{Quat, Vec3};

/// Pitch limit in degrees (both directions)
pub const PITCH_LIMIT_DEGREES: f32 = 90.0;

/// Mouse-look state for a first-person character.
///
/// ## Usage
/// ```rust,ignore
/// let mut look = LookController::with_sensitivity(100.0);
///
/// // Once per frame with the accumulated mouse delta
/// look.apply_mouse_delta(dx, dy, fixed_dt);
///
/// rig.set_camera_rotation(look.camera_rotation());
/// rig.set_body_rotation(look.body_rotation());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LookController {
    /// Horizontal angle (degrees) - unbounded
    pub yaw: f32,
    /// Vertical angle (degrees) - clamped to ±90
    pub pitch: f32,
    /// Degrees per unit of mouse delta per second of fixed step
    pub sensitivity: f32,
}

impl Default for LookController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 100.0,
        }
    }
}

impl LookController {
    /// Create a look controller facing -Z with default sensitivity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a look controller with a custom sensitivity.
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            ..Default::default()
        }
    }

    /// Apply one frame of mouse motion.
    ///
    /// # Arguments
    /// * `dx` - Horizontal delta. Positive = mouse right = turn right
    /// * `dy` - Vertical delta. Positive = mouse down = look down
    /// * `fixed_dt` - Fixed simulation step duration in seconds
    ///
    /// Non-finite input leaves the orientation unchanged.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32, fixed_dt: f32) {
        let scale = self.sensitivity * fixed_dt;
        if !(dx.is_finite() && dy.is_finite() && scale.is_finite()) {
            log::warn!("ignoring non-finite mouse delta ({dx}, {dy}) at scale {scale}");
            return;
        }

        self.yaw += dx * scale;
        self.pitch = (self.pitch - dy * scale).clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
    }

    /// Camera orientation: yaw then pitch, zero roll.
    pub fn camera_rotation(&self) -> Quat {
        self.body_rotation() * Quat::from_rotation_x(self.pitch.to_radians())
    }

    /// Body orientation: yaw only.
    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.yaw.to_radians())
    }

    /// Horizontal forward direction of the body (unit length).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.sin(), 0.0, -yaw.cos())
    }

    /// Horizontal right direction of the body (unit length).
    #[inline]
    pub fn right(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    /// Direction the camera looks, including pitch.
    pub fn look_direction(&self) -> Vec3 {
        self.camera_rotation() * Vec3::NEG_Z
    }

    /// Reset orientation to face -Z.
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.02;

    fn assert_vec_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_default_values() {
        let look = LookController::new();
        assert_eq!(look.yaw, 0.0);
        assert_eq!(look.pitch, 0.0);
        assert_eq!(look.sensitivity, 100.0);
    }

    #[test]
    fn test_yaw_scales_with_sensitivity_and_step() {
        let mut look = LookController::new();
        look.apply_mouse_delta(3.0, 0.0, DT);
        // 3 * 100 * 0.02 = 6 degrees
        assert!((look.yaw - 6.0).abs() < 1e-4);
        assert_eq!(look.pitch, 0.0);
    }

    #[test]
    fn test_mouse_down_looks_down() {
        let mut look = LookController::new();
        look.apply_mouse_delta(0.0, 2.0, DT);
        assert!((look.pitch + 4.0).abs() < 1e-4);
        assert!(look.look_direction().y < 0.0);
    }

    #[test]
    fn test_pitch_clamped_both_ways() {
        let mut look = LookController::new();
        look.apply_mouse_delta(0.0, -100_000.0, DT);
        assert_eq!(look.pitch, PITCH_LIMIT_DEGREES);
        look.apply_mouse_delta(0.0, 100_000.0, DT);
        assert_eq!(look.pitch, -PITCH_LIMIT_DEGREES);
    }

    #[test]
    fn test_yaw_unbounded() {
        let mut look = LookController::new();
        for _ in 0..10 {
            look.apply_mouse_delta(90.0, 0.0, DT);
        }
        assert!((look.yaw - 1800.0).abs() < 1e-2);
    }

    #[test]
    fn test_basis_at_zero_yaw() {
        let look = LookController::new();
        assert_vec_close(look.forward(), Vec3::NEG_Z);
        assert_vec_close(look.right(), Vec3::X);
    }

    #[test]
    fn test_basis_after_right_turn() {
        let look = LookController {
            yaw: 90.0,
            ..Default::default()
        };
        assert_vec_close(look.forward(), Vec3::X);
        assert_vec_close(look.right(), Vec3::Z);
    }

    #[test]
    fn test_body_rotation_matches_basis() {
        let look = LookController {
            yaw: 37.0,
            pitch: 20.0,
            ..Default::default()
        };
        assert_vec_close(look.body_rotation() * Vec3::NEG_Z, look.forward());
        assert_vec_close(look.body_rotation() * Vec3::X, look.right());
    }

    #[test]
    fn test_camera_rotation_has_no_roll() {
        let look = LookController {
            yaw: 120.0,
            pitch: -35.0,
            ..Default::default()
        };
        let camera_right = look.camera_rotation() * Vec3::X;
        assert!(camera_right.y.abs() < 1e-5);
        assert_vec_close(camera_right, look.right());
    }

    #[test]
    fn test_non_finite_delta_ignored() {
        let mut look = LookController::new();
        look.apply_mouse_delta(f32::NAN, 1.0, DT);
        assert_eq!(look, LookController::new());
    }
}

//! Ground Contact Tracking
//!
//! Interprets the physics engine's contact callbacks and keeps the grounded
//! flag plus the most recent walkable surface normal.
//!
//! # Classification
//!
//! A contact normal is walkable when its angle from world up is at most the
//! configured slope angle (inclusive). Only contacts on layers selected by
//! the ground mask are considered at all.
//!
//! # Contact-ended quirk
//!
//! Losing contact with an in-mask layer clears the grounded flag. Losing
//! contact with *any* layer resets the surface normal to world up, so leaving
//! a wall while standing on a slope temporarily reports a flat normal until
//! the next contact-stay event for the slope arrives.

use glam::Vec3;

use crate::config::ControllerConfig;
use crate::physics::{ContactEvent, LayerMask};

/// Slack (degrees) added to the slope limit before comparing.
pub const SLOPE_TOLERANCE_DEGREES: f32 = 1e-4;

/// Grounded flag and surface normal derived from contact callbacks.
#[derive(Debug, Clone)]
pub struct GroundContactTracker {
    /// Whether a walkable contact is currently tracked
    is_grounded: bool,
    /// Last walkable normal (world up when not grounded)
    surface_normal: Vec3,
    /// Steepest walkable slope in degrees
    max_slope_angle: f32,
    /// Layers that count as ground
    ground_mask: LayerMask,
}

impl Default for GroundContactTracker {
    fn default() -> Self {
        Self::new(ControllerConfig::default().max_slope_angle, LayerMask::DEFAULT)
    }
}

impl GroundContactTracker {
    /// Create an ungrounded tracker.
    pub fn new(max_slope_angle: f32, ground_mask: LayerMask) -> Self {
        Self {
            is_grounded: false,
            surface_normal: Vec3::Y,
            max_slope_angle,
            ground_mask,
        }
    }

    /// Build from controller configuration.
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(config.max_slope_angle, config.ground_layer_mask)
    }

    /// Check if the character is standing on walkable ground.
    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    /// The last walkable normal, or world up after contact was lost.
    pub fn surface_normal(&self) -> Vec3 {
        self.surface_normal
    }

    /// Normal to push off from when jumping.
    ///
    /// World up unless grounded; the stored normal is only meaningful while
    /// grounded.
    pub fn jump_normal(&self) -> Vec3 {
        if self.is_grounded {
            self.surface_normal
        } else {
            Vec3::Y
        }
    }

    /// Steepest walkable slope in degrees.
    pub fn max_slope_angle(&self) -> f32 {
        self.max_slope_angle
    }

    /// Layers that count as ground.
    pub fn ground_mask(&self) -> LayerMask {
        self.ground_mask
    }

    /// Check if a contact normal counts as walkable ground.
    pub fn is_walkable(&self, normal: Vec3) -> bool {
        slope_angle_degrees(normal) <= self.max_slope_angle + SLOPE_TOLERANCE_DEGREES
    }

    /// Handle a contact-persist event.
    ///
    /// Returns `true` if the event grounded the character. Events on layers
    /// outside the ground mask and events carrying malformed normals leave the
    /// state untouched.
    pub fn on_contact_stay(&mut self, event: &ContactEvent) -> bool {
        if !self.ground_mask.contains(event.layer) {
            return false;
        }

        if let Some(bad) = event.normals.iter().find(|n| !is_usable_normal(**n)) {
            log::warn!(
                "ignoring contact event on layer {} with malformed normal {:?}",
                event.layer,
                bad
            );
            return false;
        }

        let mut found_walkable = false;
        for &normal in &event.normals {
            if self.is_walkable(normal) {
                // Last walkable normal in the event wins
                self.surface_normal = normal.normalize();
                found_walkable = true;
            }
        }

        if found_walkable && !self.is_grounded {
            log::debug!("grounded on layer {} (normal {:?})", event.layer, self.surface_normal);
        }
        if found_walkable {
            self.is_grounded = true;
        }
        found_walkable
    }

    /// Handle a contact-ended event for a collider on `layer`.
    pub fn on_contact_exit(&mut self, layer: u32) {
        if self.ground_mask.contains(layer) && self.is_grounded {
            log::debug!("lost ground contact on layer {layer}");
        }
        if self.ground_mask.contains(layer) {
            self.is_grounded = false;
        }
        self.surface_normal = Vec3::Y;
    }

    /// Mark the character airborne without touching the stored normal.
    ///
    /// Used at jump execution; the next contact-stay event (if the body is
    /// still touching ground) grounds it again.
    pub fn mark_airborne(&mut self) {
        self.is_grounded = false;
    }
}

/// Angle between world up and `normal`, in degrees within [0, 180].
pub fn slope_angle_degrees(normal: Vec3) -> f32 {
    let cos = normal.normalize_or_zero().dot(Vec3::Y).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

fn is_usable_normal(normal: Vec3) -> bool {
    normal.is_finite() && normal.length_squared() > 1e-12
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal_at_degrees(degrees: f32) -> Vec3 {
        let radians = degrees.to_radians();
        Vec3::new(radians.sin(), radians.cos(), 0.0)
    }

    #[test]
    fn test_starts_ungrounded_with_up_normal() {
        let tracker = GroundContactTracker::default();
        assert!(!tracker.is_grounded());
        assert_eq!(tracker.surface_normal(), Vec3::Y);
    }

    #[test]
    fn test_flat_contact_grounds() {
        let mut tracker = GroundContactTracker::default();
        assert!(tracker.on_contact_stay(&ContactEvent::single(0, Vec3::Y)));
        assert!(tracker.is_grounded());
        assert_eq!(tracker.surface_normal(), Vec3::Y);
    }

    #[test]
    fn test_slope_boundary_is_inclusive() {
        let mut tracker = GroundContactTracker::default();
        tracker.on_contact_stay(&ContactEvent::single(0, normal_at_degrees(45.0)));
        assert!(tracker.is_grounded());
    }

    #[test]
    fn test_just_past_slope_limit_not_walkable() {
        let mut tracker = GroundContactTracker::default();
        tracker.on_contact_stay(&ContactEvent::single(0, normal_at_degrees(45.001)));
        assert!(!tracker.is_grounded());
        assert_eq!(tracker.surface_normal(), Vec3::Y);
    }

    #[test]
    fn test_steep_contact_keeps_previous_normal() {
        let mut tracker = GroundContactTracker::default();
        let slope = normal_at_degrees(20.0);
        tracker.on_contact_stay(&ContactEvent::single(0, slope));
        tracker.on_contact_stay(&ContactEvent::single(0, normal_at_degrees(80.0)));
        assert!(tracker.is_grounded());
        assert!((tracker.surface_normal() - slope).length() < 1e-6);
    }

    #[test]
    fn test_last_walkable_normal_wins() {
        let mut tracker = GroundContactTracker::default();
        let first = normal_at_degrees(10.0);
        let last = normal_at_degrees(-30.0);
        let event = ContactEvent::new(0, vec![first, normal_at_degrees(70.0), last, normal_at_degrees(90.0)]);
        tracker.on_contact_stay(&event);
        assert!((tracker.surface_normal() - last).length() < 1e-6);
    }

    #[test]
    fn test_out_of_mask_layer_ignored() {
        let mut tracker = GroundContactTracker::default();
        assert!(!tracker.on_contact_stay(&ContactEvent::single(4, Vec3::Y)));
        assert!(!tracker.is_grounded());
    }

    #[test]
    fn test_exit_in_mask_clears_grounded_and_normal() {
        let mut tracker = GroundContactTracker::default();
        tracker.on_contact_stay(&ContactEvent::single(0, normal_at_degrees(30.0)));
        tracker.on_contact_exit(0);
        assert!(!tracker.is_grounded());
        assert_eq!(tracker.surface_normal(), Vec3::Y);
    }

    #[test]
    fn test_exit_out_of_mask_resets_normal_only() {
        let mut tracker = GroundContactTracker::default();
        tracker.on_contact_stay(&ContactEvent::single(0, normal_at_degrees(30.0)));
        tracker.on_contact_exit(7);
        assert!(tracker.is_grounded());
        assert_eq!(tracker.surface_normal(), Vec3::Y);
    }

    #[test]
    fn test_malformed_event_ignored_whole() {
        let mut tracker = GroundContactTracker::default();
        let event = ContactEvent::new(0, vec![Vec3::Y, Vec3::new(f32::NAN, 1.0, 0.0)]);
        assert!(!tracker.on_contact_stay(&event));
        assert!(!tracker.is_grounded());

        let zero = ContactEvent::single(0, Vec3::ZERO);
        assert!(!tracker.on_contact_stay(&zero));
        assert!(!tracker.is_grounded());
    }

    #[test]
    fn test_unnormalized_normal_is_stored_normalized() {
        let mut tracker = GroundContactTracker::default();
        tracker.on_contact_stay(&ContactEvent::single(0, Vec3::new(0.0, 4.0, 0.0)));
        assert_eq!(tracker.surface_normal(), Vec3::Y);
    }

    #[test]
    fn test_jump_normal_falls_back_to_up() {
        let mut tracker = GroundContactTracker::default();
        let slope = normal_at_degrees(30.0);
        tracker.on_contact_stay(&ContactEvent::single(0, slope));
        assert!((tracker.jump_normal() - slope).length() < 1e-6);

        tracker.mark_airborne();
        assert_eq!(tracker.jump_normal(), Vec3::Y);
        // The stored normal survives until contact actually ends
        assert!((tracker.surface_normal() - slope).length() < 1e-6);
    }
}

//! Camera Module
//!
//! Mouse look and the hand-off of the resulting orientations to the host's
//! scene. This module is window-system agnostic - it only deals with angles,
//! quaternions and the [`ViewRig`] seam.

pub mod fps_controller;

pub use fps_controller::{LookController, PITCH_LIMIT_DEGREES};

use glam::Quat;

/// Scene objects that receive the character's orientation every frame.
///
/// Typically the camera transform and a yaw-only "orientation" transform on
/// the character body.
pub trait ViewRig {
    /// Set the camera rotation (yaw and pitch, zero roll).
    fn set_camera_rotation(&mut self, rotation: Quat);

    /// Set the body/orientation rotation (yaw only).
    fn set_body_rotation(&mut self, rotation: Quat);
}

/// A [`ViewRig`] that simply stores the last orientations it received.
///
/// Handy for headless hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedView {
    pub camera: Quat,
    pub body: Quat,
}

impl Default for RecordedView {
    fn default() -> Self {
        Self {
            camera: Quat::IDENTITY,
            body: Quat::IDENTITY,
        }
    }
}

impl ViewRig for RecordedView {
    fn set_camera_rotation(&mut self, rotation: Quat) {
        self.camera = rotation;
    }

    fn set_body_rotation(&mut self, rotation: Quat) {
        self.body = rotation;
    }
}

//! Physics seam for the character controller
//!
//! The controller never simulates rigid bodies itself. It reads velocity and
//! requests forces, impulses and the occasional velocity write through the
//! [`RigidBody`] trait, and it learns about ground through contact events that
//! the host physics engine delivers.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Velocities in m/s
//! - Forces in N, impulses in N·s
//! - Mass in kg
//!
//! # Submodules
//!
//! - [`layers`] - Collision layer bitmasks used to filter ground contacts
//! - [`body`] - The [`RigidBody`] trait and [`SimpleBody`], a minimal integrator
//! - [`world`] - [`PlaneWorld`], static planes that emit contact events
//!
//! `SimpleBody` and `PlaneWorld` are stand-ins for a real engine. They exist so
//! the demo binary and the tests can drive the controller end to end.

pub mod body;
pub mod layers;
pub mod world;

pub use body::{ForceMode, RigidBody, SimpleBody};
pub use layers::LayerMask;
pub use world::{ContactReport, PlaneWorld, StaticPlane};

use glam::Vec3;

/// A contact-persist event for one collider the body is touching.
///
/// Delivered once per simulation step for every collider still in contact.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEvent {
    /// Collision layer of the other collider (0..32)
    pub layer: u32,
    /// Surface normals of every contact point, pointing toward the body
    pub normals: Vec<Vec3>,
}

impl ContactEvent {
    /// Create a contact event for `layer` with the given contact normals.
    pub fn new(layer: u32, normals: Vec<Vec3>) -> Self {
        Self { layer, normals }
    }

    /// Shorthand for an event with a single contact normal.
    pub fn single(layer: u32, normal: Vec3) -> Self {
        Self::new(layer, vec![normal])
    }
}

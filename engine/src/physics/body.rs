//! Rigid-body access for the controller
//!
//! [`RigidBody`] is the narrow surface the controller needs from a physics
//! engine body. [`SimpleBody`] implements it with semi-implicit Euler
//! integration so the controller can be exercised without an engine.
//!
//! # Example
//!
//! ```ignore
//! use rigid_stride_engine::physics::{ForceMode, RigidBody, SimpleBody};
//! use glam::Vec3;
//!
//! let mut body = SimpleBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
//! body.add_force(Vec3::X * 10.0, ForceMode::Force);
//! body.integrate(0.02);
//! ```

use glam::Vec3;

/// How a requested force is applied to a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    /// Continuous force, integrated over the next simulation step (`dv = F / m * dt`)
    Force,
    /// Instantaneous impulse, applied immediately (`dv = J / m`)
    Impulse,
}

/// The rigid body a character controller drives.
///
/// Implementations wrap whatever body type the host physics engine exposes.
/// The controller only reads and writes velocity, requests forces, and sets
/// the collider's local scale for crouching. It never writes position.
pub trait RigidBody {
    /// Current linear velocity in world space (m/s).
    fn velocity(&self) -> Vec3;

    /// Overwrite the linear velocity.
    fn set_velocity(&mut self, velocity: Vec3);

    /// Body mass in kilograms.
    fn mass(&self) -> f32;

    /// Apply a force or an impulse.
    fn add_force(&mut self, force: Vec3, mode: ForceMode);

    /// Local scale of the body's transform (collider scale).
    fn local_scale(&self) -> Vec3;

    /// Set the local scale of the body's transform.
    fn set_local_scale(&mut self, scale: Vec3);
}

/// Default gravity (m/s²), matching common engine defaults.
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// A minimal dynamic body: point mass with an upright extent.
///
/// The extent (`half_height * local_scale.y`) is what [`super::PlaneWorld`]
/// uses to keep the body above static planes, so crouching visibly lowers it.
#[derive(Debug, Clone)]
pub struct SimpleBody {
    /// World-space position of the body's center (meters)
    pub position: Vec3,
    /// Linear velocity (m/s)
    pub velocity: Vec3,
    /// Mass (kg)
    pub mass: f32,
    /// Gravity acceleration applied every step (m/s²)
    pub gravity: Vec3,
    /// Half of the collider height at unit scale (meters)
    pub half_height: f32,
    /// Transform local scale
    pub local_scale: Vec3,
    /// Forces accumulated since the last integration
    accumulated_force: Vec3,
}

impl Default for SimpleBody {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            mass: 1.0,
            gravity: DEFAULT_GRAVITY,
            half_height: 1.0,
            local_scale: Vec3::ONE,
            accumulated_force: Vec3::ZERO,
        }
    }
}

impl SimpleBody {
    /// Create a body at `position` with the given mass.
    ///
    /// The mass is stored as given. A non-positive or non-finite mass is
    /// rejected by the controller builder and skipped by the step.
    pub fn new(position: Vec3, mass: f32) -> Self {
        Self {
            position,
            mass,
            ..Default::default()
        }
    }

    /// Create a body that ignores gravity (useful for isolating controller forces).
    pub fn weightless(position: Vec3, mass: f32) -> Self {
        Self {
            gravity: Vec3::ZERO,
            ..Self::new(position, mass)
        }
    }

    /// Current extent below the center, taking crouch scale into account.
    #[inline]
    pub fn extent(&self) -> f32 {
        self.half_height * self.local_scale.y
    }

    /// Force accumulated since the last [`SimpleBody::integrate`] call.
    pub fn pending_force(&self) -> Vec3 {
        self.accumulated_force
    }

    /// Advance the body by `dt` seconds.
    ///
    /// Semi-implicit Euler: velocity first (gravity plus accumulated forces),
    /// then position with the new velocity. Accumulated forces are cleared.
    pub fn integrate(&mut self, dt: f32) {
        let acceleration = self.gravity + self.accumulated_force / self.mass;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.accumulated_force = Vec3::ZERO;
    }

    /// Horizontal speed (XZ plane only).
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }
}

impl RigidBody for SimpleBody {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn add_force(&mut self, force: Vec3, mode: ForceMode) {
        match mode {
            ForceMode::Force => self.accumulated_force += force,
            ForceMode::Impulse => self.velocity += force / self.mass,
        }
    }

    fn local_scale(&self) -> Vec3 {
        self.local_scale
    }

    fn set_local_scale(&mut self, scale: Vec3) {
        self.local_scale = scale;
    }
}

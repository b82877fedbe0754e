//! Player Module
//!
//! Locomotion and ground logic of the first-person character.
//!
//! # Components
//!
//! - [`CharacterController`] - Owns everything below and routes frame ticks,
//!   fixed ticks and contact callbacks
//! - [`locomotion`] - Walking / sprinting / crouching resolution and max speeds
//! - [`GroundContactTracker`] - Grounded flag and surface normal from contacts
//! - [`PlayerMovementController`] - Forces, speed cap, air control and jumps
//! - [`JumpState`] - Jump budget, request latch and cooldown deadline
//! - [`ColliderProfile`] - Collider height per locomotion mode

pub mod collider;
pub mod controller;
pub mod ground;
pub mod jump;
pub mod locomotion;
pub mod movement_controller;

pub use collider::ColliderProfile;
pub use controller::{CharacterController, CharacterControllerBuilder, DEFAULT_FIXED_TIMESTEP};
pub use ground::{slope_angle_degrees, GroundContactTracker, SLOPE_TOLERANCE_DEGREES};
pub use jump::{JumpState, COOLDOWN_EPSILON_SECONDS};
pub use locomotion::{LocomotionMode, LocomotionState, SpeedProfile};
pub use movement_controller::{
    MoveBasis, MovementIntent, PlayerMovementController, StepBranch, StepReport,
    DRIVE_FORCE_SCALE, JUMP_NORMAL_SCALE, JUMP_UP_SCALE,
};

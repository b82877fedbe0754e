//! Rigid Stride Engine Library
//!
//! A physics-driven first-person character controller. Raw directional input
//! and mouse motion become rigid-body forces, impulses and a camera
//! orientation; contact callbacks from the host physics engine decide whether
//! the character stands on walkable ground and whether a jump is legal.
//!
//! # Modules
//!
//! - [`player`] - Locomotion modes, ground contact, force integration, jump budget
//! - [`camera`] - Mouse look and the [`camera::ViewRig`] seam
//! - [`input`] - Key bindings, held keys, jump edges and mouse accumulation
//! - [`physics`] - The [`physics::RigidBody`] seam, contact events, layer masks
//!   and a small reference body/world for demos and tests
//! - [`config`] - [`config::ControllerConfig`] with JSON loading and validation
//! - [`error`] - [`error::ControllerError`]
//!
//! # Example
//!
//! ```ignore
//! use rigid_stride_engine::camera::RecordedView;
//! use rigid_stride_engine::config::ControllerConfig;
//! use rigid_stride_engine::input::{InputState, KeyCode};
//! use rigid_stride_engine::physics::{PlaneWorld, SimpleBody, StaticPlane};
//! use rigid_stride_engine::player::CharacterControllerBuilder;
//!
//! let mut controller = CharacterControllerBuilder::new(ControllerConfig::default())
//!     .body(SimpleBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0))
//!     .view(RecordedView::default())
//!     .build()?;
//!
//! let mut world = PlaneWorld::new();
//! world.add_plane(StaticPlane::floor(0.0, 0));
//!
//! let mut input = InputState::new();
//! input.handle_key(KeyCode::W, true);
//!
//! // Host loop
//! controller.frame_update(&input.sample());
//! controller.fixed_update();
//! let dt = controller.fixed_timestep();
//! controller.body_mut().integrate(dt);
//! let report = world.resolve(controller.body_mut());
//! for event in &report.stays {
//!     controller.on_contact_stay(event);
//! }
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod physics;
pub mod player;

// Host-side demo course (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use config::ControllerConfig;
pub use error::{ControllerError, Result};
pub use input::{FrameInput, InputState, KeyCode};
pub use player::{CharacterController, CharacterControllerBuilder, LocomotionMode};

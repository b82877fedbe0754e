//! Character Controller
//!
//! Single owner of all controller state. Binds one rigid body and one view
//! rig and routes the host's two clocks to the components:
//!
//! - [`CharacterController::frame_update`] (variable rate): jump edges,
//!   locomotion mode, collider scale, mouse look
//! - [`CharacterController::on_contact_stay`] / [`CharacterController::on_contact_exit`]:
//!   ground contact, delivered before the fixed step they belong to
//! - [`CharacterController::fixed_update`] (fixed rate): forces and jumps
//!
//! # Example
//!
//! ```rust,ignore
//! use rigid_stride_engine::camera::RecordedView;
//! use rigid_stride_engine::config::ControllerConfig;
//! use rigid_stride_engine::physics::SimpleBody;
//! use rigid_stride_engine::player::CharacterControllerBuilder;
//!
//! let mut controller = CharacterControllerBuilder::new(ControllerConfig::default())
//!     .body(SimpleBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0))
//!     .view(RecordedView::default())
//!     .fixed_timestep(0.02)
//!     .build()?;
//!
//! controller.frame_update(&input.sample());
//! for event in &report.stays {
//!     controller.on_contact_stay(event);
//! }
//! controller.fixed_update();
//! ```

use glam::Vec3;
use static_assertions::assert_impl_all;

use super::collider::ColliderProfile;
use super::ground::GroundContactTracker;
use super::jump::JumpState;
use super::locomotion::{self, LocomotionMode, LocomotionState};
use super::movement_controller::{MoveBasis, MovementIntent, PlayerMovementController, StepReport};
use crate::camera::{LookController, RecordedView, ViewRig};
use crate::config::ControllerConfig;
use crate::error::{ControllerError, Result};
use crate::input::FrameInput;
use crate::physics::{ContactEvent, RigidBody, SimpleBody};

/// Fixed simulation step used when the builder is not given one (50 Hz).
pub const DEFAULT_FIXED_TIMESTEP: f32 = 0.02;

assert_impl_all!(ControllerConfig: Send, Sync, Clone);
assert_impl_all!(CharacterController<SimpleBody, RecordedView>: Send, Sync);

/// Collects the collaborators of a [`CharacterController`].
///
/// Both the rigid body and the view rig are required; [`build`](Self::build)
/// fails fast when either is missing.
#[derive(Debug)]
pub struct CharacterControllerBuilder<B, V> {
    config: ControllerConfig,
    body: Option<B>,
    view: Option<V>,
    fixed_timestep: f32,
}

impl<B: RigidBody, V: ViewRig> CharacterControllerBuilder<B, V> {
    /// Start a builder with the given tuning.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            body: None,
            view: None,
            fixed_timestep: DEFAULT_FIXED_TIMESTEP,
        }
    }

    /// Bind the rigid body the controller drives.
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    /// Bind the camera/body orientation targets.
    pub fn view(mut self, view: V) -> Self {
        self.view = Some(view);
        self
    }

    /// Set the fixed step duration (seconds).
    pub fn fixed_timestep(mut self, dt: f32) -> Self {
        self.fixed_timestep = dt;
        self
    }

    /// Validate the configuration and assemble the controller.
    ///
    /// The body's current local scale is captured as the collider's original
    /// scale.
    pub fn build(self) -> Result<CharacterController<B, V>> {
        self.config.validate()?;

        let body = self.body.ok_or(ControllerError::MissingDependency("rigid body"))?;
        let view = self.view.ok_or(ControllerError::MissingDependency("view rig"))?;

        if !(self.fixed_timestep.is_finite() && self.fixed_timestep > 0.0) {
            return Err(ControllerError::invalid(
                "fixed_timestep",
                format!("must be a positive finite number of seconds, got {}", self.fixed_timestep),
            ));
        }

        let mass = body.mass();
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ControllerError::invalid(
                "mass",
                format!("body mass must be a positive finite number, got {mass}"),
            ));
        }

        let original_scale = body.local_scale();
        if !original_scale.is_finite() {
            return Err(ControllerError::invalid(
                "local_scale",
                format!("body scale must be finite, got {original_scale:?}"),
            ));
        }

        let config = self.config;
        log::info!(
            "character controller ready: walk {} / sprint {} / crouch {} m/s, {} jump(s), step {}s",
            config.walk_speed,
            config.sprint_speed,
            config.crouch_speed,
            config.max_jumps,
            self.fixed_timestep
        );

        Ok(CharacterController {
            look: LookController::with_sensitivity(config.mouse_sensitivity),
            ground: GroundContactTracker::from_config(&config),
            integrator: PlayerMovementController::from_config(&config),
            collider: ColliderProfile::from_config(&config, original_scale),
            locomotion: LocomotionState::default(),
            axes: (0.0, 0.0),
            fixed_timestep: self.fixed_timestep,
            body,
            view,
            config,
        })
    }
}

/// First-person character controller over a rigid body `B` and a view rig `V`.
#[derive(Debug)]
pub struct CharacterController<B, V> {
    config: ControllerConfig,
    body: B,
    view: V,
    look: LookController,
    ground: GroundContactTracker,
    integrator: PlayerMovementController,
    collider: ColliderProfile,
    /// Mode and movement intent resolved by the last frame update
    locomotion: LocomotionState,
    /// (horizontal, vertical) axes from the last frame update
    axes: (f32, f32),
    fixed_timestep: f32,
}

impl<B: RigidBody, V: ViewRig> CharacterController<B, V> {
    /// Per-frame update.
    ///
    /// Latches jump edges (press first, then release), resolves the
    /// locomotion mode, rescales the collider and applies mouse look.
    pub fn frame_update(&mut self, input: &FrameInput) {
        let input = input.sanitized();

        if input.jump_pressed {
            self.integrator.press_jump();
        }
        if input.jump_released {
            self.integrator.release_jump();
        }

        let state = locomotion::resolve(
            input.horizontal,
            input.vertical,
            input.sprint_held,
            input.crouch_held,
        );
        if state.mode != self.locomotion.mode {
            log::debug!("locomotion {:?} -> {:?}", self.locomotion.mode, state.mode);
        }
        self.locomotion = state;
        self.axes = (input.horizontal, input.vertical);
        self.body.set_local_scale(self.collider.scale_for(state.mode));

        self.look
            .apply_mouse_delta(input.mouse_delta.x, input.mouse_delta.y, self.fixed_timestep);
        self.view.set_camera_rotation(self.look.camera_rotation());
        self.view.set_body_rotation(self.look.body_rotation());
    }

    /// Contact-persist callback from the physics engine.
    ///
    /// Returns `true` if the event grounded the character.
    pub fn on_contact_stay(&mut self, event: &ContactEvent) -> bool {
        self.ground.on_contact_stay(event)
    }

    /// Contact-ended callback from the physics engine.
    pub fn on_contact_exit(&mut self, layer: u32) {
        self.ground.on_contact_exit(layer);
    }

    /// Fixed-step update: movement forces, jump budget and jump execution.
    ///
    /// Returns `None` if the step was skipped because the body reported
    /// unusable velocity or mass.
    pub fn fixed_update(&mut self) -> Option<StepReport> {
        let (horizontal, vertical) = self.axes;
        let intent = MovementIntent {
            horizontal,
            vertical,
            is_moving: self.locomotion.is_moving,
            max_speed: self.current_max_speed(),
        };
        let basis = MoveBasis::from_look(&self.look);

        self.integrator.step(
            &mut self.body,
            &mut self.ground,
            &intent,
            &basis,
            self.fixed_timestep,
        )
    }

    /// Max speed of the current locomotion mode.
    pub fn current_max_speed(&self) -> f32 {
        self.integrator.speeds().max_speed(self.locomotion.mode)
    }

    /// Collider height of the current locomotion mode.
    pub fn current_height(&self) -> f32 {
        self.collider.height(self.locomotion.mode)
    }

    pub fn mode(&self) -> LocomotionMode {
        self.locomotion.mode
    }

    pub fn is_moving(&self) -> bool {
        self.locomotion.is_moving
    }

    pub fn is_grounded(&self) -> bool {
        self.ground.is_grounded()
    }

    pub fn ground(&self) -> &GroundContactTracker {
        &self.ground
    }

    pub fn jump_state(&self) -> &JumpState {
        self.integrator.jump_state()
    }

    pub fn look(&self) -> &LookController {
        &self.look
    }

    /// Collider scale captured from the body at construction.
    pub fn original_scale(&self) -> Vec3 {
        self.collider.original_scale()
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    /// Mutable access to the body, for the host's physics step.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn fixed_timestep(&self) -> f32 {
        self.fixed_timestep
    }

    /// Simulation time advanced by fixed updates (seconds).
    pub fn clock(&self) -> f64 {
        self.integrator.clock()
    }
}

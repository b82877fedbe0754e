//! Force Integrator
//!
//! Runs once per fixed simulation step and is the only code that changes the
//! rigid body's velocity. Movement input is turned into forces, the jump
//! budget decides whether a jump is legal, and jumps are applied as impulses.
//!
//! # Physics Model
//!
//! - Grounded, moving: drive force `dir * 500 * dt * max_speed`, integrated into
//!   the velocity, then the velocity is capped at `max_speed`
//! - Grounded, idle: damping force `-velocity * 500 * dt`
//! - Airborne: drive force `dir * 500 * max_speed * air_control * dt`, skipped
//!   once the horizontal speed toward `dir` already reaches `max_speed`
//! - Jump: vertical velocity zeroed, then impulses `normal * h * 1.5` and
//!   `up * h * 0.5` where `h` is the jump height
//!
//! # Usage
//!
//! ```rust,ignore
//! use rigid_stride_engine::player::{MovementIntent, MoveBasis, PlayerMovementController};
//!
//! let mut integrator = PlayerMovementController::from_config(&config);
//!
//! // Each fixed step, after the step's contact callbacks were applied:
//! let intent = MovementIntent::new(horizontal, vertical, max_speed);
//! let basis = MoveBasis::from_look(&look);
//! integrator.step(&mut body, &mut ground, &intent, &basis, fixed_dt);
//! ```

use glam::Vec3;

use super::ground::GroundContactTracker;
use super::jump::JumpState;
use super::locomotion::SpeedProfile;
use crate::camera::LookController;
use crate::config::ControllerConfig;
use crate::physics::{ForceMode, RigidBody};

/// Scale applied to every drive and damping force
pub const DRIVE_FORCE_SCALE: f32 = 500.0;

/// Share of the jump impulse along the surface normal
pub const JUMP_NORMAL_SCALE: f32 = 1.5;

/// Share of the jump impulse along world up
pub const JUMP_UP_SCALE: f32 = 0.5;

/// Directional input and speed cap for one fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementIntent {
    /// Strafe axis in [-1, 1]
    pub horizontal: f32,
    /// Forward axis in [-1, 1]
    pub vertical: f32,
    /// Any directional input active
    pub is_moving: bool,
    /// Max speed of the current locomotion mode (m/s)
    pub max_speed: f32,
}

impl MovementIntent {
    /// Build an intent, deriving `is_moving` from the axes.
    pub fn new(horizontal: f32, vertical: f32, max_speed: f32) -> Self {
        Self {
            horizontal,
            vertical,
            is_moving: horizontal != 0.0 || vertical != 0.0,
            max_speed,
        }
    }

    /// Intent with no directional input.
    pub fn idle(max_speed: f32) -> Self {
        Self::new(0.0, 0.0, max_speed)
    }
}

/// Horizontal forward/right axes that input is projected onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for MoveBasis {
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

impl MoveBasis {
    /// Basis of the body orientation of a look controller (yaw only).
    pub fn from_look(look: &LookController) -> Self {
        Self {
            forward: look.forward(),
            right: look.right(),
        }
    }

    /// Unit movement direction for the given axes, or zero without input.
    pub fn direction(&self, horizontal: f32, vertical: f32) -> Vec3 {
        (self.right * horizontal + self.forward * vertical).normalize_or_zero()
    }
}

/// Which branch a fixed step took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepBranch {
    Grounded,
    Airborne,
}

/// What happened during one fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Branch taken (decided before any jump in this step)
    pub branch: StepBranch,
    /// A jump executed this step
    pub jumped: bool,
    /// The jump cooldown ended at the top of this step
    pub cooldown_ended: bool,
    /// Simulation time at the start of the step (seconds)
    pub time: f64,
}

/// Applies movement forces, jump impulses and the jump budget.
///
/// Owns the simulation clock used for the jump cooldown; the clock advances
/// by `dt` at the end of every [`PlayerMovementController::step`].
#[derive(Debug, Clone)]
pub struct PlayerMovementController {
    /// Per-mode max speeds and air control
    speeds: SpeedProfile,
    /// Jump budget, request latch and cooldown deadline
    jump: JumpState,
    /// Jump impulse factor
    jump_height: f32,
    /// Keep the jump request latched after a jump
    auto_jump: bool,
    /// Simulation time at the start of the next step (seconds)
    clock: f64,
}

impl Default for PlayerMovementController {
    fn default() -> Self {
        Self::from_config(&ControllerConfig::default())
    }
}

impl PlayerMovementController {
    /// Create an integrator with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an integrator from controller configuration.
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            speeds: SpeedProfile::from_config(config),
            jump: JumpState::from_config(config),
            jump_height: config.jump_height,
            auto_jump: config.auto_jump,
            clock: 0.0,
        }
    }

    /// Speed profile used to derive max speeds.
    pub fn speeds(&self) -> &SpeedProfile {
        &self.speeds
    }

    /// Jump budget and cooldown state.
    pub fn jump_state(&self) -> &JumpState {
        &self.jump
    }

    /// Latch a jump request (jump key down).
    pub fn press_jump(&mut self) {
        self.jump.press();
    }

    /// Drop the jump request (jump key up).
    pub fn release_jump(&mut self) {
        self.jump.release();
    }

    /// Simulation time at the start of the next step.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Run one fixed step.
    ///
    /// Contact callbacks for this step must already have been applied to
    /// `ground`. Returns `None` when the step was skipped because `dt`, the
    /// body's velocity or its mass is not usable; nothing is applied to the
    /// body in that case.
    pub fn step<B: RigidBody + ?Sized>(
        &mut self,
        body: &mut B,
        ground: &mut GroundContactTracker,
        intent: &MovementIntent,
        basis: &MoveBasis,
        dt: f32,
    ) -> Option<StepReport> {
        if !(dt.is_finite() && dt > 0.0) {
            log::warn!("skipping fixed step with unusable dt {dt}");
            return None;
        }

        let now = self.clock;
        self.clock += f64::from(dt);

        let velocity = body.velocity();
        let mass = body.mass();
        if !velocity.is_finite() || !(mass.is_finite() && mass > 0.0) {
            log::warn!("skipping fixed step: velocity {velocity:?}, mass {mass}");
            return None;
        }

        let cooldown_ended = self.jump.expire_cooldown(now);
        let direction = basis.direction(intent.horizontal, intent.vertical);
        let grounded = ground.is_grounded();

        let branch = if grounded {
            self.jump.reset_count();
            if intent.is_moving {
                let drive = direction * DRIVE_FORCE_SCALE * dt * intent.max_speed;
                let driven = velocity + drive / mass * dt;
                body.set_velocity(driven.clamp_length_max(intent.max_speed));
            } else {
                body.add_force(-velocity * DRIVE_FORCE_SCALE * dt, ForceMode::Force);
            }
            StepBranch::Grounded
        } else {
            let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);
            log::trace!("airborne horizontal speed {:.3}", horizontal.length());

            if horizontal.dot(direction) < intent.max_speed {
                let magnitude = DRIVE_FORCE_SCALE
                    * intent.max_speed
                    * self.speeds.air_control_multiplier
                    * dt;
                body.add_force(direction * magnitude, ForceMode::Force);
            }
            StepBranch::Airborne
        };

        let jumped = self.jump.can_jump(grounded);
        if jumped {
            self.execute_jump(body, ground, now);
        }

        Some(StepReport {
            branch,
            jumped,
            cooldown_ended,
            time: now,
        })
    }

    fn execute_jump<B: RigidBody + ?Sized>(
        &mut self,
        body: &mut B,
        ground: &mut GroundContactTracker,
        now: f64,
    ) {
        let mut velocity = body.velocity();
        velocity.y = 0.0;
        body.set_velocity(velocity);

        let normal = ground.jump_normal();
        body.add_force(normal * self.jump_height * JUMP_NORMAL_SCALE, ForceMode::Impulse);
        body.add_force(Vec3::Y * self.jump_height * JUMP_UP_SCALE, ForceMode::Impulse);

        ground.mark_airborne();
        self.jump.record_jump(now, self.auto_jump);

        log::debug!(
            "jump {} of {} at t={now:.3}s off normal {normal:?}",
            self.jump.current_jump_count(),
            self.jump.max_jumps()
        );
    }
}

//! Locomotion Mode Resolution
//!
//! Turns the raw input of one frame into a single [`LocomotionMode`] and a
//! movement-intent flag. The mode is recomputed from scratch every frame;
//! sprint and crouch are never stored as separate flags, so they cannot
//! contradict each other.
//!
//! # Rules (first match wins)
//!
//! 1. Sprint held and vertical axis exactly `+1.0` → Sprinting (crouch ignored)
//! 2. Crouch held → Crouching
//! 3. Otherwise → Walking
//!
//! Sprint needs full-forward input: diagonals with a reduced forward axis,
//! backward and pure strafe input never sprint.

use crate::config::ControllerConfig;

/// Movement mode of the character for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocomotionMode {
    /// Normal upright movement
    #[default]
    Walking,
    /// Fast forward movement
    Sprinting,
    /// Slow movement with a lowered collider
    Crouching,
}

impl LocomotionMode {
    /// Check if this mode uses the crouched collider.
    pub fn is_crouched(&self) -> bool {
        matches!(self, LocomotionMode::Crouching)
    }
}

/// Result of resolving one frame of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocomotionState {
    /// Resolved mode
    pub mode: LocomotionMode,
    /// Whether any directional input is active
    pub is_moving: bool,
}

/// Resolve the locomotion mode from raw axes and held keys.
///
/// # Arguments
/// * `horizontal` - Strafe axis in [-1, 1]
/// * `vertical` - Forward axis in [-1, 1]
/// * `sprint_held` - Sprint key held this frame
/// * `crouch_held` - Crouch key held this frame
pub fn resolve(horizontal: f32, vertical: f32, sprint_held: bool, crouch_held: bool) -> LocomotionState {
    let mode = if sprint_held && vertical == 1.0 {
        LocomotionMode::Sprinting
    } else if crouch_held {
        LocomotionMode::Crouching
    } else {
        LocomotionMode::Walking
    };

    LocomotionState {
        mode,
        is_moving: horizontal != 0.0 || vertical != 0.0,
    }
}

/// Max speeds per mode plus airborne steering authority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedProfile {
    /// Max speed while walking (m/s)
    pub walk_speed: f32,
    /// Max speed while sprinting (m/s)
    pub sprint_speed: f32,
    /// Max speed while crouching (m/s)
    pub crouch_speed: f32,
    /// Fraction of ground drive applied while airborne
    pub air_control_multiplier: f32,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self::from_config(&ControllerConfig::default())
    }
}

impl SpeedProfile {
    /// Take the speed fields from a controller configuration.
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            walk_speed: config.walk_speed,
            sprint_speed: config.sprint_speed,
            crouch_speed: config.crouch_speed,
            air_control_multiplier: config.air_control_multiplier,
        }
    }

    /// Max speed for the given mode.
    pub fn max_speed(&self, mode: LocomotionMode) -> f32 {
        match mode {
            LocomotionMode::Walking => self.walk_speed,
            LocomotionMode::Sprinting => self.sprint_speed,
            LocomotionMode::Crouching => self.crouch_speed,
        }
    }
}

//! Controller Configuration
//!
//! Every tunable of the character controller in one place. `Default` returns
//! the stock tuning; a JSON file only needs to list the fields it changes.
//!
//! ```ignore
//! use rigid_stride_engine::config::ControllerConfig;
//!
//! let config = ControllerConfig::from_json_str(r#"{ "max_jumps": 2, "auto_jump": true }"#)?;
//! assert_eq!(config.walk_speed, 12.0);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ControllerError, Result};
use crate::physics::LayerMask;

/// Delay between a jump and the next allowed jump (seconds)
pub const DEFAULT_JUMP_COOLDOWN_SECONDS: f32 = 0.4;

/// Tuning for one character controller.
///
/// Speeds are in m/s, heights are vertical collider scale factors, angles are
/// in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Mouse look sensitivity (degrees per unit of mouse delta per second)
    pub mouse_sensitivity: f32,
    /// Max speed while walking
    pub walk_speed: f32,
    /// Max speed while sprinting (full-forward input only)
    pub sprint_speed: f32,
    /// Max speed while crouching
    pub crouch_speed: f32,
    /// Fraction of ground drive available while airborne
    pub air_control_multiplier: f32,
    /// Vertical collider scale when standing or sprinting
    pub standing_height: f32,
    /// Vertical collider scale when crouching
    pub crouching_height: f32,
    /// Jump impulse magnitude factor
    pub jump_height: f32,
    /// Jump budget (see `JumpState::can_jump` for how air jumps are counted)
    pub max_jumps: u32,
    /// Keep jumping while the jump key is held
    pub auto_jump: bool,
    /// Layers that count as ground
    pub ground_layer_mask: LayerMask,
    /// Steepest walkable slope in degrees, inclusive
    pub max_slope_angle: f32,
    /// Jump cooldown in seconds
    pub jump_cooldown_seconds: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 100.0,
            walk_speed: 12.0,
            sprint_speed: 18.0,
            crouch_speed: 5.0,
            air_control_multiplier: 0.5,
            standing_height: 1.0,
            crouching_height: 0.5,
            jump_height: 3.0,
            max_jumps: 1,
            auto_jump: false,
            ground_layer_mask: LayerMask::DEFAULT,
            max_slope_angle: 45.0,
            jump_cooldown_seconds: DEFAULT_JUMP_COOLDOWN_SECONDS,
        }
    }
}

impl ControllerConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from a JSON string.
    ///
    /// Missing fields take their default values; unknown fields are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        log::info!("loaded controller config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field against its legal range.
    ///
    /// Values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        non_negative("mouse_sensitivity", self.mouse_sensitivity)?;
        non_negative("walk_speed", self.walk_speed)?;
        non_negative("sprint_speed", self.sprint_speed)?;
        non_negative("crouch_speed", self.crouch_speed)?;
        non_negative("air_control_multiplier", self.air_control_multiplier)?;
        positive("standing_height", self.standing_height)?;
        positive("crouching_height", self.crouching_height)?;
        non_negative("jump_height", self.jump_height)?;
        positive("jump_cooldown_seconds", self.jump_cooldown_seconds)?;

        if self.max_jumps < 1 {
            return Err(ControllerError::invalid(
                "max_jumps",
                format!("must be at least 1, got {}", self.max_jumps),
            ));
        }

        if !(0.0..=180.0).contains(&self.max_slope_angle) {
            return Err(ControllerError::invalid(
                "max_slope_angle",
                format!("must be within [0, 180] degrees, got {}", self.max_slope_angle),
            ));
        }

        if self.ground_layer_mask.is_empty() {
            log::warn!("ground_layer_mask selects no layers; the character can never be grounded");
        }

        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ControllerError::invalid(
            field,
            format!("must be a finite value >= 0, got {value}"),
        ))
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ControllerError::invalid(
            field,
            format!("must be a finite value > 0, got {value}"),
        ))
    }
}

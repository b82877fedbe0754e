//! Jump Budget and Cooldown
//!
//! Tracks how many jumps have been spent since the character last stood on
//! ground, the latched jump request, and the cooldown deadline.
//!
//! The cooldown is a deadline on the controller's simulation clock, checked
//! at the top of every fixed step with [`JumpState::expire_cooldown`]. There
//! is no timer callback: a request made during the cooldown is refused, stays
//! latched, and succeeds on the first step after the deadline passes.

use crate::config::ControllerConfig;

/// Slack when comparing the clock against a cooldown deadline.
///
/// The clock sums `f32` timesteps widened to `f64`, so twenty 0.02 s steps
/// land a few nanoseconds short of a 0.4 s deadline.
pub const COOLDOWN_EPSILON_SECONDS: f64 = 1e-6;

/// Jump counter, request latch and cooldown deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpState {
    /// Jumps executed since the last grounded step
    current_jump_count: u32,
    /// Configured jump budget (>= 1)
    max_jumps: u32,
    /// Latched jump request from input edges
    jump_requested: bool,
    /// Simulation time at which the cooldown ends, if one is running
    cooldown_until: Option<f64>,
    /// Cooldown length in seconds
    cooldown_seconds: f32,
}

impl Default for JumpState {
    fn default() -> Self {
        Self::from_config(&ControllerConfig::default())
    }
}

impl JumpState {
    /// Create a jump state with the given budget and cooldown.
    pub fn new(max_jumps: u32, cooldown_seconds: f32) -> Self {
        Self {
            current_jump_count: 0,
            max_jumps,
            jump_requested: false,
            cooldown_until: None,
            cooldown_seconds,
        }
    }

    /// Build from controller configuration.
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(config.max_jumps, config.jump_cooldown_seconds)
    }

    /// Jumps executed since the character was last grounded.
    pub fn current_jump_count(&self) -> u32 {
        self.current_jump_count
    }

    /// Configured jump budget.
    pub fn max_jumps(&self) -> u32 {
        self.max_jumps
    }

    /// Whether a jump request is latched.
    pub fn is_requested(&self) -> bool {
        self.jump_requested
    }

    /// Whether the post-jump cooldown is running.
    pub fn is_in_cooldown(&self) -> bool {
        self.cooldown_until.is_some()
    }

    /// Simulation time at which the running cooldown ends.
    pub fn cooldown_deadline(&self) -> Option<f64> {
        self.cooldown_until
    }

    /// Latch a jump request (jump key went down).
    pub fn press(&mut self) {
        self.jump_requested = true;
    }

    /// Drop the jump request (jump key went up).
    pub fn release(&mut self) {
        self.jump_requested = false;
    }

    /// Reset the spent jump count; called on every grounded step.
    pub fn reset_count(&mut self) {
        self.current_jump_count = 0;
    }

    /// Clear the cooldown if `now` has reached its deadline (within
    /// [`COOLDOWN_EPSILON_SECONDS`]).
    ///
    /// Returns `true` when the cooldown ended on this call.
    pub fn expire_cooldown(&mut self, now: f64) -> bool {
        match self.cooldown_until {
            Some(deadline) if now + COOLDOWN_EPSILON_SECONDS >= deadline => {
                self.cooldown_until = None;
                true
            }
            _ => false,
        }
    }

    /// Check if a jump may execute this step.
    ///
    /// Needs a latched request and no cooldown. From the ground a jump is
    /// always allowed; in the air only while `current_jump_count < max_jumps - 1`.
    /// With the count reset on every grounded step, `max_jumps = 2` grants an
    /// air jump only when the body walked off a ledge (count 0), not after a
    /// ground jump (count 1).
    pub fn can_jump(&self, grounded: bool) -> bool {
        if !self.jump_requested || self.is_in_cooldown() {
            return false;
        }
        grounded || self.current_jump_count < self.max_jumps.saturating_sub(1)
    }

    /// Record an executed jump at simulation time `now`.
    ///
    /// Starts the cooldown, spends one jump, and clears the request unless
    /// `auto_jump` keeps it latched while the key is held.
    pub fn record_jump(&mut self, now: f64, auto_jump: bool) {
        self.current_jump_count += 1;
        self.cooldown_until = Some(now + f64::from(self.cooldown_seconds));
        if !auto_jump {
            self.jump_requested = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_jump_without_request() {
        let jump = JumpState::default();
        assert!(!jump.can_jump(true));
    }

    #[test]
    fn test_grounded_jump_allowed() {
        let mut jump = JumpState::default();
        jump.press();
        assert!(jump.can_jump(true));
    }

    #[test]
    fn test_single_jump_budget_has_no_air_jump() {
        let mut jump = JumpState::new(1, 0.4);
        jump.press();
        assert!(!jump.can_jump(false));
    }

    #[test]
    fn test_record_jump_starts_cooldown_and_clears_latch() {
        let mut jump = JumpState::default();
        jump.press();
        jump.record_jump(1.0, false);
        assert_eq!(jump.current_jump_count(), 1);
        assert!(jump.is_in_cooldown());
        assert!(!jump.is_requested());
        assert_eq!(jump.cooldown_deadline(), Some(1.0 + f64::from(0.4f32)));
    }

    #[test]
    fn test_auto_jump_keeps_latch() {
        let mut jump = JumpState::default();
        jump.press();
        jump.record_jump(0.0, true);
        assert!(jump.is_requested());
        // Still refused until the cooldown ends
        assert!(!jump.can_jump(true));
        assert!(jump.expire_cooldown(0.5));
        assert!(jump.can_jump(true));
    }

    #[test]
    fn test_cooldown_expires_at_deadline() {
        let mut jump = JumpState::new(1, 0.4);
        jump.press();
        jump.record_jump(2.0, false);
        assert!(!jump.expire_cooldown(2.2));
        assert!(jump.is_in_cooldown());
        assert!(jump.expire_cooldown(2.5));
        assert!(!jump.is_in_cooldown());
        assert!(!jump.expire_cooldown(3.0));
    }

    #[test]
    fn test_cooldown_expires_after_exact_step_count() {
        let dt = 0.02f32;
        let mut jump = JumpState::new(1, 0.4);
        jump.press();
        jump.record_jump(0.0, true);

        let mut now = 0.0f64;
        for _ in 0..19 {
            now += f64::from(dt);
            assert!(!jump.expire_cooldown(now), "cooldown ended early at t={now}");
        }
        now += f64::from(dt);
        assert!(jump.expire_cooldown(now));
    }

    #[test]
    fn test_request_latched_during_cooldown() {
        let mut jump = JumpState::default();
        jump.press();
        jump.record_jump(0.0, false);
        jump.press();
        assert!(jump.is_requested());
        assert!(!jump.can_jump(true));
    }

    #[test]
    fn test_two_jump_budget_off_by_one() {
        let mut jump = JumpState::new(2, 0.4);
        jump.press();
        jump.record_jump(0.0, false);
        jump.expire_cooldown(1.0);
        jump.press();
        // count 1 < 2 - 1 is false: no air jump after a ground jump
        assert!(!jump.can_jump(false));

        // Walking off a ledge leaves the count at 0, which does allow one
        jump.reset_count();
        assert!(jump.can_jump(false));
    }

    #[test]
    fn test_three_jump_budget_allows_air_jump() {
        let mut jump = JumpState::new(3, 0.4);
        jump.press();
        jump.record_jump(0.0, false);
        jump.expire_cooldown(1.0);
        jump.press();
        assert!(jump.can_jump(false));
        jump.record_jump(1.0, false);
        jump.expire_cooldown(2.0);
        jump.press();
        assert!(!jump.can_jump(false));
    }
}

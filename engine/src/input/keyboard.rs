//! Keyboard Input Module
//!
//! Held-key state for the character's logical actions. Physical keys are
//! mapped to actions by [`super::KeyBindings`]; this module only knows which
//! actions are currently held and turns them into raw axis values.

use super::bindings::InputAction;

/// Generic key codes, independent of any windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    C,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Which character actions are currently held.
///
/// Axis values are raw: each is exactly -1, 0 or 1, which is what makes the
/// "full forward" sprint check meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// Move forward held
    pub forward: bool,
    /// Move backward held
    pub backward: bool,
    /// Strafe left held
    pub left: bool,
    /// Strafe right held
    pub right: bool,
    /// Sprint held
    pub sprint: bool,
    /// Crouch held
    pub crouch: bool,
    /// Jump held
    pub jump: bool,
}

impl MovementKeys {
    /// Create a state with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action going down or up.
    ///
    /// Returns the previous held state of that action.
    pub fn set_action(&mut self, action: InputAction, pressed: bool) -> bool {
        let slot = match action {
            InputAction::MoveForward => &mut self.forward,
            InputAction::MoveBack => &mut self.backward,
            InputAction::MoveLeft => &mut self.left,
            InputAction::MoveRight => &mut self.right,
            InputAction::Sprint => &mut self.sprint,
            InputAction::Crouch => &mut self.crouch,
            InputAction::Jump => &mut self.jump,
        };
        std::mem::replace(slot, pressed)
    }

    /// Check if any directional key is held.
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Forward/backward axis (-1, 0 or 1).
    pub fn vertical_axis(&self) -> f32 {
        (self.forward as i32 - self.backward as i32) as f32
    }

    /// Right/left axis (-1, 0 or 1).
    pub fn horizontal_axis(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    /// Release everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_direction());
        assert_eq!(keys.vertical_axis(), 0.0);
        assert_eq!(keys.horizontal_axis(), 0.0);
    }

    #[test]
    fn test_forward_axis_is_exactly_one() {
        let mut keys = MovementKeys::new();
        keys.set_action(InputAction::MoveForward, true);
        assert_eq!(keys.vertical_axis(), 1.0);
        assert!(keys.any_direction());
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut keys = MovementKeys::new();
        keys.set_action(InputAction::MoveForward, true);
        keys.set_action(InputAction::MoveBack, true);
        keys.set_action(InputAction::MoveLeft, true);
        assert_eq!(keys.vertical_axis(), 0.0);
        assert_eq!(keys.horizontal_axis(), -1.0);
    }

    #[test]
    fn test_set_action_returns_previous() {
        let mut keys = MovementKeys::new();
        assert!(!keys.set_action(InputAction::Jump, true));
        assert!(keys.set_action(InputAction::Jump, true));
        assert!(keys.set_action(InputAction::Jump, false));
        assert!(!keys.jump);
    }

    #[test]
    fn test_reset() {
        let mut keys = MovementKeys::new();
        keys.set_action(InputAction::Sprint, true);
        keys.set_action(InputAction::MoveRight, true);
        keys.reset();
        assert_eq!(keys, MovementKeys::default());
    }
}

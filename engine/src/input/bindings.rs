//! Input Bindings Module
//!
//! Maps physical keys to the character's logical actions. Several keys may
//! drive the same action (W and ArrowUp both move forward), but each key
//! drives at most one action.

use std::collections::HashMap;

use super::KeyCode;

/// Logical actions the character controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W, ArrowUp)
    MoveForward,
    /// Move backward (default: S, ArrowDown)
    MoveBack,
    /// Strafe left (default: A, ArrowLeft)
    MoveLeft,
    /// Strafe right (default: D, ArrowRight)
    MoveRight,
    /// Sprint while held (default: Shift)
    Sprint,
    /// Crouch while held (default: Ctrl, C)
    Crouch,
    /// Jump (default: Space)
    Jump,
}

/// Key-to-action table with remapping support.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, InputAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Bindings for a standard WASD layout with arrow-key aliases.
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);
        bindings.bind(KeyCode::ShiftLeft, InputAction::Sprint);
        bindings.bind(KeyCode::ShiftRight, InputAction::Sprint);
        bindings.bind(KeyCode::ControlLeft, InputAction::Crouch);
        bindings.bind(KeyCode::ControlRight, InputAction::Crouch);
        bindings.bind(KeyCode::C, InputAction::Crouch);
        bindings.bind(KeyCode::Space, InputAction::Jump);

        bindings
    }

    /// A table with no bindings at all.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
        }
    }

    /// Bind `key` to `action`, replacing whatever the key did before.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.key_to_action.insert(key, action);
    }

    /// Remove a key's binding.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.key_to_action.remove(&key);
    }

    /// Remove every key bound to `action`.
    pub fn unbind_action(&mut self, action: InputAction) {
        self.key_to_action.retain(|_, bound| *bound != action);
    }

    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// All keys bound to `action`.
    pub fn keys_for(&self, action: InputAction) -> Vec<KeyCode> {
        self.key_to_action
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.action_for(KeyCode::W), Some(InputAction::MoveForward));
        assert_eq!(bindings.action_for(KeyCode::ArrowUp), Some(InputAction::MoveForward));
        assert_eq!(bindings.action_for(KeyCode::D), Some(InputAction::MoveRight));
        assert_eq!(bindings.action_for(KeyCode::ShiftLeft), Some(InputAction::Sprint));
        assert_eq!(bindings.action_for(KeyCode::ControlLeft), Some(InputAction::Crouch));
        assert_eq!(bindings.action_for(KeyCode::Space), Some(InputAction::Jump));
        assert_eq!(bindings.action_for(KeyCode::Escape), None);
    }

    #[test]
    fn test_rebind_key() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::C, InputAction::Jump);
        assert_eq!(bindings.action_for(KeyCode::C), Some(InputAction::Jump));
        // Space still jumps too
        assert_eq!(bindings.action_for(KeyCode::Space), Some(InputAction::Jump));
    }

    #[test]
    fn test_unbind_action_removes_all_keys() {
        let mut bindings = KeyBindings::new();
        bindings.unbind_action(InputAction::Crouch);
        assert!(bindings.keys_for(InputAction::Crouch).is_empty());
        assert_eq!(bindings.action_for(KeyCode::ControlLeft), None);
    }

    #[test]
    fn test_unbind_key() {
        let mut bindings = KeyBindings::new();
        bindings.unbind_key(KeyCode::W);
        assert_eq!(bindings.action_for(KeyCode::W), None);
        assert_eq!(bindings.keys_for(InputAction::MoveForward), vec![KeyCode::ArrowUp]);
    }
}

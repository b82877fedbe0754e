//! Input Module
//!
//! Platform-agnostic input aggregation for the character controller. Key
//! events and raw mouse motion are fed in as they arrive; once per frame
//! [`InputState::sample`] produces a [`FrameInput`] snapshot with raw axes,
//! held modifiers, jump edges and the frame's mouse delta.
//!
//! # Example
//!
//! ```rust,ignore
//! use rigid_stride_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//!
//! // Event loop
//! input.handle_key(KeyCode::W, true);
//! input.handle_key(KeyCode::Space, true);
//!
//! // Frame update
//! let frame = input.sample();
//! assert_eq!(frame.vertical, 1.0);
//! assert!(frame.jump_pressed);
//! ```

pub mod bindings;
pub mod cursor_manager;
pub mod keyboard;
pub mod mouse_state;

pub use bindings::{InputAction, KeyBindings};
pub use cursor_manager::{CursorManager, CursorPlatform};
pub use keyboard::{KeyCode, MovementKeys};
pub use mouse_state::FpsMouseState;

use glam::Vec2;
use std::collections::HashSet;

/// Everything the controller needs from one frame of input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Strafe axis in [-1, 1] (positive = right)
    pub horizontal: f32,
    /// Forward axis in [-1, 1] (positive = forward)
    pub vertical: f32,
    /// Sprint key held
    pub sprint_held: bool,
    /// Crouch key held
    pub crouch_held: bool,
    /// Jump key went down since the last sample
    pub jump_pressed: bool,
    /// Jump key went up since the last sample
    pub jump_released: bool,
    /// Mouse motion since the last sample (positive y = mouse moved down)
    pub mouse_delta: Vec2,
}

impl FrameInput {
    /// Snapshot with directional axes only.
    pub fn with_axes(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
            ..Default::default()
        }
    }

    /// Replace non-finite axes with 0 and clamp them to [-1, 1].
    ///
    /// Non-finite mouse deltas are zeroed as well.
    pub fn sanitized(mut self) -> Self {
        for axis in [&mut self.horizontal, &mut self.vertical] {
            *axis = if axis.is_finite() { axis.clamp(-1.0, 1.0) } else { 0.0 };
        }
        if !self.mouse_delta.is_finite() {
            self.mouse_delta = Vec2::ZERO;
        }
        self
    }
}

/// Aggregates key events and mouse motion between frames.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: KeyBindings,
    keys: MovementKeys,
    /// Physical keys currently down; an action stays held while any of its keys is
    held_keys: HashSet<KeyCode>,
    mouse: FpsMouseState,
    cursor: CursorManager,
    jump_pressed: bool,
    jump_released: bool,
}

impl InputState {
    /// Create an input state with the default key bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input state with custom key bindings.
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    /// Mutable access to the key bindings.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Currently held actions.
    pub fn keys(&self) -> &MovementKeys {
        &self.keys
    }

    /// Handle a key press or release.
    ///
    /// Returns `true` if the key is bound to a character action. Key-repeat
    /// presses of an already held jump key do not produce a new edge, and
    /// releasing one of two keys bound to the same action keeps it held.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let Some(action) = self.bindings.action_for(key) else {
            return false;
        };

        if pressed {
            self.held_keys.insert(key);
        } else {
            self.held_keys.remove(&key);
        }
        let now_held = self
            .held_keys
            .iter()
            .any(|held| self.bindings.action_for(*held) == Some(action));

        let was_held = self.keys.set_action(action, now_held);
        if action == InputAction::Jump {
            if now_held && !was_held {
                self.jump_pressed = true;
            } else if !now_held && was_held {
                self.jump_released = true;
            }
        }
        true
    }

    /// Add raw mouse motion (only counted while the cursor is captured).
    pub fn handle_mouse_motion(&mut self, dx: f32, dy: f32) {
        self.mouse.accumulate_delta(dx, dy);
    }

    /// Lock and hide the cursor through the platform, once.
    pub fn capture_cursor(&mut self, platform: &mut impl CursorPlatform) -> bool {
        self.cursor.capture(platform, &mut self.mouse)
    }

    /// Check if the cursor is captured.
    pub fn is_cursor_captured(&self) -> bool {
        self.mouse.is_captured()
    }

    /// Produce this frame's snapshot and clear the per-frame edges and motion.
    pub fn sample(&mut self) -> FrameInput {
        let frame = FrameInput {
            horizontal: self.keys.horizontal_axis(),
            vertical: self.keys.vertical_axis(),
            sprint_held: self.keys.sprint,
            crouch_held: self.keys.crouch,
            jump_pressed: self.jump_pressed,
            jump_released: self.jump_released,
            mouse_delta: self.mouse.consume_delta(),
        };
        self.jump_pressed = false;
        self.jump_released = false;
        frame
    }

    /// Release all keys and drop pending edges and motion.
    pub fn reset(&mut self) {
        self.keys.reset();
        self.held_keys.clear();
        self.mouse.consume_delta();
        self.jump_pressed = false;
        self.jump_released = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullPlatform;

    impl CursorPlatform for NullPlatform {
        fn lock_cursor(&mut self) {}
        fn set_cursor_visible(&mut self, _visible: bool) {}
    }

    #[test]
    fn test_input_state_default() {
        let mut input = InputState::new();
        assert_eq!(input.sample(), FrameInput::default());
    }

    #[test]
    fn test_axes_from_keys() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::W, true);
        input.handle_key(KeyCode::A, true);
        let frame = input.sample();
        assert_eq!(frame.vertical, 1.0);
        assert_eq!(frame.horizontal, -1.0);
    }

    #[test]
    fn test_jump_edges_reported_once() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::Space, true);
        assert!(input.sample().jump_pressed);
        // Held but no new edge
        input.handle_key(KeyCode::Space, true);
        assert!(!input.sample().jump_pressed);

        input.handle_key(KeyCode::Space, false);
        let frame = input.sample();
        assert!(frame.jump_released);
        assert!(!frame.jump_pressed);
    }

    #[test]
    fn test_alias_release_keeps_direction_held() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::W, true);
        input.handle_key(KeyCode::ArrowUp, true);
        input.handle_key(KeyCode::ArrowUp, false);
        assert_eq!(input.sample().vertical, 1.0);

        input.handle_key(KeyCode::W, false);
        assert_eq!(input.sample().vertical, 0.0);
    }

    #[test]
    fn test_alias_release_keeps_sprint_held() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::ShiftLeft, true);
        input.handle_key(KeyCode::ShiftRight, true);
        input.handle_key(KeyCode::ShiftRight, false);
        assert!(input.sample().sprint_held);
        assert!(input.keys().sprint);

        input.handle_key(KeyCode::ShiftLeft, false);
        assert!(!input.sample().sprint_held);
    }

    #[test]
    fn test_second_jump_key_no_extra_edges() {
        let mut input = InputState::new();
        input.bindings_mut().bind(KeyCode::C, InputAction::Jump);
        input.handle_key(KeyCode::Space, true);
        assert!(input.sample().jump_pressed);

        input.handle_key(KeyCode::C, true);
        input.handle_key(KeyCode::Space, false);
        let frame = input.sample();
        assert!(!frame.jump_pressed);
        assert!(!frame.jump_released);

        input.handle_key(KeyCode::C, false);
        assert!(input.sample().jump_released);
    }

    #[test]
    fn test_reset_forgets_held_keys() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::W, true);
        input.handle_key(KeyCode::ArrowUp, true);
        input.reset();
        input.handle_key(KeyCode::ArrowUp, false);
        assert_eq!(input.sample().vertical, 0.0);
    }

    #[test]
    fn test_unbound_key_not_handled() {
        let mut input = InputState::new();
        assert!(!input.handle_key(KeyCode::Escape, true));
    }

    #[test]
    fn test_mouse_needs_captured_cursor() {
        let mut input = InputState::new();
        input.handle_mouse_motion(5.0, 1.0);
        assert_eq!(input.sample().mouse_delta, Vec2::ZERO);

        assert!(input.capture_cursor(&mut NullPlatform));
        input.handle_mouse_motion(5.0, 1.0);
        input.handle_mouse_motion(1.0, 1.0);
        assert_eq!(input.sample().mouse_delta, Vec2::new(6.0, 2.0));
        assert_eq!(input.sample().mouse_delta, Vec2::ZERO);
    }

    #[test]
    fn test_sanitized_frame() {
        let frame = FrameInput {
            horizontal: f32::NAN,
            vertical: 3.0,
            mouse_delta: Vec2::new(f32::INFINITY, 0.0),
            ..Default::default()
        }
        .sanitized();
        assert_eq!(frame.horizontal, 0.0);
        assert_eq!(frame.vertical, 1.0);
        assert_eq!(frame.mouse_delta, Vec2::ZERO);
    }
}

//! Cursor Manager Module
//!
//! Locking and hiding the cursor is a platform side effect performed once
//! when play starts. The [`CursorPlatform`] trait is the seam to the window
//! system; [`CursorManager`] makes sure the lock happens exactly once and
//! keeps the mouse accumulator's capture flag in step.

use super::mouse_state::FpsMouseState;

/// Window-system operations on the cursor.
pub trait CursorPlatform {
    /// Confine the cursor to the window.
    fn lock_cursor(&mut self);

    /// Show or hide the cursor.
    fn set_cursor_visible(&mut self, visible: bool);
}

/// Tracks whether the startup cursor lock has been applied.
#[derive(Debug, Clone, Default)]
pub struct CursorManager {
    locked: bool,
}

impl CursorManager {
    /// Create a manager that has not locked the cursor yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock and hide the cursor, once.
    ///
    /// Returns `true` if the platform calls were made on this invocation.
    pub fn capture(&mut self, platform: &mut impl CursorPlatform, mouse: &mut FpsMouseState) -> bool {
        if self.locked {
            return false;
        }
        platform.lock_cursor();
        platform.set_cursor_visible(false);
        mouse.set_captured(true);
        self.locked = true;
        log::info!("cursor locked and hidden");
        true
    }

    /// Check if the cursor lock has been applied.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingPlatform {
        locks: u32,
        visible: Option<bool>,
    }

    impl CursorPlatform for CountingPlatform {
        fn lock_cursor(&mut self) {
            self.locks += 1;
        }

        fn set_cursor_visible(&mut self, visible: bool) {
            self.visible = Some(visible);
        }
    }

    #[test]
    fn test_capture_happens_once() {
        let mut manager = CursorManager::new();
        let mut platform = CountingPlatform::default();
        let mut mouse = FpsMouseState::new();

        assert!(manager.capture(&mut platform, &mut mouse));
        assert!(!manager.capture(&mut platform, &mut mouse));

        assert_eq!(platform.locks, 1);
        assert_eq!(platform.visible, Some(false));
        assert!(mouse.is_captured());
        assert!(manager.is_locked());
    }
}

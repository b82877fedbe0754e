//! Mouse Delta Accumulation
//!
//! Raw mouse motion arrives many times per frame; the look controller wants
//! one delta per frame. [`FpsMouseState`] sums the motion until the frame
//! consumes it, and only while the cursor is captured.

use glam::Vec2;

/// Captured-cursor mouse motion accumulator.
///
/// # Example
///
/// ```rust,ignore
/// let mut mouse = FpsMouseState::new();
/// mouse.set_captured(true);
///
/// // Event loop
/// mouse.accumulate_delta(10.0, -5.0);
/// mouse.accumulate_delta(3.0, 2.0);
///
/// // Frame update
/// let delta = mouse.consume_delta(); // (13, -3)
/// ```
#[derive(Debug, Clone, Default)]
pub struct FpsMouseState {
    /// Motion accumulated since the last consume
    delta: Vec2,
    /// Whether the cursor is captured (locked and hidden)
    cursor_captured: bool,
}

impl FpsMouseState {
    /// Create an uncaptured state with no pending motion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add raw motion. Ignored while the cursor is not captured, and for
    /// non-finite values.
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if !self.cursor_captured {
            return;
        }
        if !(dx.is_finite() && dy.is_finite()) {
            log::warn!("dropping non-finite mouse motion ({dx}, {dy})");
            return;
        }
        self.delta += Vec2::new(dx, dy);
    }

    /// Take the accumulated motion and reset it to zero.
    pub fn consume_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta)
    }

    /// Motion accumulated so far, without consuming it.
    pub fn peek_delta(&self) -> Vec2 {
        self.delta
    }

    /// Mark the cursor as captured or released. Releasing drops pending motion.
    pub fn set_captured(&mut self, captured: bool) {
        self.cursor_captured = captured;
        if !captured {
            self.delta = Vec2::ZERO;
        }
    }

    /// Check if the cursor is captured.
    pub fn is_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Reset all state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

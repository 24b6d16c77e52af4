//! Screen shake
//!
//! The shake is a counted, reentrant flag rather than a bare on/off
//! toggle: every trigger increments the depth and schedules its own
//! release, and the shake stays visible while the depth is above zero.
//! Overlapping triggers therefore compose deterministically instead of
//! cutting each other short.

use std::time::Duration;

use egui::Vec2;

/// How long a single trigger keeps the shake active
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

const AMPLITUDE_X: f32 = 4.0;
const AMPLITUDE_Y: f32 = 3.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShakeState {
    depth: u32,
}

impl ShakeState {
    pub fn begin(&mut self) {
        self.depth += 1;
    }

    pub fn release(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.depth > 0
    }

    /// Viewport jitter for the current frame; zero when inactive.
    /// `time` is the wall-clock animation time in seconds.
    pub fn offset(&self, time: f64) -> Vec2 {
        if !self.is_active() {
            return Vec2::ZERO;
        }
        Vec2::new(
            ((time * 73.0).sin() as f32) * AMPLITUDE_X,
            ((time * 97.0).cos() as f32) * AMPLITUDE_Y,
        )
    }
}

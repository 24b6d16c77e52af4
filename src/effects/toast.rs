//! Transient toast notifications
//!
//! One unified contract for every caller: a message, a style (severity or
//! theme accent), and a display duration. A toast fades in just after
//! insertion, holds, and fades out over a short window before removal.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use egui::Color32;

use crate::themes;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Default display duration
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);
/// Fade in/out window
pub const FADE: Duration = Duration::from_millis(300);
/// Small delay before the fade-in starts
const SHOW_DELAY: Duration = Duration::from_millis(10);

/// Visual style of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Info,
    Success,
    Warning,
    Error,
    Celebration,
}

impl ToastStyle {
    pub fn accent(&self) -> Color32 {
        match self {
            Self::Info => Color32::from_rgb(59, 130, 246),
            Self::Success => Color32::from_rgb(34, 197, 94),
            Self::Warning => Color32::from_rgb(234, 179, 8),
            Self::Error => Color32::from_rgb(239, 68, 68),
            Self::Celebration => Color32::from_rgb(168, 85, 247),
        }
    }
}

/// One transient banner
#[derive(Debug, Clone)]
pub struct Toast {
    /// Stable identity, distinct per toast; render-side animation state
    /// keys off this so it survives older toasts expiring.
    pub id: u64,
    pub message: String,
    pub accent: Color32,
    pub duration: Duration,
    pub spawned: Instant,
}

impl Toast {
    pub fn new(
        message: impl Into<String>,
        style: ToastStyle,
        duration: Duration,
        spawned: Instant,
    ) -> Self {
        Self {
            id: next_id(),
            message: message.into(),
            accent: style.accent(),
            duration,
            spawned,
        }
    }

    pub fn info(message: impl Into<String>, spawned: Instant) -> Self {
        Self::new(message, ToastStyle::Info, DEFAULT_DURATION, spawned)
    }

    pub fn success(message: impl Into<String>, spawned: Instant) -> Self {
        Self::new(message, ToastStyle::Success, DEFAULT_DURATION, spawned)
    }

    pub fn error(message: impl Into<String>, spawned: Instant) -> Self {
        Self::new(message, ToastStyle::Error, DEFAULT_DURATION, spawned)
    }

    /// Styled with a theme's primary color instead of a severity color.
    pub fn themed(
        message: impl Into<String>,
        theme_name: &str,
        duration: Duration,
        spawned: Instant,
    ) -> Self {
        Self {
            id: next_id(),
            message: message.into(),
            accent: themes::get_theme(theme_name).palette.primary,
            duration,
            spawned,
        }
    }

    /// Opacity at `now`: fade in after a short delay, hold, fade out.
    pub fn alpha(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.spawned);
        if elapsed < SHOW_DELAY {
            return 0.0;
        }

        let fade = FADE.as_secs_f32();
        let t = (elapsed - SHOW_DELAY).as_secs_f32();
        let hold = self.duration.as_secs_f32();

        if t < fade {
            t / fade
        } else if t > hold {
            (1.0 - (t - hold) / fade).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Fully faded out and ready for removal.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.spawned) >= SHOW_DELAY + self.duration + FADE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_for_full_duration() {
        let t0 = Instant::now();
        let toast = Toast::info("hi", t0);

        assert!(!toast.is_expired(t0));
        assert!(!toast.is_expired(t0 + Duration::from_millis(3000)));
        // Gone shortly after the duration (within the fade-out window).
        assert!(toast.is_expired(t0 + Duration::from_millis(3400)));
    }

    #[test]
    fn test_alpha_envelope() {
        let t0 = Instant::now();
        let toast = Toast::new("hi", ToastStyle::Success, Duration::from_millis(1000), t0);

        assert_eq!(toast.alpha(t0), 0.0);
        assert!((toast.alpha(t0 + Duration::from_millis(500)) - 1.0).abs() < f32::EPSILON);
        let fading = toast.alpha(t0 + Duration::from_millis(1200));
        assert!(fading > 0.0 && fading < 1.0);
    }

    #[test]
    fn test_ids_are_distinct_and_survive_clones() {
        let t0 = Instant::now();
        let a = Toast::info("a", t0);
        let b = Toast::info("b", t0);
        assert_ne!(a.id, b.id, "same-instant toasts still get distinct ids");

        let copy = a.clone();
        assert_eq!(copy.id, a.id);
    }

    #[test]
    fn test_themed_accent_uses_theme_primary() {
        let t0 = Instant::now();
        let toast = Toast::themed("go", "minecraft", DEFAULT_DURATION, t0);
        assert_eq!(toast.accent, crate::themes::get_theme("minecraft").palette.primary);

        // Unknown theme falls back to the default theme's primary.
        let fallback = Toast::themed("go", "nope", DEFAULT_DURATION, t0);
        assert_eq!(fallback.accent, crate::themes::default_theme().palette.primary);
    }
}

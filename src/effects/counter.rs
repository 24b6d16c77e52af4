//! Animated point counters
//!
//! A counter owns its displayed text. Increments tween the displayed value
//! to the target over a fixed duration in discrete steps, snap to the exact
//! target at the end (no rounding drift), and finish with a brief pulse.
//!
//! Increments against the same counter are serialized: a delta arriving
//! while a tween is running queues behind it instead of racing on the
//! displayed text.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const TWEEN_DURATION: Duration = Duration::from_millis(500);
pub const TWEEN_STEPS: u32 = 20;
pub const PULSE_DURATION: Duration = Duration::from_millis(600);

/// Parse the integer a counter currently displays.
///
/// Only digit characters count; anything unparsable defaults to 0, so
/// decorated text like `1,234 pts` reads as 1234.
pub fn parse_display(text: &str) -> i64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: i64,
    delta: i64,
    started: Instant,
}

impl Tween {
    /// Displayed value at `now`: the step index rounds the interpolated
    /// value to the nearest integer.
    fn value_at(&self, now: Instant) -> i64 {
        let elapsed = now.duration_since(self.started);
        if elapsed >= TWEEN_DURATION {
            return self.from + self.delta;
        }
        let step = (elapsed.as_millis() as u64 * TWEEN_STEPS as u64
            / TWEEN_DURATION.as_millis() as u64) as i64;
        let interpolated = self.from as f64 + self.delta as f64 * step as f64 / TWEEN_STEPS as f64;
        interpolated.round() as i64
    }

    fn is_done(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= TWEEN_DURATION
    }
}

/// State of one visual counter
#[derive(Debug, Clone)]
pub struct CounterState {
    text: String,
    tween: Option<Tween>,
    pending: VecDeque<i64>,
    pulse_started: Option<Instant>,
}

impl CounterState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tween: None,
            pending: VecDeque::new(),
            pulse_started: None,
        }
    }

    /// The text to render for this counter.
    pub fn display(&self) -> &str {
        &self.text
    }

    /// Queue an increment. Starts immediately if the counter is idle.
    pub fn enqueue(&mut self, delta: i64, now: Instant) {
        if self.tween.is_none() {
            self.start(delta, now);
        } else {
            self.pending.push_back(delta);
        }
    }

    fn start(&mut self, delta: i64, now: Instant) {
        let from = parse_display(&self.text);
        self.tween = Some(Tween {
            from,
            delta,
            started: now,
        });
    }

    /// Advance the animation. Call once per frame.
    pub fn tick(&mut self, now: Instant) {
        if let Some(tween) = self.tween {
            if tween.is_done(now) {
                // Snap to the exact target to correct any rounding drift.
                self.text = (tween.from + tween.delta).to_string();
                self.tween = None;
                self.pulse_started = Some(now);
                if let Some(next) = self.pending.pop_front() {
                    self.start(next, now);
                }
            } else {
                self.text = tween.value_at(now).to_string();
            }
        }

        if let Some(started) = self.pulse_started {
            if now.duration_since(started) >= PULSE_DURATION {
                self.pulse_started = None;
            }
        }
    }

    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse_started
            .is_some_and(|started| now.duration_since(started) < PULSE_DURATION)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some() || !self.pending.is_empty() || self.pulse_started.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("7"), 7);
        assert_eq!(parse_display("1,234"), 1234);
        assert_eq!(parse_display("⭐ 450 pts"), 450);
        assert_eq!(parse_display("no digits"), 0);
        assert_eq!(parse_display(""), 0);
    }

    #[test]
    fn test_exact_final_value() {
        let t0 = Instant::now();
        let mut counter = CounterState::new("7");
        counter.enqueue(13, t0);

        // Tick at awkward offsets; the end state must still be exact.
        for ms in [13, 137, 251, 333, 499] {
            counter.tick(t0 + Duration::from_millis(ms));
        }
        counter.tick(t0 + TWEEN_DURATION);
        assert_eq!(counter.display(), "20");
        assert!(counter.is_pulsing(t0 + TWEEN_DURATION));
    }

    #[test]
    fn test_intermediate_values_monotonic() {
        let t0 = Instant::now();
        let mut counter = CounterState::new("0");
        counter.enqueue(100, t0);

        let mut last = 0;
        for ms in (0..500).step_by(25) {
            counter.tick(t0 + Duration::from_millis(ms));
            let value = parse_display(counter.display());
            assert!(value >= last, "value went backwards: {} < {}", value, last);
            assert!(value <= 100);
            last = value;
        }
    }

    #[test]
    fn test_concurrent_increments_serialize() {
        let t0 = Instant::now();
        let mut counter = CounterState::new("7");
        counter.enqueue(10, t0);
        counter.enqueue(5, t0); // queues behind the active tween

        // First tween completes; the queued delta starts from 17.
        let t1 = t0 + TWEEN_DURATION;
        counter.tick(t1);
        assert!(counter.is_animating());

        counter.tick(t1 + TWEEN_DURATION);
        assert_eq!(counter.display(), "22");
    }

    #[test]
    fn test_parse_miss_defaults_to_zero() {
        let t0 = Instant::now();
        let mut counter = CounterState::new("--");
        counter.enqueue(25, t0);
        counter.tick(t0 + TWEEN_DURATION);
        assert_eq!(counter.display(), "25");
    }

    #[test]
    fn test_pulse_expires() {
        let t0 = Instant::now();
        let mut counter = CounterState::new("0");
        counter.enqueue(1, t0);

        let done = t0 + TWEEN_DURATION;
        counter.tick(done);
        assert!(counter.is_pulsing(done));

        let after = done + PULSE_DURATION;
        counter.tick(after);
        assert!(!counter.is_pulsing(after));
        assert!(!counter.is_animating());
    }
}

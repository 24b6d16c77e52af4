//! Flying point markers
//!
//! When a task is completed, a `+N` marker appears over the task control,
//! launches toward the points counter after a short delay, and is removed
//! when it arrives. The arrival step feeds the counter increment.

use std::time::{Duration, Instant};

use egui::Pos2;

/// Delay before the marker starts moving
pub const LAUNCH_DELAY: Duration = Duration::from_millis(50);
/// Total marker lifetime, spawn to removal
pub const LIFETIME: Duration = Duration::from_millis(1000);

/// One in-flight point marker
#[derive(Debug, Clone)]
pub struct FlyingPoint {
    pub id: u64,
    pub amount: u32,
    pub from: Pos2,
    pub to: Pos2,
    /// Counter the amount lands on when the flight completes
    pub counter: String,
    pub spawned: Instant,
    pub launched: bool,
}

impl FlyingPoint {
    pub fn label(&self) -> String {
        format!("+{}", self.amount)
    }

    /// Screen position at `now`. Holds at the source until launched, then
    /// eases toward the destination over the remaining lifetime.
    pub fn pos(&self, now: Instant) -> Pos2 {
        if !self.launched {
            return self.from;
        }
        let t = self.travel_progress(now);
        // Smoothstep for a gentle accelerate/decelerate.
        let eased = t * t * (3.0 - 2.0 * t);
        self.from.lerp(self.to, eased)
    }

    /// Opacity fades out as the marker travels.
    pub fn alpha(&self, now: Instant) -> f32 {
        if !self.launched {
            return 1.0;
        }
        (1.0 - self.travel_progress(now)).clamp(0.0, 1.0)
    }

    fn travel_progress(&self, now: Instant) -> f32 {
        let travel = (LIFETIME - LAUNCH_DELAY).as_secs_f32();
        let elapsed = now
            .duration_since(self.spawned)
            .as_secs_f32()
            - LAUNCH_DELAY.as_secs_f32();
        (elapsed / travel).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(t0: Instant) -> FlyingPoint {
        FlyingPoint {
            id: 1,
            amount: 50,
            from: Pos2::new(0.0, 0.0),
            to: Pos2::new(100.0, 200.0),
            counter: "points:1".to_string(),
            spawned: t0,
            launched: false,
        }
    }

    #[test]
    fn test_holds_at_source_before_launch() {
        let t0 = Instant::now();
        let f = flight(t0);
        assert_eq!(f.pos(t0 + Duration::from_millis(40)), f.from);
        assert_eq!(f.alpha(t0 + Duration::from_millis(40)), 1.0);
    }

    #[test]
    fn test_arrives_at_destination() {
        let t0 = Instant::now();
        let mut f = flight(t0);
        f.launched = true;

        let arrived = f.pos(t0 + LIFETIME);
        assert!((arrived - f.to).length() < 1e-3);
        assert_eq!(f.alpha(t0 + LIFETIME), 0.0);
    }

    #[test]
    fn test_label() {
        assert_eq!(flight(Instant::now()).label(), "+50");
    }
}

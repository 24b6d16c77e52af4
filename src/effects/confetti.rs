//! Confetti particles
//!
//! A burst spawns a fixed number of particles radiating outward at equal
//! angular spacing, each with a randomized speed and a color drawn from a
//! fixed palette. Particles self-expire after a fixed lifetime.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use egui::{Color32, Pos2, Vec2};
use rand::Rng;

pub const PARTICLES_PER_BURST: usize = 30;
pub const PARTICLE_LIFETIME: Duration = Duration::from_millis(1000);

const MIN_SPEED: f32 = 100.0;
const MAX_SPEED: f32 = 200.0;

/// Fixed confetti palette
const PALETTE: [Color32; 8] = [
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 255, 0),
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(255, 255, 0),
    Color32::from_rgb(255, 0, 255),
    Color32::from_rgb(0, 255, 255),
    Color32::from_rgb(255, 165, 0),
    Color32::from_rgb(255, 20, 147),
];

/// One confetti particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    origin: Pos2,
    velocity: Vec2,
    color: Color32,
    spawned: Instant,
}

impl Particle {
    pub fn is_alive(&self, now: Instant) -> bool {
        now.duration_since(self.spawned) < PARTICLE_LIFETIME
    }

    /// Screen position at `now`, drifting outward from the origin.
    pub fn pos(&self, now: Instant) -> Pos2 {
        let t = now.duration_since(self.spawned).as_secs_f32();
        self.origin + self.velocity * t
    }

    /// Fades linearly over the lifetime.
    pub fn color(&self, now: Instant) -> Color32 {
        let t = now.duration_since(self.spawned).as_secs_f32()
            / PARTICLE_LIFETIME.as_secs_f32();
        self.color.gamma_multiply((1.0 - t).clamp(0.0, 1.0))
    }

    #[cfg(test)]
    pub(crate) fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

/// Spawn one full burst centered at `center`.
pub fn burst(center: Pos2, spawned: Instant, rng: &mut impl Rng) -> Vec<Particle> {
    (0..PARTICLES_PER_BURST)
        .map(|i| {
            let angle = TAU * i as f32 / PARTICLES_PER_BURST as f32;
            let speed = rng.gen_range(MIN_SPEED..MAX_SPEED);
            Particle {
                origin: center,
                velocity: Vec2::angled(angle) * speed,
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
                spawned,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_burst_size_and_speed_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = burst(Pos2::new(100.0, 100.0), Instant::now(), &mut rng);
        assert_eq!(particles.len(), PARTICLES_PER_BURST);

        for p in &particles {
            let speed = p.velocity().length();
            assert!((MIN_SPEED..MAX_SPEED).contains(&speed), "speed {}", speed);
        }
    }

    #[test]
    fn test_equal_angular_spacing() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = burst(Pos2::ZERO, Instant::now(), &mut rng);

        for (i, p) in particles.iter().enumerate() {
            let expected = TAU * i as f32 / PARTICLES_PER_BURST as f32;
            let actual = p.velocity().angle().rem_euclid(TAU);
            let diff = (actual - expected.rem_euclid(TAU)).abs();
            assert!(diff < 1e-3 || (diff - TAU).abs() < 1e-3, "particle {}", i);
        }
    }

    #[test]
    fn test_lifetime() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let particles = burst(Pos2::ZERO, t0, &mut rng);

        for p in &particles {
            assert!(p.is_alive(t0));
            assert!(p.is_alive(t0 + Duration::from_millis(999)));
            assert!(!p.is_alive(t0 + PARTICLE_LIFETIME));
        }
    }

    #[test]
    fn test_particles_move_outward() {
        let center = Pos2::new(50.0, 50.0);
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let particles = burst(center, t0, &mut rng);

        let later = t0 + Duration::from_millis(500);
        for p in &particles {
            let d0 = (p.pos(t0) - center).length();
            let d1 = (p.pos(later) - center).length();
            assert!(d1 > d0);
        }
    }
}

//! Celebration effects engine
//!
//! Translates trigger events (task completed, streak milestone, reward
//! claimed, level-up) into time-ordered sequences of visual mutations.
//! Every trigger schedules work and returns immediately; the GUI ticks the
//! engine once per frame and renders whatever is in flight.
//!
//! Effects are presentation-only: missing anchors, unknown themes, and
//! blocked audio degrade silently and never reach the caller.

mod confetti;
mod counter;
mod engine;
mod flight;
mod milestones;
mod scheduler;
mod shake;
mod sound;
mod toast;

pub use confetti::{PARTICLES_PER_BURST, PARTICLE_LIFETIME, Particle};
pub use counter::CounterState;
pub use engine::{DEFAULT_FIREWORK_BURSTS, EffectsEngine, HIGH_VALUE_POINTS};
pub use flight::FlyingPoint;
pub use milestones::{
    POINT_MILESTONES, STREAK_MILESTONES, is_point_milestone, is_streak_milestone,
    session_streak_fires,
};
pub use scheduler::Scheduler;
pub use shake::{SHAKE_DURATION, ShakeState};
pub use sound::{NullPlayer, SoundPlayer, default_player};
pub use toast::{Toast, ToastStyle};

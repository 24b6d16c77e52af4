//! The effects engine
//!
//! Owns all in-flight effect state: scheduled steps, confetti particles,
//! flying point markers, counter tweens, the shake depth, and the toast
//! queue. Trigger operations push state and scheduled steps, then return;
//! `tick` advances everything once per frame.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use egui::{Id, Pos2, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::themes;

use super::confetti::{self, Particle};
use super::counter::CounterState;
use super::flight::{self, FlyingPoint};
use super::milestones;
use super::scheduler::Scheduler;
use super::shake::{SHAKE_DURATION, ShakeState};
use super::sound::{SoundPlayer, default_player};
use super::toast::{Toast, ToastStyle};

/// Point value at which a completion also shakes the screen
pub const HIGH_VALUE_POINTS: u32 = 100;
/// How long the completed control stays visually emphasized
pub const EMPHASIS_DURATION: Duration = Duration::from_millis(600);
/// Number of bursts in a default fireworks show
pub const DEFAULT_FIREWORK_BURSTS: u32 = 5;

const FIREWORKS_INTERVAL: Duration = Duration::from_millis(300);
const MULTI_BURST_STAGGER: Duration = Duration::from_millis(200);
const STREAK_TOAST_DURATION: Duration = Duration::from_millis(5000);
const LEVEL_UP_TOAST_DURATION: Duration = Duration::from_millis(4000);
const REWARD_TOAST_DURATION: Duration = Duration::from_millis(4000);
const SESSION_STREAK_TOAST_DURATION: Duration = Duration::from_millis(2500);

/// A deferred step within an effect sequence
#[derive(Debug, Clone, PartialEq)]
enum Step {
    /// Start a flying point moving toward its destination
    LaunchFlight(u64),
    /// Remove a flying point and land its amount on the counter
    FinishFlight(u64),
    /// Decrement the shake depth
    ReleaseShake,
    /// Spawn a confetti burst at a fixed position
    Burst(Pos2),
}

pub struct EffectsEngine {
    scheduler: Scheduler<Step>,
    particles: Vec<Particle>,
    flights: Vec<FlyingPoint>,
    counters: HashMap<String, CounterState>,
    shake: ShakeState,
    toasts: Vec<Toast>,
    emphasized: HashMap<Id, Instant>,
    sounds: Box<dyn SoundPlayer>,
    sound_enabled: bool,
    volume: f32,
    rng: StdRng,
    next_flight_id: u64,
}

impl EffectsEngine {
    pub fn new() -> Self {
        Self::with_player(default_player())
    }

    /// Build with an explicit sound seam (headless runs, tests).
    pub fn with_player(sounds: Box<dyn SoundPlayer>) -> Self {
        Self {
            scheduler: Scheduler::new(),
            particles: Vec::new(),
            flights: Vec::new(),
            counters: HashMap::new(),
            shake: ShakeState::default(),
            toasts: Vec::new(),
            emphasized: HashMap::new(),
            sounds,
            sound_enabled: true,
            volume: 0.5,
            rng: StdRng::from_entropy(),
            next_flight_id: 0,
        }
    }

    pub fn set_sound(&mut self, enabled: bool, volume: f32) {
        self.sound_enabled = enabled;
        self.volume = volume.clamp(0.0, 1.0);
    }

    // ── Counters ────────────────────────────────────────────────────────

    /// Register a counter with its initial display text. Re-registering an
    /// existing counter is a no-op so live state survives re-renders.
    pub fn register_counter(&mut self, key: &str, text: &str) {
        self.counters
            .entry(key.to_string())
            .or_insert_with(|| CounterState::new(text));
    }

    /// Replace a counter's display outright, dropping any queued tween.
    /// Used when a total moves backwards (e.g. points spent on a reward).
    pub fn reset_counter(&mut self, key: &str, text: &str) {
        self.counters.insert(key.to_string(), CounterState::new(text));
    }

    pub fn counter_display(&self, key: &str) -> Option<&str> {
        self.counters.get(key).map(|c| c.display())
    }

    pub fn counter_is_pulsing(&self, key: &str, now: Instant) -> bool {
        self.counters
            .get(key)
            .is_some_and(|c| c.is_pulsing(now))
    }

    /// Queue a counter increment. An unregistered key is a lookup miss:
    /// the counter starts from an empty display (which parses as 0).
    pub fn counter_increment(&mut self, key: &str, delta: u32, now: Instant) {
        let counter = self.counters.entry(key.to_string()).or_insert_with(|| {
            debug!("counter {} not registered, starting from 0", key);
            CounterState::new("")
        });
        counter.enqueue(delta as i64, now);
    }

    // ── Trigger operations ──────────────────────────────────────────────

    /// Fly `amount` points from `from` to `to`, then increment `counter`.
    pub fn animate_points(
        &mut self,
        amount: u32,
        from: Pos2,
        to: Pos2,
        counter: &str,
        now: Instant,
    ) {
        let id = self.next_flight_id;
        self.next_flight_id += 1;

        self.flights.push(FlyingPoint {
            id,
            amount,
            from,
            to,
            counter: counter.to_string(),
            spawned: now,
            launched: false,
        });

        // The launch step is scheduled before the removal step; the
        // scheduler guarantees it also runs first.
        self.scheduler
            .schedule(now + flight::LAUNCH_DELAY, Step::LaunchFlight(id));
        self.scheduler
            .schedule(now + flight::LIFETIME, Step::FinishFlight(id));
    }

    /// Spawn a confetti burst centered at `center`.
    pub fn confetti_burst(&mut self, center: Pos2, now: Instant) {
        self.particles
            .extend(confetti::burst(center, now, &mut self.rng));
    }

    /// Shake the viewport for the standard duration.
    pub fn screen_shake(&mut self, now: Instant) {
        self.shake.begin();
        self.scheduler
            .schedule(now + SHAKE_DURATION, Step::ReleaseShake);
    }

    /// Show a toast with an explicit style and duration.
    pub fn show_toast(
        &mut self,
        message: impl Into<String>,
        style: ToastStyle,
        duration: Duration,
        now: Instant,
    ) {
        self.toasts.push(Toast::new(message, style, duration, now));
    }

    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Composite celebration for a completed task: emphasis cue on the
    /// control, confetti at its center, a shake for high-value tasks, and
    /// the theme's task-complete sound.
    pub fn celebrate(
        &mut self,
        control: Id,
        control_rect: Rect,
        points: u32,
        theme_name: &str,
        now: Instant,
    ) {
        self.emphasized.insert(control, now);
        self.confetti_burst(control_rect.center(), now);

        if points >= HIGH_VALUE_POINTS {
            self.screen_shake(now);
        }

        let theme = themes::get_theme(theme_name);
        self.play_sound(theme.sounds.task_complete);
    }

    /// Big celebration when a streak hits a milestone; no-op otherwise.
    pub fn streak_milestone(&mut self, streak: u32, viewport: Rect, now: Instant) {
        if !milestones::is_streak_milestone(streak) {
            return;
        }

        self.confetti_burst(viewport.center(), now);
        self.show_toast(
            format!("🔥 {} DAY STREAK! YOU'RE ON FIRE! 🔥", streak),
            ToastStyle::Celebration,
            STREAK_TOAST_DURATION,
            now,
        );
        self.screen_shake(now);

        // Two staggered follow-up bursts for a multi-burst effect.
        let y = viewport.center().y;
        let left = Pos2::new(viewport.left() + viewport.width() / 3.0, y);
        let right = Pos2::new(viewport.left() + viewport.width() * 2.0 / 3.0, y);
        self.scheduler
            .schedule(now + MULTI_BURST_STAGGER, Step::Burst(left));
        self.scheduler
            .schedule(now + MULTI_BURST_STAGGER * 2, Step::Burst(right));
    }

    /// Celebration when a lifetime total lands exactly on a point
    /// milestone; no-op otherwise.
    pub fn level_up(&mut self, new_total: u32, viewport: Rect, now: Instant) {
        if !milestones::is_point_milestone(new_total) {
            return;
        }

        let top_center = Pos2::new(viewport.center().x, viewport.top() + 100.0);
        self.confetti_burst(top_center, now);
        self.show_toast(
            format!("⭐ LEVEL UP! {} Total Points! ⭐", new_total),
            ToastStyle::Celebration,
            LEVEL_UP_TOAST_DURATION,
            now,
        );
    }

    /// Celebration for a claimed reward.
    pub fn reward_claimed(&mut self, name: &str, icon: &str, viewport: Rect, now: Instant) {
        self.confetti_burst(viewport.center(), now);
        self.show_toast(
            format!("{} {} Claimed! {}", icon, name, icon),
            ToastStyle::Celebration,
            REWARD_TOAST_DURATION,
            now,
        );
        self.screen_shake(now);
    }

    /// Nudge for consecutive completions within one session.
    pub fn task_streak(&mut self, count: u32, now: Instant) {
        if !milestones::session_streak_fires(count) {
            return;
        }
        self.show_toast(
            format!("🔥 {} Tasks in a Row! Keep going! 🔥", count),
            ToastStyle::Celebration,
            SESSION_STREAK_TOAST_DURATION,
            now,
        );
    }

    /// Staggered bursts at random positions across the upper half of the
    /// viewport.
    pub fn fireworks(&mut self, count: u32, viewport: Rect, now: Instant) {
        for i in 0..count {
            let x = self.rng.gen_range(viewport.left()..viewport.right());
            let y = self
                .rng
                .gen_range(viewport.top()..viewport.top() + viewport.height() / 2.0);
            self.scheduler
                .schedule(now + FIREWORKS_INTERVAL * i, Step::Burst(Pos2::new(x, y)));
        }
    }

    fn play_sound(&mut self, path: &str) {
        if self.sound_enabled {
            self.sounds.play(path, self.volume);
        }
    }

    // ── Per-frame advance ───────────────────────────────────────────────

    /// Run due steps and age out finished effects. Call once per frame.
    ///
    /// Steps run with their due timestamp, not the tick timestamp: a step
    /// picked up late spawns effects as of when it was due, so a stalled
    /// frame cannot extend an effect's lifetime.
    pub fn tick(&mut self, now: Instant) {
        while let Some((due, step)) = self.scheduler.pop_due(now) {
            self.apply(step, due);
        }

        self.particles.retain(|p| p.is_alive(now));
        for counter in self.counters.values_mut() {
            counter.tick(now);
        }
        self.toasts.retain(|t| !t.is_expired(now));
        self.emphasized
            .retain(|_, started| now.duration_since(*started) < EMPHASIS_DURATION);
    }

    fn apply(&mut self, step: Step, due: Instant) {
        match step {
            Step::LaunchFlight(id) => {
                if let Some(flight) = self.flights.iter_mut().find(|f| f.id == id) {
                    flight.launched = true;
                }
            }
            Step::FinishFlight(id) => {
                if let Some(index) = self.flights.iter().position(|f| f.id == id) {
                    let flight = self.flights.swap_remove(index);
                    self.counter_increment(&flight.counter, flight.amount, due);
                }
            }
            Step::ReleaseShake => self.shake.release(),
            Step::Burst(pos) => self.confetti_burst(pos, due),
        }
    }

    /// Whether anything is still animating (the GUI keeps repainting
    /// while this is true).
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.scheduler.is_empty()
            || !self.particles.is_empty()
            || !self.flights.is_empty()
            || !self.toasts.is_empty()
            || self.shake.is_active()
            || self.counters.values().any(|c| c.is_animating())
            || self
                .emphasized
                .values()
                .any(|started| now.duration_since(*started) < EMPHASIS_DURATION)
    }

    // ── Render accessors ────────────────────────────────────────────────

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn flights(&self) -> &[FlyingPoint] {
        &self.flights
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn shake_offset(&self, time: f64) -> egui::Vec2 {
        self.shake.offset(time)
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_active()
    }

    pub fn is_emphasized(&self, control: Id, now: Instant) -> bool {
        self.emphasized
            .get(&control)
            .is_some_and(|started| now.duration_since(*started) < EMPHASIS_DURATION)
    }
}

impl Default for EffectsEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records playback attempts instead of touching an audio device.
    struct RecordingPlayer {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl SoundPlayer for RecordingPlayer {
        fn play(&self, path: &str, _volume: f32) {
            self.calls.borrow_mut().push(path.to_string());
        }
    }

    fn engine_with_recorder() -> (EffectsEngine, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let player = RecordingPlayer {
            calls: Rc::clone(&calls),
        };
        (EffectsEngine::with_player(Box::new(player)), calls)
    }

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, egui::Vec2::new(1200.0, 800.0))
    }

    fn button_rect() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 100.0), egui::Vec2::new(120.0, 40.0))
    }

    #[test]
    fn test_celebrate_high_value_shakes_and_plays_sound() {
        let (mut engine, calls) = engine_with_recorder();
        let t0 = Instant::now();

        engine.celebrate(Id::new("btn"), button_rect(), 150, "minecraft", t0);

        assert_eq!(engine.particles().len(), confetti::PARTICLES_PER_BURST);
        assert!(engine.is_shaking());
        assert_eq!(
            calls.borrow().as_slice(),
            ["/static/sounds/minecraft-ding.mp3"]
        );
        assert!(engine.is_emphasized(Id::new("btn"), t0));
    }

    #[test]
    fn test_celebrate_low_value_does_not_shake() {
        let (mut engine, calls) = engine_with_recorder();
        let t0 = Instant::now();

        engine.celebrate(Id::new("btn"), button_rect(), 50, "default", t0);

        assert_eq!(engine.particles().len(), confetti::PARTICLES_PER_BURST);
        assert!(!engine.is_shaking());
        assert_eq!(
            calls.borrow().as_slice(),
            ["/static/sounds/default-ding.mp3"]
        );
    }

    #[test]
    fn test_celebrate_unknown_theme_uses_default_sound() {
        let (mut engine, calls) = engine_with_recorder();
        engine.celebrate(
            Id::new("btn"),
            button_rect(),
            10,
            "not-a-theme",
            Instant::now(),
        );
        assert_eq!(
            calls.borrow().as_slice(),
            ["/static/sounds/default-ding.mp3"]
        );
    }

    #[test]
    fn test_sound_disabled_suppresses_playback() {
        let (mut engine, calls) = engine_with_recorder();
        engine.set_sound(false, 0.5);
        engine.celebrate(Id::new("btn"), button_rect(), 10, "mario", Instant::now());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_shake_releases_after_duration() {
        let (mut engine, _) = engine_with_recorder();
        let t0 = Instant::now();

        engine.screen_shake(t0);
        engine.tick(t0);
        assert!(engine.is_shaking());

        engine.tick(t0 + SHAKE_DURATION);
        assert!(!engine.is_shaking());
    }

    #[test]
    fn test_overlapping_shakes_extend_to_last_release() {
        let (mut engine, _) = engine_with_recorder();
        let t0 = Instant::now();

        engine.screen_shake(t0);
        engine.screen_shake(t0 + Duration::from_millis(200));

        engine.tick(t0 + Duration::from_millis(500));
        assert!(engine.is_shaking(), "second trigger still outstanding");

        engine.tick(t0 + Duration::from_millis(700));
        assert!(!engine.is_shaking());
    }

    #[test]
    fn test_point_flight_lands_on_counter() {
        let (mut engine, _) = engine_with_recorder();
        let t0 = Instant::now();

        engine.register_counter("points:1", "450");
        engine.animate_points(
            50,
            Pos2::new(100.0, 100.0),
            Pos2::new(900.0, 40.0),
            "points:1",
            t0,
        );

        // Before the launch delay the marker holds at the source.
        engine.tick(t0 + Duration::from_millis(40));
        assert!(!engine.flights()[0].launched);

        engine.tick(t0 + Duration::from_millis(60));
        assert!(engine.flights()[0].launched);

        // Arrival removes the marker and starts the counter tween.
        engine.tick(t0 + Duration::from_millis(1000));
        assert!(engine.flights().is_empty());

        engine.tick(t0 + Duration::from_millis(1500));
        assert_eq!(engine.counter_display("points:1"), Some("500"));
    }

    #[test]
    fn test_unregistered_counter_defaults_to_zero() {
        let (mut engine, _) = engine_with_recorder();
        let t0 = Instant::now();

        engine.counter_increment("missing", 25, t0);
        engine.tick(t0 + Duration::from_millis(500));
        assert_eq!(engine.counter_display("missing"), Some("25"));
    }

    #[test]
    fn test_streak_milestone_multi_burst() {
        let (mut engine, _) = engine_with_recorder();
        let t0 = Instant::now();

        engine.streak_milestone(7, viewport(), t0);
        engine.tick(t0);
        assert_eq!(engine.particles().len(), 30);
        assert_eq!(engine.toasts().len(), 1);
        assert!(engine.is_shaking());

        engine.tick(t0 + Duration::from_millis(200));
        assert_eq!(engine.particles().len(), 60);

        engine.tick(t0 + Duration::from_millis(400));
        assert_eq!(engine.particles().len(), 90);

        // All three bursts expire within their own lifetime windows.
        engine.tick(t0 + Duration::from_millis(1500));
        assert!(engine.particles().is_empty());
    }

    #[test]
    fn test_streak_non_milestone_is_noop() {
        let (mut engine, _) = engine_with_recorder();
        let t0 = Instant::now();

        for streak in [1, 2, 4, 8, 15, 101] {
            engine.streak_milestone(streak, viewport(), t0);
        }
        engine.tick(t0);
        assert!(engine.particles().is_empty());
        assert!(engine.toasts().is_empty());
        assert!(!engine.is_shaking());
    }

    #[test]
    fn test_level_up_fires_only_on_exact_milestone() {
        let (mut engine, _) = engine_with_recorder();
        let t0 = Instant::now();

        engine.level_up(99, viewport(), t0);
        engine.level_up(101, viewport(), t0);
        assert!(engine.toasts().is_empty());

        engine.level_up(250, viewport(), t0);
        assert_eq!(engine.toasts().len(), 1);
        assert_eq!(engine.particles().len(), 30);
        assert!(!engine.is_shaking(), "level-up has no shake");
    }

    #[test]
    fn test_task_streak_rule() {
        let (mut engine, _) = engine_with_recorder();
        let t0 = Instant::now();

        engine.task_streak(1, t0);
        engine.task_streak(2, t0);
        engine.task_streak(4, t0);
        assert!(engine.toasts().is_empty());

        engine.task_streak(3, t0);
        engine.task_streak(6, t0);
        assert_eq!(engine.toasts().len(), 2);
    }

    #[test]
    fn test_fireworks_stagger() {
        let (mut engine, _) = engine_with_recorder();
        let t0 = Instant::now();

        engine.fireworks(DEFAULT_FIREWORK_BURSTS, viewport(), t0);

        engine.tick(t0);
        assert_eq!(engine.particles().len(), 30, "first burst is immediate");

        engine.tick(t0 + Duration::from_millis(950));
        // Bursts at 0/300/600/900 ms have fired; the first is about to
        // expire but has not yet.
        assert_eq!(engine.particles().len(), 120);

        engine.tick(t0 + Duration::from_millis(2300));
        assert!(engine.particles().is_empty());
        assert!(!engine.is_animating(t0 + Duration::from_millis(2300)));
    }

    #[test]
    fn test_late_tick_does_not_extend_particle_lifetimes() {
        let (mut engine, _) = engine_with_recorder();
        let t0 = Instant::now();

        engine.fireworks(DEFAULT_FIREWORK_BURSTS, viewport(), t0);

        // A single stalled tick long after the last burst was due: every
        // burst spawns as of its due time and is already past its
        // lifetime, so nothing survives the same tick.
        let late = t0 + Duration::from_millis(2300);
        engine.tick(late);
        assert!(engine.particles().is_empty());
        assert!(!engine.is_animating(late));
    }

    #[test]
    fn test_late_tick_backdates_counter_tween_to_arrival() {
        let (mut engine, _) = engine_with_recorder();
        let t0 = Instant::now();

        engine.register_counter("points:1", "100");
        engine.animate_points(
            50,
            Pos2::new(0.0, 0.0),
            Pos2::new(100.0, 100.0),
            "points:1",
            t0,
        );

        // First tick happens well after the arrival step was due. The
        // tween starts at the arrival instant, so it has already run its
        // full duration and snapped.
        engine.tick(t0 + Duration::from_millis(1600));
        assert!(engine.flights().is_empty());
        assert_eq!(engine.counter_display("points:1"), Some("150"));
    }

    #[test]
    fn test_reward_claimed() {
        let (mut engine, _) = engine_with_recorder();
        let t0 = Instant::now();

        engine.reward_claimed("Movie Night", "🎬", viewport(), t0);
        assert_eq!(engine.particles().len(), 30);
        assert_eq!(engine.toasts().len(), 1);
        assert!(engine.toasts()[0].message.contains("Movie Night"));
        assert!(engine.is_shaking());
    }
}

//! Application state and frame loop

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use egui::{self, Pos2, Rect};
use tracing::{info, warn};

use crate::config::Settings;
use crate::effects::{DEFAULT_FIREWORK_BURSTS, EffectsEngine, Toast, ToastStyle};
use crate::net::{ApiClient, ChildRecord, FamilyOverview, TaskItem};
use crate::stats::{ChildStats, DailyProgress};
use crate::themes;

/// Rewards shown in serverless mode: (name, icon, point cost)
const SAMPLE_REWARDS: &[(&str, &str, u32)] = &[
    ("Movie Night", "🎬", 500),
    ("Ice Cream Trip", "🍦", 200),
    ("Extra Screen Time", "🎮", 300),
];

pub struct ChoreStarApp {
    pub(super) settings: Settings,
    pub(super) engine: EffectsEngine,
    pub(super) family: FamilyOverview,
    api: Option<ApiClient>,

    /// Consecutive completions per child within this session
    pub(super) session_streaks: HashMap<u64, u32>,
    /// Screen position of each child's points counter, refreshed every
    /// frame so point flights know where to land
    pub(super) counter_anchors: HashMap<String, Pos2>,
    /// Children whose daily streak already advanced this session
    streak_bumped: HashSet<u64>,
    /// Children whose all-tasks-done fireworks already ran today
    fireworks_fired: HashSet<u64>,
}

impl ChoreStarApp {
    pub fn new(settings: Settings) -> Self {
        let api = settings.has_server().then(|| {
            ApiClient::new(
                settings.server_url.clone(),
                Duration::from_secs(settings.request_timeout_secs),
            )
        });

        let mut engine = EffectsEngine::new();
        engine.set_sound(settings.sound_enabled, settings.volume);

        let mut app = Self {
            settings,
            engine,
            family: sample_family(),
            api,
            session_streaks: HashMap::new(),
            counter_anchors: HashMap::new(),
            streak_bumped: HashSet::new(),
            fireworks_fired: HashSet::new(),
        };
        app.refresh_family();
        app
    }

    /// Fetch the family overview from the server, if one is configured.
    /// Failures keep the current data and surface an error toast.
    pub(super) fn refresh_family(&mut self) {
        let Some(api) = &self.api else {
            info!("no server configured, using sample family");
            return;
        };

        match api.family_overview() {
            Ok(overview) => {
                info!(children = overview.children.len(), "family overview loaded");
                self.family = overview;
            }
            Err(e) => {
                warn!("family overview fetch failed: {}", e);
                self.engine
                    .push_toast(Toast::error(e.user_message(), Instant::now()));
            }
        }
    }

    /// Everything that happens when a task's Done button is pressed.
    pub(super) fn complete_task(
        &mut self,
        child_index: usize,
        task_index: usize,
        button_rect: Rect,
        viewport: Rect,
        now: Instant,
    ) {
        let child = &self.family.children[child_index];
        let child_id = child.id;
        let task = &child.tasks[task_index];
        let task_id = task.id;
        let theme_name = child.theme.clone();

        // Server first: a rejected completion changes nothing locally.
        let (awarded, streak) = if let Some(api) = &self.api {
            match api.complete_task(child_id, task_id) {
                Ok(outcome) => (outcome.awarded, outcome.streak),
                Err(e) => {
                    warn!("task completion rejected: {}", e);
                    self.engine
                        .push_toast(Toast::error(e.user_message(), now));
                    return;
                }
            }
        } else {
            let bumped = if self.streak_bumped.insert(child_id) {
                child.stats.current_streak + 1
            } else {
                child.stats.current_streak
            };
            (task.points, bumped)
        };

        let child = &mut self.family.children[child_index];
        child.tasks[task_index].completed = true;
        child.today.completed += 1;
        child.stats.tasks_completed += 1;
        child.stats.lifetime_points += awarded;
        let streak_advanced = streak > child.stats.current_streak;
        child.stats.current_streak = streak;
        let new_total = child.stats.lifetime_points;
        let all_done = child.today.total > 0 && child.today.completed >= child.today.total;

        // Celebration sequence, in the order the user perceives it.
        let button_id = egui::Id::new(("task_done", child_id, task_id));
        self.engine
            .celebrate(button_id, button_rect, awarded, &theme_name, now);

        let counter_key = counter_key(child_id);
        match self.counter_anchors.get(&counter_key) {
            Some(anchor) => {
                self.engine
                    .animate_points(awarded, button_rect.center(), *anchor, &counter_key, now);
            }
            // No visible counter this frame: skip the flight, keep the score.
            None => self.engine.counter_increment(&counter_key, awarded, now),
        }

        let session = self.session_streaks.entry(child_id).or_insert(0);
        *session += 1;
        let session = *session;
        self.engine.task_streak(session, now);

        self.engine.level_up(new_total, viewport, now);

        if streak_advanced {
            self.engine.streak_milestone(streak, viewport, now);
        }

        if all_done && self.fireworks_fired.insert(child_id) {
            self.engine
                .fireworks(DEFAULT_FIREWORK_BURSTS, viewport, now);
            self.engine.show_toast(
                "🌟 All tasks done today! 🌟",
                ToastStyle::Celebration,
                Duration::from_millis(4000),
                now,
            );
        }
    }

    pub(super) fn claim_reward(
        &mut self,
        child_index: usize,
        reward_index: usize,
        viewport: Rect,
        now: Instant,
    ) {
        let (name, icon, cost) = SAMPLE_REWARDS[reward_index];
        let child = &mut self.family.children[child_index];

        if child.stats.lifetime_points < cost {
            self.engine.push_toast(Toast::info(
                format!("Not enough points for {} yet", name),
                now,
            ));
            return;
        }

        if let Some(api) = &self.api {
            if let Err(e) = api.claim_reward(child.id, reward_index as u64) {
                warn!("reward claim rejected: {}", e);
                self.engine.push_toast(Toast::error(e.user_message(), now));
                return;
            }
        }

        child.stats.lifetime_points -= cost;
        let counter_key = counter_key(child.id);
        // Counters only tween forward; a spend re-registers the display.
        self.engine.reset_counter(
            &counter_key,
            &crate::stats::format_points(child.stats.lifetime_points),
        );

        self.engine.reward_claimed(name, icon, viewport, now);
    }

    pub(super) fn rewards(&self) -> &'static [(&'static str, &'static str, u32)] {
        SAMPLE_REWARDS
    }
}

impl eframe::App for ChoreStarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        themes::apply_theme(ctx, &self.settings.theme);
        self.engine.tick(now);

        self.render_header(ctx);

        // The shake displaces the whole panel by skewing its margins.
        let offset = self
            .engine
            .shake_offset(ctx.input(|i| i.time));
        let margin = egui::Margin {
            left: (12.0 + offset.x) as i8,
            right: (12.0 - offset.x) as i8,
            top: (12.0 + offset.y) as i8,
            bottom: (12.0 - offset.y) as i8,
        };

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(super::chrome::BG_PRIMARY)
                    .inner_margin(margin),
            )
            .show(ctx, |ui| {
                self.render_dashboard(ui, now);
            });

        super::overlay::render_overlay(ctx, &self.engine, now);
        super::toasts::render_toasts(ctx, &self.engine, now);

        if self.engine.is_animating(now) {
            ctx.request_repaint();
        }
    }
}

pub(super) fn counter_key(child_id: u64) -> String {
    format!("points:{}", child_id)
}

/// Seed data for running without a backend.
fn sample_family() -> FamilyOverview {
    FamilyOverview {
        family_name: "The Parkers".to_string(),
        join_code: "STAR-4821".to_string(),
        pending_approvals: 1,
        children: vec![
            ChildRecord {
                id: 1,
                name: "Maya".to_string(),
                avatar: "minecraft_steve".to_string(),
                theme: "minecraft".to_string(),
                stats: ChildStats {
                    current_streak: 6,
                    lifetime_points: 950,
                    tasks_completed: 54,
                    kindness_acts: 3,
                },
                today: DailyProgress {
                    completed: 1,
                    total: 4,
                },
                tasks: vec![
                    sample_task(11, "Make Bed", "🛏️", 10, true),
                    sample_task(12, "Eat Breakfast", "🍳", 5, false),
                    sample_task(13, "Brush Teeth", "🦷", 5, false),
                    sample_task(14, "Do Homework", "📚", 150, false),
                ],
            },
            ChildRecord {
                id: 2,
                name: "Leo".to_string(),
                avatar: "pokemon_pikachu".to_string(),
                theme: "pokemon".to_string(),
                stats: ChildStats {
                    current_streak: 2,
                    lifetime_points: 240,
                    tasks_completed: 18,
                    kindness_acts: 1,
                },
                today: DailyProgress {
                    completed: 0,
                    total: 3,
                },
                tasks: vec![
                    sample_task(21, "Feed the Dog", "🐕", 15, false),
                    sample_task(22, "Tidy Room", "🧹", 20, false),
                    sample_task(23, "Help Someone", "💝", 25, false),
                ],
            },
        ],
    }
}

fn sample_task(id: u64, title: &str, icon: &str, points: u32, completed: bool) -> TaskItem {
    TaskItem {
        id,
        title: title.to_string(),
        icon: icon.to_string(),
        points,
        completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_family_is_well_formed() {
        let family = sample_family();
        assert_eq!(family.children.len(), 2);
        for child in &family.children {
            assert!(!child.theme.is_empty());
            assert!(
                child.tasks.len() as u32 >= child.today.total - child.today.completed,
                "{} has fewer tasks than remaining slots",
                child.name
            );
        }
    }

    #[test]
    fn test_counter_keys_are_distinct_per_child() {
        assert_ne!(counter_key(1), counter_key(2));
    }
}

//! Family dashboard
//!
//! One card per child, showing their theme, avatar, animated points
//! counter, streak, daily progress, task list, and claimable rewards.

use std::time::Instant;

use egui::{self, Rect, RichText, ScrollArea, Ui};

use crate::stats::format_points;
use crate::themes::{self, Avatar, Theme};

use super::app::{ChoreStarApp, counter_key};
use super::chrome;
use super::widgets::{accent_button, chip, icon_button, progress_bar};

/// Deferred click, applied after rendering so the borrow of the family
/// list has ended.
enum Action {
    CompleteTask {
        child: usize,
        task: usize,
        button_rect: Rect,
    },
    ClaimReward {
        child: usize,
        reward: usize,
    },
}

impl ChoreStarApp {
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::NONE
                    .fill(chrome::BG_CARD)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("⭐ {}", self.family.family_name))
                            .color(chrome::TEXT_PRIMARY)
                            .strong()
                            .size(18.0),
                    );

                    chip(
                        ui,
                        format!("Join code: {}", self.family.join_code),
                        chrome::TEXT_DIM,
                    );
                    chip(
                        ui,
                        format!("{} children", self.family.children.len()),
                        chrome::TEXT_DIM,
                    );
                    if self.family.pending_approvals > 0 {
                        chip(
                            ui,
                            format!("{} awaiting approval", self.family.pending_approvals),
                            chrome::WARNING,
                        );
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut selected = self.settings.theme.clone();
                        egui::ComboBox::from_id_salt("chrome_theme")
                            .selected_text(themes::get_theme(&selected).display_name)
                            .show_ui(ui, |ui| {
                                for name in themes::all_theme_names() {
                                    ui.selectable_value(
                                        &mut selected,
                                        name.to_string(),
                                        themes::get_theme(name).display_name,
                                    );
                                }
                            });
                        if selected != self.settings.theme {
                            self.settings.theme = selected;
                        }

                        let refresh = icon_button(
                            ui,
                            "⟳",
                            chrome::TEXT_DIM,
                            chrome::TEXT_PRIMARY,
                            "refresh_btn",
                        );
                        if refresh.on_hover_text("Refresh from server").clicked() {
                            self.refresh_family();
                        }
                    });
                });
            });
    }

    pub(super) fn render_dashboard(&mut self, ui: &mut Ui, now: Instant) {
        let viewport = ui.ctx().screen_rect();
        let mut actions: Vec<Action> = Vec::new();

        ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_top(|ui| {
                for child_index in 0..self.family.children.len() {
                    self.render_child_card(ui, child_index, now, &mut actions);
                }
            });
        });

        for action in actions {
            match action {
                Action::CompleteTask {
                    child,
                    task,
                    button_rect,
                } => self.complete_task(child, task, button_rect, viewport, now),
                Action::ClaimReward { child, reward } => {
                    self.claim_reward(child, reward, viewport, now)
                }
            }
        }
    }

    fn render_child_card(
        &mut self,
        ui: &mut Ui,
        child_index: usize,
        now: Instant,
        actions: &mut Vec<Action>,
    ) {
        let child = &self.family.children[child_index];
        let child_id = child.id;
        let theme = themes::get_theme(&child.theme);
        let key = counter_key(child_id);

        self.engine
            .register_counter(&key, &format_points(child.stats.lifetime_points));

        egui::Frame::NONE
            .fill(chrome::BG_CARD)
            .stroke(egui::Stroke::new(2.0, theme.palette.primary))
            .corner_radius(12.0)
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.set_width(340.0);

                let child = &self.family.children[child_index];

                // Identity row
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(avatar_emoji(theme, &child.theme, &child.avatar)).size(34.0),
                    );
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&child.name)
                                .color(chrome::TEXT_PRIMARY)
                                .strong()
                                .size(17.0),
                        );
                        chip(ui, theme.display_name, theme.palette.accent);
                    });
                });

                ui.add_space(6.0);

                // Points counter; the label rect is where point flights land.
                let display = self
                    .engine
                    .counter_display(&key)
                    .unwrap_or("0")
                    .to_string();
                let pulsing = self.engine.counter_is_pulsing(&key, now);
                let size = if pulsing { 26.0 } else { 22.0 };
                let color = if pulsing {
                    theme.palette.accent
                } else {
                    chrome::TEXT_PRIMARY
                };

                let response = ui.horizontal(|ui| {
                    ui.label(RichText::new(theme.icons.points).size(20.0));
                    ui.label(RichText::new(display).color(color).strong().size(size));
                    ui.label(
                        RichText::new("points")
                            .color(chrome::TEXT_DIM)
                            .size(12.0),
                    );
                });
                self.counter_anchors
                    .insert(key.clone(), response.response.rect.center());

                let child = &self.family.children[child_index];
                let (unlocked, locked) = theme.avatars_for(&child.stats);
                ui.horizontal(|ui| {
                    chip(
                        ui,
                        format!(
                            "{} {} day streak",
                            theme.icons.streak, child.stats.current_streak
                        ),
                        chrome::WARNING,
                    );
                    chip(
                        ui,
                        format!("{} done all-time", child.stats.tasks_completed),
                        chrome::TEXT_DIM,
                    );
                    chip(
                        ui,
                        format!("{}/{} avatars", unlocked.len(), theme.avatars.len()),
                        chrome::TEXT_DIM,
                    )
                    .on_hover_text(locked_avatar_hint(&locked));
                });

                ui.add_space(8.0);

                // Daily progress
                ui.label(
                    RichText::new(format!(
                        "Today: {}/{} tasks",
                        child.today.completed, child.today.total
                    ))
                    .color(chrome::TEXT_DIM)
                    .size(12.0),
                );
                progress_bar(
                    ui,
                    child.today.fraction(),
                    theme.palette.primary,
                    ("daily_progress", child_id),
                );

                ui.add_space(8.0);
                ui.separator();

                self.render_task_rows(ui, child_index, theme, now, actions);

                ui.add_space(8.0);
                ui.separator();
                self.render_reward_rows(ui, child_index, theme, actions);
            });
        ui.add_space(10.0);
    }

    fn render_task_rows(
        &mut self,
        ui: &mut Ui,
        child_index: usize,
        theme: &'static Theme,
        now: Instant,
        actions: &mut Vec<Action>,
    ) {
        let child = &self.family.children[child_index];
        let child_id = child.id;

        for task_index in 0..child.tasks.len() {
            let task = &self.family.children[child_index].tasks[task_index];
            let task_id = task.id;
            let title = task.title.clone();
            let icon = task.icon.clone();
            let points = task.points;
            let completed = task.completed;

            ui.horizontal(|ui| {
                ui.label(RichText::new(&icon).size(16.0));
                let mut text = RichText::new(&title).color(chrome::TEXT_PRIMARY).size(14.0);
                if completed {
                    text = text.color(chrome::TEXT_DIM).strikethrough();
                }
                ui.label(text);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if completed {
                        ui.label(
                            RichText::new(theme.icons.complete)
                                .color(chrome::SUCCESS)
                                .size(16.0),
                        );
                    } else {
                        let button_id = egui::Id::new(("task_done", child_id, task_id));
                        let emphasized = self.engine.is_emphasized(button_id, now);
                        let accent = if emphasized {
                            chrome::SUCCESS
                        } else {
                            theme.palette.accent
                        };

                        let response = accent_button(
                            ui,
                            "Done",
                            accent,
                            emphasized,
                            ("task_btn", child_id, task_id),
                        );
                        if response.clicked() {
                            actions.push(Action::CompleteTask {
                                child: child_index,
                                task: task_index,
                                button_rect: response.rect,
                            });
                        }
                        chip(ui, format!("+{}", points), theme.palette.primary);
                    }
                });
            });
        }
    }

    fn render_reward_rows(
        &mut self,
        ui: &mut Ui,
        child_index: usize,
        theme: &'static Theme,
        actions: &mut Vec<Action>,
    ) {
        let balance = self.family.children[child_index].stats.lifetime_points;
        let child_id = self.family.children[child_index].id;

        ui.label(
            RichText::new(format!("{} Rewards", theme.icons.reward))
                .color(chrome::TEXT_DIM)
                .size(12.0),
        );

        for (reward_index, (name, icon, cost)) in self.rewards().iter().enumerate() {
            let affordable = balance >= *cost;
            ui.horizontal(|ui| {
                ui.label(RichText::new(*icon).size(16.0));
                ui.label(
                    RichText::new(*name)
                        .color(chrome::TEXT_PRIMARY)
                        .size(13.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = format!("{} pts", cost);
                    if affordable {
                        let response = accent_button(
                            ui,
                            "Claim",
                            theme.palette.secondary,
                            false,
                            ("reward_btn", child_id, reward_index),
                        );
                        if response.clicked() {
                            actions.push(Action::ClaimReward {
                                child: child_index,
                                reward: reward_index,
                            });
                        }
                    }
                    chip(ui, label, chrome::TEXT_DIM);
                });
            });
        }
    }
}

/// Hover summary for the avatar chip: what is still locked and what each
/// locked avatar requires.
fn locked_avatar_hint(locked: &[&'static Avatar]) -> String {
    if locked.is_empty() {
        return "All avatars unlocked".to_string();
    }
    locked
        .iter()
        .map(|a| format!("{} {}: {}", a.emoji, a.name, a.unlock.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emoji for the child's chosen avatar, falling back to the theme's first
/// avatar when the key is unknown.
fn avatar_emoji(theme: &'static Theme, theme_key: &str, avatar_key: &str) -> &'static str {
    theme
        .avatars
        .iter()
        .find(|a| a.key(theme_key) == avatar_key)
        .or_else(|| theme.avatars.first())
        .map(|a| a.emoji)
        .unwrap_or("⭐")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ChildStats;

    #[test]
    fn test_locked_avatar_hint_lists_requirements() {
        let theme = themes::get_theme("minecraft");
        let newcomer = ChildStats::default();
        let (_, locked) = theme.avatars_for(&newcomer);
        assert!(!locked.is_empty());

        let hint = locked_avatar_hint(&locked);
        assert_eq!(hint.lines().count(), locked.len());
        assert!(hint.contains("3-day streak"), "hint: {}", hint);
        assert!(hint.contains("lifetime points"), "hint: {}", hint);

        let veteran = ChildStats {
            current_streak: 100,
            lifetime_points: 10_000,
            tasks_completed: 1_000,
            kindness_acts: 100,
        };
        let (_, none_locked) = theme.avatars_for(&veteran);
        assert_eq!(locked_avatar_hint(&none_locked), "All avatars unlocked");
    }

    #[test]
    fn test_avatar_lookup_falls_back() {
        let theme = themes::get_theme("minecraft");
        assert_eq!(
            avatar_emoji(theme, "minecraft", "minecraft_steve"),
            theme.avatars[0].emoji
        );
        // Unknown key degrades to the first avatar, not a panic.
        assert_eq!(
            avatar_emoji(theme, "minecraft", "nobody"),
            theme.avatars[0].emoji
        );
    }
}

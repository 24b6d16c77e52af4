//! Theme registry
//!
//! A theme is a named bundle of cosmetic parameters: a four-color palette,
//! icon glyphs for the six UI roles, sound asset paths, and an ordered
//! avatar list. The registry is read-only after static initialization;
//! lookups are total (an unknown identifier resolves to the default theme,
//! never an error).

mod avatar;
mod registry;

pub use avatar::{Avatar, UnlockRequirement};
use registry::THEMES;

use egui::{Color32, Stroke};

use crate::stats::ChildStats;

/// Cosmetic bundle for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub display_name: &'static str,
    pub palette: Palette,
    pub icons: IconSet,
    pub sounds: SoundSet,
    pub avatars: &'static [Avatar],
}

/// The four named palette colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color32,
    pub secondary: Color32,
    pub accent: Color32,
    /// Background gradient stops, top-left to bottom-right
    pub background: [Color32; 2],
}

/// Icon glyphs for the six named UI roles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSet {
    pub points: &'static str,
    pub task: &'static str,
    pub reward: &'static str,
    pub complete: &'static str,
    pub pending: &'static str,
    pub streak: &'static str,
}

/// Sound asset paths for the two named events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundSet {
    pub task_complete: &'static str,
    pub points_earn: &'static str,
}

/// Look up a theme bundle by identifier.
///
/// Total: unknown identifiers resolve to the default theme.
pub fn get_theme(name: &str) -> &'static Theme {
    THEMES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, theme)| theme)
        .unwrap_or(default_theme())
}

/// The designated fallback theme.
pub fn default_theme() -> &'static Theme {
    &THEMES[0].1
}

/// All theme identifiers, in registry order.
pub fn all_theme_names() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|(key, _)| *key)
}

/// Write the theme palette into the egui style.
///
/// This is the application-wide analog of setting CSS variables: widgets
/// that read selection/accent colors from the style pick the theme up
/// automatically. Reapplying the same theme is a no-op in effect.
pub fn apply_theme(ctx: &egui::Context, name: &str) {
    let theme = get_theme(name);
    let palette = &theme.palette;

    let mut style = (*ctx.style()).clone();
    style.visuals.hyperlink_color = palette.accent;
    style.visuals.selection.bg_fill = palette.primary;
    style.visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    style.visuals.widgets.hovered.bg_fill = palette.secondary;
    style.visuals.widgets.active.bg_fill = palette.primary;
    ctx.set_style(style);
}

impl Theme {
    /// Partition this theme's avatars into (unlocked, locked) for a child.
    pub fn avatars_for(&self, stats: &ChildStats) -> (Vec<&'static Avatar>, Vec<&'static Avatar>) {
        let mut unlocked = Vec::new();
        let mut locked = Vec::new();
        for avatar in self.avatars {
            if avatar.unlock.is_met(stats) {
                unlocked.push(avatar);
            } else {
                locked.push(avatar);
            }
        }
        (unlocked, locked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let theme = get_theme("not-a-theme");
        assert_eq!(theme.display_name, default_theme().display_name);
        assert_eq!(get_theme(""), default_theme());
    }

    #[test]
    fn test_known_theme_returns_exact_bundle() {
        let theme = get_theme("minecraft");
        assert_eq!(theme.display_name, "Minecraft");
        assert_eq!(theme.icons.points, "\u{1f48e}"); // 💎
        assert_eq!(theme.sounds.task_complete, "/static/sounds/minecraft-ding.mp3");
    }

    #[test]
    fn test_name_order_is_registry_order() {
        let names: Vec<&str> = all_theme_names().collect();
        assert_eq!(
            names,
            vec![
                "default",
                "minecraft",
                "roblox",
                "barbie",
                "pokemon",
                "ninjaturtles",
                "mario"
            ]
        );
    }

    #[test]
    fn test_every_theme_has_a_default_avatar() {
        for name in all_theme_names() {
            let theme = get_theme(name);
            assert!(!theme.avatars.is_empty(), "{} has no avatars", name);
            assert!(
                theme.avatars.iter().any(|a| a.unlock.is_default()),
                "{} has no always-unlocked avatar",
                name
            );
        }
    }

    #[test]
    fn test_avatar_partition() {
        let theme = get_theme("minecraft");
        let newcomer = ChildStats::default();
        let (unlocked, locked) = theme.avatars_for(&newcomer);
        assert_eq!(unlocked.len() + locked.len(), theme.avatars.len());
        assert!(unlocked.iter().all(|a| a.unlock.is_default()));

        let veteran = ChildStats {
            current_streak: 100,
            lifetime_points: 10_000,
            tasks_completed: 1_000,
            kindness_acts: 100,
        };
        let (unlocked, locked) = theme.avatars_for(&veteran);
        assert_eq!(unlocked.len(), theme.avatars.len());
        assert!(locked.is_empty());
    }
}

//! Theme avatars and unlock requirements
//!
//! Avatars are defined statically per theme and never mutated. Whether a
//! child has unlocked one is derived by comparing their live stats against
//! the avatar's requirement; the registry stores no per-child state.

use egui::Color32;

use crate::stats::ChildStats;

/// A selectable character belonging to one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    pub name: &'static str,
    pub emoji: &'static str,
    pub color: Color32,
    /// Optional image asset served by the backend
    pub image: Option<&'static str>,
    pub unlock: UnlockRequirement,
    pub description: Option<&'static str>,
}

impl Avatar {
    /// Stable key for backend unlock records, e.g. `minecraft_creeper`.
    pub fn key(&self, theme_name: &str) -> String {
        let slug: String = self
            .name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
            .collect::<String>()
            .to_lowercase()
            .replace(' ', "_");
        format!("{}_{}", theme_name, slug)
    }
}

/// Predicate a child's stats must satisfy to unlock an avatar.
///
/// The wire grammar matches the backend: `streak_3`, `tasks_25`,
/// `points_500`, `kindness_5`, or absent for always-unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockRequirement {
    /// Unlocked from the start
    Default,
    /// Current streak length reaches the threshold
    Streak(u32),
    /// Lifetime completed-task count reaches the threshold
    Tasks(u32),
    /// Lifetime points reach the threshold
    Points(u32),
    /// Lifetime kindness-act count reaches the threshold
    Kindness(u32),
}

impl UnlockRequirement {
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Check the predicate against live stats.
    pub fn is_met(&self, stats: &ChildStats) -> bool {
        match *self {
            Self::Default => true,
            Self::Streak(n) => stats.current_streak >= n,
            Self::Tasks(n) => stats.tasks_completed >= n,
            Self::Points(n) => stats.lifetime_points >= n,
            Self::Kindness(n) => stats.kindness_acts >= n,
        }
    }

    /// Wire key understood by the backend.
    pub fn as_key(&self) -> String {
        match *self {
            Self::Default => "default".to_string(),
            Self::Streak(n) => format!("streak_{}", n),
            Self::Tasks(n) => format!("tasks_{}", n),
            Self::Points(n) => format!("points_{}", n),
            Self::Kindness(n) => format!("kindness_{}", n),
        }
    }

    /// Parse a wire key. Unknown kinds and malformed values yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        if key.is_empty() || key == "default" {
            return Some(Self::Default);
        }

        let (kind, value) = key.split_once('_')?;
        let value: u32 = value.parse().ok()?;

        match kind {
            "streak" => Some(Self::Streak(value)),
            "tasks" => Some(Self::Tasks(value)),
            "points" => Some(Self::Points(value)),
            "kindness" => Some(Self::Kindness(value)),
            _ => None,
        }
    }

    /// Short human-readable requirement, shown on locked avatars.
    pub fn label(&self) -> String {
        match *self {
            Self::Default => "Unlocked".to_string(),
            Self::Streak(n) => format!("{}-day streak", n),
            Self::Tasks(n) => format!("{} tasks completed", n),
            Self::Points(n) => format!("{} lifetime points", n),
            Self::Kindness(n) => format!("{} acts of kindness", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(streak: u32, points: u32, tasks: u32, kindness: u32) -> ChildStats {
        ChildStats {
            current_streak: streak,
            lifetime_points: points,
            tasks_completed: tasks,
            kindness_acts: kindness,
        }
    }

    #[test]
    fn test_default_always_met() {
        assert!(UnlockRequirement::Default.is_met(&stats(0, 0, 0, 0)));
    }

    #[test]
    fn test_thresholds() {
        assert!(!UnlockRequirement::Streak(3).is_met(&stats(2, 0, 0, 0)));
        assert!(UnlockRequirement::Streak(3).is_met(&stats(3, 0, 0, 0)));
        assert!(UnlockRequirement::Points(500).is_met(&stats(0, 500, 0, 0)));
        assert!(UnlockRequirement::Tasks(25).is_met(&stats(0, 0, 30, 0)));
        assert!(!UnlockRequirement::Kindness(5).is_met(&stats(0, 0, 0, 4)));
    }

    #[test]
    fn test_key_roundtrip() {
        for req in [
            UnlockRequirement::Default,
            UnlockRequirement::Streak(7),
            UnlockRequirement::Tasks(25),
            UnlockRequirement::Points(1000),
            UnlockRequirement::Kindness(5),
        ] {
            assert_eq!(UnlockRequirement::from_key(&req.as_key()), Some(req));
        }
    }

    #[test]
    fn test_malformed_keys() {
        assert_eq!(UnlockRequirement::from_key("streak_abc"), None);
        assert_eq!(UnlockRequirement::from_key("gems_5"), None);
        assert_eq!(UnlockRequirement::from_key("streak"), None);
        assert_eq!(UnlockRequirement::from_key(""), Some(UnlockRequirement::Default));
    }

    #[test]
    fn test_requirement_labels() {
        assert_eq!(UnlockRequirement::Default.label(), "Unlocked");
        assert_eq!(UnlockRequirement::Streak(7).label(), "7-day streak");
        assert_eq!(UnlockRequirement::Tasks(25).label(), "25 tasks completed");
        assert_eq!(UnlockRequirement::Points(500).label(), "500 lifetime points");
        assert_eq!(UnlockRequirement::Kindness(5).label(), "5 acts of kindness");
    }

    #[test]
    fn test_avatar_key() {
        let avatar = Avatar {
            name: "Bacon Hair",
            emoji: "X",
            color: Color32::WHITE,
            image: None,
            unlock: UnlockRequirement::Default,
            description: None,
        };
        assert_eq!(avatar.key("roblox"), "roblox_bacon_hair");
    }
}

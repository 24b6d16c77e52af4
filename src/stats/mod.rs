//! Child stats and progress
//!
//! Live stat records come from the backend (or seeded sample data); this
//! layer only derives display values from them. Avatar unlock predicates
//! and milestone checks read these counters.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// Lifetime counters for one child
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildStats {
    /// Consecutive days with at least one completed task
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub lifetime_points: u32,
    #[serde(default)]
    pub tasks_completed: u32,
    /// Approved completions of kindness tasks
    #[serde(default)]
    pub kindness_acts: u32,
}

/// Today's completion progress for one child
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProgress {
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub total: u32,
}

impl DailyProgress {
    /// Completion fraction in 0.0 - 1.0; zero-task days count as 0.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (self.completed as f32 / self.total as f32).clamp(0.0, 1.0)
        }
    }

    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }
}

/// Format a point total with thousands separators, e.g. `12,345`.
pub fn format_points(points: u32) -> String {
    let digits = points.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Check if today is a weekend, for day-type filtering.
pub fn is_weekend_today() -> bool {
    let weekday = Local::now().weekday();
    weekday == chrono::Weekday::Sat || weekday == chrono::Weekday::Sun
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(0), "0");
        assert_eq!(format_points(999), "999");
        assert_eq!(format_points(1000), "1,000");
        assert_eq!(format_points(12345), "12,345");
        assert_eq!(format_points(1234567), "1,234,567");
    }

    #[test]
    fn test_progress_fraction() {
        let p = DailyProgress { completed: 3, total: 4 };
        assert!((p.fraction() - 0.75).abs() < f32::EPSILON);
        assert_eq!(p.percent(), 75);

        let empty = DailyProgress { completed: 0, total: 0 };
        assert_eq!(empty.fraction(), 0.0);

        // Over-completion (e.g. bonus tasks) clamps rather than overflows.
        let over = DailyProgress { completed: 5, total: 4 };
        assert_eq!(over.percent(), 100);
    }
}

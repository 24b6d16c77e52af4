//! Milestone thresholds
//!
//! Milestones fire on an exact match, not on crossing: a streak of 8 days
//! gets nothing, only the day it hits 7 (or 14, ...) celebrates.

/// Streak lengths that trigger the big streak celebration
pub const STREAK_MILESTONES: [u32; 6] = [3, 7, 14, 30, 60, 100];

/// Lifetime point totals that trigger a level-up celebration
pub const POINT_MILESTONES: [u32; 7] = [100, 250, 500, 1000, 2500, 5000, 10000];

pub fn is_streak_milestone(streak: u32) -> bool {
    STREAK_MILESTONES.contains(&streak)
}

pub fn is_point_milestone(total: u32) -> bool {
    POINT_MILESTONES.contains(&total)
}

/// Whether an in-session consecutive-completion count deserves a nudge:
/// every third task from the third onward.
pub fn session_streak_fires(count: u32) -> bool {
    count >= 3 && count % 3 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_milestones_exact_match_only() {
        for n in [1, 2, 3, 4, 7, 8, 14, 15, 30, 60, 100, 101] {
            assert_eq!(is_streak_milestone(n), STREAK_MILESTONES.contains(&n), "streak {}", n);
        }
        assert!(is_streak_milestone(3));
        assert!(!is_streak_milestone(4));
        assert!(!is_streak_milestone(101));
    }

    #[test]
    fn test_point_milestones() {
        for n in POINT_MILESTONES {
            assert!(is_point_milestone(n));
        }
        assert!(!is_point_milestone(0));
        assert!(!is_point_milestone(99));
        assert!(!is_point_milestone(101));
        assert!(!is_point_milestone(10001));
    }

    #[test]
    fn test_session_streak_rule() {
        for fires in [3, 6, 9, 12] {
            assert!(session_streak_fires(fires), "{} should fire", fires);
        }
        for quiet in [0, 1, 2, 4, 5, 7, 8] {
            assert!(!session_streak_fires(quiet), "{} should not fire", quiet);
        }
    }
}

//! Task template catalog
//!
//! Static, ordered catalog of reusable task definitions grouped by
//! category. Templates are instantiated into live task records by the
//! backend; this layer only answers lookups.

mod templates;

use templates::CATALOG;

/// When during the day a task applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodOfDay {
    Morning,
    Evening,
    Anytime,
}

impl PeriodOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
            Self::Anytime => "anytime",
        }
    }
}

/// Which days a task applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayType {
    Anyday,
    Weekday,
    Weekend,
}

impl DayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anyday => "anyday",
            Self::Weekday => "weekday",
            Self::Weekend => "weekend",
        }
    }

    /// Whether a task with this tag applies today.
    pub fn applies(&self, is_weekend: bool) -> bool {
        match self {
            Self::Anyday => true,
            Self::Weekday => !is_weekend,
            Self::Weekend => is_weekend,
        }
    }
}

/// A reusable task definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTemplate {
    pub title: &'static str,
    pub icon: &'static str,
    /// Positive point value awarded on completion
    pub points: u32,
    pub period: PeriodOfDay,
    pub day_type: DayType,
    pub requires_approval: bool,
    pub description: Option<&'static str>,
}

/// A template tagged with its source category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorizedTemplate {
    pub category: &'static str,
    pub template: &'static TaskTemplate,
}

/// All category labels, in catalog order.
pub fn categories() -> &'static [&'static str] {
    // The label list is derived from the catalog itself so the two can
    // never drift apart.
    static LABELS: std::sync::OnceLock<Vec<&'static str>> = std::sync::OnceLock::new();
    LABELS.get_or_init(|| CATALOG.iter().map(|(label, _)| *label).collect())
}

/// Templates in a category. Unknown labels yield an empty slice.
pub fn tasks_by_category(label: &str) -> &'static [TaskTemplate] {
    CATALOG
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, tasks)| *tasks)
        .unwrap_or(&[])
}

/// Every template, flattened and tagged with its category.
///
/// Order is category order, then in-category order. Recomputed per call;
/// the source data is static so no caching is needed.
pub fn all_templates() -> Vec<CategorizedTemplate> {
    CATALOG
        .iter()
        .flat_map(|(category, tasks)| {
            tasks.iter().map(|template| CategorizedTemplate {
                category,
                template,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(tasks_by_category("Underwater Basket Weaving").is_empty());
        assert!(tasks_by_category("").is_empty());
    }

    #[test]
    fn test_flattened_length_matches_per_category_sum() {
        let sum: usize = categories()
            .iter()
            .map(|c| tasks_by_category(c).len())
            .sum();
        assert_eq!(all_templates().len(), sum);
        assert!(sum > 0);
    }

    #[test]
    fn test_flatten_preserves_order() {
        let all = all_templates();
        assert_eq!(all[0].category, "Morning Tasks (Anyday)");
        assert_eq!(all[0].template.title, "Eat Breakfast");

        // Category boundaries keep catalog order.
        let mut seen = Vec::new();
        for entry in &all {
            if seen.last() != Some(&entry.category) {
                seen.push(entry.category);
            }
        }
        assert_eq!(seen, categories());
    }

    #[test]
    fn test_all_point_values_positive() {
        for entry in all_templates() {
            assert!(entry.template.points > 0, "{} has zero points", entry.template.title);
        }
    }

    #[test]
    fn test_day_type_applicability() {
        assert!(DayType::Anyday.applies(true));
        assert!(DayType::Anyday.applies(false));
        assert!(DayType::Weekday.applies(false));
        assert!(!DayType::Weekday.applies(true));
        assert!(DayType::Weekend.applies(true));
        assert!(!DayType::Weekend.applies(false));
    }
}

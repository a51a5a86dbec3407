use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};

use crate::modules::experience::domain::category::ExperienceCategory;
use crate::modules::experience::domain::entities::ExperienceEntry;
use crate::shared::dates::{parse_flexible_date, PRESENT};

//
// ──────────────────────────────────────────────────────────
// Grouping
// ──────────────────────────────────────────────────────────
//

/// Groups entries by category. Every category is present in the result,
/// empty or not; within a category, ongoing entries come first and the
/// rest sort by start date, most recent first.
pub fn group_by_category(
    experiences: &[ExperienceEntry],
) -> BTreeMap<ExperienceCategory, Vec<ExperienceEntry>> {
    let mut grouped: BTreeMap<ExperienceCategory, Vec<ExperienceEntry>> = ExperienceCategory::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for experience in experiences {
        grouped
            .entry(experience.category)
            .or_default()
            .push(experience.clone());
    }

    for entries in grouped.values_mut() {
        entries.sort_by(|a, b| {
            match (a.end_date == PRESENT, b.end_date == PRESENT) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => cmp_start_desc(a, b),
            }
        });
    }

    grouped
}

fn cmp_start_desc(a: &ExperienceEntry, b: &ExperienceEntry) -> Ordering {
    match (
        parse_flexible_date(&a.start_date),
        parse_flexible_date(&b.start_date),
    ) {
        (Some(da), Some(db)) => db.cmp(&da),
        _ => b.start_date.cmp(&a.start_date),
    }
}

/// Keeps entries whose category appears in `categories`.
pub fn filter_by_categories(
    experiences: &[ExperienceEntry],
    categories: &[ExperienceCategory],
) -> Vec<ExperienceEntry> {
    experiences
        .iter()
        .filter(|experience| categories.contains(&experience.category))
        .cloned()
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Derived figures
// ──────────────────────────────────────────────────────────
//

/// Total whole months spent in a category, each entry clamped at zero.
/// Ongoing entries count up to the system clock's today.
pub fn category_duration(experiences: &[ExperienceEntry], category: ExperienceCategory) -> i64 {
    category_duration_as_of(experiences, category, Utc::now().date_naive())
}

/// Deterministic core of [`category_duration`]. Entries with
/// unparseable dates contribute nothing.
pub fn category_duration_as_of(
    experiences: &[ExperienceEntry],
    category: ExperienceCategory,
    today: NaiveDate,
) -> i64 {
    experiences
        .iter()
        .filter(|experience| experience.category == category)
        .filter_map(|experience| {
            let start = parse_flexible_date(&experience.start_date)?;
            let end = if experience.end_date == PRESENT {
                today
            } else {
                parse_flexible_date(&experience.end_date)?
            };
            let months = (end.year() as i64 - start.year() as i64) * 12
                + (end.month() as i64 - start.month() as i64);
            Some(months.max(0))
        })
        .sum()
}

/// The category with the highest occurrence count. Ties go to the
/// category encountered first while scanning the collection; an empty
/// collection yields `None`.
pub fn most_common_category(experiences: &[ExperienceEntry]) -> Option<ExperienceCategory> {
    let mut counts: Vec<(ExperienceCategory, usize)> = Vec::new();
    for experience in experiences {
        match counts
            .iter_mut()
            .find(|(category, _)| *category == experience.category)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((experience.category, 1)),
        }
    }

    let mut best: Option<(ExperienceCategory, usize)> = None;
    for (category, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category)
}

/// Whether the category has at least one ongoing entry.
pub fn is_category_active(experiences: &[ExperienceEntry], category: ExperienceCategory) -> bool {
    experiences
        .iter()
        .filter(|experience| experience.category == category)
        .any(|experience| experience.end_date == PRESENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    /* --------------------------------------------------
     * Fixtures
     * -------------------------------------------------- */

    fn entry(id: &str, category: ExperienceCategory, start: &str, end: &str) -> ExperienceEntry {
        ExperienceEntry {
            id: id.to_string(),
            company: "Acme".to_string(),
            title: "Engineer".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            location: "Remote".to_string(),
            category,
            summary: "Summary".to_string(),
            achievements: vec![],
            technologies: vec![],
            logo_url: None,
            company_url: None,
            featured: None,
            theme: None,
        }
    }

    fn sample_entries() -> Vec<ExperienceEntry> {
        vec![
            entry("a", ExperienceCategory::FullTime, "2020-01-01", "2021-01-01"),
            entry("b", ExperienceCategory::FullTime, "2021-02-01", PRESENT),
            entry("c", ExperienceCategory::Contract, "2019-06-01", "2019-12-01"),
        ]
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[test]
    fn groups_cover_every_category() {
        let grouped = group_by_category(&sample_entries());
        assert_eq!(grouped.len(), ExperienceCategory::ALL.len());
        assert_eq!(grouped[&ExperienceCategory::FullTime].len(), 2);
        assert_eq!(grouped[&ExperienceCategory::Contract].len(), 1);
        assert!(grouped[&ExperienceCategory::Volunteer].is_empty());
    }

    #[test]
    fn groups_put_ongoing_entries_first() {
        let grouped = group_by_category(&sample_entries());
        let full_time = &grouped[&ExperienceCategory::FullTime];
        assert_eq!(full_time[0].id, "b");
        assert_eq!(full_time[1].id, "a");
    }

    #[test]
    fn filter_keeps_listed_categories() {
        let filtered = filter_by_categories(
            &sample_entries(),
            &[ExperienceCategory::Contract, ExperienceCategory::Volunteer],
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "c");
    }

    #[test]
    fn category_duration_sums_whole_months() {
        let today = NaiveDate::from_ymd_opt(2022, 2, 1).unwrap();
        let entries = sample_entries();
        // a: 12 months, b: 12 months up to today
        assert_eq!(
            category_duration_as_of(&entries, ExperienceCategory::FullTime, today),
            24
        );
        assert_eq!(
            category_duration_as_of(&entries, ExperienceCategory::Contract, today),
            6
        );
        assert_eq!(
            category_duration_as_of(&entries, ExperienceCategory::Education, today),
            0
        );
    }

    #[test]
    fn category_duration_clamps_reversed_entries_at_zero() {
        let entries = vec![entry(
            "x",
            ExperienceCategory::Contract,
            "2022-06-01",
            "2022-01-01",
        )];
        let today = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(
            category_duration_as_of(&entries, ExperienceCategory::Contract, today),
            0
        );
    }

    #[test]
    fn most_common_category_counts_occurrences() {
        assert_eq!(
            most_common_category(&sample_entries()),
            Some(ExperienceCategory::FullTime)
        );
    }

    #[test]
    fn most_common_category_breaks_ties_by_first_encounter() {
        let entries = vec![
            entry("a", ExperienceCategory::Contract, "2020-01-01", "2021-01-01"),
            entry("b", ExperienceCategory::FullTime, "2020-01-01", "2021-01-01"),
        ];
        assert_eq!(
            most_common_category(&entries),
            Some(ExperienceCategory::Contract)
        );
    }

    #[test]
    fn most_common_category_on_empty_is_none() {
        assert_eq!(most_common_category(&[]), None);
    }

    #[test]
    fn active_category_requires_a_present_entry() {
        let entries = sample_entries();
        assert!(is_category_active(&entries, ExperienceCategory::FullTime));
        assert!(!is_category_active(&entries, ExperienceCategory::Contract));
    }
}

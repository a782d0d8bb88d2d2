//! Display ordering for experience entries.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::schema::ExperienceEntry;

/// Drop draft entries and order the rest by effective end date, most recent
/// first.
///
/// Ongoing positions (no end date) use `now` as their end date, so they sort
/// ahead of every finished position that ended before `now`. Keys are
/// compared in whole seconds and the sort is stable: entries with equal keys,
/// including all ongoing positions, keep their input order.
pub fn sorted_experience<E>(entries: &[E], now: DateTime<Utc>) -> Vec<E>
where
    E: AsRef<ExperienceEntry> + Clone,
{
    let mut visible: Vec<E> = entries
        .iter()
        .filter(|e| !e.as_ref().is_draft())
        .cloned()
        .collect();

    visible.sort_by_key(|e| Reverse(e.as_ref().effective_end_date(now).timestamp()));
    visible
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::field::Nullable;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn entry(company: &str, end: Option<(i32, u32, u32)>) -> ExperienceEntry {
        ExperienceEntry {
            company: company.to_string(),
            role: "Engineer".to_string(),
            start_date: Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap(),
            end_date: match end {
                Some((y, m, d)) => Nullable::Value(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()),
                None => Nullable::Absent,
            },
            company_url: None,
            draft: None,
        }
    }

    fn companies(entries: &[ExperienceEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.company.as_str()).collect()
    }

    #[test]
    fn test_current_position_sorts_first() {
        let input = vec![
            entry("A", Some((2023, 1, 1))),
            entry("B", Some((2024, 1, 1))),
            entry("C", None),
        ];

        let sorted = sorted_experience(&input, now());
        assert_eq!(companies(&sorted), ["C", "B", "A"]);
    }

    #[test]
    fn test_drafts_are_excluded() {
        let mut draft = entry("Hidden", Some((2024, 6, 1)));
        draft.draft = Some(true);
        let mut published = entry("Shown", Some((2022, 6, 1)));
        published.draft = Some(false);

        let sorted = sorted_experience(&[draft, published, entry("Plain", None)], now());
        assert_eq!(companies(&sorted), ["Plain", "Shown"]);
    }

    #[test]
    fn test_equal_end_dates_keep_input_order() {
        let input = vec![
            entry("First", Some((2022, 3, 1))),
            entry("Later", Some((2024, 3, 1))),
            entry("Second", Some((2022, 3, 1))),
            entry("Third", Some((2022, 3, 1))),
        ];

        let sorted = sorted_experience(&input, now());
        assert_eq!(companies(&sorted), ["Later", "First", "Second", "Third"]);
    }

    #[test]
    fn test_ongoing_positions_keep_input_order() {
        let mut nulled = entry("Null", None);
        nulled.end_date = Nullable::Null;
        let input = vec![
            entry("Old", Some((2020, 1, 1))),
            entry("Absent", None),
            nulled,
        ];

        let sorted = sorted_experience(&input, now());
        assert_eq!(companies(&sorted), ["Absent", "Null", "Old"]);
    }

    #[test]
    fn test_future_end_date_sorts_before_now() {
        let input = vec![entry("Current", None), entry("Contract", Some((2026, 1, 1)))];
        let sorted = sorted_experience(&input, now());
        assert_eq!(companies(&sorted), ["Contract", "Current"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let mut draft = entry("Draft", Some((2021, 1, 1)));
        draft.draft = Some(true);
        let input = vec![
            entry("A", Some((2019, 1, 1))),
            draft,
            entry("B", None),
            entry("C", Some((2023, 1, 1))),
        ];

        let once = sorted_experience(&input, now());
        let twice = sorted_experience(&once, now());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![entry("A", Some((2019, 1, 1))), entry("B", None)];
        let before = input.clone();
        let _ = sorted_experience(&input, now());
        assert_eq!(input, before);
    }

    #[test]
    fn test_empty_input() {
        let sorted: Vec<ExperienceEntry> = sorted_experience(&[], now());
        assert!(sorted.is_empty());
    }
}

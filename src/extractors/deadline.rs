// src/extractors/deadline.rs
use chrono::NaiveDate;

use crate::listing::models::ScholarshipRecord;

/// Display format the listing uses for deadlines, e.g. "June 6, 2024".
const DEADLINE_FORMAT: &str = "%B %d, %Y";

/// Parses a display-form deadline into a comparable date. Strings that do
/// not match the expected format resolve to the maximum representable date,
/// so malformed deadlines are kept and sort last rather than being dropped.
pub fn parse_deadline(deadline: &str) -> NaiveDate {
    NaiveDate::parse_from_str(deadline.trim(), DEADLINE_FORMAT).unwrap_or(NaiveDate::MAX)
}

/// Drops records whose deadline is before `today` and orders the remainder
/// by deadline, soonest first. The sort is stable: records sharing a
/// deadline (including all sentinel-dated ones) keep their input order.
pub fn upcoming_sorted(
    records: Vec<ScholarshipRecord>,
    today: NaiveDate,
) -> Vec<ScholarshipRecord> {
    let mut upcoming: Vec<ScholarshipRecord> = records
        .into_iter()
        .filter(|record| parse_deadline(&record.deadline) >= today)
        .collect();

    upcoming.sort_by_key(|record| parse_deadline(&record.deadline));
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, deadline: &str) -> ScholarshipRecord {
        ScholarshipRecord {
            name: name.to_string(),
            deadline: deadline.to_string(),
            url: format!("https://example.org/{}", name),
        }
    }

    #[test]
    fn parses_long_month_day_year() {
        assert_eq!(
            parse_deadline("June 6, 2024"),
            NaiveDate::from_ymd_opt(2024, 6, 6).unwrap()
        );
    }

    #[test]
    fn unparseable_deadline_resolves_to_the_max_sentinel() {
        assert_eq!(parse_deadline("not a date"), NaiveDate::MAX);
        assert_eq!(parse_deadline(""), NaiveDate::MAX);
        assert_eq!(parse_deadline("2024-06-06"), NaiveDate::MAX);
    }

    #[test]
    fn drops_past_deadlines_and_sorts_ascending_with_garbage_last() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let records = vec![
            record("old", "Jan 1, 2020"),
            record("far", "Dec 31, 2099"),
            record("garbage", "garbage"),
            record("soon", "Jun 1, 2024"),
        ];

        let sorted = upcoming_sorted(records, today);
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["far", "garbage"]);

        // "soon" predates today and "old" is long past; with an earlier
        // today both futures and the sentinel appear, ascending.
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let records = vec![
            record("old", "Jan 1, 2020"),
            record("far", "Dec 31, 2099"),
            record("garbage", "garbage"),
            record("soon", "Jun 1, 2024"),
        ];
        let sorted = upcoming_sorted(records, today);
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["soon", "far", "garbage"]);
    }

    #[test]
    fn deadline_on_today_is_retained() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let sorted = upcoming_sorted(vec![record("edge", "June 1, 2024")], today);
        assert_eq!(sorted.len(), 1);
    }

    #[test]
    fn sort_is_stable_for_equal_deadlines() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records = vec![
            record("first", "June 6, 2024"),
            record("second", "June 6, 2024"),
            record("third", "May 1, 2024"),
        ];

        let sorted = upcoming_sorted(records, today);
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[test]
    fn filter_and_sort_is_idempotent_on_its_own_output() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let records = vec![
            record("b", "Dec 31, 2099"),
            record("a", "Jun 3, 2024"),
            record("garbage", "garbage"),
        ];

        let once = upcoming_sorted(records, today);
        let twice = upcoming_sorted(once.clone(), today);

        let once_names: Vec<&str> = once.iter().map(|r| r.name.as_str()).collect();
        let twice_names: Vec<&str> = twice.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(once_names, twice_names);
    }
}

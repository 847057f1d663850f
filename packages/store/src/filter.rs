//! # Entry search
//!
//! Narrows an in-memory list of [`Entry`] values by a free-text query without a
//! server round-trip. The result keeps the input order.
//!
//! An entry matches when the lowercased query is a substring of its lowercased
//! title, content or mood, or when the query matches its creation date in one of
//! the renderings below. The renderings are a fixed list instead of platform
//! locale data, so results do not depend on where the code runs.
//!
//! | Rendering | Example (2025-06-24) | Comparison |
//! |-----------|----------------------|------------|
//! | `dd.mm.yyyy` | `24.06.2025` | substring |
//! | `m/d/yyyy` | `6/24/2025` | substring |
//! | `yyyy-mm-dd` | `2025-06-24` | substring |
//! | year | `2025` | substring |
//! | month name (English, Turkish) | `June`, `Haziran` | case-insensitive substring |
//! | day of month | `24` | equality, padded or not |

use chrono::{DateTime, Datelike, Utc};

use crate::models::Entry;

/// `chrono` patterns the creation date is rendered with for matching.
pub const DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%-m/%-d/%Y", "%Y-%m-%d", "%Y"];

pub const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const MONTHS_TR: [&str; 12] = [
    "Ocak",
    "Şubat",
    "Mart",
    "Nisan",
    "Mayıs",
    "Haziran",
    "Temmuz",
    "Ağustos",
    "Eylül",
    "Ekim",
    "Kasım",
    "Aralık",
];

/// Entries matching `query`, in their original order. A blank query keeps everything.
pub fn filter_entries<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    let query = query.trim();
    if query.is_empty() {
        return entries.iter().collect();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| text_matches(entry, &needle) || date_matches(&entry.created_at, query))
        .collect()
}

fn text_matches(entry: &Entry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle)
        || entry.content.to_lowercase().contains(needle)
        || entry
            .mood
            .as_deref()
            .is_some_and(|mood| mood.to_lowercase().contains(needle))
}

fn date_matches(created_at: &DateTime<Utc>, query: &str) -> bool {
    if DATE_FORMATS
        .iter()
        .any(|fmt| created_at.format(fmt).to_string().contains(query))
    {
        return true;
    }

    let month = created_at.month0() as usize;
    let needle = query.to_lowercase();
    if [MONTHS_EN[month], MONTHS_TR[month]]
        .iter()
        .any(|name| name.to_lowercase().contains(&needle))
    {
        return true;
    }

    let day = created_at.day();
    query == day.to_string() || query == format!("{day:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(id: i64, title: &str, content: &str, mood: Option<&str>, ymd: (i32, u32, u32)) -> Entry {
        Entry {
            id,
            title: title.to_string(),
            content: content.to_string(),
            mood: mood.map(str::to_string),
            created_at: Utc.with_ymd_and_hms(ymd.0, ymd.1, ymd.2, 12, 0, 0).unwrap(),
        }
    }

    fn morning_walk() -> Entry {
        entry(1, "Morning Walk", "Felt great", Some("😊 Happy"), (2025, 6, 24))
    }

    fn sample() -> Vec<Entry> {
        vec![
            morning_walk(),
            entry(2, "Rainy day", "Stayed in and read", Some("😌 Calm"), (2024, 11, 5)),
            entry(3, "Deadline", "Shipped the release", None, (2025, 1, 17)),
        ]
    }

    fn ids(found: Vec<&Entry>) -> Vec<i64> {
        found.into_iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let entries = sample();
        let found = filter_entries(&entries, "");
        assert_eq!(found.len(), entries.len());
        assert_eq!(ids(found), vec![1, 2, 3]);
        assert_eq!(ids(filter_entries(&entries, "   ")), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert!(filter_entries(&[], "walk").is_empty());
    }

    #[test]
    fn test_reference_entry() {
        let entries = vec![morning_walk()];
        assert_eq!(filter_entries(&entries, "happy").len(), 1);
        assert_eq!(filter_entries(&entries, "2025").len(), 1);
        assert_eq!(filter_entries(&entries, "june").len(), 1);
        assert!(filter_entries(&entries, "xyz").is_empty());
    }

    #[test]
    fn test_text_fields_case_insensitive() {
        let entries = sample();
        assert_eq!(ids(filter_entries(&entries, "MORNING")), vec![1]);
        assert_eq!(ids(filter_entries(&entries, "read")), vec![2]);
        assert_eq!(ids(filter_entries(&entries, "calm")), vec![2]);
        assert_eq!(ids(filter_entries(&entries, "shipped")), vec![3]);
    }

    #[test]
    fn test_missing_mood_does_not_match_mood_query() {
        let entries = vec![entry(9, "t", "c", None, (2020, 3, 3))];
        assert!(filter_entries(&entries, "happy").is_empty());
    }

    #[test]
    fn test_date_renderings() {
        let entries = sample();
        assert_eq!(ids(filter_entries(&entries, "24.06.2025")), vec![1]);
        assert_eq!(ids(filter_entries(&entries, "6/24/2025")), vec![1]);
        assert_eq!(ids(filter_entries(&entries, "2024-11-05")), vec![2]);
        assert_eq!(ids(filter_entries(&entries, "05.11")), vec![2]);
        assert_eq!(ids(filter_entries(&entries, "11/5/2024")), vec![2]);
        assert_eq!(ids(filter_entries(&entries, "2024")), vec![2]);
    }

    #[test]
    fn test_month_names_in_both_languages() {
        let entries = sample();
        assert_eq!(ids(filter_entries(&entries, "Haziran")), vec![1]);
        assert_eq!(ids(filter_entries(&entries, "kasım")), vec![2]);
        assert_eq!(ids(filter_entries(&entries, "NOVEMBER")), vec![2]);
        assert_eq!(ids(filter_entries(&entries, "ocak")), vec![3]);
    }

    #[test]
    fn test_bare_day_of_month() {
        let entries = sample();
        assert_eq!(ids(filter_entries(&entries, "17")), vec![3]);
        // Matches via the padded and unpadded renderings
        assert_eq!(ids(filter_entries(&entries, "05")), vec![2]);
    }

    #[test]
    fn test_no_match_across_all_fields() {
        let entries = sample();
        assert!(filter_entries(&entries, "1999").is_empty());
        assert!(filter_entries(&entries, "zzz").is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let entries = vec![morning_walk()];
        assert_eq!(ids(filter_entries(&entries, "  walk ")), vec![1]);
        assert_eq!(ids(filter_entries(&entries, " 24 ")), vec![1]);
        assert!(filter_entries(&entries, " december ").is_empty());
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::RosterEntry;

/// Rows rendered per page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Fifteen,
    Twenty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::Fifteen,
        PageSize::Twenty,
    ];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Fifteen => 15,
            PageSize::Twenty => 20,
        }
    }

    /// Next option, wrapping from 20 back to 5.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            PageSize::Five => PageSize::Ten,
            PageSize::Ten => PageSize::Fifteen,
            PageSize::Fifteen => PageSize::Twenty,
            PageSize::Twenty => PageSize::Five,
        }
    }

    /// Previous option, wrapping from 5 to 20.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            PageSize::Five => PageSize::Twenty,
            PageSize::Ten => PageSize::Five,
            PageSize::Fifteen => PageSize::Ten,
            PageSize::Twenty => PageSize::Fifteen,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            15 => Ok(PageSize::Fifteen),
            20 => Ok(PageSize::Twenty),
            other => Err(format!("invalid page size {other}: expected 5, 10, 15 or 20")),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.get() as u32
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Whether `entry` matches `term`.
///
/// Text fields compare case-insensitively; date and time are fixed-format
/// and use a plain substring test.
pub fn matches(entry: &RosterEntry, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [
        &entry.location,
        &entry.team_head,
        &entry.shift_in_charge,
        &entry.security_staff,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
        || entry.schedule_date.contains(term)
        || entry.schedule_time.contains(term)
}

/// Records matching `term`, in source order.
pub fn filter<'a>(records: &'a [RosterEntry], term: &str) -> Vec<&'a RosterEntry> {
    records.iter().filter(|entry| matches(entry, term)).collect()
}

/// First `page_size` rows.
pub fn take<T>(page_size: PageSize, rows: &[T]) -> &[T] {
    &rows[..rows.len().min(page_size.get())]
}

/// The rendered slice of a filtered roster plus the footer counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterPage<'a> {
    pub rows: Vec<&'a RosterEntry>,
    pub match_count: usize,
}

impl<'a> RosterPage<'a> {
    pub fn build(records: &'a [RosterEntry], term: &str, page_size: PageSize) -> Self {
        let matched = filter(records, term);
        let match_count = matched.len();
        let rows = take(page_size, &matched).to_vec();
        Self { rows, match_count }
    }

    pub fn footer(&self) -> String {
        format!(
            "Showing {} of {} entries",
            self.rows.len(),
            self.match_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{RosterSource, StaticRoster};

    fn seed() -> Vec<RosterEntry> {
        StaticRoster::seed().list().unwrap()
    }

    fn many(n: u32) -> Vec<RosterEntry> {
        let base = seed().remove(0);
        (1..=n)
            .map(|id| RosterEntry {
                id,
                location: format!("Site {id}"),
                ..base.clone()
            })
            .collect()
    }

    #[test]
    fn test_empty_term_returns_all_records() {
        let records = seed();
        assert_eq!(filter(&records, "").len(), records.len());
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let records = seed();
        let hits = filter(&records, "rAiGaRh");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].location, "Raigarh");
    }

    #[test]
    fn test_matches_staff_fields() {
        let records = seed();
        assert_eq!(filter(&records, "suraj").len(), 3);
        assert_eq!(filter(&records, "AMIT").len(), 3);
    }

    #[test]
    fn test_date_and_time_match_plain_substring() {
        let records = seed();
        assert_eq!(filter(&records, "12-04").len(), 3);
        assert_eq!(filter(&records, "18:30").len(), 3);
        assert_eq!(filter(&records, "PM").len(), 0);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter(&seed(), "Bhubaneswar").is_empty());
    }

    #[test]
    fn test_filter_result_is_subset_that_matches() {
        let records = many(12);
        for term in ["", "site", "1", "SITE 1", "arjun", "zzz", "18:30", "-04-"] {
            let hits = filter(&records, term);
            for hit in &hits {
                assert!(records.contains(hit), "{term:?}");
                let lowered = term.to_lowercase();
                let any_field = [
                    &hit.location,
                    &hit.team_head,
                    &hit.shift_in_charge,
                    &hit.security_staff,
                    &hit.schedule_date,
                    &hit.schedule_time,
                ]
                .iter()
                .any(|f| f.to_lowercase().contains(&lowered));
                assert!(any_field, "{term:?} -> {}", hit.id);
            }
        }
    }

    #[test]
    fn test_take_is_capped_by_page_size_and_len() {
        let rows: Vec<u32> = (0..23).collect();
        for size in PageSize::ALL {
            for len in [0, 3, 5, 10, 17, 23] {
                let taken = take(size, &rows[..len]);
                assert_eq!(taken.len(), len.min(size.get()));
            }
        }
    }

    #[test]
    fn test_page_footer_reports_min_of_size_and_matches() {
        let records = many(12);
        let page = RosterPage::build(&records, "site", PageSize::Five);
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.footer(), "Showing 5 of 12 entries");

        let page = RosterPage::build(&records, "site 1", PageSize::Twenty);
        // Site 1, 10, 11, 12
        assert_eq!(page.match_count, 4);
        assert_eq!(page.footer(), "Showing 4 of 4 entries");
    }

    #[test]
    fn test_page_size_cycles() {
        assert_eq!(PageSize::Twenty.next(), PageSize::Five);
        assert_eq!(PageSize::Five.prev(), PageSize::Twenty);
        assert_eq!(PageSize::default(), PageSize::Ten);
        assert_eq!(PageSize::try_from(15), Ok(PageSize::Fifteen));
        assert!(PageSize::try_from(7).is_err());
    }
}

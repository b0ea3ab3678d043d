use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive-inclusive calendar date range.
///
/// A range whose start is after its end is valid and simply contains no
/// dates; callers filtering with such a range get an empty result rather
/// than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range covering `start..=end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the date falls within the range, boundaries included.
    ///
    /// Always false for an inverted range (`start > end`).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns true if the range contains no dates.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn contains_is_inclusive_on_both_boundaries() {
        let range = DateRange::new(date(2026, 2, 1), date(2026, 2, 8));
        assert!(range.contains(date(2026, 2, 1)));
        assert!(range.contains(date(2026, 2, 8)));
        assert!(range.contains(date(2026, 2, 4)));
    }

    #[test]
    fn contains_excludes_outside_dates() {
        let range = DateRange::new(date(2026, 2, 1), date(2026, 2, 8));
        assert!(!range.contains(date(2026, 1, 31)));
        assert!(!range.contains(date(2026, 2, 9)));
    }

    #[test]
    fn inverted_range_is_empty_and_contains_nothing() {
        let range = DateRange::new(date(2026, 3, 1), date(2026, 2, 1));
        assert!(range.is_empty());
        assert!(!range.contains(date(2026, 2, 15)));
        assert!(!range.contains(date(2026, 3, 1)));
    }

    #[test]
    fn single_day_range() {
        let range = DateRange::new(date(2026, 2, 8), date(2026, 2, 8));
        assert!(!range.is_empty());
        assert!(range.contains(date(2026, 2, 8)));
        assert!(!range.contains(date(2026, 2, 7)));
    }
}

//! Reporting window resolution.
//!
//! A window always covers whole calendar months and ends just before the
//! current (possibly incomplete) month starts.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::Serialize;

/// A calendar month, ordered chronologically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// `month` is 1-based. Returns `None` outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(ts: DateTime<Utc>) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn from_ordinal(ordinal: i64) -> Self {
        let year = ordinal
            .div_euclid(12)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX));
        Self {
            year: year as i32,
            month: ordinal.rem_euclid(12) as u32 + 1,
        }
    }

    /// Move by `delta` months (negative moves backwards).
    pub fn shift(self, delta: i64) -> Self {
        Self::from_ordinal(self.ordinal().saturating_add(delta))
    }

    pub fn succ(self) -> Self {
        self.shift(1)
    }

    /// Whole months from `self` to `other` (negative when `other` is earlier).
    pub fn months_until(self, other: YearMonth) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// Midnight UTC on the first day of the month.
    ///
    /// Months beyond chrono's representable range clamp to its bounds.
    pub fn first_instant(self) -> DateTime<Utc> {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1).and_then(|d| d.and_hms_opt(0, 0, 0)) {
            Some(midnight) => Utc.from_utc_datetime(&midnight),
            None if self.year < 0 => DateTime::<Utc>::MIN_UTC,
            None => DateTime::<Utc>::MAX_UTC,
        }
    }
}

impl core::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Closed reporting window `[start, end]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Period {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Inclusive on both ends. An inverted window contains nothing.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start && ts <= self.end
    }

    pub fn start_month(&self) -> YearMonth {
        YearMonth::of(self.start)
    }

    pub fn end_month(&self) -> YearMonth {
        YearMonth::of(self.end)
    }

    /// `monthsBetween(start, end) + 1`; zero or negative for inverted windows.
    pub fn total_months(&self) -> i64 {
        self.start_month().months_until(self.end_month()) + 1
    }

    /// Every calendar month from the start month through the end month.
    pub fn months(&self) -> impl Iterator<Item = YearMonth> {
        let first = self.start_month();
        let count = self.total_months().max(0);
        (0..count).map(move |i| first.shift(i))
    }
}

/// Resolve the trailing `months` full calendar months before `now`.
///
/// `end` is the last nanosecond of the month preceding `now`'s month; `start`
/// is the first instant of the month `months - 1` months before `end`'s month.
/// Non-positive `months` is not special-cased and yields an inverted window.
pub fn resolve_period(months: i32, now: DateTime<Utc>) -> Period {
    let current = YearMonth::of(now);
    let end = current.first_instant() - Duration::nanoseconds(1);
    let start = YearMonth::of(end)
        .shift(-(i64::from(months) - 1))
        .first_instant();
    Period::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn twelve_months_excludes_current_month() {
        let period = resolve_period(12, ts(2025, 6, 17, 10, 30, 0));
        assert_eq!(period.start(), ts(2024, 6, 1, 0, 0, 0));
        assert_eq!(period.end(), ts(2025, 6, 1, 0, 0, 0) - Duration::nanoseconds(1));
        assert_eq!(period.end().nanosecond(), 999_999_999);
        assert_eq!(period.total_months(), 12);
    }

    #[test]
    fn single_month_window_is_previous_month() {
        let period = resolve_period(1, ts(2025, 3, 1, 0, 0, 0));
        assert_eq!(period.start(), ts(2025, 2, 1, 0, 0, 0));
        assert_eq!(period.end_month(), YearMonth::new(2025, 2).unwrap());
        assert_eq!(period.total_months(), 1);
    }

    #[test]
    fn window_crosses_year_boundary() {
        let period = resolve_period(3, ts(2025, 2, 10, 0, 0, 0));
        let months: Vec<String> = period.months().map(|m| m.to_string()).collect();
        assert_eq!(months, vec!["2024-11", "2024-12", "2025-01"]);
    }

    #[test]
    fn non_positive_months_yield_inverted_window() {
        let period = resolve_period(0, ts(2025, 6, 17, 0, 0, 0));
        assert!(period.start() > period.end());
        assert_eq!(period.total_months(), 0);
        assert_eq!(period.months().count(), 0);
        assert!(!period.contains(ts(2025, 5, 15, 0, 0, 0)));
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let period = resolve_period(2, ts(2025, 6, 17, 0, 0, 0));
        let one_ns = Duration::nanoseconds(1);
        assert!(period.contains(period.start()));
        assert!(period.contains(period.end()));
        assert!(!period.contains(period.start() - one_ns));
        assert!(!period.contains(period.end() + one_ns));
    }

    #[test]
    fn shift_wraps_months_both_ways() {
        let jan = YearMonth::new(2025, 1).unwrap();
        assert_eq!(jan.shift(-1), YearMonth::new(2024, 12).unwrap());
        assert_eq!(jan.shift(12), YearMonth::new(2026, 1).unwrap());
        assert_eq!(jan.succ().month(), 2);
        assert_eq!(jan.months_until(YearMonth::new(2024, 11).unwrap()), -2);
    }

    #[test]
    fn month_outside_range_is_rejected() {
        assert!(YearMonth::new(2025, 0).is_none());
        assert!(YearMonth::new(2025, 13).is_none());
    }

    #[test]
    fn absurd_window_clamps_instead_of_panicking() {
        let period = resolve_period(i32::MAX, ts(2025, 6, 17, 0, 0, 0));
        assert_eq!(period.start(), DateTime::<Utc>::MIN_UTC);
    }
}

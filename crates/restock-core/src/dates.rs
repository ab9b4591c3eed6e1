//! Calendar-day arithmetic.
//!
//! All date differencing in the urgency engine is done on whole UTC
//! calendar days: both endpoints are truncated to their UTC date before
//! differencing, so time-of-day drift cannot introduce off-by-one errors
//! around the tier cutoffs.

use chrono::{DateTime, Duration, Utc};

/// Returns `date` offset by `n` calendar days (signed).
pub fn add_days(date: DateTime<Utc>, n: i64) -> DateTime<Utc> {
    date + Duration::days(n)
}

/// Signed number of whole UTC calendar days from `a` to `b`.
///
/// Positive when `b` is after `a`. Both timestamps are truncated to
/// their UTC calendar date, so `23:59` and `00:01` either side of
/// midnight still count as one day apart.
pub fn whole_days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (b.date_naive() - a.date_naive()).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_add_days_forward_and_back() {
        let base = utc(2024, 6, 1, 12, 0);
        assert_eq!(add_days(base, 9), utc(2024, 6, 10, 12, 0));
        assert_eq!(add_days(base, -4), utc(2024, 5, 28, 12, 0));
        assert_eq!(add_days(base, 0), base);
    }

    #[test]
    fn test_whole_days_between_signed() {
        let a = utc(2024, 6, 1, 0, 0);
        assert_eq!(whole_days_between(a, utc(2024, 6, 10, 0, 0)), 9);
        assert_eq!(whole_days_between(utc(2024, 6, 10, 0, 0), a), -9);
        assert_eq!(whole_days_between(a, a), 0);
    }

    #[test]
    fn test_whole_days_between_ignores_time_of_day() {
        // 23:59 to 00:01 the next day is still one calendar day
        let late = utc(2024, 6, 1, 23, 59);
        let early = utc(2024, 6, 2, 0, 1);
        assert_eq!(whole_days_between(late, early), 1);

        // Almost 24h apart but within the same calendar day
        let morning = utc(2024, 6, 1, 0, 1);
        let night = utc(2024, 6, 1, 23, 59);
        assert_eq!(whole_days_between(morning, night), 0);
    }

    #[test]
    fn test_whole_days_between_month_boundary() {
        assert_eq!(
            whole_days_between(utc(2024, 3, 1, 8, 0), utc(2024, 6, 1, 8, 0)),
            92
        );
    }
}

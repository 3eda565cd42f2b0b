//! Local-calendar helpers.
//!
//! Timestamps are stored in UTC. "Today" always means the calendar date in
//! the time zone of the supplied `now`, so callers decide what local is.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// True if `ts` falls on the same local calendar date as `now`.
/// A missing timestamp is never today.
pub fn is_today<Tz: TimeZone>(ts: Option<&DateTime<Utc>>, now: &DateTime<Tz>) -> bool {
    ts.is_some_and(|ts| local_date(ts, &now.timezone()) == now.date_naive())
}

pub fn local_date<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    ts.with_timezone(tz).date_naive()
}

pub fn local_time<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> NaiveTime {
    ts.with_timezone(tz).time()
}

/// `HH:MM`, 24-hour clock.
pub fn format_hm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn cph() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    #[test]
    fn utc_evening_is_next_day_locally() {
        // 22:30 UTC is 00:30 the next day at UTC+2
        let ts = Utc.with_ymd_and_hms(2026, 10, 18, 22, 30, 0).unwrap();
        let now = cph().with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        assert!(is_today(Some(&ts), &now));
        assert!(!is_today(Some(&ts), &now.with_timezone(&Utc)));
    }

    #[test]
    fn missing_timestamp_is_not_today() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        assert!(!is_today(None, &now));
    }

    #[test]
    fn formats_local_hour_and_minute() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 19, 6, 5, 0).unwrap();
        assert_eq!(format_hm(local_time(&ts, &cph())), "08:05");
    }
}

//! Date and countdown formatting for list rows and detail headers.

use chrono::{DateTime, Utc};

/// Countdown until `end`, rounded up: hours under a day, whole days after.
/// Anything already past reads "Ended".
pub fn remaining_time(end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if end <= now {
        return "Ended".to_string();
    }
    let millis = (end - now).num_milliseconds();
    let hours = (millis + 3_599_999) / 3_600_000;
    if hours < 24 {
        plural(hours, "hour")
    } else {
        plural((hours + 23) / 24, "day")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// dd/mm/yyyy
pub fn short_date(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}

/// HH:MM, 24-hour.
pub fn short_time(at: DateTime<Utc>) -> String {
    at.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, h, m, 0).single().unwrap()
    }

    #[test]
    fn rounds_hours_up() {
        let now = at(10, 0);
        assert_eq!(remaining_time(at(11, 30), now), "2 hours");
        assert_eq!(remaining_time(at(10, 30), now), "1 hour");
    }

    #[test]
    fn switches_to_days_at_twenty_four_hours() {
        let now = at(0, 0);
        let day_later = now + chrono::Duration::hours(24);
        assert_eq!(remaining_time(day_later, now), "1 day");
        let thirty = now + chrono::Duration::hours(30);
        assert_eq!(remaining_time(thirty, now), "2 days");
    }

    #[test]
    fn past_sessions_read_ended() {
        let now = at(12, 0);
        assert_eq!(remaining_time(at(11, 0), now), "Ended");
        assert_eq!(remaining_time(now, now), "Ended");
    }

    #[test]
    fn counts_down_to_the_final_seconds() {
        let now = at(10, 0);
        let soon = now + chrono::Duration::seconds(30);
        assert_eq!(remaining_time(soon, now), "1 hour");
    }

    #[test]
    fn short_formats() {
        let when = at(9, 5);
        assert_eq!(short_date(when), "10/03/2026");
        assert_eq!(short_time(when), "09:05");
    }
}

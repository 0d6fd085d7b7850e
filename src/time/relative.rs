//! Relative "time ago" formatting.

use chrono::{DateTime, Utc};

/// Unit table in seconds, largest first.
const RANGES: [(&str, i64); 7] = [
    ("year", 3600 * 24 * 365),
    ("month", 3600 * 24 * 30),
    ("week", 3600 * 24 * 7),
    ("day", 3600 * 24),
    ("hour", 3600),
    ("minute", 60),
    ("second", 1),
];

/// Format a datetime relative to now, e.g. "5 minutes ago" or "in 2 days".
pub fn time_ago(datetime: DateTime<Utc>) -> String {
    time_ago_from(datetime, Utc::now())
}

/// Format a datetime relative to a reference point.
///
/// Picks the largest unit whose span is exceeded and rounds the delta.
/// Anything within one second of the reference is "just now".
pub fn time_ago_from(datetime: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (datetime - now).num_seconds();

    for (unit, span) in RANGES {
        if span < elapsed.abs() {
            let delta = (elapsed as f64 / span as f64).round() as i64;
            return format_relative(delta, unit);
        }
    }

    "just now".to_string()
}

fn format_relative(delta: i64, unit: &str) -> String {
    let count = delta.unsigned_abs();
    let suffix = if count == 1 { "" } else { "s" };

    if delta < 0 {
        format!("{count} {unit}{suffix} ago")
    } else {
        format!("in {count} {unit}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + Duration::days(20_000)
    }

    #[test]
    fn test_just_now() {
        assert_eq!(time_ago_from(now(), now()), "just now");
        assert_eq!(time_ago_from(now() - Duration::milliseconds(500), now()), "just now");
    }

    #[test]
    fn test_minutes_ago() {
        assert_eq!(time_ago_from(now() - Duration::minutes(5), now()), "5 minutes ago");
    }

    #[test]
    fn test_singular_unit() {
        assert_eq!(time_ago_from(now() - Duration::seconds(90), now()), "2 minutes ago");
        assert_eq!(time_ago_from(now() - Duration::seconds(61), now()), "1 minute ago");
    }

    #[test]
    fn test_hours_and_days() {
        assert_eq!(time_ago_from(now() - Duration::hours(3), now()), "3 hours ago");
        assert_eq!(time_ago_from(now() - Duration::days(2), now()), "2 days ago");
    }

    #[test]
    fn test_weeks_months_years() {
        assert_eq!(time_ago_from(now() - Duration::days(14), now()), "2 weeks ago");
        assert_eq!(time_ago_from(now() - Duration::days(90), now()), "3 months ago");
        assert_eq!(time_ago_from(now() - Duration::days(730), now()), "2 years ago");
    }

    #[test]
    fn test_future() {
        assert_eq!(time_ago_from(now() + Duration::days(3), now()), "in 3 days");
        assert_eq!(time_ago_from(now() + Duration::minutes(10), now()), "in 10 minutes");
    }
}

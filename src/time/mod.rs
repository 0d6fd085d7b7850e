//! Time utilities: relative formatting, durations, and timestamp helpers.

mod measure;
mod relative;

pub use measure::measure;
pub use relative::{time_ago, time_ago_from};

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// One week from now.
pub fn one_week_from_now() -> DateTime<Utc> {
    Utc::now() + Duration::weeks(1)
}

/// One day from now.
pub fn one_day_from_now() -> DateTime<Utc> {
    Utc::now() + Duration::days(1)
}

/// One minute from now.
pub fn one_minute_from_now() -> DateTime<Utc> {
    Utc::now() + Duration::minutes(1)
}

/// Seconds since the Unix epoch for a datetime.
pub fn unix_timestamp(datetime: DateTime<Utc>) -> i64 {
    datetime.timestamp()
}

/// A duration broken down into the most natural unit for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendlyDuration {
    Minutes(u64),
    Hours(u64),
    HoursAndMinutes { hours: u64, minutes: u64 },
    Days(u64),
    Weeks(u64),
    Months(u64),
    Years(u64),
}

impl fmt::Display for FriendlyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn unit(f: &mut fmt::Formatter<'_>, count: u64, name: &str) -> fmt::Result {
            if count == 1 {
                write!(f, "1 {name}")
            } else {
                write!(f, "{count} {name}s")
            }
        }

        match *self {
            FriendlyDuration::Minutes(minutes) => unit(f, minutes, "minute"),
            FriendlyDuration::Hours(hours) => unit(f, hours, "hour"),
            FriendlyDuration::HoursAndMinutes { hours, minutes } => {
                unit(f, hours, "hour")?;
                write!(f, " ")?;
                unit(f, minutes, "minute")
            }
            FriendlyDuration::Days(days) => unit(f, days, "day"),
            FriendlyDuration::Weeks(weeks) => unit(f, weeks, "week"),
            FriendlyDuration::Months(months) => unit(f, months, "month"),
            FriendlyDuration::Years(years) => unit(f, years, "year"),
        }
    }
}

/// Break a minute count into a displayable duration.
///
/// Returns `None` for zero. The long form promotes to hours only above four
/// hours and to days/weeks/months/years at the usual calendar thresholds; the
/// short form only ever uses minutes or hours+minutes (above two hours), for
/// compact labels like "90 minutes" or "2 hours 30 minutes".
pub fn friendly_duration(minutes: u64, short: bool) -> Option<FriendlyDuration> {
    if minutes == 0 {
        return None;
    }

    if short {
        if minutes > 120 {
            return Some(split_hours(minutes));
        }
        return Some(FriendlyDuration::Minutes(minutes));
    }

    Some(match minutes {
        525_600.. => FriendlyDuration::Years(minutes / 525_600),
        43_200.. => FriendlyDuration::Months(minutes / 43_200),
        10_080.. => FriendlyDuration::Weeks(minutes / 10_080),
        1_440.. => FriendlyDuration::Days(minutes / 1_440),
        240.. => split_hours(minutes),
        _ => FriendlyDuration::Minutes(minutes),
    })
}

fn split_hours(minutes: u64) -> FriendlyDuration {
    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining > 0 {
        FriendlyDuration::HoursAndMinutes {
            hours,
            minutes: remaining,
        }
    } else {
        FriendlyDuration::Hours(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_week_from_now() {
        let now = Utc::now();
        let later = one_week_from_now();
        let days = (later - now).num_days();
        assert!((6..=7).contains(&days));
    }

    #[test]
    fn test_unix_timestamp() {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        assert_eq!(unix_timestamp(epoch), 0);
        assert_eq!(unix_timestamp(epoch + Duration::seconds(90)), 90);
    }

    #[test]
    fn test_friendly_duration_zero() {
        assert_eq!(friendly_duration(0, false), None);
        assert_eq!(friendly_duration(0, true), None);
    }

    #[test]
    fn test_friendly_duration_minutes() {
        assert_eq!(friendly_duration(45, false), Some(FriendlyDuration::Minutes(45)));
    }

    #[test]
    fn test_friendly_duration_stays_in_minutes_below_four_hours() {
        assert_eq!(friendly_duration(180, false), Some(FriendlyDuration::Minutes(180)));
    }

    #[test]
    fn test_friendly_duration_hours() {
        assert_eq!(friendly_duration(240, false), Some(FriendlyDuration::Hours(4)));
        assert_eq!(
            friendly_duration(270, false),
            Some(FriendlyDuration::HoursAndMinutes { hours: 4, minutes: 30 })
        );
    }

    #[test]
    fn test_friendly_duration_calendar_units() {
        assert_eq!(friendly_duration(1_440, false), Some(FriendlyDuration::Days(1)));
        assert_eq!(friendly_duration(10_080, false), Some(FriendlyDuration::Weeks(1)));
        assert_eq!(friendly_duration(43_200, false), Some(FriendlyDuration::Months(1)));
        assert_eq!(friendly_duration(1_051_200, false), Some(FriendlyDuration::Years(2)));
    }

    #[test]
    fn test_friendly_duration_short() {
        assert_eq!(friendly_duration(90, true), Some(FriendlyDuration::Minutes(90)));
        assert_eq!(
            friendly_duration(150, true),
            Some(FriendlyDuration::HoursAndMinutes { hours: 2, minutes: 30 })
        );
        assert_eq!(friendly_duration(180, true), Some(FriendlyDuration::Hours(3)));
    }

    #[test]
    fn test_friendly_duration_display() {
        assert_eq!(FriendlyDuration::Minutes(1).to_string(), "1 minute");
        assert_eq!(FriendlyDuration::Minutes(45).to_string(), "45 minutes");
        assert_eq!(
            FriendlyDuration::HoursAndMinutes { hours: 2, minutes: 30 }.to_string(),
            "2 hours 30 minutes"
        );
        assert_eq!(FriendlyDuration::Years(1).to_string(), "1 year");
    }
}

//! Upload durations and the expiry countdown label.

use chrono::{DateTime, Utc};

/// How long an uploaded file should live. These are the exact duration values
/// the upload endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryOption {
    OneHour,
    OneDay,
    SevenDays,
    ThirtyDays,
    Permanent,
}

impl ExpiryOption {
    pub const ALL: [ExpiryOption; 5] = [
        ExpiryOption::OneHour,
        ExpiryOption::OneDay,
        ExpiryOption::SevenDays,
        ExpiryOption::ThirtyDays,
        ExpiryOption::Permanent,
    ];

    /// The wire value sent in the multipart `duration` field.
    pub fn value(self) -> &'static str {
        match self {
            ExpiryOption::OneHour => "1h",
            ExpiryOption::OneDay => "1d",
            ExpiryOption::SevenDays => "7d",
            ExpiryOption::ThirtyDays => "30d",
            ExpiryOption::Permanent => "permanent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExpiryOption::OneHour => "1 hour",
            ExpiryOption::OneDay => "1 day",
            ExpiryOption::SevenDays => "7 days",
            ExpiryOption::ThirtyDays => "30 days",
            ExpiryOption::Permanent => "Permanent",
        }
    }

    /// Parse a select-box value. Unknown values fall back to one day, the same
    /// default the server applies.
    pub fn from_value(value: &str) -> Self {
        match value {
            "1h" => ExpiryOption::OneHour,
            "7d" => ExpiryOption::SevenDays,
            "30d" => ExpiryOption::ThirtyDays,
            "permanent" => ExpiryOption::Permanent,
            _ => ExpiryOption::OneDay,
        }
    }
}

/// Coarse human countdown to an expiry instant.
///
/// Under a day the label counts hours, under a week days (both rounded up),
/// beyond that it is a calendar date. `None` means the file never expires.
/// Deterministic: `now` is a parameter, not a clock read.
pub fn format_expiry(expiry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(expiry) = expiry else {
        return "Never".to_string();
    };

    let secs = (expiry - now).num_seconds();
    if secs <= 0 {
        // The server purges expired records; this only shows up between the
        // expiry instant and the next cleanup pass.
        return "Expired".to_string();
    }

    if secs < 86_400 {
        let hours = (secs + 3_599) / 3_600;
        return format!("{hours} hour{} left", if hours == 1 { "" } else { "s" });
    }

    if secs < 604_800 {
        let days = (secs + 86_399) / 86_400;
        return format!("{days} day{} left", if days == 1 { "" } else { "s" });
    }

    expiry.format("%b %-d, %Y").to_string()
}

/// [`format_expiry`] against the current wall clock, for rendering.
pub fn expiry_label(expiry: Option<DateTime<Utc>>) -> String {
    format_expiry(expiry, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn never_expires() {
        assert_eq!(format_expiry(None, now()), "Never");
    }

    #[test]
    fn hours_under_a_day() {
        let now = now();
        assert_eq!(
            format_expiry(Some(now + Duration::hours(2)), now),
            "2 hours left"
        );
        assert_eq!(
            format_expiry(Some(now + Duration::hours(1)), now),
            "1 hour left"
        );
        // 90 minutes rounds up to 2 hours.
        assert_eq!(
            format_expiry(Some(now + Duration::minutes(90)), now),
            "2 hours left"
        );
        assert_eq!(
            format_expiry(Some(now + Duration::hours(23)), now),
            "23 hours left"
        );
    }

    #[test]
    fn days_under_a_week() {
        let now = now();
        assert_eq!(
            format_expiry(Some(now + Duration::days(3)), now),
            "3 days left"
        );
        assert_eq!(
            format_expiry(Some(now + Duration::days(6)), now),
            "6 days left"
        );
        // 25 hours rounds up to 2 days.
        assert_eq!(
            format_expiry(Some(now + Duration::hours(25)), now),
            "2 days left"
        );
    }

    #[test]
    fn calendar_date_beyond_a_week() {
        let now = now();
        assert_eq!(
            format_expiry(Some(now + Duration::days(10)), now),
            "Mar 11, 2025"
        );
    }

    #[test]
    fn already_past() {
        let now = now();
        assert_eq!(format_expiry(Some(now - Duration::hours(1)), now), "Expired");
    }

    #[test]
    fn option_values_round_trip() {
        for opt in ExpiryOption::ALL {
            assert_eq!(ExpiryOption::from_value(opt.value()), opt);
        }
        // Unknown values take the server's default.
        assert_eq!(ExpiryOption::from_value("??"), ExpiryOption::OneDay);
    }
}

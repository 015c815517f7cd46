//! Timestamp formatting for posts and profiles
//!
//! Pure functions over `chrono` values so they can be tested without a
//! Dioxus runtime or a real clock.

use chrono::{DateTime, Utc};

/// Relative age of a post, as shown on its card.
///
/// Anything under a week is "N units ago"; older posts show a calendar date.
/// Timestamps in the future count as "just now".
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use linkfeed_client::presentation::helpers::format_relative_time;
///
/// let now = Utc::now();
/// assert_eq!(format_relative_time(now - Duration::minutes(5), now), "5 minutes ago");
/// assert_eq!(format_relative_time(now - Duration::hours(1), now), "1 hour ago");
/// ```
pub fn format_relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - created_at;

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = elapsed.num_days();
    if days < 7 {
        return plural(days, "day");
    }

    created_at.format("%b %-d, %Y").to_string()
}

/// "Joined <Month> <Year>" line on a profile.
pub fn format_joined(joined_at: DateTime<Utc>) -> String {
    joined_at.format("Joined %B %Y").to_string()
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use linkfeed_domain::common::date_at_midnight;

    fn now() -> DateTime<Utc> {
        date_at_midnight(2024, 6, 15) + Duration::hours(12)
    }

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(format_relative_time(now() - Duration::seconds(59), now()), "just now");
    }

    #[test]
    fn future_timestamps_are_just_now() {
        assert_eq!(format_relative_time(now() + Duration::hours(1), now()), "just now");
    }

    #[test]
    fn minutes_hours_and_days() {
        let cases = [
            (Duration::minutes(1), "1 minute ago"),
            (Duration::minutes(59), "59 minutes ago"),
            (Duration::hours(2), "2 hours ago"),
            (Duration::hours(23), "23 hours ago"),
            (Duration::days(1), "1 day ago"),
            (Duration::days(6), "6 days ago"),
        ];
        for (age, expected) in cases {
            assert_eq!(format_relative_time(now() - age, now()), expected);
        }
    }

    #[test]
    fn a_week_or_older_shows_the_date() {
        let created = date_at_midnight(2024, 6, 1);
        assert_eq!(format_relative_time(created, now()), "Jun 1, 2024");
    }

    #[test]
    fn joined_shows_month_and_year() {
        assert_eq!(format_joined(date_at_midnight(2024, 1, 15)), "Joined January 2024");
    }
}

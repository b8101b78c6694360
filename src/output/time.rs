use chrono::{DateTime, Local, Utc};

/// "just now", "5 minutes ago", "3 hours ago" within a day, otherwise the
/// local date and time.
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(at);

    if duration.num_hours() >= 24 || duration.num_seconds() < 0 {
        let local: DateTime<Local> = at.into();
        return local.format("%Y-%m-%d %H:%M").to_string();
    }

    match duration.num_minutes() {
        0 => "just now".to_string(),
        1 => "1 minute ago".to_string(),
        m if m < 60 => format!("{} minutes ago", m),
        _ => match duration.num_hours() {
            1 => "1 hour ago".to_string(),
            h => format!("{} hours ago", h),
        },
    }
}

pub fn format_optional(at: Option<DateTime<Utc>>) -> String {
    at.map(|t| format_relative(t, Utc::now()))
        .unwrap_or_else(|| "never".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_recent_times() {
        let now = Utc::now();
        assert_eq!(format_relative(now - Duration::seconds(10), now), "just now");
        assert_eq!(format_relative(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(format_relative(now - Duration::minutes(42), now), "42 minutes ago");
        assert_eq!(format_relative(now - Duration::minutes(61), now), "1 hour ago");
        assert_eq!(format_relative(now - Duration::hours(5), now), "5 hours ago");
    }

    #[test]
    fn test_old_times_use_date() {
        let now = Utc::now();
        let out = format_relative(now - Duration::days(3), now);
        assert_eq!(out.len(), "2024-03-01 10:00".len());
    }

    #[test]
    fn test_missing_time() {
        assert_eq!(format_optional(None), "never");
    }
}

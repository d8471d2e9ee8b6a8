use chrono::{DateTime, Duration, Utc};

/// Full wall-clock form of an epoch-second timestamp.
pub fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "--".to_string())
}

/// Short label used on chart axes.
pub fn format_chart_label(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.format("%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "--".to_string())
}

/// Month/day label used in the period usage table.
pub fn format_month_day(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.format("%m/%d").to_string())
        .unwrap_or_else(|| "--".to_string())
}

/// Human "ago" label used by the last-update tag.
pub fn ago_label(timestamp: i64, now: DateTime<Utc>) -> String {
    let Some(then) = DateTime::from_timestamp(timestamp, 0) else {
        return "Error".to_string();
    };
    let elapsed = now - then;

    if elapsed < Duration::seconds(5) {
        return "Just now".to_string();
    }
    if elapsed < Duration::hours(1) {
        return format!("{} mins ago", elapsed.num_minutes());
    }
    if elapsed < Duration::days(1) {
        return format!("{}h {}m ago", elapsed.num_hours(), elapsed.num_minutes() % 60);
    }
    if elapsed > Duration::days(100) {
        return "So long ago".to_string();
    }
    format!("{}d {}h ago", elapsed.num_days(), elapsed.num_hours() % 24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(format_month_day(0), "01/01");
        assert_eq!(format_chart_label(3_600), "01-01 01:00");
    }

    #[test]
    fn test_ago_label_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();

        assert_eq!(ago_label(now.timestamp() - 2, now), "Just now");
        assert_eq!(ago_label(now.timestamp() - 240, now), "4 mins ago");
        assert_eq!(ago_label(now.timestamp() - 3 * 3600 - 600, now), "3h 10m ago");
        assert_eq!(ago_label(now.timestamp() - 2 * 86_400 - 3600, now), "2d 1h ago");
        assert_eq!(ago_label(now.timestamp() - 200 * 86_400, now), "So long ago");
    }
}

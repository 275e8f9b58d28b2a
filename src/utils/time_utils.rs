use chrono::{DateTime, NaiveDateTime};

// The backend emits ISO-8601 timestamps, but not uniformly: alert fields carry
// an offset, while bar/series timestamps come out of a dataframe index as
// naive strings ("2026-08-06T14:30:05.123" or "2026-08-06 14:30:05").
fn parse_backend_ts(ts: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(ts, fmt) {
            return Some(dt);
        }
    }
    None
}

/// Short clock label for a chart axis or tooltip. Falls back to the raw
/// string when parsing fails so a malformed sample never blanks a label.
pub fn clock_label(ts: &str) -> String {
    parse_backend_ts(ts)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Full date-time label for table cells (alert creation / trigger times).
pub fn datetime_label(ts: &str) -> String {
    parse_backend_ts(ts)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_and_naive_timestamps_render_as_clock_labels() {
        assert_eq!(clock_label("2026-08-06T14:30:05+00:00"), "14:30:05");
        assert_eq!(clock_label("2026-08-06T14:30:05.123456"), "14:30:05");
        assert_eq!(clock_label("2026-08-06 14:30:05"), "14:30:05");
    }

    #[test]
    fn datetime_label_keeps_the_date() {
        assert_eq!(
            datetime_label("2026-08-06T14:30:05+00:00"),
            "2026-08-06 14:30:05"
        );
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(clock_label("not-a-time"), "not-a-time");
        assert_eq!(datetime_label(""), "");
    }
}

use chrono::{NaiveDate, NaiveTime};

/// Compact duration label, e.g. `42s` or `3m 05s`.
#[must_use]
pub fn format_duration_secs(secs: u64) -> String {
    let minutes = secs / 60;
    let seconds = secs % 60;
    if minutes == 0 {
        format!("{seconds}s")
    } else {
        format!("{minutes}m {seconds:02}s")
    }
}

#[must_use]
pub fn format_accuracy(accuracy: f64) -> String {
    format!("{accuracy:.2}%")
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %-d %b %Y").to_string()
}

#[must_use]
pub fn format_time(time: Option<NaiveTime>) -> String {
    time.map_or_else(|| "All day".to_string(), |t| t.format("%H:%M").to_string())
}

use chrono::{DateTime, Utc};

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Strict distance between a timestamp and now: one unit, no rounding up,
/// suffixed "ago" or "from now". Unparseable input is shown as-is.
pub fn format_relative_time(iso_date: &str) -> String {
    match iso_date.parse::<DateTime<Utc>>() {
        Ok(datetime) => relative_time_between(datetime, Utc::now()),
        Err(_) => iso_date.to_string(),
    }
}

pub fn relative_time_between(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(date);
    let suffix = if duration.num_seconds() < 0 {
        "from now"
    } else {
        "ago"
    };

    let seconds = duration.num_seconds().abs();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let (amount, unit) = if seconds < 60 {
        (seconds, "second")
    } else if minutes < 60 {
        (minutes, "minute")
    } else if hours < 24 {
        (hours, "hour")
    } else if days < 30 {
        (days, "day")
    } else if days < 365 {
        (days / 30, "month")
    } else {
        (days / 365, "year")
    };

    let plural = if amount == 1 { "" } else { "s" };
    format!("{} {}{} {}", amount, unit, plural, suffix)
}

/// Placeholder view-count statistic. Search hits carry no view counts, so
/// rows show a random figure until the backend exposes the real one.
pub fn mock_view_count() -> u32 {
    scale_view_count(js_sys::Math::random())
}

/// Maps a sample from [0, 1) onto [1, 10000].
pub fn scale_view_count(sample: f64) -> u32 {
    (sample * 10_000.0) as u32 + 1
}

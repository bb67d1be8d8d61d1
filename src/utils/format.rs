use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{GiError, Result};

/// Render a second count as `H:MM:SS`. Hours are not padded.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, secs)
}

/// Gram amounts are shown to at most one decimal place, without trailing zeros.
fn display_grams(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    // Values that round to zero from below print as "0", not "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

/// Render grams, e.g. `"45g"`.
pub fn format_carbs(grams: f64) -> String {
    format!("{}g", display_grams(grams))
}

/// Render a rate, e.g. `"60g/h"`.
pub fn format_carb_rate(g_per_hour: f64) -> String {
    format!("{}g/h", display_grams(g_per_hour))
}

/// Render minutes as `"<h>h <m>min"`, dropping zero parts; zero is `"0min"`.
pub fn format_duration_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    match (hours, mins) {
        (0, m) => format!("{}min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}min", h, m),
    }
}

/// RFC 3339 timestamp in UTC with millisecond precision.
pub fn to_iso_string(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 timestamp with any offset into UTC.
pub fn from_iso_string(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| GiError::InvalidTimestamp {
            input: input.to_string(),
            source,
        })
}

use std::time::Duration;

/// Whole minutes, leftover seconds and whole hours of a duration. Sub-second parts are dropped.
fn split(duration: Duration) -> (u64, u64, u64) {
    let total_seconds = duration.as_secs();
    let minutes = total_seconds / 60;
    (minutes, total_seconds % 60, minutes / 60)
}

/// Standard clock rendering: `MM:SS` below an hour, `H:MM:SS` from one hour on.
pub fn format_duration(duration: Duration) -> String {
    let (minutes, seconds, hours) = split(duration);
    if minutes < 60 {
        format!("{minutes:02}:{seconds:02}")
    } else {
        format!("{hours}:{:02}:{seconds:02}", minutes % 60)
    }
}

/// Narrow rendering for tight layouts. Past one hour seconds are dropped and the result is
/// `H:MM`, so the width stays the same as `MM:SS` until ten hours.
pub fn format_duration_compact(duration: Duration) -> String {
    let (minutes, seconds, hours) = split(duration);
    if minutes < 60 {
        format!("{minutes:02}:{seconds:02}")
    } else {
        format!("{hours}:{:02}", minutes % 60)
    }
}

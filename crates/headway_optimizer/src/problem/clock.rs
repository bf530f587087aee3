/// Hour of the day every minute offset is counted from.
pub const REFERENCE_HOUR: i32 = 7;

/// Formats a minute offset as `H:MM` on the reference clock, e.g. `65` is `8:05`.
pub fn format_clock(minutes: i32) -> String {
    format!(
        "{}:{:02}",
        REFERENCE_HOUR + minutes.div_euclid(60),
        minutes.rem_euclid(60)
    )
}

/// Parses `H:MM` into a minute offset from the reference hour. Hours must lie in `0..24`.
pub fn parse_clock(value: &str) -> Option<i32> {
    let (hours, minutes) = value.trim().split_once(':')?;
    let hours: i32 = hours.trim().parse().ok()?;
    let minutes: i32 = minutes.trim().parse().ok()?;

    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }

    Some((hours - REFERENCE_HOUR) * 60 + minutes)
}

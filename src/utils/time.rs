//! Time utilities: parsing H:MM / H:MM:SS and 12-hour rendering.

use chrono::NaiveTime;

/// Parse a 24-hour clock time, `H:MM:SS` first and `H:MM` as fallback.
/// The hour may omit its leading zero.
pub fn parse_clock(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    let padded = match t.find(':') {
        Some(1) => format!("0{t}"),
        _ => t.to_string(),
    };

    NaiveTime::parse_from_str(&padded, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&padded, "%H:%M"))
        .ok()
}

/// `9:05AM`, `12:30PM`
pub fn format_12h(t: NaiveTime) -> String {
    t.format("%-I:%M%p").to_string()
}

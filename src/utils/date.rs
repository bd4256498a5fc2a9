//! Date utilities: M/D/YYYY parsing and the two long-form renderings used in
//! the output file.

use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `M/D/YYYY` (spreadsheet form, no zero padding required).
/// Any other layout is rejected.
pub fn parse_mdy(s: &str) -> Option<NaiveDate> {
    let mut parts = s.trim().split('/');
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `Jan 5, 2024`
pub fn format_short(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

/// `January 5, 2024`
pub fn format_long(d: NaiveDate) -> String {
    d.format("%B %-d, %Y").to_string()
}

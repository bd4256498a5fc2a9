use chrono::{NaiveDate, NaiveTime};

use super::entry::{
    Entry, EntryContext, EntryError, EntryKind, attribute_comment, contributor, required,
};
use crate::reader::{FieldRemapping, RawRow};
use crate::utils::{date, time};

/// One line of the time log section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub phase: String,
    /// Already carries the `(name) ` prefix outside team mode.
    pub comment: String,
    pub name: Option<String>,
}

impl TimeEntry {
    fn sort_key(&self) -> (NaiveDate, NaiveTime, NaiveTime, Option<&str>) {
        (self.date, self.start, self.end, self.name.as_deref())
    }
}

fn parse_time_field(value: &str) -> Result<NaiveTime, EntryError> {
    time::parse_clock(value).ok_or_else(|| EntryError::InvalidTime(value.to_string()))
}

impl Entry for TimeEntry {
    const KIND: EntryKind = EntryKind::Time;
    const REQUIRED: &'static [&'static str] = &["date", "start", "end", "phase", "comment"];
    const REMAPPING: FieldRemapping = FieldRemapping::new(&[
        ("comments", "comment"),
        ("note", "comment"),
        ("notes", "comment"),
        ("finish", "end"),
    ]);

    fn from_row(row: &RawRow, ctx: &EntryContext) -> Result<Self, EntryError> {
        let raw_date = required(row, Self::KIND, "date")?;
        let raw_start = required(row, Self::KIND, "start")?;
        let raw_end = required(row, Self::KIND, "end")?;
        let phase = required(row, Self::KIND, "phase")?;
        let comment = required(row, Self::KIND, "comment")?;

        let date =
            date::parse_mdy(raw_date).ok_or_else(|| EntryError::InvalidDate(raw_date.to_string()))?;
        let start = parse_time_field(raw_start)?;
        let end = parse_time_field(raw_end)?;

        let name = contributor(row, ctx);
        let comment = attribute_comment(comment, name.as_deref(), ctx.team_mode);

        Ok(Self {
            date,
            start,
            end,
            phase: phase.to_string(),
            comment,
            name,
        })
    }

    fn contributor(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Total order on (date, start, end, name); unnamed entries sort first
    /// among otherwise equal ones.
    fn sort(entries: &mut [Self]) {
        entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }
}

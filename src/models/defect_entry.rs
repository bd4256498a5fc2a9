use chrono::NaiveDate;

use super::entry::{
    Entry, EntryContext, EntryError, EntryKind, attribute_comment, contributor, parse_int, required,
};
use crate::reader::{FieldRemapping, RawRow};
use crate::utils::date;

/// One line of the defect log section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefectEntry {
    pub date: NaiveDate,
    pub defect_type: String,
    /// Minutes spent fixing.
    pub fix_time: i64,
    pub comment: String,
    pub name: Option<String>,
}

impl Entry for DefectEntry {
    const KIND: EntryKind = EntryKind::Defect;
    const REQUIRED: &'static [&'static str] = &["date", "type", "fix_time", "comment"];
    const REMAPPING: FieldRemapping = FieldRemapping::new(&[("fix time", "fix_time")]);

    fn from_row(row: &RawRow, ctx: &EntryContext) -> Result<Self, EntryError> {
        let raw_date = required(row, Self::KIND, "date")?;
        let defect_type = required(row, Self::KIND, "type")?;
        let fix_time = required(row, Self::KIND, "fix_time")?;
        let comment = required(row, Self::KIND, "comment")?;

        let date =
            date::parse_mdy(raw_date).ok_or_else(|| EntryError::InvalidDate(raw_date.to_string()))?;
        let fix_time = parse_int("fix_time", fix_time)?;

        let name = contributor(row, ctx);
        let comment = attribute_comment(comment, name.as_deref(), ctx.team_mode);

        Ok(Self {
            date,
            defect_type: defect_type.to_string(),
            fix_time,
            comment,
            name,
        })
    }

    fn contributor(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// By date only; entries of the same day keep file order.
    fn sort(entries: &mut [Self]) {
        entries.sort_by_key(|e| e.date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, fix_time: &str, comment: &str) -> RawRow {
        RawRow::from_pairs(
            2,
            [
                ("date", date),
                ("type", "logic"),
                ("fix_time", fix_time),
                ("comment", comment),
            ],
        )
    }

    #[test]
    fn parses_a_valid_row() {
        let raw = row("12/31/2023", " 15 ", "off by one");
        let e = DefectEntry::from_row(&raw, &EntryContext::team()).unwrap();
        assert_eq!(e.date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(e.defect_type, "logic");
        assert_eq!(e.fix_time, 15);
        assert_eq!(e.comment, "off by one");
    }

    #[test]
    fn fix_time_must_be_numeric() {
        assert_eq!(
            DefectEntry::from_row(&row("1/5/2024", "abc", "x"), &EntryContext::team()),
            Err(EntryError::InvalidInteger {
                field: "fix_time",
                value: "abc".into()
            })
        );
    }

    #[test]
    fn empty_fix_time_is_missing_not_zero() {
        assert_eq!(
            DefectEntry::from_row(&row("1/5/2024", "", "x"), &EntryContext::team()),
            Err(EntryError::MissingField {
                kind: EntryKind::Defect,
                field: "fix_time"
            })
        );
    }

    #[test]
    fn individual_mode_prefixes_comment() {
        let mut r = row("1/5/2024", "3", "typo");
        r.insert("name", Some("Bo".into()));
        let e = DefectEntry::from_row(&r, &EntryContext::individual()).unwrap();
        assert_eq!(e.comment, "(Bo) typo");
    }

    #[test]
    fn sort_is_stable_within_a_day() {
        let ctx = EntryContext::team();
        let mut entries = vec![
            DefectEntry::from_row(&row("1/6/2024", "1", "c"), &ctx).unwrap(),
            DefectEntry::from_row(&row("1/5/2024", "1", "a"), &ctx).unwrap(),
            DefectEntry::from_row(&row("1/5/2024", "1", "b"), &ctx).unwrap(),
        ];
        DefectEntry::sort(&mut entries);
        let comments: Vec<&str> = entries.iter().map(|e| e.comment.as_str()).collect();
        assert_eq!(comments, ["a", "b", "c"]);
    }
}

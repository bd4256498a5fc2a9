//! Shared plumbing for the three record kinds: the `Entry` trait, the
//! row-level error type and the field helpers every validator uses.

use std::fmt;

use thiserror::Error;

use super::object_entry::Classification;
use crate::reader::{FieldRemapping, RawRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Time,
    Object,
    Defect,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntryKind::Time => "time entry",
            EntryKind::Object => "object entry",
            EntryKind::Defect => "defect entry",
        })
    }
}

/// Why a single row could not become a record. Never fatal for the file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("{kind} requires a {field}")]
    MissingField { kind: EntryKind, field: &'static str },

    #[error("invalid date '{0}' (expected M/D/YYYY)")]
    InvalidDate(String),

    #[error("invalid time '{0}' (expected H:MM or H:MM:SS)")]
    InvalidTime(String),

    #[error("{field} must be a whole number, got '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("obj_type must be \"new\" or \"reused\", got '{0}'")]
    UnknownClassification(String),

    #[error("obj_type not specified and couldn't be inferred")]
    AmbiguousClassification,
}

/// Run-wide parameters applied to every row of a file.
#[derive(Debug, Clone, Default)]
pub struct EntryContext {
    pub team_mode: bool,
    /// Replaces the contributor name found in the row.
    pub name_override: Option<String>,
    /// Replaces the `obj_type` column (dedicated new / reused object files).
    pub classification: Option<Classification>,
}

impl EntryContext {
    pub fn team() -> Self {
        Self {
            team_mode: true,
            ..Default::default()
        }
    }

    pub fn individual() -> Self {
        Self::default()
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name_override = Some(name.into());
        self
    }
}

/// A record kind that can be validated out of a [`RawRow`].
pub trait Entry: Sized {
    const KIND: EntryKind;
    /// Columns that must be present in the header for a file to be read.
    const REQUIRED: &'static [&'static str];
    /// Alternate header names accepted for this kind.
    const REMAPPING: FieldRemapping;

    /// Validate one row. Keys the kind does not know are ignored.
    fn from_row(row: &RawRow, ctx: &EntryContext) -> Result<Self, EntryError>;

    fn contributor(&self) -> Option<&str> {
        None
    }

    /// Put a freshly collected file into output order.
    fn sort(_entries: &mut [Self]) {}
}

/// Trimmed value of `field`, `None` when absent or blank.
pub(crate) fn optional<'a>(row: &'a RawRow, field: &str) -> Option<&'a str> {
    row.get(field).map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn required<'a>(
    row: &'a RawRow,
    kind: EntryKind,
    field: &'static str,
) -> Result<&'a str, EntryError> {
    optional(row, field).ok_or(EntryError::MissingField { kind, field })
}

pub(crate) fn parse_int(field: &'static str, value: &str) -> Result<i64, EntryError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| EntryError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

pub(crate) fn optional_int(row: &RawRow, field: &'static str) -> Result<Option<i64>, EntryError> {
    optional(row, field).map(|v| parse_int(field, v)).transpose()
}

/// Contributor for the row: the context override, else the `name` column.
pub(crate) fn contributor(row: &RawRow, ctx: &EntryContext) -> Option<String> {
    ctx.name_override
        .as_deref()
        .or_else(|| optional(row, "name"))
        .map(str::to_string)
}

/// Outside team mode the contributor's name is folded into the comment once,
/// when the record is built.
pub(crate) fn attribute_comment(comment: &str, name: Option<&str>, team_mode: bool) -> String {
    match name {
        Some(name) if !team_mode => format!("({name}) {comment}"),
        _ => comment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_missing() {
        let row = RawRow::from_pairs(2, [("phase", "  "), ("comment", " ok ")]);
        assert_eq!(optional(&row, "phase"), None);
        assert_eq!(optional(&row, "comment"), Some("ok"));
        assert_eq!(
            required(&row, EntryKind::Time, "phase"),
            Err(EntryError::MissingField {
                kind: EntryKind::Time,
                field: "phase"
            })
        );
    }

    #[test]
    fn optional_int_distinguishes_absent_from_zero() {
        let row = RawRow::from_pairs(2, [("est_added", ""), ("est_removed", "0"), ("x", "1o")]);
        assert_eq!(optional_int(&row, "est_added"), Ok(None));
        assert_eq!(optional_int(&row, "est_removed"), Ok(Some(0)));
        assert_eq!(optional_int(&row, "est_modified"), Ok(None));
        assert!(matches!(
            optional_int(&row, "x"),
            Err(EntryError::InvalidInteger { field: "x", .. })
        ));
    }

    #[test]
    fn comment_attribution_only_outside_team_mode() {
        assert_eq!(attribute_comment("Fixed bug", Some("Al"), false), "(Al) Fixed bug");
        assert_eq!(attribute_comment("Fixed bug", Some("Al"), true), "Fixed bug");
        assert_eq!(attribute_comment("Fixed bug", None, false), "Fixed bug");
    }

    #[test]
    fn name_override_wins_over_row() {
        let row = RawRow::from_pairs(2, [("name", "Bo")]);
        assert_eq!(contributor(&row, &EntryContext::team()), Some("Bo".into()));
        let ctx = EntryContext::team().with_name("Al");
        assert_eq!(contributor(&row, &ctx), Some("Al".into()));
    }

    #[test]
    fn error_messages_read_naturally() {
        let err = EntryError::MissingField {
            kind: EntryKind::Defect,
            field: "fix_time",
        };
        assert_eq!(err.to_string(), "defect entry requires a fix_time");
    }
}

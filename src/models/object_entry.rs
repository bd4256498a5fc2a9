use super::entry::{
    Entry, EntryContext, EntryError, EntryKind, optional, optional_int, parse_int, required,
};
use crate::reader::{FieldRemapping, RawRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    New,
    Reused,
}

impl Classification {
    /// Case-insensitive `new` / `reused`.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "new" => Some(Self::New),
            "reused" => Some(Self::Reused),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::New => "new",
            Classification::Reused => "reused",
        }
    }
}

/// Size estimates, shaped by the object's classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectSize {
    New {
        est_lines: i64,
    },
    Reused {
        est_base: i64,
        est_removed: Option<i64>,
        est_modified: Option<i64>,
        est_added: Option<i64>,
    },
}

/// One line of the new or reused objects section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    pub name: String,
    pub object_type: String,
    pub size: ObjectSize,
    pub comment: Option<String>,
}

impl ObjectEntry {
    pub fn classification(&self) -> Classification {
        match self.size {
            ObjectSize::New { .. } => Classification::New,
            ObjectSize::Reused { .. } => Classification::Reused,
        }
    }

    pub fn is_new(&self) -> bool {
        self.classification() == Classification::New
    }
}

/// Explicit classification first (context override, then the `obj_type`
/// column), otherwise inferred from which estimate is filled in.
fn resolve_classification(row: &RawRow, ctx: &EntryContext) -> Result<Classification, EntryError> {
    if let Some(c) = ctx.classification {
        return Ok(c);
    }
    if let Some(label) = optional(row, "obj_type") {
        return Classification::from_label(label)
            .ok_or_else(|| EntryError::UnknownClassification(label.to_string()));
    }
    if optional(row, "est_lines").is_some() {
        Ok(Classification::New)
    } else if optional(row, "est_base").is_some() {
        Ok(Classification::Reused)
    } else {
        Err(EntryError::AmbiguousClassification)
    }
}

impl Entry for ObjectEntry {
    const KIND: EntryKind = EntryKind::Object;
    const REQUIRED: &'static [&'static str] = &["name", "type"];
    const REMAPPING: FieldRemapping = FieldRemapping::new(&[
        ("object type", "obj_type"),
        ("new/reused", "obj_type"),
        ("estimated lines", "est_lines"),
        ("lines", "est_lines"),
        ("estimated base", "est_base"),
        ("base", "est_base"),
        ("estimated removed", "est_removed"),
        ("removed", "est_removed"),
        ("estimated modified", "est_modified"),
        ("modified", "est_modified"),
        ("estimated added", "est_added"),
        ("added", "est_added"),
        ("comments", "comment"),
        ("note", "comment"),
        ("notes", "comment"),
    ]);

    fn from_row(row: &RawRow, ctx: &EntryContext) -> Result<Self, EntryError> {
        let name = required(row, Self::KIND, "name")?;
        let object_type = required(row, Self::KIND, "type")?;

        let size = match resolve_classification(row, ctx)? {
            Classification::New => ObjectSize::New {
                est_lines: parse_int("est_lines", required(row, Self::KIND, "est_lines")?)?,
            },
            Classification::Reused => ObjectSize::Reused {
                est_base: parse_int("est_base", required(row, Self::KIND, "est_base")?)?,
                est_removed: optional_int(row, "est_removed")?,
                est_modified: optional_int(row, "est_modified")?,
                est_added: optional_int(row, "est_added")?,
            },
        };

        Ok(Self {
            name: name.to_string(),
            object_type: object_type.to_string(),
            size,
            comment: optional(row, "comment").map(str::to_string),
        })
    }
}

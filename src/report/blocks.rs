//! Text block for each record kind, one `Vec` element per output line.

use crate::models::{DefectEntry, ObjectEntry, ObjectSize, TimeEntry};
use crate::utils::{date, time};

pub trait Block {
    fn lines(&self) -> Vec<String>;
}

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("\t  {label}: {value}")
}

impl Block for TimeEntry {
    fn lines(&self) -> Vec<String> {
        vec![
            format!("\t- date: {}", date::format_short(self.date)),
            field("start time", time::format_12h(self.start)),
            field("end time", time::format_12h(self.end)),
            field("phase", &self.phase),
            field("comment", &self.comment),
        ]
    }
}

impl Block for ObjectEntry {
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("\t- name: {}", self.name),
            field("type", &self.object_type),
        ];

        match &self.size {
            ObjectSize::New { est_lines } => lines.push(field("estimated lines", est_lines)),
            ObjectSize::Reused {
                est_base,
                est_removed,
                est_modified,
                est_added,
            } => {
                lines.push(field("estimated base", est_base));
                let optional = [
                    ("estimated removed", est_removed),
                    ("estimated modified", est_modified),
                    ("estimated added", est_added),
                ];
                for (label, value) in optional {
                    if let Some(v) = value {
                        lines.push(field(label, v));
                    }
                }
            }
        }

        if let Some(comment) = &self.comment {
            lines.push(field("comment", comment));
        }
        lines
    }
}

impl Block for DefectEntry {
    fn lines(&self) -> Vec<String> {
        vec![
            format!("\t- date: {}", date::format_short(self.date)),
            field("type", &self.defect_type),
            field("fix time", self.fix_time),
            field("comment", &self.comment),
        ]
    }
}

//! PSP++ log rendering: header block, then one section per record kind.

pub mod blocks;
pub mod header;
mod output;

pub use blocks::Block;
pub use header::Header;

pub(crate) use output::prepare_output;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::{DefectEntry, ObjectEntry, TimeEntry};

pub const TIME_LOG: &str = "time log:";
pub const NEW_OBJECTS: &str = "new objects:";
pub const REUSED_OBJECTS: &str = "reused objects:";
pub const DEFECT_LOG: &str = "defect log:";

/// Everything that goes below the header, already validated and ordered.
#[derive(Debug, Default)]
pub struct Report {
    pub time_log: Vec<TimeEntry>,
    pub new_objects: Vec<ObjectEntry>,
    pub reused_objects: Vec<ObjectEntry>,
    pub defect_log: Vec<DefectEntry>,
}

fn render_section<B: Block>(out: &mut String, title: &str, entries: &[B], sep: &str) {
    if entries.is_empty() {
        return;
    }
    for line in ["", title, ""] {
        out.push_str(line);
        out.push_str(sep);
    }
    for entry in entries {
        out.push_str(&entry.lines().join(sep));
        out.push_str(sep);
        out.push_str(sep);
    }
}

impl Report {
    pub fn entry_count(&self) -> usize {
        self.time_log.len()
            + self.new_objects.len()
            + self.reused_objects.len()
            + self.defect_log.len()
    }

    /// Full file contents. Empty sections are left out entirely.
    pub fn render(&self, header: &Header, sep: &str) -> String {
        let mut out = String::new();
        header.render_into(&mut out, sep);
        render_section(&mut out, TIME_LOG, &self.time_log, sep);
        render_section(&mut out, NEW_OBJECTS, &self.new_objects, sep);
        render_section(&mut out, REUSED_OBJECTS, &self.reused_objects, sep);
        render_section(&mut out, DEFECT_LOG, &self.defect_log, sep);
        out
    }

    /// Write the rendered report as UTF-8.
    pub fn write_to(&self, path: &Path, header: &Header, sep: &str) -> AppResult<()> {
        let file = File::create(path).map_err(|source| AppError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let mut w = BufWriter::new(file);
        w.write_all(self.render(header, sep).as_bytes())?;
        w.flush()?;
        Ok(())
    }
}

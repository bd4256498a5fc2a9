use std::path::PathBuf;

use crate::config::{HeaderConfig, LineEnding};
use crate::core::collect::{collect_entries, retain_contributor};
use crate::errors::AppResult;
use crate::models::{Classification, DefectEntry, EntryContext, ObjectEntry, TimeEntry};
use crate::reader::Dialect;
use crate::report::{Header, Report, prepare_output};
use crate::ui::messages::success;
use crate::utils::date;

/// Fully resolved inputs of one `generate` run: nothing left to ask for.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub time_file: Option<PathBuf>,
    pub defect_file: Option<PathBuf>,
    /// Combined object file, one classification per row.
    pub object_file: Option<PathBuf>,
    pub new_file: Option<PathBuf>,
    pub reused_file: Option<PathBuf>,
    pub out_file: PathBuf,
    pub encoding: String,
    pub dialect: Option<Dialect>,
    pub header_file: Option<PathBuf>,
    pub team_mode: bool,
    pub name: Option<String>,
    /// Contributor forced onto every time and defect row.
    pub assign_name: Option<String>,
    pub force: bool,
    pub header: HeaderConfig,
    pub line_ending: LineEnding,
}

impl GenerateRequest {
    pub fn new(out_file: impl Into<PathBuf>) -> Self {
        Self {
            time_file: None,
            defect_file: None,
            object_file: None,
            new_file: None,
            reused_file: None,
            out_file: out_file.into(),
            encoding: "utf-8".to_string(),
            dialect: None,
            header_file: None,
            team_mode: true,
            name: None,
            assign_name: None,
            force: false,
            header: HeaderConfig::default(),
            line_ending: LineEnding::default(),
        }
    }

    fn entry_context(&self) -> EntryContext {
        let ctx = if self.team_mode {
            EntryContext::team()
        } else {
            EntryContext::individual()
        };
        match &self.assign_name {
            Some(name) => ctx.with_name(name.clone()),
            None => ctx,
        }
    }
}

pub struct GenerateLogic;

impl GenerateLogic {
    /// Read every input file of the request into a report.
    ///
    /// Files are processed one after the other; the first structural error
    /// (missing columns, undecodable input) stops the run.
    pub fn build_report(req: &GenerateRequest) -> AppResult<Report> {
        let mut report = Report::default();
        let ctx = req.entry_context();

        //
        // 1. Time log
        //
        if let Some(path) = &req.time_file {
            let mut entries =
                collect_entries::<TimeEntry>(path, &req.encoding, req.dialect, &ctx)?.entries;
            if !req.team_mode {
                retain_contributor(&mut entries, req.name.as_deref());
            }
            report.time_log = entries;
        }

        //
        // 2. Defect log
        //
        if let Some(path) = &req.defect_file {
            let mut entries =
                collect_entries::<DefectEntry>(path, &req.encoding, req.dialect, &ctx)?.entries;
            if !req.team_mode {
                retain_contributor(&mut entries, req.name.as_deref());
            }
            report.defect_log = entries;
        }

        //
        // 3. Objects: combined file first, then the dedicated ones
        //
        if let Some(path) = &req.object_file {
            let objects = collect_entries::<ObjectEntry>(
                path,
                &req.encoding,
                req.dialect,
                &EntryContext::default(),
            )?
            .entries;
            let (new, reused): (Vec<_>, Vec<_>) =
                objects.into_iter().partition(ObjectEntry::is_new);
            report.new_objects = new;
            report.reused_objects = reused;
        }

        for (path, classification) in [
            (&req.new_file, Classification::New),
            (&req.reused_file, Classification::Reused),
        ] {
            let Some(path) = path else { continue };
            let ctx = EntryContext::default().with_classification(classification);
            let objects =
                collect_entries::<ObjectEntry>(path, &req.encoding, req.dialect, &ctx)?.entries;
            match classification {
                Classification::New => report.new_objects.extend(objects),
                Classification::Reused => report.reused_objects.extend(objects),
            }
        }

        tracing::info!(entries = report.entry_count(), "report assembled");
        Ok(report)
    }

    /// Build the report and write it, header first, to `req.out_file`.
    pub fn run(req: &GenerateRequest) -> AppResult<Report> {
        let report = Self::build_report(req)?;

        prepare_output(&req.out_file, req.force)?;

        let header = match &req.header_file {
            Some(path) => Header::from_file(path, &req.encoding)?,
            None => Header::from_config(&req.header, date::today()),
        };

        report.write_to(&req.out_file, &header, req.line_ending.as_str())?;
        success(format!("Successfully wrote {}", req.out_file.display()));
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn combined_and_dedicated_object_files_are_merged() {
        let dir = tempdir().unwrap();
        let mut req = GenerateRequest::new(dir.path().join("out.txt"));
        req.object_file = Some(write(
            &dir,
            "objects.csv",
            "name,type,obj_type,lines,base\nA,m,new,10,\nB,m,reused,,20\n",
        ));
        req.new_file = Some(write(&dir, "new.csv", "name,type,lines\nC,m,30\n"));
        req.reused_file = Some(write(&dir, "reused.csv", "name,type,base,added\nD,m,40,4\n"));

        let report = GenerateLogic::build_report(&req).unwrap();
        let names = |v: &[ObjectEntry]| v.iter().map(|o| o.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&report.new_objects), ["A", "C"]);
        assert_eq!(names(&report.reused_objects), ["B", "D"]);
    }

    #[test]
    fn individual_mode_filters_time_and_defects() {
        let dir = tempdir().unwrap();
        let mut req = GenerateRequest::new(dir.path().join("out.txt"));
        req.team_mode = false;
        req.name = Some("Al".into());
        req.time_file = Some(write(
            &dir,
            "time.csv",
            "date,start,end,phase,comment,name\n\
             1/5/2024,9:00,10:00,code,a,Al\n\
             1/5/2024,9:00,10:00,code,b,Bo\n",
        ));
        req.defect_file = Some(write(
            &dir,
            "defects.csv",
            "date,type,fix time,comment,name\n1/5/2024,logic,5,x,Bo\n1/5/2024,logic,5,y,\n",
        ));

        let report = GenerateLogic::build_report(&req).unwrap();
        assert_eq!(report.time_log.len(), 1);
        assert_eq!(report.time_log[0].comment, "(Al) a");
        assert_eq!(report.defect_log.len(), 1);
        assert_eq!(report.defect_log[0].comment, "y");
    }

    #[test]
    fn assigned_name_replaces_name_column() {
        let dir = tempdir().unwrap();
        let mut req = GenerateRequest::new(dir.path().join("out.txt"));
        req.team_mode = false;
        req.name = Some("Al".into());
        req.assign_name = Some("Al".into());
        req.time_file = Some(write(
            &dir,
            "time.csv",
            "date,start,end,phase,comment,name\n\
             1/5/2024,9:00,10:00,code,a,Bo\n\
             1/5/2024,11:00,12:00,code,b,\n",
        ));

        let report = GenerateLogic::build_report(&req).unwrap();
        let comments: Vec<&str> = report.time_log.iter().map(|e| e.comment.as_str()).collect();
        assert_eq!(comments, ["(Al) a", "(Al) b"]);
    }

    #[test]
    fn run_writes_header_and_sections() {
        let dir = tempdir().unwrap();
        let mut req = GenerateRequest::new(dir.path().join("log.txt"));
        req.line_ending = LineEnding::Lf;
        req.defect_file = Some(write(
            &dir,
            "defects.csv",
            "date,type,fix_time,comment\n1/5/2024,logic,5,x\n",
        ));

        GenerateLogic::run(&req).unwrap();
        let text = fs::read_to_string(&req.out_file).unwrap();
        assert!(text.starts_with("name: _\ndate: "));
        assert!(text.contains("\ndefect log:\n\n\t- date: Jan 5, 2024\n"));
        assert!(!text.contains("time log:"));
    }

    #[test]
    fn missing_columns_stop_the_run() {
        let dir = tempdir().unwrap();
        let mut req = GenerateRequest::new(dir.path().join("out.txt"));
        req.time_file = Some(write(&dir, "time.csv", "date,start,end,phase\n"));
        assert!(GenerateLogic::run(&req).is_err());
        assert!(!req.out_file.exists());
    }
}

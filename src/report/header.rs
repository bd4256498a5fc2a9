use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::config::HeaderConfig;
use crate::errors::{AppError, AppResult};
use crate::reader::resolve_encoding;
use crate::utils::date;

/// Opening block of the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// `key: value` lines, each followed by the line separator.
    Fields(Vec<(String, String)>),
    /// Contents of a user-supplied header file, written unchanged.
    Verbatim(String),
}

impl Header {
    pub fn from_config(cfg: &HeaderConfig, today: NaiveDate) -> Self {
        let fields = [
            ("name", cfg.name.clone()),
            ("date", date::format_long(today)),
            ("program", cfg.program.clone()),
            ("language", cfg.language.clone()),
            ("instructor", cfg.instructor.clone()),
            ("actual added lines", cfg.actual_added_lines.to_string()),
            ("actual base lines", cfg.actual_base_lines.to_string()),
            ("actual modified lines", cfg.actual_modified_lines.to_string()),
            ("actual removed lines", cfg.actual_removed_lines.to_string()),
        ];
        Header::Fields(fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    /// Read a header file in the given encoding.
    pub fn from_file(path: &Path, encoding: &str) -> AppResult<Self> {
        let encoding = resolve_encoding(encoding)?;
        let bytes = fs::read(path).map_err(|source| AppError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let (text, _, malformed) = encoding.decode(&bytes);
        if malformed {
            let line = bytes
                .split(|&b| b == b'\n')
                .position(|l| {
                    encoding
                        .decode_without_bom_handling_and_without_replacement(l)
                        .is_none()
                })
                .map_or(1, |i| i as u64 + 1);
            return Err(AppError::Decoding {
                path: path.to_path_buf(),
                line,
                encoding: encoding.name(),
            });
        }
        Ok(Header::Verbatim(text.into_owned()))
    }

    pub(crate) fn render_into(&self, out: &mut String, sep: &str) {
        match self {
            Header::Fields(fields) => {
                for (key, value) in fields {
                    out.push_str(key);
                    out.push_str(": ");
                    out.push_str(value);
                    out.push_str(sep);
                }
            }
            Header::Verbatim(text) => out.push_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_block_has_nine_lines() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
        let header = Header::from_config(&HeaderConfig::default(), today);
        let mut out = String::new();
        header.render_into(&mut out, "\n");

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "name: _");
        assert_eq!(lines[1], "date: February 3, 2024");
        assert_eq!(lines[8], "actual removed lines: 0");
    }

    #[test]
    fn verbatim_file_is_decoded() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"name: Jos\xe9\nprogram: 2\n").unwrap();
        let header = Header::from_file(file.path(), "latin1").unwrap();
        assert_eq!(header, Header::Verbatim("name: José\nprogram: 2\n".into()));
    }

    #[test]
    fn undecodable_header_reports_line() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"name: ok\nprogram: \xff\n").unwrap();
        let err = Header::from_file(file.path(), "utf-8").unwrap_err();
        assert!(matches!(err, AppError::Decoding { line: 2, .. }));
    }
}

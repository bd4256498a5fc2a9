//! Unified application error type.
//! Reader, pipeline, report and cli modules return AppError so fatal
//! problems bubble up to main with a single message. Row-level problems
//! use `models::EntryError` and never abort a file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot open '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Input decoding
    // ---------------------------
    #[error("Malformed delimited data in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Cannot decode line {line} of '{path}' as {encoding}")]
    Decoding {
        path: PathBuf,
        line: u64,
        encoding: &'static str,
    },

    #[error("Unsupported encoding: {0}")]
    UnknownEncoding(String),

    // ---------------------------
    // Structural errors
    // ---------------------------
    #[error(
        "Some fields missing in '{}'. Found: [{}] Missing: [{}]",
        path.display(),
        found.join(", "),
        missing.join(", ")
    )]
    MissingColumns {
        path: PathBuf,
        found: Vec<String>,
        missing: Vec<String>,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_found_and_missing() {
        let err = AppError::MissingColumns {
            path: PathBuf::from("time.csv"),
            found: vec!["date".into(), "start".into()],
            missing: vec!["comment".into()],
        };
        assert_eq!(
            err.to_string(),
            "Some fields missing in 'time.csv'. Found: [date, start] Missing: [comment]"
        );
    }

    #[test]
    fn decoding_error_names_line() {
        let err = AppError::Decoding {
            path: PathBuf::from("defects.csv"),
            line: 4,
            encoding: "UTF-8",
        };
        assert_eq!(err.to_string(), "Cannot decode line 4 of 'defects.csv' as UTF-8");
    }
}

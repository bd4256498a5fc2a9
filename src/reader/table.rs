//! Header-keyed reader over a delimited file in an arbitrary encoding.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use csv::ByteRecord;
use encoding_rs::{Encoding, UTF_8};

use super::dialect::{Dialect, SAMPLE_SIZE};
use super::remap::FieldRemapping;
use super::row::RawRow;
use crate::errors::{AppError, AppResult};

/// Options for [`TableReader::open`].
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    /// Skip detection and use this dialect.
    pub dialect: Option<Dialect>,
    /// Use these names instead of reading a header row.
    pub fieldnames: Option<Vec<String>>,
    pub remapping: FieldRemapping,
    pub lowercase_fieldnames: bool,
    /// Key collecting the cells of rows longer than the header.
    pub rest_key: Option<String>,
    /// Value for the missing trailing keys of short rows.
    pub rest_value: Option<String>,
}

impl ReaderOptions {
    pub fn with_dialect(mut self, dialect: Option<Dialect>) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_fieldnames(mut self, names: Vec<String>) -> Self {
        self.fieldnames = Some(names);
        self
    }

    pub fn with_remapping(mut self, remapping: FieldRemapping) -> Self {
        self.remapping = remapping;
        self
    }

    pub fn lowercase(mut self, yes: bool) -> Self {
        self.lowercase_fieldnames = yes;
        self
    }

    pub fn with_rest_key(mut self, key: impl Into<String>) -> Self {
        self.rest_key = Some(key.into());
        self
    }

    pub fn with_rest_value(mut self, value: impl Into<String>) -> Self {
        self.rest_value = Some(value.into());
        self
    }
}

/// Resolve an encoding label (`utf-8`, `latin1`, `windows-1252`, ...).
///
/// Only ASCII-compatible encodings are accepted: delimiters and quotes are
/// located on raw bytes before cells are decoded.
pub fn resolve_encoding(label: &str) -> AppResult<&'static Encoding> {
    let label = label.trim();
    let encoding = Encoding::for_label(label.as_bytes())
        .or_else(|| Encoding::for_label(label.replace('-', "").as_bytes()))
        .ok_or_else(|| AppError::UnknownEncoding(label.to_string()))?;

    if !encoding.is_ascii_compatible() {
        return Err(AppError::UnknownEncoding(format!(
            "{} (only ASCII-compatible encodings can be read)",
            encoding.name()
        )));
    }
    Ok(encoding)
}

/// Reads a delimited file row by row, yielding [`RawRow`]s keyed by the
/// header. The file handle is owned by the reader and closed when it is
/// dropped.
pub struct TableReader {
    path: PathBuf,
    encoding: &'static Encoding,
    dialect: Dialect,
    records: csv::Reader<File>,
    record: ByteRecord,
    fieldnames: Option<Vec<String>>,
    remapping: FieldRemapping,
    lowercase_fieldnames: bool,
    rest_key: Option<String>,
    rest_value: Option<String>,
    first_record: bool,
    done: bool,
}

impl TableReader {
    pub fn open(path: impl AsRef<Path>, encoding: &str, options: ReaderOptions) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let encoding = resolve_encoding(encoding)?;

        let mut file = File::open(&path).map_err(|source| AppError::FileOpen {
            path: path.clone(),
            source,
        })?;

        let dialect = match options.dialect {
            Some(d) => d,
            None => {
                let mut sample = Vec::with_capacity(SAMPLE_SIZE);
                (&mut file).take(SAMPLE_SIZE as u64).read_to_end(&mut sample)?;
                file.seek(SeekFrom::Start(0))?;
                Dialect::detect(&sample)
            }
        };

        tracing::debug!(
            path = %path.display(),
            encoding = encoding.name(),
            delimiter = dialect.delimiter_name(),
            "opened delimited file"
        );

        Ok(Self {
            records: dialect.reader_builder().from_reader(file),
            path,
            encoding,
            dialect,
            record: ByteRecord::new(),
            fieldnames: options.fieldnames,
            remapping: options.remapping,
            lowercase_fieldnames: options.lowercase_fieldnames,
            rest_key: options.rest_key,
            rest_value: options.rest_value,
            first_record: true,
            done: false,
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Header field names after lower-casing and remapping. The header row is
    /// read on first access; a file without any non-blank record has no
    /// field names.
    pub fn fieldnames(&mut self) -> AppResult<&[String]> {
        if self.fieldnames.is_none() {
            let names = match self.next_cells()? {
                Some((_, cells)) => cells
                    .into_iter()
                    .map(|cell| {
                        let name = cell.trim();
                        let name = if self.lowercase_fieldnames {
                            name.to_lowercase()
                        } else {
                            name.to_string()
                        };
                        self.remapping.apply(name)
                    })
                    .collect(),
                None => Vec::new(),
            };
            self.fieldnames = Some(names);
        }
        Ok(self.fieldnames.as_deref().unwrap_or_default())
    }

    fn next_row(&mut self) -> AppResult<Option<RawRow>> {
        let fieldnames = self.fieldnames()?.to_vec();

        let Some((line, mut cells)) = self.next_cells()? else {
            return Ok(None);
        };

        let mut row = RawRow::new(line);
        let overflow = if cells.len() > fieldnames.len() {
            cells.split_off(fieldnames.len())
        } else {
            Vec::new()
        };

        let mut cells = cells.into_iter();
        for name in fieldnames {
            let value = cells.next().or_else(|| self.rest_value.clone());
            row.insert(name, value);
        }

        if !overflow.is_empty() {
            match &self.rest_key {
                Some(key) => row.set_rest(key.clone(), overflow),
                None => tracing::debug!(
                    path = %self.path.display(),
                    line,
                    dropped = overflow.len(),
                    "row longer than header, extra cells dropped"
                ),
            }
        }

        Ok(Some(row))
    }

    /// Next non-blank record, decoded, with its line number.
    fn next_cells(&mut self) -> AppResult<Option<(u64, Vec<String>)>> {
        loop {
            let more = self
                .records
                .read_byte_record(&mut self.record)
                .map_err(|source| AppError::Csv {
                    path: self.path.clone(),
                    source,
                })?;
            if !more {
                return Ok(None);
            }

            let line = self.record.position().map_or(0, |p| p.line());
            let mut cells = self.decode_record(line)?;

            if std::mem::take(&mut self.first_record)
                && self.encoding == UTF_8
                && let Some(first) = cells.first_mut()
                && first.starts_with('\u{feff}')
            {
                first.remove(0);
            }

            // an empty physical line; delimiter-only rows go on to validation
            if cells.is_empty() || (cells.len() == 1 && cells[0].is_empty()) {
                continue;
            }
            return Ok(Some((line, cells)));
        }
    }

    fn decode_record(&self, line: u64) -> AppResult<Vec<String>> {
        self.record
            .iter()
            .map(|bytes| {
                self.encoding
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(|text| text.into_owned())
                    .ok_or_else(|| AppError::Decoding {
                        path: self.path.clone(),
                        line,
                        encoding: self.encoding.name(),
                    })
            })
            .collect()
    }
}

impl Iterator for TableReader {
    type Item = AppResult<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

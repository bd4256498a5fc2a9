//! Dialect detection for delimited input.
//!
//! Only the three delimiters seen in spreadsheet exports are considered:
//! comma, tab and semicolon. Each candidate is scored on how often and how
//! consistently it appears (outside quotes) across the sampled lines.

use clap::ValueEnum;
use csv::ReaderBuilder;

/// Number of bytes sampled from the start of a file for detection.
pub const SAMPLE_SIZE: usize = 1024;

const CANDIDATES: [u8; 3] = [b',', b'\t', b';'];
const QUOTES: [u8; 2] = [b'"', b'\''];

/// Delimiter / quoting conventions of a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    pub quote: u8,
    /// `""` inside a quoted field stands for one quote character.
    pub double_quote: bool,
    pub escape: Option<u8>,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::with_delimiter(b',')
    }
}

impl Dialect {
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter,
            quote: b'"',
            double_quote: true,
            escape: None,
        }
    }

    /// Detect the dialect of `sample`, falling back to the comma default.
    pub fn detect(sample: &[u8]) -> Self {
        Self::sniff(sample).unwrap_or_default()
    }

    /// Detect the dialect of `sample`. Returns `None` when no candidate
    /// delimiter appears on any sampled line.
    pub fn sniff(sample: &[u8]) -> Option<Self> {
        let lines = sample_lines(sample);
        if lines.is_empty() {
            return None;
        }

        let quote = detect_quote(&lines);

        let mut best: Option<(u8, f32)> = None;
        for &delimiter in &CANDIDATES {
            let counts: Vec<usize> = lines
                .iter()
                .map(|line| count_outside_quotes(line, delimiter, quote))
                .collect();

            let score = consistency_score(&counts);
            if score > 0.0 && best.is_none_or(|(_, s)| score > s) {
                best = Some((delimiter, score));
            }
        }

        best.map(|(delimiter, _)| {
            let escape = detect_escape(&lines, delimiter, quote);
            Self {
                delimiter,
                quote,
                double_quote: escape.is_none(),
                escape,
            }
        })
    }

    /// Human readable delimiter name, used in log output.
    pub fn delimiter_name(&self) -> &'static str {
        match self.delimiter {
            b',' => "comma",
            b'\t' => "tab",
            b';' => "semicolon",
            _ => "custom",
        }
    }

    /// A csv reader configured for this dialect. Header handling is left to
    /// the caller, and rows may have any length.
    pub(crate) fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .double_quote(self.double_quote)
            .escape(self.escape);
        builder
    }
}

/// Delimiter choices accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Delimiter {
    Comma,
    Tab,
    Semicolon,
}

impl From<Delimiter> for Dialect {
    fn from(d: Delimiter) -> Self {
        match d {
            Delimiter::Comma => Dialect::with_delimiter(b','),
            Delimiter::Tab => Dialect::with_delimiter(b'\t'),
            Delimiter::Semicolon => Dialect::with_delimiter(b';'),
        }
    }
}

/// Split the sample into non-blank lines. A sample that filled the whole
/// buffer probably ends mid-line, so its last line is dropped.
fn sample_lines(sample: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = sample
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect();

    if sample.len() >= SAMPLE_SIZE && lines.len() > 1 {
        lines.pop();
    }

    lines
        .into_iter()
        .filter(|line| !line.iter().all(u8::is_ascii_whitespace))
        .collect()
}

/// Pick the quote character that opens fields most often: at line start or
/// right after a candidate delimiter.
fn detect_quote(lines: &[&[u8]]) -> u8 {
    let opening = |quote: u8| -> usize {
        lines
            .iter()
            .map(|line| {
                line.iter()
                    .enumerate()
                    .filter(|&(i, &b)| b == quote && (i == 0 || CANDIDATES.contains(&line[i - 1])))
                    .count()
            })
            .sum()
    };

    let double = opening(QUOTES[0]);
    let single = opening(QUOTES[1]);
    if single > double { QUOTES[1] } else { QUOTES[0] }
}

/// Backslash escaping is assumed only when `\<quote>` sits inside a quoted
/// field and is followed by more field text. A backslash right before the
/// closing quote (`"C:\tmp\"`) is a literal backslash.
fn detect_escape(lines: &[&[u8]], delimiter: u8, quote: u8) -> Option<u8> {
    for line in lines {
        let mut in_quotes = false;
        for (i, &b) in line.iter().enumerate() {
            if in_quotes && b == b'\\' && line.get(i + 1) == Some(&quote) {
                if let Some(&next) = line.get(i + 2)
                    && next != delimiter
                {
                    return Some(b'\\');
                }
            } else if b == quote {
                in_quotes = !in_quotes;
            }
        }
    }
    None
}

fn count_outside_quotes(line: &[u8], delimiter: u8, quote: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for &b in line.iter() {
        if b == quote {
            in_quotes = !in_quotes;
        } else if b == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}

/// Mean count damped by its spread: a delimiter that shows up the same
/// number of times on every line beats one that is merely frequent.
fn consistency_score(counts: &[usize]) -> f32 {
    if counts.is_empty() {
        return 0.0;
    }
    let n = counts.len() as f32;
    let mean = counts.iter().sum::<usize>() as f32 / n;
    let variance = counts
        .iter()
        .map(|&c| (c as f32 - mean).powi(2))
        .sum::<f32>()
        / n;
    mean / (1.0 + variance.sqrt())
}

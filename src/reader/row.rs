use std::fmt;

/// One data row keyed by (canonical) header names, in header order.
///
/// A value is `None` only when the row was shorter than the header and no
/// rest value was configured. Cells beyond the header end up in `rest`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    line: u64,
    fields: Vec<(String, Option<String>)>,
    rest: Option<(String, Vec<String>)>,
}

impl RawRow {
    pub fn new(line: u64) -> Self {
        Self {
            line,
            ..Default::default()
        }
    }

    /// Build a row from key/value pairs. Handy for callers that already hold
    /// parsed data.
    pub fn from_pairs<K, V>(line: u64, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new(line);
        for (k, v) in pairs {
            row.insert(k, Some(v.into()));
        }
        row
    }

    /// Insert a field. A repeated key keeps its first position but takes the
    /// newer value.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn set_rest(&mut self, key: impl Into<String>, cells: Vec<String>) {
        self.rest = Some((key.into(), cells));
    }

    /// Raw value of `key`, if the key exists and holds a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Physical line of the record in its source file (1-based).
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn rest(&self) -> Option<(&str, &[String])> {
        self.rest.as_ref().map(|(k, cells)| (k.as_str(), cells.as_slice()))
    }
}

/// `{date: 1/5/2024, start: 9:30, ...}`, used when reporting rejected rows.
impl fmt::Display for RawRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v.unwrap_or("")))
            .collect();
        if let Some((key, cells)) = self.rest() {
            parts.push(format!("{}: [{}]", key, cells.join(", ")));
        }
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// Static table of alternate field names and the canonical name each one
/// stands for. Lookups are exact, so headers are lower-cased before they are
/// matched.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldRemapping(&'static [(&'static str, &'static str)]);

impl FieldRemapping {
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self(pairs)
    }

    pub const fn empty() -> Self {
        Self(&[])
    }

    /// Canonical name for `name`, if `name` is a known alternate.
    pub fn canonical(&self, name: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(alternate, _)| *alternate == name)
            .map(|(_, canonical)| *canonical)
    }

    /// Rename `name` if it is a known alternate, otherwise keep it.
    pub fn apply(&self, name: String) -> String {
        match self.canonical(&name) {
            Some(canonical) => canonical.to_string(),
            None => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: FieldRemapping = FieldRemapping::new(&[("notes", "comment"), ("finish", "end")]);

    #[test]
    fn renames_known_alternates() {
        assert_eq!(TABLE.apply("notes".into()), "comment");
        assert_eq!(TABLE.apply("finish".into()), "end");
    }

    #[test]
    fn keeps_unknown_and_is_case_sensitive() {
        assert_eq!(TABLE.apply("phase".into()), "phase");
        assert_eq!(TABLE.canonical("Notes"), None);
        assert_eq!(FieldRemapping::empty().canonical("notes"), None);
    }
}

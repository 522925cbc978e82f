use std::fmt::Display;

/// A Gene Ontology term identifier
///
/// Typically `GO:` followed by seven digits, e.g. `GO:0006915`. The
/// identifier is kept as the verbatim key of the gene-set document rather
/// than re-rendered from a numeric form, so short or unconventional
/// accessions round-trip unchanged into the `go_ids` column.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GoTermId {
    inner: String,
}

impl GoTermId {
    /// Constructs a term identifier from its text form
    pub fn new(value: &str) -> Self {
        Self {
            inner: value.to_string(),
        }
    }

    /// The text form of the identifier
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for GoTermId {
    fn from(value: &str) -> Self {
        GoTermId::new(value)
    }
}

impl From<String> for GoTermId {
    fn from(inner: String) -> Self {
        Self { inner }
    }
}

impl Display for GoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl PartialEq<str> for GoTermId {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbatim_round_trip() {
        // short accessions must not be zero-padded
        assert_eq!(GoTermId::new("GO:001").as_str(), "GO:001");
        assert_eq!(GoTermId::new("GO:0006915").to_string(), "GO:0006915");
    }
}

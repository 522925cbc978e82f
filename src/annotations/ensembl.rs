use std::fmt::Display;

/// An Ensembl gene accession (`ENSG…`)
///
/// The accession is an opaque string: it is compared byte-for-byte and
/// written out exactly as it appeared in the input.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EnsemblId {
    inner: String,
}

impl EnsemblId {
    /// Constructs an accession from its text form
    pub fn new(value: &str) -> Self {
        Self {
            inner: value.to_string(),
        }
    }

    /// The text form of the accession
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for EnsemblId {
    fn from(value: &str) -> Self {
        EnsemblId::new(value)
    }
}

impl From<String> for EnsemblId {
    fn from(inner: String) -> Self {
        Self { inner }
    }
}

impl Display for EnsemblId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl PartialEq<str> for EnsemblId {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

//! The GO gene sets: which Entrez genes carry which GO term
//!
//! The source document is a single JSON object whose keys are GO term
//! identifiers and whose values are arrays of Entrez identifiers. Both
//! the key order and the per-term array order are preserved, because the
//! annotation output depends on the walk order.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use tracing::info;

use crate::annotations::{EntrezId, GoTermId};
use crate::{GoaError, GoaResult};

/// GO term to Entrez gene sets, in document order
///
/// # Examples
///
/// ```
/// use goa::GoGeneSet;
///
/// let geneset = GoGeneSet::from_path("tests/data/go_geneset.json").unwrap();
/// assert_eq!(geneset.len(), 2);
///
/// let (term, entrez_ids) = geneset.iter().next().unwrap();
/// assert_eq!(term.as_str(), "GO:0006915");
/// assert_eq!(entrez_ids.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct GoGeneSet {
    inner: IndexMap<GoTermId, Vec<EntrezId>>,
}

impl GoGeneSet {
    /// Reads the gene sets from a JSON file
    ///
    /// # Errors
    ///
    /// - [`GoaError::CannotOpenFile`]: the file is missing or unreadable
    /// - [`GoaError::InvalidInput`]: the document is not a JSON object of
    ///   string arrays
    pub fn from_path<P: AsRef<Path>>(path: P) -> GoaResult<Self> {
        let filename = path.as_ref().display().to_string();
        let file =
            File::open(path.as_ref()).map_err(|_| GoaError::CannotOpenFile(filename.clone()))?;
        let geneset = Self::from_reader(BufReader::new(file), &filename)?;
        info!("loaded {} GO terms from {}", geneset.len(), filename);
        Ok(geneset)
    }

    /// Reads the gene sets from any JSON source
    ///
    /// `filename` only labels error messages.
    ///
    /// # Errors
    ///
    /// See [`GoGeneSet::from_path`], minus the file-open failure.
    pub fn from_reader<R: Read>(reader: R, filename: &str) -> GoaResult<Self> {
        let raw: IndexMap<String, Vec<String>> = serde_json::from_reader(reader)
            .map_err(|err| GoaError::InvalidInput(format!("{filename}: {err}")))?;

        let mut inner = IndexMap::with_capacity(raw.len());
        for (term, entrez_ids) in raw {
            inner.insert(
                GoTermId::from(term),
                entrez_ids.iter().map(|id| EntrezId::new(id)).collect(),
            );
        }
        Ok(Self { inner })
    }

    /// Adds one gene set, appended behind the existing terms
    pub fn insert(&mut self, term: GoTermId, entrez_ids: Vec<EntrezId>) {
        self.inner.insert(term, entrez_ids);
    }

    /// Iterates `(term, Entrez identifiers)` pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&GoTermId, &[EntrezId])> {
        self.inner.iter().map(|(term, ids)| (term, ids.as_slice()))
    }

    /// Number of GO terms
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the document held no terms
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

//! The Entrez-to-Ensembl identifier mapping
//!
//! One Entrez gene can map to several Ensembl accessions (legacy and
//! alternate annotations) and the same accession can appear under several
//! Entrez genes, so the index is an ordered one-to-many relation rather
//! than a plain dictionary.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::annotations::{EnsemblId, EntrezId};
use crate::{GoaError, GoaResult};

/// Name of the Entrez identifier column in the mapping file
pub const ENTREZ_COLUMN: &str = "ENTREZID";
/// Name of the Ensembl identifier column in the mapping file
pub const ENSEMBL_COLUMN: &str = "ENSEMBL";

/// Missing-value marker produced by the R/pandas exports feeding this tool
const NA_MARKER: &str = "NA";

/// One row of the mapping file
///
/// Both fields are optional: annotation releases routinely carry genes
/// with no counterpart on the other side.
#[derive(Debug, Deserialize)]
struct MappingRecord {
    #[serde(rename = "ENTREZID")]
    entrez_id: Option<String>,
    #[serde(rename = "ENSEMBL")]
    ensembl_id: Option<String>,
}

impl MappingRecord {
    /// The identifier pair, or `None` if either side is missing
    fn identifiers(&self) -> Option<(EntrezId, EnsemblId)> {
        let entrez = present(self.entrez_id.as_deref())?;
        let ensembl = present(self.ensembl_id.as_deref())?;
        Some((EntrezId::new(entrez), EnsemblId::new(ensembl)))
    }
}

/// Filters out empty fields and the `NA` marker
fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|value| {
        let value = value.trim();
        !value.is_empty() && value != NA_MARKER
    })
}

/// Ordered one-to-many mapping from Entrez to Ensembl gene identifiers
///
/// For every Entrez identifier the Ensembl accessions keep the order in
/// which they were first encountered in the mapping file, which keeps the
/// downstream join deterministic. Duplicate pairs are kept as-is.
///
/// # Examples
///
/// ```
/// use goa::{EntrezId, EntrezMapping};
///
/// let mapping = EntrezMapping::from_path("tests/data/gene_entrezid.txt").unwrap();
///
/// let ids = mapping.ensembl_ids(&EntrezId::new("7157"));
/// assert_eq!(ids.len(), 1);
/// assert_eq!(ids[0].as_str(), "ENSG00000141510");
///
/// // unknown identifiers are a miss, not an error
/// assert!(mapping.ensembl_ids(&EntrezId::new("999999")).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct EntrezMapping {
    inner: HashMap<EntrezId, SmallVec<[EnsemblId; 1]>>,
}

impl EntrezMapping {
    /// Reads the mapping from a tab-separated file with `ENTREZID` and
    /// `ENSEMBL` columns
    ///
    /// Rows missing either identifier (empty field or `NA`) are skipped
    /// without inserting a placeholder.
    ///
    /// # Errors
    ///
    /// - [`GoaError::CannotOpenFile`]: the file is missing or unreadable
    /// - [`GoaError::MissingColumn`]: a required column is absent
    /// - [`GoaError::InvalidInput`]: a row cannot be parsed
    pub fn from_path<P: AsRef<Path>>(path: P) -> GoaResult<Self> {
        let filename = path.as_ref().display().to_string();
        let file =
            File::open(path.as_ref()).map_err(|_| GoaError::CannotOpenFile(filename.clone()))?;
        let mapping = Self::from_reader(BufReader::new(file), &filename)?;
        info!(
            "indexed {} Entrez identifiers from {}",
            mapping.len(),
            filename
        );
        Ok(mapping)
    }

    /// Reads the mapping from any tab-separated source
    ///
    /// `filename` only labels error messages.
    ///
    /// # Errors
    ///
    /// See [`EntrezMapping::from_path`], minus the file-open failure.
    pub fn from_reader<R: Read>(reader: R, filename: &str) -> GoaResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|err| GoaError::InvalidInput(format!("{filename}: {err}")))?;
        for column in [ENTREZ_COLUMN, ENSEMBL_COLUMN] {
            if !headers.iter().any(|header| header == column) {
                return Err(GoaError::MissingColumn(
                    filename.to_string(),
                    column.to_string(),
                ));
            }
        }

        let mut mapping = Self::default();
        for record in reader.deserialize() {
            let record: MappingRecord =
                record.map_err(|err| GoaError::InvalidInput(format!("{filename}: {err}")))?;
            match record.identifiers() {
                Some((entrez, ensembl)) => mapping.insert(entrez, ensembl),
                None => debug!("skipping mapping row with missing identifier"),
            }
        }
        Ok(mapping)
    }

    /// Adds one Entrez-to-Ensembl pair, keeping encounter order
    pub fn insert(&mut self, entrez: EntrezId, ensembl: EnsemblId) {
        self.inner.entry(entrez).or_default().push(ensembl);
    }

    /// All Ensembl accessions mapped to the identifier, in encounter order
    ///
    /// An unknown identifier yields an empty slice, never an error.
    pub fn ensembl_ids(&self, entrez: &EntrezId) -> &[EnsemblId] {
        match self.inner.get(entrez) {
            Some(ids) => ids.as_slice(),
            None => &[],
        }
    }

    /// Number of distinct Entrez identifiers in the mapping
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the mapping holds no identifiers
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

//! Loading, indexing and serializing the tab-separated gene table
//!
//! The table is row-oriented and fully opaque except for the `gene_id`
//! column: every field is read as text and written back verbatim, so
//! numeric-looking values never pick up floating-point artifacts on the
//! way through.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use smallvec::SmallVec;
use tracing::info;

use crate::annotations::EnsemblId;
use crate::{GoaError, GoaResult};

/// Name of the column holding the Ensembl gene identifier
pub const GENE_ID_COLUMN: &str = "gene_id";
/// Name of the column receiving the GO annotations
pub const GO_IDS_COLUMN: &str = "go_ids";

/// Positions of all rows sharing one `gene_id`, in table order
///
/// Gene identifiers are expected to be unique, so a single position is the
/// common case; duplicated identifiers fan out to several positions.
pub type RowPositions = SmallVec<[usize; 1]>;

/// The gene table: a header plus text rows, in file order
///
/// # Examples
///
/// ```
/// use goa::GeneTable;
///
/// let table = GeneTable::from_path("tests/data/gene_table.txt").unwrap();
///
/// assert_eq!(table.columns(), ["gene_id", "symbol", "chromosome"]);
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.gene_id(0), "ENSG00000141510");
/// ```
#[derive(Debug, Clone)]
pub struct GeneTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    gene_id_idx: usize,
}

impl GeneTable {
    /// Reads a gene table from a tab-separated file with a header row
    ///
    /// # Errors
    ///
    /// - [`GoaError::CannotOpenFile`]: the file is missing or unreadable
    /// - [`GoaError::MissingColumn`]: the header has no `gene_id` column
    /// - [`GoaError::InvalidInput`]: a row cannot be parsed or does not
    ///   match the header width
    pub fn from_path<P: AsRef<Path>>(path: P) -> GoaResult<Self> {
        let filename = path.as_ref().display().to_string();
        let file =
            File::open(path.as_ref()).map_err(|_| GoaError::CannotOpenFile(filename.clone()))?;
        let table = Self::from_reader(BufReader::new(file), &filename)?;
        info!("loaded {} gene rows from {}", table.len(), filename);
        Ok(table)
    }

    /// Reads a gene table from any tab-separated source
    ///
    /// `filename` only labels error messages.
    ///
    /// # Errors
    ///
    /// See [`GeneTable::from_path`], minus the file-open failure.
    pub fn from_reader<R: Read>(reader: R, filename: &str) -> GoaResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let columns: Vec<String> = reader
            .headers()
            .map_err(|err| GoaError::InvalidInput(format!("{filename}: {err}")))?
            .iter()
            .map(String::from)
            .collect();
        let gene_id_idx = columns
            .iter()
            .position(|column| column == GENE_ID_COLUMN)
            .ok_or_else(|| {
                GoaError::MissingColumn(filename.to_string(), GENE_ID_COLUMN.to_string())
            })?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|err| GoaError::InvalidInput(format!("{filename}: {err}")))?;
            rows.push(record.iter().map(String::from).collect());
        }

        Ok(Self {
            columns,
            rows,
            gene_id_idx,
        })
    }

    /// The column names, in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `gene_id` value of the given row
    pub fn gene_id(&self, row: usize) -> &str {
        &self.rows[row][self.gene_id_idx]
    }

    /// Builds the lookup from Ensembl accession to row position(s)
    ///
    /// Built once before the join so that resolving an accession is a map
    /// lookup instead of a table scan. Duplicated `gene_id` values keep
    /// every position.
    pub fn row_positions(&self) -> HashMap<EnsemblId, RowPositions> {
        let mut positions: HashMap<EnsemblId, RowPositions> =
            HashMap::with_capacity(self.rows.len());
        for (pos, row) in self.rows.iter().enumerate() {
            positions
                .entry(EnsemblId::new(&row[self.gene_id_idx]))
                .or_default()
                .push(pos);
        }
        positions
    }

    /// Fills the `go_ids` column with one value per row
    ///
    /// If the table already carries a `go_ids` column its values are
    /// replaced in place and the column keeps its position; otherwise the
    /// column is appended after the existing ones.
    pub fn set_go_ids(&mut self, values: Vec<String>) {
        assert_eq!(
            values.len(),
            self.rows.len(),
            "one go_ids value per table row"
        );
        match self.columns.iter().position(|column| column == GO_IDS_COLUMN) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(GO_IDS_COLUMN.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }

    /// Serializes the table to a tab-separated file with a header row
    ///
    /// Row order and column order are preserved; no index column is
    /// emitted. Fields are quoted only when they contain a delimiter,
    /// quote or newline.
    ///
    /// # Errors
    ///
    /// [`GoaError::CannotWriteFile`] if the destination cannot be created
    /// or written.
    pub fn write_path<P: AsRef<Path>>(&self, path: P) -> GoaResult<()> {
        let filename = path.as_ref().display().to_string();
        let file =
            File::create(path.as_ref()).map_err(|_| GoaError::CannotWriteFile(filename.clone()))?;
        self.write_into(file, &filename)?;
        info!("wrote {} rows to {}", self.len(), filename);
        Ok(())
    }

    fn write_into<W: Write>(&self, writer: W, filename: &str) -> GoaResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);
        writer
            .write_record(&self.columns)
            .map_err(|_| GoaError::CannotWriteFile(filename.to_string()))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|_| GoaError::CannotWriteFile(filename.to_string()))?;
        }
        writer
            .flush()
            .map_err(|_| GoaError::CannotWriteFile(filename.to_string()))
    }
}

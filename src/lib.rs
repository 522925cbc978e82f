//! Annotate Ensembl gene tables with Gene Ontology terms
//!
//! `goa` joins three files into one annotated table:
//! - a tab-separated gene table with a `gene_id` column holding Ensembl
//!   gene identifiers
//! - a tab-separated mapping table with `ENTREZID` and `ENSEMBL` columns
//! - a JSON document mapping GO term identifiers to lists of Entrez gene
//!   identifiers
//!
//! The output is the gene table with an additional `go_ids` column listing
//! every GO identifier that resolves to the row's gene, pipe-delimited.
//! A gene annotated with `GO:0006915` reads `"|GO:0006915"` (the leading
//! delimiter reflects the accumulation from an empty field), an
//! unannotated gene keeps the empty string.
//!
//! # Examples
//!
//! ```
//! use goa::{GeneTable, EntrezMapping, GoGeneSet, GoAnnotations};
//!
//! let mut table = GeneTable::from_path("tests/data/gene_table.txt").unwrap();
//! let mapping = EntrezMapping::from_path("tests/data/gene_entrezid.txt").unwrap();
//! let geneset = GoGeneSet::from_path("tests/data/go_geneset.json").unwrap();
//!
//! GoAnnotations::build(&table, &geneset, &mapping).merge_into(&mut table);
//!
//! assert_eq!(table.columns().last().unwrap(), "go_ids");
//! ```
use thiserror::Error;

pub mod annotate;
pub mod annotations;
pub mod geneset;
pub mod mapping;
pub mod table;

pub use annotate::GoAnnotations;
pub use annotations::{EnsemblId, EntrezId, GoTermId};
pub use geneset::GoGeneSet;
pub use mapping::EntrezMapping;
pub use table::GeneTable;

/// Default name of the gene table input
pub const GENE_TABLE_FILENAME: &str = "gene_table.txt";
/// Default name of the Entrez-to-Ensembl mapping input
pub const ENTREZ_MAPPING_FILENAME: &str = "gene_entrezid.txt";
/// Default name of the GO gene-set input
pub const GO_GENESET_FILENAME: &str = "go_geneset.json";
/// Default name of the annotated output table
pub const ANNOTATED_TABLE_FILENAME: &str = "gene_table_goids.txt";

#[derive(Error, Debug)]
pub enum GoaError {
    #[error("cannot open file: {0}")]
    CannotOpenFile(String),
    #[error("cannot write file: {0}")]
    CannotWriteFile(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("column '{1}' missing in {0}")]
    MissingColumn(String, String),
}

/// Crate-wide `Result` with a [`GoaError`]
pub type GoaResult<T> = Result<T, GoaError>;

//! Typed gene and ontology identifiers
//!
//! All three identifier systems travel as text through the input files, so
//! each gets its own newtype instead of a bare `String`:
//! - [`EntrezId`]: numeric NCBI gene identifier, normalized on construction
//! - [`EnsemblId`]: Ensembl gene accession, opaque
//! - [`GoTermId`]: Gene Ontology accession, opaque and reproduced verbatim
//!
//! Keeping the three apart makes it impossible to look up an Ensembl
//! accession in an Entrez-keyed index by accident.

mod ensembl;
mod entrez;
mod go_term;

pub use ensembl::EnsemblId;
pub use entrez::EntrezId;
pub use go_term::GoTermId;

//! Joining the GO gene sets onto the gene table
//!
//! The join resolves every GO term through the chain
//! GO term → Entrez identifier → Ensembl accession → table row(s)
//! and collects the matching GO identifiers per row. Identifiers that do
//! not resolve at any step are skipped; that is the normal case for an
//! annotation release, not a failure.

use tracing::{debug, info};

use crate::annotations::GoTermId;
use crate::geneset::GoGeneSet;
use crate::mapping::EntrezMapping;
use crate::table::GeneTable;

/// Per-row GO annotations, ready to merge into the `go_ids` column
///
/// Row `i` of the table owns list `i`, in join order. Rendering prefixes
/// every identifier with `|`, so a single annotation reads
/// `"|GO:0006915"` and an unannotated row stays the empty string.
/// Duplicate identifiers in one list are kept: a gene reached by the same
/// GO term through two different Entrez identifiers renders it twice.
#[derive(Debug)]
pub struct GoAnnotations {
    lists: Vec<Vec<GoTermId>>,
}

impl GoAnnotations {
    /// Resolves the gene sets against the table and collects the
    /// annotations
    ///
    /// The walk order is deterministic: GO terms in document order, Entrez
    /// identifiers in per-term order, Ensembl accessions in mapping
    /// encounter order, rows in table order.
    ///
    /// # Examples
    ///
    /// ```
    /// use goa::{EnsemblId, EntrezId, EntrezMapping, GeneTable, GoAnnotations, GoGeneSet, GoTermId};
    ///
    /// let table = GeneTable::from_reader(
    ///     "gene_id\nENSG001\nENSG002\n".as_bytes(),
    ///     "genes",
    /// ).unwrap();
    ///
    /// let mut mapping = EntrezMapping::default();
    /// mapping.insert(EntrezId::new("100"), EnsemblId::new("ENSG001"));
    ///
    /// let mut geneset = GoGeneSet::default();
    /// geneset.insert(GoTermId::new("GO:001"), vec![EntrezId::new("100")]);
    ///
    /// let annotations = GoAnnotations::build(&table, &geneset, &mapping);
    /// assert_eq!(annotations.render(), ["|GO:001", ""]);
    /// ```
    pub fn build(table: &GeneTable, geneset: &GoGeneSet, mapping: &EntrezMapping) -> Self {
        let positions = table.row_positions();
        let mut annotations = Self {
            lists: vec![Vec::new(); table.len()],
        };

        for (go_id, entrez_ids) in geneset.iter() {
            for entrez_id in entrez_ids {
                let ensembl_ids = mapping.ensembl_ids(entrez_id);
                if ensembl_ids.is_empty() {
                    debug!("{} of {} has no Ensembl equivalent", entrez_id, go_id);
                    continue;
                }
                for ensembl_id in ensembl_ids {
                    let Some(rows) = positions.get(ensembl_id) else {
                        debug!("{} is not in the gene table", ensembl_id);
                        continue;
                    };
                    for &row in rows {
                        annotations.lists[row].push(go_id.clone());
                    }
                }
            }
        }

        info!(
            "annotated {} of {} genes",
            annotations.annotated_rows(),
            table.len()
        );
        annotations
    }

    /// Number of rows that received at least one annotation
    pub fn annotated_rows(&self) -> usize {
        self.lists.iter().filter(|list| !list.is_empty()).count()
    }

    /// Renders every row's annotations into its `go_ids` field
    pub fn render(&self) -> Vec<String> {
        self.lists
            .iter()
            .map(|terms| {
                let mut field = String::new();
                for term in terms {
                    field.push('|');
                    field.push_str(term.as_str());
                }
                field
            })
            .collect()
    }

    /// Writes the rendered annotations into the table's `go_ids` column
    ///
    /// The column is overwritten, never appended to, so merging the same
    /// annotations twice is a no-op.
    pub fn merge_into(&self, table: &mut GeneTable) {
        table.set_go_ids(self.render());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::annotations::{EnsemblId, EntrezId};

    fn table(data: &str) -> GeneTable {
        GeneTable::from_reader(data.as_bytes(), "genes").unwrap()
    }

    fn geneset(data: &str) -> GoGeneSet {
        GoGeneSet::from_reader(data.as_bytes(), "geneset").unwrap()
    }

    fn mapping(pairs: &[(&str, &str)]) -> EntrezMapping {
        let mut mapping = EntrezMapping::default();
        for (entrez, ensembl) in pairs {
            mapping.insert(EntrezId::new(entrez), EnsemblId::new(ensembl));
        }
        mapping
    }

    #[test]
    fn resolved_and_unresolved_terms() {
        let table = table("gene_id\nENSG001\nENSG002\n");
        let mapping = mapping(&[("100", "ENSG001"), ("200", "ENSG002")]);
        let geneset = geneset(r#"{"GO:001": ["100"], "GO:002": ["999"]}"#);

        let annotations = GoAnnotations::build(&table, &geneset, &mapping);
        assert_eq!(annotations.render(), ["|GO:001", ""]);
        assert_eq!(annotations.annotated_rows(), 1);
    }

    #[test]
    fn entrez_fan_out_annotates_every_target() {
        let table = table("gene_id\nENSG003\nENSG004\n");
        let mapping = mapping(&[("300", "ENSG003"), ("300", "ENSG004")]);
        let geneset = geneset(r#"{"GO:010": ["300"]}"#);

        let annotations = GoAnnotations::build(&table, &geneset, &mapping);
        assert_eq!(annotations.render(), ["|GO:010", "|GO:010"]);
    }

    #[test]
    fn duplicate_annotations_are_kept() {
        let table = table("gene_id\nENSG005\n");
        let mapping = mapping(&[("400", "ENSG005"), ("401", "ENSG005")]);
        let geneset = geneset(r#"{"GO:020": ["400", "401"]}"#);

        let annotations = GoAnnotations::build(&table, &geneset, &mapping);
        assert_eq!(annotations.render(), ["|GO:020|GO:020"]);
    }

    #[test]
    fn terms_accumulate_in_document_order() {
        let table = table("gene_id\nENSG001\n");
        let mapping = mapping(&[("100", "ENSG001")]);
        let geneset = geneset(r#"{"GO:900": ["100"], "GO:100": ["100"]}"#);

        let annotations = GoAnnotations::build(&table, &geneset, &mapping);
        assert_eq!(annotations.render(), ["|GO:900|GO:100"]);
    }

    #[test]
    fn duplicated_gene_id_rows_all_match() {
        let table = table("gene_id\nENSG001\nENSG002\nENSG001\n");
        let mapping = mapping(&[("100", "ENSG001")]);
        let geneset = geneset(r#"{"GO:001": ["100"]}"#);

        let annotations = GoAnnotations::build(&table, &geneset, &mapping);
        assert_eq!(annotations.render(), ["|GO:001", "", "|GO:001"]);
    }

    #[test]
    fn empty_geneset_leaves_table_unannotated() {
        let table = table("gene_id\nENSG001\n");
        let mapping = mapping(&[("100", "ENSG001")]);
        let geneset = geneset("{}");

        let annotations = GoAnnotations::build(&table, &geneset, &mapping);
        assert_eq!(annotations.render(), [""]);
        assert_eq!(annotations.annotated_rows(), 0);
    }

    #[test]
    fn merge_is_idempotent() {
        let mut table = table("gene_id\nENSG001\nENSG002\n");
        let mapping = mapping(&[("100", "ENSG001")]);
        let geneset = geneset(r#"{"GO:001": ["100"]}"#);

        let annotations = GoAnnotations::build(&table, &geneset, &mapping);
        annotations.merge_into(&mut table);
        annotations.merge_into(&mut table);

        let rebuilt = GoAnnotations::build(&table, &geneset, &mapping);
        assert_eq!(rebuilt.render(), ["|GO:001", ""]);
        assert_eq!(table.columns().last().unwrap(), "go_ids");
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn geneset_float_artifacts_resolve() {
        let table = table("gene_id\nENSG001\n");
        let mapping = mapping(&[("7157", "ENSG001")]);
        let geneset = geneset(r#"{"GO:0006915": ["7157.0"]}"#);

        let annotations = GoAnnotations::build(&table, &geneset, &mapping);
        assert_eq!(annotations.render(), ["|GO:0006915"]);
    }
}

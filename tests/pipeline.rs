//! End-to-end runs of the file-based annotation pipeline

use std::fs;
use std::path::Path;

use goa::{EntrezMapping, GeneTable, GoAnnotations, GoaError, GoGeneSet};

fn annotate_to(dir: &Path, genes: &str, mapping: &str, geneset: &str) -> String {
    let mut table = GeneTable::from_path(genes).unwrap();
    let mapping = EntrezMapping::from_path(mapping).unwrap();
    let geneset = GoGeneSet::from_path(geneset).unwrap();

    GoAnnotations::build(&table, &geneset, &mapping).merge_into(&mut table);

    let output = dir.join("gene_table_goids.txt");
    table.write_path(&output).unwrap();
    fs::read_to_string(output).unwrap()
}

#[test]
fn annotates_the_example_data() {
    let dir = tempfile::tempdir().unwrap();
    let written = annotate_to(
        dir.path(),
        "tests/data/gene_table.txt",
        "tests/data/gene_entrezid.txt",
        "tests/data/go_geneset.json",
    );

    assert_eq!(
        written,
        "gene_id\tsymbol\tchromosome\tgo_ids\n\
         ENSG00000141510\tTP53\t17\t|GO:0006915\n\
         ENSG00000012048\tBRCA1\t17\t|GO:0006915|GO:0006281\n\
         ENSG00000139618\tBRCA2\t13\t|GO:0006281\n"
    );
}

#[test]
fn two_runs_produce_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let first = annotate_to(
        dir.path(),
        "tests/data/gene_table.txt",
        "tests/data/gene_entrezid.txt",
        "tests/data/go_geneset.json",
    );
    let second = annotate_to(
        dir.path(),
        "tests/data/gene_table.txt",
        "tests/data/gene_entrezid.txt",
        "tests/data/go_geneset.json",
    );
    assert_eq!(first, second);
}

#[test]
fn unreferenced_genes_keep_an_empty_field() {
    let dir = tempfile::tempdir().unwrap();
    let genes = dir.path().join("gene_table.txt");
    fs::write(&genes, "gene_id\nENSG00000141510\nENSGORPHAN\n").unwrap();

    let mut table = GeneTable::from_path(&genes).unwrap();
    let mapping = EntrezMapping::from_path("tests/data/gene_entrezid.txt").unwrap();
    let geneset = GoGeneSet::from_path("tests/data/go_geneset.json").unwrap();

    GoAnnotations::build(&table, &geneset, &mapping).merge_into(&mut table);

    let output = dir.path().join("out.txt");
    table.write_path(&output).unwrap();
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "gene_id\tgo_ids\nENSG00000141510\t|GO:0006915\nENSGORPHAN\t\n"
    );
}

#[test]
fn schema_errors_are_detected_before_the_join() {
    let dir = tempfile::tempdir().unwrap();
    let mapping = dir.path().join("gene_entrezid.txt");
    fs::write(&mapping, "ENTREZ\tENSEMBL\n7157\tENSG00000141510\n").unwrap();

    let err = EntrezMapping::from_path(&mapping).unwrap_err();
    assert!(matches!(err, GoaError::MissingColumn(_, column) if column == "ENTREZID"));
}

#[test]
fn missing_inputs_fail_with_the_offending_file() {
    let err = GeneTable::from_path("no_such_gene_table.txt").unwrap_err();
    let GoaError::CannotOpenFile(filename) = err else {
        panic!("expected a file-open failure");
    };
    assert_eq!(filename, "no_such_gene_table.txt");
}

#[test]
fn write_failure_names_the_destination() {
    let table =
        GeneTable::from_reader("gene_id\nENSG00000141510\n".as_bytes(), "inline").unwrap();
    let err = table.write_path("no/such/dir/out.txt").unwrap_err();
    assert!(matches!(err, GoaError::CannotWriteFile(_)));
}

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use goa::{EntrezMapping, GeneTable, GoAnnotations, GoGeneSet};

/// Annotate an Ensembl gene table with Gene Ontology identifiers
///
/// Joins a tab-separated gene table, a tab-separated ENTREZID/ENSEMBL
/// mapping and a JSON GO gene-set document, and writes the gene table
/// back with an additional pipe-delimited `go_ids` column.
#[derive(Parser)]
#[command(name = "goa", version, about)]
struct Cli {
    /// Tab-separated gene table with a `gene_id` column
    #[arg(long, default_value = goa::GENE_TABLE_FILENAME)]
    genes: PathBuf,

    /// Tab-separated mapping table with ENTREZID and ENSEMBL columns
    #[arg(long, default_value = goa::ENTREZ_MAPPING_FILENAME)]
    mapping: PathBuf,

    /// JSON document mapping GO terms to Entrez identifiers
    #[arg(long, default_value = goa::GO_GENESET_FILENAME)]
    geneset: PathBuf,

    /// Destination for the annotated table
    #[arg(short, long, default_value = goa::ANNOTATED_TABLE_FILENAME)]
    output: PathBuf,
}

fn main() {
    // Logging is controlled via the GOA_LOG environment variable
    let log_level = std::env::var("GOA_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut table = GeneTable::from_path(&cli.genes)?;
    let mapping = EntrezMapping::from_path(&cli.mapping)?;
    let geneset = GoGeneSet::from_path(&cli.geneset)?;

    GoAnnotations::build(&table, &geneset, &mapping).merge_into(&mut table);

    table.write_path(&cli.output)?;
    Ok(())
}

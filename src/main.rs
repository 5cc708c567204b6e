//! Hgtform CLI - reformat phylogenetic inputs for HGT detection tools

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use hgtform::reformat::{Method, ReformatRequest, reformat};

#[derive(Parser)]
#[command(
    name = "hgtform",
    about = "Reformat gene/species trees and alignments for HGT detection tools",
    version
)]
struct Cli {
    /// Destination tool
    #[arg(long, value_enum)]
    method: Method,

    /// Gene tree file (Newick)
    #[arg(long, value_name = "FILE")]
    gene_tree_fp: PathBuf,

    /// Species tree file (Newick)
    #[arg(long, value_name = "FILE")]
    species_tree_fp: PathBuf,

    /// Output tree file
    #[arg(long, value_name = "FILE")]
    output_tree_fp: PathBuf,

    /// Gene alignment file (FASTA, tree-puzzle only)
    #[arg(long, value_name = "FILE")]
    gene_msa_fa_fp: Option<PathBuf>,

    /// Output alignment file (Phylip, tree-puzzle only)
    #[arg(long, value_name = "FILE")]
    output_msa_phy_fp: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let request = ReformatRequest {
        gene_tree_fp: &cli.gene_tree_fp,
        species_tree_fp: &cli.species_tree_fp,
        output_tree_fp: &cli.output_tree_fp,
        gene_msa_fa_fp: cli.gene_msa_fa_fp.as_deref(),
        output_msa_phy_fp: cli.output_msa_phy_fp.as_deref(),
    };

    if let Err(e) = reformat(cli.method, &request) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

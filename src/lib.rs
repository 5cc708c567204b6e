//! Hgtform reformats phylogenetic inputs for horizontal gene transfer
//! detection tools.
//!
//! Benchmarking HGT detection means running several tools over the same
//! (gene tree, species tree\[, alignment\]) triple, but each tool has its
//! own input convention. This crate provides the conversion layer:
//! - Newick: Parse gene and species trees (multifurcations allowed,
//!   bracket comments such as NHX tags skipped) and write escaped Newick
//!   back out.
//! - Taxon mapping: Resolve gene-tree leaves against species-tree leaves,
//!   either exactly or by `SPECIES_GENE` prefix, under a per-tool
//!   [MatchPolicy](model::MatchPolicy).
//! - Tree transforms: label sanitization, polytomy binarization, branch
//!   length stripping.
//! - NEXUS writers for RIATA-HGT (PhyloNet) and Jane4.
//! - FASTA reading and sequential Phylip writing for Tree-Puzzle.
//!
//! The tree model uses the arena pattern: vertices are stored in a flat
//! vector and reference each other by index only. See [crate::model].
//!
//! # Usage patterns
//! 1. [reformat::reformat] dispatches on a [reformat::Method] and performs
//!    a complete per-tool conversion from input paths to output paths.
//! 2. The parsing, mapping, and writing building blocks are public for
//!    callers that need finer control.
//!
//! ## Example
//!
//! Parse a single Newick string:
//! ```no_run
//! use hgtform::parse_newick_str;
//!
//! let tree = parse_newick_str("((A:0.1,B:0.2):0.3,C:0.4);").unwrap();
//! assert_eq!(tree.num_leaves(), 3);
//! ```
//!
//! Run a full conversion:
//! ```no_run
//! use hgtform::reformat::{Method, ReformatRequest, reformat};
//! use std::path::Path;
//!
//! let request = ReformatRequest {
//!     gene_tree_fp: Path::new("gene.nwk"),
//!     species_tree_fp: Path::new("species.nwk"),
//!     output_tree_fp: Path::new("trex_input.nwk"),
//!     gene_msa_fa_fp: None,
//!     output_msa_phy_fp: None,
//! };
//! reformat(Method::Trex, &request).unwrap();
//! ```

pub mod error;
pub mod model;
pub mod msa;
pub mod newick;
pub mod nexus;
pub mod parser;
pub mod reformat;

use crate::model::Tree;
use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// Quick Newick API
// ============================================================================
/// Parses a Newick string using default settings, returning a [Tree].
///
/// See [`newick::parse_str`] for full documentation of this convenience
/// function.
pub fn parse_newick_str<S: AsRef<str>>(newick: S) -> Result<Tree, ParsingError> {
    newick::parse_str(newick)
}

/// Parses the first Newick string of a file using default settings,
/// returning a [Tree].
///
/// See [`newick::parse_file`] for full documentation of this convenience
/// function.
pub fn parse_newick_file<P: AsRef<Path>>(path: P) -> Result<Tree, ParsingError> {
    newick::parse_file(path)
}

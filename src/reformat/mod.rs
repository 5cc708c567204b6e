//! Per-tool reformatting operations.
//!
//! Each HGT detection tool expects its own input convention; the
//! operations here translate a (gene tree, species tree\[, alignment\])
//! triple into exactly the artifact one tool accepts:
//!
//! | Method | Output | Convention |
//! |--------|--------|------------|
//! | `trex` | Newick | species + gene tree, binarized, sanitized labels |
//! | `ranger-dtl` | Newick | species + gene tree, sanitized labels |
//! | `riata-hgt` | NEXUS | Translate table + integer-keyed trees + PHYLONET block |
//! | `jane4` | NEXUS | host/parasite blocks, no branch lengths, Range mapping |
//! | `tree-puzzle` | Newick + Phylip | species + gene tree, alignment rows fixed-width |
//!
//! Every operation is a pure transform per invocation: parse, transform in
//! memory, serialize. Nothing is retained and inputs are never mutated on
//! disk; re-invoking with the same inputs overwrites outputs
//! deterministically.

use crate::error::ReformatError;
use crate::model::mapping::{MatchPolicy, TaxonMapping};
use crate::model::tree::Tree;
use crate::msa::{read_fasta_file, write_phylip};
use crate::newick::{parse_file, write_joined_trees};
use crate::nexus::NexusWriter;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Selector for the destination HGT detection tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Method {
    /// T-REX: Newick, binary trees, exactly matching leaf labels
    Trex,
    /// RANGER-DTL: Newick, polytomies tolerated
    RangerDtl,
    /// RIATA-HGT (PhyloNet): NEXUS with Translate table and PHYLONET block
    RiataHgt,
    /// Jane4: NEXUS with host/parasite/distribution blocks
    Jane4,
    /// Tree-Puzzle: joined Newick trees plus Phylip alignment
    TreePuzzle,
}

impl Method {
    /// Returns the gene-to-species matching policy of this tool.
    pub fn match_policy(&self) -> MatchPolicy {
        match self {
            Method::Trex | Method::RangerDtl | Method::TreePuzzle => MatchPolicy::Exact,
            Method::RiataHgt | Method::Jane4 => MatchPolicy::ManyToOne,
        }
    }

    /// Returns whether this tool needs an input alignment.
    pub fn needs_alignment(&self) -> bool {
        matches!(self, Method::TreePuzzle)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Method::Trex => "trex",
            Method::RangerDtl => "ranger-dtl",
            Method::RiataHgt => "riata-hgt",
            Method::Jane4 => "jane4",
            Method::TreePuzzle => "tree-puzzle",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Method {
    type Err = ReformatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trex" => Ok(Method::Trex),
            "ranger-dtl" => Ok(Method::RangerDtl),
            "riata-hgt" => Ok(Method::RiataHgt),
            "jane4" => Ok(Method::Jane4),
            "tree-puzzle" => Ok(Method::TreePuzzle),
            other => Err(ReformatError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// File-path arguments of a single reformat invocation.
#[derive(Debug)]
pub struct ReformatRequest<'a> {
    /// Gene tree in Newick format
    pub gene_tree_fp: &'a Path,
    /// Species tree in Newick format
    pub species_tree_fp: &'a Path,
    /// Destination for the reformatted tree artifact
    pub output_tree_fp: &'a Path,
    /// Gene alignment in FASTA format (tree-puzzle only)
    pub gene_msa_fa_fp: Option<&'a Path>,
    /// Destination for the Phylip alignment (tree-puzzle only)
    pub output_msa_phy_fp: Option<&'a Path>,
}

/// Reformats the given inputs into the artifact(s) `method` requires.
///
/// # Errors
/// * [ReformatError::MalformedTree] - a tree file is unparsable
/// * [ReformatError::LabelMismatch] - gene leaves don't resolve against
///   the species tree under the method's policy
/// * [ReformatError::MalformedAlignment] / [ReformatError::AlignmentLength] -
///   broken FASTA input (tree-puzzle)
/// * [ReformatError::MissingInput] - tree-puzzle invoked without alignment
///   paths
pub fn reformat(method: Method, request: &ReformatRequest) -> Result<(), ReformatError> {
    let gene_tree = parse_file(request.gene_tree_fp)?;
    let species_tree = parse_file(request.species_tree_fp)?;
    debug!(
        %method,
        gene_leaves = gene_tree.num_leaves(),
        species_leaves = species_tree.num_leaves(),
        "parsed input trees"
    );

    match method {
        Method::Trex => reformat_trex(gene_tree, species_tree, request.output_tree_fp),
        Method::RangerDtl => reformat_rangerdtl(gene_tree, species_tree, request.output_tree_fp),
        Method::RiataHgt => reformat_riatahgt(gene_tree, species_tree, request.output_tree_fp),
        Method::Jane4 => reformat_jane4(gene_tree, species_tree, request.output_tree_fp),
        Method::TreePuzzle => {
            let gene_msa_fa_fp = request.gene_msa_fa_fp.ok_or_else(|| {
                ReformatError::MissingInput(
                    "tree-puzzle requires --gene-msa-fa-fp".to_string(),
                )
            })?;
            let output_msa_phy_fp = request.output_msa_phy_fp.ok_or_else(|| {
                ReformatError::MissingInput(
                    "tree-puzzle requires --output-msa-phy-fp".to_string(),
                )
            })?;
            reformat_treepuzzle(
                gene_tree,
                species_tree,
                request.output_tree_fp,
                gene_msa_fa_fp,
                output_msa_phy_fp,
            )
        }
    }
}

/// Reformats input trees to the format accepted by T-REX.
///
/// T-REX takes binary trees only and requires the leaves of species and
/// gene trees to be equally labeled, so both trees are sanitized and
/// binarized and the gene tree is relabeled to species labels.
pub fn reformat_trex(
    mut gene_tree: Tree,
    mut species_tree: Tree,
    output_tree_fp: &Path,
) -> Result<(), ReformatError> {
    gene_tree.sanitize_leaf_labels();
    species_tree.sanitize_leaf_labels();

    let mapping = TaxonMapping::resolve(&gene_tree, &species_tree, MatchPolicy::Exact)?;
    mapping.relabel_gene_tree(&mut gene_tree);

    gene_tree.binarize();
    species_tree.binarize();

    write_joined_trees(output_tree_fp, &species_tree, &gene_tree)?;
    debug!(output = %output_tree_fp.display(), "wrote T-REX input");
    Ok(())
}

/// Reformats input trees to the format accepted by RANGER-DTL.
///
/// Same joined-Newick layout and sanitization as T-REX, but RANGER-DTL
/// tolerates polytomies, so trees pass through unbinarized.
pub fn reformat_rangerdtl(
    mut gene_tree: Tree,
    mut species_tree: Tree,
    output_tree_fp: &Path,
) -> Result<(), ReformatError> {
    gene_tree.sanitize_leaf_labels();
    species_tree.sanitize_leaf_labels();

    let mapping = TaxonMapping::resolve(&gene_tree, &species_tree, MatchPolicy::Exact)?;
    mapping.relabel_gene_tree(&mut gene_tree);

    write_joined_trees(output_tree_fp, &species_tree, &gene_tree)?;
    debug!(output = %output_tree_fp.display(), "wrote RANGER-DTL input");
    Ok(())
}

/// Reformats input trees to the NEXUS format accepted by RIATA-HGT
/// (PhyloNet).
///
/// Multiple genes per species are allowed; gene leaves are expressed via
/// the species' Translate key.
pub fn reformat_riatahgt(
    gene_tree: Tree,
    species_tree: Tree,
    output_tree_fp: &Path,
) -> Result<(), ReformatError> {
    let mapping = TaxonMapping::resolve(&gene_tree, &species_tree, MatchPolicy::ManyToOne)?;

    let mut writer = NexusWriter::create(output_tree_fp)?;
    writer.write_riata_hgt(&species_tree, &gene_tree, &mapping)?;
    debug!(output = %output_tree_fp.display(), "wrote RIATA-HGT input");
    Ok(())
}

/// Reformats input trees to the NEXUS format accepted by Jane4.
///
/// Jane4 rejects branch lengths, so both trees are stripped; the
/// distribution block carries one gene:species entry per gene leaf.
pub fn reformat_jane4(
    mut gene_tree: Tree,
    mut species_tree: Tree,
    output_tree_fp: &Path,
) -> Result<(), ReformatError> {
    let mapping = TaxonMapping::resolve(&gene_tree, &species_tree, MatchPolicy::ManyToOne)?;

    gene_tree.strip_branch_lengths();
    species_tree.strip_branch_lengths();

    let mut writer = NexusWriter::create(output_tree_fp)?;
    writer.write_jane4(&species_tree, &gene_tree, &mapping)?;
    debug!(output = %output_tree_fp.display(), "wrote Jane4 input");
    Ok(())
}

/// Reformats input trees and alignment to the formats accepted by
/// Tree-Puzzle.
///
/// Writes the joined species + gene tree file (root branch lengths are
/// already dropped at parse time) and converts the FASTA alignment to
/// sequential Phylip, trimming sequence ids at `/` so they line up with
/// the species labels.
pub fn reformat_treepuzzle(
    mut gene_tree: Tree,
    species_tree: Tree,
    output_tree_fp: &Path,
    gene_msa_fa_fp: &Path,
    output_msa_phy_fp: &Path,
) -> Result<(), ReformatError> {
    let mapping = TaxonMapping::resolve(&gene_tree, &species_tree, MatchPolicy::Exact)?;
    mapping.relabel_gene_tree(&mut gene_tree);

    write_joined_trees(output_tree_fp, &species_tree, &gene_tree)?;

    let mut alignment = read_fasta_file(gene_msa_fa_fp)?;
    alignment.trim_ids_at_slash();
    write_phylip(output_msa_phy_fp, &alignment)?;

    debug!(
        tree_output = %output_tree_fp.display(),
        msa_output = %output_msa_phy_fp.display(),
        "wrote Tree-Puzzle inputs"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_str() {
        assert_eq!("trex".parse::<Method>().unwrap(), Method::Trex);
        assert_eq!("ranger-dtl".parse::<Method>().unwrap(), Method::RangerDtl);
        assert_eq!("riata-hgt".parse::<Method>().unwrap(), Method::RiataHgt);
        assert_eq!("jane4".parse::<Method>().unwrap(), Method::Jane4);
        assert_eq!("tree-puzzle".parse::<Method>().unwrap(), Method::TreePuzzle);
    }

    #[test]
    fn test_unknown_method_rejected() {
        let result = "consel".parse::<Method>();
        assert!(matches!(result, Err(ReformatError::UnsupportedMethod(_))));
    }

    #[test]
    fn test_method_display_round_trip() {
        for method in [
            Method::Trex,
            Method::RangerDtl,
            Method::RiataHgt,
            Method::Jane4,
            Method::TreePuzzle,
        ] {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
    }
}

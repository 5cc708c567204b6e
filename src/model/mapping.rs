//! Gene-leaf to species-leaf mapping.
//!
//! HGT tools relate every leaf of the gene tree to a leaf of the species
//! tree. Simulators emit gene leaves either labeled exactly like their
//! species (`SE001`) or suffixed with a gene identifier (`SE001_4712`).
//! [TaxonMapping] resolves gene labels against the species tree under a
//! [MatchPolicy] and is validated at construction, never inferred lazily.

use crate::error::ReformatError;
use crate::model::tree::Tree;
use std::collections::{HashMap, HashSet};

/// How gene leaves are allowed to relate to species leaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchPolicy {
    /// One-to-one: every gene leaf resolves to a distinct species leaf
    /// (T-REX, RANGER-DTL, Tree-Puzzle expect equally-labeled trees).
    Exact,
    /// Many-to-one: several gene leaves may resolve to the same species
    /// leaf (RIATA-HGT, Jane4 accept multiple genes per species).
    ManyToOne,
}

/// Validated mapping from gene-tree leaves to species-tree leaves.
///
/// Pairs are kept in gene-tree leaf order, so emitted mapping sections are
/// deterministic for a given input.
#[derive(Debug, Clone)]
pub struct TaxonMapping {
    /// (gene label, resolved species label), in gene-tree leaf order
    pairs: Vec<(String, String)>,
}

impl TaxonMapping {
    /// Resolves every gene-tree leaf against the species tree.
    ///
    /// A gene label resolves by exact match against a species label, or
    /// else by its prefix before the first `_` (the `SPECIES_GENE`
    /// convention of simulator output).
    ///
    /// # Errors
    /// Returns [ReformatError::LabelMismatch] if:
    /// - the species tree has duplicate leaf labels,
    /// - a gene leaf resolves to no species leaf, or
    /// - under [MatchPolicy::Exact], two gene leaves resolve to the same
    ///   species leaf.
    pub fn resolve(
        gene_tree: &Tree,
        species_tree: &Tree,
        policy: MatchPolicy,
    ) -> Result<Self, ReformatError> {
        let species_labels = species_tree.leaf_labels();

        let mut species_set = HashSet::with_capacity(species_labels.len());
        for label in &species_labels {
            if !species_set.insert(*label) {
                return Err(ReformatError::LabelMismatch(format!(
                    "species tree leaves must be uniquely labeled: {label}"
                )));
            }
        }

        let mut pairs = Vec::with_capacity(gene_tree.num_leaves());
        let mut used: HashSet<&str> = HashSet::new();

        for gene_label in gene_tree.leaf_labels() {
            let species = resolve_one(gene_label, &species_set).ok_or_else(|| {
                ReformatError::LabelMismatch(format!(
                    "gene leaf '{gene_label}' does not resolve to any species tree leaf"
                ))
            })?;

            if policy == MatchPolicy::Exact && !used.insert(species) {
                return Err(ReformatError::LabelMismatch(format!(
                    "gene leaf '{gene_label}' resolves to species '{species}', \
                     which is already claimed by another gene leaf \
                     (exact matching requires one gene per species)"
                )));
            }

            pairs.push((gene_label.to_string(), species.to_string()));
        }

        Ok(TaxonMapping { pairs })
    }

    /// Returns the (gene, species) pairs in gene-tree leaf order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns the species label a gene label resolved to, if any.
    pub fn species_for(&self, gene_label: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(gene, _)| gene == gene_label)
            .map(|(_, species)| species.as_str())
    }

    /// Returns a lookup map from gene label to species label.
    pub fn as_lookup(&self) -> HashMap<&str, &str> {
        self.pairs
            .iter()
            .map(|(gene, species)| (gene.as_str(), species.as_str()))
            .collect()
    }

    /// Rewrites the gene tree's leaf labels to their resolved species
    /// labels (`SE001_4712` becomes `SE001`).
    ///
    /// Tools with the exact policy require equally-labeled leaf sets, so
    /// the gene suffix has to go before serialization.
    pub fn relabel_gene_tree(&self, gene_tree: &mut Tree) {
        let lookup = self.as_lookup();
        for index in gene_tree.leaf_indices() {
            let vertex = gene_tree.vertex_mut(index);
            if let Some(label) = vertex.label() {
                if let Some(&species) = lookup.get(label) {
                    let species = species.to_string();
                    vertex.set_label(species);
                }
            }
        }
    }
}

/// Resolves a single gene label: exact match first, then the prefix before
/// the first `_`.
fn resolve_one<'a>(gene_label: &str, species_set: &HashSet<&'a str>) -> Option<&'a str> {
    if let Some(&label) = species_set.get(gene_label) {
        return Some(label);
    }

    let prefix = gene_label.split('_').next()?;
    species_set.get(prefix).copied()
}

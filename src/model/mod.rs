//! Data model for phylogenetic trees and taxon mappings.
//!
//! # Tree representation
//! Trees are represented by [Tree], which uses the arena pattern to store
//! [Vertex] nodes. Each vertex is either a `Root`, `Internal`, or `Leaf`,
//! referenced by [VertexIndex]. Internal vertices may carry any number of
//! children; leaves own their taxon label.
//!
//! # Taxon mapping
//! [TaxonMapping] relates gene-tree leaves to species-tree leaves under a
//! [MatchPolicy]; it is built and validated up front, before any output
//! is written.

pub mod mapping;
pub mod tree;
pub mod vertex;

pub use mapping::{MatchPolicy, TaxonMapping};
pub use tree::{Tree, VertexIndex};
pub use vertex::{BranchLength, Vertex};

//! NEXUS format writer for phylogenetic tree + mapping inputs.
//!
//! Two of the wrapped HGT tools consume NEXUS: RIATA-HGT (PhyloNet) and
//! Jane4, each with its own block layout. See [NexusWriter] for details.

mod defs;
pub mod writer;

pub use writer::NexusWriter;

//! NEXUS format constants.
//!
//! Byte string constants for writing the NEXUS files consumed by
//! RIATA-HGT (PhyloNet) and Jane4.

/// NEXUS file header "#NEXUS"
pub(crate) const NEXUS_HEADER: &[u8] = b"#NEXUS";

/// NEXUS block begin keyword "Begin"
pub(crate) const BLOCK_BEGIN: &[u8] = b"Begin";

/// NEXUS block end keyword "End;" (with semicolon)
pub(crate) const BLOCK_END: &[u8] = b"End;";

/// Jane4 block end keyword "endblock;" (with semicolon)
pub(crate) const JANE_BLOCK_END: &[u8] = b"endblock;";

/// TREES block identifier "trees;" (with semicolon)
pub(crate) const TREES: &[u8] = b"trees;";

/// TREES block translate command "Translate"
pub(crate) const TRANSLATE: &[u8] = b"Translate";

/// Individual tree declaration keyword "Tree"
pub(crate) const TREE: &[u8] = b"Tree";

/// PhyloNet block identifier "phylonet;" (with semicolon)
pub(crate) const PHYLONET: &[u8] = b"phylonet;";

/// PhyloNet command invoking the RIATA-HGT analysis
pub(crate) const RIATAHGT: &[u8] = b"RIATAHGT";

/// Name under which the species tree is declared
pub(crate) const SPECIES_TREE_NAME: &[u8] = b"speciesTree";

/// Name under which the gene tree is declared
pub(crate) const GENE_TREE_NAME: &[u8] = b"geneTree";

/// Jane4 host block identifier "host;" (with semicolon)
pub(crate) const HOST: &[u8] = b"host;";

/// Jane4 parasite block identifier "parasite;" (with semicolon)
pub(crate) const PARASITE: &[u8] = b"parasite;";

/// Jane4 distribution block identifier "distribution;" (with semicolon)
pub(crate) const DISTRIBUTION: &[u8] = b"distribution;";

/// Jane4 distribution range command "Range"
pub(crate) const RANGE: &[u8] = b"Range";

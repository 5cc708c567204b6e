//! NEXUS format file writer for the RIATA-HGT and Jane4 inputs.

use crate::model::mapping::TaxonMapping;
use crate::model::tree::Tree;
use crate::newick::writer::{escape_label, to_newick, to_newick_with_keys};
use crate::nexus::defs::{
    BLOCK_BEGIN, BLOCK_END, DISTRIBUTION, GENE_TREE_NAME, HOST, JANE_BLOCK_END, NEXUS_HEADER,
    PARASITE, PHYLONET, RANGE, RIATAHGT, SPECIES_TREE_NAME, TRANSLATE, TREE, TREES,
};
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

// =#========================================================================#=
// NEXUS WRITER
// =#========================================================================#=
/// Buffered writer for the NEXUS inputs of RIATA-HGT (PhyloNet) and Jane4.
///
/// # RIATA-HGT layout
/// - `#NEXUS` header
/// - `TREES` block with a `Translate` table (1-based integer keys over the
///   species-tree leaves) and both trees declared with integer keys; gene
///   leaves use their mapped species' key, which is how the many-to-one
///   gene-to-species relation is expressed to PhyloNet
/// - `PHYLONET` block invoking `RIATAHGT speciesTree {geneTree};`
///
/// # Jane4 layout
/// - `#NEXUS` header
/// - `host` block with the species tree, `parasite` block with the gene
///   tree (callers strip branch lengths beforehand; Jane4 rejects them)
/// - `distribution` block with one `gene:species` entry per gene leaf
///
/// # Example
/// ```ignore
/// use hgtform::nexus::NexusWriter;
///
/// let mut writer = NexusWriter::create("riata.nex")?;
/// writer.write_riata_hgt(&species_tree, &gene_tree, &mapping)?;
/// ```
pub struct NexusWriter {
    bw: BufWriter<File>,
}

// ============================================================================
// API (public)
// ============================================================================
impl NexusWriter {
    /// Creates a NEXUS writer for the given file.
    pub fn new(file: File) -> NexusWriter {
        NexusWriter {
            bw: BufWriter::new(file),
        }
    }

    /// Creates a NEXUS writer writing to a newly created file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<NexusWriter> {
        Ok(Self::new(File::create(path)?))
    }

    /// Writes a complete RIATA-HGT input file.
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    pub fn write_riata_hgt(
        &mut self,
        species_tree: &Tree,
        gene_tree: &Tree,
        mapping: &TaxonMapping,
    ) -> io::Result<()> {
        // 1-based keys in species-tree leaf order
        let species_keys: HashMap<&str, usize> = species_tree
            .leaf_labels()
            .into_iter()
            .enumerate()
            .map(|(i, label)| (label, i + 1))
            .collect();

        // Gene leaves borrow the key of the species they resolved to
        let lookup = mapping.as_lookup();
        let gene_keys: HashMap<&str, usize> = gene_tree
            .leaf_labels()
            .into_iter()
            .map(|gene| (gene, species_keys[lookup[gene]]))
            .collect();

        self.header()?
            .trees_block(species_tree, gene_tree, &species_keys, &gene_keys)?
            .phylonet_block()?;

        self.bw.flush()
    }

    /// Writes a complete Jane4 input file.
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    pub fn write_jane4(
        &mut self,
        species_tree: &Tree,
        gene_tree: &Tree,
        mapping: &TaxonMapping,
    ) -> io::Result<()> {
        self.header()?
            .jane_tree_block(HOST, b"host", species_tree)?
            .jane_tree_block(PARASITE, b"parasite", gene_tree)?
            .distribution_block(mapping)?;

        self.bw.flush()
    }
}

// ============================================================================
// Nexus Block & Command Writing (private)
// ============================================================================
impl NexusWriter {
    /// Writes the NEXUS file header ("#NEXUS"), returning itself for chaining.
    fn header(&mut self) -> io::Result<&mut Self> {
        self.write_all(NEXUS_HEADER)?.newline()?;
        Ok(self)
    }

    /// Writes the TREES block with Translate table and both integer-keyed
    /// trees, returning itself for chaining.
    fn trees_block(
        &mut self,
        species_tree: &Tree,
        gene_tree: &Tree,
        species_keys: &HashMap<&str, usize>,
        gene_keys: &HashMap<&str, usize>,
    ) -> io::Result<&mut Self> {
        // "Begin trees;"
        self.write_all(BLOCK_BEGIN)?.space()?.write_all(TREES)?.newline()?;

        self.translate_cmd(species_tree)?;

        // "Tree speciesTree = <Newick>" / "Tree geneTree = <Newick>"
        self.tree_cmd(SPECIES_TREE_NAME, &to_newick_with_keys(species_tree, species_keys))?
            .tree_cmd(GENE_TREE_NAME, &to_newick_with_keys(gene_tree, gene_keys))?;

        // "End;"
        self.write_all(BLOCK_END)?.newline()?;

        Ok(self)
    }

    /// Writes the Translate command mapping 1-based keys to species labels,
    /// returning itself for chaining.
    fn translate_cmd(&mut self, species_tree: &Tree) -> io::Result<&mut Self> {
        self.tab()?.write_all(TRANSLATE)?.newline()?;

        let labels = species_tree.leaf_labels();
        let num_labels = labels.len();

        for (i, label) in labels.into_iter().enumerate() {
            // "\t\t<key> <escaped_label>,\n" (no comma after last pair)
            let escaped_label = escape_label(label);

            self.tab()?
                .tab()?
                .write_all((i + 1).to_string().as_bytes())?
                .space()?
                .write_all(escaped_label.as_bytes())?;

            if i + 1 < num_labels {
                self.comma()?;
            }
            self.newline()?;
        }
        self.tab()?.semicolon()?.newline()?;

        Ok(self)
    }

    /// Writes a single "Tree <name> = <newick>" command, returning itself
    /// for chaining.
    fn tree_cmd(&mut self, name: &[u8], newick: &str) -> io::Result<&mut Self> {
        self.tab()?
            .write_all(TREE)?
            .space()?
            .write_all(name)?
            .space()?
            .equals()?
            .space()?
            .write_all(newick.as_bytes())?
            .newline()?;
        Ok(self)
    }

    /// Writes the PHYLONET block with the RIATAHGT command, returning itself
    /// for chaining.
    fn phylonet_block(&mut self) -> io::Result<&mut Self> {
        // "Begin phylonet;"
        self.write_all(BLOCK_BEGIN)?.space()?.write_all(PHYLONET)?.newline()?;

        // "\tRIATAHGT speciesTree {geneTree};"
        self.tab()?
            .write_all(RIATAHGT)?
            .space()?
            .write_all(SPECIES_TREE_NAME)?
            .space()?
            .write_all(b"{")?
            .write_all(GENE_TREE_NAME)?
            .write_all(b"}")?
            .semicolon()?
            .newline()?;

        // "End;"
        self.write_all(BLOCK_END)?.newline()?;

        Ok(self)
    }

    /// Writes one Jane4 tree block ("begin host; ... endblock;"), returning
    /// itself for chaining.
    fn jane_tree_block(
        &mut self,
        block_name: &[u8],
        tree_name: &[u8],
        tree: &Tree,
    ) -> io::Result<&mut Self> {
        // "begin <block>;"
        self.write_all(b"begin")?.space()?.write_all(block_name)?.newline()?;

        // "tree <name> = <Newick>"
        self.write_all(b"tree")?
            .space()?
            .write_all(tree_name)?
            .space()?
            .equals()?
            .space()?
            .write_all(to_newick(tree).as_bytes())?
            .newline()?;

        // "endblock;"
        self.write_all(JANE_BLOCK_END)?.newline()?;

        Ok(self)
    }

    /// Writes the Jane4 distribution block with one gene:species entry per
    /// gene leaf, returning itself for chaining.
    fn distribution_block(&mut self, mapping: &TaxonMapping) -> io::Result<&mut Self> {
        // "begin distribution;"
        self.write_all(b"begin")?.space()?.write_all(DISTRIBUTION)?.newline()?;

        // "Range gene:species, gene:species;"
        self.write_all(RANGE)?.space()?;
        let pairs = mapping.pairs();
        for (i, (gene, species)) in pairs.iter().enumerate() {
            self.write_all(escape_label(gene).as_bytes())?
                .write_all(b":")?
                .write_all(escape_label(species).as_bytes())?;
            if i + 1 < pairs.len() {
                self.comma()?.space()?;
            }
        }
        self.semicolon()?.newline()?;

        // "endblock;"
        self.write_all(JANE_BLOCK_END)?.newline()?;

        Ok(self)
    }
}

// ============================================================================
// Little Helpers (private)
// ============================================================================
impl NexusWriter {
    /// Appends a byte slice to the [BufWriter], returning itself for chaining.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<&mut Self> {
        self.bw.write_all(buf)?;
        Ok(self)
    }

    /// Appends a space character (' '), returning itself for chaining.
    fn space(&mut self) -> io::Result<&mut Self> {
        self.bw.write_all(b" ")?;
        Ok(self)
    }

    /// Appends a tab character ('\t'), returning itself for chaining.
    fn tab(&mut self) -> io::Result<&mut Self> {
        self.bw.write_all(b"\t")?;
        Ok(self)
    }

    /// Appends a newline character ('\n'), returning itself for chaining.
    fn newline(&mut self) -> io::Result<&mut Self> {
        self.bw.write_all(b"\n")?;
        Ok(self)
    }

    /// Appends a semicolon (';'), returning itself for chaining.
    fn semicolon(&mut self) -> io::Result<&mut Self> {
        self.bw.write_all(b";")?;
        Ok(self)
    }

    /// Appends a comma (','), returning itself for chaining.
    fn comma(&mut self) -> io::Result<&mut Self> {
        self.bw.write_all(b",")?;
        Ok(self)
    }

    /// Appends an equals sign ('='), returning itself for chaining.
    fn equals(&mut self) -> io::Result<&mut Self> {
        self.bw.write_all(b"=")?;
        Ok(self)
    }
}

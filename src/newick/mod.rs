//! Newick format parser and writer for phylogenetic trees.
//!
//! # Quick API
//! * [`parse_str`] - parses a single Newick string into a [Tree]
//! * [`parse_file`] - parses the first Newick tree in a file
//! * [`to_newick`] - serializes a [Tree] back to a Newick string
//!
//! # Full API
//! Configure a [NewickParser] and feed it a
//! [ByteParser](crate::parser::ByteParser) for control over pre-allocation.

pub mod parser;
pub mod writer;

pub use parser::NewickParser;
pub use writer::{escape_label, to_newick, to_newick_with_keys, write_joined_trees};

use crate::model::Tree;
use crate::parser::ParsingError;
use crate::parser::byte_parser::ByteParser;
use std::path::Path;

/// Parses a single Newick string.
///
/// # Example
/// ```
/// use hgtform::newick::parse_str;
///
/// let tree = parse_str("((A:0.1,B:0.2):0.3,C:0.4);").unwrap();
/// assert_eq!(tree.num_leaves(), 3);
/// ```
pub fn parse_str<S: AsRef<str>>(newick: S) -> Result<Tree, ParsingError> {
    let mut byte_parser = ByteParser::for_str(newick.as_ref());
    NewickParser::new().parse(&mut byte_parser)
}

/// Parses the first Newick tree from a file.
///
/// Adapter inputs carry a single tree per file; trailing content after the
/// terminating semicolon is ignored.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Tree, ParsingError> {
    let mut byte_parser = ByteParser::from_file(path)?;
    NewickParser::new().parse(&mut byte_parser)
}

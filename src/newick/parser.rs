//! Newick format parser producing [Tree]s.

use crate::model::tree::{Tree, VertexIndex};
use crate::model::vertex::BranchLength;
use crate::parser::byte_parser::ByteParser;
use crate::parser::parsing_error::ParsingError;

/// Newick label delimiters: parentheses, comma, colon, semicolon,
/// brackets, whitespace
const NEWICK_LABEL_DELIMITERS: &[u8] = b"(),:;[] \t\n\r";

/// Default guess for number of leaves, used for arena pre-allocation
const DEFAULT_NUM_LEAVES_GUESS: usize = 10;

/// Parser for Newick format phylogenetic [Tree]s.
///
/// Supports multifurcating trees (any number of children per internal
/// vertex), quoted labels, branch lengths in scientific notation, and
/// bracket comments (including NHX-style annotation tags, which are
/// skipped). Labels on internal vertices are parsed and discarded: only
/// leaf labels matter to the downstream format adapters.
///
/// # Format
/// * `tree ::= vertex ';'`
/// * `vertex ::= leaf | internal_vertex`
/// * `internal_vertex ::= '(' vertex (',' vertex)+ ')' [label] [branch_length]`
/// * `leaf ::= label [branch_length]`
/// * `branch_length ::= ':' number`
///
/// Whitespace and `[...]` comments can occur between elements, just not
/// within an unquoted label or a branch length.
///
/// # Example
/// ```
/// use hgtform::newick::NewickParser;
/// use hgtform::parser::ByteParser;
///
/// let mut bytes = ByteParser::for_str("((A:1.0,B:1.0):0.5,C:1.5);");
/// let tree = NewickParser::new().parse(&mut bytes).unwrap();
/// assert_eq!(tree.num_leaves(), 3);
/// ```
pub struct NewickParser {
    num_leaves_guess: usize,
}

impl NewickParser {
    /// Creates a new `NewickParser` with default settings.
    pub fn new() -> Self {
        Self {
            num_leaves_guess: DEFAULT_NUM_LEAVES_GUESS,
        }
    }

    /// Sets the expected number of leaves, allowing arena pre-allocation.
    pub fn with_num_leaves(mut self, num_leaves: usize) -> Self {
        self.num_leaves_guess = num_leaves;
        self
    }

    /// Parses a single Newick tree from the given [ByteParser].
    ///
    /// # Returns
    /// * `Ok(Tree)` - the parsed phylogenetic tree
    /// * `Err(ParsingError)` - if the Newick format is invalid
    pub fn parse(&self, parser: &mut ByteParser) -> Result<Tree, ParsingError> {
        let mut tree = Tree::new(self.num_leaves_guess);
        self.parse_root(parser, &mut tree)?;
        Ok(tree)
    }

    /// Parses root of tree and adds it to tree:
    /// - `(child, child[, child...])[label][:branch_length] ;`
    /// - The root's own branch length (emitted by some simulators) is
    ///   parsed and dropped
    fn parse_root(&self, parser: &mut ByteParser, tree: &mut Tree) -> Result<(), ParsingError> {
        parser.skip_comment_and_whitespace()?;

        if !parser.peek_is(b'(') {
            return Err(ParsingError::invalid_newick_string(
                parser,
                format!(
                    "Expected '(' at start of tree but found {:?}",
                    parser.peek().map(|b| b as char)
                ),
            ));
        }

        let children = self.parse_children(parser, tree)?;

        // Internal label and branch length on the root are both ignored
        let _ = parser.parse_label(NEWICK_LABEL_DELIMITERS)?;
        let _ = self.parse_branch_length(parser)?;

        parser.skip_comment_and_whitespace()?;
        if !parser.consume_if(b';') {
            return Err(ParsingError::invalid_newick_string(
                parser,
                format!(
                    "Expected ';' at end of tree but found {:?}",
                    parser.peek().map(|b| b as char)
                ),
            ));
        }

        tree.add_root(children);

        Ok(())
    }

    /// Parses a vertex (either internal vertex or leaf) and returns its
    /// index, dispatching on whether it starts with `(`.
    fn parse_vertex(
        &self,
        parser: &mut ByteParser,
        tree: &mut Tree,
    ) -> Result<VertexIndex, ParsingError> {
        parser.skip_comment_and_whitespace()?;
        if parser.peek_is(b'(') {
            self.parse_internal_vertex(parser, tree)
        } else {
            self.parse_leaf(parser, tree)
        }
    }

    /// Parses internal vertex, adds it to tree, and returns its index:
    /// - `(child, child[, child...])[label][:branch_length]`
    fn parse_internal_vertex(
        &self,
        parser: &mut ByteParser,
        tree: &mut Tree,
    ) -> Result<VertexIndex, ParsingError> {
        let children = self.parse_children(parser, tree)?;

        // Internal vertex labels are allowed by the format but carry no
        // information the adapters use; parse and discard
        let _ = parser.parse_label(NEWICK_LABEL_DELIMITERS)?;
        let branch_length = self.parse_branch_length(parser)?;

        Ok(tree.add_internal_vertex(children, branch_length))
    }

    /// Parses a parenthesized child list `(vertex, vertex[, vertex...])`
    /// and returns the child indices. Expects the parser at the opening
    /// `(`; requires at least two children.
    fn parse_children(
        &self,
        parser: &mut ByteParser,
        tree: &mut Tree,
    ) -> Result<Vec<VertexIndex>, ParsingError> {
        // Calling methods have skipped comments and whitespace
        if !parser.consume_if(b'(') {
            return Err(ParsingError::invalid_newick_string(
                parser,
                format!(
                    "Expected '(' before children but found {:?}",
                    parser.peek().map(|b| b as char)
                ),
            ));
        }

        let mut children = vec![self.parse_vertex(parser, tree)?];

        loop {
            parser.skip_comment_and_whitespace()?;
            if parser.consume_if(b',') {
                children.push(self.parse_vertex(parser, tree)?);
            } else if parser.consume_if(b')') {
                break;
            } else {
                return Err(ParsingError::invalid_newick_string(
                    parser,
                    format!(
                        "Expected ',' or ')' in child list but found {:?}",
                        parser.peek().map(|b| b as char)
                    ),
                ));
            }
        }

        if children.len() < 2 {
            return Err(ParsingError::invalid_newick_string(
                parser,
                "Internal vertex must have at least two children".to_string(),
            ));
        }

        Ok(children)
    }

    /// Parses leaf vertex `label[:branch_length]` and adds it to tree.
    fn parse_leaf(
        &self,
        parser: &mut ByteParser,
        tree: &mut Tree,
    ) -> Result<VertexIndex, ParsingError> {
        let label = parser.parse_label(NEWICK_LABEL_DELIMITERS)?;
        if label.is_empty() {
            return Err(ParsingError::invalid_newick_string(
                parser,
                "Leaf label must not be empty".to_string(),
            ));
        }
        let branch_length = self.parse_branch_length(parser)?;

        Ok(tree.add_leaf(branch_length, label))
    }

    /// Parses optional branch length `[:number]`, supporting scientific
    /// notation (e.g., `1.5e-10`).
    ///
    /// # Returns
    /// - `Some(BranchLength)` if a branch length was found and parsed
    /// - `None` if no branch length is present
    /// - [ParsingError] if the value after `:` is not a valid number
    fn parse_branch_length(
        &self,
        parser: &mut ByteParser,
    ) -> Result<Option<BranchLength>, ParsingError> {
        parser.skip_comment_and_whitespace()?;
        if !parser.consume_if(b':') {
            return Ok(None);
        }
        parser.skip_comment_and_whitespace()?;

        let mut branch_length_str = String::new();
        while let Some(b) = parser.peek() {
            // Valid characters for a float: digits, '.', '-', '+', 'e', 'E'
            if b.is_ascii_digit() || b == b'.' || b == b'-' || b == b'+' || b == b'e' || b == b'E'
            {
                branch_length_str.push(b as char);
                parser.next();
            } else {
                break;
            }
        }

        let value: f64 = branch_length_str.parse().map_err(|_| {
            ParsingError::invalid_newick_string(
                parser,
                format!("Invalid branch length: {}", branch_length_str),
            )
        })?;

        if value < 0.0 || !value.is_finite() {
            return Err(ParsingError::invalid_newick_string(
                parser,
                format!("Branch length must be non-negative and finite: {}", value),
            ));
        }

        Ok(Some(BranchLength::new(value)))
    }
}

impl Default for NewickParser {
    fn default() -> Self {
        Self::new()
    }
}

//! Error types for the Newick and FASTA readers.
//!
//! [ParsingError] pairs a [ParsingErrorKind] with the byte position and a
//! window of the surrounding input, so a malformed file can be located
//! without re-opening it.

use crate::parser::byte_parser::ByteParser;
use thiserror::Error;

/// Default length of context provided by errors from the parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

/// Failure classes that can occur while reading input files.
#[derive(PartialEq, Debug, Clone, Error)]
pub enum ParsingErrorKind {
    #[error("IO error - {0}")]
    IoError(String),
    #[error("Unexpected end of file")]
    UnexpectedEof,
    #[error("Unclosed comment")]
    UnclosedComment,
    #[error("Invalid newick string: {0}")]
    InvalidNewickString(String),
    #[error("Invalid FASTA record: {0}")]
    InvalidFastaRecord(String),
}

/// Parsing error with contextual information (position and surrounding bytes).
#[derive(Debug, Error)]
#[error("{kind} at position {position}{}", fmt_context(.context))]
pub struct ParsingError {
    kind: ParsingErrorKind,
    position: usize,
    context: String,
}

fn fmt_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context (next {} bytes): {}", context.len(), context)
    }
}

impl ParsingError {
    /// Creates a `ParsingError` from an error kind and the parser state.
    pub fn from_parser(kind: ParsingErrorKind, parser: &ByteParser) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for UnexpectedEof
    pub fn unexpected_eof(parser: &ByteParser) -> Self {
        Self::from_parser(ParsingErrorKind::UnexpectedEof, parser)
    }

    /// Convenience constructor for UnclosedComment
    pub fn unclosed_comment(parser: &ByteParser) -> Self {
        Self::from_parser(ParsingErrorKind::UnclosedComment, parser)
    }

    /// Convenience constructor for InvalidNewickString
    pub fn invalid_newick_string(parser: &ByteParser, msg: String) -> Self {
        Self::from_parser(ParsingErrorKind::InvalidNewickString(msg), parser)
    }

    /// Convenience constructor for InvalidFastaRecord
    pub fn invalid_fasta_record(parser: &ByteParser, msg: String) -> Self {
        Self::from_parser(ParsingErrorKind::InvalidFastaRecord(msg), parser)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &ParsingErrorKind {
        &self.kind
    }

    /// Returns the byte position where the error occurred.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError {
            kind: ParsingErrorKind::IoError(err.to_string()),
            position: 0,
            context: String::new(),
        }
    }
}

//! Error taxonomy of the format adapter.

use crate::parser::parsing_error::ParsingError;
use thiserror::Error;

/// Errors surfaced by the format adapter.
///
/// All of these are non-recoverable for a given invocation: a malformed
/// tree or an incoherent taxon set cannot be silently repaired without
/// risking incorrect downstream results, so the adapter fails fast and
/// leaves the continue-or-abort policy to the orchestrating caller.
#[derive(Debug, Error)]
pub enum ReformatError {
    /// Input tree could not be parsed.
    #[error("malformed tree: {0}")]
    MalformedTree(#[from] ParsingError),

    /// Input alignment could not be parsed.
    #[error("malformed alignment: {0}")]
    MalformedAlignment(ParsingError),

    /// Gene-tree leaves are not resolvable against the species tree under
    /// the method's matching policy.
    #[error("label mismatch: {0}")]
    LabelMismatch(String),

    /// Alignment sequences have unequal lengths (or the alignment is empty).
    #[error("alignment length error: {0}")]
    AlignmentLength(String),

    /// Unknown method selector.
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Required input was not provided (e.g. no alignment for tree-puzzle).
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Failure writing an output artifact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Shared low-level parsing infrastructure.

pub mod byte_parser;
pub mod parsing_error;

pub use byte_parser::ByteParser;
pub use parsing_error::{ParsingError, ParsingErrorKind};

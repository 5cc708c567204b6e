//! Low-level byte-by-byte parser for ASCII text.
//!
//! This module provides [ByteParser] for parsing text-based file formats with
//! support for peeking, consuming, and quote-aware label parsing. Used as the
//! foundation for both the Newick and FASTA readers.

use crate::parser::parsing_error::ParsingError;
use std::fs;
use std::path::Path;

/// A byte-by-byte parser over in-memory ASCII input.
///
/// Adapter inputs are single small files (one tree or one gene alignment), so
/// the parser owns its bytes directly instead of abstracting over sources.
///
/// # Features
/// - Peek, consume, and skip operations
/// - Whitespace and bracket-comment skipping (which also swallows
///   NHX-style annotation tags such as `[&&NHX:D=N]`)
/// - Quote-aware label parsing (single quotes with doubling escape)
/// - Context extraction for error reporting
pub struct ByteParser {
    data: Vec<u8>,
    position: usize,
}

impl ByteParser {
    /// Creates a new `ByteParser` over the given bytes.
    pub fn from_bytes(input: Vec<u8>) -> Self {
        Self { data: input, position: 0 }
    }

    /// Creates a new `ByteParser` over a copy of the given string.
    pub fn for_str(input: &str) -> Self {
        Self::from_bytes(input.as_bytes().to_vec())
    }

    /// Creates a new `ByteParser` over the full contents of a file.
    ///
    /// # Errors
    /// Returns a [ParsingError] if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParsingError> {
        let data = fs::read(path)?;
        Ok(Self::from_bytes(data))
    }

    /// Peeks at the current byte without consuming it, `None` at EOF.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    /// Returns the current byte and advances the position, `None` at EOF.
    #[inline(always)]
    pub fn next(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.position += 1;
        }
        b
    }

    /// Returns whether the end of input has been reached.
    pub fn is_eof(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Returns the current byte offset in the input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Skips (consumes) all consecutive whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    /// Skips a bracket comment `[...]` if present.
    ///
    /// Newick/NEXUS comments are enclosed in square brackets; NHX annotation
    /// tags use the same delimiters and are skipped the same way.
    ///
    /// # Returns
    /// * `Ok(true)` - a comment was found and consumed
    /// * `Ok(false)` - no comment at current position
    /// * `Err(ParsingError)` - comment was opened but never closed
    pub fn skip_comment(&mut self) -> Result<bool, ParsingError> {
        if self.consume_if(b'[') {
            // Comments may nest, e.g. "[comment [inner]]"
            let mut depth = 1;
            while depth > 0 {
                match self.next() {
                    Some(b'[') => depth += 1,
                    Some(b']') => depth -= 1,
                    Some(_) => {}
                    None => return Err(ParsingError::unclosed_comment(self)),
                }
            }
            return Ok(true);
        }

        Ok(false)
    }

    /// Skips all consecutive whitespace and bracket comments.
    ///
    /// # Errors
    /// Returns an error if an unclosed comment is encountered.
    pub fn skip_comment_and_whitespace(&mut self) -> Result<(), ParsingError> {
        self.skip_whitespace();

        while self.skip_comment()? {
            self.skip_whitespace();
        }

        Ok(())
    }

    /// Checks if the current byte matches the target byte.
    pub fn peek_is(&self, ch: u8) -> bool {
        self.peek() == Some(ch)
    }

    /// Consumes the current byte if it matches the target byte.
    ///
    /// # Returns
    /// `true` if the byte was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek_is(ch) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consumes bytes up to and including the end of the current line.
    pub fn skip_line(&mut self) {
        while let Some(b) = self.next() {
            if b == b'\n' {
                break;
            }
        }
    }

    /// Returns a string of up to `k` bytes from the current position for
    /// error context. Invalid UTF-8 is replaced with the replacement char.
    pub fn get_context_as_string(&self, k: usize) -> String {
        let end = (self.position + k).min(self.data.len());
        String::from_utf8_lossy(&self.data[self.position..end]).into_owned()
    }

    /// Parses a label (quoted or unquoted) with the given delimiter set.
    ///
    /// Leading whitespace and comments are skipped first. Quoted labels are
    /// enclosed in single quotes with internal quotes escaped by doubling.
    ///
    /// # Errors
    /// Returns an error if a quoted label is not properly closed.
    pub fn parse_label(&mut self, delimiters: &[u8]) -> Result<String, ParsingError> {
        self.skip_comment_and_whitespace()?;

        if self.peek_is(b'\'') {
            self.parse_quoted_label()
        } else {
            Ok(self.parse_unquoted_label(delimiters))
        }
    }

    /// Parses a quoted label enclosed in single quotes with escape support.
    fn parse_quoted_label(&mut self) -> Result<String, ParsingError> {
        self.next(); // consume opening '

        let mut label = String::new();
        loop {
            match self.next() {
                Some(b'\'') => {
                    // Two single quotes in a row form an escaped quote
                    if self.peek_is(b'\'') {
                        label.push('\'');
                        self.next();
                    } else {
                        return Ok(label);
                    }
                }
                Some(b) => label.push(b as char),
                None => return Err(ParsingError::unexpected_eof(self)),
            }
        }
    }

    /// Parses an unquoted label until any of the given delimiters.
    fn parse_unquoted_label(&mut self, delimiters: &[u8]) -> String {
        let mut label = String::new();

        while let Some(b) = self.peek() {
            if delimiters.contains(&b) {
                break;
            }
            label.push(b as char);
            self.position += 1;
        }

        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_next() {
        let mut parser = ByteParser::for_str("ab");
        assert_eq!(parser.peek(), Some(b'a'));
        assert_eq!(parser.next(), Some(b'a'));
        assert_eq!(parser.next(), Some(b'b'));
        assert_eq!(parser.next(), None);
        assert!(parser.is_eof());
    }

    #[test]
    fn test_skip_comment_and_whitespace() {
        let mut parser = ByteParser::for_str("  [a comment] \t[another]X");
        parser.skip_comment_and_whitespace().unwrap();
        assert_eq!(parser.peek(), Some(b'X'));
    }

    #[test]
    fn test_skip_nested_comment() {
        let mut parser = ByteParser::for_str("[outer [inner] more]Y");
        parser.skip_comment_and_whitespace().unwrap();
        assert_eq!(parser.peek(), Some(b'Y'));
    }

    #[test]
    fn test_unclosed_comment() {
        let mut parser = ByteParser::for_str("[never closed");
        assert!(parser.skip_comment().is_err());
    }

    #[test]
    fn test_parse_quoted_label_with_escape() {
        let mut parser = ByteParser::for_str("'Baillon''s Crake':1.0");
        let label = parser.parse_label(b",:();").unwrap();
        assert_eq!(label, "Baillon's Crake");
        assert_eq!(parser.peek(), Some(b':'));
    }

    #[test]
    fn test_parse_unquoted_label() {
        let mut parser = ByteParser::for_str("SE001_123:0.5");
        let label = parser.parse_label(b",:();").unwrap();
        assert_eq!(label, "SE001_123");
    }
}

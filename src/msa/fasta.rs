//! FASTA format reader for aligned sequences.

use crate::error::ReformatError;
use crate::msa::alignment::Alignment;
use crate::parser::byte_parser::ByteParser;
use crate::parser::parsing_error::ParsingError;
use std::path::Path;

/// Reads a FASTA file into an [Alignment].
///
/// Record ids are the header text up to the first whitespace; the rest of
/// the header line is a description and is dropped. Sequence data may span
/// multiple lines; inner whitespace is ignored.
///
/// # Errors
/// * [ReformatError::MalformedAlignment] on FASTA syntax errors
/// * [ReformatError::AlignmentLength] if sequences have unequal lengths
pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<Alignment, ReformatError> {
    let mut parser = ByteParser::from_file(path).map_err(ReformatError::MalformedAlignment)?;
    let records = parse_records(&mut parser).map_err(ReformatError::MalformedAlignment)?;
    Alignment::from_records(records)
}

/// Reads FASTA records from a string into an [Alignment].
pub fn read_fasta_str(input: &str) -> Result<Alignment, ReformatError> {
    let mut parser = ByteParser::for_str(input);
    let records = parse_records(&mut parser).map_err(ReformatError::MalformedAlignment)?;
    Alignment::from_records(records)
}

/// Parses all `>id [description]\nsequence` records until EOF.
fn parse_records(parser: &mut ByteParser) -> Result<Vec<(String, String)>, ParsingError> {
    let mut records = Vec::new();

    parser.skip_whitespace();
    if parser.is_eof() || !parser.peek_is(b'>') {
        return Err(ParsingError::invalid_fasta_record(
            parser,
            "Expected '>' at start of FASTA record".to_string(),
        ));
    }

    while parser.consume_if(b'>') {
        let id = parse_record_id(parser);
        if id.is_empty() {
            return Err(ParsingError::invalid_fasta_record(
                parser,
                "FASTA record id must not be empty".to_string(),
            ));
        }

        // Drop the description (rest of the header line)
        parser.skip_line();

        let sequence = parse_sequence(parser);
        if sequence.is_empty() {
            return Err(ParsingError::invalid_fasta_record(
                parser,
                format!("FASTA record '{}' has no sequence data", id),
            ));
        }

        records.push((id, sequence));
        parser.skip_whitespace();
    }

    Ok(records)
}

/// Parses the record id: header text up to the first whitespace.
fn parse_record_id(parser: &mut ByteParser) -> String {
    let mut id = String::new();
    while let Some(b) = parser.peek() {
        if b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' {
            break;
        }
        id.push(b as char);
        parser.next();
    }
    id
}

/// Parses sequence lines until the next record header or EOF.
fn parse_sequence(parser: &mut ByteParser) -> String {
    let mut sequence = String::new();
    loop {
        parser.skip_whitespace();
        match parser.peek() {
            None | Some(b'>') => break,
            Some(b) => {
                sequence.push(b as char);
                parser.next();
            }
        }
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_two_records() {
        let fasta = ">SE001/123 some description\nMKVL\nATT\n>SE002/456\nMKLLATT\n";
        let alignment = read_fasta_str(fasta).unwrap();
        assert_eq!(alignment.num_sequences(), 2);
        assert_eq!(alignment.num_columns(), 7);
        assert_eq!(alignment.records()[0].0, "SE001/123");
        assert_eq!(alignment.records()[0].1, "MKVLATT");
    }

    #[test]
    fn test_missing_header_rejected() {
        assert!(read_fasta_str("MKVL\n").is_err());
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(read_fasta_str(">A\n>B\nMK\n").is_err());
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        let fasta = ">A\nMKVL\n>B\nMK\n";
        assert!(matches!(
            read_fasta_str(fasta),
            Err(ReformatError::AlignmentLength(_))
        ));
    }
}

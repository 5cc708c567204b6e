//! Phylip format writer for aligned sequences.

use crate::msa::alignment::Alignment;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Fixed width of the Phylip name field
const PHYLIP_NAME_WIDTH: usize = 10;

/// Writes an [Alignment] in sequential Phylip format.
///
/// Layout:
/// - header line: `<num_sequences> <num_columns>`
/// - one row per sequence: the id truncated or space-padded to exactly
///   10 characters, followed by the full sequence
///
/// Truncation/padding is deterministic given the id length, so re-invoking
/// with the same alignment overwrites the file byte-identically.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_phylip<P: AsRef<Path>>(path: P, alignment: &Alignment) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "{} {}",
        alignment.num_sequences(),
        alignment.num_columns()
    )?;

    for (id, sequence) in alignment.records() {
        writeln!(writer, "{}{}", fixed_width_name(id), sequence)?;
    }

    writer.flush()
}

/// Truncates or space-pads a sequence id to the Phylip name field width.
fn fixed_width_name(id: &str) -> String {
    let mut name = String::with_capacity(PHYLIP_NAME_WIDTH);
    name.push_str(&id[..id.len().min(PHYLIP_NAME_WIDTH)]);
    while name.len() < PHYLIP_NAME_WIDTH {
        name.push(' ');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_name_pads_short_ids() {
        assert_eq!(fixed_width_name("SE001"), "SE001     ");
        assert_eq!(fixed_width_name("SE001     ").len(), 10);
    }

    #[test]
    fn test_fixed_width_name_truncates_long_ids() {
        assert_eq!(fixed_width_name("averylongtaxonname"), "averylongt");
    }
}

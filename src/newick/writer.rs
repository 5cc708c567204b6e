//! Newick format serialization and label escaping.

use crate::model::tree::{Tree, VertexIndex};
use crate::model::vertex::BranchLength;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Returns the Newick representation of this tree with closing semicolon.
///
/// Leaf labels are escaped if necessary (see [escape_label]).
///
/// # Example
/// ```
/// use hgtform::newick::{parse_str, to_newick};
///
/// let tree = parse_str("((A:1,B:2):3,C:4);").unwrap();
/// assert_eq!(to_newick(&tree), "((A:1,B:2):3,C:4);");
/// ```
pub fn to_newick(tree: &Tree) -> String {
    let mut newick = String::new();
    build_newick(tree, &mut newick, tree.root_index(), &|label| {
        escape_label(label)
    });
    newick.push(';');
    newick
}

/// Returns the Newick representation of this tree with every leaf label
/// replaced by its key from `keys` (as used with a NEXUS `Translate`
/// table, where keys are 1-based integers).
///
/// # Panics
/// Panics if a leaf label has no entry in `keys`; callers are expected to
/// have validated the mapping beforehand.
pub fn to_newick_with_keys(tree: &Tree, keys: &HashMap<&str, usize>) -> String {
    let mut newick = String::new();
    build_newick(tree, &mut newick, tree.root_index(), &|label| {
        keys[label].to_string()
    });
    newick.push(';');
    newick
}

/// Recursive helper for building the Newick string.
fn build_newick(
    tree: &Tree,
    newick: &mut String,
    index: VertexIndex,
    render_label: &dyn Fn(&str) -> String,
) {
    // Helper for adding branch lengths
    fn push_branch_length(newick: &mut String, branch_length: Option<BranchLength>) {
        if let Some(branch_length) = branch_length {
            newick.push(':');
            newick.push_str(&branch_length.to_string());
        }
    }

    let vertex = &tree[index];

    if vertex.is_leaf() {
        newick.push_str(&render_label(vertex.label().unwrap()));
        push_branch_length(newick, vertex.branch_length());
    } else {
        newick.push('(');
        for (i, &child) in vertex.children().unwrap().iter().enumerate() {
            if i > 0 {
                newick.push(',');
            }
            build_newick(tree, newick, child, render_label);
        }
        newick.push(')');

        if !vertex.is_root() {
            push_branch_length(newick, vertex.branch_length());
        }
    }
}

/// Writes the species tree followed by the gene tree to a file, one
/// Newick string per line.
///
/// This joined layout (species first) is the input convention shared by
/// T-REX, RANGER-DTL, and Tree-Puzzle.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_joined_trees<P: AsRef<Path>>(
    path: P,
    species_tree: &Tree,
    gene_tree: &Tree,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(to_newick(species_tree).as_bytes())?;
    writer.write_all(b"\n")?;
    writer.write_all(to_newick(gene_tree).as_bytes())?;
    writer.write_all(b"\n")?;

    writer.flush()?;
    Ok(())
}

// ============================================================================
// Label escaping
// ============================================================================

/// Checks if a label is already escaped:
/// - wrapped in single quotes and each internal single quote doubled, or
/// - no space and special characters
pub fn is_escaped(label: &str) -> bool {
    if is_single_quoted(label) {
        // Check that every internal single quote is escaped
        let inner = &label[1..label.len() - 1];
        let mut prev = ' ';
        for char in inner.chars() {
            if prev == '\'' {
                if char != '\'' {
                    return false;
                } else {
                    // A full pair of single quotes; reset
                    prev = ' ';
                }
            } else {
                prev = char;
            }
        }

        true
    } else {
        !label.chars().any(|c| {
            matches!(
                c,
                ' ' | ',' | ';' | '\t' | '\n' | '\r' | '(' | ')' | ':' | '[' | ']' | '\''
            )
        })
    }
}

/// Checks if a label is enclosed in single quotes.
pub fn is_single_quoted(label: &str) -> bool {
    label.starts_with('\'') && label.ends_with('\'') && label.len() >= 2
}

/// Escapes a label for safe use in NEXUS and Newick formats.
///
/// Labels containing special characters (delimiters, brackets, quotes) are
/// wrapped in single quotes with internal single quotes doubled. Spaces in
/// otherwise plain labels are replaced with underscores. Already-escaped
/// labels are returned as-is.
///
/// # Examples
/// ```
/// # use hgtform::newick::escape_label;
/// assert_eq!(escape_label("Pukeko"), "Pukeko");
/// assert_eq!(escape_label("Pu[ke]ko"), "'Pu[ke]ko'");
/// assert_eq!(escape_label("Australasian Swamphen"), "Australasian_Swamphen");
/// assert_eq!(escape_label("'Baillon's Crake'"), "'Baillon''s Crake'");
/// ```
pub fn escape_label(label: &str) -> String {
    // Don't double-escape
    if is_escaped(label) {
        return label.to_string();
    }

    // Don't double single quote, but
    if is_single_quoted(label) {
        // ... fix any unescaped internal single quote
        let inner = &label[1..label.len() - 1];
        let mut fixed = String::with_capacity(inner.len() + 3);
        let mut chars = inner.chars().peekable();

        fixed.push('\'');
        while let Some(ch) = chars.next() {
            fixed.push(ch);
            if ch == '\'' {
                if chars.peek() == Some(&'\'') {
                    // Next char is the escaping quote; consume and push it
                    fixed.push(chars.next().unwrap());
                } else {
                    fixed.push('\'');
                }
            }
        }
        fixed.push('\'');

        return fixed;
    }

    if label.chars().any(|c| {
        matches!(
            c,
            ',' | ';' | '\t' | '\n' | '\r' | '(' | ')' | ':' | '[' | ']' | '\''
        )
    }) {
        let escaped = label.replace('\'', "''");
        format!("'{}'", escaped)
    } else {
        label.replace(' ', "_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::newick::parse_str;

    #[test]
    fn test_to_newick_round_trip() {
        let input = "((A:0.1,B:0.2):0.3,C:0.4);";
        let tree = parse_str(input).unwrap();
        assert_eq!(to_newick(&tree), input);
    }

    #[test]
    fn test_to_newick_multifurcation() {
        let input = "(A,B,C,(D,E));";
        let tree = parse_str(input).unwrap();
        assert_eq!(to_newick(&tree), input);
    }

    #[test]
    fn test_to_newick_with_keys() {
        let tree = parse_str("((A,B),C);").unwrap();
        let keys = HashMap::from([("A", 1), ("B", 2), ("C", 3)]);
        assert_eq!(to_newick_with_keys(&tree, &keys), "((1,2),3);");
    }

    #[test]
    fn test_escape_plain_label() {
        assert_eq!(escape_label("SE001"), "SE001");
        assert_eq!(escape_label("two words"), "two_words");
        assert_eq!(escape_label("a:b"), "'a:b'");
    }
}

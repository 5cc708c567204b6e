//! Multiple-sequence alignment model, FASTA reader, and Phylip writer.

pub mod alignment;
pub mod fasta;
pub mod phylip;

pub use alignment::Alignment;
pub use fasta::{read_fasta_file, read_fasta_str};
pub use phylip::write_phylip;

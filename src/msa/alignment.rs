//! In-memory multiple-sequence alignment.

use crate::error::ReformatError;

/// A multiple-sequence alignment: ordered (taxon id, aligned sequence)
/// records with a constant sequence length across all records.
///
/// The equal-length invariant is validated at construction, so downstream
/// writers can rely on it.
#[derive(Debug, Clone)]
pub struct Alignment {
    records: Vec<(String, String)>,
}

impl Alignment {
    /// Builds an alignment from (id, sequence) records.
    ///
    /// # Errors
    /// Returns [ReformatError::AlignmentLength] if the record list is empty
    /// or sequences have differing lengths.
    pub fn from_records(records: Vec<(String, String)>) -> Result<Self, ReformatError> {
        let first_len = match records.first() {
            Some((_, sequence)) => sequence.len(),
            None => {
                return Err(ReformatError::AlignmentLength(
                    "alignment contains no sequences".to_string(),
                ));
            }
        };

        for (id, sequence) in &records {
            if sequence.len() != first_len {
                return Err(ReformatError::AlignmentLength(format!(
                    "sequence '{}' has length {} but expected {}",
                    id,
                    sequence.len(),
                    first_len
                )));
            }
        }

        Ok(Alignment { records })
    }

    /// Returns the number of sequences.
    pub fn num_sequences(&self) -> usize {
        self.records.len()
    }

    /// Returns the shared sequence length (number of alignment columns).
    pub fn num_columns(&self) -> usize {
        self.records[0].1.len()
    }

    /// Returns the (id, sequence) records in input order.
    pub fn records(&self) -> &[(String, String)] {
        &self.records
    }

    /// Trims every sequence id at the first `/`.
    ///
    /// Simulated gene alignments label sequences `SPECIES/GENEID`; the
    /// species part is what must line up with the tree leaves.
    pub fn trim_ids_at_slash(&mut self) {
        for (id, _) in &mut self.records {
            if let Some(pos) = id.find('/') {
                id.truncate(pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_length_invariant() {
        let records = vec![
            ("A".to_string(), "MKV".to_string()),
            ("B".to_string(), "MKL".to_string()),
        ];
        let alignment = Alignment::from_records(records).unwrap();
        assert_eq!(alignment.num_sequences(), 2);
        assert_eq!(alignment.num_columns(), 3);
    }

    #[test]
    fn test_unequal_length_rejected() {
        let records = vec![
            ("A".to_string(), "MKV".to_string()),
            ("B".to_string(), "MK".to_string()),
        ];
        assert!(matches!(
            Alignment::from_records(records),
            Err(ReformatError::AlignmentLength(_))
        ));
    }

    #[test]
    fn test_empty_alignment_rejected() {
        assert!(Alignment::from_records(vec![]).is_err());
    }

    #[test]
    fn test_trim_ids_at_slash() {
        let mut alignment = Alignment::from_records(vec![
            ("SE001/12345".to_string(), "MK".to_string()),
            ("SE002".to_string(), "ML".to_string()),
        ])
        .unwrap();
        alignment.trim_ids_at_slash();
        assert_eq!(alignment.records()[0].0, "SE001");
        assert_eq!(alignment.records()[1].0, "SE002");
    }
}

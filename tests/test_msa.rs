use hgtform::msa::{read_fasta_file, write_phylip};
use std::fs;

#[test]
fn test_fasta_to_phylip_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let fasta_path = dir.path().join("gene.fasta");
    let phylip_path = dir.path().join("gene.phy");

    // 120 columns split over several lines per record
    let block = "ACGTACGTACGTACGTACGTACGTACGTACGTACGTACGT";
    let fasta = format!(
        ">SE001/885 simulated\n{block}\n{block}\n{block}\n>SE002/1391\n{block}\n{block}\n{block}\n"
    );
    fs::write(&fasta_path, fasta).unwrap();

    let mut alignment = read_fasta_file(&fasta_path).unwrap();
    assert_eq!(alignment.num_sequences(), 2);
    assert_eq!(alignment.num_columns(), 120);

    alignment.trim_ids_at_slash();
    write_phylip(&phylip_path, &alignment).unwrap();

    let content = fs::read_to_string(&phylip_path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("2 120"));

    let row = lines.next().unwrap();
    assert!(row.starts_with("SE001     "));
    assert_eq!(row.len(), 10 + 120);

    let row = lines.next().unwrap();
    assert!(row.starts_with("SE002     "));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_missing_fasta_file() {
    assert!(read_fasta_file("does_not_exist.fasta").is_err());
}

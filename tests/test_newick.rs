use hgtform::model::Tree;
use hgtform::newick::{NewickParser, parse_str, to_newick};
use hgtform::parser::byte_parser::ByteParser;
use std::io::Write;

// --- TESTS NEWICK STRING PARSING ---
#[test]
fn test_basic_tree() {
    let newick = "((A:1.0,B:2.0):3.0,C:4.0);";
    let mut parser = ByteParser::for_str(newick);
    let tree = NewickParser::new()
        .with_num_leaves(3)
        .parse(&mut parser)
        .unwrap();

    // Test counts
    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(tree.num_internal(), 1);
    assert_eq!(tree.num_vertices(), 5);

    // Test relationships
    // - Root has children (internal, C)
    let root = tree.root();
    let root_index = root.index();
    let root_children = root.children().unwrap();
    assert_eq!(root_children.len(), 2);

    // - Internal node has children (A, B)
    let internal = tree.vertex(root_children[0]);
    assert!(internal.is_internal());
    let internal_children = internal.children().unwrap();
    assert_eq!(internal_children.len(), 2);

    // - Three leaves with labels stored directly
    assert_eq!(tree.vertex(internal_children[0]).label().unwrap(), "A");
    assert_eq!(tree.vertex(internal_children[1]).label().unwrap(), "B");
    assert_eq!(tree.vertex(root_children[1]).label().unwrap(), "C");

    // - Parent relationships
    assert_eq!(internal.parent_index(), Some(root_index));
    assert_eq!(
        tree.vertex(internal_children[0]).parent_index(),
        Some(root_children[0])
    );
    assert_eq!(
        tree.vertex(root_children[1]).parent_index(),
        Some(root_index)
    );
}

#[test]
fn test_tree_with_root_branch_length_dropped() {
    // Root branch lengths are not representable in the output formats
    let newick = "((A:1.0,B:2.0):3.0,C:4.0):0.5;";
    let tree = parse_str(newick).unwrap();

    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(to_newick(&tree), "((A:1,B:2):3,C:4);");
}

#[test]
fn test_multifurcating_tree() {
    let newick = "(A,B,C,(D,E));";
    let tree = parse_str(newick).unwrap();

    assert_eq!(tree.num_leaves(), 5);
    assert_eq!(tree.root().children().unwrap().len(), 4);
    assert!(!tree.is_binary());
    assert!(tree.is_valid());
}

#[test]
fn test_tree_with_quoted_labels() {
    let newick = "(('Taxon one':1.5,'Second''s taxon':2.5):3.0,'3rd Taxon':4.0);";
    let tree = parse_str(newick).unwrap();

    assert_eq!(tree.num_leaves(), 3);
    let labels = tree.leaf_labels();
    assert!(labels.contains(&"Taxon one"));
    assert!(labels.contains(&"Second's taxon"));
    assert!(labels.contains(&"3rd Taxon"));
}

#[test]
fn test_tree_with_scientific_notation() {
    let newick = "((A:1e-5,B:2.5E+3):1.0e2,C:3.14E-10);";
    let tree = parse_str(newick).unwrap();

    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(tree.num_internal(), 1);
    assert_eq!(tree.num_vertices(), 5);
}

#[test]
fn test_optional_branch_length() {
    let newick = "((A:1.0,B),C:4.0);";
    let tree = parse_str(newick);
    assert!(tree.is_ok());
}

#[test]
fn test_newick_with_nhx_comments() {
    // NHX annotations ride along as bracket comments and are skipped
    let newick = "((Homo_sapiens[&&NHX:D=N]:0.1,Pan_troglodytes[&&NHX:D=N]:0.1)[&&NHX:D=Y]:0.2,Mus_musculus:0.4);";
    let tree = parse_str(newick).unwrap();

    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(
        to_newick(&tree),
        "((Homo_sapiens:0.1,Pan_troglodytes:0.1):0.2,Mus_musculus:0.4);"
    );
}

#[test]
fn test_newick_with_free_comments() {
    let newick = "[A tree of] (([Shags!]A[Great Commentoran]:0.33,B[Pied Commentoran]:0.33):1.87,C:[King Commentoran]2.2);";
    let tree = parse_str(newick);

    if tree.is_err() {
        eprintln!(
            "Error parsing tree with comments: {:?}",
            tree.as_ref().err()
        );
    }
    assert!(tree.is_ok());
}

// --- TESTS DEALING WITH CORRUPT NEWICK STRINGS ---

#[test]
fn test_missing_semicolon() {
    let newick = "((A:1.0,B:2.0):3.0,C:4.0)";
    assert!(parse_str(newick).is_err());
}

#[test]
fn test_missing_comma() {
    let newick = "((A:1.0 B:2.0):3.0,C:4.0);";
    assert!(parse_str(newick).is_err());
}

#[test]
fn test_unmatched_parentheses() {
    let newick = "((A:1.0,B:2.0:3.0,C:4.0);";
    assert!(parse_str(newick).is_err());
}

#[test]
fn test_invalid_branch_length() {
    let newick = "((A:1.0,B:abc):3.0,C:4.0);";
    assert!(parse_str(newick).is_err());
}

#[test]
fn test_negative_branch_length_rejected() {
    let newick = "((A:1.0,B:-2.0):3.0,C:4.0);";
    assert!(parse_str(newick).is_err());
}

#[test]
fn test_empty_input() {
    assert!(parse_str("").is_err());
    assert!(parse_str(";").is_err());
}

// --- TESTS TREE TRANSFORMS ---

#[test]
fn test_binarize_polytomy() {
    let mut tree = parse_str("(A,B,C,D);").unwrap();
    assert!(!tree.is_binary());

    tree.binarize();

    assert!(tree.is_binary());
    assert!(tree.is_valid());
    assert_eq!(tree.num_leaves(), 4);
    // Leaf order preserved; new vertices carry zero-length branches
    assert_eq!(to_newick(&tree), "(((A,B):0,C):0,D);");
}

#[test]
fn test_binarize_leaves_binary_tree_unchanged() {
    let mut tree = parse_str("((A,B),(C,D));").unwrap();
    tree.binarize();
    assert_eq!(to_newick(&tree), "((A,B),(C,D));");
}

#[test]
fn test_strip_branch_lengths() {
    let mut tree = parse_str("((A:1.0,B:2.0):3.0,C:4.0);").unwrap();
    tree.strip_branch_lengths();
    assert_eq!(to_newick(&tree), "((A,B),C);");
}

#[test]
fn test_sanitize_leaf_labels() {
    let mut tree = parse_str("(('Homo/sapiens':1.0,'Pan/troglodytes':1.0):1.0,Mus_musculus:2.0);")
        .unwrap();
    tree.sanitize_leaf_labels();

    let labels = tree.leaf_labels();
    assert!(labels.contains(&"Homo_sapiens"));
    assert!(labels.contains(&"Pan_troglodytes"));
    assert!(labels.contains(&"Mus_musculus"));
}

// --- TESTS PARSING WHOLE FILE ---
#[test]
fn test_parsing_newick_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gene.nwk");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "((SE001:0.1,SE002:0.2):0.3,SE003:0.4);").unwrap();

    let tree = hgtform::newick::parse_file(&path).unwrap();
    assert_eq!(tree.num_leaves(), 3);
    assert!(tree.is_valid());
}

#[test]
fn test_parsing_missing_file() {
    let result: Result<Tree, _> = hgtform::newick::parse_file("does_not_exist.nwk");
    assert!(result.is_err());
}

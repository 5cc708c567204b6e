use criterion::{Criterion, criterion_group, criterion_main};
use hgtform::newick::{parse_str, to_newick};

const TREE_SIZES: &[usize] = &[50, 500, 5000];

/// Builds a caterpillar tree with `n` leaves, `((((T0:1,T1:1):1,T2:1):1,...);`.
fn caterpillar_newick(n: usize) -> String {
    let mut newick = String::from("T0:1");
    for i in 1..n {
        newick = format!("({newick},T{i}:1)");
        if i + 1 < n {
            newick.push_str(":1");
        }
    }
    newick.push(';');
    newick
}

fn newick_parsing(c: &mut Criterion) {
    for &n in TREE_SIZES {
        let newick = caterpillar_newick(n);
        c.bench_function(&format!("parse_n{n}"), |b| {
            b.iter(|| parse_str(&newick).unwrap());
        });
    }
}

fn newick_writing(c: &mut Criterion) {
    for &n in TREE_SIZES {
        let tree = parse_str(caterpillar_newick(n)).unwrap();
        c.bench_function(&format!("write_n{n}"), |b| {
            b.iter(|| to_newick(&tree));
        });
    }
}

criterion_group!(parsing, newick_parsing);
criterion_group! {
    name = writing;
    config = Criterion::default().sample_size(50);
    targets = newick_writing
}
criterion_main!(parsing, writing);

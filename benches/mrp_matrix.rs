use criterion::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};
use mrp::{MatrixFormat, MatrixOptions, MrpBuilder, Randomize};
use std::hint::black_box;

/// Caterpillar trees over overlapping windows of `taxa_per_tree` taxa.
fn prepare_forest(tree_count: usize, taxa_per_tree: usize) -> String {
    let mut forest = String::new();
    for tree in 0..tree_count {
        let first = tree * taxa_per_tree / 2;
        let mut newick = format!("t{first}:0.1");
        for taxon in first + 1..first + taxa_per_tree {
            newick = format!("({newick},t{taxon}:0.1)0.9:0.05");
        }
        forest.push_str(&newick);
        forest.push_str(";\n");
    }
    forest
}

fn bench_mrp_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("mrp_matrix");
    let _ = group.sample_size(30);

    for (tree_count, taxa_per_tree) in [(100, 50), (1000, 50), (200, 500)] {
        let forest = prepare_forest(tree_count, taxa_per_tree);
        let name = format!("{tree_count}x{taxa_per_tree}");
        let _ = group.throughput(Throughput::Bytes(forest.len() as u64));

        let _ = group.bench_with_input(
            BenchmarkId::new("read_trees", &name),
            &forest,
            |b, forest| {
                b.iter(|| {
                    let mut builder = MrpBuilder::new();
                    builder.read_trees(black_box(forest.as_bytes())).unwrap();
                    builder.finish()
                })
            },
        );

        let mut builder = MrpBuilder::new();
        builder.read_trees(forest.as_bytes()).unwrap();
        let built = builder.finish();
        let options = MatrixOptions::new(MatrixFormat::Phylip)
            .with_randomize(Randomize::On(Some(1)));

        let _ = group.bench_with_input(
            BenchmarkId::new("write_matrix", &name),
            &built,
            |b, built| {
                b.iter(|| {
                    let mut buffer: Vec<u8> = Vec::new();
                    built.write_matrix(&mut buffer, black_box(&options)).unwrap();
                    buffer
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_mrp_matrix);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mintkit::core::hash::keccak256;
use mintkit::proofs::merkle::DEFAULT_PARALLEL_THRESHOLD;
use mintkit::{DigestScheme, Hash, MerkleTree};

fn generate_leaves(count: usize) -> Vec<Hash> {
    (0..count)
        .map(|i| keccak256(format!("0x{:040x}", i).as_bytes()))
        .collect()
}

fn build_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle_build");

    for count in [10, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(count as u64));
        let leaves = generate_leaves(count);

        group.bench_with_input(BenchmarkId::new("parallel", count), &leaves, |b, leaves| {
            b.iter(|| {
                let leaves = black_box(leaves.clone());
                MerkleTree::build_with_threshold(leaves, DEFAULT_PARALLEL_THRESHOLD).unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("sequential", count), &leaves, |b, leaves| {
            b.iter(|| {
                MerkleTree::build_with_threshold(black_box(leaves.clone()), usize::MAX).unwrap()
            })
        });
    }

    group.finish();
}

fn prove_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle_prove");

    for count in [1_000, 100_000] {
        let leaves = generate_leaves(count);
        let tree = MerkleTree::build(leaves.clone()).unwrap();
        let target = leaves[count - 1];
        let root = tree.root();

        group.bench_function(BenchmarkId::new("prove_last", count), |b| {
            b.iter(|| tree.prove(black_box(&target)).unwrap())
        });

        let proof = tree.prove(&target).unwrap();
        group.bench_function(BenchmarkId::new("verify", count), |b| {
            b.iter(|| mintkit::verify(black_box(proof.siblings()), &target, &root))
        });
    }

    group.finish();
}

fn provenance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("provenance");

    for count in [100, 10_000] {
        let blobs: Vec<Vec<u8>> = (0..count)
            .map(|i| format!(r#"{{"name":"Token #{i}","image":"ipfs://{i}.png"}}"#))
            .map(String::into_bytes)
            .collect();
        group.throughput(Throughput::Elements(count as u64));

        for scheme in [DigestScheme::Raw, DigestScheme::Hex] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", scheme), count),
                &blobs,
                |b, blobs| {
                    b.iter(|| mintkit::provenance(black_box(blobs.as_slice()), scheme).unwrap())
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, build_benchmark, prove_benchmark, provenance_benchmark);
criterion_main!(benches);

//! Performance benchmarks for hic-adjacency
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hic_adjacency::core::mapper::{chromosome_at, to_bin};
use hic_adjacency::{
    get_range, BinTable, DenseMatrixStore, Genome, RangeQuery, DEFAULT_RESOLUTIONS,
};

/// Human-like genome: 24 chromosomes, 50-250 Mb
fn bench_genome() -> Genome {
    let chroms: Vec<(String, u64)> = (1..=24)
        .map(|i| (format!("chr{}", i), 250_000_000 - (i as u64) * 8_000_000))
        .collect();
    Genome::new(chroms).unwrap()
}

/// Benchmark bin table construction across the full resolution ladder
fn bench_table_build(c: &mut Criterion) {
    c.bench_function("bin_table_build", |b| {
        b.iter(|| {
            let table =
                BinTable::build(black_box(bench_genome()), black_box(&DEFAULT_RESOLUTIONS))
                    .unwrap();
            black_box(table)
        })
    });
}

/// Benchmark forward position -> whole-genome bin mapping
fn bench_to_bin(c: &mut Criterion) {
    let table = BinTable::build(bench_genome(), &DEFAULT_RESOLUTIONS).unwrap();

    c.bench_function("to_bin", |b| {
        b.iter(|| {
            let bin = to_bin(
                black_box(&table),
                black_box(10_000),
                black_box("chr7"),
                black_box(55_000_000),
            )
            .unwrap();
            black_box(bin)
        })
    });
}

/// Benchmark the inverse lookup from bin index to chromosome
fn bench_inverse_lookup(c: &mut Criterion) {
    let table = BinTable::build(bench_genome(), &DEFAULT_RESOLUTIONS).unwrap();
    let total = table.total_bins(10_000).unwrap();
    let bins: Vec<u64> = (0..1000).map(|i| i * (total / 1000)).collect();

    let mut group = c.benchmark_group("inverse_lookup");
    group.throughput(Throughput::Elements(bins.len() as u64));
    group.bench_function("chromosome_at", |b| {
        b.iter(|| {
            for &bin in &bins {
                let chrom = chromosome_at(black_box(&table), 10_000, black_box(bin)).unwrap();
                black_box(chrom);
            }
        })
    });
    group.finish();
}

/// Benchmark range extraction over sparse matrices of growing density
fn bench_range_extraction(c: &mut Criterion) {
    // Small genome so the dense backing store stays reasonable.
    let chroms = vec![
        ("chr1".to_string(), 2_000_000u64),
        ("chr2".to_string(), 1_000_000),
    ];
    let resolution = 1_000u64;
    let genome = Genome::new(chroms.clone()).unwrap();
    let table = BinTable::build(genome, &[resolution]).unwrap();
    let total = table.total_bins(resolution).unwrap();

    let mut group = c.benchmark_group("range_extraction");
    for density in [100usize, 1_000, 10_000] {
        let mut store = DenseMatrixStore::new(chroms.clone());
        store.add_resolution(resolution, total);
        for k in 0..density as u64 {
            let i = (k * 7) % total;
            let j = (k * 13) % total;
            store.set(resolution, i, j, (k % 20 + 1) as u32).unwrap();
        }

        let query = RangeQuery {
            chrom: "chr1".to_string(),
            start: 0,
            end: 2_000_000,
            resolution,
            limit: None,
            filter: None,
        };

        group.throughput(Throughput::Elements(density as u64));
        group.bench_with_input(BenchmarkId::from_parameter(density), &density, |b, _| {
            b.iter(|| {
                let result = get_range(black_box(&store), black_box(&table), black_box(&query))
                    .unwrap();
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_table_build,
    bench_to_bin,
    bench_inverse_lookup,
    bench_range_extraction,
);

criterion_main!(benches);

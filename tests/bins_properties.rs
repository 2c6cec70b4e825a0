//! Property-based tests for the whole-genome bin table
//!
//! The chromosome bin ranges must partition [0, total_bins) with no gaps
//! or overlaps, at every resolution, for any genome.

use hic_adjacency::{BinTable, Genome};
use proptest::prelude::*;

/// Generate an ordered chromosome list with positive lengths
fn arb_genome() -> impl Strategy<Value = Vec<(String, u64)>> {
    prop::collection::vec(1u64..500_000_000, 1..=24).prop_map(|lengths| {
        lengths
            .into_iter()
            .enumerate()
            .map(|(i, len)| (format!("chr{}", i + 1), len))
            .collect()
    })
}

/// Generate a small set of positive resolutions
fn arb_resolutions() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u64..=10_000_000, 1..=6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Bin counts sum to the whole-genome total at every resolution.
    #[test]
    fn prop_bin_counts_sum_to_total(
        chroms in arb_genome(),
        resolutions in arb_resolutions(),
    ) {
        let genome = Genome::new(chroms.clone()).unwrap();
        let table = BinTable::build(genome, &resolutions).unwrap();

        for &res in table.resolutions() {
            let total = table.total_bins(res).unwrap();
            let sum: u64 = chroms
                .iter()
                .map(|(name, _)| table.bins(res, name).unwrap().bin_count)
                .sum();
            prop_assert_eq!(sum, total);
        }
    }

    /// Offsets are contiguous: each chromosome starts where the previous
    /// one ended, the first starts at 0, and the last ends at the total.
    #[test]
    fn prop_offsets_partition_axis(
        chroms in arb_genome(),
        resolutions in arb_resolutions(),
    ) {
        let genome = Genome::new(chroms.clone()).unwrap();
        let table = BinTable::build(genome, &resolutions).unwrap();

        for &res in table.resolutions() {
            let mut expected_start = 0u64;
            for (name, _) in &chroms {
                let bins = table.bins(res, name).unwrap();
                prop_assert_eq!(bins.start_offset, expected_start);
                prop_assert_eq!(bins.end_offset, bins.start_offset + bins.bin_count);
                expected_start = bins.end_offset;
            }
            prop_assert_eq!(expected_start, table.total_bins(res).unwrap());
        }
    }

    /// Ceiling division: bin_count * resolution covers the chromosome,
    /// and one bin fewer would not.
    #[test]
    fn prop_ceiling_division(
        chroms in arb_genome(),
        resolutions in arb_resolutions(),
    ) {
        let genome = Genome::new(chroms.clone()).unwrap();
        let table = BinTable::build(genome, &resolutions).unwrap();

        for &res in table.resolutions() {
            for (name, length) in &chroms {
                let count = table.bins(res, name).unwrap().bin_count;
                prop_assert!(count * res >= *length);
                prop_assert!((count - 1) * res < *length);
            }
        }
    }

    /// Identical input yields an identical table.
    #[test]
    fn prop_build_deterministic(
        chroms in arb_genome(),
        resolutions in arb_resolutions(),
    ) {
        let t1 = BinTable::build(Genome::new(chroms.clone()).unwrap(), &resolutions).unwrap();
        let t2 = BinTable::build(Genome::new(chroms.clone()).unwrap(), &resolutions).unwrap();

        prop_assert_eq!(t1.resolutions(), t2.resolutions());
        for &res in t1.resolutions() {
            prop_assert_eq!(t1.total_bins(res).unwrap(), t2.total_bins(res).unwrap());
            for (name, _) in &chroms {
                prop_assert_eq!(t1.bins(res, name).unwrap(), t2.bins(res, name).unwrap());
            }
        }
    }
}

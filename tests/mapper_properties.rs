//! Property-based tests for coordinate mapping
//!
//! Round-trip between base-pair positions, whole-genome bins, and back to
//! the owning chromosome, plus monotonicity of the interval conversion.

use hic_adjacency::core::mapper::{chromosome_at, interval_to_bins, to_bin};
use hic_adjacency::{BinTable, Genome};
use proptest::prelude::*;

fn arb_genome() -> impl Strategy<Value = Vec<(String, u64)>> {
    prop::collection::vec(1u64..100_000_000, 1..=12).prop_map(|lengths| {
        lengths
            .into_iter()
            .enumerate()
            .map(|(i, len)| (format!("chr{}", i + 1), len))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any in-range position maps to a bin owned by its own chromosome.
    #[test]
    fn prop_to_bin_round_trips_to_owner(
        chroms in arb_genome(),
        resolution in 1u64..=5_000_000,
        chrom_pick in any::<prop::sample::Index>(),
        bp_frac in 0.0f64..1.0,
    ) {
        let genome = Genome::new(chroms.clone()).unwrap();
        let table = BinTable::build(genome, &[resolution]).unwrap();

        let (name, length) = &chroms[chrom_pick.index(chroms.len())];
        let bp = ((*length as f64 - 1.0) * bp_frac) as u64;

        let bin = to_bin(&table, resolution, name, bp).unwrap();
        prop_assert_eq!(chromosome_at(&table, resolution, bin).unwrap(), name.as_str());
    }

    /// Whole-genome bins are within range and decompose consistently.
    #[test]
    fn prop_every_bin_has_exactly_one_owner(
        chroms in arb_genome(),
        resolution in 1u64..=5_000_000,
        bin_frac in 0.0f64..1.0,
    ) {
        let genome = Genome::new(chroms.clone()).unwrap();
        let table = BinTable::build(genome, &[resolution]).unwrap();
        let total = table.total_bins(resolution).unwrap();

        let bin = ((total - 1) as f64 * bin_frac) as u64;
        let owner = chromosome_at(&table, resolution, bin).unwrap();

        // Owner agrees with the half-open range check over all chromosomes.
        let owners: Vec<&str> = chroms
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(|name| {
                let bins = table.bins(resolution, name).unwrap();
                bins.start_offset <= bin && bin < bins.end_offset
            })
            .collect();
        prop_assert_eq!(owners, vec![owner]);
    }

    /// Growing the end never shrinks bin_hi; shrinking the start never
    /// grows bin_lo.
    #[test]
    fn prop_interval_to_bins_monotonic(
        resolution in 1u64..=1_000_000,
        start in 0u64..500_000_000,
        len in 0u64..100_000_000,
        grow in 0u64..50_000_000,
    ) {
        let end = start + len;
        let (lo, hi) = interval_to_bins(resolution, start, end).unwrap();

        let (_, hi_grown) = interval_to_bins(resolution, start, end + grow).unwrap();
        prop_assert!(hi_grown >= hi);

        let shrunk_start = start.saturating_sub(grow);
        let (lo_shrunk, _) = interval_to_bins(resolution, shrunk_start, end).unwrap();
        prop_assert!(lo_shrunk <= lo);
    }

    /// The bin range always covers the interval and nothing more than one
    /// bin beyond each end.
    #[test]
    fn prop_interval_to_bins_covers(
        resolution in 1u64..=1_000_000,
        start in 0u64..500_000_000,
        len in 1u64..100_000_000,
    ) {
        let end = start + len;
        let (lo, hi) = interval_to_bins(resolution, start, end).unwrap();

        prop_assert!(lo * resolution <= start);
        prop_assert!(hi * resolution >= end);
        prop_assert!(start - lo * resolution < resolution);
        prop_assert!(hi * resolution - end < resolution);
    }
}

//! Whole-genome bin index
//!
//! For each supported resolution, every chromosome is cut into
//! ceil(length / resolution) fixed-width bins and the bins of all
//! chromosomes are concatenated, in genome order, into one linear axis.
//! The table records where each chromosome's bins start and end on that
//! axis. Built once per dataset open, immutable afterwards.

use crate::core::error::{IndexBuildError, IndexBuildResult, QueryError, QueryResult};
use crate::core::genome::Genome;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Bin resolutions exposed by the original adjacency service, in base pairs
pub const DEFAULT_RESOLUTIONS: [u64; 9] = [
    1_000, 5_000, 10_000, 25_000, 50_000, 100_000, 250_000, 500_000, 1_000_000,
];

/// Bin layout of one chromosome at one resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromBins {
    /// ceil(chromosome length / resolution); the final partial bin is kept
    pub bin_count: u64,
    /// Whole-genome bin index of this chromosome's first bin
    pub start_offset: u64,
    /// `start_offset + bin_count`; first bin of the next chromosome
    pub end_offset: u64,
}

/// Immutable per-resolution, per-chromosome bin layout for one genome
///
/// Invariants (for every resolution):
/// - the first chromosome's `start_offset` is 0
/// - `start_offset(c_i) == end_offset(c_{i-1})`
/// - the chromosome ranges partition `[0, total_bins)` with no gaps
#[derive(Debug, Clone)]
pub struct BinTable {
    genome: Genome,
    /// Ascending, deduplicated resolution list
    resolutions: Vec<u64>,
    /// rows[resolution position][chromosome position]
    rows: Vec<Vec<ChromBins>>,
    /// Whole-genome bin count per resolution
    totals: Vec<u64>,
}

impl BinTable {
    /// Build the bin table for a genome and a set of resolutions
    ///
    /// Resolutions are sorted ascending and deduplicated. Fails on a zero
    /// resolution or an empty resolution list; genome validation happens
    /// in [`Genome::new`]. Deterministic: identical input yields an
    /// identical table.
    pub fn build(genome: Genome, resolutions: &[u64]) -> IndexBuildResult<Self> {
        if resolutions.is_empty() {
            return Err(IndexBuildError::EmptyResolutionSet);
        }
        if let Some(&bad) = resolutions.iter().find(|&&r| r == 0) {
            return Err(IndexBuildError::InvalidResolution { resolution: bad });
        }

        let mut sorted: Vec<u64> = resolutions.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let mut rows = Vec::with_capacity(sorted.len());
        let mut totals = Vec::with_capacity(sorted.len());

        for &resolution in &sorted {
            let mut row = Vec::with_capacity(genome.len());
            let mut offset = 0u64;
            for chrom in genome.chromosomes() {
                let bin_count = chrom.length.div_ceil(resolution);
                row.push(ChromBins {
                    bin_count,
                    start_offset: offset,
                    end_offset: offset + bin_count,
                });
                offset += bin_count;
            }
            log::debug!(
                "bin table: resolution {} -> {} bins over {} chromosomes",
                resolution,
                offset,
                genome.len()
            );
            rows.push(row);
            totals.push(offset);
        }

        Ok(Self {
            genome,
            resolutions: sorted,
            rows,
            totals,
        })
    }

    /// Build with the original service's default resolution ladder
    pub fn with_default_resolutions(genome: Genome) -> IndexBuildResult<Self> {
        Self::build(genome, &DEFAULT_RESOLUTIONS)
    }

    /// The genome this table was built for
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Supported resolutions, ascending
    pub fn resolutions(&self) -> &[u64] {
        &self.resolutions
    }

    /// Check if a resolution is supported
    pub fn has_resolution(&self, resolution: u64) -> bool {
        self.resolutions.binary_search(&resolution).is_ok()
    }

    pub(crate) fn resolution_index(&self, resolution: u64) -> QueryResult<usize> {
        self.resolutions
            .binary_search(&resolution)
            .map_err(|_| QueryError::UnknownResolution(resolution))
    }

    /// Bin layout of one chromosome at one resolution (accepts name variants)
    pub fn bins(&self, resolution: u64, chrom: &str) -> QueryResult<ChromBins> {
        let res_pos = self.resolution_index(resolution)?;
        let chrom_pos = self
            .genome
            .position_of(chrom)
            .ok_or_else(|| QueryError::UnknownChromosome(chrom.to_string()))?;
        Ok(self.rows[res_pos][chrom_pos])
    }

    /// Bin layouts of all chromosomes, in genome order, at one resolution
    pub fn row(&self, resolution: u64) -> QueryResult<&[ChromBins]> {
        let res_pos = self.resolution_index(resolution)?;
        Ok(&self.rows[res_pos])
    }

    /// Whole-genome bin count at one resolution
    pub fn total_bins(&self, resolution: u64) -> QueryResult<u64> {
        let res_pos = self.resolution_index(resolution)?;
        Ok(self.totals[res_pos])
    }
}

/// Memoized bin tables, keyed per dataset
///
/// Tables are built on first request and shared afterwards; there is no
/// invalidation because a dataset's chromosome list is static for the
/// lifetime of its handle. Safe to share across threads.
#[derive(Debug, Default)]
pub struct BinTableCache {
    tables: Mutex<HashMap<String, Arc<BinTable>>>,
}

impl BinTableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the table for `dataset_key`, building it on a miss
    pub fn get_or_build<F>(&self, dataset_key: &str, build: F) -> IndexBuildResult<Arc<BinTable>>
    where
        F: FnOnce() -> IndexBuildResult<BinTable>,
    {
        let mut tables = self.tables.lock().expect("bin table cache lock poisoned");
        if let Some(table) = tables.get(dataset_key) {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(build()?);
        tables.insert(dataset_key.to_string(), Arc::clone(&table));
        Ok(table)
    }

    /// Number of cached tables
    pub fn len(&self) -> usize {
        self.tables.lock().expect("bin table cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

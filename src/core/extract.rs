//! Windowed range extraction
//!
//! Turns a (chromosome, base-pair interval) query into one rectangular
//! slice read against the matrix store, then re-annotates every non-zero
//! cell with chromosome identities on both axes. The primary axis is the
//! queried chromosome's rows; the secondary axis is either the full
//! matrix width, one interacting chromosome, or a sub-region of it.

use crate::core::bins::BinTable;
use crate::core::error::{QueryError, Result};
use crate::core::mapper::{bin_to_position, interval_to_bins};
use crate::core::store::MatrixStore;

/// Keep only same-chromosome or only cross-chromosome interactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionFilter {
    /// Keep records with both bins on the queried chromosome
    Intra,
    /// Keep records whose interacting bin is on another chromosome
    Inter,
}

impl RegionFilter {
    /// Parse from string (for CLI / query parameters)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "intra" => Some(RegionFilter::Intra),
            "inter" => Some(RegionFilter::Inter),
            _ => None,
        }
    }

    fn keeps(&self, chr_a: &str, chr_b: &str) -> bool {
        match self {
            RegionFilter::Intra => chr_a == chr_b,
            RegionFilter::Inter => chr_a != chr_b,
        }
    }
}

/// Restrict the secondary axis to one chromosome, optionally to a
/// base-pair sub-range of it
#[derive(Debug, Clone)]
pub struct RegionLimit {
    pub chrom: String,
    /// Half-open bp interval within `chrom`; `None` means the whole
    /// chromosome
    pub span: Option<(u64, u64)>,
}

/// A windowed extraction request
#[derive(Debug, Clone)]
pub struct RangeQuery {
    pub chrom: String,
    /// Half-open bp interval on `chrom`
    pub start: u64,
    pub end: u64,
    pub resolution: u64,
    pub limit: Option<RegionLimit>,
    pub filter: Option<RegionFilter>,
}

/// One annotated non-zero cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRecord {
    pub chr_a: String,
    /// bp start of the row bin within `chr_a`
    pub start_a: u64,
    pub chr_b: String,
    /// bp start of the column bin within `chr_b`
    pub start_b: u64,
    /// Recorded interaction count (always positive)
    pub value: u32,
    /// Whole-genome bin coordinates of the cell
    pub bin_a: u64,
    pub bin_b: u64,
}

/// Trace of what one extraction actually read and emitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceDiagnostics {
    pub resolution: u64,
    /// Whole-genome row range handed to the store
    pub row_range: (u64, u64),
    /// Whole-genome column range handed to the store
    pub col_range: (u64, u64),
    /// Non-zero cells in the returned block
    pub nonzero_cells: usize,
    /// Records surviving the filter
    pub emitted: usize,
    /// Records removed by the filter
    pub filtered_out: usize,
}

/// Extraction output: records plus the diagnostics trace
#[derive(Debug, Clone)]
pub struct RangeResult {
    pub records: Vec<InteractionRecord>,
    pub diagnostics: SliceDiagnostics,
}

/// Extract the non-zero interactions for a region
///
/// Issues exactly one slice read. Rows overhanging the queried
/// chromosome's end are clamped to its last bin rather than bleeding
/// into the next chromosome. Cells with a stored value of zero are
/// never emitted.
pub fn get_range<S: MatrixStore>(
    store: &S,
    table: &BinTable,
    query: &RangeQuery,
) -> Result<RangeResult> {
    let resolution = query.resolution;
    let chrom_a = table
        .genome()
        .get(&query.chrom)
        .ok_or_else(|| QueryError::UnknownChromosome(query.chrom.clone()))?
        .name
        .clone();
    let a_bins = table.bins(resolution, &chrom_a)?;

    // Primary axis: relative bin window, clamped to the chromosome span,
    // then offset onto the whole-genome axis.
    let (rel_lo, rel_hi) = interval_to_bins(resolution, query.start, query.end)?;
    let rel_lo = rel_lo.min(a_bins.bin_count);
    let rel_hi = rel_hi.min(a_bins.bin_count);
    let row_range = (a_bins.start_offset + rel_lo, a_bins.start_offset + rel_hi);

    // Secondary axis: full width unless limited to one chromosome or a
    // sub-region of it.
    let col_range = match &query.limit {
        None => (0, table.total_bins(resolution)?),
        Some(limit) => {
            let b_bins = table.bins(resolution, &limit.chrom)?;
            match limit.span {
                None => (b_bins.start_offset, b_bins.end_offset),
                Some((bp_start, bp_end)) => {
                    let (b_lo, b_hi) = interval_to_bins(resolution, bp_start, bp_end)?;
                    let b_lo = b_lo.min(b_bins.bin_count);
                    let b_hi = b_hi.min(b_bins.bin_count);
                    (b_bins.start_offset + b_lo, b_bins.start_offset + b_hi)
                }
            }
        }
    };

    let block = store.read_slice(resolution, row_range.0..row_range.1, col_range.0..col_range.1)?;
    let (nrows, ncols) = block.shape();
    log::debug!(
        "get_range {}:{}-{} @{} -> rows [{}, {}) cols [{}, {}) block {}x{}",
        chrom_a,
        query.start,
        query.end,
        resolution,
        row_range.0,
        row_range.1,
        col_range.0,
        col_range.1,
        nrows,
        ncols
    );

    let mut records = Vec::new();
    let mut nonzero_cells = 0usize;
    let mut filtered_out = 0usize;

    for (i, j, value) in block.iter_nonzero() {
        nonzero_cells += 1;
        let start_a = (rel_lo + i as u64) * resolution;
        let bin_b = col_range.0 + j as u64;
        let (chr_b, start_b) = bin_to_position(table, resolution, bin_b)?;

        if let Some(filter) = &query.filter {
            if !filter.keeps(&chrom_a, chr_b) {
                filtered_out += 1;
                continue;
            }
        }

        records.push(InteractionRecord {
            chr_a: chrom_a.clone(),
            start_a,
            chr_b: chr_b.to_string(),
            start_b,
            value,
            bin_a: row_range.0 + i as u64,
            bin_b,
        });
    }

    let diagnostics = SliceDiagnostics {
        resolution,
        row_range,
        col_range,
        nonzero_cells,
        emitted: records.len(),
        filtered_out,
    };

    Ok(RangeResult {
        records,
        diagnostics,
    })
}

//! Coordinate mapping
//!
//! Stateless functions translating between base-pair positions,
//! per-chromosome bin indices, and the whole-genome bin axis defined by a
//! [`BinTable`]. The table is passed in explicitly so concurrent callers
//! can share one immutable instance.

use crate::core::bins::BinTable;
use crate::core::error::{QueryError, QueryResult};

/// Map a base-pair position to its whole-genome bin index
///
/// `floor(bp / resolution)` plus the chromosome's start offset on the
/// concatenated axis. Accepts chromosome naming variants.
pub fn to_bin(table: &BinTable, resolution: u64, chrom: &str, bp: u64) -> QueryResult<u64> {
    let bins = table.bins(resolution, chrom)?;
    Ok(bp / resolution + bins.start_offset)
}

/// Map a half-open base-pair interval to a half-open bin range
///
/// Returns `(floor(start / resolution), ceil(end / resolution))`, relative
/// to the chromosome's own first bin; the caller adds the chromosome
/// offset. `end` is exclusive: an end exactly on a bin boundary does not
/// pull in the next bin.
pub fn interval_to_bins(resolution: u64, bp_start: u64, bp_end: u64) -> QueryResult<(u64, u64)> {
    if bp_start > bp_end {
        return Err(QueryError::InvalidRange {
            start: bp_start,
            end: bp_end,
        });
    }
    Ok((bp_start / resolution, bp_end.div_ceil(resolution)))
}

/// Inverse lookup: the chromosome owning a whole-genome bin index
///
/// Chromosome ranges are half-open `[start_offset, end_offset)`, so a bin
/// falling exactly on a junction belongs to the later chromosome. Binary
/// search over the per-chromosome offsets.
pub fn chromosome_at(table: &BinTable, resolution: u64, bin: u64) -> QueryResult<&str> {
    let (pos, _) = chromosome_pos_at(table, resolution, bin)?;
    Ok(&table.genome().at(pos).expect("position from lookup").name)
}

/// Inverse lookup returning the chromosome position and its bin layout
pub(crate) fn chromosome_pos_at(
    table: &BinTable,
    resolution: u64,
    bin: u64,
) -> QueryResult<(usize, crate::core::bins::ChromBins)> {
    let row = table.row(resolution)?;
    let total = table.total_bins(resolution)?;
    if bin >= total {
        return Err(QueryError::IndexOutOfRange { index: bin, total });
    }
    // First chromosome whose range ends past the bin. Ranges are
    // contiguous from 0, so this is the owner.
    let pos = row.partition_point(|bins| bins.end_offset <= bin);
    debug_assert!(pos < row.len());
    Ok((pos, row[pos]))
}

/// Decompose a whole-genome bin index into (chromosome name, bp start)
///
/// The bp start is the bin's position within its own chromosome times the
/// resolution.
pub fn bin_to_position<'t>(
    table: &'t BinTable,
    resolution: u64,
    bin: u64,
) -> QueryResult<(&'t str, u64)> {
    let (pos, bins) = chromosome_pos_at(table, resolution, bin)?;
    let name = table.genome().at(pos).expect("position from lookup").name.as_str();
    Ok((name, (bin - bins.start_offset) * resolution))
}

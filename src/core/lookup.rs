//! Single-cell value retrieval
//!
//! One `read_cell` against the store plus inverse chromosome lookup for
//! both axes, so the caller gets back where on the genome the cell sits.

use crate::core::bins::BinTable;
use crate::core::error::{QueryError, Result};
use crate::core::mapper::bin_to_position;
use crate::core::store::MatrixStore;

/// A single annotated matrix cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointValue {
    pub resolution: u64,
    /// Whole-genome bin coordinates of the cell
    pub bin_i: u64,
    pub bin_j: u64,
    /// Chromosome owning the row bin
    pub chr_a: String,
    /// bp start of the row bin within `chr_a`
    pub start_a: u64,
    /// Chromosome owning the column bin
    pub chr_b: String,
    /// bp start of the column bin within `chr_b`
    pub start_b: u64,
    pub value: u32,
}

/// Read one cell and annotate both axes
///
/// Fails with `IndexOutOfRange` before touching the store if either bin
/// index is outside `[0, total_bins)`.
pub fn get_value<S: MatrixStore>(
    store: &S,
    table: &BinTable,
    resolution: u64,
    bin_i: u64,
    bin_j: u64,
) -> Result<PointValue> {
    let total = table.total_bins(resolution)?;
    for &bin in &[bin_i, bin_j] {
        if bin >= total {
            return Err(QueryError::IndexOutOfRange { index: bin, total }.into());
        }
    }

    let (chr_a, start_a) = bin_to_position(table, resolution, bin_i)?;
    let chr_a = chr_a.to_string();
    let (chr_b, start_b) = bin_to_position(table, resolution, bin_j)?;
    let chr_b = chr_b.to_string();
    let value = store.read_cell(resolution, bin_i, bin_j)?;

    Ok(PointValue {
        resolution,
        bin_i,
        bin_j,
        chr_a,
        start_a,
        chr_b,
        start_b,
        value,
    })
}

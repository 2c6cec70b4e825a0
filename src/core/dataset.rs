//! Dataset handle
//!
//! Ties a matrix store to the bin table built from its chromosome
//! metadata. Every access pattern (single file, per-user file, accession
//! hierarchy) reduces to locating a store and opening a `Dataset` over
//! it; the offset math lives in one place.

use crate::core::bins::BinTable;
use crate::core::error::Result;
use crate::core::extract::{self, RangeQuery, RangeResult};
use crate::core::genome::Genome;
use crate::core::lookup::{self, PointValue};
use crate::core::store::MatrixStore;
use std::sync::Arc;

/// Summary of what a dataset contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetDetails {
    /// Ordered (name, length) chromosome table
    pub chromosomes: Vec<(String, u64)>,
    /// Available resolutions, ascending
    pub resolutions: Vec<u64>,
}

/// An opened dataset: a store plus its immutable bin table
///
/// The table is behind an `Arc` so concurrent requests for the same
/// dataset can share it without rebuilding.
pub struct Dataset<S> {
    store: S,
    table: Arc<BinTable>,
}

impl<S: MatrixStore> Dataset<S> {
    /// Open a dataset, building the bin table from the store's own
    /// chromosome table and resolution list
    pub fn open(store: S) -> Result<Self> {
        let chromosomes = store.chromosomes()?;
        let resolutions = store.resolutions()?;
        let genome = Genome::new(chromosomes)?;
        let table = Arc::new(BinTable::build(genome, &resolutions)?);
        log::info!(
            "opened dataset: {} chromosomes, {} resolutions",
            table.genome().len(),
            table.resolutions().len()
        );
        Ok(Self { store, table })
    }

    /// Open with an explicit, already-shared bin table
    ///
    /// Used with [`BinTableCache`](crate::core::BinTableCache) when many
    /// requests hit the same dataset.
    pub fn with_table(store: S, table: Arc<BinTable>) -> Self {
        Self { store, table }
    }

    pub fn table(&self) -> &BinTable {
        &self.table
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Chromosomes and resolutions, for the metadata endpoint
    pub fn details(&self) -> DatasetDetails {
        DatasetDetails {
            chromosomes: self
                .table
                .genome()
                .chromosomes()
                .iter()
                .map(|c| (c.name.clone(), c.length))
                .collect(),
            resolutions: self.table.resolutions().to_vec(),
        }
    }

    /// Extract the non-zero interactions for a region
    pub fn get_range(&self, query: &RangeQuery) -> Result<RangeResult> {
        extract::get_range(&self.store, &self.table, query)
    }

    /// Read one annotated cell
    pub fn get_value(&self, resolution: u64, bin_i: u64, bin_j: u64) -> Result<PointValue> {
        lookup::get_value(&self.store, &self.table, resolution, bin_i, bin_j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::DenseMatrixStore;

    fn fixture() -> Dataset<DenseMatrixStore> {
        let chroms = vec![
            ("chr1".to_string(), 32_000_000u64),
            ("chr2".to_string(), 16_000_000),
        ];
        let mut store = DenseMatrixStore::new(chroms);
        store.add_resolution(10_000_000, 6);
        store.set(10_000_000, 2, 5, 7).unwrap();
        Dataset::open(store).unwrap()
    }

    #[test]
    fn test_details() {
        let ds = fixture();
        let details = ds.details();
        assert_eq!(details.resolutions, vec![10_000_000]);
        assert_eq!(
            details.chromosomes,
            vec![
                ("chr1".to_string(), 32_000_000),
                ("chr2".to_string(), 16_000_000)
            ]
        );
    }

    #[test]
    fn test_range_through_dataset() {
        let ds = fixture();
        let result = ds
            .get_range(&RangeQuery {
                chrom: "chr1".to_string(),
                start: 0,
                end: 32_000_000,
                resolution: 10_000_000,
                limit: None,
                filter: None,
            })
            .unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].value, 7);
    }

    #[test]
    fn test_value_through_dataset() {
        let ds = fixture();
        let point = ds.get_value(10_000_000, 2, 5).unwrap();
        assert_eq!(point.value, 7);
        assert_eq!(point.chr_b, "chr2");
    }
}

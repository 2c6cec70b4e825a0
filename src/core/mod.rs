//! Core bin-indexing and extraction functionality
//!
//! This module contains the genome definition, the whole-genome bin
//! index, the coordinate mapper, and the range/point extraction
//! algorithms over a pluggable matrix store.

mod bins;
mod dataset;
mod error;
mod extract;
mod genome;
mod lookup;
pub mod mapper;
mod store;

pub use bins::{BinTable, BinTableCache, ChromBins, DEFAULT_RESOLUTIONS};
pub use dataset::{Dataset, DatasetDetails};
pub use error::{
    AdjacencyError, IndexBuildError, IndexBuildResult, QueryError, QueryResult, Result,
    StoreError, StoreResult,
};
pub use extract::{
    get_range, InteractionRecord, RangeQuery, RangeResult, RegionFilter, RegionLimit,
    SliceDiagnostics,
};
pub use genome::{normalize_chrom_key, Chromosome, Genome};
pub use lookup::{get_value, PointValue};
pub use mapper::{bin_to_position, chromosome_at, interval_to_bins, to_bin};
pub use store::{DenseMatrixStore, MatrixBlock, MatrixStore};

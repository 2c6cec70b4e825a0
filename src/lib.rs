//! hic-adjacency - whole-genome bin indexing and range extraction
//!
//! Query engine for Hi-C style contact matrices: chromosome-by-chromosome
//! interaction counts persisted as one square matrix per resolution, with
//! all chromosomes concatenated in a fixed order on both axes.
//!
//! # Features
//!
//! - Per-resolution bin tables with cumulative whole-genome offsets
//! - Base-pair interval to bin-range translation, and the inverse lookup
//!   from a bin index back to its owning chromosome
//! - Sparse rectangular extraction with inter/intra-chromosome filtering
//! - Storage-agnostic: any backend implementing [`MatrixStore`] plugs in
//!
//! # Example
//!
//! ```ignore
//! use hic_adjacency::{Dataset, RangeQuery, formats};
//!
//! let store = formats::load_coo_store("hg19.size", "dataset.coo", &[10_000])?;
//! let dataset = Dataset::open(store)?;
//!
//! let result = dataset.get_range(&RangeQuery {
//!     chrom: "chr1".to_string(),
//!     start: 1_000_000,
//!     end: 2_000_000,
//!     resolution: 10_000,
//!     limit: None,
//!     filter: None,
//! })?;
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use core::{
    bin_to_position, chromosome_at, get_range, get_value, interval_to_bins, to_bin,
    AdjacencyError, BinTable, BinTableCache, Chromosome, ChromBins, Dataset, DatasetDetails,
    DenseMatrixStore, Genome, IndexBuildError, InteractionRecord, MatrixBlock, MatrixStore,
    PointValue, QueryError, RangeQuery, RangeResult, RegionFilter, RegionLimit,
    SliceDiagnostics, StoreError, DEFAULT_RESOLUTIONS,
};

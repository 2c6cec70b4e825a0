//! Error types for hic-adjacency
//!
//! Defines all error types used throughout the library.

use thiserror::Error;

/// Main error type for hic-adjacency operations
#[derive(Debug, Error)]
pub enum AdjacencyError {
    /// Bin index construction errors
    #[error("Index build error: {0}")]
    IndexBuild(#[from] IndexBuildError),

    /// Coordinate/bin query errors
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// Matrix store access errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while building a [`BinTable`](crate::core::BinTable)
///
/// These are configuration errors: fatal at index-build time, surfaced
/// immediately, never retried.
#[derive(Debug, Error)]
pub enum IndexBuildError {
    /// A bin resolution of zero base pairs
    #[error("Invalid resolution: {resolution} (must be a positive bin width in bp)")]
    InvalidResolution { resolution: u64 },

    /// A chromosome with zero length
    #[error("Invalid chromosome '{name}': length {length} must be positive")]
    InvalidChromosome { name: String, length: u64 },

    /// The same chromosome name listed twice
    #[error("Duplicate chromosome '{name}' in genome definition")]
    DuplicateChromosome { name: String },

    /// No chromosomes at all
    #[error("Genome definition contains no chromosomes")]
    EmptyGenome,

    /// No resolutions at all
    #[error("Resolution set is empty")]
    EmptyResolutionSet,
}

/// Errors that can occur while answering a coordinate or range query
#[derive(Debug, Error)]
pub enum QueryError {
    /// Chromosome not present in the bin table
    #[error("Unknown chromosome: {0}")]
    UnknownChromosome(String),

    /// Resolution not present in the bin table
    #[error("Unknown resolution: {0}")]
    UnknownResolution(u64),

    /// A whole-genome bin index outside [0, total_bins)
    #[error("Bin index {index} out of range (total bins at this resolution: {total})")]
    IndexOutOfRange { index: u64, total: u64 },

    /// A base-pair interval with start > end
    #[error("Invalid interval: start ({start}) > end ({end})")]
    InvalidRange { start: u64, end: u64 },
}

/// Errors surfaced by a [`MatrixStore`](crate::core::MatrixStore) implementation
///
/// The core never retries these; retry policy, if any, belongs to the
/// storage layer behind the trait.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store has no matrix for the requested resolution
    #[error("Resolution {0} not present in matrix store")]
    MissingResolution(u64),

    /// The store failed to return the requested slice or cell
    #[error("Matrix read failed: {0}")]
    ReadFailure(String),

    /// I/O error from the underlying storage
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for hic-adjacency operations
pub type Result<T> = std::result::Result<T, AdjacencyError>;

/// Result type alias for index construction
pub type IndexBuildResult<T> = std::result::Result<T, IndexBuildError>;

/// Result type alias for coordinate queries
pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Result type alias for store access
pub type StoreResult<T> = std::result::Result<T, StoreError>;

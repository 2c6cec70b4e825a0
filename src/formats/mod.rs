//! File format support
//!
//! Loaders for the inputs the core consumes: chromosome sizes files and
//! the plain-text sparse matrix interchange format, plus the optional
//! HDF5-backed store.

pub mod coo;
#[cfg(feature = "hdf5-store")]
pub mod hdf5;
pub mod sizes;

pub use coo::{load_coo_reader, load_coo_store, CooParseError};
#[cfg(feature = "hdf5-store")]
pub use hdf5::Hdf5MatrixStore;
pub use sizes::{detect_compression, parse_sizes_file, parse_sizes_reader, CompressionFormat, SizesParseError};

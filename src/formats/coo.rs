//! Plain-text sparse matrix loading
//!
//! Four tab- or space-separated columns per line:
//! `resolution  bin_i  bin_j  value`, with bin coordinates on the
//! whole-genome axis of that resolution. Lines starting with `#` and
//! blank lines are skipped. This is the interchange format the sample
//! adjacency generator emits; it feeds a [`DenseMatrixStore`] for the
//! CLI and tests.

use crate::core::{BinTable, DenseMatrixStore, Genome};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors from reading a sparse triple file
#[derive(Debug, Error)]
pub enum CooParseError {
    #[error("Matrix file not found: {0}")]
    FileNotFound(String),

    #[error("Line {line}: expected 'resolution bin_i bin_j value', got '{content}'")]
    InvalidLine { line: usize, content: String },

    #[error("Line {line}: invalid {field} '{value}': expected a non-negative integer")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: resolution {resolution} not in the dataset's resolution set")]
    UnknownResolution { line: usize, resolution: u64 },

    #[error("Line {line}: cell ({i}, {j}) outside the {total}x{total} matrix at resolution {resolution}")]
    CellOutOfRange {
        line: usize,
        resolution: u64,
        i: u64,
        j: u64,
        total: u64,
    },

    #[error("Sizes file error: {0}")]
    Sizes(#[from] super::sizes::SizesParseError),

    #[error("Index build error: {0}")]
    IndexBuild(#[from] crate::core::IndexBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a sizes file plus a triple file into an in-memory store
///
/// The matrix side length per resolution comes from the bin table built
/// over the sizes file, so every stored cell is validated against the
/// genome before it lands in the store.
pub fn load_coo_store<P: AsRef<Path>, Q: AsRef<Path>>(
    sizes_path: P,
    matrix_path: Q,
    resolutions: &[u64],
) -> Result<DenseMatrixStore, CooParseError> {
    let chromosomes = super::sizes::parse_sizes_file(sizes_path)?;

    let genome = Genome::new(chromosomes.clone())?;
    let table = BinTable::build(genome, resolutions)?;

    let mut store = DenseMatrixStore::new(chromosomes);
    for &resolution in table.resolutions() {
        let side = table
            .total_bins(resolution)
            .expect("resolution taken from the table itself");
        store.add_resolution(resolution, side);
    }

    let path = matrix_path.as_ref();
    let file =
        File::open(path).map_err(|_| CooParseError::FileNotFound(path.display().to_string()))?;
    load_coo_reader(BufReader::with_capacity(64 * 1024, file), &table, &mut store)?;
    Ok(store)
}

/// Read triples from any buffered reader into an existing store
pub fn load_coo_reader<R: BufRead>(
    reader: R,
    table: &BinTable,
    store: &mut DenseMatrixStore,
) -> Result<(), CooParseError> {
    let mut cells = 0usize;

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = line_number + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(CooParseError::InvalidLine {
                line: line_number,
                content: trimmed.chars().take(100).collect(),
            });
        }

        let resolution = parse_field(fields[0], "resolution", line_number)?;
        let i = parse_field(fields[1], "bin_i", line_number)?;
        let j = parse_field(fields[2], "bin_j", line_number)?;
        let value: u32 = fields[3]
            .parse()
            .map_err(|_| CooParseError::InvalidNumber {
                line: line_number,
                field: "value",
                value: fields[3].to_string(),
            })?;

        let total = table
            .total_bins(resolution)
            .map_err(|_| CooParseError::UnknownResolution {
                line: line_number,
                resolution,
            })?;
        if i >= total || j >= total {
            return Err(CooParseError::CellOutOfRange {
                line: line_number,
                resolution,
                i,
                j,
                total,
            });
        }

        store
            .set(resolution, i, j, value)
            .expect("cell validated against the bin table");
        cells += 1;
    }

    log::debug!("loaded {} matrix cells", cells);
    Ok(())
}

fn parse_field(
    value: &str,
    field: &'static str,
    line: usize,
) -> Result<u64, CooParseError> {
    value.parse().map_err(|_| CooParseError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

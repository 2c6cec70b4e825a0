//! Matrix store abstraction
//!
//! The persisted contact matrix is an external, chunked 2D array store
//! addressable by resolution. The core only needs rectangular-slice and
//! single-cell reads plus the chromosome table attached as metadata; that
//! contract is the [`MatrixStore`] trait. [`DenseMatrixStore`] is the
//! in-memory implementation backing the text loader and the tests.

use crate::core::error::{StoreError, StoreResult};
use std::collections::HashMap;
use std::ops::Range;

/// Read-only access to one dataset's contact matrices
///
/// One square matrix per resolution, whole-genome bins on both axes.
/// All ranges are half-open. Implementations may clamp out-of-range
/// slices to the matrix edge (numpy-style) but must reject missing
/// resolutions.
pub trait MatrixStore {
    /// Resolutions with a stored matrix, in no guaranteed order
    fn resolutions(&self) -> StoreResult<Vec<u64>>;

    /// Ordered (name, length) chromosome table attached to the dataset
    fn chromosomes(&self) -> StoreResult<Vec<(String, u64)>>;

    /// Read a rectangular slice `[rows, cols]` at one resolution
    fn read_slice(
        &self,
        resolution: u64,
        rows: Range<u64>,
        cols: Range<u64>,
    ) -> StoreResult<MatrixBlock>;

    /// Read a single cell at one resolution
    fn read_cell(&self, resolution: u64, i: u64, j: u64) -> StoreResult<u32>;
}

/// Dense rectangular block returned by a slice read
///
/// Row-major. Zero means "no recorded interaction", not a recorded value
/// of zero; [`MatrixBlock::iter_nonzero`] is the sparse view the
/// extractor consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixBlock {
    nrows: usize,
    ncols: usize,
    values: Vec<u32>,
}

impl MatrixBlock {
    /// Wrap a row-major value buffer
    ///
    /// `values.len()` must equal `nrows * ncols`.
    pub fn new(nrows: usize, ncols: usize, values: Vec<u32>) -> Self {
        assert_eq!(values.len(), nrows * ncols, "block shape mismatch");
        Self {
            nrows,
            ncols,
            values,
        }
    }

    /// An empty block (zero rows or columns)
    pub fn empty() -> Self {
        Self {
            nrows: 0,
            ncols: 0,
            values: Vec::new(),
        }
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Value at local block coordinates
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.values[i * self.ncols + j]
    }

    /// Iterate the strictly positive cells as (local_row, local_col, value)
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        let ncols = self.ncols;
        self.values
            .iter()
            .enumerate()
            .filter(|(_, &v)| v > 0)
            .map(move |(idx, &v)| (idx / ncols, idx % ncols, v))
    }

    /// Number of strictly positive cells
    pub fn nonzero_count(&self) -> usize {
        self.values.iter().filter(|&&v| v > 0).count()
    }
}

/// One whole-genome square matrix
#[derive(Debug, Clone)]
struct Grid {
    side: u64,
    values: Vec<u32>,
}

/// In-memory matrix store
///
/// Holds one dense square per resolution. Primarily for tests and for
/// the plain-text loader; real deployments sit behind the same trait
/// with a file-backed store.
#[derive(Debug, Clone)]
pub struct DenseMatrixStore {
    chromosomes: Vec<(String, u64)>,
    grids: HashMap<u64, Grid>,
}

impl DenseMatrixStore {
    /// Create a store for a chromosome table, with no matrices yet
    pub fn new(chromosomes: Vec<(String, u64)>) -> Self {
        Self {
            chromosomes,
            grids: HashMap::new(),
        }
    }

    /// Add an all-zero `side x side` matrix for a resolution
    pub fn add_resolution(&mut self, resolution: u64, side: u64) {
        let len = (side * side) as usize;
        self.grids.insert(
            resolution,
            Grid {
                side,
                values: vec![0; len],
            },
        );
    }

    /// Set one cell; the resolution must have been added first
    pub fn set(&mut self, resolution: u64, i: u64, j: u64, value: u32) -> StoreResult<()> {
        let grid = self
            .grids
            .get_mut(&resolution)
            .ok_or(StoreError::MissingResolution(resolution))?;
        if i >= grid.side || j >= grid.side {
            return Err(StoreError::ReadFailure(format!(
                "cell ({}, {}) outside {}x{} matrix",
                i, j, grid.side, grid.side
            )));
        }
        grid.values[(i * grid.side + j) as usize] = value;
        Ok(())
    }

    /// Side length of the matrix at a resolution
    pub fn side(&self, resolution: u64) -> StoreResult<u64> {
        self.grids
            .get(&resolution)
            .map(|g| g.side)
            .ok_or(StoreError::MissingResolution(resolution))
    }

    fn grid(&self, resolution: u64) -> StoreResult<&Grid> {
        self.grids
            .get(&resolution)
            .ok_or(StoreError::MissingResolution(resolution))
    }
}

impl MatrixStore for DenseMatrixStore {
    fn resolutions(&self) -> StoreResult<Vec<u64>> {
        let mut res: Vec<u64> = self.grids.keys().copied().collect();
        res.sort_unstable();
        Ok(res)
    }

    fn chromosomes(&self) -> StoreResult<Vec<(String, u64)>> {
        Ok(self.chromosomes.clone())
    }

    fn read_slice(
        &self,
        resolution: u64,
        rows: Range<u64>,
        cols: Range<u64>,
    ) -> StoreResult<MatrixBlock> {
        let grid = self.grid(resolution)?;
        // Clamp to the matrix edge, as array slicing in the storage
        // engines this stands in for does.
        let r0 = rows.start.min(grid.side);
        let r1 = rows.end.min(grid.side);
        let c0 = cols.start.min(grid.side);
        let c1 = cols.end.min(grid.side);
        if r0 >= r1 || c0 >= c1 {
            return Ok(MatrixBlock::empty());
        }

        let nrows = (r1 - r0) as usize;
        let ncols = (c1 - c0) as usize;
        let mut values = Vec::with_capacity(nrows * ncols);
        for i in r0..r1 {
            let row_base = (i * grid.side) as usize;
            values.extend_from_slice(&grid.values[row_base + c0 as usize..row_base + c1 as usize]);
        }
        Ok(MatrixBlock::new(nrows, ncols, values))
    }

    fn read_cell(&self, resolution: u64, i: u64, j: u64) -> StoreResult<u32> {
        let grid = self.grid(resolution)?;
        if i >= grid.side || j >= grid.side {
            return Err(StoreError::ReadFailure(format!(
                "cell ({}, {}) outside {}x{} matrix",
                i, j, grid.side, grid.side
            )));
        }
        Ok(grid.values[(i * grid.side + j) as usize])
    }
}

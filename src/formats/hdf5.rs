//! HDF5-backed matrix store
//!
//! Layout matching the original adjacency service files: one 2D dataset
//! per resolution at the file root, named by the resolution in base
//! pairs (`"1000"`, `"5000"`, ...). The chromosome table lives in a
//! sidecar sizes file, passed in at open time.
//!
//! Requires the `hdf5-store` feature and a system HDF5 library.

use crate::core::{StoreError, StoreResult};
use crate::core::{MatrixBlock, MatrixStore};
use ndarray::s;
use std::ops::Range;
use std::path::Path;

fn h5err(e: hdf5::Error) -> StoreError {
    StoreError::ReadFailure(format!("HDF5 error: {e}"))
}

/// Read-only HDF5 contact matrix file
pub struct Hdf5MatrixStore {
    file: hdf5::File,
    chromosomes: Vec<(String, u64)>,
}

impl Hdf5MatrixStore {
    /// Open an HDF5 matrix file with its chromosome table
    pub fn open<P: AsRef<Path>>(
        path: P,
        chromosomes: Vec<(String, u64)>,
    ) -> StoreResult<Self> {
        let file = hdf5::File::open(path.as_ref()).map_err(h5err)?;
        Ok(Self { file, chromosomes })
    }

    fn dataset(&self, resolution: u64) -> StoreResult<hdf5::Dataset> {
        self.file
            .dataset(&resolution.to_string())
            .map_err(|_| StoreError::MissingResolution(resolution))
    }
}

impl MatrixStore for Hdf5MatrixStore {
    fn resolutions(&self) -> StoreResult<Vec<u64>> {
        let names = self.file.member_names().map_err(h5err)?;
        let mut resolutions: Vec<u64> = names
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect();
        resolutions.sort_unstable();
        Ok(resolutions)
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
        let ds = self.dataset(resolution)?;
        let shape = ds.shape();
        if shape.len() != 2 {
            return Err(StoreError::ReadFailure(format!(
                "dataset '{}' is not 2-dimensional",
                resolution
            )));
        }
        let (side_r, side_c) = (shape[0] as u64, shape[1] as u64);
        let r0 = rows.start.min(side_r) as usize;
        let r1 = rows.end.min(side_r) as usize;
        let c0 = cols.start.min(side_c) as usize;
        let c1 = cols.end.min(side_c) as usize;
        if r0 >= r1 || c0 >= c1 {
            return Ok(MatrixBlock::empty());
        }

        let block = ds
            .read_slice_2d::<u32, _>(s![r0..r1, c0..c1])
            .map_err(h5err)?;
        let (nrows, ncols) = block.dim();
        let values = block.iter().copied().collect();
        Ok(MatrixBlock::new(nrows, ncols, values))
    }

    fn read_cell(&self, resolution: u64, i: u64, j: u64) -> StoreResult<u32> {
        let block = self.read_slice(resolution, i..i + 1, j..j + 1)?;
        if block.shape() != (1, 1) {
            return Err(StoreError::ReadFailure(format!(
                "cell ({}, {}) outside matrix at resolution {}",
                i, j, resolution
            )));
        }
        Ok(block.get(0, 0))
    }
}

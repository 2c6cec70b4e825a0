//! Genome definition: an ordered chromosome list
//!
//! The chromosome order is fixed for the lifetime of a dataset open;
//! every whole-genome bin offset is computed relative to this order.

use crate::core::error::{IndexBuildError, IndexBuildResult};
use std::collections::HashMap;

/// A single chromosome: stable name plus length in base pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    pub name: String,
    /// Length in base pairs (always positive)
    pub length: u64,
}

/// Ordered, read-only chromosome list for one genome assembly
///
/// Lookup accepts common naming variants (chr1, 1, CHR1) so callers
/// are not forced to match the sizes file's style exactly.
#[derive(Debug, Clone)]
pub struct Genome {
    chromosomes: Vec<Chromosome>,
    /// Exact name -> position in `chromosomes`
    by_name: HashMap<String, usize>,
    /// Normalized name (lowercase, no "chr" prefix) -> position
    aliases: HashMap<String, usize>,
}

impl Genome {
    /// Build a genome from an ordered (name, length) list
    ///
    /// Fails on zero-length chromosomes, duplicate names, or an empty list.
    pub fn new<I, S>(chromosomes: I) -> IndexBuildResult<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut chroms = Vec::new();
        let mut by_name = HashMap::new();
        let mut aliases = HashMap::new();

        for (name, length) in chromosomes {
            let name = name.into();
            if length == 0 {
                return Err(IndexBuildError::InvalidChromosome { name, length });
            }
            if by_name.contains_key(&name) {
                return Err(IndexBuildError::DuplicateChromosome { name });
            }
            let pos = chroms.len();
            by_name.insert(name.clone(), pos);
            aliases.insert(normalize_chrom_key(&name), pos);
            chroms.push(Chromosome { name, length });
        }

        if chroms.is_empty() {
            return Err(IndexBuildError::EmptyGenome);
        }

        Ok(Self {
            chromosomes: chroms,
            by_name,
            aliases,
        })
    }

    /// Number of chromosomes
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Check if the genome has no chromosomes (never true for a built Genome)
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Chromosomes in their fixed order
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Position of a chromosome in the fixed order, trying naming variants
    pub fn position_of(&self, name: &str) -> Option<usize> {
        if let Some(&pos) = self.by_name.get(name) {
            return Some(pos);
        }
        self.aliases.get(&normalize_chrom_key(name)).copied()
    }

    /// Look up a chromosome by name, trying naming variants
    pub fn get(&self, name: &str) -> Option<&Chromosome> {
        self.position_of(name).map(|pos| &self.chromosomes[pos])
    }

    /// Chromosome at a fixed-order position
    pub fn at(&self, pos: usize) -> Option<&Chromosome> {
        self.chromosomes.get(pos)
    }

    /// Check if a chromosome exists (accepts naming variants)
    pub fn has_chrom(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// Total genome length in base pairs
    pub fn total_length(&self) -> u64 {
        self.chromosomes.iter().map(|c| c.length).sum()
    }
}

/// Normalize chromosome name for flexible matching
///
/// Converts to lowercase and removes the "chr" prefix.
pub fn normalize_chrom_key(chrom: &str) -> String {
    let lower = chrom.to_lowercase();
    if let Some(stripped) = lower.strip_prefix("chr") {
        stripped.to_string()
    } else {
        lower
    }
}

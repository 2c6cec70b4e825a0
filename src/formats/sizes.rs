//! Chromosome sizes file parsing
//!
//! Two tab- or space-separated columns: chromosome name and length in
//! base pairs, one chromosome per line, in genome order. Lines starting
//! with `#` and blank lines are skipped. Gzip and bzip2 inputs are
//! detected by extension or magic bytes.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Errors from reading a chromosome sizes file
#[derive(Debug, Error)]
pub enum SizesParseError {
    #[error("Sizes file not found: {0}")]
    FileNotFound(String),

    #[error("Line {line}: expected 'name<TAB>length', got '{content}'")]
    InvalidLine { line: usize, content: String },

    #[error("Line {line}: invalid length '{value}': expected a positive integer")]
    InvalidLength { line: usize, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Compression format of a sizes file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip compressed (.gz)
    Gzip,
    /// Bzip2 compressed (.bz2)
    Bzip2,
}

/// Detect compression by extension, falling back to magic bytes
pub fn detect_compression(path: &Path) -> Result<CompressionFormat, SizesParseError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    if extension == "gz" {
        return Ok(CompressionFormat::Gzip);
    }
    if extension == "bz2" {
        return Ok(CompressionFormat::Bzip2);
    }

    let mut file = File::open(path)
        .map_err(|_| SizesParseError::FileNotFound(path.display().to_string()))?;
    let mut magic = [0u8; 3];
    let bytes_read = file.read(&mut magic)?;

    if bytes_read >= 2 && magic[0] == 0x1f && magic[1] == 0x8b {
        return Ok(CompressionFormat::Gzip);
    }
    // BZ2 magic: "BZh"
    if bytes_read >= 3 && magic[0] == 0x42 && magic[1] == 0x5a && magic[2] == 0x68 {
        return Ok(CompressionFormat::Bzip2);
    }

    Ok(CompressionFormat::Plain)
}

/// Parse a chromosome sizes file into an ordered (name, length) list
pub fn parse_sizes_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<(String, u64)>, SizesParseError> {
    let path = path.as_ref();
    let format = detect_compression(path)?;
    let file = File::open(path)
        .map_err(|_| SizesParseError::FileNotFound(path.display().to_string()))?;

    match format {
        CompressionFormat::Gzip => {
            let decoder = flate2::read::GzDecoder::new(file);
            parse_sizes_reader(BufReader::with_capacity(64 * 1024, decoder))
        }
        CompressionFormat::Bzip2 => {
            let decoder = bzip2::read::BzDecoder::new(file);
            parse_sizes_reader(BufReader::with_capacity(64 * 1024, decoder))
        }
        CompressionFormat::Plain => {
            parse_sizes_reader(BufReader::with_capacity(64 * 1024, file))
        }
    }
}

/// Parse chromosome sizes from any buffered reader
pub fn parse_sizes_reader<R: BufRead>(
    reader: R,
) -> Result<Vec<(String, u64)>, SizesParseError> {
    let mut chromosomes = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = line_number + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let name = fields.next().ok_or_else(|| SizesParseError::InvalidLine {
            line: line_number,
            content: trimmed.chars().take(100).collect(),
        })?;
        let length_str = fields.next().ok_or_else(|| SizesParseError::InvalidLine {
            line: line_number,
            content: trimmed.chars().take(100).collect(),
        })?;

        let length: u64 = length_str
            .parse()
            .map_err(|_| SizesParseError::InvalidLength {
                line: line_number,
                value: length_str.to_string(),
            })?;

        chromosomes.push((name.to_string(), length));
    }

    log::debug!("parsed {} chromosomes from sizes input", chromosomes.len());
    Ok(chromosomes)
}

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};
use memmap2::Mmap;

use super::header::IdxHeader;
use crate::config::DecoderConfig;
use crate::error::{DecodeError, Result};
use crate::sample::ImageSample;

/// Upper bound on output slots reserved before the payload is read, so a
/// header with a huge sample count cannot force a huge allocation.
///
/// The per-sample scratch block is not capped here; its size is bounded by
/// the caller's `DecoderConfig::side_length`, which the header must match.
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 16;

/// Decode a complete IDX image file from a sequential reader.
///
/// Reads and validates the header, then reads `sample_count` blocks of
/// `rows * columns` bytes into samples, in file order. Any failure aborts
/// the decode; no partial sample list is ever returned. Bytes following
/// the declared payload are not read.
pub fn decode(source: &mut impl Read, config: &DecoderConfig) -> Result<Vec<ImageSample>> {
    let header = IdxHeader::parse(source, config)?;
    debug!(
        "IDX header: {} samples of {}x{} (expecting at least {} bytes)",
        header.sample_count,
        header.row_count,
        header.column_count,
        header.file_len()
    );

    let count = header.sample_count as usize;
    let mut samples = Vec::with_capacity(count.min(MAX_PREALLOCATED_SAMPLES));

    // One scratch block, reused for every sample.
    let mut block = vec![0u8; header.sample_len()];
    for sample_index in 0..count {
        source.read_exact(&mut block).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => DecodeError::TruncatedPayload { sample_index },
            _ => DecodeError::Io(e),
        })?;
        samples.push(ImageSample::from_bytes(config.side_length, &block));
    }

    Ok(samples)
}

/// Decode a complete IDX image file held in memory.
pub fn decode_bytes(bytes: &[u8], config: &DecoderConfig) -> Result<Vec<ImageSample>> {
    let mut cursor = bytes;
    decode(&mut cursor, config)
}

/// Open, memory-map, and decode an IDX image file from disk.
///
/// A missing file is reported as `SourceNotFound`; other open or map
/// failures surface as `Io`.
pub fn decode_path(path: &Path, config: &DecoderConfig) -> Result<Vec<ImageSample>> {
    let file = open_source(path)?;

    // The map is read-only and dropped before returning.
    let mmap = unsafe { Mmap::map(&file)? };
    let samples = decode_bytes(&mmap, config)?;

    info!(
        "decoded {} samples of {}x{} from {}",
        samples.len(),
        config.side_length,
        config.side_length,
        path.display()
    );
    Ok(samples)
}

fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DecodeError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => DecodeError::Io(e),
    })
}

/// Reads the images of one IDX file at a configured path.
///
/// The file must already be decompressed; MNIST distributes the image sets
/// gzipped.
#[derive(Debug, Clone)]
pub struct IdxImageReader {
    path: PathBuf,
    config: DecoderConfig,
}

impl IdxImageReader {
    /// Create a reader for `path` expecting 28x28 samples.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        IdxImageReader {
            path: path.into(),
            config: DecoderConfig::default(),
        }
    }

    /// Replace the decoder configuration. Returns self for builder-style usage.
    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Parse and validate only the header, without touching the payload.
    pub fn read_header(&self) -> Result<IdxHeader> {
        let file = open_source(&self.path)?;
        let mut reader = BufReader::new(file);
        IdxHeader::parse(&mut reader, &self.config)
    }

    /// Decode every image in the file.
    pub fn read_images(&self) -> Result<Vec<ImageSample>> {
        decode_path(&self.path, &self.config)
    }
}

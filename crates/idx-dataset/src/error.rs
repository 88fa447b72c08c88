use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IDX file {path:?} not found")]
    SourceNotFound { path: PathBuf },
    #[error("invalid side length {side_length}: samples must be at least 1x1")]
    InvalidSideLength { side_length: usize },
    #[error("IDX header truncated while reading {field}")]
    TruncatedHeader { field: &'static str },
    #[error("unexpected IDX magic number: expected {expected}, got {found}")]
    UnexpectedMagicNumber { found: u32, expected: u32 },
    #[error("unexpected IDX {field} count: expected {expected}, got {found}")]
    UnexpectedDimension {
        field: &'static str,
        found: u32,
        expected: u32,
    },
    #[error("IDX payload truncated at sample {sample_index}")]
    TruncatedPayload { sample_index: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;

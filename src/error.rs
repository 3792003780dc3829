use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::ImageFormat;

/// Structural failures inside a format whose signature already matched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of data at offset {offset}: needed {needed} bytes, {available} left")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("seek by {delta} from offset {offset} leaves the buffer (length {len})")]
    SeekOutOfBounds { offset: usize, delta: i64, len: usize },

    #[error("segment 0xFF{marker:02X} declares length {length}, shorter than its own length field")]
    ShortSegment { marker: u8, length: u16 },

    #[error("IHDR chunk length is {0}, expected 13")]
    BadIhdrLength(u32),

    #[error("{format} header declares a zero dimension ({width}x{height})")]
    ZeroDimension {
        format: ImageFormat,
        width: u32,
        height: u32,
    },
}

/// Why `classify` could not produce a [`MetadataValue`](crate::MetadataValue).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("Not a valid image: {label}")]
    Unrecognized { label: String },

    #[error("Corrupt {format} image {label}: {reason}")]
    Corrupt {
        label: String,
        format: ImageFormat,
        reason: ParseError,
    },
}

impl ClassificationError {
    pub fn source_label(&self) -> &str {
        match self {
            ClassificationError::Unrecognized { label } => label,
            ClassificationError::Corrupt { label, .. } => label,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, ClassificationError::Corrupt { .. })
    }
}

/// Errors raised while collecting and probing files on disk.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Failed to read {}: {}", .path.display(), .error)]
    Io {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error("Invalid files:\n{}", list_paths(.0))]
    InvalidFiles(Vec<PathBuf>),

    #[error("Invalid dirs:\n{}", list_paths(.0))]
    InvalidDirs(Vec<PathBuf>),

    #[error("No files or dirs specified")]
    NoInputs,

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, ParseError>;

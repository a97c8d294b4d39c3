//! Store error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Store errors. Every variant is fatal to the operation that raised it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing directory or file could not be created.
    #[error("failed to initialize storage at {path}: {source}")]
    Initialization {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing content could not be read.
    #[error("failed to read graph from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing content could not be written.
    #[error("failed to write graph to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record could not be encoded.
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    /// An edge weight has no JSON representation and would not load back.
    #[error("failed to encode record: edge {edge} has non-finite weight {weight}")]
    NonFiniteWeight { edge: String, weight: f64 },
}

impl StoreError {
    pub fn initialization(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Initialization {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

use std::path::PathBuf;

use thiserror::Error;

pub mod codec;
pub mod store;

/// Everything that can go wrong in the document store.
///
/// `AlreadyExists` and `NotFound` are expected outcomes the caller can
/// report and move on from. `MalformedDocument` and `Io` indicate an
/// environment problem that needs user intervention.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("A log named '{0}' already exists")]
    AlreadyExists(String),

    #[error("No log named '{0}' exists")]
    NotFound(String),

    #[error("Malformed document at '{path}': {source}")]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode document as JSON: {source}")]
    EncodeFailed {
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O failure at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

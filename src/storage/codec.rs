//! JSON codec for documents and the master index.
//!
//! Keys are stable camelCase names matching the model fields. Decoding a
//! document missing a structural field (name, id, date fields) fails with
//! `MalformedDocument`; absent collection arrays decode as empty.

use std::path::Path;

use serde_json::to_string_pretty;

use crate::{
    models::{document::LogDocument, index::DocumentIndex},
    storage::StorageError,
};

pub fn encode_document(document: &LogDocument) -> Result<String, StorageError> {
    to_string_pretty(document).map_err(|e| StorageError::EncodeFailed { source: e })
}

pub fn decode_document(text: &str, path: &Path) -> Result<LogDocument, StorageError> {
    serde_json::from_str(text).map_err(|e| StorageError::MalformedDocument {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn encode_index(index: &DocumentIndex) -> Result<String, StorageError> {
    to_string_pretty(index).map_err(|e| StorageError::EncodeFailed { source: e })
}

pub fn decode_index(text: &str, path: &Path) -> Result<DocumentIndex, StorageError> {
    serde_json::from_str(text).map_err(|e| StorageError::MalformedDocument {
        path: path.to_path_buf(),
        source: e,
    })
}

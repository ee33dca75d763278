use std::{fs, path::PathBuf};

use crate::{
    models::{document::LogDocument, index::DocumentIndex},
    storage::{StorageError, codec},
};

/// File-backed store of named log documents rooted at one directory.
///
/// Each document lives at `<dir>/<name>.json`; the index file lists which
/// names exist. Membership checks go through the in-memory index loaded at
/// construction, never a filesystem scan. Writes are blocking whole-file
/// rewrites with no locking; the store targets a single interactive user.
pub struct DocumentStore {
    dir: PathBuf,
    index_name: String,
    index: DocumentIndex,
}

impl DocumentStore {
    /// Loads the index from `<dir>/<index_name>`. A missing index file
    /// starts the store empty; an unreadable or malformed one is an error.
    pub fn open(dir: PathBuf, index_name: &str) -> Result<Self, StorageError> {
        let index_path = dir.join(index_name);
        let index = match fs::read_to_string(&index_path) {
            Ok(content) => codec::decode_index(&content, &index_path)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => DocumentIndex::default(),
            Err(e) => {
                return Err(StorageError::Io {
                    path: index_path,
                    source: e,
                });
            }
        };
        Ok(Self {
            dir,
            index_name: index_name.to_string(),
            index,
        })
    }

    /// True iff `name` is present in the index.
    pub fn exists(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn known_names(&self) -> &[String] {
        &self.index.known_document_names
    }

    /// Writes a fresh empty document and records it in the index.
    ///
    /// The document file is not rolled back if the index write fails, so a
    /// file can be left on disk that the index does not know about. The
    /// index stays the source of truth for `exists`.
    pub fn create(&mut self, name: &str) -> Result<(), StorageError> {
        if self.exists(name) {
            return Err(StorageError::AlreadyExists(name.to_string()));
        }
        let path = self.document_path(name);
        let json = codec::encode_document(&LogDocument::named(name))?;
        fs::write(&path, json).map_err(|e| StorageError::Io { path, source: e })?;

        self.index.add(name);
        self.persist_index()
    }

    /// Reads and decodes a document. An unknown name returns the default
    /// (all-empty) sentinel document rather than an error; a document that
    /// fails to decode propagates as `MalformedDocument`.
    pub fn open_document(&self, name: &str) -> Result<LogDocument, StorageError> {
        if !self.exists(name) {
            return Ok(LogDocument::default());
        }
        let path = self.document_path(name);
        let content = fs::read_to_string(&path).map_err(|e| StorageError::Io {
            path: path.clone(),
            source: e,
        })?;
        codec::decode_document(&content, &path)
    }

    /// Overwrites the document file in place. No atomic replace: a crash
    /// mid-write can leave a truncated file.
    pub fn update(&self, name: &str, document: &LogDocument) -> Result<(), StorageError> {
        if !self.exists(name) {
            return Err(StorageError::NotFound(name.to_string()));
        }
        let path = self.document_path(name);
        let json = codec::encode_document(document)?;
        fs::write(&path, json).map_err(|e| StorageError::Io { path, source: e })
    }

    /// Removes the document file and drops the name from the index.
    pub fn delete(&mut self, name: &str) -> Result<(), StorageError> {
        if !self.exists(name) {
            return Err(StorageError::NotFound(name.to_string()));
        }
        let path = self.document_path(name);
        fs::remove_file(&path).map_err(|e| StorageError::Io { path, source: e })?;

        self.index.remove(name);
        self.persist_index()
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    fn index_path(&self) -> PathBuf {
        self.dir.join(&self.index_name)
    }

    fn persist_index(&self) -> Result<(), StorageError> {
        let path = self.index_path();
        let json = codec::encode_index(&self.index)?;
        fs::write(&path, json).map_err(|e| StorageError::Io { path, source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    const INDEX: &str = "config.json";

    fn fresh_store(dir: &Path) -> DocumentStore {
        DocumentStore::open(dir.to_path_buf(), INDEX).unwrap()
    }

    fn document_file(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{name}.json"))
    }

    #[test]
    fn test_create_then_exists_and_open() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(dir.path());

        assert!(!store.exists("work"));
        store.create("work").unwrap();
        assert!(store.exists("work"));

        let document = store.open_document("work").unwrap();
        assert_eq!(document.name, "work");
        assert!(document.calendar_events.is_empty());
        assert!(document.todos.is_empty());
        assert!(document.milestones.is_empty());
        assert!(document.diary_entries.is_empty());
    }

    #[test]
    fn test_double_create_is_already_exists() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(dir.path());

        store.create("work").unwrap();
        match store.create("work") {
            Err(StorageError::AlreadyExists(name)) => assert_eq!(name, "work"),
            _ => panic!("Expected AlreadyExists on second create"),
        }
    }

    #[test]
    fn test_open_unknown_name_returns_sentinel() {
        let dir = TempDir::new().unwrap();
        let store = fresh_store(dir.path());

        let document = store.open_document("nope").unwrap();
        assert_eq!(document, LogDocument::default());
    }

    #[test]
    fn test_update_round_trips_changes() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(dir.path());
        store.create("work").unwrap();

        let mut document = store.open_document("work").unwrap();
        document.diary_entries.push(crate::models::diary::DiaryEntry {
            id: 1,
            date: crate::models::date::Date {
                day: 1,
                month: 1,
                year: 2024,
                ..Default::default()
            },
            name: String::from("First entry"),
            body: String::from("Hello"),
        });
        store.update("work", &document).unwrap();

        let reloaded = store.open_document("work").unwrap();
        assert_eq!(reloaded, document);
    }

    #[test]
    fn test_update_unknown_name_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = fresh_store(dir.path());

        let document = LogDocument::named("ghost");
        match store.update("ghost", &document) {
            Err(StorageError::NotFound(name)) => assert_eq!(name, "ghost"),
            _ => panic!("Expected NotFound on update of unknown name"),
        }
    }

    #[test]
    fn test_delete_unknown_name_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(dir.path());

        match store.delete("never-created") {
            Err(StorageError::NotFound(_)) => {}
            _ => panic!("Expected NotFound on delete of unknown name"),
        }
    }

    #[test]
    fn test_delete_removes_file_and_index_entry() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(dir.path());
        store.create("work").unwrap();
        let file = document_file(dir.path(), "work");
        assert!(file.exists());

        store.delete("work").unwrap();
        assert!(!store.exists("work"));
        assert!(!file.exists());
        assert_eq!(store.open_document("work").unwrap(), LogDocument::default());
    }

    #[test]
    fn test_index_survives_store_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = fresh_store(dir.path());
            store.create("work").unwrap();
            store.create("personal").unwrap();
            store.delete("personal").unwrap();
        }

        let reopened = fresh_store(dir.path());
        assert!(reopened.exists("work"));
        assert!(!reopened.exists("personal"));
        assert_eq!(reopened.known_names(), ["work"]);
    }

    #[test]
    fn test_malformed_document_propagates() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(dir.path());
        store.create("work").unwrap();

        fs::write(document_file(dir.path(), "work"), "{ not json }").unwrap();
        match store.open_document("work") {
            Err(StorageError::MalformedDocument { .. }) => {}
            _ => panic!("Expected MalformedDocument for corrupt file"),
        }
    }

    // Known consistency gap: create writes the document file before the
    // index, and does not roll it back when the index write fails. The
    // stray file stays on disk and the name stays unknown.
    #[test]
    fn test_failed_index_write_leaves_document_file_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(dir.path());
        // A directory squatting on the index path makes every index write
        // fail while document writes still succeed.
        fs::create_dir(dir.path().join(INDEX)).unwrap();
        let result = store.create("orphan");
        assert!(matches!(result, Err(StorageError::Io { .. })));
        assert!(document_file(dir.path(), "orphan").exists());

        let reopened = DocumentStore::open(dir.path().to_path_buf(), INDEX);
        assert!(matches!(reopened, Err(StorageError::Io { .. })));
    }
}

use crate::{
    models::document::LogDocument,
    storage::{StorageError, store::DocumentStore},
};

/// In-memory editing session for one opened document.
///
/// Holds the mutable working copy plus the last-saved baseline, so a batch
/// of edits can be discarded without re-reading disk. Saving writes the
/// working copy and advances the baseline.
pub struct Session {
    name: String,
    working: LogDocument,
    baseline: LogDocument,
}

impl Session {
    pub fn new(name: impl Into<String>, document: LogDocument) -> Self {
        Self {
            name: name.into(),
            baseline: document.clone(),
            working: document,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document(&self) -> &LogDocument {
        &self.working
    }

    pub fn document_mut(&mut self) -> &mut LogDocument {
        &mut self.working
    }

    pub fn is_dirty(&self) -> bool {
        self.working != self.baseline
    }

    /// Rolls the working copy back to the last-saved state.
    pub fn discard(&mut self) {
        self.working = self.baseline.clone();
    }

    /// Writes the working copy to disk and makes it the new baseline.
    pub fn save(&mut self, store: &DocumentStore) -> Result<(), StorageError> {
        store.update(&self.name, &self.working)?;
        self.baseline = self.working.clone();
        Ok(())
    }
}

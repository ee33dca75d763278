use serde::{Deserialize, Serialize};

/// The master index: which named log documents exist in the store
/// directory. Rewritten in full on every create and delete.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentIndex {
    pub known_document_names: Vec<String>,
}

impl DocumentIndex {
    pub fn contains(&self, name: &str) -> bool {
        self.known_document_names.iter().any(|known| known == name)
    }

    pub fn add(&mut self, name: &str) {
        if !self.contains(name) {
            self.known_document_names.push(name.to_string());
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.known_document_names.retain(|known| known != name);
    }
}

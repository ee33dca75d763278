use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::models::index::DocumentIndex;

/// Name of the master index file inside the config directory.
pub const INDEX_FILE_NAME: &str = "config.json";

/// Platform config directory for daylog (e.g. `~/.config/daylog`).
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daylog")
}

/// Ensures the config directory and index file exist, creating both on the
/// first run. Permission errors bubble up for the caller to report; no
/// privilege escalation is attempted.
pub fn prepare_config_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let index_path = dir.join(INDEX_FILE_NAME);
    if !index_path.exists() {
        let empty = serde_json::to_string_pretty(&DocumentIndex::default())
            .expect("empty index serializes");
        fs::write(&index_path, empty)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_seeds_empty_index_once() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("daylog");

        prepare_config_dir(&dir).unwrap();
        let index_path = dir.join(INDEX_FILE_NAME);
        let seeded = fs::read_to_string(&index_path).unwrap();
        assert!(seeded.contains("knownDocumentNames"));

        // A second run leaves an existing index alone.
        fs::write(&index_path, r#"{ "knownDocumentNames": ["work"] }"#).unwrap();
        prepare_config_dir(&dir).unwrap();
        let kept = fs::read_to_string(&index_path).unwrap();
        assert!(kept.contains("work"));
    }
}

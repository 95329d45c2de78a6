//! Document store module
//!
//! Loads and persists the pain-points document to a JSON file. The file is
//! the single source of truth: every request re-reads it, and writes fully
//! replace it. There is no in-memory cache, so the server is restartable
//! without state loss.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use tokio::fs;

/// The persisted document: two ordered lists of free-text lines.
///
/// Neither list ever contains an empty string; blank lines are filtered
/// out when a write payload is split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sustainability: Vec<String>,
    pub integrations: Vec<String>,
}

/// File-backed store for the [`Document`].
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the backing file and parse it.
    ///
    /// Any failure (file absent, unreadable, malformed JSON) yields the
    /// default empty document instead of an error, so the read view stays
    /// available even with a missing or corrupt data file.
    pub async fn load(&self) -> Document {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(doc) => doc,
                Err(e) => {
                    crate::logger::log_warning(&format!(
                        "Malformed data file '{}', using empty document: {e}",
                        self.path.display()
                    ));
                    Document::default()
                }
            },
            Err(_) => Document::default(),
        }
    }

    /// Serialize the document as pretty-printed JSON and overwrite the
    /// backing file.
    ///
    /// Writes go to a temp file in the same directory which is then
    /// renamed over the target, so a crash mid-write cannot leave a
    /// truncated file behind.
    pub async fn save(&self, doc: &Document) -> io::Result<()> {
        let content = serde_json::to_string_pretty(doc)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

/// Split a raw write payload into document lines.
///
/// Splits on CRLF or LF, drops every empty segment, and preserves the
/// remaining order.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document {
            sustainability: vec!["Slow builds".to_string(), "Flaky CI".to_string()],
            integrations: vec!["Stripe API".to_string()],
        }
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("pain_points.json"));

        let doc = sample_document();
        store.save(&doc).await.unwrap();
        assert_eq!(store.load().await, doc);
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("nonexistent.json"));

        assert_eq!(store.load().await, Document::default());
    }

    #[tokio::test]
    async fn test_load_malformed_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pain_points.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = DocumentStore::new(path);
        assert_eq!(store.load().await, Document::default());
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("data").join("pain_points.json"));

        store.save(&sample_document()).await.unwrap();
        assert_eq!(store.load().await, sample_document());
    }

    #[tokio::test]
    async fn test_save_overwrites_fully() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("pain_points.json"));

        store.save(&sample_document()).await.unwrap();
        let replacement = Document {
            sustainability: vec!["New item".to_string()],
            integrations: vec![],
        };
        store.save(&replacement).await.unwrap();
        assert_eq!(store.load().await, replacement);
    }

    #[tokio::test]
    async fn test_save_writes_pretty_json_with_stable_field_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pain_points.json");
        let store = DocumentStore::new(&path);

        store.save(&sample_document()).await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let sustainability_pos = content.find("\"sustainability\"").unwrap();
        let integrations_pos = content.find("\"integrations\"").unwrap();
        assert!(sustainability_pos < integrations_pos);
        assert!(content.contains('\n'), "expected pretty-printed output");
    }

    #[test]
    fn test_split_lines_mixed_endings_and_blanks() {
        assert_eq!(split_lines("a\r\nb\n\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\r\n\n\r\n").is_empty());
    }

    #[test]
    fn test_split_lines_preserves_order() {
        assert_eq!(split_lines("first\nsecond\nthird"), vec!["first", "second", "third"]);
    }
}

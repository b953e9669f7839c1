// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History store implementation
//!
//! Stores entries as a pretty-printed JSON array. Non-ASCII text is written
//! literally. Reads never fail: a missing, empty or malformed document is an
//! empty history. Writes never fail either; errors are logged and dropped.
//!
//! Stored entries are kept as raw JSON values. Entries written by older
//! versions or by hand are served and carried forward unchanged, whatever
//! their shape.

use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::brief::Brief;
use crate::error::Result;

/// One generated piece of content together with the brief that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The brief as submitted
    pub inputs: Brief,
    /// Generated text, verbatim
    pub output: String,
    /// ISO-8601 local time with UTC offset
    pub timestamp: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the current local time
    pub fn new(inputs: Brief, output: impl Into<String>) -> Self {
        Self {
            inputs,
            output: output.into(),
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        }
    }
}

/// History store backed by a single JSON document
pub struct HistoryStore {
    /// Path to the history document
    path: PathBuf,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl HistoryStore {
    /// Create a store for the document at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the history document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries, newest first.
    ///
    /// Any JSON array is accepted as is. Only unreadable or non-array
    /// documents count as empty.
    pub fn load(&self) -> Vec<Value> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read history");
                return Vec::new();
            }
        };

        if content.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "History document is not an array, treating as empty"
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "History document is malformed, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the document with `entries`
    pub fn save(&self, entries: &[Value]) {
        if let Err(e) = self.write(entries) {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "Failed to save history"
            );
        }
    }

    /// Insert `entry` at the front of the history and persist it.
    ///
    /// Concurrent callers on the same store are serialized, so no update is lost.
    pub async fn prepend(&self, entry: &HistoryEntry) {
        let value = match serde_json::to_value(entry) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode history entry");
                return;
            }
        };

        let _guard = self.write_lock.lock().await;
        let mut entries = self.load();
        entries.insert(0, value);
        self.save(&entries);
        tracing::debug!(entries = entries.len(), "History updated");
    }

    fn write(&self, entries: &[Value]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut content = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
        entries.serialize(&mut serializer)?;

        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn brief(produk: &str) -> Brief {
        Brief::from_json(json!({ "produk": produk })).unwrap()
    }

    fn entry(produk: &str, output: &str) -> Value {
        serde_json::to_value(HistoryEntry::new(brief(produk), output)).unwrap()
    }

    fn create_test_store(temp_dir: &TempDir) -> HistoryStore {
        HistoryStore::new(temp_dir.path().join("history_db.json"))
    }

    #[test]
    fn test_entry_timestamp_is_rfc3339_with_offset() {
        let entry = HistoryEntry::new(brief("sepatu"), "output");
        let parsed = chrono::DateTime::parse_from_rfc3339(&entry.timestamp);
        assert!(parsed.is_ok(), "bad timestamp: {}", entry.timestamp);
    }

    #[test]
    fn test_entry_serializes_inputs_verbatim() {
        let inputs = Brief::from_json(json!({"tujuan": null, "usp": 42})).unwrap();
        let value = serde_json::to_value(HistoryEntry::new(inputs, "x")).unwrap();
        assert_eq!(value["inputs"], json!({"tujuan": null, "usp": 42}));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        std::fs::write(store.path(), "").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        std::fs::write(store.path(), "[{\"inputs\": ").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_non_array_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        std::fs::write(store.path(), r#"{"inputs": {}}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_keeps_entries_of_any_shape() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let document = json!([
            {"inputs": {"produk": "kopi", "usp": 42}, "output": "old", "timestamp": "2024-05-01T10:00:00.123456"},
            {"inputs": {}, "output": "older"}
        ]);
        std::fs::write(store.path(), document.to_string()).unwrap();

        assert_eq!(Value::Array(store.load()), document);
    }

    #[tokio::test]
    async fn test_prepend_keeps_entries_of_any_shape() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let legacy = vec![
            json!({"inputs": {"produk": "kopi", "usp": 42}, "output": "old"}),
            json!({"inputs": {}, "output": "older"}),
        ];
        store.save(&legacy);

        store.prepend(&HistoryEntry::new(brief("baru"), "new")).await;

        let entries = store.load();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["output"], "new");
        assert_eq!(entries[1..], legacy[..]);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let entries = vec![entry("kopi", "Kopi terbaik"), entry("teh", "Teh terbaik")];
        store.save(&entries);

        assert_eq!(store.load(), entries);
    }

    #[test]
    fn test_save_preserves_non_ascii_and_indents() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.save(&[entry("café ☕", "Rasakan kopi — enak")]);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("café ☕"));
        assert!(raw.contains("Rasakan kopi — enak"));
        assert!(!raw.contains("\\u"));
        assert!(raw.starts_with("[\n    {\n        \"inputs\""));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = HistoryStore::new(temp_dir.path().join("data/nested/history.json"));

        store.save(&[entry("kopi", "x")]);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be written as a file
        let store = HistoryStore::new(temp_dir.path());

        store.save(&[entry("kopi", "x")]);
        assert!(store.load().is_empty());
    }

    #[tokio::test]
    async fn test_prepend_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.prepend(&HistoryEntry::new(brief("pertama"), "1")).await;
        store.prepend(&HistoryEntry::new(brief("kedua"), "2")).await;

        let entries = store.load();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["output"], "2");
        assert_eq!(entries[1]["output"], "1");
    }

    #[tokio::test]
    async fn test_prepend_over_malformed_document_starts_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        std::fs::write(store.path(), "not json").unwrap();

        store.prepend(&HistoryEntry::new(brief("kopi"), "x")).await;
        assert_eq!(store.load().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_prepends_are_not_lost() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(create_test_store(&temp_dir));

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .prepend(&HistoryEntry::new(brief(&format!("p{}", i)), i.to_string()))
                    .await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.load().len(), 16);
    }
}

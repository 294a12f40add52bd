//! Translation file reading and merge semantics.
//!
//! A translation file is a JSON object mapping string keys to string values.
//! Files that cannot be read or parsed are skipped with a warning; a broken
//! file degrades coverage for its locale instead of aborting the lookup.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::metrics::TranslationMetrics;

/// Why a translation file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read translation file: {0}")]
    Io(#[from] std::io::Error),

    /// The file was not a JSON object of string keys to string values.
    #[error("failed to parse translation file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read a single translation file into a key/value table.
pub fn read_table(path: &Path) -> Result<HashMap<String, String>, LoadError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Merge one discovery batch into the accumulated table.
///
/// Within the batch, later files override earlier ones (so the
/// last-registered search directory wins). Keys already present in the
/// accumulator are preserved: a less-specific locale file never overwrites a
/// key populated by a more-specific one.
pub fn load_messages(files: &[PathBuf], table: &mut HashMap<String, String>) {
    let mut batch = HashMap::new();

    for file in files {
        match read_table(file) {
            Ok(entries) => {
                debug!(
                    path = %file.display(),
                    entries = entries.len(),
                    "loaded translation file"
                );
                TranslationMetrics::global().record_file_loaded();
                batch.extend(entries);
            }
            Err(err) => {
                warn!(path = %file.display(), %err, "skipping unreadable translation file");
                TranslationMetrics::global().record_file_skipped();
            }
        }
    }

    for (key, value) in batch {
        table.entry(key).or_insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(json.as_bytes()).expect("Failed to write");
        file
    }

    // ==================== read_table Tests ====================

    #[test]
    fn test_read_table_valid() {
        let file = table_file(r#"{"hello": "Hello", "bye": "Goodbye"}"#);
        let table = read_table(file.path()).expect("Should parse");
        assert_eq!(table.get("hello"), Some(&"Hello".to_string()));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_read_table_missing_file() {
        let result = read_table(Path::new("/nonexistent/en.json"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_read_table_invalid_json() {
        let file = table_file("not json at all");
        let result = read_table(file.path());
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_read_table_non_string_values_rejected() {
        let file = table_file(r#"{"count": 3}"#);
        let result = read_table(file.path());
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    // ==================== load_messages Tests ====================

    #[test]
    fn test_batch_later_file_wins() {
        let first = table_file(r#"{"color": "Colour"}"#);
        let second = table_file(r#"{"color": "Color"}"#);

        let mut table = HashMap::new();
        load_messages(
            &[first.path().to_path_buf(), second.path().to_path_buf()],
            &mut table,
        );
        assert_eq!(table.get("color"), Some(&"Color".to_string()));
    }

    #[test]
    fn test_accumulator_keys_preserved() {
        let file = table_file(r#"{"color": "Colour", "shape": "Shape"}"#);

        let mut table = HashMap::new();
        table.insert("color".to_string(), "Color US".to_string());
        load_messages(&[file.path().to_path_buf()], &mut table);

        // Existing key untouched, new key merged in
        assert_eq!(table.get("color"), Some(&"Color US".to_string()));
        assert_eq!(table.get("shape"), Some(&"Shape".to_string()));
    }

    #[test]
    fn test_unreadable_file_skipped() {
        let broken = table_file("{{{{");
        let good = table_file(r#"{"hello": "Hello"}"#);

        let mut table = HashMap::new();
        load_messages(
            &[broken.path().to_path_buf(), good.path().to_path_buf()],
            &mut table,
        );
        assert_eq!(table.get("hello"), Some(&"Hello".to_string()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mut table = HashMap::new();
        table.insert("hello".to_string(), "Hello".to_string());
        load_messages(&[], &mut table);
        assert_eq!(table.len(), 1);
    }
}

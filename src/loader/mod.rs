// Copyright (c) 2025 Makai Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON loader for vocabulary word lists and prefix query lists.
//!
//! The loader is the external collaborator that feeds the engine: it reads
//! `{"words": [...]}` vocabulary files and `{"prefixes": [{"prefix": ...}]}`
//! query files, surfaces every read or parse failure to the caller, and
//! hands plain collections to whoever owns the engine. Field names are
//! accepted case-insensitively, so capitalized exports load unchanged.

mod error;

pub use error::LoaderError;

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

/// Result type for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Shape of a vocabulary file.
#[derive(Debug, Deserialize)]
struct WordFile {
    /// The words to ingest, in file order.
    #[serde(alias = "Words", alias = "WORDS")]
    words: Vec<String>,
}

/// Shape of a prefix query file.
#[derive(Debug, Deserialize)]
struct PrefixFile {
    /// The prefix queries to run, in file order.
    #[serde(alias = "Prefixes", alias = "PREFIXES")]
    prefixes: Vec<QueryRecord>,
}

/// One prefix to test against the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryRecord {
    /// The already-typed prefix to complete.
    #[serde(alias = "Prefix", alias = "PREFIX")]
    pub prefix: String,
}

/// Loads every word from a vocabulary file, preserving file order.
///
/// File order matters downstream: the prefix-map index's first-five policy
/// is decided by arrival order, so callers comparing runs should feed words
/// in a stable order.
pub fn load_words(path: impl AsRef<Path>) -> LoaderResult<Vec<String>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading vocabulary");

    let file: WordFile = read_json(path)?;
    info!(
        path = %path.display(),
        count = file.words.len(),
        "vocabulary loaded"
    );
    Ok(file.words)
}

/// Loads at most `limit` words from a vocabulary file, preserving file
/// order. Used by the benchmark harness to compare vocabulary sizes.
pub fn load_words_capped(path: impl AsRef<Path>, limit: usize) -> LoaderResult<Vec<String>> {
    let mut words = load_words(path)?;
    words.truncate(limit);
    Ok(words)
}

/// Loads the prefix queries from a query file, preserving file order.
pub fn load_prefixes(path: impl AsRef<Path>) -> LoaderResult<Vec<QueryRecord>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading prefixes");

    let file: PrefixFile = read_json(path)?;
    info!(
        path = %path.display(),
        count = file.prefixes.len(),
        "prefixes loaded"
    );
    Ok(file.prefixes)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> LoaderResult<T> {
    let contents = fs::read_to_string(path).map_err(|source| LoaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| LoaderError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_json(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_load_words_preserves_file_order() {
        let file = temp_json(r#"{"words": ["cat", "car", "cart"]}"#);
        let words = load_words(file.path()).unwrap();
        assert_eq!(words, ["cat", "car", "cart"]);
    }

    #[test]
    fn test_load_words_accepts_capitalized_field() {
        let file = temp_json(r#"{"Words": ["dog"]}"#);
        let words = load_words(file.path()).unwrap();
        assert_eq!(words, ["dog"]);
    }

    #[test]
    fn test_load_words_capped_truncates() {
        let file = temp_json(r#"{"words": ["a", "b", "c", "d"]}"#);
        let words = load_words_capped(file.path(), 2).unwrap();
        assert_eq!(words, ["a", "b"]);
    }

    #[test]
    fn test_load_prefixes_reads_records() {
        let file = temp_json(r#"{"prefixes": [{"prefix": "ca"}, {"Prefix": "do"}]}"#);
        let prefixes = load_prefixes(file.path()).unwrap();
        assert_eq!(prefixes.len(), 2);
        assert_eq!(prefixes[0].prefix, "ca");
        assert_eq!(prefixes[1].prefix, "do");
    }

    #[test]
    fn test_missing_file_surfaces_read_error() {
        let err = load_words("no/such/file.json").unwrap_err();
        assert!(matches!(err, LoaderError::Read { .. }));
    }

    #[test]
    fn test_malformed_json_surfaces_parse_error() {
        let file = temp_json(r#"{"words": "not an array"}"#);
        let err = load_words(file.path()).unwrap_err();
        assert!(matches!(err, LoaderError::Parse { .. }));
    }
}

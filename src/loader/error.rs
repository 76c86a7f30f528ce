// Copyright (c) 2025 Makai Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the vocabulary and prefix-list loader.
//!
//! Malformed external data is owned entirely by the loader; the engine core
//! never sees it. These errors are surfaced to the caller, never swallowed.

use std::path::PathBuf;

/// Errors that can occur while loading vocabulary or prefix files.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its JSON did not match the expected shape.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path() {
        let err = LoaderError::Read {
            path: PathBuf::from("data/words.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("data/words.json"));
    }
}

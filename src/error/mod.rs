//! Error module for Makai Suggest.
//!
//! The taxonomy is deliberately narrow. Blank words and blank or absent
//! prefixes are handled locally inside the indices by returning empty
//! results, so the engine core has no error paths at all. What remains is
//! the external collaborators' territory: unreadable or malformed data
//! files surface here, typed with thiserror, and are never swallowed.

use thiserror::Error;

pub use crate::loader::LoaderError;

/// Result type alias used throughout Makai Suggest.
pub type MakaiResult<T> = Result<T, MakaiError>;

/// Top-level error for the CLI and any embedding application.
#[derive(Debug, Error)]
pub enum MakaiError {
    /// Vocabulary or prefix file could not be loaded.
    #[error("loader error: {0}")]
    Loader(#[from] LoaderError),

    /// I/O failure outside the loader's file handling.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_loader_errors_convert() {
        let loader_err = LoaderError::Read {
            path: PathBuf::from("words.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let err: MakaiError = loader_err.into();
        assert!(err.to_string().starts_with("loader error"));
    }
}

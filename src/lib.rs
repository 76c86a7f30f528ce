//! Makai Suggest Library
//!
//! Bounded prefix-completion over an in-memory vocabulary: ingest a stream
//! of words, answer prefix queries with at most five matches. The core is a
//! suggestion engine backed by three interchangeable indices — a prefix
//! tree with eight equivalent traversal strategies, a sorted list, and a
//! precomputed prefix map — built so the strategies' correctness and
//! performance can be compared against each other.
//!
//! # Architecture
//!
//! - `data_structures` holds the three indices; all share one term folding
//!   and one five-result cap
//! - `engine` is the facade collaborators talk to, with a closed strategy
//!   enum for dispatch
//! - `loader` reads JSON vocabulary and prefix files and owns their error
//!   handling; the core itself has no failure modes
//!
//! Everything is single-threaded and synchronous. None of the indices is
//! safe for concurrent mutation; finish ingestion before sharing an engine
//! across threads.

// Re-export public modules
pub mod data_structures;
pub mod engine;
pub mod error;
pub mod loader;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::SUGGESTION_CAP;
pub use engine::{QueryStrategy, SuggestionEngine};
pub use error::{MakaiError, MakaiResult};

/// Version information for Makai Suggest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

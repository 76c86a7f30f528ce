//! Index structures for the Makai Suggestion Engine.
//!
//! This module contains the three interchangeable vocabulary indices behind
//! the engine facade:
//! - Lanai Trie: a character-keyed prefix tree with eight equivalent
//!   traversal strategies for suggestion enumeration
//! - Kailua List: a sorted vector answering prefix queries by binary search
//! - Waimea Map: a precomputed prefix-to-suggestions map trading ingestion
//!   cost for O(1) queries
//!
//! All indices share the same folding and the same five-result cap so their
//! outputs can be compared strategy against strategy.

pub mod kailua_list;
pub mod lanai_trie;
pub mod waimea_map;

// Re-export common index types
pub use kailua_list::KailuaList;
pub use lanai_trie::LanaiTrie;
pub use waimea_map::WaimeaMap;

/// Maximum number of suggestions any query returns. Fixed by design; the
/// engine exists to compare strategies against one bound, not to page.
pub const SUGGESTION_CAP: usize = 5;

/// Folds a raw term to the canonical form shared by ingestion and queries.
///
/// Returns `None` for empty or whitespace-only input, which every index
/// treats as a silent no-op. Folding is trim plus Unicode lowercasing, so
/// `"Cart "` and `"cart"` index and match identically.
pub(crate) fn fold_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

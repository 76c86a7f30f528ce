//! Lanai Suggestion Trie implementation.
//!
//! This module provides a character-indexed prefix tree over the ingested
//! vocabulary, together with eight query strategies that enumerate the same
//! suggestions through different traversal mechanics. The strategies differ
//! along three axes:
//!
//! - traversal order: depth-first vs breadth-first
//! - control mechanism: recursive calls vs an explicit stack or queue
//! - string accumulation: a new `String` per step vs one mutable buffer
//!
//! Every strategy folds the query prefix the same way, walks it from the
//! root, enumerates children in ascending character order, and stops the
//! instant five suggestions have been collected. With that fixed child
//! order the four depth-first variants agree exactly with each other (and
//! with the sorted-list index), and the four breadth-first variants agree
//! exactly with each other; this equivalence is what the strategy
//! comparison exists to demonstrate.
//!
//! # Example
//!
//! ```
//! use makai_suggest_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! for word in ["cat", "car", "cart", "dog", "do"] {
//!     trie.ingest(word);
//! }
//!
//! // Depth-first enumeration is ascending lexicographic.
//! assert_eq!(trie.query_recursive_dfs_concat("ca"), ["car", "cart", "cat"]);
//!
//! // Absent prefixes are not an error, just an empty result.
//! assert!(trie.query_iterative_bfs_buffer("z").is_empty());
//! ```
//!
//! # Performance characteristics
//!
//! - Ingestion: O(k log σ) per word of length k, σ the branching alphabet
//! - Query: O(p log σ) descent plus enumeration bounded by the result cap
//! - Recursion depth of the recursive DFS variants is bounded by the
//!   longest ingested word; the iterative variants are the production path
//!   for vocabularies with very long keys

mod bfs;
mod dfs;
mod node;

#[cfg(test)]
mod tests;

pub use node::PrefixNode;

use super::fold_term;

/// A prefix tree over the ingested vocabulary.
///
/// The trie exclusively owns its root node; nodes are created lazily during
/// ingestion and never removed (there is no deletion operation). Not safe
/// for concurrent mutation — callers needing shared access must finish
/// ingestion first and synchronize externally.
#[derive(Debug, Default)]
pub struct LanaiTrie {
    /// The root node of the trie
    root: PrefixNode,

    /// Number of distinct words ingested
    word_count: usize,
}

impl LanaiTrie {
    /// Creates a new empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests a word, creating one node per character along its path and
    /// marking the final node terminal.
    ///
    /// The word is folded before indexing. Blank input is a silent no-op;
    /// re-ingesting an existing word changes nothing. Returns `true` if the
    /// word was new.
    pub fn ingest(&mut self, word: &str) -> bool {
        let Some(folded) = fold_term(word) else {
            return false;
        };

        let mut node = &mut self.root;
        for symbol in folded.chars() {
            node = node.children.entry(symbol).or_default();
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        if is_new {
            self.word_count += 1;
        }
        is_new
    }

    /// Returns the number of distinct words ingested.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns true if nothing has been ingested.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Walks an already-folded prefix from the root, returning the node it
    /// reaches, or `None` as soon as any character has no child.
    fn descend(&self, folded_prefix: &str) -> Option<&PrefixNode> {
        let mut node = &self.root;
        for symbol in folded_prefix.chars() {
            node = node.child(symbol)?;
        }
        Some(node)
    }

    /// Common preamble for every query strategy: fold the prefix and walk
    /// it to its node. Blank or absent prefixes yield `None`, which each
    /// strategy turns into an empty result.
    pub(crate) fn seed(&self, prefix: &str) -> Option<(&PrefixNode, String)> {
        let folded = fold_term(prefix)?;
        let start = self.descend(&folded)?;
        Some((start, folded))
    }
}

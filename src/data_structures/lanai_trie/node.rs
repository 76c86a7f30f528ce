//! Node implementation for the Lanai Suggestion Trie.
//!
//! This module provides the PrefixNode structure used in the Lanai Trie
//! implementation. Nodes are the fundamental building blocks of the trie,
//! each representing one character position reached during ingestion.

use std::collections::BTreeMap;

/// A node in the Lanai Suggestion Trie.
///
/// Each node represents a character in a word path. Terminal nodes mark the
/// end of at least one ingested word. Children live in a `BTreeMap` so that
/// every traversal enumerates them in ascending character order; an
/// unspecified child order would let equivalent strategies return different
/// first-five sets for the same vocabulary.
///
/// Nodes are exclusively owned by their parent (the trie owns the root), so
/// the structure is a plain tree with no sharing and no cycles.
#[derive(Debug, Default)]
pub struct PrefixNode {
    /// Ordered map of characters to child nodes
    pub(crate) children: BTreeMap<char, PrefixNode>,

    /// Whether at least one ingested word ends exactly at this node
    pub(crate) is_terminal: bool,
}

impl PrefixNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached through `symbol`, if one exists.
    pub fn child(&self, symbol: char) -> Option<&PrefixNode> {
        self.children.get(&symbol)
    }

    /// Returns true if no word ends here and no child exists.
    pub fn is_leafless(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }
}

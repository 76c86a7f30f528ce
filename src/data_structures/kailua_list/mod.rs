// Copyright (c) 2025 Makai Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Kailua Sorted List index.
//!
//! The tree-less alternative to the trie: every folded word is kept in one
//! vector in ascending lexicographic order, and a prefix query is a binary
//! search for the prefix's insertion point followed by a bounded forward
//! scan. Because the vector is sorted, the scan stops at the first word
//! that no longer starts with the prefix, so a query touches at most five
//! matches plus one sentinel.
//!
//! Query results are ascending lexicographic, which matches the trie's
//! depth-first enumeration exactly.

use crate::data_structures::{fold_term, SUGGESTION_CAP};

/// Sorted-vector index over the ingested vocabulary.
///
/// Not safe for concurrent mutation; ordered insertion shifts the tail of
/// the vector.
#[derive(Debug, Default)]
pub struct KailuaList {
    /// All distinct folded words, ascending at all times
    words: Vec<String>,
}

impl KailuaList {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word at its sorted position. Blank input and duplicates
    /// are silent no-ops. Returns `true` if the word was new.
    pub fn ingest(&mut self, word: &str) -> bool {
        let Some(folded) = fold_term(word) else {
            return false;
        };
        match self.words.binary_search(&folded) {
            Ok(_) => false,
            Err(position) => {
                self.words.insert(position, folded);
                true
            }
        }
    }

    /// Returns up to five words starting with `prefix`, ascending.
    ///
    /// Blank or unmatched prefixes yield an empty vector. The binary search
    /// lands on the first word not lexicographically below the prefix;
    /// every match sits in the contiguous run that follows.
    pub fn query(&self, prefix: &str) -> Vec<String> {
        let Some(folded) = fold_term(prefix) else {
            return Vec::new();
        };
        let start = self.words.partition_point(|word| word.as_str() < folded.as_str());
        self.words[start..]
            .iter()
            .take_while(|word| word.starts_with(&folded))
            .take(SUGGESTION_CAP)
            .cloned()
            .collect()
    }

    /// Returns the number of distinct words ingested.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if nothing has been ingested.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(words: &[&str]) -> KailuaList {
        let mut list = KailuaList::new();
        for word in words {
            list.ingest(word);
        }
        list
    }

    #[test]
    fn test_ingest_keeps_ascending_order() {
        let list = list_with(&["dog", "cat", "car", "cart", "do"]);
        assert_eq!(list.words, ["car", "cart", "cat", "do", "dog"]);
    }

    #[test]
    fn test_ingest_rejects_duplicates_and_blanks() {
        let mut list = list_with(&["cat"]);
        assert!(!list.ingest("cat"));
        assert!(!list.ingest("CAT "));
        assert!(!list.ingest(""));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_query_scans_forward_from_insertion_point() {
        let list = list_with(&["cat", "car", "cart", "dog", "do"]);
        assert_eq!(list.query("ca"), ["car", "cart", "cat"]);
        assert_eq!(list.query("do"), ["do", "dog"]);
        assert!(list.query("z").is_empty());
        assert!(list.query("").is_empty());
    }

    #[test]
    fn test_query_caps_at_five() {
        let list = list_with(&["aba", "abb", "abc", "abd", "abe", "abf"]);
        assert_eq!(list.query("ab"), ["aba", "abb", "abc", "abd", "abe"]);
    }

    #[test]
    fn test_query_matches_prefix_case_insensitively() {
        let list = list_with(&["Cart", "CAR"]);
        assert_eq!(list.query("CA"), ["car", "cart"]);
    }

    #[test]
    fn test_query_stops_at_first_non_match() {
        // "cb" sits right after every "ca" word; the scan must not reach it.
        let list = list_with(&["ca", "caa", "cb"]);
        assert_eq!(list.query("ca"), ["ca", "caa"]);
    }
}

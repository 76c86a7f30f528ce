// Copyright (c) 2025 Makai Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Waimea Prefix Map index.
//!
//! The precomputed alternative: ingestion appends the word to the candidate
//! list of every one of its prefixes (all lengths, 1..=len in characters),
//! capped at five per prefix, so a query is a single map lookup. Membership
//! in a prefix's list is decided the moment the word arrives and is never
//! re-sorted, which makes this index "first five to arrive" rather than
//! "first five lexicographically" — callers must not assume sorted output,
//! and if the ingestion order is not stable across runs neither is this
//! index's output.

use fnv::{FnvHashMap, FnvHashSet};

use crate::data_structures::{fold_term, SUGGESTION_CAP};

/// Prefix-to-candidates map over the ingested vocabulary.
///
/// Trades ingestion-time work and memory proportional to total prefix
/// count for O(1) queries. Not safe for concurrent mutation; ingestion
/// resizes both maps.
#[derive(Debug, Default)]
pub struct WaimeaMap {
    /// Candidate words per prefix, at most five each, arrival order
    prefixes: FnvHashMap<String, Vec<String>>,

    /// Every distinct folded word, used to ignore duplicate ingestion
    seen: FnvHashSet<String>,
}

impl WaimeaMap {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a word under every prefix of itself whose candidate list
    /// still has room. Blank input and previously ingested words are
    /// silent no-ops. Returns `true` if the word was new.
    pub fn ingest(&mut self, word: &str) -> bool {
        let Some(folded) = fold_term(word) else {
            return false;
        };
        if !self.seen.insert(folded.clone()) {
            return false;
        }

        for (index, symbol) in folded.char_indices() {
            let prefix = &folded[..index + symbol.len_utf8()];
            let candidates = self.prefixes.entry(prefix.to_owned()).or_default();
            if candidates.len() < SUGGESTION_CAP {
                candidates.push(folded.clone());
            }
        }
        true
    }

    /// Returns the stored candidate list for `prefix` verbatim, in arrival
    /// order; empty if the prefix is blank or was never reached.
    pub fn query(&self, prefix: &str) -> Vec<String> {
        let Some(folded) = fold_term(prefix) else {
            return Vec::new();
        };
        self.prefixes.get(&folded).cloned().unwrap_or_default()
    }

    /// Returns the number of distinct words ingested.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if nothing has been ingested.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

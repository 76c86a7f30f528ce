//! Suggestion engine facade.
//!
//! [`SuggestionEngine`] owns one instance of each index (trie, sorted list,
//! prefix map) and feeds every ingested word to all three, so any query
//! strategy can be invoked against the same vocabulary and compared against
//! the others. The set of strategies is closed by design — it exists to be
//! benchmarked against itself, not extended — which is why dispatch is an
//! enum rather than a trait object.
//!
//! # Example
//!
//! ```
//! use makai_suggest_lib::engine::{QueryStrategy, SuggestionEngine};
//!
//! let mut engine = SuggestionEngine::new();
//! for word in ["cat", "car", "cart", "dog", "do"] {
//!     engine.ingest(word);
//! }
//!
//! let suggestions = engine.query(QueryStrategy::SortedList, "ca");
//! assert_eq!(suggestions, ["car", "cart", "cat"]);
//! ```

use clap::ValueEnum;

use crate::data_structures::{KailuaList, LanaiTrie, WaimeaMap};

/// One specific combination of index, traversal order, control mechanism,
/// and string accumulation. Eight trie strategies plus the two tree-less
/// indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum QueryStrategy {
    /// Trie, depth-first, call-stack recursion, new string per step
    RecursiveDfsConcat,
    /// Trie, depth-first, call-stack recursion, shared mutable buffer
    RecursiveDfsBuffer,
    /// Trie, depth-first, explicit stack, new string per entry
    IterativeDfsConcat,
    /// Trie, depth-first, explicit stack, shared mutable buffer
    IterativeDfsBuffer,
    /// Trie, breadth-first, explicit queue, new string per child
    IterativeBfsConcat,
    /// Trie, breadth-first, explicit queue, reused scratch buffer
    IterativeBfsBuffer,
    /// Trie, breadth-first, level recursion, new string per child
    RecursiveBfsConcat,
    /// Trie, breadth-first, level recursion, reused scratch buffer
    RecursiveBfsBuffer,
    /// Sorted vector, binary search plus bounded forward scan
    SortedList,
    /// Precomputed prefix map, single lookup, arrival order
    PrefixMap,
}

impl QueryStrategy {
    /// Every strategy, in comparison-run order.
    pub const ALL: [QueryStrategy; 10] = [
        QueryStrategy::RecursiveDfsConcat,
        QueryStrategy::RecursiveDfsBuffer,
        QueryStrategy::IterativeDfsConcat,
        QueryStrategy::IterativeDfsBuffer,
        QueryStrategy::IterativeBfsConcat,
        QueryStrategy::IterativeBfsBuffer,
        QueryStrategy::RecursiveBfsConcat,
        QueryStrategy::RecursiveBfsBuffer,
        QueryStrategy::SortedList,
        QueryStrategy::PrefixMap,
    ];

    /// The eight trie traversal strategies.
    pub const TRIE: [QueryStrategy; 8] = [
        QueryStrategy::RecursiveDfsConcat,
        QueryStrategy::RecursiveDfsBuffer,
        QueryStrategy::IterativeDfsConcat,
        QueryStrategy::IterativeDfsBuffer,
        QueryStrategy::IterativeBfsConcat,
        QueryStrategy::IterativeBfsBuffer,
        QueryStrategy::RecursiveBfsConcat,
        QueryStrategy::RecursiveBfsBuffer,
    ];

    /// Stable name used in logs, comparison output, and benchmark IDs.
    pub fn label(self) -> &'static str {
        match self {
            QueryStrategy::RecursiveDfsConcat => "recursive_dfs_concat",
            QueryStrategy::RecursiveDfsBuffer => "recursive_dfs_buffer",
            QueryStrategy::IterativeDfsConcat => "iterative_dfs_concat",
            QueryStrategy::IterativeDfsBuffer => "iterative_dfs_buffer",
            QueryStrategy::IterativeBfsConcat => "iterative_bfs_concat",
            QueryStrategy::IterativeBfsBuffer => "iterative_bfs_buffer",
            QueryStrategy::RecursiveBfsConcat => "recursive_bfs_concat",
            QueryStrategy::RecursiveBfsBuffer => "recursive_bfs_buffer",
            QueryStrategy::SortedList => "sorted_list",
            QueryStrategy::PrefixMap => "prefix_map",
        }
    }

    /// True for strategies whose output is ascending lexicographic (trie
    /// depth-first and the sorted list). Breadth-first output is ordered by
    /// depth first; the prefix map is ordered by arrival.
    pub fn returns_sorted_output(self) -> bool {
        matches!(
            self,
            QueryStrategy::RecursiveDfsConcat
                | QueryStrategy::RecursiveDfsBuffer
                | QueryStrategy::IterativeDfsConcat
                | QueryStrategy::IterativeDfsBuffer
                | QueryStrategy::SortedList
        )
    }
}

impl std::fmt::Display for QueryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The entity external collaborators talk to: uniform ingestion across all
/// three indices and uniform querying across all ten strategies.
///
/// Single-threaded and synchronous; nothing here blocks or suspends. Not
/// safe for concurrent mutation — finish ingestion before sharing.
#[derive(Debug, Default)]
pub struct SuggestionEngine {
    trie: LanaiTrie,
    sorted_list: KailuaList,
    prefix_map: WaimeaMap,
}

impl SuggestionEngine {
    /// Creates an engine with all three indices empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests a word into every index. Blank input is a silent no-op;
    /// duplicates change nothing. Never fails.
    pub fn ingest(&mut self, word: &str) {
        self.trie.ingest(word);
        self.sorted_list.ingest(word);
        self.prefix_map.ingest(word);
    }

    /// Returns up to five suggestions for `prefix` using the given
    /// strategy. Blank or absent prefixes yield an empty vector; queries
    /// never fail for valid text input.
    pub fn query(&self, strategy: QueryStrategy, prefix: &str) -> Vec<String> {
        match strategy {
            QueryStrategy::RecursiveDfsConcat => self.trie.query_recursive_dfs_concat(prefix),
            QueryStrategy::RecursiveDfsBuffer => self.trie.query_recursive_dfs_buffer(prefix),
            QueryStrategy::IterativeDfsConcat => self.trie.query_iterative_dfs_concat(prefix),
            QueryStrategy::IterativeDfsBuffer => self.trie.query_iterative_dfs_buffer(prefix),
            QueryStrategy::IterativeBfsConcat => self.trie.query_iterative_bfs_concat(prefix),
            QueryStrategy::IterativeBfsBuffer => self.trie.query_iterative_bfs_buffer(prefix),
            QueryStrategy::RecursiveBfsConcat => self.trie.query_recursive_bfs_concat(prefix),
            QueryStrategy::RecursiveBfsBuffer => self.trie.query_recursive_bfs_buffer(prefix),
            QueryStrategy::SortedList => self.sorted_list.query(prefix),
            QueryStrategy::PrefixMap => self.prefix_map.query(prefix),
        }
    }

    /// Returns the number of distinct words ingested.
    pub fn word_count(&self) -> usize {
        self.sorted_list.len()
    }

    /// Returns true if nothing has been ingested.
    pub fn is_empty(&self) -> bool {
        self.sorted_list.is_empty()
    }

    /// Direct access to the trie index, for benchmarks that bypass enum
    /// dispatch.
    pub fn trie(&self) -> &LanaiTrie {
        &self.trie
    }

    /// Direct access to the sorted-list index.
    pub fn sorted_list(&self) -> &KailuaList {
        &self.sorted_list
    }

    /// Direct access to the prefix-map index.
    pub fn prefix_map(&self) -> &WaimeaMap {
        &self.prefix_map
    }
}

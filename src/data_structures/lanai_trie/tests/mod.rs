//! Unit and property-based tests for the Lanai Suggestion Trie.

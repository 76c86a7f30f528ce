//! Shared helpers for the crate-internal test suites.

use proptest::prelude::*;

use crate::engine::SuggestionEngine;

/// Builds an engine with the given words ingested in order.
pub fn engine_with(words: &[&str]) -> SuggestionEngine {
    let mut engine = SuggestionEngine::new();
    for word in words {
        engine.ingest(word);
    }
    engine
}

/// Random vocabularies over a deliberately small alphabet so prefixes
/// collide and the five-result cap actually bites.
pub fn vocabulary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-d]{1,7}").unwrap(), 0..50)
}

/// Random prefixes from the same alphabet.
pub fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{1,4}").unwrap()
}

//! Engine-level tests: the facade contract every external collaborator
//! relies on, exercised through enum dispatch the way the CLI and the
//! benchmark harness use it.

use crate::data_structures::SUGGESTION_CAP;
use crate::engine::QueryStrategy;
use crate::tests::test_utils::engine_with;

#[test]
fn test_every_word_reachable_through_each_of_its_prefixes() {
    let engine = engine_with(&["winter", "window", "wind"]);

    for strategy in QueryStrategy::ALL {
        for prefix in ["w", "wi", "win", "wind", "windo", "window"] {
            let results = engine.query(strategy, prefix);
            assert!(
                results.iter().any(|w| w == "window"),
                "strategy {strategy} lost 'window' under prefix '{prefix}'"
            );
        }
    }
}

#[test]
fn test_results_start_with_prefix_case_insensitively() {
    let engine = engine_with(&["Cart", "CAR", "cat", "dog"]);

    for strategy in QueryStrategy::ALL {
        for result in engine.query(strategy, "CA") {
            assert!(result.starts_with("ca"), "strategy {strategy} returned {result}");
        }
    }
}

#[test]
fn test_cap_holds_for_every_strategy() {
    let words: Vec<String> = (0..20).map(|i| format!("word{i:02}")).collect();
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let engine = engine_with(&refs);

    for strategy in QueryStrategy::ALL {
        assert!(engine.query(strategy, "word").len() <= SUGGESTION_CAP);
    }
}

#[test]
fn test_double_ingestion_is_observationally_single() {
    let words = ["cat", "car", "cart", "dog", "do"];
    let once = engine_with(&words);
    let mut twice = engine_with(&words);
    for word in words {
        twice.ingest(word);
    }

    assert_eq!(once.word_count(), twice.word_count());
    for strategy in QueryStrategy::ALL {
        for prefix in ["c", "ca", "d", "do", "z"] {
            assert_eq!(
                once.query(strategy, prefix),
                twice.query(strategy, prefix),
                "strategy {strategy}, prefix '{prefix}'"
            );
        }
    }
}

#[test]
fn test_crowding_policies_per_index_family() {
    // Six words share "ab"; ingestion order is reverse lexicographic so the
    // arrival-order and ascending-order policies pick different sets.
    let engine = engine_with(&["abf", "abe", "abd", "abc", "abb", "aba"]);

    // Trie DFS and sorted list keep the ascending-order first five.
    let ascending = ["aba", "abb", "abc", "abd", "abe"];
    assert_eq!(engine.query(QueryStrategy::RecursiveDfsConcat, "ab"), ascending);
    assert_eq!(engine.query(QueryStrategy::SortedList, "ab"), ascending);

    // The prefix map keeps the first five to arrive, never re-sorted.
    assert_eq!(
        engine.query(QueryStrategy::PrefixMap, "ab"),
        ["abf", "abe", "abd", "abc", "abb"]
    );
}

#[test]
fn test_prefix_map_output_is_arrival_ordered_not_sorted() {
    let engine = engine_with(&["cat", "car", "cart"]);
    assert_eq!(
        engine.query(QueryStrategy::PrefixMap, "ca"),
        ["cat", "car", "cart"]
    );
    assert_eq!(
        engine.query(QueryStrategy::SortedList, "ca"),
        ["car", "cart", "cat"]
    );
}

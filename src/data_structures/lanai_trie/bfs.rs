//! Breadth-first query strategies for the Lanai Suggestion Trie.
//!
//! All four variants visit every node at one depth before descending to the
//! next, with children enqueued in ascending character order, so each
//! returns the same suggestions in the same (depth, then lexicographic)
//! order. Note that this is a different order than the depth-first
//! strategies produce: a shorter word always surfaces before a longer one,
//! and under crowding the first five by level can be a different set than
//! the first five by branch. Both orders are deterministic for a fixed
//! vocabulary.
//!
//! The variants differ in control mechanism (an explicit `VecDeque` vs
//! recursion over whole levels) and in string accumulation (a fresh
//! `String` per enqueued child vs one scratch buffer rebuilt per child and
//! cloned into the frontier).

use std::collections::VecDeque;

use super::node::PrefixNode;
use super::LanaiTrie;
use crate::data_structures::SUGGESTION_CAP;

impl LanaiTrie {
    /// Breadth-first with an explicit queue, building a new string per
    /// enqueued child.
    pub fn query_iterative_bfs_concat(&self, prefix: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        let Some((start, seed)) = self.seed(prefix) else {
            return suggestions;
        };

        let mut queue = VecDeque::from([(start, seed)]);
        while let Some((node, word)) = queue.pop_front() {
            if node.is_terminal {
                suggestions.push(word.clone());
                if suggestions.len() >= SUGGESTION_CAP {
                    return suggestions;
                }
            }
            for (symbol, child) in &node.children {
                queue.push_back((child, format!("{word}{symbol}")));
            }
        }
        suggestions
    }

    /// Breadth-first with an explicit queue and a reused scratch buffer.
    ///
    /// Paths diverge across a level, so a single buffer cannot be truncated
    /// the way the depth-first variant does; instead each child's word is
    /// assembled in the scratch buffer and cloned into the frontier.
    pub fn query_iterative_bfs_buffer(&self, prefix: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        let Some((start, seed)) = self.seed(prefix) else {
            return suggestions;
        };

        let mut scratch = String::new();
        let mut queue = VecDeque::from([(start, seed)]);
        while let Some((node, word)) = queue.pop_front() {
            if node.is_terminal {
                suggestions.push(word.clone());
                if suggestions.len() >= SUGGESTION_CAP {
                    return suggestions;
                }
            }
            for (symbol, child) in &node.children {
                scratch.clear();
                scratch.push_str(&word);
                scratch.push(*symbol);
                queue.push_back((child, scratch.clone()));
            }
        }
        suggestions
    }

    /// Breadth-first through recursion over whole levels, building a new
    /// string per child.
    ///
    /// Recursion depth equals the trie depth below the prefix node, not the
    /// number of nodes, so this stays call-stack-safe for the same
    /// vocabularies the recursive depth-first variants are safe for.
    pub fn query_recursive_bfs_concat(&self, prefix: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        if let Some((start, seed)) = self.seed(prefix) {
            collect_level_concat(vec![(start, seed)], &mut suggestions);
        }
        suggestions
    }

    /// Breadth-first through recursion over whole levels, assembling each
    /// child's word in a reused scratch buffer.
    pub fn query_recursive_bfs_buffer(&self, prefix: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        if let Some((start, seed)) = self.seed(prefix) {
            let mut scratch = String::new();
            collect_level_buffer(vec![(start, seed)], &mut scratch, &mut suggestions);
        }
        suggestions
    }
}

/// Processes one level left to right, then recurses on the assembled next
/// level. Visit order is identical to the queue-driven variants.
fn collect_level_concat(level: Vec<(&PrefixNode, String)>, suggestions: &mut Vec<String>) {
    if level.is_empty() {
        return;
    }
    let mut next_level = Vec::new();
    for (node, word) in &level {
        if node.is_terminal {
            suggestions.push(word.clone());
            if suggestions.len() >= SUGGESTION_CAP {
                return;
            }
        }
        for (symbol, child) in &node.children {
            next_level.push((child, format!("{word}{symbol}")));
        }
    }
    collect_level_concat(next_level, suggestions);
}

/// Level recursion with scratch-buffer word assembly.
fn collect_level_buffer<'a>(
    level: Vec<(&'a PrefixNode, String)>,
    scratch: &mut String,
    suggestions: &mut Vec<String>,
) {
    if level.is_empty() {
        return;
    }
    let mut next_level = Vec::new();
    for (node, word) in &level {
        if node.is_terminal {
            suggestions.push(word.clone());
            if suggestions.len() >= SUGGESTION_CAP {
                return;
            }
        }
        for (symbol, child) in &node.children {
            scratch.clear();
            scratch.push_str(word);
            scratch.push(*symbol);
            next_level.push((child, scratch.clone()));
        }
    }
    collect_level_buffer(next_level, scratch, suggestions);
}

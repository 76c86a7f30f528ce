//! Depth-first query strategies for the Lanai Suggestion Trie.
//!
//! All four variants exhaust one branch before moving to the next and
//! enumerate children in ascending character order, so each returns the
//! same suggestions in the same ascending lexicographic order. They differ
//! only in control mechanism (call stack vs explicit stack) and in how the
//! accumulated word is built (fresh `String` per step vs one mutable
//! buffer).

use super::node::PrefixNode;
use super::LanaiTrie;
use crate::data_structures::SUGGESTION_CAP;

impl LanaiTrie {
    /// Depth-first, recursive, building a brand-new string per step.
    ///
    /// The closest rendition of the textbook trie walk: every descent
    /// allocates the child's accumulated word from scratch.
    pub fn query_recursive_dfs_concat(&self, prefix: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        if let Some((start, seed)) = self.seed(prefix) {
            collect_recursive_concat(start, &seed, &mut suggestions);
        }
        suggestions
    }

    /// Depth-first, recursive, mutating a single growable buffer.
    ///
    /// The buffer is appended to on descent and truncated on backtrack so
    /// siblings never see each other's characters.
    pub fn query_recursive_dfs_buffer(&self, prefix: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        if let Some((start, seed)) = self.seed(prefix) {
            let mut buffer = seed;
            collect_recursive_buffer(start, &mut buffer, &mut suggestions);
        }
        suggestions
    }

    /// Depth-first with an explicit stack, building a new string per entry.
    ///
    /// Children are pushed in descending character order so the stack pops
    /// them back in ascending order, matching the recursive variants.
    pub fn query_iterative_dfs_concat(&self, prefix: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        let Some((start, seed)) = self.seed(prefix) else {
            return suggestions;
        };

        let mut stack = vec![(start, seed)];
        while let Some((node, word)) = stack.pop() {
            if node.is_terminal {
                suggestions.push(word.clone());
                if suggestions.len() >= SUGGESTION_CAP {
                    return suggestions;
                }
            }
            for (symbol, child) in node.children.iter().rev() {
                stack.push((child, format!("{word}{symbol}")));
            }
        }
        suggestions
    }

    /// Depth-first with an explicit stack and one shared buffer.
    ///
    /// Each stack entry records the buffer length of its parent's word;
    /// popping truncates the buffer back to that length before appending
    /// the entry's own character. That truncation is the backtrack step and
    /// is required for correctness, not an optimization: without it a deep
    /// first branch would leak its characters into every later sibling.
    pub fn query_iterative_dfs_buffer(&self, prefix: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        let Some((start, seed)) = self.seed(prefix) else {
            return suggestions;
        };

        let mut buffer = seed;
        let mut stack = vec![(start, buffer.len(), None)];
        while let Some((node, parent_len, symbol)) = stack.pop() {
            buffer.truncate(parent_len);
            if let Some(symbol) = symbol {
                buffer.push(symbol);
            }
            if node.is_terminal {
                suggestions.push(buffer.clone());
                if suggestions.len() >= SUGGESTION_CAP {
                    return suggestions;
                }
            }
            for (symbol, child) in node.children.iter().rev() {
                stack.push((child, buffer.len(), Some(*symbol)));
            }
        }
        suggestions
    }
}

/// Recursive descent for the concat variant. Stops as soon as the cap is
/// reached, both on entry and between siblings.
fn collect_recursive_concat(node: &PrefixNode, word: &str, suggestions: &mut Vec<String>) {
    if suggestions.len() >= SUGGESTION_CAP {
        return;
    }
    if node.is_terminal {
        suggestions.push(word.to_owned());
    }
    for (symbol, child) in &node.children {
        collect_recursive_concat(child, &format!("{word}{symbol}"), suggestions);
        if suggestions.len() >= SUGGESTION_CAP {
            return;
        }
    }
}

/// Recursive descent for the buffer variant. The pop after each child call
/// restores the buffer to its pre-descent length before the next sibling.
fn collect_recursive_buffer(node: &PrefixNode, buffer: &mut String, suggestions: &mut Vec<String>) {
    if suggestions.len() >= SUGGESTION_CAP {
        return;
    }
    if node.is_terminal {
        suggestions.push(buffer.clone());
    }
    for (symbol, child) in &node.children {
        buffer.push(*symbol);
        collect_recursive_buffer(child, buffer, suggestions);
        buffer.pop();
        if suggestions.len() >= SUGGESTION_CAP {
            return;
        }
    }
}

// --- File: src/core/trie.rs
use std::collections::HashMap;

// --- PatternTrie: prefix lookup for longest-match substitution ---

#[derive(Debug, Clone)]
struct TrieNode {
    children: HashMap<char, usize>,
    rule: Option<usize>,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), rule: None }
    }
}

/// An arena-backed character trie mapping patterns to rule indices.
/// Built once, then only read.
#[derive(Debug, Clone)]
pub struct PatternTrie {
    nodes: Vec<TrieNode>,
}

impl PatternTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()] }
    }

    /// Inserts `pattern` for `rule`. A pattern that is already present keeps
    /// its earlier rule. Returns whether the insert took effect.
    /// O(k) complexity where k is pattern length.
    pub fn insert(&mut self, pattern: &str, rule: usize) -> bool {
        let mut node_idx = 0;
        for ch in pattern.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&ch) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(ch, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }
        if node_idx == 0 || self.nodes[node_idx].rule.is_some() {
            return false;
        }
        self.nodes[node_idx].rule = Some(rule);
        true
    }

    /// Walks `input` from its start and returns the rule of the longest
    /// pattern that prefixes it, with the byte length matched.
    pub fn longest_match(&self, input: &str) -> Option<(usize, usize)> {
        let mut node_idx = 0;
        let mut best = None;
        for (offset, ch) in input.char_indices() {
            match self.nodes[node_idx].children.get(&ch) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if let Some(rule) = self.nodes[node_idx].rule {
                best = Some((rule, offset + ch.len_utf8()));
            }
        }
        best
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_pattern_wins() {
        let mut trie = PatternTrie::new();
        trie.insert("a", 0);
        trie.insert("as", 1);
        trie.insert("about", 2);
        assert_eq!(trie.longest_match("asphalt"), Some((1, 2)));
        assert_eq!(trie.longest_match("about"), Some((2, 5)));
        assert_eq!(trie.longest_match("abc"), Some((0, 1)));
        assert_eq!(trie.longest_match("xyz"), None);
    }

    #[test]
    fn first_insert_keeps_the_pattern() {
        let mut trie = PatternTrie::new();
        assert!(trie.insert("where", 4));
        assert!(!trie.insert("where", 9));
        assert!(!trie.insert("", 1));
        assert_eq!(trie.longest_match("where"), Some((4, 5)));
    }

    #[test]
    fn byte_lengths_follow_utf8() {
        let mut trie = PatternTrie::new();
        trie.insert("⠠⠠", 0);
        assert_eq!(trie.longest_match("⠠⠠⠁"), Some((0, "⠠⠠".len())));
        assert_eq!(trie.node_count(), 3);
    }
}

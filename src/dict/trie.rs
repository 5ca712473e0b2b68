//! Character-keyed prefix tree over dictionary tokens.
//!
//! The trie mirrors the token map so that, from a given start position in a
//! sentence, every dictionary-matching end position can be collected in a
//! single walk rather than probing each candidate substring independently.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// True if the path from the root to this node spells a stored token.
    terminal: bool,
}

/// A prefix tree keyed by `char`.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a token. Re-inserting an existing token is a no-op.
    pub fn insert(&mut self, token: &str) {
        let mut node = &mut self.root;
        for ch in token.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Returns true if `token` was inserted.
    pub fn contains(&self, token: &str) -> bool {
        let mut node = &self.root;
        for ch in token.chars() {
            match node.children.get(&ch) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.terminal
    }

    /// Number of distinct tokens stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no tokens are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Collects every end position `e` such that `chars[start..e]` is a
    /// stored token, in increasing order. The walk stops at the first
    /// character with no matching child, so spans that are not prefixes of
    /// any token are never examined.
    pub fn matching_ends(&self, chars: &[char], start: usize) -> Vec<usize> {
        let mut ends = Vec::new();
        let mut node = &self.root;
        for (offset, ch) in chars[start..].iter().enumerate() {
            match node.children.get(ch) {
                Some(next) => {
                    node = next;
                    if node.terminal {
                        ends.push(start + offset + 1);
                    }
                }
                None => break,
            }
        }
        ends
    }
}

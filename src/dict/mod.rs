//! Dictionary types: a token-to-weight mapping with a trie mirror.

mod loader;
mod trie;

pub use trie::Trie;

use crate::error::{LexicutError, Result};
use indexmap::IndexMap;

/// A finite mapping from non-empty tokens to numeric weights.
///
/// Weights are carried for potential downstream ranking but are never
/// consumed by the enumeration algorithm itself. Entries iterate in
/// insertion order. Every token is mirrored into a [`Trie`] so the
/// segmenter can enumerate all matches from a start position in one walk.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: IndexMap<String, f64>,
    trie: Trie,
    max_token_chars: usize,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a token with its weight. Re-inserting an existing token
    /// replaces its weight. Empty tokens are rejected.
    pub fn insert(&mut self, token: impl Into<String>, weight: f64) -> Result<()> {
        let token = token.into();
        if token.is_empty() {
            return Err(LexicutError::EmptyToken);
        }
        self.max_token_chars = self.max_token_chars.max(token.chars().count());
        self.trie.insert(&token);
        self.entries.insert(token, weight);
        Ok(())
    }

    /// Builds a dictionary from (token, weight) pairs.
    pub fn from_pairs<S, I>(pairs: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let mut dict = Self::new();
        for (token, weight) in pairs {
            dict.insert(token, weight)?;
        }
        Ok(dict)
    }

    /// Returns true if `token` is a dictionary key.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Returns the weight stored for `token`, if present.
    pub fn weight(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length, in characters, of the longest token.
    pub fn max_token_chars(&self) -> usize {
        self.max_token_chars
    }

    /// Iterates over (token, weight) entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(token, &weight)| (token.as_str(), weight))
    }

    /// The trie mirror of the token set.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_query() {
        let mut dict = Dictionary::new();
        dict.insert("意见", 0.2).unwrap();
        dict.insert("见", 0.05).unwrap();

        assert!(dict.contains("意见"));
        assert!(dict.contains("见"));
        assert!(!dict.contains("分"));
        assert_eq!(dict.weight("意见"), Some(0.2));
        assert_eq!(dict.weight("分"), None);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.max_token_chars(), 2);
    }

    #[test]
    fn test_empty_token_rejected() {
        let mut dict = Dictionary::new();
        assert!(matches!(dict.insert("", 1.0), Err(LexicutError::EmptyToken)));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_reinsert_replaces_weight() {
        let mut dict = Dictionary::new();
        dict.insert("word", 1.0).unwrap();
        dict.insert("word", 2.0).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.weight("word"), Some(2.0));
        assert_eq!(dict.trie().len(), 1);
    }

    #[test]
    fn test_from_pairs_preserves_order() {
        let dict = Dictionary::from_pairs([("b", 1.0), ("a", 2.0), ("c", 3.0)]).unwrap();
        let tokens: Vec<&str> = dict.iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_trie_mirror_agrees() {
        let dict =
            Dictionary::from_pairs([("经常", 0.1), ("经", 0.05), ("常", 0.001)]).unwrap();
        for (token, _) in dict.iter() {
            assert!(dict.trie().contains(token));
        }
        assert!(!dict.trie().contains("常经"));
    }
}

//! Configuration for the lexicut segmentation engine.

use serde::{Deserialize, Serialize};

/// Configuration for the exhaustive segmenter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Walk the dictionary trie from each start position instead of probing
    /// every (start, end) substring against the token map. Both strategies
    /// produce identical result sets; the trie visits only spans that are
    /// prefixes of some dictionary entry.
    /// Default: true.
    pub use_trie: bool,

    /// Upper bound on candidate token length, in characters.
    /// 0 derives the bound from the longest dictionary entry.
    /// Default: 0.
    pub max_token_chars: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            use_trie: true,
            max_token_chars: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SegmenterConfig::default();
        assert!(config.use_trie);
        assert_eq!(config.max_token_chars, 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = SegmenterConfig {
            use_trie: false,
            max_token_chars: 4,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SegmenterConfig = serde_json::from_str(&json).unwrap();
        assert!(!back.use_trie);
        assert_eq!(back.max_token_chars, 4);
    }
}

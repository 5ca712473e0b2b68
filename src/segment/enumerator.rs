//! Enumeration of every dictionary segmentation via a prefix dynamic program.
//!
//! `table[i]` holds the set of all segmentations that exactly cover the
//! first `i` characters of the sentence. `table[0]` is seeded with the
//! empty segmentation, and each later prefix is built by extending shorter
//! prefixes with a single dictionary token. `table[n]` is the answer.

use indexmap::IndexSet;
use log::debug;

use crate::config::SegmenterConfig;
use crate::dict::Dictionary;

/// An ordered sequence of tokens whose concatenation equals the sentence.
pub type Segmentation = Vec<String>;

/// Enumerates all ways to segment a sentence into dictionary tokens.
///
/// A segmenter owns its dictionary and a [`SegmenterConfig`]. For a
/// one-shot call with default configuration, see [`segment_all`].
#[derive(Debug, Clone)]
pub struct Segmenter {
    dict: Dictionary,
    config: SegmenterConfig,
}

impl Segmenter {
    /// Creates a segmenter with default configuration.
    pub fn new(dict: Dictionary) -> Self {
        Self::with_config(dict, SegmenterConfig::default())
    }

    /// Creates a segmenter with an explicit configuration.
    pub fn with_config(dict: Dictionary, config: SegmenterConfig) -> Self {
        Self { dict, config }
    }

    /// The dictionary backing this segmenter.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Returns every distinct segmentation of `sentence` into dictionary
    /// tokens, each exactly once. The order of segmentations is
    /// unspecified; compare results as sets.
    ///
    /// An empty sentence yields a single empty segmentation. A sentence
    /// with no full-coverage decomposition yields an empty vector, which
    /// is a legal outcome rather than an error.
    pub fn segment_all(&self, sentence: &str) -> Vec<Segmentation> {
        let mut table = build_table(sentence, &self.dict, &self.config);
        let result: Vec<Segmentation> = match table.pop() {
            Some(last) => last.into_iter().collect(),
            None => Vec::new(),
        };
        debug!(
            "enumerated {} segmentation(s) for {}-char sentence",
            result.len(),
            sentence.chars().count()
        );
        result
    }
}

/// Returns every distinct segmentation of `sentence` into tokens of
/// `dictionary`, using the default configuration.
///
/// # Examples
///
/// ```
/// use lexicut::{segment_all, Dictionary};
///
/// let dict = Dictionary::from_pairs([("just", 1.0), ("ice", 1.0), ("justice", 1.0)]).unwrap();
/// let mut cuts = segment_all("justice", &dict);
/// cuts.sort();
///
/// assert_eq!(cuts, vec![vec!["just", "ice"], vec!["justice"]]);
/// ```
pub fn segment_all(sentence: &str, dictionary: &Dictionary) -> Vec<Segmentation> {
    let config = SegmenterConfig::default();
    let mut table = build_table(sentence, dictionary, &config);
    match table.pop() {
        Some(last) => last.into_iter().collect(),
        None => Vec::new(),
    }
}

/// Builds the full DP table for `sentence`. `table[i]` is the set of
/// segmentations covering the first `i` characters; the returned vector
/// always has `n + 1` entries.
fn build_table(
    sentence: &str,
    dict: &Dictionary,
    config: &SegmenterConfig,
) -> Vec<IndexSet<Segmentation>> {
    // Character positions map to byte offsets so candidate tokens can be
    // sliced from the sentence without re-collecting chars.
    let mut bounds: Vec<usize> = sentence.char_indices().map(|(offset, _)| offset).collect();
    bounds.push(sentence.len());
    let n = bounds.len() - 1;

    let mut table: Vec<IndexSet<Segmentation>> = vec![IndexSet::new(); n + 1];
    table[0].insert(Vec::new());

    if config.use_trie {
        fill_by_trie_walk(sentence, &bounds, dict, config, &mut table);
    } else {
        fill_by_substring_probe(sentence, &bounds, dict, config, &mut table);
    }
    table
}

/// Reference strategy: for each end position, probe every start position's
/// span against the token map and extend the shorter prefix's
/// segmentations. Matches the textbook formulation position for position.
fn fill_by_substring_probe(
    sentence: &str,
    bounds: &[usize],
    dict: &Dictionary,
    config: &SegmenterConfig,
    table: &mut [IndexSet<Segmentation>],
) {
    let n = bounds.len() - 1;
    let cap = token_cap(dict, config);

    for end in 1..=n {
        let (head, tail) = table.split_at_mut(end);
        let current = &mut tail[0];
        let lo = end.saturating_sub(cap);
        for start in lo..end {
            let candidate = &sentence[bounds[start]..bounds[end]];
            if !dict.contains(candidate) {
                continue;
            }
            for prev in &head[start] {
                // Cloning the whole prefix segmentation per extension is
                // quadratic in output volume; fine at the sentence lengths
                // this crate targets, a shared-suffix arena would be needed
                // for adversarial dictionaries on long inputs.
                let mut cut = prev.clone();
                cut.push(candidate.to_string());
                current.insert(cut);
            }
        }
    }
}

/// Trie strategy: from each start position with a non-empty prefix set,
/// one trie walk yields all matching end positions. Produces the same
/// table contents as the substring probe.
fn fill_by_trie_walk(
    sentence: &str,
    bounds: &[usize],
    dict: &Dictionary,
    config: &SegmenterConfig,
    table: &mut [IndexSet<Segmentation>],
) {
    let n = bounds.len() - 1;
    let chars: Vec<char> = sentence.chars().collect();

    for start in 0..n {
        if table[start].is_empty() {
            // No segmentation reaches this position; nothing to extend.
            continue;
        }
        let ends = dict.trie().matching_ends(&chars, start);
        let (head, tail) = table.split_at_mut(start + 1);
        let prefix_set = &head[start];
        for end in ends {
            if config.max_token_chars > 0 && end - start > config.max_token_chars {
                break;
            }
            let candidate = &sentence[bounds[start]..bounds[end]];
            let current = &mut tail[end - start - 1];
            for prev in prefix_set {
                let mut cut = prev.clone();
                cut.push(candidate.to_string());
                current.insert(cut);
            }
        }
    }
}

/// Longest candidate span worth probing, in characters.
fn token_cap(dict: &Dictionary, config: &SegmenterConfig) -> usize {
    if config.max_token_chars > 0 {
        config.max_token_chars.min(dict.max_token_chars())
    } else {
        dict.max_token_chars()
    }
}

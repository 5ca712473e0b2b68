//! # Lexicut - Exhaustive Dictionary Segmentation
//!
//! Lexicut enumerates every way a sentence can be partitioned into a
//! sequence of contiguous substrings that are all entries of a given
//! dictionary, covering the sentence exactly with no gaps or overlaps.
//!
//! ## Overview
//!
//! The engine is a prefix dynamic program: for each prefix length it
//! computes the set of all valid segmentations of that prefix, built
//! incrementally from shorter prefixes. The final prefix's set is the
//! complete, duplicate-free answer. Dictionary weights are carried for
//! downstream consumers but never influence enumeration.
//!
//! ## Quick Start
//!
//! ```
//! use lexicut::{segment_all, Dictionary};
//!
//! let dict = Dictionary::from_pairs([
//!     ("just", 1.0),
//!     ("ice", 1.0),
//!     ("justice", 1.0),
//! ]).unwrap();
//!
//! let mut cuts = segment_all("justice", &dict);
//! cuts.sort();
//!
//! assert_eq!(cuts, vec![vec!["just", "ice"], vec!["justice"]]);
//! ```
//!
//! ## Architecture
//!
//! The library is organized into a few small modules:
//!
//! - [`dict`] - Dictionary storage, trie mirror, and file loading
//! - [`segment`] - The prefix-DP segmentation enumerator
//! - [`config`] - Segmenter configuration
//! - [`error`] - Error types
//!
//! Enumeration is synchronous and allocates nothing shared between calls,
//! so independent calls are safe to run on separate threads with no
//! coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dict;
pub mod error;
pub mod segment;

pub use config::SegmenterConfig;
pub use dict::{Dictionary, Trie};
pub use error::{LexicutError, Result};
pub use segment::{segment_all, Segmentation, Segmenter};

//! Exhaustive segmentation of a sentence against a dictionary.

mod enumerator;

pub use enumerator::{segment_all, Segmentation, Segmenter};

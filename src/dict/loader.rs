//! Loading dictionaries from TSV and JSON files.
//!
//! TSV is one `token<TAB>weight` entry per line. Blank lines and lines
//! starting with `#` are skipped. A missing weight field defaults to 1.0.
//! JSON is a single object mapping tokens to weights.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use log::debug;

use crate::error::{LexicutError, Result};

use super::Dictionary;

impl Dictionary {
    /// Loads a TSV dictionary from a file.
    pub fn from_tsv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LexicutError::FileNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let dict = Self::from_tsv_reader(BufReader::new(file))?;
        debug!("loaded {} dictionary entries from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Loads a TSV dictionary from any buffered reader.
    pub fn from_tsv_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dict = Dictionary::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            let (token, weight_field) = match entry.split_once('\t') {
                Some((token, weight)) => (token.trim(), Some(weight.trim())),
                None => (entry, None),
            };
            if token.is_empty() {
                return Err(LexicutError::DictionaryParse {
                    line: index + 1,
                    message: "empty token".to_string(),
                });
            }
            let weight = match weight_field {
                Some(field) if !field.is_empty() => {
                    field.parse::<f64>().map_err(|_| LexicutError::DictionaryParse {
                        line: index + 1,
                        message: format!("invalid weight '{}'", field),
                    })?
                }
                _ => 1.0,
            };
            dict.insert(token, weight)?;
        }
        Ok(dict)
    }

    /// Loads a JSON dictionary from a file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LexicutError::FileNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let dict = Self::from_json_reader(BufReader::new(file))?;
        debug!("loaded {} dictionary entries from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Loads a JSON dictionary from any reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: IndexMap<String, f64> = serde_json::from_reader(reader)?;
        Self::from_pairs(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tsv_basic() {
        let input = "经常\t0.1\n经\t0.05\n有意见\t0.1\n";
        let dict = Dictionary::from_tsv_reader(Cursor::new(input)).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.weight("经常"), Some(0.1));
        assert_eq!(dict.weight("有意见"), Some(0.1));
    }

    #[test]
    fn test_tsv_comments_and_blanks() {
        let input = "# reference dictionary\n\nword\t1.5\n\n# trailing comment\n";
        let dict = Dictionary::from_tsv_reader(Cursor::new(input)).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.weight("word"), Some(1.5));
    }

    #[test]
    fn test_tsv_missing_weight_defaults() {
        let input = "word\nother\t2.0\n";
        let dict = Dictionary::from_tsv_reader(Cursor::new(input)).unwrap();
        assert_eq!(dict.weight("word"), Some(1.0));
        assert_eq!(dict.weight("other"), Some(2.0));
    }

    #[test]
    fn test_tsv_invalid_weight() {
        let input = "word\t1.0\nbad\tnot-a-number\n";
        let err = Dictionary::from_tsv_reader(Cursor::new(input)).unwrap_err();
        match err {
            LexicutError::DictionaryParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_json_basic() {
        let input = r#"{"经常": 0.1, "分歧": 0.2}"#;
        let dict = Dictionary::from_json_reader(Cursor::new(input)).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.weight("分歧"), Some(0.2));
    }

    #[test]
    fn test_json_preserves_entry_order() {
        let input = r#"{"见分歧": 0.05, "分": 0.1, "歧": 0.001}"#;
        let dict = Dictionary::from_json_reader(Cursor::new(input)).unwrap();
        let tokens: Vec<&str> = dict.iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec!["见分歧", "分", "歧"]);
    }

    #[test]
    fn test_json_malformed() {
        let input = r#"{"token": "not a number"}"#;
        assert!(Dictionary::from_json_reader(Cursor::new(input)).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Dictionary::from_tsv_path("/nonexistent/dict.tsv").unwrap_err();
        assert!(matches!(err, LexicutError::FileNotFound(_)));
    }
}

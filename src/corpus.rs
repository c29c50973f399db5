//! Length-bucketed word corpus.
//!
//! A wordlist file holds one `"<length> <word>"` entry per line. Loading is
//! fail-fast: the first malformed line aborts the whole load and no partial
//! corpus is ever returned.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCorpus {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl WordCorpus {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::file(path, e))?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut buckets: BTreeMap<usize, Vec<String>> = BTreeMap::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let (length, word) = parse_entry(&line, i + 1)?;
            buckets.entry(length).or_default().push(word.to_string());
        }

        Ok(Self { buckets })
    }

    /// Distinct length keys in ascending order.
    pub fn lengths(&self) -> Vec<usize> {
        self.buckets.keys().copied().collect()
    }

    pub fn bucket(&self, length: usize) -> Option<&[String]> {
        self.buckets.get(&length).map(Vec::as_slice)
    }

    pub fn buckets(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.buckets.iter().map(|(len, words)| (*len, words.as_slice()))
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

impl FromStr for WordCorpus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

// The key is taken from the line as-is; it is not checked against the word.
fn parse_entry(line: &str, line_no: usize) -> Result<(usize, &str)> {
    let format_error = |reason| Error::Format {
        line: line_no,
        content: line.to_string(),
        reason,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [length, word] = fields.as_slice() else {
        return Err(format_error("expected exactly two fields"));
    };

    let length: usize = length
        .parse()
        .map_err(|_| format_error("length is not an integer"))?;
    if length == 0 {
        return Err(format_error("length must be positive"));
    }

    Ok((length, *word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_example() {
        let corpus: WordCorpus = "3 cat\n3 dog\n5 apple\n".parse().unwrap();

        assert_eq!(corpus.lengths(), vec![3, 5]);
        assert_eq!(corpus.bucket(3).unwrap(), ["cat", "dog"]);
        assert_eq!(corpus.bucket(5).unwrap(), ["apple"]);
        assert_eq!(corpus.bucket(4), None);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.word_count(), 3);
    }

    #[test]
    fn test_malformed_length() {
        let err = "3 cat\nabc dog\n".parse::<WordCorpus>().unwrap_err();
        match err {
            Error::Format { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "abc dog");
            }
            other => panic!("Expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_field_counts() {
        let cases = ["cat", "3", "3 cat dog", "3 cat dog bird", "   ", "\t"];

        for case in cases {
            let input = format!("5 apple\n{}\n3 cat\n", case);
            let result = input.parse::<WordCorpus>();
            assert!(
                matches!(result, Err(ref e) if e.is_format()),
                "Line {:?} should be rejected, got {:?}",
                case,
                result
            );
        }
    }

    #[test]
    fn test_non_positive_length_rejected() {
        for case in ["0 cat", "-3 cat", "+ cat", "3.0 cat"] {
            let result = case.parse::<WordCorpus>();
            assert!(
                matches!(result, Err(ref e) if e.is_format()),
                "Line {:?} should be rejected",
                case
            );
        }
    }

    #[test]
    fn test_empty_lines_skipped() {
        let corpus: WordCorpus = "\n3 cat\n\n5 apple\n\n".parse().unwrap();
        assert_eq!(corpus.word_count(), 2);
    }

    #[test]
    fn test_mixed_whitespace_separators() {
        let corpus: WordCorpus = "3\tcat\n  5   apple  \r\n".parse().unwrap();
        assert_eq!(corpus.bucket(3).unwrap(), ["cat"]);
        assert_eq!(corpus.bucket(5).unwrap(), ["apple"]);
    }

    #[test]
    fn test_key_is_trusted() {
        let corpus: WordCorpus = "4 cat\n".parse().unwrap();
        assert_eq!(corpus.bucket(4).unwrap(), ["cat"]);
        assert_eq!(corpus.bucket(3), None);
    }

    #[test]
    fn test_empty_source() {
        let corpus: WordCorpus = "".parse().unwrap();
        assert!(corpus.is_empty());
        assert_eq!(corpus.word_count(), 0);
    }

    #[test]
    fn test_buckets_never_empty() {
        let corpus: WordCorpus = "3 cat\n7 giraffe\n3 dog\n".parse().unwrap();
        for (len, words) in corpus.buckets() {
            assert!(!words.is_empty(), "Bucket {} is empty", len);
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "5 mango").unwrap();
        writeln!(file, "5 lemon").unwrap();

        let corpus = WordCorpus::load(file.path()).unwrap();
        assert_eq!(corpus.bucket(5).unwrap(), ["mango", "lemon"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordCorpus::load(dir.path().join("missing.lst")).unwrap_err();
        assert!(err.is_io(), "Expected IO error, got {:?}", err);
    }
}

//! Frequency table and CSV round-trip
//!
//! Counts the selected word list and persists the result as the CSV file
//! that connects the analysis pipeline to the word-cloud pipeline.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// CSV header shared by writer and reader
pub const CSV_HEADER: &str = "rank,word,count";

/// Errors raised while reading a frequency CSV back in
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line 1: expected header 'rank,word,count', found '{found}'")]
    BadHeader { found: String },
    #[error("line {line}: malformed row '{row}'")]
    MalformedRow { line: usize, row: String },
    #[error("line {line}: count '{value}' is not an integer")]
    BadCount { line: usize, value: String },
}

/// Word occurrence counts with deterministic iteration order.
///
/// Counting is pure multiset aggregation over exact string equality. The
/// table remembers the first occurrence of each word, so ranking is
/// deterministic: descending count, ties in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Occurrence count per word
    counts: HashMap<String, u64>,
    /// Words in first-occurrence order
    order: Vec<String>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for word in words {
            table.add(word);
        }
        table
    }

    /// Record one occurrence of a word
    pub fn add<S: Into<String>>(&mut self, word: S) {
        let word = word.into();
        match self.counts.get_mut(&word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.clone(), 1);
                self.order.push(word);
            }
        }
    }

    /// Occurrence count of a word, zero if unseen
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of occurrences across all words
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries sorted by descending count, ties in first-occurrence order
    pub fn sorted_entries(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .order
            .iter()
            .map(|word| (word.as_str(), self.counts[word]))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// The first `n` sorted entries
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries = self.sorted_entries();
        entries.truncate(n);
        entries
    }

    /// Write the table as a UTF-8 CSV: header, then one `rank,word,count`
    /// row per distinct word in rank order.
    pub fn save_csv(&self, path: &Path) -> Result<()> {
        let mut out = String::with_capacity(self.len() * 16 + CSV_HEADER.len());
        out.push_str(CSV_HEADER);
        out.push('\n');
        for (rank, (word, count)) in self.sorted_entries().iter().enumerate() {
            out.push_str(&format!("{},{},{}\n", rank + 1, word, count));
        }
        std::fs::write(path, out)
            .with_context(|| format!("Failed to write frequency CSV to {:?}", path))?;
        Ok(())
    }
}

/// Read a frequency CSV back into (word, count) pairs in file order.
///
/// The rank column is parsed past and discarded. A malformed row or a
/// non-integer count is an error; there is no row-level recovery.
pub fn load_csv(path: &Path) -> Result<Vec<(String, u64)>, CsvError> {
    let content = std::fs::read_to_string(path).map_err(|source| CsvError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut lines = content.lines();
    match lines.next() {
        Some(header) if header == CSV_HEADER => {}
        other => {
            return Err(CsvError::BadHeader {
                found: other.unwrap_or("").to_string(),
            })
        }
    }

    let mut frequencies = Vec::new();
    for (i, line) in lines.enumerate() {
        if line.is_empty() {
            continue;
        }
        let lineno = i + 2;

        let mut fields = line.splitn(3, ',');
        let (_rank, word, count) = match (fields.next(), fields.next(), fields.next()) {
            (Some(rank), Some(word), Some(count)) if !word.is_empty() => (rank, word, count),
            _ => {
                return Err(CsvError::MalformedRow {
                    line: lineno,
                    row: line.to_string(),
                })
            }
        };

        let count: u64 = count.parse().map_err(|_| CsvError::BadCount {
            line: lineno,
            value: count.to_string(),
        })?;

        frequencies.push((word.to_string(), count));
    }

    Ok(frequencies)
}

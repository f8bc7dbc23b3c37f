//! Content-word selection policy
//!
//! Consumes the morpheme stream produced by the tokenizer and selects the
//! subset worth counting: content parts of speech, minus non-content noun
//! subtypes, stopwords, and single-character words.

pub mod stopwords;

pub use stopwords::{is_stopword, STOPWORDS};

use crate::tokenizer::Morpheme;
use std::collections::HashSet;

/// Default target POS categories: noun, verb, adjective
pub const DEFAULT_TARGET_POS: &[&str] = &["名詞", "動詞", "形容詞"];

/// Noun subcategories excluded as non-content: non-independent, pronoun, numeral
pub const EXCLUDE_NOUN_DETAIL: &[&str] = &["非自立", "代名詞", "数"];

/// Selects content words from a morpheme stream.
///
/// The filter is a single forward pass with no lookahead. Words shorter
/// than two characters and stopwords are never selected.
#[derive(Debug, Clone)]
pub struct WordFilter {
    /// Coarse POS categories to keep
    target_pos: HashSet<String>,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl WordFilter {
    /// Create a filter with the default target POS set
    pub fn new() -> Self {
        Self::with_target_pos(DEFAULT_TARGET_POS)
    }

    /// Create a filter with a custom target POS set
    pub fn with_target_pos(target_pos: &[&str]) -> Self {
        Self {
            target_pos: target_pos.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Check whether a coarse POS tag is targeted
    pub fn targets(&self, pos: &str) -> bool {
        self.target_pos.contains(pos)
    }

    /// Select the countable words from a morpheme stream, in order.
    ///
    /// The base form is preferred over the surface form when the
    /// dictionary supplied one. Duplicates are retained; aggregation is
    /// the frequency table's job.
    pub fn filter(&self, morphemes: &[Morpheme]) -> Vec<String> {
        let mut words = Vec::new();

        for m in morphemes {
            if !self.targets(&m.pos) {
                continue;
            }

            // Noun-tagged but semantically non-content subtypes
            if m.pos == "名詞" && EXCLUDE_NOUN_DETAIL.contains(&m.pos_detail.as_str()) {
                continue;
            }

            let word = m.normalized();

            if word.chars().count() <= 1 || is_stopword(word) {
                continue;
            }

            words.push(word.to_string());
        }

        words
    }
}

/// Count coarse POS tags over the full (unfiltered) morpheme stream.
///
/// Returns (tag, count) pairs sorted by descending count, ties in
/// first-occurrence order. Used for the analysis epilogue table.
pub fn pos_distribution(morphemes: &[Morpheme]) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for m in morphemes {
        let entry = counts.entry(m.pos.clone()).or_insert_with(|| {
            order.push(m.pos.clone());
            0
        });
        *entry += 1;
    }

    let mut dist: Vec<(String, usize)> = order
        .into_iter()
        .map(|pos| {
            let count = counts[&pos];
            (pos, count)
        })
        .collect();
    dist.sort_by(|a, b| b.1.cmp(&a.1));
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(surface: &str, detail: &str) -> Morpheme {
        Morpheme {
            surface: surface.to_string(),
            base_form: Some(surface.to_string()),
            pos: "名詞".to_string(),
            pos_detail: detail.to_string(),
        }
    }

    fn morpheme(surface: &str, base: Option<&str>, pos: &str, detail: &str) -> Morpheme {
        Morpheme {
            surface: surface.to_string(),
            base_form: base.map(|s| s.to_string()),
            pos: pos.to_string(),
            pos_detail: detail.to_string(),
        }
    }

    #[test]
    fn test_keeps_target_pos_only() {
        let morphemes = vec![
            noun("外交", "一般"),
            morpheme("の", Some("の"), "助詞", ""),
            noun("外交", "一般"),
        ];
        let words = WordFilter::with_target_pos(&["名詞"]).filter(&morphemes);
        assert_eq!(words, vec!["外交", "外交"]);
    }

    #[test]
    fn test_excludes_non_content_noun_subtypes() {
        let morphemes = vec![
            noun("それら", "代名詞"),
            noun("とおり", "非自立"),
            noun("三つ", "数"),
            noun("政策", "一般"),
        ];
        let words = WordFilter::new().filter(&morphemes);
        assert_eq!(words, vec!["政策"]);
    }

    #[test]
    fn test_prefers_base_form() {
        let morphemes = vec![morpheme("食べ", Some("食べる"), "動詞", "自立")];
        let words = WordFilter::new().filter(&morphemes);
        assert_eq!(words, vec!["食べる"]);
    }

    #[test]
    fn test_falls_back_to_surface_without_base_form() {
        let morphemes = vec![morpheme("リスキリング", None, "名詞", "一般")];
        let words = WordFilter::new().filter(&morphemes);
        assert_eq!(words, vec!["リスキリング"]);
    }

    #[test]
    fn test_drops_single_character_words() {
        let morphemes = vec![noun("世", "一般"), noun("世界", "一般")];
        let words = WordFilter::new().filter(&morphemes);
        assert_eq!(words, vec!["世界"]);
    }

    #[test]
    fn test_drops_stopwords() {
        // する passes the POS filter as a verb but is a stopword
        let morphemes = vec![
            morpheme("し", Some("する"), "動詞", "自立"),
            morpheme("推進", Some("推進"), "名詞", "サ変接続"),
        ];
        let words = WordFilter::new().filter(&morphemes);
        assert_eq!(words, vec!["推進"]);
    }

    #[test]
    fn test_empty_stream() {
        assert!(WordFilter::new().filter(&[]).is_empty());
    }

    #[test]
    fn test_never_yields_stopword_or_short_word() {
        let morphemes = vec![
            noun("こと", "一般"),
            noun("年", "接尾"),
            morpheme("ない", Some("ない"), "形容詞", "自立"),
            noun("防衛", "一般"),
        ];
        for word in WordFilter::new().filter(&morphemes) {
            assert!(word.chars().count() > 1);
            assert!(!is_stopword(&word));
        }
    }

    #[test]
    fn test_pos_distribution_counts_everything() {
        let morphemes = vec![
            noun("外交", "一般"),
            morpheme("の", Some("の"), "助詞", ""),
            morpheme("の", Some("の"), "助詞", ""),
            morpheme("進める", Some("進める"), "動詞", "自立"),
        ];
        let dist = pos_distribution(&morphemes);
        assert_eq!(dist[0], ("助詞".to_string(), 2));
        assert_eq!(dist.len(), 3);
    }

    #[test]
    fn test_pos_distribution_tie_order_is_first_occurrence() {
        let morphemes = vec![
            noun("外交", "一般"),
            morpheme("進める", Some("進める"), "動詞", "自立"),
        ];
        let dist = pos_distribution(&morphemes);
        assert_eq!(dist[0].0, "名詞");
        assert_eq!(dist[1].0, "動詞");
    }
}

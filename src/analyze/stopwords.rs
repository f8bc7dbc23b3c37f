//! Fixed Japanese stopword set
//!
//! Common function words, light verbs, and temporal/structural nouns that
//! pass the part-of-speech filter but carry no content on their own.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Words excluded from counting regardless of part of speech
pub const STOPWORDS: &[&str] = &[
    // formal nouns and demonstratives
    "こと", "もの", "ため", "よう", "これ", "それ", "あれ",
    "ここ", "そこ", "あそこ", "どこ", "どれ", "なに", "何",
    // light and auxiliary-like verbs
    "する", "いる", "ある", "なる", "れる", "られる", "せる",
    "できる", "おる", "くる", "来る", "行く", "いく",
    // adnominals and negation stems
    "この", "その", "あの", "どの", "ない", "なく",
    // suffix-like single-ideograph nouns
    "等", "的", "化", "性", "上", "中", "下", "内", "外",
    // counters and document structure
    "年", "月", "日", "号", "第", "章",
    // conjunctions
    "ほか", "また", "および", "かつ", "ただし", "なお", "または",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Check membership in the stopword set
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

//! Text cleaning for morphological analysis
//!
//! Strips everything that is not useful to the tokenizer: digits, Latin
//! letters, and punctuation, then reduces the text to the Hiragana,
//! Katakana, and CJK ideograph blocks plus single-space separators.

use once_cell::sync::Lazy;
use regex::Regex;

/// ASCII and fullwidth digit runs
static DIGIT_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9０-９]+").expect("Invalid regex"));

/// ASCII and fullwidth Latin letter runs
static LATIN_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Zａ-ｚＡ-Ｚ]+").expect("Invalid regex"));

/// Japanese bracket/punctuation and whitespace runs, collapsed to one space
static SEPARATOR_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[（）()【】「」『』・、。：；！？\s]+").expect("Invalid regex"));

/// Anything outside Hiragana, Katakana, CJK ideographs, and whitespace
static NON_JAPANESE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\u{3040}-\u{309F}\u{30A0}-\u{30FF}\u{4E00}-\u{9FFF}\s]")
        .expect("Invalid regex")
});

/// Whitespace runs left behind by symbol removal
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Clean raw extracted text down to Japanese script and spaces.
///
/// Steps are ordered; each operates on the output of the previous one:
///
/// 1. Remove digit runs (ASCII and fullwidth).
/// 2. Remove Latin letter runs (ASCII and fullwidth).
/// 3. Collapse bracket/punctuation/whitespace runs to a single space.
/// 4. Remove every remaining character outside the Hiragana, Katakana,
///    and CJK Unified Ideograph blocks (whitespace survives).
/// 5. Collapse any whitespace run to a single space, so the result is a
///    fixed point of this function.
///
/// Pure and total: empty input yields empty output.
pub fn normalize(raw: &str) -> String {
    let text = DIGIT_RUNS.replace_all(raw, "");
    let text = LATIN_RUNS.replace_all(&text, "");
    let text = SEPARATOR_RUNS.replace_all(&text, " ");
    let text = NON_JAPANESE.replace_all(&text, "");
    SPACE_RUNS.replace_all(&text, " ").into_owned()
}

/// Check whether a cleaned string stays inside the normalized alphabet.
///
/// Exposed for tests and debug assertions on pipeline boundaries.
pub fn is_normalized(text: &str) -> bool {
    text.chars().all(|c| {
        matches!(c,
            '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}')
            || c == ' '
    })
}

//! Filter → count → report pipeline tests
//!
//! Exercises the selection policy and counting stages on hand-built
//! morpheme streams, without a dictionary.

use jpwordfreq::analyze::{is_stopword, WordFilter};
use jpwordfreq::freq::FrequencyTable;
use jpwordfreq::report::render_table;
use jpwordfreq::tokenizer::Morpheme;

fn morpheme(surface: &str, base: &str, pos: &str, detail: &str) -> Morpheme {
    Morpheme {
        surface: surface.to_string(),
        base_form: if base == "*" {
            None
        } else {
            Some(base.to_string())
        },
        pos: pos.to_string(),
        pos_detail: detail.to_string(),
    }
}

#[test]
fn noun_stream_counts_duplicates() {
    let morphemes = vec![
        morpheme("外交", "外交", "名詞", "一般"),
        morpheme("の", "の", "助詞", ""),
        morpheme("外交", "外交", "名詞", "一般"),
    ];

    let words = WordFilter::with_target_pos(&["名詞"]).filter(&morphemes);
    assert_eq!(words, vec!["外交", "外交"]);

    let table = FrequencyTable::from_words(words);
    assert_eq!(table.get("外交"), 2);
    assert_eq!(table.len(), 1);
}

#[test]
fn empty_stream_yields_empty_table_and_renderable_report() {
    let words = WordFilter::new().filter(&[]);
    assert!(words.is_empty());

    let table = FrequencyTable::from_words(words);
    assert!(table.is_empty());

    // Must not divide by zero and must display zero rows
    let rendered = render_table(&table, 30);
    assert!(!rendered.contains('█'));
}

#[test]
fn filter_output_honors_length_and_stopword_invariants() {
    let morphemes = vec![
        morpheme("こと", "こと", "名詞", "非自立"),
        morpheme("年", "年", "名詞", "接尾"),
        morpheme("し", "する", "動詞", "自立"),
        morpheme("安全", "安全", "名詞", "一般"),
        morpheme("保障", "保障", "名詞", "一般"),
        morpheme("高い", "高い", "形容詞", "自立"),
        morpheme("三", "三", "名詞", "数"),
    ];

    let words = WordFilter::new().filter(&morphemes);
    assert_eq!(words, vec!["安全", "保障", "高い"]);
    for word in &words {
        assert!(word.chars().count() > 1);
        assert!(!is_stopword(word));
    }
}

#[test]
fn base_form_sentinel_falls_back_to_surface() {
    let morphemes = vec![morpheme("インバウンド", "*", "名詞", "一般")];
    let words = WordFilter::new().filter(&morphemes);
    assert_eq!(words, vec!["インバウンド"]);
}

#[test]
fn count_then_reexpand_reproduces_filtered_multiset() {
    let morphemes = vec![
        morpheme("協力", "協力", "名詞", "サ変接続"),
        morpheme("支援", "支援", "名詞", "サ変接続"),
        morpheme("協力", "協力", "名詞", "サ変接続"),
        morpheme("進める", "進める", "動詞", "自立"),
        morpheme("協力", "協力", "名詞", "サ変接続"),
    ];

    let words = WordFilter::new().filter(&morphemes);
    let table = FrequencyTable::from_words(words.clone());

    let mut expanded: Vec<String> = Vec::new();
    for (word, count) in table.sorted_entries() {
        for _ in 0..count {
            expanded.push(word.to_string());
        }
    }

    let mut words_sorted = words;
    words_sorted.sort_unstable();
    expanded.sort_unstable();
    assert_eq!(expanded, words_sorted);
}

#[test]
fn ranking_is_descending_with_first_occurrence_ties() {
    let morphemes = vec![
        morpheme("平和", "平和", "名詞", "一般"),
        morpheme("安全", "安全", "名詞", "一般"),
        morpheme("外交", "外交", "名詞", "一般"),
        morpheme("外交", "外交", "名詞", "一般"),
        morpheme("安全", "安全", "名詞", "一般"),
    ];

    let table = FrequencyTable::from_words(WordFilter::new().filter(&morphemes));
    let entries = table.sorted_entries();

    // 安全 and 外交 tie at 2; 安全 was seen first
    assert_eq!(entries[0], ("安全", 2));
    assert_eq!(entries[1], ("外交", 2));
    assert_eq!(entries[2], ("平和", 1));
}

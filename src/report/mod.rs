//! Console frequency report
//!
//! Renders the ranked frequency table as a bar-style text table. Padding
//! is display-width aware so fullwidth Japanese words keep the columns
//! aligned.

use crate::freq::FrequencyTable;

/// Maximum bar length in glyphs
const BAR_WIDTH: u64 = 30;

/// Display column reserved for the word
const WORD_COLUMN: usize = 20;

/// Terminal display width of a string, counting fullwidth characters as
/// two columns.
fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| match c {
            '\u{1100}'..='\u{115F}'
            | '\u{2E80}'..='\u{A4CF}'
            | '\u{AC00}'..='\u{D7A3}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FE30}'..='\u{FE4F}'
            | '\u{FF00}'..='\u{FF60}'
            | '\u{FFE0}'..='\u{FFE6}' => 2,
            _ => 1,
        })
        .sum()
}

/// Pad a string with spaces up to `columns` display columns
fn pad_to(text: &str, columns: usize) -> String {
    let width = display_width(text);
    let padding = columns.saturating_sub(width);
    format!("{}{}", text, " ".repeat(padding))
}

/// Render the top `top_n` entries as a ranked bar table.
///
/// Bar lengths are proportional to the maximum count among the rendered
/// entries: `floor(count / max_count * 30)`. An empty table renders the
/// banner with zero rows; `max_count` defaults to 1 so there is no
/// division by zero.
pub fn render_table(table: &FrequencyTable, top_n: usize) -> String {
    let entries = table.top(top_n);
    let max_count = entries.first().map(|(_, c)| *c).unwrap_or(1).max(1);

    let mut out = String::new();
    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str(&format!("Word frequency (top {})\n", top_n));
    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str(&format!(
        "{}{}{}bar\n",
        pad_to("rank", 6),
        pad_to("word", WORD_COLUMN),
        pad_to("count", 10)
    ));
    out.push_str(&"-".repeat(60));
    out.push('\n');

    for (rank, (word, count)) in entries.iter().enumerate() {
        let bar_length = (count * BAR_WIDTH / max_count) as usize;
        out.push_str(&format!(
            "{}{}{}{}\n",
            pad_to(&(rank + 1).to_string(), 6),
            pad_to(word, WORD_COLUMN),
            pad_to(&count.to_string(), 10),
            "█".repeat(bar_length)
        ));
    }

    out
}

/// Render the coarse-POS distribution epilogue table.
pub fn render_pos_table(distribution: &[(String, usize)], top_n: usize) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str("POS distribution\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str(&format!("{}count\n", pad_to("pos", 15)));
    out.push_str(&"-".repeat(25));
    out.push('\n');

    for (pos, count) in distribution.iter().take(top_n) {
        out.push_str(&format!("{}{}\n", pad_to(pos, 15), count));
    }

    out
}

//! Japanese tokenizer implementation using Lindera
//!
//! Performs morphological analysis with the embedded IPADIC dictionary and
//! exposes each token as a [`Morpheme`] carrying the surface form, the
//! dictionary base form, and the coarse/detailed part-of-speech tags.

use anyhow::Result;
use lindera::{
    dictionary::{load_embedded_dictionary, DictionaryKind},
    mode::Mode,
    segmenter::Segmenter,
    tokenizer::Tokenizer as LinderaTokenizer,
};

/// IPADIC detail index of the first POS subcategory
const DETAIL_POS_SUB: usize = 1;

/// IPADIC detail index of the base (dictionary) form
const DETAIL_BASE_FORM: usize = 6;

/// A single morpheme as reported by the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// Surface form as it appears in the text
    pub surface: String,
    /// Dictionary base form; `None` when the dictionary reports the `*` sentinel
    pub base_form: Option<String>,
    /// Coarse POS tag (名詞, 動詞, ...)
    pub pos: String,
    /// First detailed POS subcategory (一般, 非自立, ...); empty when absent
    pub pos_detail: String,
}

impl Morpheme {
    /// The form used for counting: base form when available, else surface
    pub fn normalized(&self) -> &str {
        self.base_form.as_deref().unwrap_or(&self.surface)
    }
}

/// Japanese text tokenizer using Lindera
pub struct JapaneseTokenizer {
    /// Lindera tokenizer instance
    tokenizer: LinderaTokenizer,
}

impl JapaneseTokenizer {
    /// Create a new Japanese tokenizer with the embedded IPADIC dictionary.
    ///
    /// Dictionary load failure is the one unrecoverable dependency error in
    /// the pipeline and is propagated to the caller.
    pub fn new() -> Result<Self> {
        let dictionary = load_embedded_dictionary(DictionaryKind::IPADIC)?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        let tokenizer = LinderaTokenizer::new(segmenter);

        Ok(Self { tokenizer })
    }

    /// Tokenize a text string into morphemes, in text order.
    ///
    /// Every dictionary token is reported; selection policy lives in
    /// [`crate::analyze::WordFilter`]. Tokens without POS details are
    /// skipped, as are empty inputs.
    pub fn morphemes(&self, text: &str) -> Result<Vec<Morpheme>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut tokens = self.tokenizer.tokenize(text)?;
        let mut result = Vec::new();

        for token in tokens.iter_mut() {
            let details = token.details();

            if details.is_empty() {
                continue;
            }

            let pos = details[0].to_string();
            let pos_detail = details
                .get(DETAIL_POS_SUB)
                .map(|d| d.to_string())
                .unwrap_or_default();

            // In IPADIC, the base form is at index 6; "*" means none
            let base_form = match details.get(DETAIL_BASE_FORM) {
                Some(base) if !base.is_empty() && *base != "*" => Some(base.to_string()),
                _ => None,
            };

            result.push(Morpheme {
                surface: token.surface.to_string(),
                base_form,
                pos,
                pos_detail,
            });
        }

        Ok(result)
    }
}

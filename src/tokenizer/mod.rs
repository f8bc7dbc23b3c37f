//! Japanese text tokenization
//!
//! Wraps the Lindera morphological analyzer behind a small morpheme type
//! so the selection policy can be tested without a dictionary.

pub mod japanese;

pub use japanese::{JapaneseTokenizer, Morpheme};

//! jpwordfreq: Japanese PDF word-frequency analyzer
//!
//! This library extracts Japanese text from PDF reports, tokenizes it into
//! morphemes with an embedded IPADIC dictionary, counts content-word
//! frequencies under a part-of-speech selection policy, and renders a
//! word-cloud image from the resulting frequency table.
//!
//! # Features
//!
//! - Japanese morphological analysis with Lindera (IPADIC)
//! - Part-of-speech and stopword filtering for content words
//! - Frequency counting with deterministic rank order
//! - CSV export/import as the handoff format between the two pipelines
//! - Deterministic word-cloud rendering to PNG
//!
//! # Modules
//!
//! - `config`: Application configuration and Japanese font discovery
//! - `extract`: PDF text extraction
//! - `normalize`: Text cleaning to the Japanese-only alphabet
//! - `tokenizer`: Japanese morphological analysis
//! - `analyze`: Content-word selection policy and POS statistics
//! - `freq`: Frequency table and CSV round-trip
//! - `report`: Console frequency table rendering
//! - `cloud`: Word-cloud layout and rasterization

pub mod analyze;
pub mod cloud;
pub mod config;
pub mod extract;
pub mod freq;
pub mod normalize;
pub mod report;
pub mod tokenizer;

// Re-export commonly used types
pub use analyze::WordFilter;
pub use cloud::CloudConfig;
pub use freq::FrequencyTable;
pub use tokenizer::Morpheme;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Application configuration for jpwordfreq
//!
//! Provides TOML-based configuration with environment variable override
//! support. Priority: CLI args > Environment variables > Config file >
//! Defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input PDF for the analysis pipeline
    #[serde(default = "default_pdf_path")]
    pdf_path: String,

    /// Frequency CSV written by `analyze` and read by `cloud`
    #[serde(default = "default_csv_path")]
    csv_path: String,

    /// Word-cloud PNG written by `cloud`
    #[serde(default = "default_image_path")]
    image_path: String,

    /// Explicit Japanese font file; discovery list is used when unset
    #[serde(default)]
    font_path: Option<String>,

    /// Number of entries in the console ranking
    #[serde(default = "default_top_n")]
    top_n: usize,
}

fn default_pdf_path() -> String {
    "report.pdf".to_string()
}

fn default_csv_path() -> String {
    "word_frequency_results.csv".to_string()
}

fn default_image_path() -> String {
    "wordcloud.png".to_string()
}

fn default_top_n() -> usize {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pdf_path: default_pdf_path(),
            csv_path: default_csv_path(),
            image_path: default_image_path(),
            font_path: None,
            top_n: default_top_n(),
        }
    }
}

impl AppConfig {
    /// Create config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file: {}", e))?;
        Ok(config)
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(pdf) = std::env::var("JPWORDFREQ_PDF") {
            config.pdf_path = pdf;
        }

        if let Ok(csv) = std::env::var("JPWORDFREQ_CSV") {
            config.csv_path = csv;
        }

        if let Ok(image) = std::env::var("JPWORDFREQ_IMAGE") {
            config.image_path = image;
        }

        if let Ok(font) = std::env::var("JPWORDFREQ_FONT") {
            config.font_path = Some(font);
        }

        if let Ok(top_n) = std::env::var("JPWORDFREQ_TOP_N") {
            if let Ok(n) = top_n.parse() {
                config.top_n = n;
            }
        }

        config
    }

    /// Merge with another config (other takes priority for non-default values)
    pub fn merge_with(&self, other: &Self) -> Self {
        Self {
            pdf_path: if other.pdf_path != default_pdf_path() {
                other.pdf_path.clone()
            } else {
                self.pdf_path.clone()
            },
            csv_path: if other.csv_path != default_csv_path() {
                other.csv_path.clone()
            } else {
                self.csv_path.clone()
            },
            image_path: if other.image_path != default_image_path() {
                other.image_path.clone()
            } else {
                self.image_path.clone()
            },
            font_path: other.font_path.clone().or_else(|| self.font_path.clone()),
            top_n: if other.top_n != default_top_n() {
                other.top_n
            } else {
                self.top_n
            },
        }
    }

    /// Override pdf_path
    pub fn with_pdf_path(mut self, path: &str) -> Self {
        self.pdf_path = path.to_string();
        self
    }

    /// Override csv_path
    pub fn with_csv_path(mut self, path: &str) -> Self {
        self.csv_path = path.to_string();
        self
    }

    /// Override image_path
    pub fn with_image_path(mut self, path: &str) -> Self {
        self.image_path = path.to_string();
        self
    }

    /// Override font_path
    pub fn with_font_path(mut self, path: Option<String>) -> Self {
        self.font_path = path.or(self.font_path);
        self
    }

    /// Override top_n
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(anyhow!("top_n must be greater than 0"));
        }
        Ok(())
    }

    // Getters
    pub fn pdf_path(&self) -> &str {
        &self.pdf_path
    }

    pub fn csv_path(&self) -> &str {
        &self.csv_path
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    pub fn font_path(&self) -> Option<&str> {
        self.font_path.as_deref()
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }
}

//! jpwordfreq: Command-line interface for the word-frequency pipelines

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use jpwordfreq::analyze::{pos_distribution, WordFilter};
use jpwordfreq::cloud::{self, CloudConfig};
use jpwordfreq::config::{font_resolver, AppConfig};
use jpwordfreq::freq::{load_csv, FrequencyTable};
use jpwordfreq::normalize::normalize;
use jpwordfreq::report::{render_pos_table, render_table};
use jpwordfreq::tokenizer::JapaneseTokenizer;
use jpwordfreq::extract;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// jpwordfreq: Japanese PDF word-frequency analyzer and word-cloud generator
#[derive(Parser)]
#[command(name = "jpwordfreq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a PDF and write the word-frequency CSV
    Analyze {
        /// Input PDF file
        #[arg(long)]
        pdf: Option<String>,

        /// Output CSV file
        #[arg(short, long)]
        output: Option<String>,

        /// Number of entries in the console ranking
        #[arg(short, long)]
        top_n: Option<usize>,
    },
    /// Render a word-cloud PNG from the word-frequency CSV
    Cloud {
        /// Input CSV file (written by `analyze`)
        #[arg(short, long)]
        input: Option<String>,

        /// Output PNG file
        #[arg(short, long)]
        output: Option<String>,

        /// Japanese font file; the known-font list is searched when omitted
        #[arg(long)]
        font: Option<String>,
    },
}

/// Resolve the effective configuration: CLI > env > file > defaults
fn resolve_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let file_config = match config_path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    let merged = file_config.merge_with(&AppConfig::from_env());
    merged.validate()?;
    Ok(merged)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr, keeping stdout for the report tables
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze { pdf, output, top_n } => {
            let mut config = config;
            if let Some(pdf) = pdf {
                config = config.with_pdf_path(&pdf);
            }
            if let Some(output) = output {
                config = config.with_csv_path(&output);
            }
            if let Some(top_n) = top_n {
                config = config.with_top_n(top_n);
            }
            config.validate()?;
            run_analyze(&config)
        }
        Commands::Cloud {
            input,
            output,
            font,
        } => {
            let mut config = config;
            if let Some(input) = input {
                config = config.with_csv_path(&input);
            }
            if let Some(output) = output {
                config = config.with_image_path(&output);
            }
            config = config.with_font_path(font);
            run_cloud(&config)
        }
    }
}

/// PDF → cleaned text → morphemes → frequency table → console + CSV
fn run_analyze(config: &AppConfig) -> Result<()> {
    let pdf_path = Path::new(config.pdf_path());
    if !pdf_path.exists() {
        return Err(anyhow!("Input PDF not found: {}", pdf_path.display()));
    }

    eprintln!("[1/4] Extracting text from {}...", pdf_path.display());
    let raw_text = extract::extract_text(pdf_path)?;
    eprintln!("      {} characters extracted", raw_text.chars().count());

    eprintln!("[2/4] Cleaning text...");
    let cleaned = normalize(&raw_text);
    eprintln!("      {} characters after cleaning", cleaned.chars().count());

    eprintln!("[3/4] Running morphological analysis...");
    let tokenizer = JapaneseTokenizer::new()?;
    let morphemes = tokenizer.morphemes(&cleaned)?;
    let words = WordFilter::new().filter(&morphemes);
    let unique: HashSet<&String> = words.iter().collect();
    eprintln!("      {} words selected ({} unique)", words.len(), unique.len());

    eprintln!("[4/4] Counting frequencies...");
    let table = FrequencyTable::from_words(words);

    println!("{}", render_table(&table, config.top_n()));

    let csv_path = Path::new(config.csv_path());
    table.save_csv(csv_path)?;
    eprintln!("Results saved to {}", csv_path.display());

    println!("{}", render_pos_table(&pos_distribution(&morphemes), 10));

    Ok(())
}

/// CSV → frequency mapping → font discovery → word-cloud PNG
fn run_cloud(config: &AppConfig) -> Result<()> {
    let csv_path = Path::new(config.csv_path());
    if !csv_path.exists() {
        return Err(anyhow!(
            "Frequency CSV not found: {} (run `jpwordfreq analyze` first)",
            csv_path.display()
        ));
    }

    eprintln!("[1/2] Loading word frequencies from {}...", csv_path.display());
    let frequencies = load_csv(csv_path)?;
    eprintln!("      {} words loaded", frequencies.len());

    println!("Top 10 words:");
    for (rank, (word, count)) in frequencies.iter().take(10).enumerate() {
        println!("{:>3}. {} ({})", rank + 1, word, count);
    }

    let font_path = match config.font_path() {
        Some(path) => PathBuf::from(path),
        None => match font_resolver::find_japanese_font() {
            Some(path) => path,
            None => {
                eprintln!("Warning: no Japanese font found; glyphs cannot be rendered.");
                eprintln!("Pass --font or set font_path in the configuration file.");
                return Err(anyhow!("No usable font"));
            }
        },
    };
    tracing::debug!("using font {}", font_path.display());

    eprintln!("[2/2] Rendering word cloud...");
    let cloud_config = CloudConfig::default();
    let image_path = Path::new(config.image_path());
    cloud::generate(&frequencies, &font_path, image_path, &cloud_config)?;
    eprintln!("Word cloud saved to {}", image_path.display());

    Ok(())
}

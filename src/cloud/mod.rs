//! Word-cloud rendering
//!
//! Turns a frequency mapping into a PNG: deterministic spiral layout
//! (`layout`), viridis palette (`colormap`), and glyph rasterization with
//! `ab_glyph` composited onto an `image` canvas.

pub mod colormap;
pub mod layout;

pub use layout::{compute_layout, Placement};

use ab_glyph::{Font, FontVec, Glyph, PxScale, ScaleFont};
use anyhow::{anyhow, Context, Result};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Word-cloud rendering configuration
///
/// Defaults: 1200×800 white canvas, at most 100 words, font sizes
/// between 10 and 150 px, 70% horizontal words, seeded deterministic
/// layout.
#[derive(Debug, Clone)]
pub struct CloudConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Background color
    pub background: [u8; 3],
    /// Maximum number of words drawn
    pub max_words: usize,
    /// Smallest font size before a word is dropped
    pub min_font_size: f32,
    /// Font size of the most frequent word
    pub max_font_size: f32,
    /// Fraction of words laid out horizontally (0.0 to 1.0)
    pub prefer_horizontal: f32,
    /// Exponent relating normalized frequency to font size
    pub relative_scaling: f32,
    /// Seed for the deterministic layout generator
    pub seed: u64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            background: [255, 255, 255],
            max_words: 100,
            min_font_size: 10.0,
            max_font_size: 150.0,
            prefer_horizontal: 0.7,
            relative_scaling: 0.5,
            seed: 42,
        }
    }
}

impl CloudConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the maximum word count
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Set the layout seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Load a font file (.ttf or .ttc; collections use face index 0)
pub fn load_font(path: &Path) -> Result<FontVec> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read font file: {}", path.display()))?;
    FontVec::try_from_vec_and_index(bytes, 0)
        .map_err(|_| anyhow!("Failed to parse font file: {}", path.display()))
}

/// Pixel extent of a word laid out horizontally at a font size
fn measure(font: &FontVec, word: &str, size: f32) -> (u32, u32) {
    let scaled = font.as_scaled(PxScale::from(size));
    let width: f32 = word
        .chars()
        .map(|c| scaled.h_advance(scaled.glyph_id(c)))
        .sum();
    (width.ceil().max(1.0) as u32, scaled.height().ceil().max(1.0) as u32)
}

/// Rasterize a word into a coverage mask of the measured extent
fn rasterize(font: &FontVec, word: &str, size: f32) -> (Vec<f32>, u32, u32) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let (w, h) = measure(font, word, size);
    let mut mask = vec![0.0f32; (w * h) as usize];

    let ascent = scaled.ascent();
    let mut caret = 0.0f32;
    for c in word.chars() {
        let gid = scaled.glyph_id(c);
        let glyph: Glyph = gid.with_scale_and_position(scale, ab_glyph::point(caret, ascent));
        caret += scaled.h_advance(gid);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
                    let idx = (y as u32 * w + x as u32) as usize;
                    mask[idx] = mask[idx].max(coverage);
                }
            });
        }
    }

    (mask, w, h)
}

/// Composite a coverage mask onto the canvas, rotating 90° for vertical
/// placements
fn blit(canvas: &mut RgbaImage, placement: &Placement, mask: &[f32], mw: u32, mh: u32) {
    let [r, g, b] = placement.color;

    for row in 0..mh {
        for col in 0..mw {
            let coverage = mask[(row * mw + col) as usize];
            if coverage <= 0.0 {
                continue;
            }

            let (dx, dy) = if placement.horizontal {
                (placement.x + col, placement.y + row)
            } else {
                // 90° clockwise: text reads top to bottom
                (placement.x + (mh - 1 - row), placement.y + col)
            };
            if dx >= canvas.width() || dy >= canvas.height() {
                continue;
            }

            let pixel = canvas.get_pixel_mut(dx, dy);
            for (channel, target) in pixel.0.iter_mut().take(3).zip([r, g, b]) {
                let blended =
                    target as f32 * coverage + *channel as f32 * (1.0 - coverage);
                *channel = blended.round() as u8;
            }
        }
    }
}

/// Render a word cloud for (word, count) pairs sorted by descending count.
///
/// The layout and every per-word choice derive from `config.seed`, so the
/// output image is identical across runs for the same input.
pub fn render(frequencies: &[(String, u64)], font: &FontVec, config: &CloudConfig) -> RgbaImage {
    let [r, g, b] = config.background;
    let mut canvas = RgbaImage::from_pixel(config.width, config.height, Rgba([r, g, b, 255]));

    let placements = compute_layout(frequencies, config, |word, size| measure(font, word, size));
    tracing::debug!("placed {} of {} words", placements.len(), frequencies.len());

    for placement in &placements {
        let (mask, mw, mh) = rasterize(font, &placement.word, placement.font_size);
        blit(&mut canvas, placement, &mask, mw, mh);
    }

    canvas
}

/// Render and save a word cloud as PNG.
pub fn generate(
    frequencies: &[(String, u64)],
    font_path: &Path,
    output: &Path,
    config: &CloudConfig,
) -> Result<()> {
    let font = load_font(font_path)?;
    let canvas = render(frequencies, &font, config);
    canvas
        .save(output)
        .with_context(|| format!("Failed to save word cloud to {}", output.display()))?;
    Ok(())
}

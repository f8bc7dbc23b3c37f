//! Deterministic word-cloud layout
//!
//! Places words on an archimedean spiral from the canvas center, largest
//! first, with rectangle collision against everything already placed.
//! All randomness (orientation, color, spiral start angle) comes from a
//! seeded generator, so a given input and configuration always produce
//! the same layout.

use super::colormap::VIRIDIS;
use super::CloudConfig;

/// Radial growth per radian of the placement spiral, in pixels
const SPIRAL_PITCH: f32 = 1.0;

/// Angular step between candidate positions, in radians
const SPIRAL_STEP: f32 = 0.1;

/// Shrink factor applied when a word finds no free spot at its size
const SHRINK_FACTOR: f32 = 0.9;

/// Seeded deterministic generator (splitmix64)
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        (z ^ (z >> 31)) as u32
    }

    /// Uniform value in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Axis-aligned bounding box of a placed word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// A word with its resolved position, size, orientation, and color
#[derive(Debug, Clone)]
pub struct Placement {
    pub word: String,
    pub count: u64,
    /// Top-left corner of the bounding box
    pub x: u32,
    pub y: u32,
    pub font_size: f32,
    pub horizontal: bool,
    pub color: [u8; 3],
}

/// Font size interpolated between the configured bounds.
///
/// The normalized count is raised to the relative-scaling exponent, so
/// mid-frequency words stay visible instead of collapsing toward the
/// minimum size.
pub fn font_size_for(count: u64, max_count: u64, config: &CloudConfig) -> f32 {
    let normalized = count as f32 / max_count.max(1) as f32;
    let scaled = normalized.powf(config.relative_scaling);
    config.min_font_size + (config.max_font_size - config.min_font_size) * scaled
}

/// Compute placements for the given (word, count) pairs.
///
/// `frequencies` must be sorted by descending count; at most
/// `config.max_words` entries are considered. `measure` reports the
/// horizontal pixel extent of a word at a font size. A word whose
/// shrink loop falls below the minimum font size is dropped.
pub fn compute_layout<F>(
    frequencies: &[(String, u64)],
    config: &CloudConfig,
    mut measure: F,
) -> Vec<Placement>
where
    F: FnMut(&str, f32) -> (u32, u32),
{
    let mut rng = SeededRng::new(config.seed);
    let max_count = frequencies.first().map(|&(_, c)| c).unwrap_or(1).max(1);

    let mut occupied: Vec<Rect> = Vec::new();
    let mut placements = Vec::new();

    for (word, count) in frequencies.iter().take(config.max_words) {
        let horizontal = rng.next_f32() < config.prefer_horizontal;
        let color = VIRIDIS[rng.next_u32() as usize % VIRIDIS.len()];
        let start_angle = rng.next_f32() * std::f32::consts::TAU;

        let mut size = font_size_for(*count, max_count, config);
        loop {
            let (tw, th) = measure(word, size);
            let (w, h) = if horizontal { (tw, th) } else { (th, tw) };

            if let Some(rect) = find_spot(w, h, start_angle, config, &occupied) {
                occupied.push(rect);
                placements.push(Placement {
                    word: word.clone(),
                    count: *count,
                    x: rect.x,
                    y: rect.y,
                    font_size: size,
                    horizontal,
                    color,
                });
                break;
            }

            size *= SHRINK_FACTOR;
            if size < config.min_font_size {
                tracing::debug!("no spot for '{}', dropped", word);
                break;
            }
        }
    }

    placements
}

/// Walk the spiral until a free, in-bounds spot fits a w×h box
fn find_spot(w: u32, h: u32, start_angle: f32, config: &CloudConfig, occupied: &[Rect]) -> Option<Rect> {
    if w == 0 || h == 0 || w > config.width || h > config.height {
        return None;
    }

    let cx = config.width as f32 / 2.0;
    let cy = config.height as f32 / 2.0;
    let max_radius = (cx * cx + cy * cy).sqrt();
    let max_t = max_radius / SPIRAL_PITCH;

    let mut t = 0.0f32;
    while t <= max_t {
        let radius = SPIRAL_PITCH * t;
        let angle = start_angle + t;
        let x = cx + radius * angle.cos() - w as f32 / 2.0;
        let y = cy + radius * angle.sin() - h as f32 / 2.0;
        t += SPIRAL_STEP;

        if x < 0.0 || y < 0.0 {
            continue;
        }
        let rect = Rect {
            x: x as u32,
            y: y as u32,
            w,
            h,
        };
        if rect.x + rect.w > config.width || rect.y + rect.h > config.height {
            continue;
        }

        if !occupied.iter().any(|r| r.intersects(&rect)) {
            return Some(rect);
        }
    }

    None
}

//! Japanese font discovery
//!
//! Best-effort search over a fixed, ordered list of font file locations
//! known to carry CJK glyphs. The list is configuration data; the first
//! path that exists wins. Not finding a font is a degraded mode, not an
//! error.

use std::path::{Path, PathBuf};

/// Candidate font paths in priority order, per OS and distribution
pub const FONT_CANDIDATES: &[&str] = &[
    // ChromeOS / Linux (Noto CJK fonts)
    "/usr/share/fonts/chromeos/notocjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/chromeos/notocjk/NotoSansCJK-Bold.ttc",
    "/usr/share/fonts/chromeos/notocjk/NotoSansCJK-Light.ttc",
    // Linux (Noto fonts)
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
    // Linux (IPA fonts)
    "/usr/share/fonts/ipa-gothic/ipag.ttf",
    "/usr/share/fonts/truetype/ipa-gothic/ipag.ttf",
    "/usr/share/fonts/opentype/ipafont-gothic/ipag.ttf",
    "/usr/share/fonts/ipa-mincho/ipam.ttf",
    // Linux (Takao fonts)
    "/usr/share/fonts/truetype/takao-gothic/TakaoGothic.ttf",
    // Linux (VL Gothic)
    "/usr/share/fonts/truetype/vlgothic/VL-Gothic-Regular.ttf",
    // Ubuntu/Debian
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
    // macOS
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    // Windows
    "C:/Windows/Fonts/msgothic.ttc",
    "C:/Windows/Fonts/meiryo.ttc",
];

/// First existing path from an ordered candidate list
pub fn first_existing<I, P>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    candidates
        .into_iter()
        .map(|p| p.as_ref().to_path_buf())
        .find(|p| p.exists())
}

/// Find a usable Japanese-capable font on this machine.
///
/// Returns the first candidate that exists, or `None` when the machine
/// carries none of the known fonts.
pub fn find_japanese_font() -> Option<PathBuf> {
    first_existing(FONT_CANDIDATES.iter().map(Path::new))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_existing_picks_first_hit() {
        let dir = TempDir::new().unwrap();
        let present_a = dir.path().join("a.ttf");
        let present_b = dir.path().join("b.ttf");
        std::fs::write(&present_a, b"font").unwrap();
        std::fs::write(&present_b, b"font").unwrap();

        let missing = dir.path().join("missing.ttf");
        let found = first_existing([missing.clone(), present_a.clone(), present_b]);
        assert_eq!(found, Some(present_a));
    }

    #[test]
    fn test_first_existing_none_when_all_missing() {
        let dir = TempDir::new().unwrap();
        let found = first_existing([dir.path().join("x.ttf"), dir.path().join("y.ttf")]);
        assert_eq!(found, None);
    }

    #[test]
    fn test_candidate_list_is_nonempty() {
        assert!(!FONT_CANDIDATES.is_empty());
    }
}

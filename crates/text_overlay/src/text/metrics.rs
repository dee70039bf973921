//! Font metrics
//!
//! Width measurement and line wrapping for labels. The host engine normally
//! supplies its own implementation; two are bundled:
//!
//! - [`BitmapFontMetrics`]: the classic 8x8 bitmap game font
//! - [`TrueTypeMetrics`]: any TrueType/OpenType font through `fontdue`

use std::collections::HashMap;

use fontdue::{Font, FontSettings};

use super::formatting::{glyphs, TextStyle};
use super::wrap;

/// Line height of the game font in pixels, spacing included
pub const FONT_HEIGHT: i32 = 9;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur during font operations
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to load font from file or data
    #[error("Failed to load font: {0}")]
    Load(String),
}

/// Measurement and wrapping service used by labels
pub trait FontMetrics: Send + Sync {
    /// Width of `text` in pixels, formatting codes excluded
    fn string_width(&self, text: &str) -> i32;

    /// Split `text` into lines no wider than `width`
    ///
    /// The default is the greedy wrapper in [`wrap`], driven by
    /// [`string_width`](Self::string_width).
    fn wrap_to_width(&self, text: &str, width: i32) -> Vec<String> {
        wrap::wrap_to_width(text, width, |line| self.string_width(line))
    }
}

/// Metrics of the classic bitmap game font
///
/// Glyph advances include the one pixel gap after each glyph. Bold glyphs
/// are one pixel wider. Characters outside the table use the default
/// advance of 6.
#[derive(Debug, Clone, Default)]
pub struct BitmapFontMetrics {
    overrides: HashMap<char, i32>,
}

impl BitmapFontMetrics {
    /// Default advance for glyphs not in the table
    pub const DEFAULT_ADVANCE: i32 = 6;

    /// Create metrics with the stock glyph table
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the advance of one glyph (resource packs change a few)
    pub fn with_glyph_width(mut self, c: char, advance: i32) -> Self {
        self.overrides.insert(c, advance);
        self
    }

    /// Advance of a single glyph, ignoring style
    pub fn char_width(&self, c: char) -> i32 {
        if let Some(&advance) = self.overrides.get(&c) {
            return advance;
        }
        match c {
            '!' | '\'' | ',' | '.' | ':' | ';' | 'i' | '|' => 2,
            '`' | 'l' => 3,
            ' ' | 'I' | '[' | ']' | 't' => 4,
            '"' | '(' | ')' | '*' | '<' | '>' | 'f' | 'k' | '{' | '}' => 5,
            '@' | '~' => 7,
            '\n' => 0,
            _ => Self::DEFAULT_ADVANCE,
        }
    }
}

impl FontMetrics for BitmapFontMetrics {
    fn string_width(&self, text: &str) -> i32 {
        glyphs(text)
            .map(|(c, style)| {
                let advance = self.char_width(c);
                if style.contains(TextStyle::BOLD) && advance > 0 {
                    advance + 1
                } else {
                    advance
                }
            })
            .sum()
    }
}

/// Metrics taken from a TrueType/OpenType font
///
/// Widths are the sum of glyph advances at `px_size`, rounded once at the end.
pub struct TrueTypeMetrics {
    font: Font,
    px_size: f32,
}

impl TrueTypeMetrics {
    /// Load metrics from raw font bytes
    ///
    /// # Arguments
    ///
    /// * `font_data` - Raw font file bytes (TTF or OTF format)
    /// * `px_size` - Size in pixels to measure at
    pub fn new(font_data: &[u8], px_size: f32) -> FontResult<Self> {
        let font = Font::from_bytes(font_data, FontSettings::default())
            .map_err(|e| FontError::Load(format!("fontdue error: {e}")))?;

        log::info!("Loaded font metrics at {px_size}px size");

        Ok(Self { font, px_size })
    }

    /// Load metrics from a font file on disk
    pub fn from_file(path: impl AsRef<std::path::Path>, px_size: f32) -> FontResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| FontError::Load(format!("{}: {e}", path.display())))?;
        Self::new(&data, px_size)
    }

    /// Pixel size used for measurement
    pub fn px_size(&self) -> f32 {
        self.px_size
    }
}

impl FontMetrics for TrueTypeMetrics {
    #[allow(clippy::cast_possible_truncation)]
    fn string_width(&self, text: &str) -> i32 {
        let width: f32 = glyphs(text)
            .map(|(c, _)| self.font.metrics(c, self.px_size).advance_width)
            .sum();
        width.round() as i32
    }
}

impl std::fmt::Debug for TrueTypeMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrueTypeMetrics")
            .field("px_size", &self.px_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_widths() {
        let metrics = BitmapFontMetrics::new();
        assert_eq!(metrics.string_width(""), 0);
        assert_eq!(metrics.string_width("Hello"), 6 + 6 + 3 + 3 + 6);
        assert_eq!(metrics.string_width("a b"), 6 + 4 + 6);
        assert_eq!(metrics.string_width("!i"), 4);
    }

    #[test]
    fn test_codes_have_no_width() {
        let metrics = BitmapFontMetrics::new();
        assert_eq!(metrics.string_width("§aHello"), metrics.string_width("Hello"));
    }

    #[test]
    fn test_bold_adds_a_pixel() {
        let metrics = BitmapFontMetrics::new();
        assert_eq!(metrics.string_width("§lab"), 14);
        assert_eq!(metrics.string_width("§la§cb"), 13);
        assert_eq!(metrics.string_width("§l b"), 5 + 7);
    }

    #[test]
    fn test_glyph_override() {
        let metrics = BitmapFontMetrics::new().with_glyph_width('a', 10);
        assert_eq!(metrics.string_width("aa"), 20);
        assert_eq!(metrics.char_width('b'), 6);
    }

    #[test]
    fn test_default_wrap_uses_measured_width() {
        let metrics = BitmapFontMetrics::new();
        // "aaa" is 18 wide, the space 4
        assert_eq!(metrics.wrap_to_width("aaa aaa", 30), vec!["aaa", "aaa"]);
        assert_eq!(metrics.wrap_to_width("aaa aaa", 40), vec!["aaa aaa"]);
        assert_eq!(metrics.wrap_to_width("aaa aaa", 0), vec!["aaa aaa"]);
    }

    #[test]
    fn test_invalid_font_data() {
        let result = TrueTypeMetrics::new(&[0, 1, 2, 3], 16.0);
        assert!(matches!(result, Err(FontError::Load(_))));
    }

    #[test]
    fn test_missing_font_file() {
        let result = TrueTypeMetrics::from_file("/no/such/font.ttf", 16.0);
        assert!(matches!(result, Err(FontError::Load(_))));
    }

    const MONO_FONT: &[u8] = include_bytes!("../../resources/fonts/DejaVuSansMono.ttf");

    fn mono() -> TrueTypeMetrics {
        TrueTypeMetrics::new(MONO_FONT, 16.0).unwrap()
    }

    #[test]
    fn test_truetype_widths_grow_with_text() {
        let metrics = mono();
        assert_eq!(metrics.px_size(), 16.0);
        assert_eq!(metrics.string_width(""), 0);

        let hi = metrics.string_width("Hi");
        let hi_there = metrics.string_width("Hi there");
        assert!(hi > 0);
        assert!(hi_there > hi);
    }

    #[test]
    fn test_truetype_skips_codes() {
        let metrics = mono();
        assert_eq!(metrics.string_width("§aHi"), metrics.string_width("Hi"));
        assert_eq!(metrics.string_width("§lH§ri"), metrics.string_width("Hi"));
    }

    #[test]
    fn test_truetype_wrapping() {
        let metrics = mono();
        // Monospace glyphs are a bit under 10px at 16px
        assert_eq!(metrics.wrap_to_width("Hi there", 50), vec!["Hi", "there"]);
        assert_eq!(metrics.wrap_to_width("Hi there", 200), vec!["Hi there"]);
    }

    #[test]
    fn test_truetype_from_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/fonts/DejaVuSansMono.ttf");
        let metrics = TrueTypeMetrics::from_file(path, 16.0).unwrap();
        assert_eq!(metrics.string_width("Hi"), mono().string_width("Hi"));
    }
}

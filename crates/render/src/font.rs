//! Font rendering
//!
//! Text rendering using fontdue.

use std::path::Path;

use fontdue::{Font, FontSettings};
use rustc_hash::FxHashMap;

use crate::error::{RenderError, RenderResult};

/// Fonts tried in order by [`FontCache::from_system`]
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Cache for rendered glyphs
pub struct FontCache {
    font: Font,
    glyph_cache: FxHashMap<GlyphKey, GlyphData>,
}

/// Key for cached glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GlyphKey {
    character: char,
    size_tenths: u32, // Font size * 10 to avoid float hashing
}

/// Cached glyph bitmap data
#[derive(Debug, Clone)]
pub struct GlyphData {
    pub width: u32,
    pub height: u32,
    pub bitmap: Vec<u8>,
    pub advance_width: f32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl FontCache {
    /// Create a font cache from font data
    pub fn from_bytes(data: &[u8]) -> RenderResult<Self> {
        let font = Font::from_bytes(data, FontSettings::default()).map_err(RenderError::FontParse)?;

        Ok(Self {
            font,
            glyph_cache: FxHashMap::default(),
        })
    }

    /// Load a font file from disk
    pub fn from_file(path: &Path) -> RenderResult<Self> {
        let data = std::fs::read(path).map_err(|source| RenderError::FontIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_bytes(&data)
    }

    /// Load the first usable font among the usual system locations
    pub fn from_system() -> RenderResult<Self> {
        Self::from_candidates(SYSTEM_FONT_PATHS.iter().map(Path::new))
    }

    fn from_candidates<'a>(paths: impl IntoIterator<Item = &'a Path>) -> RenderResult<Self> {
        for path in paths {
            match Self::from_file(path) {
                Ok(cache) => {
                    log::info!("Loaded font {}", path.display());
                    return Ok(cache);
                }
                Err(e) => log::trace!("Skipping font candidate: {}", e),
            }
        }
        Err(RenderError::NoFont)
    }

    /// Rasterize a character at a given size
    pub fn rasterize(&mut self, c: char, size: f32) -> &GlyphData {
        let key = GlyphKey {
            character: c,
            size_tenths: (size * 10.0) as u32,
        };

        let font = &self.font;
        self.glyph_cache.entry(key).or_insert_with(|| {
            let (metrics, bitmap) = font.rasterize(c, size);
            GlyphData {
                width: metrics.width as u32,
                height: metrics.height as u32,
                bitmap,
                advance_width: metrics.advance_width,
                offset_x: metrics.xmin,
                offset_y: metrics.ymin,
            }
        })
    }

    /// Measure the width of a string
    pub fn measure_text(&mut self, text: &str, size: f32) -> f32 {
        text.chars()
            .map(|c| self.rasterize(c, size).advance_width)
            .sum()
    }

    /// Get the ascent for a font size
    pub fn ascent(&self, size: f32) -> f32 {
        let metrics = self.font.horizontal_line_metrics(size);
        match metrics {
            Some(m) => m.ascent,
            None => size * 0.8,
        }
    }
}

//! Bitmap font: a 16x16 grid of Latin-1 glyphs with per-glyph widths

use crate::render::{Texture, TextureId};

/// Vertical travel of bouncy text, in pixels.
pub const BOUNCE_AMP: i32 = 2;
/// Number of characters one bounce wave spans.
pub const BOUNCE_LEN: u32 = 10;
/// Bounces per second.
pub const BOUNCE_SPEED: u32 = 3;

const GLYPHS: usize = 256;
const GRID: i32 = 16;

#[derive(Debug, Clone)]
pub struct Font {
    glyphs: Vec<Texture>,
}

impl Font {
    /// Slices `atlas` into glyphs. Each grid row packs its glyphs from the left
    /// using the widths in `widths`; rows are `atlas.height / 16` pixels tall.
    pub fn from_atlas(atlas: Texture, widths: &[u8; GLYPHS]) -> Self {
        let row_height = atlas.height / GRID;
        let mut glyphs = Vec::with_capacity(GLYPHS);
        for row in 0..GRID {
            let mut x = 0;
            for col in 0..GRID {
                let width = i32::from(widths[(row * GRID + col) as usize]);
                glyphs.push(atlas.region(x, row * row_height, width, row_height));
                x += width;
            }
        }
        Self { glyphs }
    }

    /// Every glyph the same size, drawn as solid quads.
    pub fn monospace(width: i32, height: i32) -> Self {
        Self {
            glyphs: vec![Texture::full(TextureId::WHITE, width, height); GLYPHS],
        }
    }

    /// Glyph for a Latin-1 character. Anything outside Latin-1 renders as `?`.
    pub fn glyph(&self, c: char) -> &Texture {
        let index = u32::from(c);
        let index = if index < GLYPHS as u32 { index } else { u32::from('?') };
        &self.glyphs[index as usize]
    }

    pub fn text_width(&self, text: &str) -> i32 {
        text.chars().map(|c| self.glyph(c).width).sum()
    }

    /// Line height, taken from the glyph for `a`.
    pub fn height(&self) -> i32 {
        self.glyph('a').height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atlas_rows_pack_from_left() {
        let mut widths = [8u8; GLYPHS];
        widths[usize::from(b'A')] = 12;
        let font = Font::from_atlas(Texture::full(TextureId(7), 256, 256), &widths);

        // 'A' is 0x41: row 4, column 1
        let a = font.glyph('A');
        assert_eq!(a.width, 12);
        assert_eq!(a.height, 16);
        assert_eq!(a.u1, 8.0 / 256.0);
        assert_eq!(a.v1, 64.0 / 256.0);
        let b = font.glyph('B');
        assert_eq!(b.u1, 20.0 / 256.0);
    }

    #[test]
    fn test_text_width_and_height() {
        let font = Font::monospace(8, 16);
        assert_eq!(font.text_width("Level 1"), 56);
        assert_eq!(font.text_width(""), 0);
        assert_eq!(font.height(), 16);
    }

    #[test]
    fn test_latin1_arrows_and_fallback() {
        let mut widths = [1u8; GLYPHS];
        widths[0xab] = 9;
        widths[usize::from(b'?')] = 5;
        let font = Font::from_atlas(Texture::full(TextureId(1), 256, 256), &widths);
        assert_eq!(font.text_width("\u{ab}"), 9);
        assert_eq!(font.text_width("\u{2014}"), 5);
    }
}

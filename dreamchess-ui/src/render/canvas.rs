//! Immediate-mode drawing helpers over a `RenderList`

use crate::core::context::Color;
use crate::render::{Font, RenderList, Texture, BOUNCE_AMP, BOUNCE_LEN, BOUNCE_SPEED};

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;

/// Per-frame drawing surface handed to widgets.
///
/// Coordinates are 640x480 with the origin in the bottom-left corner. `ticks`
/// is the frame's timestamp in milliseconds and drives every animation.
pub struct Canvas<'a> {
    list: &'a mut RenderList,
    font: &'a Font,
    ticks: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(list: &'a mut RenderList, font: &'a Font, ticks: u32) -> Self {
        Self { list, font, ticks }
    }

    pub fn font(&self) -> &Font {
        self.font
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Solid quad.
    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.list.rect(x as f32, y as f32, width as f32, height as f32, color);
    }

    /// Textured quad, tinted by `color`.
    pub fn texture(&mut self, texture: &Texture, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.list.image(x, y, width, height, *texture, color);
    }

    /// Text with its lower-left corner at `(x, y)`.
    pub fn text(&mut self, x: i32, y: i32, text: &str, scale: f32, color: Color) {
        self.list.text(x as f32, y as f32, text.to_string(), scale, color);
    }

    /// Text with its lower-right corner at `(x, y)`.
    pub fn text_right(&mut self, x: i32, y: i32, text: &str, scale: f32, color: Color) {
        let width = self.font.text_width(text);
        self.text(x - width, y, text, scale, color);
    }

    /// Text whose characters ride a wave over time. Each character is emitted
    /// separately with its own vertical offset.
    pub fn text_bouncy(&mut self, x: i32, y: i32, text: &str, scale: f32, color: Color) {
        let mut x = x as f32;
        let mut ticks = self.ticks;
        let mut buf = [0u8; 4];
        for c in text.chars() {
            let offset = bounce_offset(ticks);
            self.list.text(x, y as f32 + offset, c.encode_utf8(&mut buf).to_string(), scale, color);
            x += self.font.glyph(c).width as f32 * scale;
            ticks = ticks.wrapping_add(1000 / BOUNCE_SPEED / BOUNCE_LEN);
        }
    }
}

/// Vertical offset of a bouncing character at time `ticks`, between 0 and
/// `BOUNCE_AMP + 1`.
pub fn bounce_offset(ticks: u32) -> f32 {
    let period = 1000 / BOUNCE_SPEED;
    let phase = (ticks % period) as f32 / period as f32;
    let amp = (BOUNCE_AMP + 1) as f32;
    if phase < 0.5 {
        phase * 2.0 * amp
    } else {
        (1.0 - phase) * 2.0 * amp
    }
}

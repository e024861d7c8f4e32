//! Render primitives

use crate::core::context::Color;
use crate::render::Texture;

/// A drawable primitive, in 640x480 screen space with the origin bottom-left.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        scale: f32,
        color: Color,
    },
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        texture: Texture,
        color: Color,
    },
}

/// Render command list
#[derive(Debug, Default)]
pub struct RenderList {
    pub primitives: Vec<Primitive>,
}

impl RenderList {
    pub fn new() -> Self {
        Self { primitives: Vec::new() }
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.primitives.push(Primitive::Rect {
            x, y, width: w, height: h, color
        });
    }

    pub fn text(&mut self, x: f32, y: f32, text: String, scale: f32, color: Color) {
        self.primitives.push(Primitive::Text { x, y, text, scale, color });
    }

    pub fn image(&mut self, x: f32, y: f32, w: f32, h: f32, texture: Texture, color: Color) {
        self.primitives.push(Primitive::Image {
            x, y, width: w, height: h, texture, color
        });
    }

    /// Text runs in draw order, for inspecting what ended up on screen.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

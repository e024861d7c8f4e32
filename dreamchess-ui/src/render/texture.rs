//! Texture handles and sub-rectangles

use image::RgbaImage;

/// Renderer-side texture handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

impl TextureId {
    /// A 1x1 opaque white texture every renderer provides. Untextured quads use it.
    pub const WHITE: TextureId = TextureId(0);
}

/// A rectangle of a texture plus the size it is drawn at by default.
///
/// `(u1, v1)` is the top-left corner in texture space, `(u2, v2)` the
/// bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
    pub id: TextureId,
    pub u1: f32,
    pub v1: f32,
    pub u2: f32,
    pub v2: f32,
    pub width: i32,
    pub height: i32,
}

impl Texture {
    /// The whole of a texture of the given pixel size.
    pub fn full(id: TextureId, width: i32, height: i32) -> Self {
        Self {
            id,
            u1: 0.0,
            v1: 0.0,
            u2: 1.0,
            v2: 1.0,
            width,
            height,
        }
    }

    /// Plain white quad of the given size.
    pub fn blank(width: i32, height: i32) -> Self {
        Self::full(TextureId::WHITE, width, height)
    }

    /// A pixel rectangle of this texture, which must span the whole image.
    pub fn region(&self, x: i32, y: i32, width: i32, height: i32) -> Self {
        let tw = self.width.max(1) as f32;
        let th = self.height.max(1) as f32;
        Self {
            id: self.id,
            u1: x as f32 / tw,
            v1: y as f32 / th,
            u2: (x + width) as f32 / tw,
            v2: (y + height) as f32 / th,
            width,
            height,
        }
    }

    /// Same texture coordinates, different default draw size.
    pub fn sized(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Something that can turn decoded images into textures.
pub trait TextureUpload {
    fn upload(&mut self, image: &RgbaImage) -> TextureId;
    fn release(&mut self, id: TextureId);
}

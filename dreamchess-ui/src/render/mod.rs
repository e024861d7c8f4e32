//! 2D overlay rendering: draw lists, bitmap text and the wgpu backend

mod canvas;
mod primitives;
mod font;
mod texture;
mod gpu;

pub use canvas::*;
pub use primitives::*;
pub use font::*;
pub use texture::*;
pub use gpu::*;

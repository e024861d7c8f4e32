//! Built-in widgets

mod container;
mod text;
mod button;
mod input;
mod image;
mod option;

pub use container::*;
pub use text::*;
pub use button::*;
pub use input::*;
pub use self::image::*;
pub use option::*;

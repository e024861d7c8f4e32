//! DreamChess UI - widgets, dialogs and the 2D front-end of a chess program
//!
//! Widgets form trees inside dialogs; the topmost dialog on the
//! [`dialog::DialogStack`] receives input and is drawn over the board.
//! [`driver::UiDriver`] ties the title screen, gameplay frames and the
//! platform together.

pub mod core;
pub mod widgets;
pub mod dialog;
pub mod menus;
pub mod input;
pub mod render;
pub mod theme;
pub mod driver;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;

#[cfg(test)]
mod testing;

pub use app::{Platform, WindowConfig, WinitPlatform};
pub use config::UiConfig;
pub use driver::UiDriver;
pub use error::UiError;
pub use widgets::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{Context, Focus, Rect, Size, UiEvent, Widget};
    pub use crate::dialog::{Dialog, DialogStack};
    pub use crate::driver::{Game, Scene, UiDriver};
    pub use crate::widgets::*;
}

//! Core types and traits for the DreamChess UI

mod widget;
mod widget_list;
mod state;
pub mod context;
mod events;

pub use widget::*;
pub use widget_list::*;
pub use state::*;
pub use context::*;
pub use events::*;

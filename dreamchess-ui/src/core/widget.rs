//! Widget trait and core widget types

use crate::core::{Context, UiEvent};
use crate::render::Canvas;

/// Unique identifier for widgets
pub type WidgetId = u64;

/// How strongly a widget is being asked to show that it is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Not on the selection path.
    None,
    /// Only the selected descendant should show selection.
    One,
    /// Everything below should show selection.
    All,
}

impl Focus {
    /// Focus handed down by a composite to one of its children.
    pub fn for_child(self, selected: bool) -> Focus {
        match self {
            Focus::All => Focus::All,
            Focus::One if selected => Focus::One,
            _ => Focus::None,
        }
    }

    pub fn is_focused(self) -> bool {
        self != Focus::None
    }
}

/// Natural size of a widget in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Area handed to a widget for rendering. Origin is bottom-left, y grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

/// Core trait that all UI components implement
pub trait Widget {
    /// Returns the widget's unique identifier
    fn id(&self) -> WidgetId;

    /// Natural size, fixed once the widget is fully built.
    fn size(&self) -> Size;

    /// Disabled widgets are skipped when moving the selection.
    fn enabled(&self) -> bool {
        true
    }

    /// Whether the widget reacts to events at all.
    fn accepts_input(&self) -> bool {
        false
    }

    /// Draw into `area`. May be larger than `size()`; alignment is up to the widget.
    fn render(&self, canvas: &mut Canvas<'_>, area: Rect, focus: Focus);

    /// Handle an event, returning whether it was consumed.
    fn on_event(&mut self, event: UiEvent, ctx: &mut Context<'_>) -> bool {
        let _ = (event, ctx);
        false // Not handled by default
    }
}

/// A boxed widget for dynamic dispatch
pub type BoxedWidget = Box<dyn Widget>;

/// Helper to generate unique widget IDs
pub fn next_widget_id() -> WidgetId {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

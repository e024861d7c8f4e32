//! Dialogs: a root widget framed by a styled box

mod stack;

pub use stack::*;

use std::fmt;

use tracing::trace;

use crate::core::context::Color;
use crate::core::{BoxedWidget, Focus, Rect, Size, Widget};
use crate::render::{Canvas, SCREEN_HEIGHT, SCREEN_WIDTH};

/// A root widget plus its frozen size and modality.
///
/// The size is taken from the widget when the dialog is created and is not
/// updated if the tree changes size later.
pub struct Dialog {
    widget: BoxedWidget,
    size: Size,
    modal: bool,
}

impl Dialog {
    pub fn new(widget: impl Widget + 'static) -> Self {
        Self::from_boxed(Box::new(widget))
    }

    pub fn from_boxed(widget: BoxedWidget) -> Self {
        let size = widget.size();
        Self {
            widget,
            size,
            modal: false,
        }
    }

    /// Modal dialogs ignore escape; only an action inside them closes them.
    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    pub fn set_modal(&mut self, modal: bool) {
        self.modal = modal;
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn widget(&self) -> &dyn Widget {
        self.widget.as_ref()
    }

    pub fn widget_mut(&mut self) -> &mut BoxedWidget {
        &mut self.widget
    }

    /// Draws the fade, border and backdrop, then the root widget with focus
    /// `One` inside the padding.
    pub fn render(&self, canvas: &mut Canvas<'_>, style: &DialogStyle, position: &DialogPosition) {
        let total_width = self.size.width + 2 * style.hor_pad + 2 * style.border;
        let total_height = self.size.height + 2 * style.vert_pad + 2 * style.border;

        let x = match position.x_align {
            HAlign::Left => position.x,
            HAlign::Right => position.x - total_width,
            HAlign::Center => position.x - total_width / 2,
        };
        let y = match position.y_align {
            VAlign::Top => position.y - total_height,
            VAlign::Bottom => position.y,
            VAlign::Center => position.y - total_height / 2,
        };

        if style.fade.is_visible() {
            canvas.rect(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT, style.fade);
        }
        if style.border > 0 && style.border_color.is_visible() {
            canvas.rect(x, y, total_width, total_height, style.border_color);
        }
        canvas.rect(
            x + style.border,
            y + style.border,
            total_width - 2 * style.border,
            total_height - 2 * style.border,
            style.background,
        );

        let inner = Rect::new(
            x + style.border + style.hor_pad,
            y + style.border + style.vert_pad,
            self.size.width,
            self.size.height,
        );
        self.widget.render(canvas, inner, Focus::One);
    }
}

impl fmt::Debug for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dialog")
            .field("widget", &self.widget.id())
            .field("size", &self.size)
            .field("modal", &self.modal)
            .finish()
    }
}

impl Drop for Dialog {
    fn drop(&mut self) {
        trace!(widget = self.widget.id(), "dialog destroyed");
    }
}

/// Frame and colours of a rendered dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogStyle {
    /// Border width in pixels.
    pub border: i32,
    pub hor_pad: i32,
    pub vert_pad: i32,
    /// Drawn over the whole screen behind the dialog.
    pub fade: Color,
    pub border_color: Color,
    pub background: Color,
}

impl DialogStyle {
    /// Title menu: no border, no fade, translucent grey.
    pub const TITLE: DialogStyle = DialogStyle {
        border: 0,
        hor_pad: 50,
        vert_pad: 10,
        fade: Color::TRANSPARENT,
        border_color: Color::TRANSPARENT,
        background: Color::new(0.7, 0.7, 0.7, 0.85),
    };

    /// Every other dialog: black border over a half-dark screen.
    pub const INGAME: DialogStyle = DialogStyle {
        border: 5,
        hor_pad: 20,
        vert_pad: 10,
        fade: Color::new(0.0, 0.0, 0.0, 0.5),
        border_color: Color::BLACK,
        background: Color::new(0.8, 0.8, 0.8, 1.0),
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Bottom,
    Center,
}

/// Anchor point of a dialog and how the dialog sits relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogPosition {
    pub x: i32,
    pub y: i32,
    pub x_align: HAlign,
    pub y_align: VAlign,
}

impl DialogPosition {
    pub const TITLE: DialogPosition = DialogPosition {
        x: 320,
        y: 100,
        x_align: HAlign::Center,
        y_align: VAlign::Center,
    };

    pub const INGAME: DialogPosition = DialogPosition {
        x: 320,
        y: 240,
        x_align: HAlign::Center,
        y_align: VAlign::Center,
    };
}

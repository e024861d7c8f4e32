//! Container widgets (VBox, HBox)

use crate::core::{
    next_widget_id, Context, Focus, Rect, Selectable, Size, UiEvent, Widget, WidgetId, WidgetList,
};
use crate::render::Canvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

/// Shared state of the two box containers.
struct BoxLayout {
    id: WidgetId,
    axis: Axis,
    list: WidgetList,
    spacing: i32,
    size: Size,
    enabled: bool,
}

impl BoxLayout {
    fn new(axis: Axis, spacing: i32) -> Self {
        Self {
            id: next_widget_id(),
            axis,
            list: WidgetList::new(),
            spacing,
            size: Size::default(),
            enabled: false,
        }
    }

    fn push(&mut self, child: Box<dyn Widget>) {
        let child_size = child.size();
        let interactive = Selectable::INTERACTIVE.matches(child.as_ref());
        self.list.append(child, Selectable::INTERACTIVE);

        let gap = if self.list.len() > 1 { self.spacing } else { 0 };
        match self.axis {
            Axis::Vertical => {
                self.size.width = self.size.width.max(child_size.width);
                self.size.height += child_size.height + gap;
            }
            Axis::Horizontal => {
                self.size.height = self.size.height.max(child_size.height);
                self.size.width += child_size.width + gap;
            }
        }
        if interactive {
            self.enabled = true;
        }
    }

    fn on_event(&mut self, event: UiEvent, ctx: &mut Context<'_>) -> bool {
        let Some(child) = self.list.selected_widget_mut() else {
            return false;
        };
        if child.on_event(event, ctx) {
            return true;
        }
        match (self.axis, event) {
            (Axis::Vertical, UiEvent::Up) | (Axis::Horizontal, UiEvent::Left) => {
                self.list.select_prev(Selectable::INTERACTIVE)
            }
            (Axis::Vertical, UiEvent::Down) | (Axis::Horizontal, UiEvent::Right) => {
                self.list.select_next(Selectable::INTERACTIVE)
            }
            _ => false,
        }
    }

    fn render(&self, canvas: &mut Canvas<'_>, area: Rect, focus: Focus) {
        let selected = self.list.selected();
        match self.axis {
            Axis::Vertical => {
                // First child on top: walk up from the bottom, last child first
                let mut y = area.y + area.height - self.size.height;
                for (index, child) in self.list.iter().enumerate().rev() {
                    let height = child.size().height;
                    let focus = focus.for_child(selected == Some(index));
                    child.render(canvas, Rect::new(area.x, y, area.width, height), focus);
                    y += height + self.spacing;
                }
            }
            Axis::Horizontal => {
                let mut x = area.x;
                for (index, child) in self.list.iter().enumerate() {
                    let width = child.size().width;
                    let focus = focus.for_child(selected == Some(index));
                    child.render(canvas, Rect::new(x, area.y, width, area.height), focus);
                    x += width + self.spacing;
                }
            }
        }
    }
}

macro_rules! box_widget {
    ($(#[$meta:meta])* $name:ident, $axis:expr) => {
        $(#[$meta])*
        pub struct $name(BoxLayout);

        impl $name {
            pub fn new(spacing: i32) -> Self {
                Self(BoxLayout::new($axis, spacing))
            }

            pub fn push(&mut self, child: impl Widget + 'static) {
                self.0.push(Box::new(child));
            }

            pub fn child(mut self, child: impl Widget + 'static) -> Self {
                self.push(child);
                self
            }

            pub fn len(&self) -> usize {
                self.0.list.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.list.is_empty()
            }

            pub fn selected(&self) -> Option<usize> {
                self.0.list.selected()
            }
        }

        impl Widget for $name {
            fn id(&self) -> WidgetId {
                self.0.id
            }

            fn size(&self) -> Size {
                self.0.size
            }

            /// Only once some child can be selected.
            fn enabled(&self) -> bool {
                self.0.enabled
            }

            fn accepts_input(&self) -> bool {
                true
            }

            fn render(&self, canvas: &mut Canvas<'_>, area: Rect, focus: Focus) {
                self.0.render(canvas, area, focus);
            }

            fn on_event(&mut self, event: UiEvent, ctx: &mut Context<'_>) -> bool {
                self.0.on_event(event, ctx)
            }
        }
    };
}

box_widget!(
    /// Stacks children top to bottom. Up/Down move the selection.
    VBox,
    Axis::Vertical
);

box_widget!(
    /// Lays children out left to right. Left/Right move the selection.
    HBox,
    Axis::Horizontal
);

//! Option widget: cycles through a list of alternatives with left/right

use crate::core::context::Color;
use crate::core::{
    next_widget_id, Context, Focus, Rect, Selectable, Size, UiEvent, Widget, WidgetId, WidgetList,
};
use crate::render::{Canvas, Font};
use crate::widgets::Text;

/// Latin-1 guillemets, drawn either side of the current option.
pub const OPTION_ARROW_LEFT: &str = "\u{ab} ";
pub const OPTION_ARROW_RIGHT: &str = " \u{bb}";

/// Callback type for a changed selection, given the new index
pub type OnSelect = Box<dyn FnMut(usize, &mut Context<'_>)>;

pub struct Options {
    id: WidgetId,
    list: WidgetList,
    size: Size,
    arrow_left: i32,
    arrow_right: i32,
    text_height: i32,
    on_select: Option<OnSelect>,
}

impl Options {
    pub fn new(font: &Font) -> Self {
        Self {
            id: next_widget_id(),
            list: WidgetList::new(),
            size: Size::default(),
            arrow_left: font.text_width(OPTION_ARROW_LEFT),
            arrow_right: font.text_width(OPTION_ARROW_RIGHT),
            text_height: font.height(),
            on_select: None,
        }
    }

    /// Adds an alternative. The first one becomes the current selection.
    pub fn push(&mut self, child: impl Widget + 'static) {
        let width = child.size().width + self.arrow_left + self.arrow_right;
        let height = child.size().height.max(self.text_height);
        self.list.append(Box::new(child), Selectable::ANY);
        self.size.width = self.size.width.max(width);
        self.size.height = self.size.height.max(height);
    }

    pub fn push_label(&mut self, font: &Font, label: &str, xalign: f32, yalign: f32) {
        self.push(Text::new(font, label).align(xalign, yalign));
    }

    pub fn option(mut self, child: impl Widget + 'static) -> Self {
        self.push(child);
        self
    }

    pub fn label(mut self, font: &Font, label: &str) -> Self {
        self.push_label(font, label, 0.5, 0.0);
        self
    }

    pub fn on_select<F: FnMut(usize, &mut Context<'_>) + 'static>(mut self, handler: F) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    pub fn selected(&self) -> Option<usize> {
        self.list.selected()
    }

    fn changed(&mut self, ctx: &mut Context<'_>) {
        if let (Some(handler), Some(index)) = (self.on_select.as_mut(), self.list.selected()) {
            handler(index, ctx);
        }
    }

    fn arrow(canvas: &mut Canvas<'_>, x: i32, y: i32, arrow: &str, available: bool, focus: Focus) {
        if !available {
            canvas.text(x, y, arrow, 1.0, Color::GREY);
        } else if focus.is_focused() {
            canvas.text_bouncy(x, y, arrow, 1.0, Color::DARK_RED);
        } else {
            canvas.text(x, y, arrow, 1.0, Color::BLACK);
        }
    }
}

impl Widget for Options {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn size(&self) -> Size {
        self.size
    }

    /// A single alternative leaves nothing to choose.
    fn enabled(&self) -> bool {
        self.list.len() >= 2
    }

    fn accepts_input(&self) -> bool {
        true
    }

    fn render(&self, canvas: &mut Canvas<'_>, area: Rect, focus: Focus) {
        let (Some(index), Some(child)) = (self.list.selected(), self.list.selected_widget()) else {
            return;
        };
        let arrow_y = area.y + area.height / 2 - self.text_height / 2;

        Self::arrow(canvas, area.x, arrow_y, OPTION_ARROW_LEFT, index > 0, focus);

        let inner = Rect::new(
            area.x + self.arrow_left,
            area.y,
            area.width - self.arrow_left - self.arrow_right,
            area.height,
        );
        child.render(canvas, inner, focus);

        let right_x = area.x + area.width - self.arrow_right;
        Self::arrow(canvas, right_x, arrow_y, OPTION_ARROW_RIGHT, index + 1 < self.list.len(), focus);
    }

    fn on_event(&mut self, event: UiEvent, ctx: &mut Context<'_>) -> bool {
        if self.list.selected().is_none() {
            return false;
        }
        let moved = match event {
            UiEvent::Right => self.list.select_next(Selectable::ANY),
            UiEvent::Left => self.list.select_prev(Selectable::ANY),
            _ => return false,
        };
        if moved {
            self.changed(ctx);
        }
        true
    }
}

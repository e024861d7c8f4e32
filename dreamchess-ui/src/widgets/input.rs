//! Single-line text entry

use crate::core::context::Color;
use crate::core::{next_widget_id, Context, Focus, Rect, Size, UiEvent, Widget, WidgetId};
use crate::render::{Canvas, Font};

pub const ENTRY_MAX_LEN: usize = 255;
pub const ENTRY_CURSOR: &str = "|";
/// Caret blink period in milliseconds; visible for the first half.
const CURSOR_BLINK: u32 = 400;

/// Callback type for edited text
pub type OnChange = Box<dyn FnMut(&str, &mut Context<'_>)>;

/// Editable text with a caret. Accepts ASCII letters and spaces.
pub struct TextEntry {
    id: WidgetId,
    value: String,
    cursor: usize,
    max_length: usize,
    size: Size,
    on_change: Option<OnChange>,
}

impl TextEntry {
    /// Sized to show roughly a dozen characters.
    pub fn new(font: &Font) -> Self {
        Self {
            id: next_widget_id(),
            value: String::new(),
            cursor: 0,
            max_length: ENTRY_MAX_LEN,
            size: Size::new(font.text_width("Visible text"), font.height()),
            on_change: None,
        }
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = max.min(ENTRY_MAX_LEN);
        self
    }

    pub fn on_change<F: FnMut(&str, &mut Context<'_>) + 'static>(mut self, handler: F) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Caret position, between 0 and the text length.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn changed(&mut self, ctx: &mut Context<'_>) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(&self.value, ctx);
        }
    }
}

impl Widget for TextEntry {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn size(&self) -> Size {
        self.size
    }

    fn accepts_input(&self) -> bool {
        true
    }

    fn render(&self, canvas: &mut Canvas<'_>, area: Rect, focus: Focus) {
        if !focus.is_focused() {
            canvas.text(area.x, area.y, &self.value, 1.0, Color::BLACK);
            return;
        }
        // value is ASCII only, so byte offsets are character offsets
        let caret_x = canvas.font().text_width(&self.value[..self.cursor]);
        canvas.text(area.x, area.y, &self.value, 1.0, Color::DARK_RED);
        if canvas.ticks() % CURSOR_BLINK < CURSOR_BLINK / 2 {
            canvas.text(area.x + caret_x - 2, area.y, ENTRY_CURSOR, 1.0, Color::DARK_RED);
        }
    }

    fn on_event(&mut self, event: UiEvent, ctx: &mut Context<'_>) -> bool {
        match event {
            UiEvent::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            UiEvent::Right => {
                if self.cursor < self.value.len() {
                    self.cursor += 1;
                }
                true
            }
            UiEvent::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.cursor);
                    self.changed(ctx);
                }
                true
            }
            _ => match event.typed_char() {
                Some(c) if c == ' ' || c.is_ascii_alphabetic() => {
                    // A full entry still swallows the keystroke
                    if self.value.len() < self.max_length {
                        self.value.insert(self.cursor, c);
                        self.cursor += 1;
                        self.changed(ctx);
                    }
                    true
                }
                _ => false,
            },
        }
    }
}

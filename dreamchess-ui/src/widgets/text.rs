//! Static text label

use crate::core::context::Color;
use crate::core::{next_widget_id, Focus, Rect, Size, Widget, WidgetId};
use crate::render::{Canvas, Font, BOUNCE_AMP};

/// A single line of text.
///
/// Never takes input itself, but draws in dark red whenever it is on the
/// selection path, which is how action labels light up.
pub struct Text {
    id: WidgetId,
    content: String,
    size: Size,
    xalign: f32,
    yalign: f32,
    bouncy: bool,
}

impl Text {
    /// Measures `content` with `font`. The height leaves room for bouncing.
    pub fn new(font: &Font, content: impl Into<String>) -> Self {
        let content = content.into();
        let size = Size::new(font.text_width(&content), font.height() + BOUNCE_AMP);
        Self {
            id: next_widget_id(),
            content,
            size,
            xalign: 0.5,
            yalign: 0.5,
            bouncy: false,
        }
    }

    /// 0.0 is left/top, 1.0 is right/bottom.
    pub fn align(mut self, xalign: f32, yalign: f32) -> Self {
        self.xalign = xalign;
        self.yalign = yalign;
        self
    }

    pub fn bouncy(mut self, bouncy: bool) -> Self {
        self.bouncy = bouncy;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Widget for Text {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn size(&self) -> Size {
        self.size
    }

    fn render(&self, canvas: &mut Canvas<'_>, area: Rect, focus: Focus) {
        let x = area.x + (self.xalign * (area.width - self.size.width) as f32) as i32;
        let y = area.y + ((1.0 - self.yalign) * (area.height - self.size.height) as f32) as i32;

        if !focus.is_focused() {
            canvas.text(x, y, &self.content, 1.0, Color::BLACK);
        } else if self.bouncy {
            canvas.text_bouncy(x, y, &self.content, 1.0, Color::DARK_RED);
        } else {
            canvas.text(x, y, &self.content, 1.0, Color::DARK_RED);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Primitive, RenderList};

    fn draw(text: &Text, area: Rect, focus: Focus) -> RenderList {
        let font = Font::monospace(8, 16);
        let mut list = RenderList::new();
        text.render(&mut Canvas::new(&mut list, &font, 0), area, focus);
        list
    }

    #[test]
    fn test_size() {
        let font = Font::monospace(8, 16);
        let text = Text::new(&font, "Players:");
        assert_eq!(text.size(), Size::new(64, 18));
        assert!(!text.accepts_input());
        assert!(text.enabled());
    }

    #[test]
    fn test_alignment_within_area() {
        let font = Font::monospace(8, 16);
        let text = Text::new(&font, "Ok").align(0.5, 0.0);
        let list = draw(&text, Rect::new(100, 50, 96, 38), Focus::None);
        match &list.primitives[0] {
            Primitive::Text { x, y, color, .. } => {
                assert_eq!(*x, 140.0);
                assert_eq!(*y, 70.0);
                assert_eq!(*color, Color::BLACK);
            }
            other => panic!("unexpected {other:?}"),
        }

        let text = Text::new(&font, "Ok").align(1.0, 1.0);
        let list = draw(&text, Rect::new(100, 50, 96, 38), Focus::None);
        assert!(matches!(list.primitives[0], Primitive::Text { x, y, .. } if x == 180.0 && y == 50.0));
    }

    #[test]
    fn test_centred_by_default() {
        let font = Font::monospace(8, 16);
        let text = Text::new(&font, "Ok");
        let list = draw(&text, Rect::new(100, 50, 96, 38), Focus::None);
        assert!(matches!(list.primitives[0], Primitive::Text { x, y, .. } if x == 140.0 && y == 60.0));
    }

    #[test]
    fn test_focused_text_is_dark_red() {
        let font = Font::monospace(8, 16);
        let text = Text::new(&font, "Quit");
        let list = draw(&text, Rect::new(0, 0, 32, 18), Focus::One);
        assert!(matches!(list.primitives[0], Primitive::Text { color, .. } if color == Color::DARK_RED));
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Quit"]);

        let bouncy = Text::new(&font, "Quit").bouncy(true);
        let list = draw(&bouncy, Rect::new(0, 0, 32, 18), Focus::All);
        assert_eq!(list.primitives.len(), 4);
    }
}

//! Action widget: a child that fires a callback on confirm

use crate::core::{next_widget_id, BoxedWidget, Context, Focus, Rect, Size, UiEvent, Widget, WidgetId};
use crate::render::{Canvas, Font};
use crate::widgets::Text;

/// Callback type for activated actions
pub type OnAction = Box<dyn FnMut(&mut Context<'_>)>;

/// Wraps a child and reacts to `UiEvent::Action`.
pub struct Action {
    id: WidgetId,
    child: BoxedWidget,
    size: Size,
    on_action: Option<OnAction>,
}

impl Action {
    pub fn new(child: impl Widget + 'static) -> Self {
        let size = child.size();
        Self {
            id: next_widget_id(),
            child: Box::new(child),
            size,
            on_action: None,
        }
    }

    /// An action around a bouncy text label.
    pub fn with_label(font: &Font, label: &str, xalign: f32, yalign: f32) -> Self {
        Self::new(Text::new(font, label).bouncy(true).align(xalign, yalign))
    }

    pub fn on_action<F: FnMut(&mut Context<'_>) + 'static>(mut self, handler: F) -> Self {
        self.on_action = Some(Box::new(handler));
        self
    }
}

impl Widget for Action {
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
        // The whole child lights up, not just a selected part of it
        let focus = if focus.is_focused() { Focus::All } else { Focus::None };
        self.child.render(canvas, area, focus);
    }

    fn on_event(&mut self, event: UiEvent, ctx: &mut Context<'_>) -> bool {
        if event != UiEvent::Action {
            return false;
        }
        if let Some(handler) = self.on_action.as_mut() {
            handler(ctx);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;
    use crate::render::{Primitive, RenderList};
    use crate::testing::{self, Probe};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_action_fires_once_per_confirm() {
        let assets = testing::assets();
        let mut session = Session::default();
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let mut action = Action::new(Probe::new(40, 18).input(true).consume_all())
            .on_action(move |_| seen.set(seen.get() + 1));

        let mut ctx = testing::context(&assets, &mut session);
        assert!(action.on_event(UiEvent::Action, &mut ctx));
        assert_eq!(count.get(), 1);
        assert!(!action.on_event(UiEvent::Up, &mut ctx));
        assert!(!action.on_event(UiEvent::Escape, &mut ctx));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_action_without_callback_still_consumes() {
        let assets = testing::assets();
        let mut session = Session::default();
        let mut ctx = testing::context(&assets, &mut session);
        let mut action = Action::with_label(&assets.font, "Ok", 0.5, 0.5);
        assert!(action.on_event(UiEvent::Action, &mut ctx));
    }

    #[test]
    fn test_label_action_takes_child_size() {
        let font = Font::monospace(8, 16);
        let action = Action::with_label(&font, "Move Now", 0.0, 0.0);
        assert_eq!(action.size(), Size::new(64, 18));
        assert!(action.enabled());
        assert!(action.accepts_input());
    }

    #[test]
    fn test_focus_is_widened_to_all() {
        let font = Font::monospace(8, 16);
        let action = Action::with_label(&font, "Ok", 0.0, 0.0);
        let mut list = RenderList::new();
        action.render(&mut Canvas::new(&mut list, &font, 0), Rect::new(0, 0, 16, 18), Focus::One);
        // Bouncy label emits one primitive per character
        assert_eq!(list.primitives.len(), 2);

        let mut list = RenderList::new();
        action.render(&mut Canvas::new(&mut list, &font, 0), Rect::new(0, 0, 16, 18), Focus::None);
        assert!(matches!(&list.primitives[..], [Primitive::Text { text, .. }] if text == "Ok"));
    }
}

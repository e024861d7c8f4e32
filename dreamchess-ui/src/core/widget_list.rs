//! Ordered child storage with a selection cursor

use crate::core::{BoxedWidget, Widget};

/// Which children the cursor may land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selectable {
    pub enabled: bool,
    pub input: bool,
}

impl Selectable {
    /// Every child qualifies.
    pub const ANY: Selectable = Selectable { enabled: false, input: false };
    /// Only enabled children that take input.
    pub const INTERACTIVE: Selectable = Selectable { enabled: true, input: true };

    pub fn matches(self, widget: &dyn Widget) -> bool {
        (!self.enabled || widget.enabled()) && (!self.input || widget.accepts_input())
    }
}

/// Children in insertion order plus an optional cursor.
///
/// The cursor is either `None` or a valid index. Dropping the list drops the
/// children in insertion order.
#[derive(Default)]
pub struct WidgetList {
    items: Vec<BoxedWidget>,
    selected: Option<usize>,
}

impl WidgetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child. The cursor only moves if it was unset and the new
    /// child qualifies under `filter`.
    pub fn append(&mut self, widget: BoxedWidget, filter: Selectable) -> usize {
        let index = self.items.len();
        if self.selected.is_none() && filter.matches(widget.as_ref()) {
            self.selected = Some(index);
        }
        self.items.push(widget);
        index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn get(&self, index: usize) -> Option<&dyn Widget> {
        self.items.get(index).map(|w| w.as_ref())
    }

    pub fn selected_widget(&self) -> Option<&dyn Widget> {
        self.selected.and_then(|i| self.get(i))
    }

    pub fn selected_widget_mut(&mut self) -> Option<&mut BoxedWidget> {
        match self.selected {
            Some(i) => self.items.get_mut(i),
            None => None,
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &dyn Widget> + ExactSizeIterator + '_ {
        self.items.iter().map(|w| w.as_ref())
    }

    /// Moves the cursor to the nearest qualifying child before it.
    /// Leaves the cursor alone and returns false if there is none.
    pub fn select_prev(&mut self, filter: Selectable) -> bool {
        let Some(current) = self.selected else {
            return false;
        };
        match (0..current).rev().find(|&i| filter.matches(self.items[i].as_ref())) {
            Some(i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }

    /// Moves the cursor to the nearest qualifying child after it. An unset
    /// cursor scans from the start.
    pub fn select_next(&mut self, filter: Selectable) -> bool {
        let start = self.selected.map_or(0, |i| i + 1);
        match (start..self.items.len()).find(|&i| filter.matches(self.items[i].as_ref())) {
            Some(i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }
}

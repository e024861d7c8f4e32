//! Gameplay input: camera control and board shortcuts

use crate::core::{Key, UiEvent};
use crate::driver::SelectorMove;

/// Held to steer the camera with the arrow keys.
pub const CAMERA_MODIFIER: Key = Key::Control;

/// Camera step per frame at 60 fps.
pub const CAMERA_STEP: f32 = 0.6;

/// Camera displacement `(forward, sideways)` for this frame, or `None` when
/// the camera modifier is up.
pub fn camera_motion(is_held: impl Fn(Key) -> bool, fps: f32) -> Option<(f32, f32)> {
    if !is_held(CAMERA_MODIFIER) {
        return None;
    }
    let step = CAMERA_STEP * 60.0 / fps.max(1.0);
    let mut forward = 0.0;
    let mut sideways = 0.0;
    if is_held(Key::Down) {
        forward -= step;
    }
    if is_held(Key::Up) {
        forward += step;
    }
    if is_held(Key::Left) {
        sideways -= step;
    }
    if is_held(Key::Right) {
        sideways += step;
    }
    Some((forward, sideways))
}

/// What a UI event means on the board when no dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCommand {
    Selector(SelectorMove),
    /// Pick the square under the selector.
    Select,
    SystemMenu,
    GameMenu,
    ViewPrev,
    ViewNext,
    Undo,
    ToggleFps,
}

impl BoardCommand {
    pub fn from_event(event: UiEvent) -> Option<Self> {
        let command = match event {
            UiEvent::Left => BoardCommand::Selector(SelectorMove::Left),
            UiEvent::Right => BoardCommand::Selector(SelectorMove::Right),
            UiEvent::Up => BoardCommand::Selector(SelectorMove::Up),
            UiEvent::Down => BoardCommand::Selector(SelectorMove::Down),
            UiEvent::Action => BoardCommand::Select,
            UiEvent::Escape => BoardCommand::SystemMenu,
            UiEvent::Char('g') | UiEvent::Extra3 => BoardCommand::GameMenu,
            UiEvent::Char('p') => BoardCommand::ViewPrev,
            UiEvent::Char('n') => BoardCommand::ViewNext,
            UiEvent::Char('u') => BoardCommand::Undo,
            UiEvent::Char('f') => BoardCommand::ToggleFps,
            _ => return None,
        };
        Some(command)
    }
}

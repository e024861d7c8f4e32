//! Raw platform input, its translation to UI events, and dispatch

mod pipeline;

pub use pipeline::*;

use tracing::warn;

use crate::core::{Context, Effect, Key, Modifiers, Session, UiEvent};
use crate::dialog::DialogStack;
use crate::driver::GameCommand;
use crate::error::DialogError;
use crate::theme::Assets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HatDirection {
    Centered,
    Up,
    Down,
    Left,
    Right,
}

/// One input as the platform reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    Key { key: Key, modifiers: Modifiers },
    JoyHat(HatDirection),
    JoyButton(u8),
}

impl RawInput {
    pub fn key(key: Key) -> Self {
        RawInput::Key { key, modifiers: Modifiers::default() }
    }

    pub fn shifted(key: Key) -> Self {
        RawInput::Key {
            key,
            modifiers: Modifiers { shift: true, ..Modifiers::default() },
        }
    }

    /// Any key press or joystick button. Hat motion does not count.
    pub fn is_press(&self) -> bool {
        matches!(self, RawInput::Key { .. } | RawInput::JoyButton(_))
    }

    pub fn is_key(&self, wanted: Key) -> bool {
        matches!(self, RawInput::Key { key, .. } if *key == wanted)
    }
}

/// Fixed mapping from raw input to UI events. Unmapped input becomes `None`.
pub fn convert(raw: &RawInput) -> UiEvent {
    match *raw {
        RawInput::Key { key, modifiers } => match key {
            Key::Right => UiEvent::Right,
            Key::Left => UiEvent::Left,
            Key::Up => UiEvent::Up,
            Key::Down => UiEvent::Down,
            Key::Escape => UiEvent::Escape,
            Key::Enter => UiEvent::Action,
            Key::Backspace => UiEvent::Backspace,
            Key::Space => UiEvent::Space,
            _ => match key.letter() {
                Some(c) if modifiers.shift => UiEvent::Char(c.to_ascii_uppercase()),
                Some(c) => UiEvent::Char(c),
                None => UiEvent::None,
            },
        },
        RawInput::JoyHat(direction) => match direction {
            HatDirection::Right => UiEvent::Right,
            HatDirection::Left => UiEvent::Left,
            HatDirection::Up => UiEvent::Up,
            HatDirection::Down => UiEvent::Down,
            HatDirection::Centered => UiEvent::None,
        },
        RawInput::JoyButton(button) => match button {
            0 => UiEvent::Action,
            1 => UiEvent::Escape,
            2 => UiEvent::Extra1,
            3 => UiEvent::Extra2,
            4 => UiEvent::Extra3,
            _ => UiEvent::None,
        },
    }
}

/// Gives `event` to the dialog stack, then applies whatever the callbacks
/// queued. Game commands are handed back for the caller to forward.
pub fn dispatch_to_dialogs(
    stack: &mut DialogStack,
    event: UiEvent,
    assets: &Assets,
    session: &mut Session,
) -> Vec<GameCommand> {
    let mut ctx = Context::new(assets, session);
    if let Err(e) = stack.input(event, &mut ctx) {
        warn!(%e, ?event, "dialog input dropped");
    }
    apply_effects(stack, ctx.take_effects())
}

fn apply_effects(stack: &mut DialogStack, effects: Vec<Effect>) -> Vec<GameCommand> {
    let mut commands = Vec::new();
    for effect in effects {
        let result = match effect {
            Effect::OpenDialog(dialog) => stack.open(dialog),
            Effect::CloseDialog => stack.close(),
            Effect::Game(command) => {
                commands.push(command);
                Ok(())
            }
        };
        match result {
            Ok(()) => {}
            Err(DialogError::StackFull(rejected)) => {
                warn!(?rejected, "too many open dialogs, dropping new dialog");
            }
            Err(e) => warn!(%e, "dialog operation ignored"),
        }
    }
    commands
}

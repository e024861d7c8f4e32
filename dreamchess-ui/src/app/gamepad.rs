//! Gamepad input through gilrs

use std::collections::VecDeque;

use gilrs::{Button, EventType, Gilrs};
use tracing::{info, warn};

use crate::input::{HatDirection, RawInput};

/// Every connected gamepad. Without gamepad support this stays silent.
pub struct Gamepads {
    gilrs: Option<Gilrs>,
}

impl Gamepads {
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => Some(gilrs),
            Err(gilrs::Error::NotImplemented(dummy)) => {
                warn!("gamepads are not supported on this platform");
                Some(dummy)
            }
            Err(e) => {
                warn!(%e, "gamepad input unavailable");
                None
            }
        };
        Self { gilrs }
    }

    /// Moves every pending gamepad event onto `queue`.
    pub fn poll(&mut self, queue: &mut VecDeque<RawInput>) {
        let Some(gilrs) = &mut self.gilrs else {
            return;
        };
        while let Some(gilrs::Event { id, event, .. }) = gilrs.next_event() {
            match event {
                EventType::Connected => info!(gamepad = ?id, "gamepad connected"),
                EventType::Disconnected => info!(gamepad = ?id, "gamepad disconnected"),
                event => queue.extend(map_event(event)),
            }
        }
    }
}

impl Default for Gamepads {
    fn default() -> Self {
        Self::new()
    }
}

fn map_event(event: EventType) -> Option<RawInput> {
    match event {
        EventType::ButtonPressed(button, _) => map_button(button),
        EventType::ButtonReleased(button, _) if hat_direction(button).is_some() => {
            Some(RawInput::JoyHat(HatDirection::Centered))
        }
        _ => None,
    }
}

/// The d-pad acts as the hat; face buttons and start are numbered.
fn map_button(button: Button) -> Option<RawInput> {
    if let Some(direction) = hat_direction(button) {
        return Some(RawInput::JoyHat(direction));
    }
    let number = match button {
        Button::South => 0,
        Button::East => 1,
        Button::West => 2,
        Button::North => 3,
        Button::Start => 4,
        _ => return None,
    };
    Some(RawInput::JoyButton(number))
}

fn hat_direction(button: Button) -> Option<HatDirection> {
    match button {
        Button::DPadUp => Some(HatDirection::Up),
        Button::DPadDown => Some(HatDirection::Down),
        Button::DPadLeft => Some(HatDirection::Left),
        Button::DPadRight => Some(HatDirection::Right),
        _ => None,
    }
}

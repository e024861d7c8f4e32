//! Platform layer: window, input source, clock and presentation

mod gamepad;
mod window;

pub use gamepad::Gamepads;
pub use window::*;

use std::time::Duration;

use crate::core::Key;
use crate::input::RawInput;
use crate::render::{Font, RenderList, TextureUpload};

/// Everything the driver needs from the host system.
pub trait Platform: TextureUpload {
    /// Next queued input, without blocking.
    fn poll_input(&mut self) -> Option<RawInput>;

    /// Whether `key` is held down right now.
    fn is_held(&self, key: Key) -> bool;

    /// Milliseconds since start-up.
    fn ticks(&self) -> u32;

    /// Draws a finished frame.
    fn present(&mut self, list: &RenderList, font: &Font);

    /// The user asked to close the window.
    fn should_close(&self) -> bool;

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

//! winit window driven by pumping its event loop once per frame

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, ModifiersState, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowAttributes, WindowId},
};

use crate::app::{Gamepads, Platform};
use crate::core::{Key, Modifiers};
use crate::error::UiError;
use crate::input::RawInput;
use crate::render::{Font, GpuRenderer, RenderList, TextureId, TextureUpload, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub decorations: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "DreamChess".to_string(),
            width: SCREEN_WIDTH as u32,
            height: SCREEN_HEIGHT as u32,
            resizable: true,
            decorations: true,
        }
    }
}

/// Event handler state, filled in by `pump_app_events`.
struct WindowState {
    config: WindowConfig,
    window: Option<Arc<Window>>,
    renderer: Option<GpuRenderer>,
    init_error: Option<UiError>,
    queue: VecDeque<RawInput>,
    held: HashSet<Key>,
    modifiers: Modifiers,
    close_requested: bool,
}

impl WindowState {
    fn new(config: WindowConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            init_error: None,
            queue: VecDeque::new(),
            held: HashSet::new(),
            modifiers: Modifiers::default(),
            close_requested: false,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), UiError> {
        let window_attrs = WindowAttributes::default()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(self.config.resizable)
            .with_decorations(self.config.decorations);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let renderer = pollster::block_on(GpuRenderer::new(window.clone()))?;
        info!(width = self.config.width, height = self.config.height, "window created");

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn keyboard_input(&mut self, event: KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let key = map_key(code);
        match event.state {
            ElementState::Pressed => {
                self.held.insert(key);
                if key != Key::Unknown {
                    self.queue.push_back(RawInput::Key { key, modifiers: self.modifiers });
                }
            }
            ElementState::Released => {
                self.held.remove(&key);
            }
        }
    }
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_error.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            error!(%e, "failed to set up window");
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                debug!("close requested");
                self.close_requested = true;
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize((physical_size.width, physical_size.height));
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                let state = modifiers.state();
                self.modifiers = Modifiers {
                    shift: state.contains(ModifiersState::SHIFT),
                    ctrl: state.contains(ModifiersState::CONTROL),
                    alt: state.contains(ModifiersState::ALT),
                    meta: state.contains(ModifiersState::SUPER),
                };
            }
            WindowEvent::KeyboardInput { event, is_synthetic: false, .. } if !event.repeat => {
                self.keyboard_input(event);
            }
            WindowEvent::Focused(false) => self.held.clear(),
            _ => {}
        }
    }
}

/// The desktop platform: one window, keyboard and gamepad input, wgpu
/// presentation.
pub struct WinitPlatform {
    event_loop: EventLoop<()>,
    state: WindowState,
    gamepads: Gamepads,
    start: Instant,
}

impl WinitPlatform {
    /// Opens the window and blocks until its renderer is ready.
    pub fn new(config: WindowConfig) -> Result<Self, UiError> {
        let event_loop = EventLoop::new()?;
        let mut platform = Self {
            event_loop,
            state: WindowState::new(config),
            gamepads: Gamepads::new(),
            start: Instant::now(),
        };
        while platform.state.renderer.is_none() {
            platform.pump(Some(Duration::from_millis(16)));
            if let Some(e) = platform.state.init_error.take() {
                return Err(e);
            }
            if platform.state.close_requested {
                return Err(UiError::WindowClosed);
            }
        }
        Ok(platform)
    }

    fn pump(&mut self, timeout: Option<Duration>) {
        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(timeout, &mut self.state) {
            debug!(code, "event loop exited");
            self.state.close_requested = true;
        }
    }
}

impl TextureUpload for WinitPlatform {
    fn upload(&mut self, image: &RgbaImage) -> TextureId {
        match &mut self.state.renderer {
            Some(renderer) => renderer.upload(image),
            None => {
                warn!("texture upload without a renderer");
                TextureId::WHITE
            }
        }
    }

    fn release(&mut self, id: TextureId) {
        if let Some(renderer) = &mut self.state.renderer {
            renderer.release(id);
        }
    }
}

impl Platform for WinitPlatform {
    fn poll_input(&mut self) -> Option<RawInput> {
        if self.state.queue.is_empty() && !self.state.close_requested {
            self.pump(Some(Duration::ZERO));
            self.gamepads.poll(&mut self.state.queue);
        }
        self.state.queue.pop_front()
    }

    fn is_held(&self, key: Key) -> bool {
        self.state.held.contains(&key)
    }

    fn ticks(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }

    fn present(&mut self, list: &RenderList, font: &Font) {
        let Some(renderer) = &mut self.state.renderer else {
            return;
        };
        match renderer.render(list, font) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.resize(renderer.size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("out of GPU memory");
                self.state.close_requested = true;
            }
            Err(e) => warn!(?e, "frame dropped"),
        }
    }

    fn should_close(&self) -> bool {
        self.state.close_requested
    }
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,
        KeyCode::Digit0 => Key::Num0,
        KeyCode::Digit1 => Key::Num1,
        KeyCode::Digit2 => Key::Num2,
        KeyCode::Digit3 => Key::Num3,
        KeyCode::Digit4 => Key::Num4,
        KeyCode::Digit5 => Key::Num5,
        KeyCode::Digit6 => Key::Num6,
        KeyCode::Digit7 => Key::Num7,
        KeyCode::Digit8 => Key::Num8,
        KeyCode::Digit9 => Key::Num9,
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,
        KeyCode::Escape => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::CapsLock => Key::CapsLock,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,
        KeyCode::Space => Key::Space,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(map_key(KeyCode::KeyQ), Key::Q);
        assert_eq!(map_key(KeyCode::NumpadEnter), Key::Enter);
        assert_eq!(map_key(KeyCode::ControlRight), Key::Control);
        assert_eq!(map_key(KeyCode::Numpad5), Key::Unknown);
    }

    #[test]
    fn test_window_config_defaults() {
        let config: WindowConfig = serde_json::from_str(r#"{"title": "Test"}"#).unwrap();
        assert_eq!(config.title, "Test");
        assert_eq!((config.width, config.height), (640, 480));
    }
}

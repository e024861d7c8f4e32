//! Event context and colours

use crate::core::Session;
use crate::dialog::Dialog;
use crate::driver::GameCommand;
use crate::theme::Assets;

/// Something a callback asked for that touches state outside the widget tree.
///
/// Callbacks run while the dialog stack is borrowed, so dialog changes are
/// queued here and applied in order once the event has been dispatched.
pub enum Effect {
    OpenDialog(Dialog),
    CloseDialog,
    Game(GameCommand),
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::OpenDialog(d) => f.debug_tuple("OpenDialog").field(d).finish(),
            Effect::CloseDialog => f.write_str("CloseDialog"),
            Effect::Game(c) => f.debug_tuple("Game").field(c).finish(),
        }
    }
}

/// Context passed to widgets while handling an event
pub struct Context<'a> {
    /// Fonts and textures for building new dialogs
    pub assets: &'a Assets,
    /// Menu choices and flags shared with the driver
    pub session: &'a mut Session,
    effects: Vec<Effect>,
}

impl<'a> Context<'a> {
    pub fn new(assets: &'a Assets, session: &'a mut Session) -> Self {
        Self {
            assets,
            session,
            effects: Vec::new(),
        }
    }

    /// Push a dialog on top of the stack.
    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.effects.push(Effect::OpenDialog(dialog));
    }

    /// Close the topmost dialog.
    pub fn close_dialog(&mut self) {
        self.effects.push(Effect::CloseDialog);
    }

    /// Forward a command to the game.
    pub fn game(&mut self, command: GameCommand) {
        self.effects.push(Effect::Game(command));
    }

    /// Queued effects, oldest first.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const GREY: Color = Color::new(0.5, 0.5, 0.5, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const DARK_RED: Color = Color::new(0.7, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn is_visible(&self) -> bool {
        self.a > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_effects_keep_order() {
        let assets = testing::assets();
        let mut session = Session::default();
        let mut ctx = Context::new(&assets, &mut session);
        ctx.game(GameCommand::MoveNow);
        ctx.close_dialog();
        ctx.game(GameCommand::RetractMove);

        let effects = ctx.take_effects();
        assert!(matches!(effects[0], Effect::Game(GameCommand::MoveNow)));
        assert!(matches!(effects[1], Effect::CloseDialog));
        assert!(matches!(effects[2], Effect::Game(GameCommand::RetractMove)));
        assert!(ctx.take_effects().is_empty());
    }

    #[test]
    fn test_rgb() {
        let c = Color::rgb(255, 0, 255);
        assert_eq!(c.to_array(), [1.0, 0.0, 1.0, 1.0]);
        assert!(!Color::TRANSPARENT.is_visible());
    }
}

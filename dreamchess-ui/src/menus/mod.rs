//! Dialog factories for the title screen and gameplay

mod title;

pub use title::*;

use crate::dialog::Dialog;
use crate::driver::{Colour, GameCommand, GameResult, PieceKind, ResultCode};
use crate::render::Font;
use crate::theme::{Assets, GuiPiece, PieceSet};
use crate::widgets::{Action, HBox, Image, Text, VBox};

fn command(font: &Font, label: &str, command: GameCommand) -> Action {
    Action::with_label(font, label, 0.0, 0.0).on_action(move |ctx| ctx.game(command))
}

fn ok_button(font: &Font) -> Action {
    Action::with_label(font, "Ok", 0.5, 0.5).on_action(|ctx| ctx.close_dialog())
}

/// Gameplay actions, opened with `g`. Escape closes it.
pub fn ingame(font: &Font) -> Dialog {
    let root = VBox::new(0)
        .child(command(font, "Retract Move", GameCommand::RetractMove))
        .child(command(font, "Move Now", GameCommand::MoveNow))
        .child(command(font, "View Previous Move", GameCommand::ViewPrev))
        .child(command(font, "View Next Move", GameCommand::ViewNext));
    Dialog::new(root)
}

/// Opened with Escape during play.
pub fn system(font: &Font) -> Dialog {
    let root = VBox::new(0)
        .child(Action::with_label(font, "Return To Game", 0.0, 0.0).on_action(|ctx| ctx.close_dialog()))
        .child(Action::with_label(font, "Quit Game", 0.0, 0.0).on_action(|ctx| {
            let dialog = quit(&ctx.assets.font);
            ctx.open_dialog(dialog);
        }));
    Dialog::new(root)
}

/// Confirmation on top of the system dialog. Confirming closes both and
/// asks the driver to go back to the title screen.
pub fn quit(font: &Font) -> Dialog {
    let root = VBox::new(0)
        .child(Text::new(font, "You don't really want to quit do ya?"))
        .child(Text::new(font, ""))
        .child(Action::with_label(font, "Yeah.. I suck..", 0.5, 0.0).on_action(|ctx| {
            ctx.close_dialog();
            ctx.close_dialog();
            ctx.session.quit_to_menu = true;
        }))
        .child(Action::with_label(font, "Of course not!", 0.5, 0.0).on_action(|ctx| ctx.close_dialog()));
    Dialog::new(root)
}

/// Choice of promotion piece, stored in `Session::promotion`.
pub fn promote(font: &Font, pieces: &PieceSet) -> Dialog {
    let choices = PieceKind::PROMOTIONS.into_iter().fold(HBox::new(0), |hbox, kind| {
        let image = Image::new(*pieces.get(GuiPiece::from(kind)));
        hbox.child(Action::new(image).on_action(move |ctx| {
            ctx.session.promotion = Some(kind);
            ctx.close_dialog();
        }))
    });
    let root = VBox::new(0)
        .child(Text::new(font, "Promotion! Choose new piece!"))
        .child(choices);
    Dialog::new(root).modal(true)
}

/// End of game announcement, framed by two piece images.
pub fn victory(font: &Font, assets: &Assets, result: &GameResult) -> Dialog {
    let white = assets.pieces(Colour::White);
    let black = assets.pieces(Colour::Black);
    let (left, right) = match result.code {
        ResultCode::WhiteWins => (white.get(GuiPiece::King), white.get(GuiPiece::Queen)),
        ResultCode::BlackWins => (black.get(GuiPiece::King), black.get(GuiPiece::Queen)),
        ResultCode::Draw => (white.get(GuiPiece::King), black.get(GuiPiece::King)),
    };
    let text = VBox::new(0)
        .child(Text::new(font, result.headline()))
        .child(Text::new(font, result.reason.as_str()))
        .child(Text::new(font, ""))
        .child(ok_button(font));
    let root = HBox::new(20)
        .child(Image::new(*left))
        .child(text)
        .child(Image::new(*right));
    Dialog::new(root).modal(true)
}

/// A message from the engine.
pub fn message(font: &Font, msg: &str) -> Dialog {
    let root = VBox::new(0)
        .child(Text::new(font, "Important message from engine"))
        .child(Text::new(font, ""))
        .child(Text::new(font, msg))
        .child(Text::new(font, ""))
        .child(ok_button(font));
    Dialog::new(root).modal(true)
}

//! The title screen dialog

use crate::core::{GameType, TitleStatus};
use crate::dialog::Dialog;
use crate::render::Font;
use crate::theme::ThemeList;
use crate::widgets::{Action, HBox, Options, Text, TextEntry, VBox};

const LEVELS: [&str; 4] = ["Level 1", "Level 2", "Level 3", "Level 4"];

fn label(font: &Font, text: &str) -> Text {
    Text::new(font, text).align(0.0, 0.0)
}

fn choices<'a>(font: &Font, names: impl IntoIterator<Item = &'a str>) -> Options {
    names.into_iter().fold(Options::new(font), |options, name| options.label(font, name))
}

/// Start/quit actions plus the game setup options. Choices land in the
/// session; Start and Quit set `Session::title` and close the dialog.
pub fn title(font: &Font, themes: &ThemeList) -> Dialog {
    let labels = ["Players:", "Difficulty:", "Theme:", "Chess Set:", "Board:", "Name:"]
        .into_iter()
        .fold(VBox::new(0), |vbox, text| vbox.child(label(font, text)));

    let options = VBox::new(0)
        .child(choices(font, GameType::LABELS).on_select(|index, ctx| {
            if let Some(game_type) = GameType::from_index(index) {
                ctx.session.game_type = game_type;
            }
        }))
        .child(choices(font, LEVELS).on_select(|index, ctx| {
            ctx.session.cpu_level = index as u8 + 1;
        }))
        .child(
            choices(font, themes.themes.iter().map(String::as_str))
                .on_select(|index, ctx| ctx.session.theme = index),
        )
        .child(
            choices(font, themes.pieces.iter().map(String::as_str))
                .on_select(|index, ctx| ctx.session.pieces = index),
        )
        .child(
            choices(font, themes.boards.iter().map(String::as_str))
                .on_select(|index, ctx| ctx.session.board = index),
        )
        .child(TextEntry::new(font).on_change(|value, ctx| {
            ctx.session.player_name = value.to_string();
        }));

    let root = VBox::new(0)
        .child(Action::with_label(font, "Start Game", 0.0, 0.0).on_action(|ctx| {
            ctx.session.title = TitleStatus::Start;
            ctx.close_dialog();
        }))
        .child(HBox::new(20).child(labels).child(options))
        .child(Action::with_label(font, "Quit Game", 0.0, 0.0).on_action(|ctx| {
            ctx.session.title = TitleStatus::Quit;
            ctx.close_dialog();
        }));

    Dialog::new(root).modal(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Session, UiEvent};
    use crate::dialog::DialogStack;
    use crate::input::dispatch_to_dialogs;
    use crate::testing;

    fn themes() -> ThemeList {
        ThemeList {
            themes: vec!["classic".into()],
            pieces: vec!["wood".into(), "glass".into()],
            boards: vec!["marble".into(), "plain".into()],
        }
    }

    fn send(stack: &mut DialogStack, session: &mut Session, events: &[UiEvent]) {
        let assets = testing::assets();
        for &event in events {
            dispatch_to_dialogs(stack, event, &assets, session);
        }
    }

    #[test]
    fn test_start_game() {
        let assets = testing::assets();
        let mut stack = DialogStack::new();
        let mut session = Session::default();
        stack.open(title(&assets.font, &themes())).unwrap();
        assert!(stack.current().unwrap().is_modal());

        send(&mut stack, &mut session, &[UiEvent::Escape]);
        assert_eq!(stack.depth(), 1);

        send(&mut stack, &mut session, &[UiEvent::Action]);
        assert_eq!(session.title, TitleStatus::Start);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_options_update_session() {
        let assets = testing::assets();
        let mut stack = DialogStack::new();
        let mut session = Session::default();
        stack.open(title(&assets.font, &themes())).unwrap();

        // Players, then difficulty; the single-theme option is skipped
        send(
            &mut stack,
            &mut session,
            &[UiEvent::Down, UiEvent::Right, UiEvent::Down, UiEvent::Right, UiEvent::Right],
        );
        assert_eq!(session.game_type, GameType::CpuVsHuman);
        assert!(session.flip_board());
        assert_eq!(session.cpu_level, 3);

        send(&mut stack, &mut session, &[UiEvent::Down, UiEvent::Right]);
        assert_eq!(session.theme, 0);
        assert_eq!(session.pieces, 1);

        send(
            &mut stack,
            &mut session,
            &[UiEvent::Down, UiEvent::Down, UiEvent::Char('B'), UiEvent::Char('o'), UiEvent::Char('b')],
        );
        assert_eq!(session.board, 0);
        assert_eq!(session.player_name, "Bob");
        assert_eq!(session.title, TitleStatus::Choosing);
    }

    #[test]
    fn test_quit_game() {
        let assets = testing::assets();
        let mut stack = DialogStack::new();
        let mut session = Session::default();
        stack.open(title(&assets.font, &themes())).unwrap();

        // Start -> options -> (past the name entry) -> Quit
        let mut events = vec![UiEvent::Down; 6];
        events.push(UiEvent::Action);
        send(&mut stack, &mut session, &events);
        assert_eq!(session.title, TitleStatus::Quit);
        assert!(stack.is_empty());
    }
}

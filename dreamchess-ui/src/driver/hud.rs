//! 2D overlay drawn around the board during play

use crate::core::context::Color;
use crate::driver::{Board, Colour, MoveHistory, PieceKind};
use crate::render::{Canvas, Texture, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::theme::{Assets, GuiPiece};

/// Moves shown per side.
pub const MOVE_LIST_LEN: usize = 5;

const MOVES_WHITE_X: i32 = 30;
const MOVES_BLACK_X: i32 = 610;
const MOVES_Y: i32 = 360;
const CAPTURED_LEFT_X: i32 = 70;
const CAPTURED_RIGHT_X: i32 = 570;
const CAPTURED_Y: i32 = 180;

pub fn draw_backdrop(canvas: &mut Canvas<'_>, backdrop: &Texture) {
    canvas.texture(
        backdrop,
        0.0,
        0.0,
        SCREEN_WIDTH as f32,
        SCREEN_HEIGHT as f32,
        Color::new(1.0, 1.0, 1.0, 0.95),
    );
}

/// Last few moves of each side, white on the left and black on the right.
/// The move leading to the shown position uses `high`.
pub fn draw_move_list(canvas: &mut Canvas<'_>, history: &MoveHistory, normal: Color, high: Color) {
    let Some(view) = history.view else {
        return;
    };
    let window = 2 * (MOVE_LIST_LEN - 1) + view % 2;
    let start = view.saturating_sub(window);
    let line = canvas.font().height();
    let colour = |i: usize| if i == view { high } else { normal };

    let mut y = MOVES_Y;
    for i in (start..=view).step_by(2) {
        if let Some(notation) = history.moves.get(i) {
            let text = format!("{}.{}", i / 2 + 1, notation);
            canvas.text(MOVES_WHITE_X + 5, y - 5, &text, 1.0, colour(i));
        }
        y -= line;
    }

    let mut y = MOVES_Y;
    for i in (start + 1..=view).step_by(2) {
        if let Some(notation) = history.moves.get(i) {
            canvas.text_right(MOVES_BLACK_X - 5, y - 5, notation, 1.0, colour(i));
        }
        y -= line;
    }
}

/// Captured piece counts, queen first. Black's losses on the left, white's
/// on the right. Zero counts leave their row empty.
pub fn draw_capture_list(canvas: &mut Canvas<'_>, board: &Board, color: Color) {
    let line = canvas.font().height();
    let mut y = CAPTURED_Y;
    for &kind in PieceKind::CAPTURABLE.iter().rev() {
        let black = board.captured(Colour::Black, kind);
        if black != 0 {
            canvas.text(CAPTURED_LEFT_X, y, &black.to_string(), 1.0, color);
        }
        let white = board.captured(Colour::White, kind);
        if white != 0 {
            canvas.text_right(CAPTURED_RIGHT_X, y, &white.to_string(), 1.0, color);
        }
        y -= line;
    }
}

/// Avatar and name of one player. White's plate is on the left.
pub fn draw_name_plate(canvas: &mut Canvas<'_>, assets: &Assets, x: i32, y: i32, name: &str, colour: Colour) {
    const WIDTH: i32 = 100;
    let avatar = assets.pieces(colour).get(GuiPiece::Avatar);
    let avatar_x = match colour {
        Colour::White => x - 45,
        Colour::Black => x + 45,
    };
    canvas.texture(
        avatar,
        avatar_x as f32,
        (y - 50) as f32,
        100.0,
        100.0,
        Color::new(1.0, 1.0, 1.0, 0.8),
    );

    let text_x = match colour {
        Colour::White => x + WIDTH - 10 - canvas.font().text_width(name),
        Colour::Black => x + 10,
    };
    canvas.text(text_x, y + 5, name, 1.0, Color::BLACK);
}

pub fn draw_name_plates(canvas: &mut Canvas<'_>, assets: &Assets) {
    draw_name_plate(canvas, assets, 50, 430, "White", Colour::White);
    draw_name_plate(canvas, assets, 490, 430, "Black", Colour::Black);
}

pub fn draw_check(canvas: &mut Canvas<'_>, in_check: Option<Colour>) {
    let text = match in_check {
        Some(Colour::White) => "White is in check!",
        Some(Colour::Black) => "Black is in check!",
        None => return,
    };
    canvas.text_bouncy(180, 420, text, 2.0, Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Font, Primitive, RenderList};
    use crate::testing;

    fn texts_at(list: &RenderList) -> Vec<(String, f32, Color)> {
        list.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, y, color, .. } => Some((text.clone(), *y, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_move_list_window() {
        let font = Font::monospace(8, 16);
        let history = MoveHistory {
            moves: (0..14).map(|i| format!("m{i}")).collect(),
            view: Some(12),
        };
        let mut list = RenderList::new();
        draw_move_list(&mut Canvas::new(&mut list, &font, 0), &history, Color::WHITE, Color::YELLOW);

        let texts = texts_at(&list);
        let white: Vec<_> = texts.iter().filter(|t| t.0.contains('.')).collect();
        assert_eq!(white.len(), MOVE_LIST_LEN);
        assert_eq!(white[0].0, "3.m4");
        assert_eq!(white[0].1, 355.0);
        assert_eq!(white[4].0, "7.m12");
        assert_eq!(white[4].2, Color::YELLOW);
        assert_eq!(white[3].2, Color::WHITE);

        let black: Vec<_> = texts.iter().filter(|t| !t.0.contains('.')).map(|t| t.0.as_str()).collect();
        assert_eq!(black, vec!["m5", "m7", "m9", "m11"]);
    }

    #[test]
    fn test_move_list_black_to_view() {
        let font = Font::monospace(8, 16);
        let history = MoveHistory {
            moves: vec!["e4".into(), "e5".into()],
            view: Some(1),
        };
        let mut list = RenderList::new();
        draw_move_list(&mut Canvas::new(&mut list, &font, 0), &history, Color::WHITE, Color::YELLOW);
        let texts = texts_at(&list);
        assert_eq!(texts[0], ("1.e4".to_string(), 355.0, Color::WHITE));
        assert_eq!(texts[1], ("e5".to_string(), 355.0, Color::YELLOW));

        let mut list = RenderList::new();
        let empty = MoveHistory::default();
        draw_move_list(&mut Canvas::new(&mut list, &font, 0), &empty, Color::WHITE, Color::YELLOW);
        assert!(list.primitives.is_empty());
    }

    #[test]
    fn test_capture_list() {
        let font = Font::monospace(8, 16);
        let mut board = Board::default();
        board.captured[Colour::Black.index()][4] = 1;
        board.captured[Colour::White.index()][0] = 3;
        let mut list = RenderList::new();
        draw_capture_list(&mut Canvas::new(&mut list, &font, 0), &board, Color::WHITE);

        match &list.primitives[..] {
            [Primitive::Text { x: qx, y: qy, text: queen, .. }, Primitive::Text { x: px, y: py, text: pawns, .. }] => {
                assert_eq!((queen.as_str(), *qx, *qy), ("1", 70.0, 180.0));
                assert_eq!((pawns.as_str(), *px, *py), ("3", 562.0, 180.0 - 4.0 * 16.0));
            }
            other => panic!("unexpected primitives {other:?}"),
        }
    }

    #[test]
    fn test_check_banner() {
        let font = Font::monospace(8, 16);
        let mut list = RenderList::new();
        draw_check(&mut Canvas::new(&mut list, &font, 0), None);
        assert!(list.primitives.is_empty());
        draw_check(&mut Canvas::new(&mut list, &font, 0), Some(Colour::Black));
        assert_eq!(list.texts().collect::<String>(), "Black is in check!");
    }

    #[test]
    fn test_name_plates() {
        let assets = testing::assets();
        let mut list = RenderList::new();
        draw_name_plates(&mut Canvas::new(&mut list, &assets.font, 0), &assets);
        let names: Vec<_> = list
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { x, text, .. } => Some((text.as_str(), *x)),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec![("White", 100.0), ("Black", 500.0)]);
        let avatars = list
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Image { width, .. } if *width == 100.0))
            .count();
        assert_eq!(avatars, 2);
    }
}

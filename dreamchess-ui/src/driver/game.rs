//! Collaborators the driver talks to: the game and the 3D scene

use crate::driver::{Board, Move};

/// Requests the in-game dialog forwards to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    RetractMove,
    MoveNow,
    ViewPrev,
    ViewNext,
}

impl GameCommand {
    pub fn apply(self, game: &mut dyn Game) {
        match self {
            GameCommand::RetractMove => game.retract_move(),
            GameCommand::MoveNow => game.move_now(),
            GameCommand::ViewPrev => game.view_prev(),
            GameCommand::ViewNext => game.view_next(),
        }
    }
}

/// Played moves in notation, plus which of them the board currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    pub moves: Vec<String>,
    /// Index of the move leading to the shown position; `None` before the first move.
    pub view: Option<usize>,
}

/// The chess game behind the UI.
pub trait Game {
    fn make_move(&mut self, mv: Move);
    fn retract_move(&mut self);
    fn move_now(&mut self);
    fn view_prev(&mut self);
    fn view_next(&mut self);
    fn undo(&mut self);
    /// Whether a human is expected to enter a move now.
    fn want_move(&self) -> bool;
    fn move_history(&self) -> MoveHistory;
    /// Leave the current game and go back to the title menu.
    fn quit(&mut self);
}

/// Direction the square selector moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorMove {
    Up,
    Down,
    Left,
    Right,
}

/// The 3D board renderer. Everything here is owned outside the UI layer.
pub trait Scene {
    /// Draws the board, between the HUD and the dialogs.
    fn render(&mut self, board: &Board);
    fn move_selector(&mut self, direction: SelectorMove);
    /// Square under the selector, in board orientation as displayed.
    fn selector(&self) -> usize;
    /// Highlights a square, or clears the highlight.
    fn select_piece(&mut self, square: Option<usize>);
    /// Moves the camera forward/back by `forward` and sideways by `sideways`.
    fn move_camera(&mut self, forward: f32, sideways: f32);
}

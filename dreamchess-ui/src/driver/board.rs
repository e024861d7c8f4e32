//! Board snapshot and move types exchanged with the game

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    pub fn index(self) -> usize {
        match self {
            Colour::White => 0,
            Colour::Black => 1,
        }
    }

    pub fn opponent(self) -> Colour {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds that can be captured, in the order of `Board::captured`.
    pub const CAPTURABLE: [PieceKind; 5] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Promotion choices, in dialog order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub colour: Colour,
}

impl Piece {
    pub const fn new(kind: PieceKind, colour: Colour) -> Self {
        Self { kind, colour }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardState {
    #[default]
    Normal,
    Check,
    Mate,
    Stalemate,
}

/// Snapshot of a position. Squares run a1 = 0 to h8 = 63.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub squares: [Option<Piece>; 64],
    pub turn: Colour,
    pub state: BoardState,
    /// Captured piece counts per colour, indexed like `PieceKind::CAPTURABLE`.
    pub captured: [[u8; 5]; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            turn: Colour::White,
            state: BoardState::Normal,
            captured: [[0; 5]; 2],
        }
    }
}

impl Board {
    pub fn piece(&self, square: usize) -> Option<Piece> {
        self.squares.get(square).copied().flatten()
    }

    /// Number of captured pieces of `colour` and `kind`.
    pub fn captured(&self, colour: Colour, kind: PieceKind) -> u8 {
        PieceKind::CAPTURABLE
            .iter()
            .position(|&k| k == kind)
            .map_or(0, |i| self.captured[colour.index()][i])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub source: usize,
    pub destination: usize,
    pub promotion: Option<PieceKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    WhiteWins,
    BlackWins,
    Draw,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub code: ResultCode,
    pub reason: String,
}

impl GameResult {
    pub fn headline(&self) -> &'static str {
        match self.code {
            ResultCode::WhiteWins => "White won the match!",
            ResultCode::BlackWins => "Black won the match!",
            ResultCode::Draw => "The game ended in a draw!",
        }
    }
}

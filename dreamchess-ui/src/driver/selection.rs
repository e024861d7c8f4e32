//! Turning picked squares into a move

use crate::driver::{Board, Colour, Move, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Promotion {
    #[default]
    NotNeeded,
    Asked,
    Chosen,
}

/// What the driver should do after a selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStep {
    Idle,
    /// A destination was accepted; drop the square highlight.
    ClearHighlight,
    /// Open the promotion dialog for `Colour`.
    AskPromotion(Colour),
    Move(Move),
}

/// Source and destination squares picked so far, in board coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    source: Option<usize>,
    dest: Option<usize>,
    promotion: Promotion,
}

impl Selection {
    pub fn reset(&mut self) {
        *self = Selection::default();
    }

    pub fn source(&self) -> Option<usize> {
        self.source
    }

    pub fn dest(&self) -> Option<usize> {
        self.dest
    }

    /// Advances by one frame. `picked` is the square chosen this frame as the
    /// selector shows it; a flipped board mirrors it. `chosen` is the piece
    /// picked in the promotion dialog, if any yet.
    pub fn step(
        &mut self,
        picked: Option<usize>,
        board: &Board,
        flip: bool,
        want_move: bool,
        chosen: Option<PieceKind>,
    ) -> SelectionStep {
        if !want_move {
            self.reset();
        }
        let picked = picked.map(|square| if flip { 63 - square } else { square });
        let own = |square: usize| board.piece(square).is_some_and(|p| p.colour == board.turn);

        let Some(source) = self.source else {
            self.source = picked.filter(|&square| own(square));
            return SelectionStep::Idle;
        };

        let Some(dest) = self.dest else {
            return match picked {
                Some(square) if own(square) => {
                    self.source = Some(square);
                    SelectionStep::Idle
                }
                Some(square) => {
                    self.dest = Some(square);
                    SelectionStep::ClearHighlight
                }
                None => SelectionStep::Idle,
            };
        };

        match self.promotion {
            Promotion::Asked if chosen.is_none() => return SelectionStep::Idle,
            Promotion::Asked => self.promotion = Promotion::Chosen,
            Promotion::NotNeeded => {
                if let Some(colour) = promoting_pawn(board, source, dest) {
                    self.promotion = Promotion::Asked;
                    return SelectionStep::AskPromotion(colour);
                }
            }
            Promotion::Chosen => {}
        }

        let mv = Move {
            source,
            destination: dest,
            promotion: if self.promotion == Promotion::Chosen { chosen } else { None },
        };
        self.reset();
        SelectionStep::Move(mv)
    }
}

fn promoting_pawn(board: &Board, source: usize, dest: usize) -> Option<Colour> {
    let piece = board.piece(source).filter(|p| p.kind == PieceKind::Pawn)?;
    let last_rank = match piece.colour {
        Colour::White => dest >= 56,
        Colour::Black => dest <= 7,
    };
    last_rank.then_some(piece.colour)
}

//! Self-contained move records.
//!
//! A `Move` carries everything `unmake_move` needs besides the pre-move
//! castling/en-passant snapshot kept in `UndoState`.

use std::fmt;

use crate::game_state::chess_types::{Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    None,
    DoublePawnPush,
    EnPassant,
    Promotion(PieceKind),
    CastleKingside,
    CastleQueenside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    /// For en passant this is the pawn behind `to`, not a piece on `to`.
    pub captured: Option<Piece>,
    pub special: SpecialMove,
}

impl Move {
    #[inline]
    pub const fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
            special: SpecialMove::None,
        }
    }

    #[inline]
    pub const fn capture(from: Square, to: Square, piece: Piece, captured: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured: Some(captured),
            special: SpecialMove::None,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(
            self.special,
            SpecialMove::CastleKingside | SpecialMove::CastleQueenside
        )
    }

    #[inline]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self.special {
            SpecialMove::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    /// Square of the captured piece. Differs from `to` only for en passant.
    #[inline]
    pub fn capture_square(&self) -> Square {
        match self.special {
            SpecialMove::EnPassant => Square::at(self.from.rank(), self.to.file()),
            _ => self.to,
        }
    }
}

/// Long algebraic form, e.g. `e2e4`, `e7e8q`, `e1g1`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

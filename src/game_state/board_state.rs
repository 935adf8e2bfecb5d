//! Mailbox board representation.
//!
//! `BoardState` is a bare 8x8 grid of optional pieces plus turn, castling,
//! en-passant, and clock metadata. It performs no legality checking; that is
//! the job of `move_generation`.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    /// Indexed `[rank][file]`.
    squares: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Set only immediately after a double pawn push.
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            squares: [[None; 8]; 8],
            side_to_move: Color::Light,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl BoardState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial position.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.into_iter().enumerate() {
            let file = file as u8;
            board.set_piece(Square::at(0, file), Some(Piece::new(kind, Color::Light)));
            board.set_piece(
                Square::at(1, file),
                Some(Piece::new(PieceKind::Pawn, Color::Light)),
            );
            board.set_piece(
                Square::at(6, file),
                Some(Piece::new(PieceKind::Pawn, Color::Dark)),
            );
            board.set_piece(Square::at(7, file), Some(Piece::new(kind, Color::Dark)));
        }
        board.castling_rights = CastlingRights::ALL;
        debug_assert_eq!(board.to_fen(), STARTING_POSITION_FEN);
        board
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Piece on `square` if it belongs to `color`.
    #[inline]
    pub fn piece_of(&self, square: Square, color: Color) -> Option<Piece> {
        self.piece_at(square).filter(|piece| piece.color == color)
    }

    /// Occupied squares with their pieces, in board-scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(sq, _)| sq)
    }
}

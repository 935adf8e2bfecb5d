//! In-place make/unmake.
//!
//! `make_move` mutates the board and returns the `UndoState` that
//! `unmake_move` consumes to restore it exactly. Callers must unmake in
//! strict stack order.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{kingside_path, queenside_path};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::moves::move_descriptions::{Move, SpecialMove};

pub fn make_move(board: &mut BoardState, mv: Move) -> UndoState {
    let undo = UndoState {
        mv,
        prev_castling_rights: board.castling_rights,
        prev_en_passant_target: board.en_passant_target,
        prev_halfmove_clock: board.halfmove_clock,
        prev_fullmove_number: board.fullmove_number,
    };

    let mover = mv.piece.color;

    if mv.captured.is_some() {
        board.set_piece(mv.capture_square(), None);
    }

    board.set_piece(mv.from, None);
    let placed = match mv.promotion() {
        Some(kind) => Piece::new(kind, mover),
        None => mv.piece,
    };
    board.set_piece(mv.to, Some(placed));

    match mv.special {
        SpecialMove::CastleKingside => {
            let path = kingside_path(mover);
            relocate(board, path.rook_from, path.rook_to);
        }
        SpecialMove::CastleQueenside => {
            let path = queenside_path(mover);
            relocate(board, path.rook_from, path.rook_to);
        }
        _ => {}
    }

    if mv.piece.kind == PieceKind::King {
        board.castling_rights.revoke_color(mover);
    }
    // A rook leaving its corner, or anything landing on a corner (capturing
    // the rook in place), ends that side's right.
    board.castling_rights.revoke_corner(mv.from);
    board.castling_rights.revoke_corner(mv.to);

    board.en_passant_target = match mv.special {
        SpecialMove::DoublePawnPush => mv.from.offset(mover.forward(), 0),
        _ => None,
    };

    if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
        board.halfmove_clock = 0;
    } else {
        board.halfmove_clock = board.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Dark {
        board.fullmove_number = board.fullmove_number.saturating_add(1);
    }

    board.side_to_move = mover.opposite();
    undo
}

pub fn unmake_move(board: &mut BoardState, undo: &UndoState) {
    let mv = undo.mv;
    let mover = mv.piece.color;

    match mv.special {
        SpecialMove::CastleKingside => {
            let path = kingside_path(mover);
            relocate(board, path.rook_to, path.rook_from);
        }
        SpecialMove::CastleQueenside => {
            let path = queenside_path(mover);
            relocate(board, path.rook_to, path.rook_from);
        }
        _ => {}
    }

    board.set_piece(mv.to, None);
    board.set_piece(mv.from, Some(mv.piece));
    if let Some(captured) = mv.captured {
        board.set_piece(mv.capture_square(), Some(captured));
    }

    board.side_to_move = mover;
    board.castling_rights = undo.prev_castling_rights;
    board.en_passant_target = undo.prev_en_passant_target;
    board.halfmove_clock = undo.prev_halfmove_clock;
    board.fullmove_number = undo.prev_fullmove_number;
}

fn relocate(board: &mut BoardState, from: Square, to: Square) {
    let piece = board.piece_at(from);
    board.set_piece(from, None);
    board.set_piece(to, piece);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(board: &BoardState, text: &str) -> Move {
        crate::move_generation::legal_move_generator::generate_legal_moves(board)
            .into_iter()
            .find(|mv| mv.to_string() == text)
            .unwrap_or_else(|| panic!("{text} should be legal"))
    }

    #[test]
    fn double_push_sets_en_passant_target_and_unmake_clears_it() {
        let mut board = BoardState::new_game();
        let before = board.clone();
        let mv = find(&board, "e2e4");
        let undo = make_move(&mut board, mv);
        assert_eq!(board.en_passant_target, Some(Square::at(2, 4)));
        assert_eq!(board.side_to_move, Color::Dark);
        unmake_move(&mut board, &undo);
        assert_eq!(board, before);
    }

    #[test]
    fn castling_relocates_rook_and_unmake_restores_it() {
        let mut board =
            BoardState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10").expect("FEN should parse");
        let before = board.clone();
        let mv = find(&board, "e1c1");
        let undo = make_move(&mut board, mv);
        assert_eq!(
            board.piece_at(Square::at(0, 3)),
            Some(Piece::new(PieceKind::Rook, Color::Light))
        );
        assert_eq!(board.piece_at(Square::at(0, 0)), None);
        assert!(!board.castling_rights.light_kingside);
        assert!(!board.castling_rights.light_queenside);
        assert!(board.castling_rights.dark_kingside);
        assert_eq!(board.halfmove_clock, 4);
        unmake_move(&mut board, &undo);
        assert_eq!(board, before);
    }

    #[test]
    fn capturing_rook_in_its_corner_revokes_that_right() {
        let mut board =
            BoardState::from_fen("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1").expect("FEN should parse");
        let before = board.clone();
        let mv = find(&board, "g2h1");
        let undo = make_move(&mut board, mv);
        assert!(!board.castling_rights.light_kingside);
        assert!(board.castling_rights.light_queenside);
        assert_eq!(board.fullmove_number, 2);
        unmake_move(&mut board, &undo);
        assert_eq!(board, before);
    }

    #[test]
    fn promotion_capture_unmakes_to_pawn_and_victim() {
        let mut board = BoardState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let before = board.clone();
        let mv = find(&board, "a7b8q");
        let undo = make_move(&mut board, mv);
        assert_eq!(
            board.piece_at(Square::at(7, 1)),
            Some(Piece::new(PieceKind::Queen, Color::Light))
        );
        unmake_move(&mut board, &undo);
        assert_eq!(board, before);
    }
}

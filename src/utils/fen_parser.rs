//! FEN-to-BoardState parser.
//!
//! Builds a board from a Forsyth-Edwards Notation string, including rights,
//! en-passant target, and clocks. The clock fields are optional and default
//! to `0 1`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<BoardState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut board = BoardState::new_empty();

    parse_board(board_part, &mut board)?;
    board.side_to_move = parse_side_to_move(side_part)?;
    board.castling_rights = parse_castling_rights(castling_part)?;
    board.en_passant_target = parse_en_passant_square(en_passant_part, &board)?;
    board.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid halfmove clock: {halfmove_part}")))?;
    board.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid fullmove number: {fullmove_part}")))?;

    for color in [Color::Light, Color::Dark] {
        let kings = board
            .pieces()
            .filter(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .count();
        if kings != 1 {
            return Err(invalid(&format!("expected one {color} king, found {kings}")));
        }
    }

    Ok(board)
}

fn invalid(message: &str) -> ChessError {
    ChessError::InvalidFen(message.to_owned())
}

fn parse_board(board_part: &str, board: &mut BoardState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            board.set_piece(Square::new(rank, file)?, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light_kingside = true,
            'Q' => rights.light_queenside = true,
            'k' => rights.dark_kingside = true,
            'q' => rights.dark_queenside = true,
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// The target must be the empty square a pawn of the side not to move just
/// skipped, with that pawn standing directly behind it.
fn parse_en_passant_square(en_passant_part: &str, board: &BoardState) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;
    let pusher = board.side_to_move.opposite();
    let expected_rank = pusher.pawn_start_rank() as i8 + pusher.forward();
    if square.rank() as i8 != expected_rank {
        return Err(invalid(&format!("en-passant square on wrong rank: {en_passant_part}")));
    }
    if !board.is_empty(square) {
        return Err(invalid(&format!("en-passant square is occupied: {en_passant_part}")));
    }
    let pushed_pawn = square
        .offset(pusher.forward(), 0)
        .and_then(|behind| board.piece_of(behind, pusher));
    if pushed_pawn.map(|piece| piece.kind) != Some(PieceKind::Pawn) {
        return Err(invalid(&format!(
            "no {pusher} pawn behind en-passant square: {en_passant_part}"
        )));
    }
    Ok(Some(square))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Color, Square};
    use crate::utils::render_game_state::render_board;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_board(&board));

        assert_eq!(board.side_to_move, Color::Light);
        assert_eq!(board.castling_rights, CastlingRights::ALL);
        assert_eq!(board.fullmove_number, 1);
        assert_eq!(board.halfmove_clock, 0);
    }

    #[test]
    fn clocks_are_optional() {
        let board = parse_fen("4k3/8/8/8/4Pp2/8/8/4K3 b - e3").expect("FEN should parse");
        assert_eq!(board.en_passant_target, Some(Square::at(2, 4)));
        assert_eq!(board.fullmove_number, 1);
    }

    #[test]
    fn overlong_empty_run_is_an_error_not_an_overflow() {
        let fen = format!("{}/8/8/8/8/8/8/4K2k w - - 0 1", "8".repeat(40));
        assert!(matches!(parse_fen(&fen), Err(ChessError::InvalidFen(_))));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K35 w - - 0 1"),
            Err(ChessError::InvalidFen(_))
        ));
    }

    #[test]
    fn accepts_en_passant_target_behind_a_pushed_pawn() {
        let light = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        assert_eq!(light.en_passant_target, Some(Square::at(5, 3)));
        let dark = parse_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1").expect("FEN should parse");
        assert_eq!(dark.en_passant_target, Some(Square::at(2, 3)));
    }

    #[test]
    fn rejects_malformed_fields() {
        for fen in [
            "8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w KX - 0 1",
            "4k3/8/8/8/8/8/8/4K4 w - - 0 1",
            "8/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e3 0 1",
            "4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1",
            "4k3/8/3p4/3p4/8/8/8/4K3 w - d6 0 1",
            "4k3/8/8/8/4P3/8/8/4K3 w - e3 0 1",
        ] {
            assert!(matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))), "{fen}");
        }
    }
}

use crate::game_state::{board_state::BoardState, chess_types::*};

pub fn generate_fen(board: &BoardState) -> String {
    let side_to_move = match board.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let en_passant = board
        .en_passant_target
        .map(|sq| sq.to_string())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(board),
        side_to_move,
        generate_castling_field(board.castling_rights),
        en_passant,
        board.halfmove_clock,
        board.fullmove_number
    )
}

fn generate_board_field(board: &BoardState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            if let Some(piece) = board.piece_at(Square::at(rank, file)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.to_fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    if rights.light_kingside {
        out.push('K');
    }
    if rights.light_queenside {
        out.push('Q');
    }
    if rights.dark_kingside {
        out.push('k');
    }
    if rights.dark_queenside {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

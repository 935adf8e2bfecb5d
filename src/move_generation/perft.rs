//! Perft: count legal move sequences to a fixed depth, with leaf breakdowns.

use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{Move, SpecialMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft_legal(board: &BoardState, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, board, depth)
}

pub fn perft<G: MoveGenerator>(generator: &G, board: &BoardState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut probe = board.clone();
    let mut total = PerftCounts::default();
    perft_recurse(generator, &mut probe, depth, &mut total);
    total
}

/// Per-root-move node counts, for diffing against a reference engine.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    board: &BoardState,
    depth: u8,
) -> Vec<(Move, u64)> {
    let mut probe = board.clone();
    let mut out = Vec::new();
    for mv in generator.generate_legal_moves(&probe) {
        let undo = make_move(&mut probe, mv);
        let counts = perft(generator, &probe, depth.saturating_sub(1));
        unmake_move(&mut probe, &undo);
        out.push((mv, counts.nodes));
    }
    out
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    board: &mut BoardState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let moves = generator.generate_legal_moves(board);

    if depth == 1 {
        for mv in moves {
            let mut leaf = PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            };
            if mv.is_capture() {
                leaf.captures = 1;
            }
            match mv.special {
                SpecialMove::EnPassant => leaf.en_passant = 1,
                SpecialMove::CastleKingside | SpecialMove::CastleQueenside => leaf.castles = 1,
                SpecialMove::Promotion(_) => leaf.promotions = 1,
                _ => {}
            }

            let undo = make_move(board, mv);
            if is_king_in_check(board, board.side_to_move) {
                leaf.checks = 1;
                if generator.generate_legal_moves(board).is_empty() {
                    leaf.checkmates = 1;
                }
            }
            unmake_move(board, &undo);
            counts.merge(leaf);
        }
        return;
    }

    for mv in moves {
        let undo = make_move(board, mv);
        perft_recurse(generator, board, depth - 1, counts);
        unmake_move(board, &undo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    const KIWIPETE_FEN: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4_FEN: &str =
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    const POSITION_5_FEN: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

    fn nodes(fen: &str, depth: u8) -> u64 {
        let board = BoardState::from_fen(fen).expect("perft FEN should parse");
        perft_legal(&board, depth).nodes
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        assert_eq!(nodes(STARTING_POSITION_FEN, 0), 1);
    }

    #[test]
    fn perft_startpos_reference_counts() {
        assert_eq!(nodes(STARTING_POSITION_FEN, 1), 20);
        assert_eq!(nodes(STARTING_POSITION_FEN, 2), 400);

        let d3 = perft_legal(&BoardState::new_game(), 3);
        assert_eq!(
            d3,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn perft_kiwipete_exercises_castling_and_en_passant() {
        let board = BoardState::from_fen(KIWIPETE_FEN).expect("perft FEN should parse");
        let d1 = perft_legal(&board, 1);
        assert_eq!(d1.nodes, 48);
        assert_eq!(d1.captures, 8);
        assert_eq!(d1.castles, 2);

        let d2 = perft_legal(&board, 2);
        assert_eq!(d2.nodes, 2039);
        assert_eq!(d2.captures, 351);
        assert_eq!(d2.en_passant, 1);
        assert_eq!(d2.castles, 91);
        assert_eq!(d2.checks, 3);
    }

    #[test]
    fn perft_position_3_reference_counts() {
        assert_eq!(nodes(POSITION_3_FEN, 1), 14);
        assert_eq!(nodes(POSITION_3_FEN, 2), 191);
        assert_eq!(nodes(POSITION_3_FEN, 3), 2812);
    }

    #[test]
    fn perft_position_4_reference_counts() {
        assert_eq!(nodes(POSITION_4_FEN, 1), 6);
        assert_eq!(nodes(POSITION_4_FEN, 2), 264);
        assert_eq!(nodes(POSITION_4_FEN, 3), 9467);
    }

    #[test]
    fn perft_position_5_reference_counts() {
        assert_eq!(nodes(POSITION_5_FEN, 1), 44);
        assert_eq!(nodes(POSITION_5_FEN, 2), 1486);
    }

    #[test]
    fn divide_sums_to_total() {
        let board = BoardState::new_game();
        let divided = perft_divide(&LegalMoveGenerator, &board, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, count)| *count == 20));
        assert_eq!(divided.iter().map(|(_, count)| count).sum::<u64>(), 400);
    }
}

//! Crate root module declarations for the Plum chess rules and search engine.
//!
//! Exposes the board model, move generation, the game state machine, search,
//! engines, and utility helpers under stable paths for the binaries, the
//! benches, and external tooling.

pub mod config;
pub mod errors;
pub mod logging;

pub mod game_state {
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod rays;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliding;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod background;
    pub mod board_scoring;
    pub mod minimax;
    pub mod search_control;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_record;
    pub mod long_algebraic;
    pub mod render_game_state;
}

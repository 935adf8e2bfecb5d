//! Error types shared by the game state machine, search, and utilities.

use thiserror::Error;

use crate::game_state::chess_types::GameStatus;

/// Represents all recoverable error conditions surfaced by the engine.
#[derive(Error, Debug)]
pub enum ChessError {
    /// `apply` was called with a move outside the current legal set.
    #[error("illegal move: {mv}")]
    IllegalMove { mv: String },

    /// `undo` was called with no applied moves.
    #[error("no moves to undo")]
    EmptyHistory,

    /// A coordinate outside the 8x8 board.
    #[error("invalid square: rank {rank}, file {file} (must be 0-7)")]
    InvalidSquare { rank: u8, file: u8 },

    /// The game already reached checkmate or stalemate.
    #[error("game is over: {0}")]
    GameOver(GameStatus),

    /// The provided FEN string is invalid or could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The provided algebraic text is invalid or could not be parsed.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

pub type ChessResult<T> = Result<T, ChessError>;

//! The authoritative game: one board, its history, and derived status.
//!
//! `GameState` is the only type that mutates a live board during real play.
//! Every `apply` and `undo` refreshes the cached legal move list and status,
//! and `apply` validates against that list before touching the board, so a
//! failed call leaves the game unchanged.

use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves_in_place;
use crate::moves::move_descriptions::Move;
use crate::utils::long_algebraic::long_algebraic_to_move;

#[derive(Debug, Clone)]
pub struct GameState {
    board: BoardState,
    /// Position the history starts from; replaying history from here
    /// reproduces `board`.
    start_position: BoardState,
    history: Vec<UndoState>,
    legal_moves: Vec<Move>,
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    pub fn new_game() -> Self {
        Self::from_board(BoardState::new_game())
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self::from_board(BoardState::from_fen(fen)?))
    }

    pub fn from_board(board: BoardState) -> Self {
        let mut game = Self {
            start_position: board.clone(),
            board,
            history: Vec::new(),
            legal_moves: Vec::new(),
            status: GameStatus::Ongoing,
        };
        game.refresh();
        game
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn start_position(&self) -> &BoardState {
        &self.start_position
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// Legal moves for the side to move, in generator order.
    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    /// Applied moves, oldest first.
    pub fn move_history(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|entry| entry.mv)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        self.board.to_fen()
    }

    pub fn apply(&mut self, mv: Move) -> ChessResult<GameStatus> {
        if self.status.is_terminal() {
            return Err(ChessError::GameOver(self.status));
        }
        if !self.legal_moves.contains(&mv) {
            return Err(ChessError::IllegalMove { mv: mv.to_string() });
        }

        let undo = make_move(&mut self.board, mv);
        self.history.push(undo);
        self.refresh();

        debug!(mv = %mv, status = %self.status, ply = self.history.len(), "applied move");
        Ok(self.status)
    }

    /// Resolve long algebraic text against the legal set and apply it.
    pub fn apply_long_algebraic(&mut self, text: &str) -> ChessResult<GameStatus> {
        if self.status.is_terminal() {
            return Err(ChessError::GameOver(self.status));
        }
        let mv = long_algebraic_to_move(text, &self.legal_moves)?;
        self.apply(mv)
    }

    /// Reverts the most recent move and returns it.
    pub fn undo(&mut self) -> ChessResult<Move> {
        let undo = self.history.pop().ok_or(ChessError::EmptyHistory)?;
        unmake_move(&mut self.board, &undo);
        self.refresh();

        debug!(mv = %undo.mv, status = %self.status, ply = self.history.len(), "undid move");
        Ok(undo.mv)
    }

    /// Restores the standard initial position and clears history.
    pub fn reset(&mut self) {
        *self = Self::new_game();
        debug!("reset to initial position");
    }

    fn refresh(&mut self) {
        self.legal_moves = generate_legal_moves_in_place(&mut self.board);
        self.status = compute_status(&self.board, &self.legal_moves);
    }
}

/// Status of `board` given the legal moves of its side to move.
pub fn compute_status(board: &BoardState, legal_moves: &[Move]) -> GameStatus {
    let side = board.side_to_move;
    let in_check = is_king_in_check(board, side);
    match (legal_moves.is_empty(), in_check) {
        (true, true) => GameStatus::Checkmate(side),
        (true, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::Check(side),
        (false, false) => GameStatus::Ongoing,
    }
}

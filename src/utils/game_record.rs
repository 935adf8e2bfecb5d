//! Saved games: start position, moves in long algebraic, and a timestamp.
//!
//! Loading replays every move through `GameState::apply`, so a record that
//! was edited into an illegal sequence is rejected rather than trusted.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub saved_at: DateTime<Utc>,
    pub start_fen: String,
    pub moves: Vec<String>,
}

impl GameRecord {
    pub fn from_game(game: &GameState) -> Self {
        Self {
            saved_at: Utc::now(),
            start_fen: game.start_position().to_fen(),
            moves: game.move_history().map(|mv| mv.to_string()).collect(),
        }
    }

    pub fn replay(&self) -> ChessResult<GameState> {
        let mut game = GameState::from_fen(&self.start_fen)?;
        for text in &self.moves {
            game.apply_long_algebraic(text)?;
        }
        Ok(game)
    }

    pub fn to_json(&self) -> ChessResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ChessResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ChessResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), plies = self.moves.len(), "saved game");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> ChessResult<Self> {
        let path = path.as_ref();
        let record = Self::from_json(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), plies = record.moves.len(), saved_at = %record.saved_at, "loaded game");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessError;

    fn sample_game() -> GameState {
        let mut game = GameState::new_game();
        for text in ["e2e4", "d7d5", "e4d5", "g8f6", "f1b5", "c7c6", "d5c6", "d8d7", "c6b7", "d7b5", "b7a8q"] {
            game.apply_long_algebraic(text).expect("scripted move should be legal");
        }
        game
    }

    #[test]
    fn replay_reproduces_the_position() {
        let game = sample_game();
        let record = GameRecord::from_game(&game);
        assert_eq!(record.moves.last().map(String::as_str), Some("b7a8q"));
        let replayed = record.replay().expect("record should replay");
        assert_eq!(replayed.board(), game.board());
        assert_eq!(replayed.history().len(), game.history().len());
    }

    #[test]
    fn json_keeps_timestamp_and_moves() {
        let record = GameRecord::from_game(&sample_game());
        let parsed = GameRecord::from_json(&record.to_json().expect("record serializes"))
            .expect("record parses");
        assert_eq!(parsed, record);
    }

    #[test]
    fn tampered_record_is_rejected() {
        let mut record = GameRecord::from_game(&sample_game());
        record.moves.insert(1, "e1e3".to_owned());
        assert!(matches!(record.replay(), Err(ChessError::InvalidAlgebraic(_) | ChessError::IllegalMove { .. })));
    }

    #[test]
    fn save_and_load_through_a_file() {
        let record = GameRecord::from_game(&sample_game());
        let path = std::env::temp_dir().join(format!("plum_engine_record_{}.json", std::process::id()));
        record.save(&path).expect("record should save");
        let loaded = GameRecord::load(&path).expect("record should load");
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, record);
    }

    #[test]
    fn game_from_fen_keeps_its_start_position() {
        let fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        game.apply_long_algebraic("e2e4").expect("e2e4 is legal");
        let record = GameRecord::from_game(&game);
        assert_eq!(record.start_fen, fen);
        assert_eq!(record.replay().expect("replays").to_fen(), game.to_fen());
    }
}

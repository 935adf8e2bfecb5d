//! Value types for the mailbox board model.
//!
//! Squares, pieces, castling rights, and game status are small `Copy` values.
//! A piece carries no position; its square is implied by where the board
//! stores it.

use std::fmt;

use crate::errors::{ChessError, ChessResult};

/// Side to move. `Light` moves first and starts on ranks 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank delta of a pawn push for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => f.write_str("light"),
            Color::Dark => f.write_str("dark"),
        }
    }
}

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to, in generation order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase FEN letter.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// FEN letter: uppercase for Light, lowercase for Dark.
    pub fn to_fen_char(self) -> char {
        let ch = self.kind.to_char();
        match self.color {
            Color::Light => ch.to_ascii_uppercase(),
            Color::Dark => ch,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };
        PieceKind::from_char(ch).map(|kind| Piece { kind, color })
    }
}

/// A board coordinate. Rank 0 is Light's back rank, file 0 is the a-file.
///
/// A `Square` is always on the board. Stepping off the board yields `None`
/// from [`Square::offset`] rather than an invalid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Checked constructor for coordinates that come from outside the engine.
    pub fn new(rank: u8, file: u8) -> ChessResult<Self> {
        if rank > 7 || file > 7 {
            return Err(ChessError::InvalidSquare { rank, file });
        }
        Ok(Self { rank, file })
    }

    /// Constructor for engine-produced coordinates. Panics when off the board.
    #[inline]
    pub const fn at(rank: u8, file: u8) -> Self {
        assert!(rank < 8 && file < 8, "square coordinate out of bounds");
        Self { rank, file }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// `a1 == 0`, `h1 == 7`, `h8 == 63`.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize) * 8 + self.file as usize
    }

    #[inline]
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        let rank = self.rank as i8 + rank_delta;
        let file = self.file as i8 + file_delta;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Every square in board-scan order: rank 0 first, files a through h.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file),
            char::from(b'1' + self.rank)
        )
    }
}

/// Four independent castling flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        light_kingside: true,
        light_queenside: true,
        dark_kingside: true,
        dark_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        light_kingside: false,
        light_queenside: false,
        dark_kingside: false,
        dark_queenside: false,
    };

    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        match color {
            Color::Light => self.light_kingside,
            Color::Dark => self.dark_kingside,
        }
    }

    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        match color {
            Color::Light => self.light_queenside,
            Color::Dark => self.dark_queenside,
        }
    }

    pub fn revoke_color(&mut self, color: Color) {
        match color {
            Color::Light => {
                self.light_kingside = false;
                self.light_queenside = false;
            }
            Color::Dark => {
                self.dark_kingside = false;
                self.dark_queenside = false;
            }
        }
    }

    /// Clears the right tied to a rook home corner, if `square` is one.
    pub fn revoke_corner(&mut self, square: Square) {
        match (square.rank(), square.file()) {
            (0, 0) => self.light_queenside = false,
            (0, 7) => self.light_kingside = false,
            (7, 0) => self.dark_queenside = false,
            (7, 7) => self.dark_kingside = false,
            _ => {}
        }
    }
}

/// Outcome classification of the current position, recomputed after every
/// applied or undone move. The color is the side in check or mated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check(Color),
    Checkmate(Color),
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Check(color) => write!(f, "{color} in check"),
            GameStatus::Checkmate(color) => write!(f, "{color} checkmated"),
            GameStatus::Stalemate => f.write_str("stalemate"),
        }
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

pub const BOARD_SIZE: usize = 8;

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// Occupant of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = MoveError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col)
    }
}

impl Position {
    pub fn new(row: u8, col: u8) -> Result<Self, MoveError> {
        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    /// Bit index into a bitboard, row-major.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        debug_assert!(idx < BOARD_SIZE * BOARD_SIZE);
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }
}

impl fmt::Display for Position {
    /// Algebraic notation: `(2, 3)` is `d3`. Off-board values print as `(row, col)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row as usize >= BOARD_SIZE || self.col as usize >= BOARD_SIZE {
            return write!(f, "({}, {})", self.row, self.col);
        }
        write!(f, "{}{}", char::from(b'a' + self.col), self.row + 1)
    }
}

/// Stone counts, always recounted from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub black: u8,
    pub white: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "player", rename_all = "snake_case")]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    pub fn from_scores(scores: Scores) -> Self {
        match scores.black.cmp(&scores.white) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Player::Black),
            std::cmp::Ordering::Less => GameOutcome::Winner(Player::White),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }
}

/// Status derived from the engine state after every operation.
///
/// `Pass` is a transient flavour of "in progress": the continuing player
/// keeps the turn because the skipped one has nothing to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress { player: Player },
    Pass { skipped: Player, continuing: Player },
    GameOver { outcome: GameOutcome },
}

/// Read-only snapshot handed to the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub current_player: Player,
    pub black_count: u8,
    pub white_count: u8,
    /// Legal squares for `current_player`; empty once the game is over.
    pub valid_moves: Vec<Position>,
    pub status: GameStatus,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the last accepted move made the opponent pass.
    /// - `false` otherwise, including right after a reset.
    pub is_pass: bool,
    pub last_move: Option<Position>,
    /// Stones turned by the last accepted move. Empty after a reset.
    pub flipped: Vec<Position>,
}

/// Answer to a click forwarded by the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub accepted: bool,
    /// Why the move was refused; `None` when accepted.
    pub reason: Option<String>,
    pub status: GameStatus,
    pub message: String,
    pub state: GameState,
}

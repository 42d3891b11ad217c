use crate::types::Position;

/// Why a move was refused. A refused move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({row}, {col}) is outside the 8x8 board")]
    OutOfRange { row: u8, col: u8 },

    /// Negative, fractional or non-finite coordinates from the view.
    #[error("coordinates are not whole board indices")]
    NotASquare,

    #[error("square {0} is already occupied")]
    Occupied(Position),

    #[error("move at {0} captures no stones")]
    NoCapture(Position),

    #[error("game is already over")]
    GameOver,
}

/// Errors building a board from raw masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("black and white stones overlap on mask {0:#018x}")]
    Overlap(u64),
}

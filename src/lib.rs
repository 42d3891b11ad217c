pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod message;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::EngineConfig;
pub use error::{BoardError, MoveError};
pub use game::Game;
pub use types::{
    Cell, GameOutcome, GameState, GameStatus, MoveReport, Player, Position, Scores,
};

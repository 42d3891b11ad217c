//! Status lines shown next to the board.

use serde::{Deserialize, Serialize};

use crate::error::MoveError;
use crate::types::{GameOutcome, GameStatus, Player};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

fn player_name(player: Player, locale: Locale) -> &'static str {
    match (locale, player) {
        (Locale::Ja, Player::Black) => "黒",
        (Locale::Ja, Player::White) => "白",
        (Locale::En, Player::Black) => "Black",
        (Locale::En, Player::White) => "White",
    }
}

pub fn status_message(status: &GameStatus, locale: Locale) -> String {
    match (locale, *status) {
        (Locale::Ja, GameStatus::InProgress { player }) => {
            format!("{}のターンです", player_name(player, locale))
        }
        (Locale::En, GameStatus::InProgress { player }) => {
            format!("{} to move", player_name(player, locale))
        }
        (
            Locale::Ja,
            GameStatus::Pass {
                skipped,
                continuing,
            },
        ) => format!(
            "{}はパスです。{}のターンが続きます。",
            player_name(skipped, locale),
            player_name(continuing, locale)
        ),
        (
            Locale::En,
            GameStatus::Pass {
                skipped,
                continuing,
            },
        ) => format!(
            "{} passes. {} moves again.",
            player_name(skipped, locale),
            player_name(continuing, locale)
        ),
        (Locale::Ja, GameStatus::GameOver { outcome }) => match outcome {
            GameOutcome::Winner(player) => {
                format!("ゲーム終了。{}の勝ちです！", player_name(player, locale))
            }
            GameOutcome::Draw => "ゲーム終了。引き分けです！".to_string(),
        },
        (Locale::En, GameStatus::GameOver { outcome }) => match outcome {
            GameOutcome::Winner(player) => {
                format!("Game over. {} wins!", player_name(player, locale))
            }
            GameOutcome::Draw => "Game over. Draw!".to_string(),
        },
    }
}

/// Short re-prompt after a refused click.
pub fn rejection_message(err: &MoveError, locale: Locale) -> String {
    match (locale, err) {
        (Locale::Ja, MoveError::GameOver) => "ゲームは終了しています".to_string(),
        (Locale::Ja, MoveError::OutOfRange { .. } | MoveError::NotASquare) => {
            "盤の外には置けません".to_string()
        }
        (Locale::Ja, MoveError::Occupied(pos) | MoveError::NoCapture(pos)) => {
            format!("{pos}には置けません")
        }
        (Locale::En, MoveError::GameOver) => "The game is over".to_string(),
        (Locale::En, MoveError::OutOfRange { .. } | MoveError::NotASquare) => {
            "That square is off the board".to_string()
        }
        (Locale::En, MoveError::Occupied(pos) | MoveError::NoCapture(pos)) => {
            format!("You cannot play {pos}")
        }
    }
}

//! JS-facing facade used by the board view.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::error::MoveError;
use crate::game::Game;
use crate::message::{rejection_message, status_message};
use crate::types::{MoveReport, Player};

#[wasm_bindgen]
pub struct OthelloGame {
    game: Game,
    config: EngineConfig,
}

#[wasm_bindgen]
impl OthelloGame {
    /// `config` may be `undefined`, `null` or an `EngineConfig`-shaped object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<OthelloGame, JsError> {
        let config = if config.is_undefined() || config.is_null() {
            EngineConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsError::new(&format!("invalid config: {e}")))?
        };
        Ok(Self::with_config(config))
    }

    pub fn reset(&mut self) -> Result<JsValue, JsError> {
        self.game.reset();
        to_js(&self.game.to_game_state())
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.to_game_state())
    }

    /// Legal squares for `player` (`"black"`/`"white"`), or for the side to
    /// move when `player` is `undefined`.
    #[wasm_bindgen(js_name = validMoves)]
    pub fn valid_moves(&self, player: JsValue) -> Result<JsValue, JsError> {
        let player = if player.is_undefined() || player.is_null() {
            self.game.current_player()
        } else {
            serde_wasm_bindgen::from_value::<Player>(player)
                .map_err(|e| JsError::new(&format!("invalid player: {e}")))?
        };
        to_js(&self.game.legal_moves(player))
    }

    /// Never throws for a refused move; see `MoveReport::accepted`.
    ///
    /// Coordinates arrive as JS numbers and are checked here, so `258` or
    /// `-1` are refused instead of wrapping onto a real square.
    pub fn place(&mut self, row: f64, col: f64) -> Result<JsValue, JsError> {
        to_js(&self.play_at(row, col))
    }

    pub fn scores(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.scores())
    }

    #[wasm_bindgen(js_name = statusMessage)]
    pub fn status_message(&self) -> String {
        status_message(&self.game.status(), self.config.locale)
    }
}

impl OthelloGame {
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn play(&mut self, row: u8, col: u8) -> MoveReport {
        match self.game.apply_move(row, col) {
            Ok(status) => MoveReport {
                accepted: true,
                reason: None,
                status,
                message: status_message(&status, self.config.locale),
                state: self.game.to_game_state(),
            },
            Err(err) => self.rejected(err),
        }
    }

    /// Like [`OthelloGame::play`] for raw JS numbers.
    pub fn play_at(&mut self, row: f64, col: f64) -> MoveReport {
        match (board_index(row), board_index(col)) {
            (Some(row), Some(col)) => self.play(row, col),
            _ => {
                log::debug!("rejected move at ({row}, {col}): not a board index");
                self.rejected(MoveError::NotASquare)
            }
        }
    }

    fn rejected(&self, err: MoveError) -> MoveReport {
        MoveReport {
            accepted: false,
            reason: Some(err.to_string()),
            status: self.game.status(),
            message: rejection_message(&err, self.config.locale),
            state: self.game.to_game_state(),
        }
    }
}

/// Whole numbers in `0..=255`; range against the board is checked later.
fn board_index(value: f64) -> Option<u8> {
    (value.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&value))
        .then_some(value as u8)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Locale;
    use crate::types::{GameStatus, Position};

    #[test]
    fn accepted_move_reports_new_status() {
        let mut facade = OthelloGame::with_config(EngineConfig::default());

        let report = facade.play(2, 3);

        assert!(report.accepted);
        assert_eq!(report.reason, None);
        assert_eq!(
            report.status,
            GameStatus::InProgress {
                player: Player::White
            }
        );
        assert_eq!(report.message, "白のターンです");
        assert_eq!(report.state.flipped, vec![Position { row: 3, col: 3 }]);
    }

    #[test]
    fn rejected_move_reports_unchanged_state() {
        let mut facade = OthelloGame::with_config(EngineConfig { locale: Locale::En });
        let before = facade.game().to_game_state();

        let report = facade.play(0, 0);

        assert!(!report.accepted);
        assert_eq!(report.reason.as_deref(), Some("move at a1 captures no stones"));
        assert_eq!(report.message, "You cannot play a1");
        assert_eq!(report.status, before.status);
        assert_eq!(report.state, before);
        assert_eq!(facade.status_message(), "Black to move");
    }

    #[test]
    fn js_numbers_outside_the_board_never_wrap_onto_a_square() {
        let mut facade = OthelloGame::with_config(EngineConfig::default());
        let before = facade.game().to_game_state();

        for (row, col) in [
            (258.0, 3.0),
            (256.0, 0.0),
            (-1.0, 0.0),
            (2.5, 3.0),
            (f64::NAN, 3.0),
            (2.0, f64::INFINITY),
        ] {
            let report = facade.play_at(row, col);
            assert!(!report.accepted, "({row}, {col}) was accepted");
            assert_eq!(report.reason.as_deref(), Some("coordinates are not whole board indices"));
            assert_eq!(report.state, before);
        }

        let report = facade.play_at(8.0, 3.0);
        assert!(!report.accepted);
        assert_eq!(report.reason.as_deref(), Some("(8, 3) is outside the 8x8 board"));
        assert_eq!(facade.game().to_game_state(), before);

        assert!(facade.play_at(2.0, 3.0).accepted);
    }
}

use crate::board::{Board, mask_to_positions};
use crate::error::MoveError;
use crate::types::{Cell, GameOutcome, GameState, GameStatus, Player, Position, Scores};

/// A single two-player game: board, side to move and terminal flag.
///
/// Every mutation goes through [`Game::apply_move`] or [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    is_game_over: bool,
    /// Side skipped by the last accepted move, if any.
    skipped: Option<Player>,
    last_move: Option<Position>,
    flipped: Vec<Position>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            is_game_over: false,
            skipped: None,
            last_move: None,
            flipped: Vec::new(),
        }
    }

    /// Discards the current game and starts over from the standard setup.
    pub fn reset(&mut self) {
        *self = Self::new();
        log::info!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Stones `player` would capture at `(row, col)`.
    /// Empty for occupied or out-of-range squares.
    pub fn flippable_run(&self, row: u8, col: u8, player: Player) -> Vec<Position> {
        match Position::new(row, col) {
            Ok(pos) => mask_to_positions(self.board.flips(pos, player)),
            Err(_) => Vec::new(),
        }
    }

    /// Legal squares for `player` in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        mask_to_positions(self.board.legal_moves(player))
    }

    /// Plays `(row, col)` for the side to move.
    ///
    /// A refused move leaves the game exactly as it was; [`Game::status`]
    /// still reports the previous status.
    pub fn apply_move(&mut self, row: u8, col: u8) -> Result<GameStatus, MoveError> {
        let result = self.try_apply(row, col);
        if let Err(err) = &result {
            log::debug!("rejected move for {:?}: {err}", self.current_player);
        }
        result
    }

    fn try_apply(&mut self, row: u8, col: u8) -> Result<GameStatus, MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameOver);
        }

        let pos = Position::new(row, col)?;
        if self.board.cell(pos) != Cell::Empty {
            return Err(MoveError::Occupied(pos));
        }

        let mover = self.current_player;
        let flips = self.board.place(pos, mover);
        if flips == 0 {
            return Err(MoveError::NoCapture(pos));
        }

        self.last_move = Some(pos);
        self.flipped = mask_to_positions(flips);
        log::debug!("{mover:?} played {pos}, flipping {}", self.flipped.len());

        // Resolved against the post-move board.
        let opponent = mover.opponent();
        if self.board.has_legal_move(opponent) {
            self.current_player = opponent;
            self.skipped = None;
        } else if self.board.has_legal_move(mover) {
            self.skipped = Some(opponent);
            log::info!("{opponent:?} has no legal move, {mover:?} moves again");
        } else {
            self.skipped = None;
            self.is_game_over = true;
            let scores = self.scores();
            log::info!(
                "game over: {:?} (black {}, white {})",
                GameOutcome::from_scores(scores),
                scores.black,
                scores.white
            );
        }

        Ok(self.status())
    }

    pub fn status(&self) -> GameStatus {
        if let Some(outcome) = self.outcome() {
            return GameStatus::GameOver { outcome };
        }
        match self.skipped {
            Some(skipped) => GameStatus::Pass {
                skipped,
                continuing: self.current_player,
            },
            None => GameStatus::InProgress {
                player: self.current_player,
            },
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.is_game_over.then(|| GameOutcome::from_scores(self.scores()))
    }

    pub fn scores(&self) -> Scores {
        let (black, white) = self.board.count();
        Scores { black, white }
    }

    pub fn to_game_state(&self) -> GameState {
        let scores = self.scores();
        let valid_moves = if self.is_game_over {
            Vec::new()
        } else {
            self.legal_moves(self.current_player)
        };
        GameState {
            board: self.board.cells(),
            current_player: self.current_player,
            black_count: scores.black,
            white_count: scores.white,
            valid_moves,
            status: self.status(),
            is_game_over: self.is_game_over,
            is_pass: self.skipped.is_some(),
            last_move: self.last_move,
            flipped: self.flipped.clone(),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Player) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.skipped = None;
        self.last_move = None;
        self.flipped.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Position {
        Position { row, col }
    }

    fn game_with(rows: [&str; 8], current_player: Player) -> Game {
        let mut game = Game::new();
        game.set_board_for_test(Board::from_rows(rows), current_player);
        game
    }

    fn occupied(game: &Game) -> u8 {
        64 - game.board().empty_count()
    }

    /// Black plays c1 next. White is left with only b8, which it cannot use,
    /// while Black can still take it with c8.
    fn pass_position() -> Game {
        game_with(
            [
                "B W . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                "B W . . . . . .",
            ],
            Player::Black,
        )
    }

    #[test]
    fn initial_state_is_correct() {
        let game = Game::new();
        let state = game.to_game_state();

        assert_eq!(state.current_player, Player::Black);
        assert_eq!(state.black_count, 2);
        assert_eq!(state.white_count, 2);
        assert_eq!(state.board[3][3], Cell::White);
        assert_eq!(state.board[3][4], Cell::Black);
        assert_eq!(state.board[4][3], Cell::Black);
        assert_eq!(state.board[4][4], Cell::White);
        assert_eq!(
            state.status,
            GameStatus::InProgress {
                player: Player::Black
            }
        );
        assert!(!state.is_game_over);
        assert!(!state.is_pass);
        assert!(state.flipped.is_empty());
        assert_eq!(state.last_move, None);
        assert_eq!(state.valid_moves.len(), 4);
    }

    #[test]
    fn opening_move_flips_and_hands_turn_to_white() {
        let mut game = Game::new();

        let status = game.apply_move(2, 3).unwrap();

        assert_eq!(
            status,
            GameStatus::InProgress {
                player: Player::White
            }
        );
        assert_eq!(game.current_player(), Player::White);
        for (r, c) in [(2, 3), (3, 3), (3, 4), (4, 3)] {
            assert_eq!(game.board().cell(at(r, c)), Cell::Black);
        }
        assert_eq!(game.board().cell(at(4, 4)), Cell::White);
        assert_eq!(game.scores(), Scores { black: 4, white: 1 });

        let state = game.to_game_state();
        assert_eq!(state.last_move, Some(at(2, 3)));
        assert_eq!(state.flipped, vec![at(3, 3)]);
    }

    #[test]
    fn illegal_move_is_rejected_without_state_change() {
        let mut game = Game::new();
        let before = game.clone();

        assert_eq!(game.apply_move(0, 0), Err(MoveError::NoCapture(at(0, 0))));
        assert_eq!(game.apply_move(3, 3), Err(MoveError::Occupied(at(3, 3))));
        assert_eq!(game.apply_move(8, 2), Err(MoveError::OutOfRange { row: 8, col: 2 }));
        assert_eq!(game, before);
        assert_eq!(
            game.status(),
            GameStatus::InProgress {
                player: Player::Black
            }
        );
    }

    #[test]
    fn flippable_run_matches_legal_moves() {
        let game = Game::new();

        assert_eq!(game.flippable_run(2, 3, Player::Black), vec![at(3, 3)]);
        assert!(game.flippable_run(0, 0, Player::Black).is_empty());
        assert!(game.flippable_run(3, 3, Player::Black).is_empty());
        assert!(game.flippable_run(9, 9, Player::Black).is_empty());

        for player in [Player::Black, Player::White] {
            let legal = game.legal_moves(player);
            for row in 0..8 {
                for col in 0..8 {
                    let expected = game.board().cell(at(row, col)) == Cell::Empty
                        && !game.flippable_run(row, col, player).is_empty();
                    assert_eq!(legal.contains(&at(row, col)), expected);
                }
            }
        }
    }

    #[test]
    fn move_adds_exactly_one_stone() {
        let mut game = Game::new();
        for (row, col) in [(2, 3), (2, 2), (2, 1), (1, 1)] {
            let before = occupied(&game);
            game.apply_move(row, col).unwrap();
            assert_eq!(occupied(&game), before + 1);
        }
    }

    #[test]
    fn opponent_without_reply_is_skipped() {
        let mut game = pass_position();

        let status = game.apply_move(0, 2).unwrap();

        assert_eq!(
            status,
            GameStatus::Pass {
                skipped: Player::White,
                continuing: Player::Black
            }
        );
        assert_eq!(game.current_player(), Player::Black);
        assert!(!game.is_game_over());
        let state = game.to_game_state();
        assert!(state.is_pass);
        assert_eq!(state.valid_moves, vec![at(7, 2)]);
        assert_eq!(game.status(), status);
    }

    #[test]
    fn opponent_with_reply_gets_turn() {
        let mut game = game_with(
            [
                "B W . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . B W . . .",
                ". . . W B . . .",
                ". . . . . . . .",
                ". . . . . . . .",
                ". . . . . . . .",
            ],
            Player::Black,
        );

        assert_eq!(
            game.apply_move(0, 2).unwrap(),
            GameStatus::InProgress {
                player: Player::White
            }
        );
        assert_eq!(game.current_player(), Player::White);
        assert!(!game.to_game_state().is_pass);
    }

    #[test]
    fn last_move_with_majority_ends_game() {
        let mut game = pass_position();
        game.apply_move(0, 2).unwrap();

        let status = game.apply_move(7, 2).unwrap();

        assert_eq!(
            status,
            GameStatus::GameOver {
                outcome: GameOutcome::Winner(Player::Black)
            }
        );
        assert!(game.is_game_over());
        assert_eq!(game.scores(), Scores { black: 6, white: 0 });
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Player::Black)));
        assert!(game.to_game_state().valid_moves.is_empty());
    }

    #[test]
    fn full_board_with_equal_counts_is_a_draw() {
        let mut game = game_with(
            [
                ". W B W W W W W",
                "B B W W W W W W",
                "W W W W W W W W",
                "W W W W W W W W",
                "B B B W W W W W",
                "B B B B B B B B",
                "B B B B B B B B",
                "B B B B B B B B",
            ],
            Player::Black,
        );

        let status = game.apply_move(0, 0).unwrap();

        assert_eq!(
            status,
            GameStatus::GameOver {
                outcome: GameOutcome::Draw
            }
        );
        assert_eq!(game.board().count(), (32, 32));
        assert_eq!(game.board().empty_count(), 0);
    }

    #[test]
    fn white_majority_wins() {
        // White fills the last square.
        let mut game = game_with(
            [
                ". B W W W W W W",
                "W W W W W W W W",
                "W W W W W W W W",
                "W W W W W W W W",
                "W W W W B B B B",
                "B B B B B B B B",
                "B B B B B B B B",
                "B B B B B B B B",
            ],
            Player::White,
        );

        let status = game.apply_move(0, 0).unwrap();

        assert_eq!(
            status,
            GameStatus::GameOver {
                outcome: GameOutcome::Winner(Player::White)
            }
        );
        assert_eq!(game.board().count(), (28, 36));
    }

    #[test]
    fn game_over_refuses_further_moves_until_reset() {
        let mut game = pass_position();
        game.apply_move(0, 2).unwrap();
        game.apply_move(7, 2).unwrap();
        let finished = game.clone();

        assert_eq!(game.apply_move(1, 1), Err(MoveError::GameOver));
        assert_eq!(game, finished);

        game.reset();
        assert_eq!(game, Game::new());
        assert!(game.apply_move(2, 3).is_ok());
    }

    #[test]
    fn reset_mid_game_restores_initial_state() {
        let mut game = Game::new();
        game.apply_move(2, 3).unwrap();
        game.apply_move(2, 2).unwrap();

        game.reset();

        assert_eq!(game.to_game_state(), Game::new().to_game_state());
    }
}

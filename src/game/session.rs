//! Game session: one board, one engine, a history of accepted turns.

use tracing::{debug, info};

use crate::core::{Board, Cell, Colour, Direction, PentagoError, PentagoResult, Quadrant, Turn};
use crate::rules::{outcome, won, GameResult};
use crate::search::{SearchEngine, SearchStats};

use super::config::GameConfig;

/// A Pentago game as seen by host bindings.
///
/// ## Example
///
/// ```
/// use pentago::core::{Direction, Turn};
/// use pentago::game::{Game, GameConfig};
///
/// let mut game = Game::new(GameConfig::default());
/// game.apply_turn(1, Turn::new(2, 2, 0, Direction::Clockwise).unwrap()).unwrap();
/// assert_eq!(game.win(), 0);
///
/// let reply = game.do_best(2, 1).unwrap();
/// assert!(reply.is_some());
/// assert_eq!(game.board().filled(), 2);
/// ```
pub struct Game {
    board: Board,
    config: GameConfig,
    engine: SearchEngine,
    history: Vec<(Colour, Turn)>,
    /// Colour to move before each entry of `history` was applied.
    active_before: Vec<Colour>,
}

impl Game {
    /// Start an empty game.
    pub fn new(config: GameConfig) -> Self {
        Self::from_board(Board::new(config.beginner), config)
    }

    /// Continue from an existing position. The history starts empty.
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        let engine = SearchEngine::new(config.search.clone());
        Self {
            board,
            config,
            engine,
            history: Vec::new(),
            active_before: Vec::new(),
        }
    }

    /// Apply `turn` for the player with host id `player_id` (`1` or `2`).
    ///
    /// Validates the id and the target cell first; a rejected call leaves
    /// the game untouched.
    pub fn apply_turn(&mut self, player_id: i64, turn: Turn) -> PentagoResult<()> {
        let colour = Colour::from_id(player_id)?;
        self.apply_turn_as(colour, turn)
    }

    /// Apply `turn` for `colour`.
    pub fn apply_turn_as(&mut self, colour: Colour, turn: Turn) -> PentagoResult<()> {
        self.check_may_move(colour)?;
        if !self.board.get(turn.row(), turn.col())?.is_empty() {
            return Err(PentagoError::CellOccupied {
                row: turn.row() as u8,
                col: turn.col() as u8,
            });
        }

        let before = self.board.active_colour();
        self.board.set_active_colour(colour);
        self.board.apply_legal(&turn);
        self.record(colour, turn, before);
        Ok(())
    }

    /// Let the engine choose and play a turn for `player_id`, searching up
    /// to `depth` plies.
    ///
    /// Returns the turn played, or `None` when the board is full.
    pub fn do_best(&mut self, player_id: i64, depth: u8) -> PentagoResult<Option<Turn>> {
        let colour = Colour::from_id(player_id)?;
        self.check_may_move(colour)?;

        let before = self.board.active_colour();
        self.board.set_active_colour(colour);
        let Some(best) = self.engine.find_best(&mut self.board, depth) else {
            self.board.set_active_colour(before);
            return Ok(None);
        };
        self.board.apply_legal(&best.turn);
        self.record(colour, best.turn, before);
        Ok(Some(best.turn))
    }

    /// `do_best` at the configured search depth.
    pub fn play_engine_turn(&mut self, player_id: i64) -> PentagoResult<Option<Turn>> {
        let depth = self.config.search.max_depth;
        self.do_best(player_id, depth)
    }

    /// Host id of the winner, `0` while nobody has a line.
    #[must_use]
    pub fn win(&self) -> u8 {
        self.winner().map_or(0, Colour::id)
    }

    /// Colour of the first qualifying line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Colour> {
        won(&self.board)
    }

    /// Final result, or `None` while the game continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        outcome(&self.board)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Take back the most recent accepted turn, restoring the colour that
    /// was to move before it.
    pub fn undo(&mut self) -> Option<(Colour, Turn)> {
        let (colour, turn) = self.history.pop()?;
        let before = self.active_before.pop().unwrap_or(colour);
        self.board.undo_turn(&turn);
        self.board.set_active_colour(before);
        debug!(player = %colour, turn = %turn, "turn taken back");
        Some((colour, turn))
    }

    /// Overwrite one cell. Clears the turn history, since earlier turns can
    /// no longer be taken back reliably.
    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) -> PentagoResult<()> {
        self.board.set(row, col, value)?;
        self.clear_history();
        Ok(())
    }

    /// Rotate one quadrant outside of a turn. Clears the turn history.
    pub fn rotate(&mut self, quadrant: Quadrant, direction: Direction) {
        self.board.rotate(quadrant, direction);
        self.clear_history();
    }

    /// Override the colour to move. Clears the turn history.
    pub fn set_active_colour(&mut self, colour: Colour) {
        self.board.set_active_colour(colour);
        self.clear_history();
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &[(Colour, Turn)] {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Statistics of the engine's last search.
    #[must_use]
    pub fn search_stats(&self) -> &SearchStats {
        self.engine.stats()
    }

    fn check_may_move(&self, colour: Colour) -> PentagoResult<()> {
        if !self.config.strict {
            return Ok(());
        }
        if self.is_over() {
            return Err(PentagoError::GameOver);
        }
        if colour != self.board.active_colour() {
            return Err(PentagoError::NotYourTurn(colour));
        }
        Ok(())
    }

    fn clear_history(&mut self) {
        self.history.clear();
        self.active_before.clear();
    }

    fn record(&mut self, colour: Colour, turn: Turn, before: Colour) {
        self.history.push((colour, turn));
        self.active_before.push(before);
        debug!(player = %colour, turn = %turn, filled = self.board.filled(), "turn applied");
        if let Some(result) = self.result() {
            info!(?result, turns = self.history.len(), "game over");
        }
    }
}

impl Clone for Game {
    /// Copies board, configuration and history. The copy gets a fresh engine.
    fn clone(&self) -> Self {
        Self {
            board: self.board.clone(),
            config: self.config.clone(),
            engine: SearchEngine::new(self.config.search.clone()),
            history: self.history.clone(),
            active_before: self.active_before.clone(),
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("config", &self.config)
            .field("history", &self.history)
            .finish()
    }
}

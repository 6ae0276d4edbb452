use serde::{Deserialize, Serialize};

use crate::{
    BoardError,
    core::{board::Board, shape_source::ShapeSource},
};

use super::game::Game;

/// Board dimensions for a new game.
///
/// Missing fields deserialize to the defaults, a 20 × 10 board.
///
/// ```
/// use blockfall_engine::{GameConfig, ShapeKind, ShapeSequence};
///
/// let config = GameConfig::default();
/// let game = config.new_game(ShapeSequence::repeat(ShapeKind::Line)).unwrap();
/// assert_eq!(game.board().height(), 20);
/// assert_eq!(game.board().width(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 20,
            width: 10,
        }
    }
}

impl GameConfig {
    pub fn new_board<S>(&self, shapes: S) -> Result<Board<S>, BoardError>
    where
        S: ShapeSource,
    {
        Board::blank(self.height, self.width, shapes)
    }

    pub fn new_game<S>(&self, shapes: S) -> Result<Game<S>, BoardError>
    where
        S: ShapeSource,
    {
        Ok(Game::new(self.new_board(shapes)?))
    }
}

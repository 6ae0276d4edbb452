use serde::{Serialize, Serializer};

use crate::core::{
    board::Board,
    shape_source::{RandomShapes, ShapeSource},
};

use super::{level::Level, score::Score, ticks::Ticks};

/// The whole game state at one instant: board, score, and timers.
///
/// `Game` is the state machine an external driver talks to. The driver calls
/// [`Self::drop_or_freeze_current_piece`] once per tick, applies player input
/// through the `move_*`/`rotate_*` commands, and always continues from the
/// returned snapshot. No method mutates `self`.
///
/// Once [`Self::is_over`] is `true`, every command except [`Self::restart`]
/// returns an unchanged snapshot.
///
/// # Game Flow
///
/// 1. While the current piece can fall, each tick counts down the drop timer;
///    when it expires the piece moves down one row.
/// 2. While the piece rests on something, each tick counts down the freeze
///    timer; when it expires the piece freezes, completed rows are removed,
///    and the score grows by the number of rows completed.
/// 3. The level, and with it the timer period, follows the score.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, Game, ShapeKind, ShapeSequence, Ticks};
///
/// let board = Board::blank(20, 10, ShapeSequence::repeat(ShapeKind::Line)).unwrap();
/// let game = Game::with_ticks(board, Ticks::new(1, 1));
///
/// let next = game.drop_or_freeze_current_piece();
/// assert_eq!(next.board().current_piece().anchor().y(), 1);
/// assert_eq!(next.ticks().until_drop(), 10);
/// assert_eq!(game.board().current_piece().anchor().y(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Game<S = RandomShapes> {
    board: Board<S>,
    score: Score,
    ticks: Ticks,
}

impl<S> Game<S>
where
    S: ShapeSource,
{
    /// Starts a game on `board` with a zero score and first-level timers.
    #[must_use]
    pub fn new(board: Board<S>) -> Self {
        Self::with_ticks(board, Ticks::default())
    }

    #[must_use]
    pub fn with_ticks(board: Board<S>, ticks: Ticks) -> Self {
        Self::from_parts(board, Score::new(), ticks)
    }

    #[must_use]
    pub fn from_parts(board: Board<S>, score: Score, ticks: Ticks) -> Self {
        Self {
            board,
            score,
            ticks,
        }
    }

    /// Advances the game by one tick.
    ///
    /// Exactly one of the two timers advances, depending on whether the
    /// current piece can move down.
    #[must_use]
    pub fn drop_or_freeze_current_piece(&self) -> Self {
        if self.is_over() {
            return self.clone();
        }
        if self.board.can_move_down() {
            let ticks = self.ticks.decrement_drop();
            if ticks.should_drop() {
                return self.drop_current_piece(ticks);
            }
            self.update_ticks(ticks)
        } else {
            let ticks = self.ticks.decrement_freeze();
            if ticks.should_freeze() {
                return self.freeze_current_piece(ticks);
            }
            self.update_ticks(ticks)
        }
    }

    /// Soft drop: moves the current piece down one row and restarts the drop timer.
    ///
    /// The timer restarts even for a player-initiated drop, so gravity never
    /// adds a second drop right after it.
    #[must_use]
    pub fn move_current_piece_down(&self) -> Self {
        if self.is_over() {
            return self.clone();
        }
        self.drop_current_piece(self.ticks)
    }

    #[must_use]
    pub fn move_current_piece_left(&self) -> Self {
        if self.is_over() {
            return self.clone();
        }
        self.update_board(self.board.move_current_piece_left())
    }

    #[must_use]
    pub fn move_current_piece_right(&self) -> Self {
        if self.is_over() {
            return self.clone();
        }
        self.update_board(self.board.move_current_piece_right())
    }

    #[must_use]
    pub fn rotate_current_piece(&self) -> Self {
        if self.is_over() {
            return self.clone();
        }
        self.update_board(self.board.rotate_current_piece())
    }

    /// Starts over on a blank board of the same size, with score and timers reset.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::new(self.board.clear())
    }

    fn drop_current_piece(&self, ticks: Ticks) -> Self {
        Self {
            board: self.board.move_current_piece_down(),
            score: self.score,
            ticks: ticks.reset_drop(self.level().drop_period_ticks()),
        }
    }

    fn freeze_current_piece(&self, ticks: Ticks) -> Self {
        let frozen = self.board.freeze_current_piece();
        let score = self.score.update(frozen.count_completed_rows());
        let period = Level::for_score(score).drop_period_ticks();
        Self {
            board: frozen.remove_completed_rows(),
            score,
            ticks: ticks.reset_freeze(period),
        }
    }

    fn update_board(&self, board: Board<S>) -> Self {
        Self {
            board,
            score: self.score,
            ticks: self.ticks,
        }
    }

    fn update_ticks(&self, ticks: Ticks) -> Self {
        Self {
            board: self.board.clone(),
            score: self.score,
            ticks,
        }
    }
}

impl<S> Game<S> {
    #[must_use]
    pub fn board(&self) -> &Board<S> {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn ticks(&self) -> Ticks {
        self.ticks
    }

    #[must_use]
    pub fn level(&self) -> Level {
        Level::for_score(self.score)
    }

    /// One-based level number for display.
    #[must_use]
    pub fn level_no(&self) -> usize {
        self.level().level_no()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }
}

#[derive(Serialize)]
#[serde(bound = "")]
struct GameSnapshot<'a, S> {
    board: &'a Board<S>,
    score: Score,
    ticks: Ticks,
    level: Level,
    is_over: bool,
}

impl<S> Serialize for Game<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        GameSnapshot {
            board: &self.board,
            score: self.score,
            ticks: self.ticks,
            level: self.level(),
            is_over: self.is_over(),
        }
        .serialize(serializer)
    }
}

//! Game progression on top of the board rules.
//!
//! - [`Game`] - One immutable snapshot of a running game and its state transitions
//! - [`Ticks`] - Drop and freeze countdowns
//! - [`Score`] - Points per freeze, by rows completed
//! - [`Level`] - Difficulty ladder derived from the score
//! - [`GameConfig`] - Board dimensions for a new game
//!
//! # Driving a Game
//!
//! The engine never reads a clock or an input device. A driver owns the
//! cadence:
//!
//! 1. Create a [`Game`] from a blank [`Board`](crate::Board)
//! 2. On every tick (typically every 100ms), call
//!    [`Game::drop_or_freeze_current_piece`] and keep the returned snapshot
//! 3. On player input, call the matching `move_*`/`rotate_*` command
//! 4. Stop ticking when [`Game::is_over`] is `true`; [`Game::restart`] starts over
//!
//! ```
//! use blockfall_engine::{GameConfig, ShapeKind, ShapeSequence};
//!
//! let mut game = GameConfig::default()
//!     .new_game(ShapeSequence::repeat(ShapeKind::Line))
//!     .unwrap();
//! for _ in 0..30 {
//!     game = game.move_current_piece_left().drop_or_freeze_current_piece();
//! }
//! assert_eq!(game.board().current_piece().anchor().x(), 1);
//! ```

pub use self::{config::*, game::*, level::*, score::*, ticks::*};

mod config;
mod game;
mod level;
mod score;
mod ticks;

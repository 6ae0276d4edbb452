use serde::{Deserialize, Serialize};

use super::{position::Position, shape::Color};

/// A single frozen cell left behind by a locked piece.
///
/// Once a piece freezes it is broken into blocks, so that a completed row can
/// be removed even when it holds fragments of several pieces. Blocks have no
/// identity beyond their color and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Block {
    color: Color,
    position: Position,
}

impl Block {
    #[must_use]
    pub const fn new(color: Color, position: Position) -> Self {
        Self { color, position }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.position == position
    }

    #[must_use]
    pub const fn is_in_row(&self, row: i32) -> bool {
        self.position.y() == row
    }

    /// Returns `true` if this block lies strictly above `row`.
    #[must_use]
    pub const fn is_above(&self, row: i32) -> bool {
        self.position.y() < row
    }

    #[must_use]
    pub const fn moved_down(&self) -> Self {
        Self::new(self.color, self.position.translate_y(1))
    }
}

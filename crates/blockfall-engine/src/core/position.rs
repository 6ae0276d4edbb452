use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, or an offset relative to a shape's rotation center.
///
/// # Coordinate System
///
/// - (0, 0) is the top-left cell of the board
/// - X increases rightward (columns)
/// - Y increases downward (rows)
///
/// Coordinates are signed so that offsets and speculative moves past the
/// board edges can be represented; the board decides whether a position is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Component-wise sum. Like the translations, it wraps around at the `i32` range.
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }

    #[must_use]
    pub const fn translate_x(self, dx: i32) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y)
    }

    #[must_use]
    pub const fn translate_y(self, dy: i32) -> Self {
        Self::new(self.x, self.y.wrapping_add(dy))
    }

    /// Rotates 90° clockwise about the origin: `(x, y) -> (-y, x)`.
    ///
    /// Because Y grows downward, this is a clockwise turn as seen on screen.
    ///
    /// ```
    /// use blockfall_engine::Position;
    ///
    /// assert_eq!(Position::new(1, 0).rotated_clockwise(), Position::new(0, 1));
    /// assert_eq!(Position::new(0, 1).rotated_clockwise(), Position::new(-1, 0));
    /// ```
    #[must_use]
    pub const fn rotated_clockwise(self) -> Self {
        Self::new(self.y.wrapping_neg(), self.x)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

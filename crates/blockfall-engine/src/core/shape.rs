use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Color tag of a shape, inherited by pieces and frozen blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Red,
    Indigo,
}

impl Color {
    /// Returns the single character used for text dumps of the board.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Color::Cyan => 'c',
            Color::Blue => 'b',
            Color::Orange => 'o',
            Color::Yellow => 'y',
            Color::Green => 'g',
            Color::Red => 'r',
            Color::Indigo => 'i',
        }
    }
}

/// Enum representing the seven built-in shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum ShapeKind {
    /// `XOXX`
    Line = 0,
    /// `X` above `XOX`, on the left.
    Lefty = 1,
    /// `X` above `XOX`, on the right.
    Righty = 2,
    /// 2×2 block.
    Square = 3,
    /// ` XX` above `XO`.
    StepUp = 4,
    /// `XX` above ` OX`.
    StepDown = 5,
    /// `X` above the middle of `XOX`.
    Pyramid = 6,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        ShapeKind::ALL[rng.random_range(0..ShapeKind::LEN)]
    }
}

impl ShapeKind {
    /// Number of shape kinds (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        ShapeKind::Line,
        ShapeKind::Lefty,
        ShapeKind::Righty,
        ShapeKind::Square,
        ShapeKind::StepUp,
        ShapeKind::StepDown,
        ShapeKind::Pyramid,
    ];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            ShapeKind::Line => Color::Cyan,
            ShapeKind::Lefty => Color::Blue,
            ShapeKind::Righty => Color::Orange,
            ShapeKind::Square => Color::Yellow,
            ShapeKind::StepUp => Color::Green,
            ShapeKind::StepDown => Color::Red,
            ShapeKind::Pyramid => Color::Indigo,
        }
    }

    /// Returns the shape in its spawn orientation.
    #[must_use]
    pub const fn shape(self) -> Shape {
        Shape {
            kind: self,
            offsets: SPAWN_OFFSETS[self as usize],
        }
    }

    /// Returns the classic tetromino letter for this shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::Line.as_char(), 'I');
    /// assert_eq!(ShapeKind::Pyramid.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            ShapeKind::Line => 'I',
            ShapeKind::Lefty => 'J',
            ShapeKind::Righty => 'L',
            ShapeKind::Square => 'O',
            ShapeKind::StepUp => 'S',
            ShapeKind::StepDown => 'Z',
            ShapeKind::Pyramid => 'T',
        }
    }

    /// Parses a shape kind from its classic tetromino letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_char('O'), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(ShapeKind::Line),
            'J' => Some(ShapeKind::Lefty),
            'L' => Some(ShapeKind::Righty),
            'O' => Some(ShapeKind::Square),
            'S' => Some(ShapeKind::StepUp),
            'Z' => Some(ShapeKind::StepDown),
            'T' => Some(ShapeKind::Pyramid),
            _ => None,
        }
    }
}

/// Four cell offsets around a rotation center at `(0, 0)`, plus the shape's kind.
///
/// All seven shapes are values of this one type; the color is derived from the kind.
/// Shapes are immutable - rotation returns a new `Shape`.
///
/// # Example
///
/// ```
/// use blockfall_engine::Shape;
///
/// let shape = Shape::PYRAMID;
/// let turned = shape.rotated_clockwise();
/// assert_eq!(turned.color(), shape.color());
/// assert_eq!(turned.rotated_clockwise().rotated_clockwise().rotated_clockwise(), shape);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Shape {
    kind: ShapeKind,
    offsets: [Position; 4],
}

impl Shape {
    pub const LINE: Self = ShapeKind::Line.shape();
    pub const LEFTY: Self = ShapeKind::Lefty.shape();
    pub const RIGHTY: Self = ShapeKind::Righty.shape();
    pub const SQUARE: Self = ShapeKind::Square.shape();
    pub const STEP_UP: Self = ShapeKind::StepUp.shape();
    pub const STEP_DOWN: Self = ShapeKind::StepDown.shape();
    pub const PYRAMID: Self = ShapeKind::Pyramid.shape();

    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.kind.color()
    }

    #[must_use]
    pub const fn offsets(&self) -> &[Position; 4] {
        &self.offsets
    }

    /// Leftmost offset column.
    #[must_use]
    pub fn min_dx(&self) -> i32 {
        self.offsets.iter().map(|p| p.x()).min().unwrap_or(0)
    }

    /// Rightmost offset column.
    #[must_use]
    pub fn max_dx(&self) -> i32 {
        self.offsets.iter().map(|p| p.x()).max().unwrap_or(0)
    }

    /// Topmost offset row, used to spawn the shape fully inside the board.
    #[must_use]
    pub fn min_dy(&self) -> i32 {
        self.offsets.iter().map(|p| p.y()).min().unwrap_or(0)
    }

    /// Bottommost offset row.
    #[must_use]
    pub fn max_dy(&self) -> i32 {
        self.offsets.iter().map(|p| p.y()).max().unwrap_or(0)
    }

    /// Number of columns and rows covered by the shape.
    #[must_use]
    pub fn extent(&self) -> (i32, i32) {
        (
            self.max_dx() - self.min_dx() + 1,
            self.max_dy() - self.min_dy() + 1,
        )
    }

    /// Rotates every offset 90° clockwise around the center.
    ///
    /// The square has no distinct orientations, so it is returned unchanged.
    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        if self.kind == ShapeKind::Square {
            return *self;
        }
        Self {
            kind: self.kind,
            offsets: self.offsets.map(Position::rotated_clockwise),
        }
    }
}

const fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

// Rotation centers are marked `O`. The line's center is its second cell.
const SPAWN_OFFSETS: [[Position; 4]; ShapeKind::LEN] = [
    // Line: XOXX
    [p(-1, 0), p(0, 0), p(1, 0), p(2, 0)],
    // Lefty: X / XOX
    [p(-1, -1), p(-1, 0), p(0, 0), p(1, 0)],
    // Righty:   X / XOX
    [p(1, -1), p(-1, 0), p(0, 0), p(1, 0)],
    // Square: XX / OX
    [p(0, -1), p(1, -1), p(0, 0), p(1, 0)],
    // Step up:  XX / XO
    [p(0, -1), p(1, -1), p(-1, 0), p(0, 0)],
    // Step down: XX /  OX
    [p(-1, -1), p(0, -1), p(0, 0), p(1, 0)],
    // Pyramid:  X / XOX
    [p(0, -1), p(-1, 0), p(0, 0), p(1, 0)],
];

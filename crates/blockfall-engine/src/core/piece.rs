use serde::{Deserialize, Serialize};

use super::{
    block::Block,
    position::Position,
    shape::{Color, Shape},
};

/// A falling piece: a [`Shape`] anchored at a board position.
///
/// Pieces are immutable - movement and rotation operations return new `Piece`
/// instances. None of them check the board; whether a piece may exist at its
/// position is decided by [`Board`](super::board::Board).
///
/// # Example
///
/// ```
/// use blockfall_engine::{Piece, Position, Shape};
///
/// let piece = Piece::new(Shape::PYRAMID, Position::new(4, 1));
/// let moved = piece.right().down();
/// assert_eq!(moved.anchor(), Position::new(5, 2));
/// assert_eq!(moved.rotated_clockwise().anchor(), moved.anchor());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Piece {
    shape: Shape,
    anchor: Position,
}

impl Piece {
    #[must_use]
    pub const fn new(shape: Shape, anchor: Position) -> Self {
        Self { shape, anchor }
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn anchor(&self) -> Position {
        self.anchor
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.shape.color()
    }

    /// Returns the four absolute cells covered by this piece.
    #[must_use]
    pub fn occupied_positions(&self) -> [Position; 4] {
        self.shape.offsets().map(|offset| offset.add(self.anchor))
    }

    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.occupied_positions().contains(&position)
    }

    #[must_use]
    pub const fn left(&self) -> Self {
        Self::new(self.shape, self.anchor.translate_x(-1))
    }

    #[must_use]
    pub const fn right(&self) -> Self {
        Self::new(self.shape, self.anchor.translate_x(1))
    }

    #[must_use]
    pub const fn down(&self) -> Self {
        Self::new(self.shape, self.anchor.translate_y(1))
    }

    /// Rotates the shape around the anchor, which stays in place.
    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        Self::new(self.shape.rotated_clockwise(), self.anchor)
    }

    /// Breaks this piece into one block per occupied cell, all in the piece's color.
    #[must_use]
    pub fn decompose(&self) -> [Block; 4] {
        let color = self.color();
        self.occupied_positions()
            .map(|position| Block::new(color, position))
    }
}

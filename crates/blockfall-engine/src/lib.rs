//! Rules engine for a falling-block puzzle game.
//!
//! Every type is an immutable value: moves, rotations, freezes, and ticks all
//! return new snapshots. The only randomness, the shape of the next piece, is
//! supplied through a [`ShapeSource`].

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("invalid board dimensions: {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
    #[display("block at {position} is outside the board")]
    BlockOutOfBounds { position: Position },
    #[display("more than one block at {position}")]
    OverlappingBlocks { position: Position },
    #[display("falling piece cell at {position} is outside the board")]
    PieceOutOfBounds { position: Position },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("shape sequence must not be empty")]
pub struct EmptyShapeSequenceError;

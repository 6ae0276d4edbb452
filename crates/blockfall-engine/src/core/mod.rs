pub use self::{block::*, board::*, piece::*, position::*, shape::*, shape_source::*};

pub(crate) mod block;
pub(crate) mod board;
pub(crate) mod piece;
pub(crate) mod position;
pub(crate) mod shape;
pub(crate) mod shape_source;

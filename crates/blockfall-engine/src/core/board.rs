use std::{fmt, ops::Range};

use serde::{Serialize, Serializer};

use crate::BoardError;

use super::{
    block::Block,
    piece::Piece,
    position::Position,
    shape::{Color, ShapeKind},
    shape_source::{RandomShapes, ShapeSource},
};

/// A single row of frozen cells.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BlockRow {
    cells: Box<[Option<Color>]>,
}

impl BlockRow {
    fn empty(width: usize) -> Self {
        Self {
            cells: vec![None; width].into_boxed_slice(),
        }
    }

    fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// The game board: its dimensions, the falling piece, and all frozen blocks.
///
/// A `Board` is an immutable snapshot. Every operation returns a new board and
/// leaves `self` untouched, so earlier snapshots stay valid for inspection or
/// replay. The board owns every rule of the game: collision, freezing, line
/// clearing, and game-over detection.
///
/// The shape source `S` decides which piece spawns after each freeze. It is
/// carried by value, see [`ShapeSource`].
///
/// # Invariants
///
/// - Frozen cells never overlap (one color per cell).
/// - After a freeze followed by [`Self::remove_completed_rows`], no row is completely filled.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, ShapeKind, ShapeSequence};
///
/// let board = Board::blank(20, 10, ShapeSequence::repeat(ShapeKind::Square)).unwrap();
/// let moved = board.move_current_piece_left();
/// assert_eq!(moved.current_piece().anchor().x(), board.current_piece().anchor().x() - 1);
///
/// // The original snapshot is unchanged.
/// assert_eq!(board.current_piece().anchor().x(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Board<S = RandomShapes> {
    height: usize,
    width: usize,
    current_piece: Piece,
    rows: Vec<BlockRow>,
    shapes: S,
}

/// Converts a validated dimension or index to a coordinate.
fn to_coord(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Rejects boards too small for any shape to spawn, or too large for `i32` coordinates.
fn validate_dimensions(height: usize, width: usize) -> Result<(), BoardError> {
    let (Ok(h), Ok(w)) = (i32::try_from(height), i32::try_from(width)) else {
        return Err(BoardError::InvalidDimensions { height, width });
    };
    let fits_every_spawn = ShapeKind::ALL.iter().all(|kind| {
        let (shape_width, shape_height) = kind.shape().extent();
        shape_width <= w && shape_height <= h
    });
    if fits_every_spawn {
        Ok(())
    } else {
        Err(BoardError::InvalidDimensions { height, width })
    }
}

impl<S> Board<S>
where
    S: ShapeSource,
{
    /// Creates an empty board with a freshly spawned piece at the top middle.
    pub fn blank(height: usize, width: usize, shapes: S) -> Result<Self, BoardError> {
        validate_dimensions(height, width)?;
        Ok(Self::blank_unchecked(height, width, shapes))
    }

    fn blank_unchecked(height: usize, width: usize, mut shapes: S) -> Self {
        let current_piece = spawn_piece(width, &mut shapes);
        Self {
            height,
            width,
            current_piece,
            rows: vec![BlockRow::empty(width); height],
            shapes,
        }
    }

    /// Creates a board with the given falling piece and pre-placed frozen blocks.
    ///
    /// Rows may be complete; they are only removed by [`Self::remove_completed_rows`].
    /// The falling piece must lie inside the board but may overlap frozen blocks,
    /// as it does when a game ends.
    pub fn with_blocks<I>(
        height: usize,
        width: usize,
        current_piece: Piece,
        blocks: I,
        shapes: S,
    ) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Block>,
    {
        validate_dimensions(height, width)?;
        let mut board = Self {
            height,
            width,
            current_piece,
            rows: vec![BlockRow::empty(width); height],
            shapes,
        };
        if let Some(position) = current_piece
            .occupied_positions()
            .into_iter()
            .find(|&position| board.is_out_of_bounds(position))
        {
            return Err(BoardError::PieceOutOfBounds { position });
        }
        for block in blocks {
            let position = block.position();
            let cell = board
                .cell_mut(position)
                .ok_or(BoardError::BlockOutOfBounds { position })?;
            if cell.is_some() {
                return Err(BoardError::OverlappingBlocks { position });
            }
            *cell = Some(block.color());
        }
        Ok(board)
    }

    /// Returns a blank board of the same dimensions, used when restarting.
    ///
    /// The shape source continues from its current state.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::blank_unchecked(self.height, self.width, self.shapes.clone())
    }

    /// Spawning position of new pieces: the middle column of the top row.
    #[must_use]
    pub fn top_middle(&self) -> Position {
        top_middle(self.width)
    }

    #[must_use]
    pub fn can_move_down(&self) -> bool {
        !self.is_obstructed(&self.current_piece.down())
    }

    #[must_use]
    pub fn can_move_left(&self) -> bool {
        !self.is_obstructed(&self.current_piece.left())
    }

    #[must_use]
    pub fn can_move_right(&self) -> bool {
        !self.is_obstructed(&self.current_piece.right())
    }

    /// Returns `true` if the current piece can turn in place.
    ///
    /// There is no wall kick: a rotation that collides is simply not possible.
    #[must_use]
    pub fn can_be_rotated(&self) -> bool {
        !self.is_obstructed(&self.current_piece.rotated_clockwise())
    }

    #[must_use]
    pub fn move_current_piece_down(&self) -> Self {
        self.try_update_current_piece(self.current_piece.down())
    }

    #[must_use]
    pub fn move_current_piece_left(&self) -> Self {
        self.try_update_current_piece(self.current_piece.left())
    }

    #[must_use]
    pub fn move_current_piece_right(&self) -> Self {
        self.try_update_current_piece(self.current_piece.right())
    }

    #[must_use]
    pub fn rotate_current_piece(&self) -> Self {
        self.try_update_current_piece(self.current_piece.rotated_clockwise())
    }

    /// Replaces the current piece if `piece` is unobstructed, otherwise returns an unchanged copy.
    fn try_update_current_piece(&self, piece: Piece) -> Self {
        if self.is_obstructed(&piece) {
            return self.clone();
        }
        Self {
            current_piece: piece,
            ..self.clone()
        }
    }

    /// Locks the current piece into frozen blocks and spawns the next piece.
    ///
    /// Room for the new piece is not checked; a spawn onto frozen blocks ends
    /// the game once that piece freezes in the top row (see [`Self::is_game_over`]).
    #[must_use]
    pub fn freeze_current_piece(&self) -> Self {
        let mut board = self.clone();
        for block in self.current_piece.decompose() {
            // Spawns, moves, and `with_blocks` all keep the current piece inside the board.
            let Some(cell) = board.cell_mut(block.position()) else {
                unreachable!("current piece cell {} is outside the board", block.position());
            };
            *cell = Some(block.color());
        }
        board.current_piece = spawn_piece(board.width, &mut board.shapes);
        board
    }

    /// Removes every completed row and moves the rows above them down.
    ///
    /// All completed rows are found on the current state first; each remaining
    /// row then drops by the number of completed rows below it. This resolves
    /// adjacent and non-adjacent multi-row clears in a single call.
    #[must_use]
    pub fn remove_completed_rows(&self) -> Self {
        let mut board = self.clone();
        board.clear_lines();
        board
    }

    fn clear_lines(&mut self) -> usize {
        let mut count = 0;
        for y in (0..self.height).rev() {
            if self.rows[y].is_filled() {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[y + count] = self.rows[y].clone();
            }
        }
        self.rows[..count].fill(BlockRow::empty(self.width));
        count
    }
}

impl<S> Board<S> {
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row indices, top to bottom.
    #[must_use]
    pub fn rows(&self) -> Range<i32> {
        0..to_coord(self.height)
    }

    /// Column indices, left to right.
    #[must_use]
    pub fn cols(&self) -> Range<i32> {
        0..to_coord(self.width)
    }

    #[must_use]
    pub fn current_piece(&self) -> Piece {
        self.current_piece
    }

    #[must_use]
    pub fn shapes(&self) -> &S {
        &self.shapes
    }

    /// Iterates over all frozen blocks, row by row from the top.
    pub fn frozen_blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.cells.iter().enumerate().filter_map(move |(x, cell)| {
                cell.map(|color| Block::new(color, Position::new(to_coord(x), to_coord(y))))
            })
        })
    }

    /// Frozen blocks followed by the blocks of the current piece.
    pub fn all_occupied_blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.frozen_blocks().chain(self.current_piece.decompose())
    }

    /// Color shown at `position`, or `None` for an empty cell.
    ///
    /// Frozen blocks take precedence over the current piece.
    #[must_use]
    pub fn color_at(&self, position: Position) -> Option<Color> {
        self.cell(position)
            .flatten()
            .or_else(|| {
                self.current_piece
                    .occupies(position)
                    .then(|| self.current_piece.color())
            })
    }

    fn cell_index(&self, position: Position) -> Option<(usize, usize)> {
        let x = usize::try_from(position.x())
            .ok()
            .filter(|&x| x < self.width)?;
        let y = usize::try_from(position.y())
            .ok()
            .filter(|&y| y < self.height)?;
        Some((x, y))
    }

    fn cell(&self, position: Position) -> Option<Option<Color>> {
        let (x, y) = self.cell_index(position)?;
        Some(self.rows[y].cells[x])
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut Option<Color>> {
        let (x, y) = self.cell_index(position)?;
        Some(&mut self.rows[y].cells[x])
    }

    #[must_use]
    pub fn is_out_of_bounds(&self, position: Position) -> bool {
        self.cell_index(position).is_none()
    }

    /// Returns `true` if a frozen block sits at `position`.
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.cell(position).flatten().is_some()
    }

    /// Returns `true` if any cell of `piece` is outside the board or on a frozen block.
    #[must_use]
    pub fn is_obstructed(&self, piece: &Piece) -> bool {
        piece
            .occupied_positions()
            .into_iter()
            .any(|position| self.cell(position).is_none_or(|cell| cell.is_some()))
    }

    /// Returns `true` if every column of `row` holds a frozen block.
    ///
    /// Rows outside the board are never complete.
    #[must_use]
    pub fn is_complete_row(&self, row: i32) -> bool {
        usize::try_from(row)
            .ok()
            .and_then(|y| self.rows.get(y))
            .is_some_and(BlockRow::is_filled)
    }

    #[must_use]
    pub fn count_completed_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.is_filled()).count()
    }

    /// Returns `true` if any frozen block has reached the top row.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.rows.first().is_some_and(|row| !row.is_empty())
    }
}

fn top_middle(width: usize) -> Position {
    Position::new(to_coord(width / 2), 0)
}

/// Draws the next shape and places it at the top middle with its highest cell in row 0.
///
/// Near a narrow board's right edge the anchor shifts left until every cell
/// fits; [`validate_dimensions`] guarantees that it can.
fn spawn_piece<S>(width: usize, shapes: &mut S) -> Piece
where
    S: ShapeSource,
{
    let shape = shapes.next_shape();
    let top = top_middle(width);
    let x = top
        .x()
        .min(to_coord(width) - 1 - shape.max_dx())
        .max(-shape.min_dx());
    Piece::new(shape, Position::new(x, -shape.min_dy()))
}

impl<S> fmt::Display for Board<S> {
    /// Text grid, one character per cell: `.` empty, lowercase frozen, uppercase falling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in self.rows() {
            for x in self.cols() {
                let position = Position::new(x, y);
                let c = match self.cell(position).flatten() {
                    Some(color) => color.as_char(),
                    None if self.current_piece.occupies(position) => {
                        self.current_piece.color().as_char().to_ascii_uppercase()
                    }
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct BoardSnapshot {
    height: usize,
    width: usize,
    current_piece: Piece,
    frozen_blocks: Vec<Block>,
}

impl<S> Serialize for Board<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        BoardSnapshot {
            height: self.height,
            width: self.width,
            current_piece: self.current_piece,
            frozen_blocks: self.frozen_blocks().collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::core::{
        shape::{Shape, ShapeKind},
        shape_source::ShapeSequence,
    };

    fn block_at(x: i32, y: i32) -> Block {
        Block::new(Color::Red, Position::new(x, y))
    }

    fn full_rows(width: i32, rows: &[i32]) -> Vec<Block> {
        rows.iter()
            .flat_map(|&y| (0..width).map(move |x| block_at(x, y)))
            .collect()
    }

    fn board_4x4(current_piece: Piece, blocks: Vec<Block>) -> Board<ShapeSequence> {
        Board::with_blocks(
            4,
            4,
            current_piece,
            blocks,
            ShapeSequence::repeat(ShapeKind::Square),
        )
        .unwrap()
    }

    fn square_at(x: i32, y: i32) -> Piece {
        Piece::new(Shape::SQUARE, Position::new(x, y))
    }

    #[test]
    fn test_invalid_dimensions() {
        let shapes = ShapeSequence::repeat(ShapeKind::Line);
        assert_eq!(
            Board::blank(0, 10, shapes.clone()).unwrap_err(),
            BoardError::InvalidDimensions {
                height: 0,
                width: 10
            }
        );
        assert!(Board::blank(20, 0, shapes.clone()).is_err());
        assert!(Board::blank(usize::MAX, 10, shapes.clone()).is_err());
        assert_eq!(
            Board::blank(20, 3, shapes.clone()).unwrap_err(),
            BoardError::InvalidDimensions {
                height: 20,
                width: 3
            },
            "the line needs four columns"
        );
        assert!(Board::blank(1, 10, shapes.clone()).is_err(), "most shapes need two rows");
        assert!(Board::blank(2, 4, shapes).is_ok());
    }

    #[test]
    fn test_with_blocks_rejects_bad_blocks() {
        let shapes = ShapeSequence::repeat(ShapeKind::Square);
        let piece = square_at(1, 1);
        assert_eq!(
            Board::with_blocks(4, 4, piece, [block_at(4, 0)], shapes.clone()).unwrap_err(),
            BoardError::BlockOutOfBounds {
                position: Position::new(4, 0)
            }
        );
        assert_eq!(
            Board::with_blocks(4, 4, piece, [block_at(1, 3), block_at(1, 3)], shapes.clone())
                .unwrap_err(),
            BoardError::OverlappingBlocks {
                position: Position::new(1, 3)
            }
        );
        assert_eq!(
            Board::with_blocks(4, 4, square_at(3, 1), Vec::<Block>::new(), shapes.clone()).unwrap_err(),
            BoardError::PieceOutOfBounds {
                position: Position::new(4, 0)
            }
        );
        assert!(
            Board::with_blocks(4, 4, piece, [block_at(1, 1)], shapes).is_ok(),
            "the falling piece may overlap frozen blocks"
        );
    }

    #[test]
    fn test_blank_board_spawns_at_top_middle() {
        let board = Board::blank(20, 10, ShapeSequence::repeat(ShapeKind::Pyramid)).unwrap();
        assert_eq!(board.top_middle(), Position::new(5, 0));
        assert_eq!(board.current_piece().anchor(), Position::new(5, 1));
        assert_eq!(board.frozen_blocks().count(), 0);
        assert!(!board.is_obstructed(&board.current_piece()));

        let board = Board::blank(20, 10, ShapeSequence::repeat(ShapeKind::Line)).unwrap();
        assert_eq!(board.current_piece().anchor(), Position::new(5, 0));
    }

    #[test]
    fn test_every_shape_spawns_inside_narrow_board() {
        for kind in ShapeKind::ALL {
            for (height, width) in [(4, 4), (2, 4), (3, 5)] {
                let board = Board::blank(height, width, ShapeSequence::repeat(kind)).unwrap();
                let piece = board.current_piece();
                assert!(
                    !board.is_obstructed(&piece),
                    "{kind:?} on {height}x{width} spawned at {:?}",
                    piece.occupied_positions()
                );
                assert!(piece.occupied_positions().iter().any(|p| p.y() == 0));
            }
        }
        let board = Board::blank(4, 4, ShapeSequence::repeat(ShapeKind::Line)).unwrap();
        assert_eq!(board.current_piece().anchor(), Position::new(1, 0));
    }

    #[test]
    fn test_freezing_spawned_line_keeps_four_cells() {
        let board = Board::blank(4, 4, ShapeSequence::repeat(ShapeKind::Line)).unwrap();
        let frozen = board.freeze_current_piece();
        assert_eq!(frozen.frozen_blocks().count(), 4);
        assert!(frozen.is_complete_row(0));
    }

    #[test]
    fn test_rows_and_cols() {
        let board = Board::blank(3, 5, ShapeSequence::repeat(ShapeKind::Square)).unwrap();
        assert_eq!(board.rows().collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(board.cols().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_out_of_bounds_is_obstructed_for_every_size() {
        for (height, width) in [(4, 4), (20, 10), (7, 13)] {
            let board = Board::blank(height, width, ShapeSequence::repeat(ShapeKind::Square))
                .unwrap();
            let (h, w) = (to_coord(height), to_coord(width));
            for position in [
                Position::new(-1, 0),
                Position::new(w, 0),
                Position::new(0, -1),
                Position::new(0, h),
                Position::new(w, h),
            ] {
                assert!(board.is_out_of_bounds(position), "{position} on {height}x{width}");
            }
            assert!(board.is_obstructed(&Piece::new(Shape::LINE, Position::new(w, 1))));
            assert!(board.is_obstructed(&Piece::new(Shape::LINE, Position::new(0, 1))));
            assert!(board.is_obstructed(&Piece::new(Shape::SQUARE, Position::new(1, h))));
            assert!(board.is_obstructed(&Piece::new(Shape::SQUARE, Position::new(1, 0))));
            assert!(!board.is_obstructed(&Piece::new(Shape::SQUARE, Position::new(0, 1))));
        }
    }

    #[test]
    fn test_frozen_block_obstructs() {
        let board = board_4x4(square_at(1, 2), vec![block_at(2, 3)]);
        assert!(board.is_occupied(Position::new(2, 3)));
        assert!(!board.can_move_down());
        assert!(board.can_move_left());
        assert!(board.is_obstructed(&square_at(1, 3)));
        assert!(!board.is_obstructed(&square_at(0, 2)));
    }

    #[test]
    fn test_moves_are_all_or_nothing() {
        let board = board_4x4(square_at(0, 3), vec![]);
        assert!(!board.can_move_left());
        assert!(!board.can_move_down());
        assert!(board.can_move_right());

        let unchanged = board.move_current_piece_left().move_current_piece_down();
        assert_eq!(unchanged.current_piece(), board.current_piece());

        let moved = board.move_current_piece_right();
        assert_eq!(moved.current_piece().anchor(), Position::new(1, 3));
        assert_eq!(board.current_piece().anchor(), Position::new(0, 3));
    }

    #[test]
    fn test_rotation_without_wall_kick() {
        let line = Piece::new(Shape::LINE, Position::new(1, 0));
        let board = board_4x4(line, vec![]);
        // Vertical line would need row -1.
        assert!(!board.can_be_rotated());
        assert_eq!(board.rotate_current_piece().current_piece(), line);

        let line = Piece::new(Shape::LINE, Position::new(1, 1));
        let board = board_4x4(line, vec![]);
        assert!(board.can_be_rotated());
        assert_eq!(
            board.rotate_current_piece().current_piece(),
            line.rotated_clockwise()
        );
    }

    #[test]
    fn test_freeze_current_piece() {
        let current = square_at(0, 3);
        let board = board_4x4(current, vec![]);
        let frozen = board.freeze_current_piece();

        let blocks: HashSet<_> = frozen.frozen_blocks().collect();
        let expected: HashSet<_> = current.decompose().into_iter().collect();
        assert_eq!(blocks, expected, "freezing must keep exactly the piece's cells");
        for position in [
            Position::new(0, 3),
            Position::new(1, 3),
            Position::new(0, 2),
            Position::new(1, 2),
        ] {
            assert!(frozen.is_occupied(position), "{position} should be frozen");
        }
        assert_eq!(frozen.current_piece(), square_at(2, 1), "new piece spawns at top middle");
        assert_eq!(board.frozen_blocks().count(), 0, "original board is unchanged");
    }

    #[test]
    fn test_freeze_gains_exactly_four_cells() {
        let board = board_4x4(square_at(2, 3), vec![block_at(0, 3)]);
        let frozen = board.freeze_current_piece();
        assert_eq!(frozen.frozen_blocks().count(), 5);
    }

    #[test]
    fn test_count_completed_rows() {
        let piece = square_at(1, 1);
        assert_eq!(board_4x4(piece, vec![]).count_completed_rows(), 0);
        assert_eq!(board_4x4(piece, full_rows(4, &[3])).count_completed_rows(), 1);
        assert_eq!(board_4x4(piece, full_rows(4, &[2, 3])).count_completed_rows(), 2);

        let board = board_4x4(piece, full_rows(4, &[3]));
        assert!(board.is_complete_row(3));
        assert!(!board.is_complete_row(2));
        assert!(!board.is_complete_row(-1));
        assert!(!board.is_complete_row(4));
    }

    #[test]
    fn test_remove_adjacent_rows() {
        let board = board_4x4(square_at(1, 1), full_rows(4, &[2, 3]));
        let result = board.remove_completed_rows();
        assert_eq!(result.frozen_blocks().count(), 0);
        assert_eq!(board.frozen_blocks().count(), 8, "original board is unchanged");
    }

    #[test]
    fn test_remove_rows_shifts_blocks_above() {
        let mut blocks = full_rows(4, &[3]);
        blocks.push(block_at(1, 2));
        blocks.push(block_at(3, 1));
        let result = board_4x4(square_at(1, 1), blocks).remove_completed_rows();
        let positions: HashSet<_> = result.frozen_blocks().map(|b| b.position()).collect();
        assert_eq!(
            positions,
            HashSet::from([Position::new(1, 3), Position::new(3, 2)])
        );
    }

    #[test]
    fn test_remove_non_adjacent_rows() {
        // Rows 1 and 3 complete, with a partial row between them.
        let mut blocks = full_rows(4, &[1, 3]);
        blocks.push(block_at(0, 2));
        blocks.push(block_at(2, 0));
        let result = board_4x4(square_at(1, 1), blocks).remove_completed_rows();
        let positions: HashSet<_> = result.frozen_blocks().map(|b| b.position()).collect();
        assert_eq!(
            positions,
            HashSet::from([Position::new(0, 3), Position::new(2, 2)])
        );
        assert_eq!(result.count_completed_rows(), 0);
    }

    #[test]
    fn test_game_over() {
        let piece = square_at(1, 2);
        assert!(!board_4x4(piece, vec![]).is_game_over());
        assert!(!board_4x4(piece, vec![block_at(0, 1), block_at(3, 3)]).is_game_over());
        assert!(board_4x4(piece, vec![block_at(2, 0)]).is_game_over());
    }

    #[test]
    fn test_clear() {
        let board = board_4x4(square_at(1, 3), full_rows(4, &[0, 1]));
        let cleared = board.clear();
        assert_eq!(cleared.height(), 4);
        assert_eq!(cleared.width(), 4);
        assert_eq!(cleared.frozen_blocks().count(), 0);
        assert!(!cleared.is_game_over());
    }

    #[test]
    fn test_color_at() {
        let board = board_4x4(square_at(1, 1), vec![Block::new(Color::Cyan, Position::new(0, 3))]);
        assert_eq!(board.color_at(Position::new(0, 3)), Some(Color::Cyan));
        assert_eq!(board.color_at(Position::new(1, 1)), Some(Color::Yellow));
        assert_eq!(board.color_at(Position::new(3, 3)), None);
        assert_eq!(board.color_at(Position::new(9, 9)), None);
        assert_eq!(board.all_occupied_blocks().count(), 5);
    }

    #[test]
    fn test_display() {
        let board = board_4x4(square_at(1, 1), vec![block_at(0, 3)]);
        assert_eq!(board.to_string(), ".YY.\n.YY.\n....\nr...\n");
    }

    #[test]
    fn test_serialization() {
        let board = board_4x4(square_at(1, 1), vec![block_at(0, 3)]);
        let value = serde_json::to_value(&board).unwrap();
        assert_eq!(value["height"], 4);
        assert_eq!(value["width"], 4);
        assert_eq!(value["current_piece"]["anchor"]["x"], 1);
        assert_eq!(
            value["frozen_blocks"],
            serde_json::json!([{ "color": "red", "position": { "x": 0, "y": 3 } }])
        );
    }
}

use crate::InvalidPieceType;

use super::piece::{ActivePiece, PieceKind};

/// A single cell of the arena or of a shape.
///
/// The numeric form of a cell is its tag: `0` for empty, `1..=7` for the
/// piece kind that filled it (see [`PieceKind::tag`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell filled by a piece of a specific kind.
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn is_occupied(self) -> bool {
        !self.is_empty()
    }

    /// Returns `0` for an empty cell, or the piece kind's tag.
    #[must_use]
    pub fn tag(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Piece(kind) => kind.tag(),
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self, InvalidPieceType> {
        if tag == 0 {
            return Ok(Cell::Empty);
        }
        PieceKind::from_tag(tag).map(Cell::Piece)
    }
}

/// The grid of locked cells.
///
/// Row 0 is the top row; `y` grows downward and `x` rightward. The dimensions
/// are fixed at construction and the row storage is never reallocated:
/// [`Arena::clear`] and [`Arena::remove_row`] both work in place.
///
/// Any coordinate outside the grid counts as occupied for collision purposes,
/// so walls and floor need no sentinel cells.
///
/// # Example
///
/// ```
/// use blockfall_engine::{ActivePiece, Arena, PieceKind, Position};
///
/// let mut arena = Arena::new(12, 20);
/// let piece = ActivePiece::new(PieceKind::O, Position::new(5, 18));
/// assert!(!arena.collides(&piece));
///
/// arena.merge_piece(&piece);
/// assert!(arena.collides(&piece));
/// assert!(arena.collides(&ActivePiece::new(PieceKind::O, Position::new(5, 19))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Arena {
    /// Creates an arena of `width` columns and `height` rows, all empty.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![Cell::Empty; width]; height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the cell at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.rows.get_mut(y)?.get_mut(x)
    }

    /// Overwrites a single cell.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(Cell::Empty);
        }
    }

    /// Returns `true` if any occupied cell of `piece` lies outside the grid or
    /// over an occupied arena cell.
    #[must_use]
    pub fn collides(&self, piece: &ActivePiece) -> bool {
        piece
            .occupied_cells()
            .any(|(x, y, _)| self.cell(x, y).is_none_or(Cell::is_occupied))
    }

    /// Writes the piece's occupied cells into the arena.
    ///
    /// The caller must have placed the piece at a non-colliding position. Cells
    /// that would fall outside the grid are skipped.
    pub fn merge_piece(&mut self, piece: &ActivePiece) {
        for (x, y, cell) in piece.occupied_cells() {
            if let Some(slot) = self.cell_mut(x, y) {
                *slot = cell;
            }
        }
    }

    /// Returns `true` if every cell of row `y` is occupied.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the grid.
    #[must_use]
    pub fn is_row_filled(&self, y: usize) -> bool {
        self.rows[y].iter().all(|cell| cell.is_occupied())
    }

    /// Removes row `y` and inserts an empty row at the top.
    ///
    /// Rows above `y` shift down by one; rows below are untouched.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the grid.
    pub fn remove_row(&mut self, y: usize) {
        self.rows[..=y].rotate_right(1);
        self.rows[0].fill(Cell::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::Position;

    fn fill_row(arena: &mut Arena, y: usize, kind: PieceKind) {
        for x in 0..arena.width() {
            arena.set_cell(x, y, Cell::Piece(kind));
        }
    }

    #[test]
    fn test_new_arena_is_empty() {
        let arena = Arena::new(12, 20);
        assert_eq!((arena.width(), arena.height()), (12, 20));
        assert!(arena.rows().flatten().all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_cell_outside_grid_is_none() {
        let arena = Arena::new(4, 4);
        assert_eq!(arena.cell(0, 0), Some(Cell::Empty));
        assert_eq!(arena.cell(3, 3), Some(Cell::Empty));
        assert_eq!(arena.cell(-1, 0), None);
        assert_eq!(arena.cell(0, -1), None);
        assert_eq!(arena.cell(4, 0), None);
        assert_eq!(arena.cell(0, 4), None);
    }

    #[test]
    fn test_cell_tag_conversion() {
        assert_eq!(Cell::from_tag(0), Ok(Cell::Empty));
        assert_eq!(Cell::from_tag(5), Ok(Cell::Piece(PieceKind::I)));
        assert!(Cell::from_tag(8).is_err());
        for tag in 0..=7 {
            assert_eq!(Cell::from_tag(tag).unwrap().tag(), tag);
        }
    }

    #[test]
    fn test_in_bounds_piece_does_not_collide() {
        let arena = Arena::new(12, 20);
        for kind in PieceKind::ALL {
            for (x, y) in [(0, 0), (4, 8), (8, 16)] {
                let piece = ActivePiece::new(kind, Position::new(x, y));
                assert!(!arena.collides(&piece), "{kind:?} at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_padding_may_hang_outside_grid() {
        let arena = Arena::new(12, 20);
        // Column 0 of the I-piece is padding, so x = -1 is still in bounds.
        let piece = ActivePiece::new(PieceKind::I, Position::new(-1, 0));
        assert!(!arena.collides(&piece));
        // T-piece row 0 is padding.
        let piece = ActivePiece::new(PieceKind::T, Position::new(0, -1));
        assert!(!arena.collides(&piece));
    }

    #[test]
    fn test_out_of_bounds_piece_collides() {
        let arena = Arena::new(12, 20);
        let cases = [
            (PieceKind::O, -1, 0),
            (PieceKind::O, 11, 0),
            (PieceKind::O, 0, 19),
            (PieceKind::O, 0, -1),
            (PieceKind::I, -2, 0),
            (PieceKind::I, 11, 0),
            (PieceKind::T, 0, 18),
        ];
        for (kind, x, y) in cases {
            let piece = ActivePiece::new(kind, Position::new(x, y));
            assert!(arena.collides(&piece), "{kind:?} at ({x}, {y})");
        }
    }

    #[test]
    fn test_overlapping_piece_collides() {
        let mut arena = Arena::new(12, 20);
        arena.set_cell(6, 10, Cell::Piece(PieceKind::Z));
        assert!(arena.collides(&ActivePiece::new(PieceKind::O, Position::new(5, 9))));
        assert!(arena.collides(&ActivePiece::new(PieceKind::O, Position::new(6, 10))));
        assert!(!arena.collides(&ActivePiece::new(PieceKind::O, Position::new(7, 10))));
        assert!(!arena.collides(&ActivePiece::new(PieceKind::O, Position::new(5, 11))));
    }

    #[test]
    fn test_merge_then_read_back() {
        let mut arena = Arena::new(12, 20);
        let piece = ActivePiece::new(PieceKind::L, Position::new(3, 10));
        arena.merge_piece(&piece);

        for (x, y, cell) in piece.occupied_cells() {
            assert_eq!(arena.cell(x, y), Some(cell));
            assert_eq!(cell.tag(), 3);
        }
        let filled = arena.rows().flatten().filter(|c| c.is_occupied()).count();
        assert_eq!(filled, 4);
    }

    #[test]
    fn test_merge_skips_cells_outside_grid() {
        let mut arena = Arena::new(4, 4);
        let piece = ActivePiece::new(PieceKind::O, Position::new(3, 3));
        arena.merge_piece(&piece);
        assert_eq!(arena.cell(3, 3), Some(Cell::Piece(PieceKind::O)));
        let filled = arena.rows().flatten().filter(|c| c.is_occupied()).count();
        assert_eq!(filled, 1);
    }

    #[test]
    fn test_clear_empties_in_place() {
        let mut arena = Arena::new(6, 5);
        fill_row(&mut arena, 4, PieceKind::T);
        arena.set_cell(0, 0, Cell::Piece(PieceKind::S));
        arena.clear();
        assert_eq!(arena, Arena::new(6, 5));
    }

    #[test]
    fn test_is_row_filled() {
        let mut arena = Arena::new(5, 5);
        fill_row(&mut arena, 2, PieceKind::J);
        assert!(arena.is_row_filled(2));
        arena.set_cell(4, 2, Cell::Empty);
        assert!(!arena.is_row_filled(2));
        assert!(!arena.is_row_filled(0));
    }

    #[test]
    fn test_remove_row_shifts_rows_above() {
        let mut arena = Arena::new(4, 5);
        arena.set_cell(0, 0, Cell::Piece(PieceKind::T));
        arena.set_cell(1, 1, Cell::Piece(PieceKind::O));
        fill_row(&mut arena, 2, PieceKind::I);
        arena.set_cell(3, 3, Cell::Piece(PieceKind::S));

        arena.remove_row(2);

        assert!(arena.rows().next().unwrap().iter().all(|c| c.is_empty()));
        assert_eq!(arena.cell(0, 1), Some(Cell::Piece(PieceKind::T)));
        assert_eq!(arena.cell(1, 2), Some(Cell::Piece(PieceKind::O)));
        assert_eq!(arena.cell(3, 3), Some(Cell::Piece(PieceKind::S)));
        assert!(!arena.is_row_filled(2));
        assert_eq!(arena.height(), 5);
    }
}

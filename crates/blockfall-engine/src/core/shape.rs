use arrayvec::ArrayVec;

use super::{arena::Cell, piece::PieceKind};

/// Side length of the largest shape (the I-piece).
pub const MAX_SHAPE_SIZE: usize = 4;

type ShapeRow = ArrayVec<Cell, MAX_SHAPE_SIZE>;

/// Direction of a 90° rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// A piece's occupied cells in its local frame.
///
/// Shapes are always square, padded with empty cells where the piece is
/// visually narrower than its bounding box (the I-piece is stored 4×4, not
/// 4×1). Rotation relies on this: transpose + reversal is only a rotation for
/// square matrices, and keeps the dimensions unchanged.
///
/// # Example
///
/// ```
/// use blockfall_engine::{PieceKind, RotationDirection, create_piece};
///
/// let mut shape = create_piece(PieceKind::T);
/// let original = shape.clone();
/// for _ in 0..4 {
///     shape.rotate(RotationDirection::Clockwise);
/// }
/// assert_eq!(shape, original);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_SIZE>,
}

impl Shape {
    /// Builds a square shape from an occupancy pattern, tagging occupied cells with `kind`.
    pub(crate) fn from_pattern(kind: PieceKind, pattern: &[&[bool]]) -> Self {
        let size = pattern.len();
        assert!(size <= MAX_SHAPE_SIZE, "shape larger than {MAX_SHAPE_SIZE}");
        let rows = pattern
            .iter()
            .map(|row| {
                assert_eq!(row.len(), size, "shape pattern must be square");
                row.iter()
                    .map(|&occupied| {
                        if occupied {
                            Cell::Piece(kind)
                        } else {
                            Cell::Empty
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, ArrayVec::len)
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y)?.get(x).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(ArrayVec::as_slice)
    }

    /// Iterates over the non-empty cells as `(x, y, cell)` in local coordinates.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_occupied())
                .map(move |(x, &cell)| (x, y, cell))
        })
    }

    /// Rotates the shape 90° in place.
    ///
    /// Transposes the matrix, then reverses each row (clockwise) or the row
    /// order (counter-clockwise).
    pub fn rotate(&mut self, direction: RotationDirection) {
        let size = self.rows.len();
        for y in 0..size {
            for x in 0..y {
                let tmp = self.rows[x][y];
                self.rows[x][y] = self.rows[y][x];
                self.rows[y][x] = tmp;
            }
        }
        match direction {
            RotationDirection::Clockwise => {
                for row in &mut self.rows {
                    row.reverse();
                }
            }
            RotationDirection::CounterClockwise => self.rows.reverse(),
        }
    }
}

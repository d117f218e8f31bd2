use std::{fmt, str::FromStr};

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use crate::InvalidPieceType;

use super::{
    arena::Cell,
    shape::{RotationDirection, Shape},
};

/// Enum representing the type of piece.
///
/// The discriminant is the piece's cell tag: the value written into the arena
/// when the piece locks, and the key render sinks use to pick a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// T-piece.
    T = 1,
    /// O-piece.
    O = 2,
    /// L-piece.
    L = 3,
    /// J-piece.
    J = 4,
    /// I-piece.
    I = 5,
    /// S-piece.
    S = 6,
    /// Z-piece.
    Z = 7,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All piece kinds, in tag order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Returns the cell tag (1-7) of this piece kind.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Looks up a piece kind by its cell tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_tag(2), Ok(PieceKind::O));
    /// assert!(PieceKind::from_tag(0).is_err());
    /// assert!(PieceKind::from_tag(8).is_err());
    /// ```
    pub fn from_tag(tag: u8) -> Result<Self, InvalidPieceType> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| InvalidPieceType {
                tag: tag.to_string(),
            })
    }

    /// Returns the single character representation of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::T => 'T',
            PieceKind::O => 'O',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::I => 'I',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Parses a piece kind from a single character, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('t'), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'T' => Some(PieceKind::T),
            'O' => Some(PieceKind::O),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            'I' => Some(PieceKind::I),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Occupancy pattern of the spawn orientation.
    fn pattern(self) -> &'static [&'static [bool]] {
        const C: bool = true;
        const E: bool = false;
        match self {
            PieceKind::T => &[&[E, E, E], &[C, C, C], &[E, C, E]],
            PieceKind::O => &[&[C, C], &[C, C]],
            PieceKind::L => &[&[E, C, E], &[E, C, E], &[E, C, C]],
            PieceKind::J => &[&[E, C, E], &[E, C, E], &[C, C, E]],
            PieceKind::I => &[
                &[E, C, E, E],
                &[E, C, E, E],
                &[E, C, E, E],
                &[E, C, E, E],
            ],
            PieceKind::S => &[&[E, C, C], &[C, C, E], &[E, E, E]],
            PieceKind::Z => &[&[C, C, E], &[E, C, C], &[E, E, E]],
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for PieceKind {
    type Err = InvalidPieceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidPieceType { tag: s.to_owned() };
        let mut chars = s.trim().chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(invalid());
        };
        Self::from_char(c).ok_or_else(invalid)
    }
}

/// Builds the spawn-orientation shape of a piece kind.
///
/// Every occupied cell carries the kind's tag. Shapes are square: 4×4 for the
/// I-piece, 2×2 for the O-piece, 3×3 for the others.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Cell, PieceKind, create_piece};
///
/// let shape = create_piece(PieceKind::O);
/// assert_eq!((shape.width(), shape.height()), (2, 2));
/// assert!(shape.rows().flatten().all(|&cell| cell == Cell::Piece(PieceKind::O)));
/// ```
#[must_use]
pub fn create_piece(kind: PieceKind) -> Shape {
    Shape::from_pattern(kind, kind.pattern())
}

/// Offset of a piece's local origin in arena coordinates.
///
/// Coordinates are signed: wall kicks may probe positions left of the arena,
/// which the collision query then rejects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
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

    #[must_use]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The falling, player-controlled piece.
///
/// Unlike locked cells, the active piece owns its shape and is mutated in
/// place by moves and rotations until it locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    kind: PieceKind,
    shape: Shape,
    position: Position,
}

impl ActivePiece {
    #[must_use]
    pub fn new(kind: PieceKind, position: Position) -> Self {
        Self {
            kind,
            shape: create_piece(kind),
            position,
        }
    }

    /// Creates a piece at the top row, horizontally centred in an arena of `arena_width`.
    ///
    /// # Example
    ///
    /// ```
    /// use blockfall_engine::{ActivePiece, PieceKind, Position};
    ///
    /// let piece = ActivePiece::spawn(PieceKind::O, 12);
    /// assert_eq!(piece.position(), Position::new(5, 0));
    /// ```
    #[must_use]
    pub fn spawn(kind: PieceKind, arena_width: usize) -> Self {
        let shape = create_piece(kind);
        let x = to_coord(arena_width / 2) - to_coord(shape.width() / 2);
        Self {
            kind,
            shape,
            position: Position::new(x, 0),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Iterates over the occupied cells as `(x, y, cell)` in arena coordinates.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.shape.occupied_cells().map(move |(dx, dy, cell)| {
            (
                self.position.x + to_coord(dx),
                self.position.y + to_coord(dy),
                cell,
            )
        })
    }

    pub(crate) fn shift(&mut self, dx: i32, dy: i32) {
        self.position = self.position.translated(dx, dy);
    }

    pub(crate) fn rotate(&mut self, direction: RotationDirection) {
        self.shape.rotate(direction);
    }
}

/// Converts a grid index into a signed coordinate.
///
/// Arena and shape sides are bounded by [`crate::GameConfig::MAX_ARENA_SIDE`],
/// far below `i32::MAX`.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) const fn to_coord(n: usize) -> i32 {
    n as i32
}

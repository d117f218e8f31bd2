/// A discrete player input.
///
/// The mapping from physical keys to commands belongs to the input source.
///
/// # Example
///
/// ```
/// use blockfall_engine::Command;
///
/// let command: Command = "RotateCw".parse().unwrap();
/// assert_eq!(command, Command::RotateCw);
/// assert_eq!(command.to_string(), "RotateCw");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::FromStr)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// Drop one row; locks the piece if it cannot move down.
    SoftDrop,
    RotateCw,
    RotateCcw,
}

/// Horizontal move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    #[must_use]
    pub const fn dx(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("piece colliding after move or rotation")]
pub struct PieceCollisionError;

/// A piece tag that does not name one of the seven piece kinds.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid piece type: {tag:?}")]
pub struct InvalidPieceType {
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display(
        "arena size {width}x{height} is out of range (each side must be {}..={})",
        GameConfig::MIN_ARENA_SIDE,
        GameConfig::MAX_ARENA_SIDE
    )]
    InvalidArenaSize { width: usize, height: usize },
    #[display("drop interval must be greater than zero")]
    ZeroDropInterval,
}

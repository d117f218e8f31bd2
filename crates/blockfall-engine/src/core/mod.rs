//! Arena and piece data model.
//!
//! - [`Cell`] - One grid cell, empty or tagged with a piece kind
//! - [`Arena`] - The fixed-size grid of locked cells, with collision queries
//! - [`Shape`] - A square cell matrix rotated in place
//! - [`PieceKind`] / [`create_piece`] - The seven-piece catalog
//! - [`ActivePiece`] - The falling piece: kind, shape and offset

pub use self::{arena::*, piece::*, shape::*};

pub(crate) mod arena;
pub(crate) mod piece;
pub(crate) mod shape;

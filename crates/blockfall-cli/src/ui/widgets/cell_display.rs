use blockfall_engine::{Cell, PieceKind};
use ratatui::{buffer::Cell as BufferCell, style::Style};

use crate::ui::widgets::style;

/// How one arena cell looks on screen.
///
/// A cell is [`CellDisplay::WIDTH`] terminal columns wide so that blocks
/// come out roughly square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const WIDTH: u16 = 2;
    pub const HEIGHT: u16 = 1;

    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn from_cell(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Self::new(style::EMPTY, " "),
            Cell::Piece(kind) => {
                let style = match kind {
                    PieceKind::T => style::T_BLOCK,
                    PieceKind::O => style::O_BLOCK,
                    PieceKind::L => style::L_BLOCK,
                    PieceKind::J => style::J_BLOCK,
                    PieceKind::I => style::I_BLOCK,
                    PieceKind::S => style::S_BLOCK,
                    PieceKind::Z => style::Z_BLOCK,
                };
                Self::new(style, " ")
            }
        }
    }

    pub fn draw(&self, cell: &mut BufferCell) {
        cell.set_style(self.style);
        cell.set_symbol(self.symbol);
    }
}

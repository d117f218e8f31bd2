use blockfall_engine::{ActivePiece, Arena, Cell, RenderSink};
use ratatui::{
    prelude::{Buffer, Rect},
    widgets::{Block, Widget},
};

use crate::ui::widgets::{CellDisplay, block_horizontal_margin, block_vertical_margin};

/// The arena with the active piece painted over it, as of the last frame.
///
/// This is the render sink the session draws into; [`ArenaDisplay`] puts it
/// on screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArenaSnapshot {
    rows: Vec<Vec<Cell>>,
}

impl ArenaSnapshot {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl RenderSink for ArenaSnapshot {
    fn draw(&mut self, arena: &Arena, piece: &ActivePiece) {
        self.rows.resize_with(arena.height(), Vec::new);
        for (dst, src) in self.rows.iter_mut().zip(arena.rows()) {
            dst.clear();
            dst.extend_from_slice(src);
        }
        for (x, y, cell) in piece.occupied_cells() {
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y))
                && let Some(slot) = self.rows.get_mut(y).and_then(|row| row.get_mut(x))
            {
                *slot = cell;
            }
        }
    }
}

#[derive(Debug)]
pub struct ArenaDisplay<'a> {
    snapshot: &'a ArenaSnapshot,
    block: Option<Block<'a>>,
}

impl<'a> ArenaDisplay<'a> {
    pub fn new(snapshot: &'a ArenaSnapshot) -> Self {
        Self {
            snapshot,
            block: None,
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        to_u16(self.snapshot.width())
            .saturating_mul(CellDisplay::WIDTH)
            .saturating_add(block_horizontal_margin(self.block.as_ref()))
    }

    pub fn height(&self) -> u16 {
        to_u16(self.snapshot.height())
            .saturating_mul(CellDisplay::HEIGHT)
            .saturating_add(block_vertical_margin(self.block.as_ref()))
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

impl Widget for ArenaDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ArenaDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let area = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        for (y, row) in self.snapshot.rows().enumerate() {
            let top = area
                .y
                .saturating_add(to_u16(y).saturating_mul(CellDisplay::HEIGHT));
            if top >= area.bottom() {
                break;
            }
            for (x, &cell) in row.iter().enumerate() {
                let left = area
                    .x
                    .saturating_add(to_u16(x).saturating_mul(CellDisplay::WIDTH));
                let display = CellDisplay::from_cell(cell);
                for col in left..left.saturating_add(CellDisplay::WIDTH).min(area.right()) {
                    if let Some(buf_cell) = buf.cell_mut((col, top)) {
                        display.draw(buf_cell);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{PieceKind, Position};

    use super::*;
    use crate::ui::widgets::style;

    #[test]
    fn test_snapshot_overlays_active_piece() {
        let mut arena = Arena::new(6, 5);
        arena.set_cell(0, 4, Cell::Piece(PieceKind::Z));
        let piece = ActivePiece::new(PieceKind::O, Position::new(2, 1));

        let mut snapshot = ArenaSnapshot::default();
        snapshot.draw(&arena, &piece);

        assert_eq!((snapshot.width(), snapshot.height()), (6, 5));
        let rows: Vec<_> = snapshot.rows().collect();
        assert_eq!(rows[4][0], Cell::Piece(PieceKind::Z));
        for (x, y) in [(2, 1), (3, 1), (2, 2), (3, 2)] {
            assert_eq!(rows[y][x], Cell::Piece(PieceKind::O));
        }
        // The arena itself is untouched.
        assert_eq!(arena.cell(2, 1), Some(Cell::Empty));
    }

    #[test]
    fn test_snapshot_is_replaced_each_frame() {
        let arena = Arena::new(6, 5);
        let mut snapshot = ArenaSnapshot::default();
        snapshot.draw(&arena, &ActivePiece::new(PieceKind::O, Position::new(0, 0)));
        snapshot.draw(&arena, &ActivePiece::new(PieceKind::O, Position::new(4, 3)));

        let occupied = snapshot
            .rows()
            .flatten()
            .filter(|cell| cell.is_occupied())
            .count();
        assert_eq!(occupied, 4);
        assert_eq!(snapshot.rows().next().unwrap()[0], Cell::Empty);
    }

    #[test]
    fn test_display_size_includes_border() {
        let mut snapshot = ArenaSnapshot::default();
        snapshot.draw(
            &Arena::new(12, 20),
            &ActivePiece::new(PieceKind::T, Position::new(0, 0)),
        );
        let display = ArenaDisplay::new(&snapshot).block(Block::bordered());
        assert_eq!((display.width(), display.height()), (26, 22));
    }

    #[test]
    fn test_render_paints_two_columns_per_cell() {
        let mut arena = Arena::new(4, 4);
        arena.set_cell(1, 3, Cell::Piece(PieceKind::I));
        let mut snapshot = ArenaSnapshot::default();
        snapshot.draw(&arena, &ActivePiece::new(PieceKind::O, Position::new(2, 0)));

        let screen = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(screen);
        ArenaDisplay::new(&snapshot).render(screen, &mut buf);

        let bg = |x: u16, y: u16| buf.cell((x, y)).and_then(|cell| cell.style().bg);
        assert_eq!(bg(2, 3), style::I_BLOCK.bg);
        assert_eq!(bg(3, 3), style::I_BLOCK.bg);
        assert_eq!(bg(4, 0), style::O_BLOCK.bg);
        assert_eq!(bg(7, 1), style::O_BLOCK.bg);
        assert_eq!(bg(0, 0), style::EMPTY.bg);
    }
}

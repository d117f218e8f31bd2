use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{arena_display::*, cell_display::*, stats_display::*};

mod arena_display;
mod cell_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    pub const PINK: Color = Color::Rgb(0xFF, 0x0D, 0x72);
    pub const SKY: Color = Color::Rgb(0x0D, 0xC2, 0xFF);
    pub const GREEN: Color = Color::Rgb(0x0D, 0xFF, 0x72);
    pub const VIOLET: Color = Color::Rgb(0xF5, 0x38, 0xFF);
    pub const ORANGE: Color = Color::Rgb(0xFF, 0x8E, 0x0D);
    pub const YELLOW: Color = Color::Rgb(0xFF, 0xE1, 0x38);
    pub const BLUE: Color = Color::Rgb(0x38, 0x77, 0xFF);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const DIM: Style = fg_bg(color::GRAY, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);

    pub const T_BLOCK: Style = bg_only(color::PINK);
    pub const O_BLOCK: Style = bg_only(color::SKY);
    pub const L_BLOCK: Style = bg_only(color::GREEN);
    pub const J_BLOCK: Style = bg_only(color::VIOLET);
    pub const I_BLOCK: Style = bg_only(color::ORANGE);
    pub const S_BLOCK: Style = bg_only(color::YELLOW);
    pub const Z_BLOCK: Style = bg_only(color::BLUE);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}

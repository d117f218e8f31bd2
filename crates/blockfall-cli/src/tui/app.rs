use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// A screen driven by [`Tui::run`].
pub trait App {
    /// Called once before the first event; sets the frame rate and render mode.
    fn init(&mut self, tui: &mut Tui);

    fn should_exit(&self) -> bool;

    fn handle_event(&mut self, tui: &mut Tui, event: Event);

    fn draw(&self, frame: &mut Frame);

    /// Advances the game clock to `timestamp_ms`.
    ///
    /// Timestamps count from the start of the run and never decrease.
    fn update(&mut self, tui: &mut Tui, timestamp_ms: u64);
}

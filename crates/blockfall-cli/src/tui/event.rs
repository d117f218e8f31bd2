use crossterm::event::Event as CrosstermEvent;

/// What the event loop hands to the runner.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// The game clock advanced. Milliseconds since the loop started.
    #[from(skip)]
    Frame(u64),
    /// The screen is due for a redraw.
    Render,
    /// Key input, resize and other terminal events.
    Crossterm(CrosstermEvent),
}

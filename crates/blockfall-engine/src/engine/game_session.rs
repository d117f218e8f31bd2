use super::{
    command::Command,
    game_state::{DropOutcome, GameState, LockEvent},
    game_stats::GameStats,
    sink::{RenderSink, ScoreSink},
};

/// A running game wired to its score sink.
///
/// Forwards every lock to the score sink and the statistics, and draws
/// through a [`RenderSink`] once per frame.
#[derive(Debug)]
pub struct GameSession<S> {
    state: GameState,
    stats: GameStats,
    score_sink: S,
}

impl<S> GameSession<S>
where
    S: ScoreSink,
{
    #[must_use]
    pub fn new(state: GameState, score_sink: S) -> Self {
        Self {
            state,
            stats: GameStats::new(),
            score_sink,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score_sink(&self) -> &S {
        &self.score_sink
    }

    #[must_use]
    pub fn into_parts(self) -> (GameState, GameStats, S) {
        (self.state, self.stats, self.score_sink)
    }

    /// Advances gravity to `timestamp_ms`, then draws the frame.
    pub fn on_frame<R>(&mut self, timestamp_ms: u64, render_sink: &mut R) -> Option<LockEvent>
    where
        R: RenderSink + ?Sized,
    {
        let score_before = self.state.score();
        let event = match self.state.on_frame(timestamp_ms) {
            Some(DropOutcome::Locked(event)) => {
                self.record_lock(score_before, &event);
                Some(event)
            }
            Some(DropOutcome::Moved) | None => None,
        };
        render_sink.draw(self.state.arena(), self.state.active_piece());
        event
    }

    /// Applies a player command, reporting the lock if it caused one.
    pub fn apply(&mut self, command: Command) -> Option<LockEvent> {
        let score_before = self.state.score();
        let event = self.state.apply(command)?;
        self.record_lock(score_before, &event);
        Some(event)
    }

    fn record_lock(&mut self, score_before: u64, event: &LockEvent) {
        self.stats.observe_score(score_before);
        self.stats.record_lock(event);
        self.score_sink.report_score(event.score);
    }
}

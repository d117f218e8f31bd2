use super::game_state::LockEvent;

/// Session statistics, accumulated across game-overs.
///
/// The score itself lives in [`crate::GameState`] and is zeroed on game-over;
/// these counters are not.
///
/// # Example
///
/// ```
/// use blockfall_engine::{GameStats, LockEvent};
///
/// let mut stats = GameStats::new();
/// stats.record_lock(&LockEvent {
///     rows_cleared: 2,
///     points: 30,
///     score: 30,
///     game_over: false,
/// });
///
/// assert_eq!(stats.pieces_locked(), 1);
/// assert_eq!(stats.total_rows_cleared(), 2);
/// assert_eq!(stats.rows_cleared_counter()[2], 1);
/// assert_eq!(stats.best_score(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pieces_locked: usize,
    total_rows_cleared: usize,
    rows_cleared_counter: [usize; 5],
    game_overs: usize,
    best_score: u64,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pieces_locked: 0,
            total_rows_cleared: 0,
            rows_cleared_counter: [0; 5],
            game_overs: 0,
            best_score: 0,
        }
    }

    #[must_use]
    pub const fn pieces_locked(&self) -> usize {
        self.pieces_locked
    }

    #[must_use]
    pub const fn total_rows_cleared(&self) -> usize {
        self.total_rows_cleared
    }

    /// Number of locks per rows-cleared count.
    ///
    /// Index 0 counts locks that cleared nothing; index 4 counts locks that
    /// cleared four or more rows.
    #[must_use]
    pub const fn rows_cleared_counter(&self) -> &[usize; 5] {
        &self.rows_cleared_counter
    }

    #[must_use]
    pub const fn game_overs(&self) -> usize {
        self.game_overs
    }

    /// Highest score reached before any game-over reset it.
    #[must_use]
    pub const fn best_score(&self) -> u64 {
        self.best_score
    }

    /// Records a completed lock.
    pub fn record_lock(&mut self, event: &LockEvent) {
        self.pieces_locked += 1;
        self.total_rows_cleared += event.rows_cleared;
        self.rows_cleared_counter[event.rows_cleared.min(4)] += 1;
        self.best_score = self.best_score.max(event.score);
        if event.game_over {
            self.game_overs += 1;
        }
    }

    /// Records a score observed outside a lock event.
    ///
    /// A lock that ends in game-over reports the zeroed score, so the score
    /// reached just before the lock is fed in here.
    pub fn observe_score(&mut self, score: u64) {
        self.best_score = self.best_score.max(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lock(rows_cleared: usize, score: u64, game_over: bool) -> LockEvent {
        LockEvent {
            rows_cleared,
            points: 0,
            score,
            game_over,
        }
    }

    #[test]
    fn test_new_stats_are_zero() {
        let stats = GameStats::new();
        assert_eq!(stats.pieces_locked(), 0);
        assert_eq!(stats.total_rows_cleared(), 0);
        assert_eq!(stats.rows_cleared_counter(), &[0; 5]);
        assert_eq!(stats.game_overs(), 0);
        assert_eq!(stats.best_score(), 0);
        assert_eq!(stats, GameStats::default());
    }

    #[test]
    fn test_record_lock_accumulates() {
        let mut stats = GameStats::new();
        stats.record_lock(&lock(0, 0, false));
        stats.record_lock(&lock(1, 10, false));
        stats.record_lock(&lock(4, 160, false));
        stats.record_lock(&lock(1, 170, false));

        assert_eq!(stats.pieces_locked(), 4);
        assert_eq!(stats.total_rows_cleared(), 6);
        assert_eq!(stats.rows_cleared_counter(), &[1, 2, 0, 0, 1]);
        assert_eq!(stats.best_score(), 170);
    }

    #[test]
    fn test_best_score_survives_game_over() {
        let mut stats = GameStats::new();
        stats.record_lock(&lock(2, 30, false));
        stats.record_lock(&lock(0, 0, true));
        stats.record_lock(&lock(1, 10, false));

        assert_eq!(stats.game_overs(), 1);
        assert_eq!(stats.best_score(), 30);

        stats.observe_score(45);
        assert_eq!(stats.best_score(), 45);
    }
}

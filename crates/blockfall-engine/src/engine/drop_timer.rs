/// Gravity timer driven by frame timestamps.
///
/// Each frame adds the time elapsed since the previous frame to an
/// accumulator. Gravity is due once the accumulator exceeds the interval;
/// the owner then drops the piece and calls [`DropTimer::restart`].
///
/// # Example
///
/// ```
/// use blockfall_engine::DropTimer;
///
/// let mut timer = DropTimer::new(1000);
/// assert!(!timer.advance(600));
/// assert!(!timer.advance(1000)); // exactly the interval is not enough
/// assert!(timer.advance(1016));
/// timer.restart();
/// assert!(!timer.advance(1032));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u64,
    accumulator_ms: u64,
    last_frame_ms: u64,
}

impl DropTimer {
    /// Creates a timer whose first frame is measured from timestamp 0.
    #[must_use]
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            accumulator_ms: 0,
            last_frame_ms: 0,
        }
    }

    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    #[must_use]
    pub const fn accumulator_ms(&self) -> u64 {
        self.accumulator_ms
    }

    /// Records a frame at `timestamp_ms` and returns whether gravity is due.
    ///
    /// A timestamp earlier than the previous frame counts as zero elapsed time.
    pub fn advance(&mut self, timestamp_ms: u64) -> bool {
        let delta = timestamp_ms.saturating_sub(self.last_frame_ms);
        self.last_frame_ms = timestamp_ms;
        self.accumulator_ms = self.accumulator_ms.saturating_add(delta);
        self.accumulator_ms > self.interval_ms
    }

    /// Zeroes the accumulator, restarting the gravity delay.
    pub fn restart(&mut self) {
        self.accumulator_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_frame_deltas() {
        let mut timer = DropTimer::new(100);
        for t in [16, 32, 48, 64, 80, 96] {
            assert!(!timer.advance(t));
        }
        assert_eq!(timer.accumulator_ms(), 96);
        assert!(timer.advance(112));
    }

    #[test]
    fn test_stays_due_until_restarted() {
        let mut timer = DropTimer::new(10);
        assert!(timer.advance(20));
        assert!(timer.advance(21));
        timer.restart();
        assert_eq!(timer.accumulator_ms(), 0);
        assert!(!timer.advance(22));
    }

    #[test]
    fn test_backwards_timestamp_counts_as_zero() {
        let mut timer = DropTimer::new(100);
        assert!(!timer.advance(50));
        assert!(!timer.advance(40));
        assert_eq!(timer.accumulator_ms(), 50);
        assert!(!timer.advance(90));
        assert_eq!(timer.accumulator_ms(), 100);
        assert!(timer.advance(91));
    }
}

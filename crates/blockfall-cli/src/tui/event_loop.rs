use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// When the screen is redrawn.
#[derive(Debug, Clone, Copy, Default)]
pub enum RenderMode {
    /// Redraw whenever a frame or terminal event has changed something.
    #[default]
    OnDirty,
    /// Like `OnDirty`, but at most once per interval.
    Throttled(Duration),
}

impl RenderMode {
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }

    /// Earliest instant a redraw may happen, given the previous one.
    fn ready_at(self, last_render: Option<Instant>, now: Instant) -> Instant {
        match (self, last_render) {
            (Self::Throttled(interval), Some(last)) => now.max(last + interval),
            _ => now,
        }
    }
}

/// Millisecond timestamps for frame events, counted from an origin.
///
/// A timestamp is never smaller than the one before it.
#[derive(Debug, Clone, Copy)]
struct FrameClock {
    origin: Instant,
    last_ms: u64,
}

impl FrameClock {
    fn new(origin: Instant) -> Self {
        Self { origin, last_ms: 0 }
    }

    fn stamp(&mut self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.origin).as_millis();
        let elapsed = u64::try_from(elapsed).unwrap_or(u64::MAX);
        self.last_ms = self.last_ms.max(elapsed);
        self.last_ms
    }
}

#[derive(Debug, Clone, Copy)]
struct FrameSchedule {
    interval: Duration,
    next_at: Instant,
}

impl FrameSchedule {
    /// Moves to the following slot. Slots already missed are dropped rather
    /// than replayed in a burst.
    fn advance(&mut self, now: Instant) {
        let following = self.next_at + self.interval;
        self.next_at = if following > now {
            following
        } else {
            now + self.interval
        };
    }
}

/// Drives the game clock and decides when to redraw.
///
/// Each `Frame` event carries the milliseconds elapsed since the loop was
/// created. Without a frame interval only render and terminal events occur.
#[derive(Debug)]
pub(super) struct EventLoop {
    clock: FrameClock,
    frames: Option<FrameSchedule>,
    render_mode: RenderMode,
    last_render: Option<Instant>,
    dirty: bool,
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(origin: Instant) -> Self {
        Self {
            clock: FrameClock::new(origin),
            frames: None,
            render_mode: RenderMode::default(),
            last_render: None,
            // The first screen is drawn before any input arrives.
            dirty: true,
        }
    }

    /// Sets the frame interval. The first frame is due one interval after the origin.
    pub(super) fn set_frame_interval(&mut self, interval: Option<Duration>) {
        self.frames = interval.map(|interval| FrameSchedule {
            interval,
            next_at: self.clock.origin + interval,
        });
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Blocks until a frame or render is due, or the terminal has input.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(event) = self.due(now) {
                return Ok(event);
            }
            // Nothing scheduled: wait on the terminal alone.
            let has_input = match self.wait_time(now) {
                Some(timeout) => event::poll(timeout)?,
                None => true,
            };
            if has_input {
                self.dirty = true;
                return Ok(event::read()?.into());
            }
        }
    }

    /// The scheduled event due at `now`, if any. Frames come before renders.
    fn due(&mut self, now: Instant) -> Option<TuiEvent> {
        if let Some(frames) = &mut self.frames
            && frames.next_at <= now
        {
            frames.advance(now);
            self.dirty = true;
            return Some(TuiEvent::Frame(self.clock.stamp(now)));
        }

        if self.dirty && self.render_mode.ready_at(self.last_render, now) <= now {
            self.last_render = Some(now);
            self.dirty = false;
            return Some(TuiEvent::Render);
        }
        None
    }

    fn wait_time(&self, now: Instant) -> Option<Duration> {
        let frame_at = self.frames.map(|frames| frames.next_at);
        let render_at = self
            .dirty
            .then(|| self.render_mode.ready_at(self.last_render, now));
        let wake_at = frame_at.into_iter().chain(render_at).min()?;
        Some(wake_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(10);

    fn at(origin: Instant, ms: u64) -> Instant {
        origin + Duration::from_millis(ms)
    }

    /// Frame timestamps emitted while polling at each of `times`.
    fn frames_at(events: &mut EventLoop, origin: Instant, times: &[u64]) -> Vec<u64> {
        let mut stamps = vec![];
        for &ms in times {
            while let Some(event) = events.due(at(origin, ms)) {
                if let TuiEvent::Frame(stamp) = event {
                    stamps.push(stamp);
                }
            }
        }
        stamps
    }

    #[test]
    fn test_frame_timestamps_never_decrease() {
        let origin = Instant::now();
        let mut events = EventLoop::starting_at(origin);
        events.set_frame_interval(Some(INTERVAL));

        let stamps = frames_at(&mut events, origin, &[0, 10, 12, 25, 31, 29, 48, 100, 101, 111]);
        assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]), "{stamps:?}");
        assert_eq!(stamps, vec![10, 25, 31, 48, 100, 111]);
    }

    #[test]
    fn test_frame_clock_ignores_earlier_instants() {
        let origin = Instant::now();
        let mut clock = FrameClock::new(origin);
        assert_eq!(clock.stamp(at(origin, 40)), 40);
        assert_eq!(clock.stamp(at(origin, 30)), 40);
        assert_eq!(clock.stamp(origin), 40);
        assert_eq!(clock.stamp(at(origin, 41)), 41);
    }

    #[test]
    fn test_missed_frames_are_not_replayed() {
        let origin = Instant::now();
        let mut events = EventLoop::starting_at(origin);
        events.set_frame_interval(Some(INTERVAL));

        // Five slots went by; only one frame fires and the next is a full
        // interval later.
        assert_eq!(frames_at(&mut events, origin, &[55]), vec![55]);
        assert_eq!(frames_at(&mut events, origin, &[60, 64]), Vec::<u64>::new());
        assert_eq!(frames_at(&mut events, origin, &[65]), vec![65]);
    }

    #[test]
    fn test_no_frames_without_interval() {
        let origin = Instant::now();
        let mut events = EventLoop::starting_at(origin);

        assert!(events.due(origin).is_some_and(|event| event.is_render()));
        assert!(events.due(at(origin, 1000)).is_none());
        assert_eq!(events.wait_time(at(origin, 1000)), None);
    }

    #[test]
    fn test_throttled_render_waits_for_interval() {
        let origin = Instant::now();
        let mut events = EventLoop::starting_at(origin);
        events.set_render_mode(RenderMode::Throttled(Duration::from_millis(16)));

        assert!(events.due(origin).is_some_and(|event| event.is_render()));
        events.dirty = true;
        assert!(events.due(at(origin, 5)).is_none());
        assert_eq!(
            events.wait_time(at(origin, 5)),
            Some(Duration::from_millis(11))
        );
        assert!(events.due(at(origin, 16)).is_some_and(|event| event.is_render()));
    }

    #[test]
    fn test_wait_time_targets_next_frame() {
        let origin = Instant::now();
        let mut events = EventLoop::starting_at(origin);
        events.set_frame_interval(Some(INTERVAL));
        assert!(events.due(at(origin, 3)).is_some_and(|event| event.is_render()));

        assert_eq!(events.wait_time(at(origin, 3)), Some(Duration::from_millis(7)));
    }
}

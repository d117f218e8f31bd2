use std::fmt;

use blockfall_engine::{GameSession, GameState, RenderSink as _};
use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Padding},
};

use crate::{
    command::play::input::{self, Action},
    tui::{App, RenderMode, Tui},
    ui::widgets::{ArenaDisplay, ArenaSnapshot, ScoreBoard, StatsDisplay, style},
};

const HELP: &str = "Controls: ← → (Move) | ↓ (Drop) | Q W (Rotate) | Esc (Quit)";

#[derive(Debug)]
pub struct PlayApp {
    session: GameSession<ScoreBoard>,
    snapshot: ArenaSnapshot,
    fps: u32,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(state: GameState, fps: u32) -> Self {
        let mut snapshot = ArenaSnapshot::default();
        snapshot.draw(state.arena(), state.active_piece());
        Self {
            session: GameSession::new(state, ScoreBoard::default()),
            snapshot,
            fps,
            is_exiting: false,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        let stats = self.session.stats();
        SessionSummary {
            score: self.session.state().score(),
            best_score: stats.best_score().max(self.session.state().score()),
            pieces_locked: stats.pieces_locked(),
            rows_cleared: stats.total_rows_cleared(),
            game_overs: stats.game_overs(),
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        let rate = f64::from(self.fps);
        tui.set_frame_rate(rate);
        tui.set_render_mode(RenderMode::throttled_from_rate(rate));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        match input::action_for(&event) {
            Some(Action::Command(command)) => {
                _ = self.session.apply(command);
                let state = self.session.state();
                self.snapshot.draw(state.arena(), state.active_piece());
            }
            Some(Action::Quit) => self.is_exiting = true,
            None => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let arena = ArenaDisplay::new(&self.snapshot).block(
            Block::bordered()
                .title(Line::from("BLOCKFALL").centered())
                .style(style::DEFAULT),
        );
        let stats = StatsDisplay::new(self.session.score_sink(), self.session.stats()).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::horizontal(1))
                .style(style::DEFAULT),
        );
        let help_text = Text::from(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] = Layout::vertical([
            Constraint::Length(arena.height()),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [arena_area, stats_column] = Layout::horizontal([
            Constraint::Length(arena.width()),
            Constraint::Length(stats.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(main_area);
        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas(stats_column);

        frame.render_widget(&arena, arena_area);
        frame.render_widget(&stats, stats_area);
        frame.render_widget(help_text, help_area);
    }

    fn update(&mut self, _tui: &mut Tui, timestamp_ms: u64) {
        self.session.on_frame(timestamp_ms, &mut self.snapshot);
    }
}

/// Totals printed after the terminal is restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u64,
    pub best_score: u64,
    pub pieces_locked: usize,
    pub rows_cleared: usize,
    pub game_overs: usize,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final score:   {}", self.score)?;
        writeln!(f, "Best score:    {}", self.best_score)?;
        writeln!(f, "Pieces locked: {}", self.pieces_locked)?;
        writeln!(f, "Rows cleared:  {}", self.rows_cleared)?;
        write!(f, "Game overs:    {}", self.game_overs)
    }
}

use blockfall_engine::{GameStats, ScoreSink};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::ui::widgets::{block_horizontal_margin, block_vertical_margin, style};

/// Score as last reported by the session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u64,
    last_gain: u64,
}

impl ScoreBoard {
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Points added by the most recent lock (0 after a game-over).
    pub fn last_gain(&self) -> u64 {
        self.last_gain
    }
}

impl ScoreSink for ScoreBoard {
    fn report_score(&mut self, score: u64) {
        self.last_gain = score.saturating_sub(self.score);
        self.score = score;
    }
}

const LABEL_WIDTH: usize = 11;
const VALUE_WIDTH: usize = 8;
const CLEAR_LABELS: [&str; 4] = ["  SINGLE", "  DOUBLE", "  TRIPLE", "  QUAD"];

#[derive(Debug)]
pub struct StatsDisplay<'a> {
    score_board: &'a ScoreBoard,
    stats: &'a GameStats,
    block: Option<Block<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(score_board: &'a ScoreBoard, stats: &'a GameStats) -> Self {
        Self {
            score_board,
            stats,
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
        u16::try_from(LABEL_WIDTH + VALUE_WIDTH).unwrap_or(u16::MAX)
            + block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.lines().len()).unwrap_or(u16::MAX)
            + block_vertical_margin(self.block.as_ref())
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let stats = self.stats;
        let counter = stats.rows_cleared_counter();
        let mut lines = vec![
            row("SCORE", &self.score_board.score().to_string(), style::DEFAULT),
            row("", &format!("+{}", self.score_board.last_gain()), style::DIM),
            row("BEST", &stats.best_score().to_string(), style::DEFAULT),
            Line::default(),
            row("PIECES", &stats.pieces_locked().to_string(), style::DEFAULT),
            row("ROWS", &stats.total_rows_cleared().to_string(), style::DEFAULT),
        ];
        for (label, count) in CLEAR_LABELS.into_iter().zip(&counter[1..]) {
            lines.push(row(label, &count.to_string(), style::DIM));
        }
        lines.push(Line::default());
        lines.push(row(
            "GAME OVERS",
            &stats.game_overs().to_string(),
            style::DEFAULT,
        ));
        lines
    }
}

fn row(label: &str, value: &str, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), style::DEFAULT),
        Span::styled(format!("{value:>VALUE_WIDTH$}"), value_style),
    ])
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut paragraph = Paragraph::new(self.lines()).style(style::DEFAULT);
        if let Some(block) = &self.block {
            paragraph = paragraph.block(block.clone());
        }
        paragraph.render(area, buf);
    }
}

use crate::{ActivePiece, Arena};

/// Receives the score after every lock, whether or not rows were cleared.
pub trait ScoreSink {
    fn report_score(&mut self, score: u64);
}

impl<F> ScoreSink for F
where
    F: FnMut(u64),
{
    fn report_score(&mut self, score: u64) {
        self(score);
    }
}

/// Score sink that ignores every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardScore;

impl ScoreSink for DiscardScore {
    fn report_score(&mut self, _score: u64) {}
}

/// Draws the arena and the active piece, once per frame.
///
/// Colours are the sink's business; cells carry only their piece tag.
pub trait RenderSink {
    fn draw(&mut self, arena: &Arena, piece: &ActivePiece);
}

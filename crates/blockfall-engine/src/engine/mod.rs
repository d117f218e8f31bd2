//! Game rules and state management.
//!
//! - [`GameState`] - The state machine: arena, active piece, score and gravity
//! - [`GameSession`] - A game wired to its score sink, with [`GameStats`]
//! - [`GameConfig`] - Arena size, gravity interval and sweep behaviour
//! - [`DropTimer`] - Frame-driven gravity accumulator
//! - [`PieceGenerator`] / [`PieceSeed`] - Uniform, optionally seeded, piece selection
//! - [`Command`] - Player inputs
//! - [`ScoreSink`] / [`RenderSink`] - Outbound interfaces to the presentation layer
//!
//! # Game Flow
//!
//! 1. Create a [`GameState`] from a validated [`GameConfig`]; the first piece spawns
//! 2. Each frame, call `on_frame(timestamp_ms)`; gravity drops the piece when due
//! 3. Player commands move, rotate or drop the piece
//! 4. A piece that cannot move down locks: it is merged, the next piece spawns,
//!    and full rows are swept
//! 5. A spawn that collides is a game-over: the arena and score reset and play continues

pub use self::{
    command::*, config::*, drop_timer::*, game_session::*, game_state::*, game_stats::*,
    piece_generator::*, sink::*,
};

mod command;
mod config;
mod drop_timer;
mod game_session;
mod game_state;
mod game_stats;
mod piece_generator;
mod sink;

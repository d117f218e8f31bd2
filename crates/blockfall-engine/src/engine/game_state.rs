use crate::{
    ConfigError, PieceCollisionError,
    core::{ActivePiece, Arena, PieceKind, RotationDirection, to_coord},
};

use super::{
    command::{Command, MoveDirection},
    config::GameConfig,
    drop_timer::DropTimer,
    piece_generator::{PieceGenerator, PieceSeed},
};

/// Points for the first row cleared in one sweep; each further row doubles.
const ROW_POINTS: u64 = 10;

/// Result of one drop step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Moved,
    /// The piece could not move down and was locked into the arena.
    Locked(LockEvent),
}

/// What happened when a piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Rows removed by the sweep that followed the lock.
    pub rows_cleared: usize,
    /// Points awarded by that sweep.
    pub points: u64,
    /// Score after the lock.
    pub score: u64,
    /// The next piece collided at spawn and the board was reset.
    pub game_over: bool,
}

/// Result of a sweep over the arena.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    pub rows_cleared: usize,
    pub points: u64,
}

/// Result of spawning a new piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SpawnOutcome {
    Spawned,
    /// The new piece collided at spawn: the arena was cleared and the score zeroed.
    GameOver,
}

/// The game state machine.
///
/// Owns the arena, the active piece and the score, and is the only thing that
/// mutates them. Lock, sweep and game-over handling all happen synchronously
/// inside [`GameState::drop_piece`]; between locks the piece is always in the
/// falling state.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Command, GameConfig, GameState};
///
/// let mut game = GameState::new(GameConfig::default()).unwrap();
///
/// game.apply(Command::MoveLeft);
/// game.apply(Command::RotateCw);
///
/// // Manual drops until the piece locks.
/// let event = loop {
///     if let Some(event) = game.apply(Command::SoftDrop) {
///         break event;
///     }
/// };
/// assert_eq!(event.rows_cleared, 0);
/// assert_eq!(game.score(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    arena: Arena,
    piece: ActivePiece,
    score: u64,
    drop_timer: DropTimer,
    generator: PieceGenerator,
}

impl GameState {
    /// Creates a game with a random piece sequence.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_generator(config, PieceGenerator::new())
    }

    /// Like [`Self::new`], but with a specific seed for a reproducible piece sequence.
    pub fn with_seed(config: GameConfig, seed: PieceSeed) -> Result<Self, ConfigError> {
        Self::with_generator(config, PieceGenerator::with_seed(seed))
    }

    fn with_generator(
        config: GameConfig,
        mut generator: PieceGenerator,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        // An empty arena at least as wide as every shape always accepts the spawn.
        let piece = ActivePiece::spawn(generator.next_kind(), config.width);
        Ok(Self {
            config,
            arena: Arena::new(config.width, config.height),
            piece,
            score: 0,
            drop_timer: DropTimer::new(config.drop_interval_ms),
            generator,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[cfg(test)]
    pub(crate) fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    #[must_use]
    pub fn active_piece(&self) -> &ActivePiece {
        &self.piece
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn drop_timer(&self) -> &DropTimer {
        &self.drop_timer
    }

    /// Replaces the active piece if it fits at its position.
    pub fn set_active_piece(&mut self, piece: ActivePiece) -> Result<(), PieceCollisionError> {
        if self.arena.collides(&piece) {
            return Err(PieceCollisionError);
        }
        self.piece = piece;
        Ok(())
    }

    /// Frame entry point: advances the gravity timer and drops the piece when due.
    pub fn on_frame(&mut self, timestamp_ms: u64) -> Option<DropOutcome> {
        self.drop_timer
            .advance(timestamp_ms)
            .then(|| self.drop_piece())
    }

    /// Applies a player command. Returns the lock event if the command locked the piece.
    pub fn apply(&mut self, command: Command) -> Option<LockEvent> {
        match command {
            Command::MoveLeft => _ = self.move_piece(MoveDirection::Left),
            Command::MoveRight => _ = self.move_piece(MoveDirection::Right),
            Command::RotateCw => _ = self.rotate(RotationDirection::Clockwise),
            Command::RotateCcw => _ = self.rotate(RotationDirection::CounterClockwise),
            Command::SoftDrop => match self.drop_piece() {
                DropOutcome::Moved => {}
                DropOutcome::Locked(event) => return Some(event),
            },
        }
        None
    }

    /// Moves the piece down one row, locking it if it cannot move.
    ///
    /// On lock the piece is merged at its last valid position, the next piece
    /// is spawned, and full rows are swept. Gravity ticks and manual drops
    /// both land here, and both restart the gravity timer.
    pub fn drop_piece(&mut self) -> DropOutcome {
        self.drop_timer.restart();

        self.piece.shift(0, 1);
        if !self.arena.collides(&self.piece) {
            return DropOutcome::Moved;
        }
        self.piece.shift(0, -1);

        self.arena.merge_piece(&self.piece);
        let spawn = self.reset();
        let sweep = self.sweep();
        DropOutcome::Locked(LockEvent {
            rows_cleared: sweep.rows_cleared,
            points: sweep.points,
            score: self.score,
            game_over: spawn.is_game_over(),
        })
    }

    /// Moves the piece one column. A colliding move is reverted.
    pub fn move_piece(&mut self, direction: MoveDirection) -> Result<(), PieceCollisionError> {
        self.piece.shift(direction.dx(), 0);
        if self.arena.collides(&self.piece) {
            self.piece.shift(-direction.dx(), 0);
            return Err(PieceCollisionError);
        }
        Ok(())
    }

    /// Rotates the piece, kicking it sideways if the rotated shape collides.
    ///
    /// Kicks shift the piece by steps of +1, -2, +3, ... and the search stops
    /// as soon as the next step would exceed the shape's width. Relative to
    /// the original column that tests +1 for O, +1 and -1 for the 3-wide
    /// shapes, and +1, -1 and +2 for I. If none fits, the rotation is undone
    /// and the original position restored.
    pub fn rotate(&mut self, direction: RotationDirection) -> Result<(), PieceCollisionError> {
        let original_position = self.piece.position();
        let max_offset = to_coord(self.piece.shape().width());

        self.piece.rotate(direction);
        let mut offset: i32 = 1;
        while self.arena.collides(&self.piece) {
            self.piece.shift(offset, 0);
            offset = -(offset + offset.signum());
            if offset.abs() > max_offset {
                self.piece.rotate(direction.opposite());
                self.piece.set_position(original_position);
                return Err(PieceCollisionError);
            }
        }
        Ok(())
    }

    /// Spawns a random piece at the top centre.
    ///
    /// If it collides immediately the game is over: the arena is cleared and
    /// the score zeroed. The new piece stays where it spawned.
    pub fn reset(&mut self) -> SpawnOutcome {
        let kind = self.generator.next_kind();
        self.spawn_piece(kind)
    }

    /// Like [`Self::reset`], with a chosen piece kind.
    pub fn spawn_piece(&mut self, kind: PieceKind) -> SpawnOutcome {
        self.piece = ActivePiece::spawn(kind, self.arena.width());
        if self.arena.collides(&self.piece) {
            self.arena.clear();
            self.score = 0;
            return SpawnOutcome::GameOver;
        }
        SpawnOutcome::Spawned
    }

    /// Removes full rows, bottom-up, and scores them.
    ///
    /// The n-th row cleared in one call is worth `10 * 2^(n-1)` points. After
    /// a removal the same row index is examined again, since the row above has
    /// moved into it. Row 0 is only checked when
    /// [`GameConfig::sweep_top_row`] is set.
    pub fn sweep(&mut self) -> SweepResult {
        let lowest_row = usize::from(!self.config.sweep_top_row);
        let mut multiplier: u64 = 1;
        let mut result = SweepResult::default();

        let mut y = self.arena.height();
        while y > lowest_row {
            let row = y - 1;
            if !self.arena.is_row_filled(row) {
                y -= 1;
                continue;
            }
            self.arena.remove_row(row);
            let points = multiplier.saturating_mul(ROW_POINTS);
            result.rows_cleared += 1;
            result.points = result.points.saturating_add(points);
            self.score = self.score.saturating_add(points);
            multiplier = multiplier.saturating_mul(2);
        }
        result
    }
}

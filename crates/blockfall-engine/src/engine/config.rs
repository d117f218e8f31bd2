use serde::{Deserialize, Serialize};

use crate::{ConfigError, core::MAX_SHAPE_SIZE};

/// Static game parameters.
///
/// Deserializes from partial documents: missing fields take their defaults.
///
/// # Example
///
/// ```
/// use blockfall_engine::GameConfig;
///
/// let config: GameConfig = serde_json::from_str(r#"{ "width": 10 }"#).unwrap();
/// assert_eq!(config.width, 10);
/// assert_eq!(config.height, 20);
/// assert_eq!(config.drop_interval_ms, 1000);
/// assert!(!config.sweep_top_row);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Arena width in cells.
    pub width: usize,
    /// Arena height in cells.
    pub height: usize,
    /// Gravity interval in milliseconds.
    pub drop_interval_ms: u64,
    /// Whether the sweep also checks row 0 for completion.
    ///
    /// Off by default: the topmost row never triggers a clear.
    pub sweep_top_row: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            drop_interval_ms: Self::DEFAULT_DROP_INTERVAL_MS,
            sweep_top_row: false,
        }
    }
}

impl GameConfig {
    pub const DEFAULT_WIDTH: usize = 12;
    pub const DEFAULT_HEIGHT: usize = 20;
    pub const DEFAULT_DROP_INTERVAL_MS: u64 = 1000;

    /// Smallest arena side that fits every piece.
    pub const MIN_ARENA_SIDE: usize = MAX_SHAPE_SIZE;
    pub const MAX_ARENA_SIDE: usize = 256;

    pub fn validate(&self) -> Result<(), ConfigError> {
        let side_range = Self::MIN_ARENA_SIDE..=Self::MAX_ARENA_SIDE;
        if !side_range.contains(&self.width) || !side_range.contains(&self.height) {
            return Err(ConfigError::InvalidArenaSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        Ok(())
    }
}
